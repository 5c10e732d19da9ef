//! Recursive subdivision painting
//!
//! This module contains:
//! - The injectable random source
//! - The recursive subdivider producing leaf regions
//! - Fill policies coloring those leaves
//! - The painter tying them together

/// Leaf color selection policies
pub mod fill;
/// Validated painting entry points
pub mod painter;
/// Random source abstraction and seeded implementation
pub mod random;
/// Recursive region subdivision
pub mod subdivider;

pub use fill::{FillPolicy, UniformFill, WeightedFill};
pub use painter::{Leaf, Mondrian, Painting};
pub use random::{RandomSource, SeededRandom};
