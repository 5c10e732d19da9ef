//! Canvas storage, regions and colors

/// Cell colors and the fill palette
pub mod color;
/// Canvas grid and rectangular regions
pub mod grid;

pub use color::{Color, PALETTE};
pub use grid::{Canvas, Region};
