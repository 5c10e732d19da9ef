//! Mondrian-style abstract art by recursive canvas subdivision
//!
//! A canvas is split into ever smaller rectangles until each is small relative
//! to the canvas, then every leaf rectangle is filled with one palette color.
//! The one-pixel border of each leaf is left unpainted and forms the grid lines.

#![forbid(unsafe_code)]

/// Post-painting color and structure statistics
pub mod analysis;
/// Canvas grid, regions and colors
pub mod canvas;
/// Configuration, errors, logging and command-line handling
pub mod io;
/// Subdivision, fill policies and painting entry points
pub mod painting;

pub use canvas::{Canvas, Color, Region};
pub use io::error::{PaintError, Result};
pub use painting::{Mondrian, Painting};
