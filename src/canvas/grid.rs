//! Canvas storage and rectangular regions
//!
//! The canvas is a row-major grid indexed `[row, col]`, i.e. `[y, x]`.
//! Regions use half-open pixel bounds `x1..x2` by `y1..y2`.

use ndarray::{Array2, Axis, Slice};
use std::ops::Range;

use crate::canvas::color::Color;
use crate::io::error::{Result, invalid_parameter};

/// Half-open rectangle of canvas pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    /// Left edge (inclusive)
    pub x1: usize,
    /// Right edge (exclusive)
    pub x2: usize,
    /// Top edge (inclusive)
    pub y1: usize,
    /// Bottom edge (exclusive)
    pub y2: usize,
}

impl Region {
    /// Create a region from its horizontal and vertical bounds
    pub const fn new(x1: usize, x2: usize, y1: usize, y2: usize) -> Self {
        Self { x1, x2, y1, y2 }
    }

    /// Horizontal extent in pixels
    pub const fn width(&self) -> usize {
        self.x2.saturating_sub(self.x1)
    }

    /// Vertical extent in pixels
    pub const fn height(&self) -> usize {
        self.y2.saturating_sub(self.y1)
    }

    /// Region center normalized by the canvas size, both components in `[0, 1]`
    pub fn normalized_center(&self, canvas_width: usize, canvas_height: usize) -> (f64, f64) {
        let xc = (self.x1 + self.x2) as f64 / 2.0 / canvas_width.max(1) as f64;
        let yc = (self.y1 + self.y2) as f64 / 2.0 / canvas_height.max(1) as f64;
        (xc.clamp(0.0, 1.0), yc.clamp(0.0, 1.0))
    }

    /// Row and column spans of the region inset by one pixel, clipped to the canvas
    ///
    /// The one-pixel border is what separates neighbouring fills.
    pub fn interior(
        &self,
        canvas_width: usize,
        canvas_height: usize,
    ) -> (Range<usize>, Range<usize>) {
        let rows = (self.y1 + 1)..self.y2.saturating_sub(1).min(canvas_height);
        let cols = (self.x1 + 1)..self.x2.saturating_sub(1).min(canvas_width);
        (rows, cols)
    }

    /// Whether `(x, y)` lies strictly inside the region's border
    pub const fn interior_contains(&self, x: usize, y: usize) -> bool {
        x > self.x1 && x + 1 < self.x2 && y > self.y1 && y + 1 < self.y2
    }
}

/// Mutable grid of colors painted in place
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Canvas {
    cells: Array2<Color>,
}

impl Canvas {
    /// Create a canvas covered in background ink
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, Color::Black)
    }

    /// Create a canvas with every cell set to `color`
    pub fn filled(width: usize, height: usize, color: Color) -> Self {
        Self {
            cells: Array2::from_elem((height, width), color),
        }
    }

    /// Build a canvas from rows of colors
    ///
    /// An empty row list yields an empty canvas, which painters reject.
    ///
    /// # Errors
    ///
    /// Returns an error if the rows do not all have the same length
    pub fn from_rows(rows: Vec<Vec<Color>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        if let Some((index, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(invalid_parameter(
                "rows",
                &format!("row {index} has {} cells", row.len()),
                &format!("every row must have {width} cells"),
            ));
        }

        let flat: Vec<Color> = rows.into_iter().flatten().collect();
        let cells = Array2::from_shape_vec((height, width), flat).map_err(|e| {
            invalid_parameter("rows", &format!("{height}x{width}"), &e)
        })?;

        Ok(Self { cells })
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Whether the canvas has no cells at all
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The region covering the whole canvas
    pub fn full_region(&self) -> Region {
        Region::new(0, self.width(), 0, self.height())
    }

    /// Color at column `x`, row `y`
    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        self.cells.get([y, x]).copied()
    }

    /// Underlying cell array, indexed `[row, col]`
    pub const fn cells(&self) -> &Array2<Color> {
        &self.cells
    }

    /// Number of cells holding `color`
    pub fn count(&self, color: Color) -> usize {
        self.cells.iter().filter(|&&c| c == color).count()
    }

    /// Paint every interior cell of `region` with `color`
    pub fn fill_interior(&mut self, region: &Region, color: Color) {
        let (rows, cols) = region.interior(self.width(), self.height());
        if rows.is_empty() || cols.is_empty() {
            return;
        }
        let mut block = self.cells.slice_axis_mut(Axis(0), Slice::from(rows));
        block.slice_axis_inplace(Axis(1), Slice::from(cols));
        block.fill(color);
    }
}
