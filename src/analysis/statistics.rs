//! Summary statistics of a finished painting

use crate::canvas::{Canvas, Color, PALETTE};
use std::fmt;
use crate::painting::Painting;

/// Per-color tallies for one painting
#[derive(Debug, Clone, PartialEq)]
pub struct PaintingSummary {
    /// Canvas width in pixels
    pub width: usize,
    /// Canvas height in pixels
    pub height: usize,
    /// Number of filled leaf regions
    pub leaf_count: usize,
    /// Number of cuts made while subdividing
    pub split_count: usize,
    /// Deepest recursion level reached
    pub max_depth: usize,
    /// Leaves filled with each palette color, in palette order
    pub leaves_per_color: [usize; 4],
    /// Cells holding each palette color, in palette order
    pub cells_per_color: [usize; 4],
    /// Cells holding no palette color (grid lines and untouched background)
    pub line_cells: usize,
}

impl PaintingSummary {
    /// Tally the colors of `canvas` as painted by `painting`
    pub fn from_painting(canvas: &Canvas, painting: &Painting) -> Self {
        let mut leaves_per_color = [0; 4];
        for leaf in &painting.leaves {
            increment(&mut leaves_per_color, leaf.color);
        }

        let mut cells_per_color = [0; 4];
        let mut line_cells = 0;
        for &cell in canvas.cells() {
            if !increment(&mut cells_per_color, cell) {
                line_cells += 1;
            }
        }

        Self {
            width: canvas.width(),
            height: canvas.height(),
            leaf_count: painting.leaves.len(),
            split_count: painting.splits.len(),
            max_depth: painting.max_depth,
            leaves_per_color,
            cells_per_color,
            line_cells,
        }
    }

    /// Total number of canvas cells
    pub const fn total_cells(&self) -> usize {
        self.width * self.height
    }

    /// Fraction of cells covered by palette colors
    pub fn coverage(&self) -> f64 {
        let total = self.total_cells();
        if total == 0 {
            return 0.0;
        }
        (total - self.line_cells) as f64 / total as f64
    }

    /// Palette colors paired with their leaf and cell counts
    pub fn per_color(&self) -> impl Iterator<Item = (Color, usize, usize)> + '_ {
        PALETTE
            .iter()
            .zip(self.leaves_per_color.iter().zip(&self.cells_per_color))
            .map(|(&color, (&leaves, &cells))| (color, leaves, cells))
    }
}

impl fmt::Display for PaintingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "canvas {}x{}: {} leaves, {} splits, depth {}",
            self.width, self.height, self.leaf_count, self.split_count, self.max_depth
        )?;
        for (color, leaves, cells) in self.per_color() {
            writeln!(f, "  {:<7} {leaves:>4} leaves {cells:>9} px", color.name())?;
        }
        writeln!(f, "  lines   {:>21} px", self.line_cells)?;
        writeln!(f, "  coverage {:.1}%", self.coverage() * 100.0)
    }
}

/// Position of `color` in the fill palette
pub fn palette_index(color: Color) -> Option<usize> {
    PALETTE.iter().position(|&c| c == color)
}

// Bump the tally slot of a palette color; false for non-palette colors
fn increment(tally: &mut [usize; 4], color: Color) -> bool {
    let Some(index) = palette_index(color) else {
        return false;
    };
    if let Some(slot) = tally.get_mut(index) {
        *slot += 1;
    }
    true
}
