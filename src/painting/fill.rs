//! Color selection at leaf regions
//!
//! A fill policy chooses one palette color per leaf and paints the leaf's
//! interior, leaving its one-pixel border as it was.

use crate::canvas::{Canvas, Color, PALETTE, Region};
use crate::painting::random::RandomSource;

/// Strategy for coloring a leaf region
pub trait FillPolicy {
    /// Choose a palette color for `region` on a canvas of the given size
    fn choose(
        &self,
        region: &Region,
        canvas_width: usize,
        canvas_height: usize,
        rng: &mut dyn RandomSource,
    ) -> Color;

    /// Choose a color for `region` and paint its interior, returning the color used
    fn fill(&self, canvas: &mut Canvas, region: &Region, rng: &mut dyn RandomSource) -> Color {
        let color = self.choose(region, canvas.width(), canvas.height(), rng);
        canvas.fill_interior(region, color);
        color
    }
}

/// Every palette color with equal probability, independent of position
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UniformFill;

impl FillPolicy for UniformFill {
    fn choose(
        &self,
        _region: &Region,
        _canvas_width: usize,
        _canvas_height: usize,
        rng: &mut dyn RandomSource,
    ) -> Color {
        palette_color(rng.next_in_range(0, PALETTE.len() - 1))
    }
}

/// Palette color at `index`
///
/// Callers draw `index` from `0..PALETTE.len()`; an out-of-range index is a
/// bug in the random source and trips a debug assertion.
pub fn palette_color(index: usize) -> Color {
    debug_assert!(
        index < PALETTE.len(),
        "palette index {index} out of range 0..{}",
        PALETTE.len()
    );
    PALETTE.get(index).copied().unwrap_or(Color::White)
}

/// Position-dependent color probabilities for one region
///
/// The weights are the four products of `{xc, 1 - xc} x {yc, 1 - yc}` for the
/// normalized region center, so they always sum to one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorWeights {
    /// Weight of red, strongest at the top-left
    pub red: f64,
    /// Weight of cyan, strongest at the bottom-right
    pub blue: f64,
    /// Weight of yellow, strongest at the top-right
    pub yellow: f64,
    /// Weight of white, strongest at the bottom-left
    pub white: f64,
}

impl ColorWeights {
    /// Weights for a normalized center `(xc, yc)`
    pub fn at(xc: f64, yc: f64) -> Self {
        Self {
            red: (1.0 - xc) * (1.0 - yc),
            blue: xc * yc,
            yellow: (1.0 - yc) * xc,
            white: yc * (1.0 - xc),
        }
    }

    /// Weights for the center of `region`
    pub fn for_region(region: &Region, canvas_width: usize, canvas_height: usize) -> Self {
        let (xc, yc) = region.normalized_center(canvas_width, canvas_height);
        Self::at(xc, yc)
    }

    /// Sum of all four weights
    pub fn total(&self) -> f64 {
        self.red + self.blue + self.yellow + self.white
    }

    /// Map a uniform draw `u` in `[0, 1)` onto the cumulative weights
    ///
    /// Order is red, blue, yellow, then white for whatever remains.
    pub fn select(&self, u: f64) -> Color {
        let mut cumulative = self.red;
        if u < cumulative {
            return Color::Red;
        }
        cumulative += self.blue;
        if u < cumulative {
            return Color::Cyan;
        }
        cumulative += self.yellow;
        if u < cumulative {
            return Color::Yellow;
        }
        Color::White
    }
}

/// Colors biased by where the region sits on the canvas
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeightedFill;

impl FillPolicy for WeightedFill {
    fn choose(
        &self,
        region: &Region,
        canvas_width: usize,
        canvas_height: usize,
        rng: &mut dyn RandomSource,
    ) -> Color {
        ColorWeights::for_region(region, canvas_width, canvas_height).select(rng.next_unit())
    }
}
