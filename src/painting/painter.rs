//! Top-level painting entry points with canvas validation

use crate::canvas::{Canvas, Color, Region};
use crate::io::configuration::{MIN_PAINTING_SIZE, PaintConfig};
use crate::io::error::{Result, invalid_input};
use crate::painting::fill::{FillPolicy, UniformFill, WeightedFill};
use crate::painting::random::{RandomSource, SeededRandom};
use crate::painting::subdivider::{Split, Subdivider};

/// A leaf region together with the color it was filled with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Leaf {
    /// Bounds of the leaf, border included
    pub region: Region,
    /// Palette color written to the leaf interior
    pub color: Color,
}

/// Record of one painting run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Painting {
    /// Filled leaves in recursion order
    pub leaves: Vec<Leaf>,
    /// Cuts made while subdividing
    pub splits: Vec<Split>,
    /// Deepest recursion level reached
    pub max_depth: usize,
}

/// Check that a canvas is present and at least the minimum paintable size
///
/// # Errors
///
/// Returns [`crate::PaintError::InvalidInput`] if the canvas is empty or either
/// dimension is below [`MIN_PAINTING_SIZE`]
pub fn validate_canvas(canvas: &Canvas) -> Result<()> {
    let (width, height) = (canvas.width(), canvas.height());
    if canvas.is_empty() {
        return Err(invalid_input(width, height, &"canvas has no pixels"));
    }
    if width < MIN_PAINTING_SIZE || height < MIN_PAINTING_SIZE {
        return Err(invalid_input(
            width,
            height,
            &format!("both dimensions must be at least {MIN_PAINTING_SIZE} pixels"),
        ));
    }
    Ok(())
}

/// Mondrian painter owning its random source
#[derive(Debug, Clone)]
pub struct Mondrian<R = SeededRandom> {
    rng: R,
}

impl Mondrian<SeededRandom> {
    /// Create a painter from a configuration
    pub fn new(config: PaintConfig) -> Self {
        Self {
            rng: config.random_source(),
        }
    }

    /// Create a painter with a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(PaintConfig::seeded(seed))
    }
}

impl<R: RandomSource> Mondrian<R> {
    /// Create a painter drawing from an arbitrary random source
    pub const fn with_source(rng: R) -> Self {
        Self { rng }
    }

    /// Consume the painter, returning its random source
    pub fn into_source(self) -> R {
        self.rng
    }

    /// Paint `canvas` with every leaf colored by `policy`
    ///
    /// The canvas is subdivided first and the leaves are filled afterwards in
    /// recursion order.
    ///
    /// # Errors
    ///
    /// Returns [`crate::PaintError::InvalidInput`] if the canvas fails
    /// [`validate_canvas`]; the canvas is left untouched in that case
    pub fn paint<P: FillPolicy + ?Sized>(
        &mut self,
        canvas: &mut Canvas,
        policy: &P,
    ) -> Result<Painting> {
        validate_canvas(canvas)?;

        let layout = Subdivider::for_canvas(canvas).layout(&mut self.rng);
        let leaves = layout
            .leaves
            .iter()
            .map(|region| Leaf {
                region: *region,
                color: policy.fill(canvas, region, &mut self.rng),
            })
            .collect();

        Ok(Painting {
            leaves,
            splits: layout.splits,
            max_depth: layout.max_depth,
        })
    }

    /// Paint with uniformly random leaf colors
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas fails [`validate_canvas`]
    pub fn paint_uniform(&mut self, canvas: &mut Canvas) -> Result<Painting> {
        self.paint(canvas, &UniformFill)
    }

    /// Paint with leaf colors weighted by their position on the canvas
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas fails [`validate_canvas`]
    pub fn paint_weighted(&mut self, canvas: &mut Canvas) -> Result<Painting> {
        self.paint(canvas, &WeightedFill)
    }
}
