//! Algorithm constants and runtime configuration defaults

use crate::painting::random::SeededRandom;

// Canvas validation
/// Minimum width and height of a paintable canvas
pub const MIN_PAINTING_SIZE: usize = 300;

// Subdivision geometry
/// Shortest side a split may leave on either half
pub const SMALLEST_SUBSECTION: usize = 10;
/// Regions longer than `canvas_dimension / SUBDIVISION_DIVISOR` keep splitting
pub const SUBDIVISION_DIVISOR: usize = 4;

// Default values for configurable parameters
/// Default canvas width for the command line
pub const DEFAULT_WIDTH: usize = 800;
/// Default canvas height for the command line
pub const DEFAULT_HEIGHT: usize = 600;

/// Runtime configuration for a painter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaintConfig {
    /// Seed for reproducible paintings; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl PaintConfig {
    /// Configuration with a fixed seed
    pub const fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// Build the random source described by this configuration
    pub fn random_source(&self) -> SeededRandom {
        self.seed
            .map_or_else(SeededRandom::from_entropy, SeededRandom::new)
    }
}
