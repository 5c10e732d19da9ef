//! Injectable random source for split points and color choices

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Source of the two kinds of randomness the painter consumes
pub trait RandomSource {
    /// Uniform integer in `min..=max`
    ///
    /// Callers guarantee `min <= max`.
    fn next_in_range(&mut self, min: usize, max: usize) -> usize;

    /// Uniform float in `[0, 1)`
    fn next_unit(&mut self) -> f64;
}

/// Seeded random source for reproducible paintings
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Create a deterministic random source
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a random source seeded from the operating system
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_in_range(&mut self, min: usize, max: usize) -> usize {
        if min >= max {
            return min;
        }
        self.rng.random_range(min..=max)
    }

    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_in_range(&mut self, min: usize, max: usize) -> usize {
        (**self).next_in_range(min, max)
    }

    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}
