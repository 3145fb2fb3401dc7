//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct is the single random stream of a run. The engine
//! owns one instance and lends it to every randomised collaborator (gene factories,
//! mutations, viable crossovers), so a run built from a fixed seed is reproducible.
//!
//! ## Example
//!
//! ```rust
//! use genetic_engine::rng::RandomNumberGenerator;
//!
//! let mut a = RandomNumberGenerator::from_seed(7);
//! let mut b = RandomNumberGenerator::from_seed(7);
//!
//! assert_eq!(a.gen_index(10), b.gen_index(10));
//! assert_eq!(a.gen_probability(), b.gen_probability());
//! ```

use rand::{
    distributions::uniform::{SampleRange, SampleUniform},
    rngs::StdRng,
    Rng, SeedableRng,
};

/// A wrapper around the `rand` crate's `StdRng` that provides the draws the
/// engine needs.
#[derive(Clone, Debug)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is useful for reproducible runs, tests and benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generates a random value in the given range.
    ///
    /// # Panics
    ///
    /// Panics if the range is empty, like [`Rng::gen_range`].
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: SampleUniform,
        R: SampleRange<T>,
    {
        self.rng.gen_range(range)
    }

    /// Draws an index uniformly from `[0, upper)`.
    ///
    /// Returns 0 when `upper` is 0 so callers that already validated a
    /// non-empty population never hit an empty range.
    pub fn gen_index(&mut self, upper: usize) -> usize {
        if upper == 0 {
            return 0;
        }
        self.rng.gen_range(0..upper)
    }

    /// Draws a uniform probability from `[0, 1)`.
    pub fn gen_probability(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}
