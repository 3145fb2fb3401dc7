//! # Parent selection
//!
//! Both strategies return a pair of indices into the current population. The two
//! indices may be equal; breeding an individual with itself is allowed.
//!
//! ```rust
//! use genetic_engine::rng::RandomNumberGenerator;
//! use genetic_engine::selection::SelectionMode;
//!
//! let fitness = vec![4.0, 1.0, 9.0, 2.0];
//! let total: f64 = fitness.iter().sum();
//! let mut rng = RandomNumberGenerator::from_seed(1);
//!
//! let (a, b) = SelectionMode::default()
//!     .select_parents(&fitness, total, 8, &mut rng)
//!     .unwrap();
//! assert!(a < fitness.len() && b < fitness.len());
//! ```
pub mod roulette;
pub mod tournament;

use crate::{
    error::{GeneticError, Result},
    rng::RandomNumberGenerator,
};

pub use tournament::DEFAULT_TOURNAMENT_SIZE;

/// How parents are chosen each time a child is bred.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// Roulette when the fitness of the population's first member is
    /// non-negative, tournament otherwise.
    #[default]
    RouletteGated,
    /// Always roulette, whatever the signs of the fitness values.
    Roulette,
    /// Always tournament.
    Tournament,
}

impl SelectionMode {
    /// Returns `(parent_1, parent_2)` indices.
    ///
    /// `total_fitness` is the plain sum of `fitness` for the generation.
    pub fn select_parents(
        &self,
        fitness: &[f64],
        total_fitness: f64,
        tournament_size: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<(usize, usize)> {
        let first = fitness.first().ok_or(GeneticError::EmptyPopulation)?;

        let use_roulette = match self {
            SelectionMode::RouletteGated => *first >= 0.0,
            SelectionMode::Roulette => true,
            SelectionMode::Tournament => false,
        };

        if use_roulette {
            Ok(roulette::select_pair(fitness, total_fitness, rng))
        } else {
            Ok(tournament::select_pair(fitness, tournament_size, rng))
        }
    }
}
