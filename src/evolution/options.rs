//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct is the configuration surface of the engine:
//! population size, mutation rate, generation limit, how parents are selected,
//! how much is logged and when fitness evaluation goes parallel.
//!
//! ## Example
//!
//! ```rust
//! use genetic_engine::evolution::options::{EvolutionOptions, LogLevel};
//! use genetic_engine::selection::SelectionMode;
//!
//! // Positional constructor for the core parameters
//! let options = EvolutionOptions::new(50, 0.05, 200);
//! assert!(options.validate().is_ok());
//!
//! // Fluent builder for everything else
//! let options = EvolutionOptions::builder()
//!     .population_size(20)
//!     .mutation_rate(0.1)
//!     .max_iter(30)
//!     .selection(SelectionMode::Tournament)
//!     .log_level(LogLevel::Minimal)
//!     .build();
//! assert_eq!(options.get_population_size(), 20);
//! ```
//!
//! ### `LogLevel`
//!
//! - `Verbose`: every generation logs best, worst and average fitness and the best individual.
//! - `Minimal`: every generation logs its number and best fitness.
//! - `None`: no per-generation logging.

use crate::{
    error::{GeneticError, Result},
    selection::{SelectionMode, DEFAULT_TOURNAMENT_SIZE},
};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Verbose,
    Minimal,
    None,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionOptions {
    population_size: usize,
    mutation_rate: f64,
    max_iter: usize,
    selection: SelectionMode,
    tournament_size: usize,
    log_level: LogLevel,
    /// Minimum population size for parallel fitness evaluation
    parallel_threshold: usize,
    /// Check every new individual against the viability condition
    verify_viability: bool,
}

impl EvolutionOptions {
    pub fn new(population_size: usize, mutation_rate: f64, max_iter: usize) -> Self {
        Self {
            population_size,
            mutation_rate,
            max_iter,
            ..Self::default()
        }
    }

    /// Checks the invariants the engine relies on.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if the population size, generation
    /// limit or tournament size is zero, or if the mutation rate is outside `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(GeneticError::Configuration(
                "Population size cannot be zero".to_string(),
            ));
        }

        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(GeneticError::Configuration(format!(
                "Mutation rate must be within [0, 1], got {}",
                self.mutation_rate
            )));
        }

        if self.max_iter == 0 {
            return Err(GeneticError::Configuration(
                "Maximum number of generations cannot be zero".to_string(),
            ));
        }

        if self.tournament_size == 0 {
            return Err(GeneticError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    pub fn get_max_iter(&self) -> usize {
        self.max_iter
    }

    pub fn get_selection(&self) -> SelectionMode {
        self.selection
    }

    pub fn get_tournament_size(&self) -> usize {
        self.tournament_size
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level
    }

    /// Returns the minimum population size for parallel fitness evaluation.
    pub fn get_parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    pub fn get_verify_viability(&self) -> bool {
        self.verify_viability
    }

    pub fn set_population_size(&mut self, population_size: usize) {
        self.population_size = population_size;
    }

    pub fn set_mutation_rate(&mut self, mutation_rate: f64) {
        self.mutation_rate = mutation_rate;
    }

    pub fn set_max_iter(&mut self, max_iter: usize) {
        self.max_iter = max_iter;
    }

    pub fn set_selection(&mut self, selection: SelectionMode) {
        self.selection = selection;
    }

    pub fn set_tournament_size(&mut self, tournament_size: usize) {
        self.tournament_size = tournament_size;
    }

    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    pub fn set_parallel_threshold(&mut self, threshold: usize) {
        self.parallel_threshold = threshold;
    }

    pub fn set_verify_viability(&mut self, verify_viability: bool) {
        self.verify_viability = verify_viability;
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            population_size: 100,
            mutation_rate: 0.01,
            max_iter: 100,
            selection: SelectionMode::default(),
            tournament_size: DEFAULT_TOURNAMENT_SIZE,
            log_level: LogLevel::None,
            parallel_threshold: 1000,
            verify_viability: false,
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Unset fields take the values of `EvolutionOptions::default()`.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    population_size: Option<usize>,
    mutation_rate: Option<f64>,
    max_iter: Option<usize>,
    selection: Option<SelectionMode>,
    tournament_size: Option<usize>,
    log_level: Option<LogLevel>,
    parallel_threshold: Option<usize>,
    verify_viability: Option<bool>,
}

impl EvolutionOptionsBuilder {
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    pub fn mutation_rate(mut self, value: f64) -> Self {
        self.mutation_rate = Some(value);
        self
    }

    pub fn max_iter(mut self, value: usize) -> Self {
        self.max_iter = Some(value);
        self
    }

    pub fn selection(mut self, value: SelectionMode) -> Self {
        self.selection = Some(value);
        self
    }

    pub fn tournament_size(mut self, value: usize) -> Self {
        self.tournament_size = Some(value);
        self
    }

    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    pub fn parallel_threshold(mut self, value: usize) -> Self {
        self.parallel_threshold = Some(value);
        self
    }

    pub fn verify_viability(mut self, value: bool) -> Self {
        self.verify_viability = Some(value);
        self
    }

    /// Builds the `EvolutionOptions` instance. Validation happens when the
    /// engine is constructed, or explicitly through `EvolutionOptions::validate`.
    pub fn build(self) -> EvolutionOptions {
        let defaults = EvolutionOptions::default();
        EvolutionOptions {
            population_size: self.population_size.unwrap_or(defaults.population_size),
            mutation_rate: self.mutation_rate.unwrap_or(defaults.mutation_rate),
            max_iter: self.max_iter.unwrap_or(defaults.max_iter),
            selection: self.selection.unwrap_or(defaults.selection),
            tournament_size: self.tournament_size.unwrap_or(defaults.tournament_size),
            log_level: self.log_level.unwrap_or(defaults.log_level),
            parallel_threshold: self
                .parallel_threshold
                .unwrap_or(defaults.parallel_threshold),
            verify_viability: self.verify_viability.unwrap_or(defaults.verify_viability),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let options = EvolutionOptions::default();
        assert!(options.validate().is_ok());
        assert_eq!(options.get_tournament_size(), 8);
        assert_eq!(options.get_selection(), SelectionMode::RouletteGated);
        assert_eq!(options.get_log_level(), LogLevel::None);
    }

    #[test]
    fn test_builder_overrides_only_given_fields() {
        let options = EvolutionOptions::builder()
            .population_size(4)
            .mutation_rate(0.0)
            .max_iter(50)
            .verify_viability(true)
            .build();

        assert_eq!(options.get_population_size(), 4);
        assert_eq!(options.get_mutation_rate(), 0.0);
        assert_eq!(options.get_max_iter(), 50);
        assert!(options.get_verify_viability());
        assert_eq!(options.get_parallel_threshold(), 1000);
    }

    #[test]
    fn test_zero_population_is_rejected() {
        let options = EvolutionOptions::new(0, 0.1, 10);
        match options.validate() {
            Err(GeneticError::Configuration(msg)) => {
                assert!(msg.contains("Population size cannot be zero"))
            }
            other => panic!("Expected Configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_mutation_rate_bounds() {
        assert!(EvolutionOptions::new(5, 0.0, 10).validate().is_ok());
        assert!(EvolutionOptions::new(5, 1.0, 10).validate().is_ok());
        assert!(EvolutionOptions::new(5, -0.01, 10).validate().is_err());
        assert!(EvolutionOptions::new(5, 1.01, 10).validate().is_err());
        assert!(EvolutionOptions::new(5, f64::NAN, 10).validate().is_err());
    }

    #[test]
    fn test_zero_generations_and_tournament_are_rejected() {
        assert!(EvolutionOptions::new(5, 0.1, 0).validate().is_err());

        let mut options = EvolutionOptions::new(5, 0.1, 10);
        options.set_tournament_size(0);
        assert!(options.validate().is_err());
    }
}
