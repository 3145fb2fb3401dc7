//! # Error Types
//!
//! This module defines the error type returned by the genetic algorithm engine.
//! Malformed configuration is reported when the engine is built; a collaborator
//! that breaks its contract during a run stops the run with a descriptive error.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use genetic_engine::error::{GeneticError, Result};
//!
//! fn check_rate(rate: f64) -> Result<f64> {
//!     if !(0.0..=1.0).contains(&rate) {
//!         return Err(GeneticError::Configuration(format!("bad rate {}", rate)));
//!     }
//!     Ok(rate)
//! }
//!
//! assert!(check_rate(0.5).is_ok());
//! assert!(check_rate(1.5).is_err());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use genetic_engine::error::{GeneticError, OptionExt};
//!
//! fn first_fitness(fitness: &[f64]) -> genetic_engine::error::Result<f64> {
//!     fitness.first().copied().ok_or_else_genetic(|| GeneticError::EmptyPopulation)
//! }
//!
//! assert!(first_fitness(&[]).is_err());
//! ```

use thiserror::Error;

/// Represents errors that can occur while building or running the engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeneticError {
    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Viability checking was requested but one of the viable capabilities is absent.
    #[error("Configuration error: missing viable capability `{0}`")]
    MissingCapability(&'static str),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// A collaborator produced an individual whose length differs from the population's.
    #[error("Strategy contract violation: {context} produced an individual of length {actual}, expected {expected}")]
    LengthMismatch {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// An individual failed the viability condition while viability verification was on.
    #[error("Strategy contract violation: non-viable individual - {0}")]
    NotViable(String),

    /// Error that occurs when NaN values are encountered.
    #[error("Invalid numeric value: {0}")]
    InvalidNumericValue(String),

    /// Error that occurs when an evolution process fails.
    #[error("Evolution error: {0}")]
    Evolution(String),
}

/// A specialized Result type for genetic algorithm operations.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, GeneticError>` using a closure
    /// to generate the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_capability_names_member() {
        let err = GeneticError::MissingCapability("viable_crossover");
        assert!(err.to_string().contains("viable_crossover"));
    }

    #[test]
    fn test_length_mismatch_message() {
        let err = GeneticError::LengthMismatch {
            context: "viable crossover",
            expected: 4,
            actual: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("viable crossover"));
        assert!(msg.contains("length 3"));
        assert!(msg.contains("expected 4"));
    }

    #[test]
    fn test_option_ext() {
        let some: Option<i32> = Some(3);
        assert_eq!(some.ok_or_else_genetic(|| GeneticError::EmptyPopulation), Ok(3));

        let none: Option<i32> = None;
        assert_eq!(
            none.ok_or_else_genetic(|| GeneticError::EmptyPopulation),
            Err(GeneticError::EmptyPopulation)
        );
    }
}
