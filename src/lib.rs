pub mod error;
pub mod evolution;
pub mod genome;
pub mod rng;
pub mod selection;
pub mod strategy;

// Re-export commonly used types for convenience
pub use error::{GeneticError, OptionExt, Result};
pub use evolution::{
    EvolutionOptions, FitnessFunction, FitnessThreshold, GeneticAlgorithm, LogLevel, RunResult,
    StopReason, TerminationCondition,
};
pub use genome::{Gene, GeneFactory, GeneSequenceFactory, Individual, IndividualFactory};
pub use rng::RandomNumberGenerator;
pub use selection::SelectionMode;
pub use strategy::{
    Mode, Mutate, ViabilityCondition, ViableBundle, ViableCrossover, ViableMutation,
};
