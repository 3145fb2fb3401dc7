pub mod builder;
pub mod engine;
pub mod fitness;
pub mod options;
pub mod result;
pub mod termination;

pub use builder::GeneticAlgorithmBuilder;
pub use engine::GeneticAlgorithm;
pub use fitness::FitnessFunction;
pub use options::{EvolutionOptions, EvolutionOptionsBuilder, LogLevel};
pub use result::{GenerationStats, RunResult, StopReason};
pub use termination::{FitnessThreshold, TerminationCondition};
