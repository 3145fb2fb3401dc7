//! # GeneticAlgorithm
//!
//! The engine owns the population and its fitness vector and runs a fully
//! generational loop: evaluate, record metrics, check termination, then replace
//! the whole population with children bred by selection, crossover and mutation.
//! There is no elitism; the best individual of a generation can be lost.
//!
//! ## Example
//!
//! ```rust
//! use genetic_engine::evolution::{
//!     EvolutionOptions, FitnessThreshold, GeneticAlgorithm, StopReason,
//! };
//! use genetic_engine::genome::GeneSequenceFactory;
//! use genetic_engine::rng::RandomNumberGenerator;
//! use genetic_engine::strategy::Mode;
//!
//! let mode = Mode::unconstrained(
//!     GeneSequenceFactory::new(8),
//!     |gene: &bool, _: &mut RandomNumberGenerator| !gene,
//! );
//!
//! let mut engine = GeneticAlgorithm::builder()
//!     .with_options(EvolutionOptions::new(30, 0.05, 500))
//!     .with_fitness_function(|ind: &[bool]| ind.iter().filter(|&&g| g).count() as f64)
//!     .with_gene_factory(|rng: &mut RandomNumberGenerator| rng.gen_probability() < 0.5)
//!     .with_termination_condition(FitnessThreshold::new(8.0))
//!     .with_mode(mode)
//!     .with_rng(RandomNumberGenerator::from_seed(7))
//!     .build()
//!     .unwrap();
//!
//! let result = engine.simulate().unwrap();
//! assert_eq!(result.historic_best_individual.len(), result.generations);
//! if result.stop_reason == StopReason::TerminationMet {
//!     assert_eq!(result.best_individual_data.last(), Some(&8.0));
//! }
//! ```

use rayon::prelude::*;
use tracing::{debug, info};

use super::{
    builder::GeneticAlgorithmBuilder,
    fitness::FitnessFunction,
    options::{EvolutionOptions, LogLevel},
    result::{GenerationStats, RunResult, StopReason},
    termination::TerminationCondition,
};
use crate::{
    error::{GeneticError, OptionExt, Result},
    genome::{Gene, GeneFactory, Individual},
    rng::RandomNumberGenerator,
    strategy::Mode,
};

pub struct GeneticAlgorithm<G: Gene> {
    options: EvolutionOptions,
    fitness_function: Box<dyn FitnessFunction<G>>,
    gene_factory: Box<dyn GeneFactory<G>>,
    termination_condition: Box<dyn TerminationCondition>,
    mode: Mode<G>,
    rng: RandomNumberGenerator,
    population: Vec<Individual<G>>,
    fitness: Vec<f64>,
}

impl<G: Gene> GeneticAlgorithm<G> {
    pub fn builder() -> GeneticAlgorithmBuilder<G> {
        GeneticAlgorithmBuilder::new()
    }

    /// Validates the options and builds the initial population by calling the
    /// mode's factory `population_size` times.
    ///
    /// # Errors
    ///
    /// - `Configuration` for invalid options, or for individuals shorter than
    ///   2 genes in unconstrained mode
    /// - `LengthMismatch` if the factory produces individuals of different lengths
    /// - `NotViable` if viability verification is on and the viable factory
    ///   produces a non-viable individual
    pub fn new(
        options: EvolutionOptions,
        fitness_function: Box<dyn FitnessFunction<G>>,
        gene_factory: Box<dyn GeneFactory<G>>,
        termination_condition: Box<dyn TerminationCondition>,
        mode: Mode<G>,
        mut rng: RandomNumberGenerator,
    ) -> Result<Self> {
        options.validate()?;

        let population: Vec<Individual<G>> = (0..options.get_population_size())
            .map(|_| mode.create_individual(gene_factory.as_ref(), &mut rng))
            .collect();

        let genome_length = population
            .first()
            .map(Vec::len)
            .ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;

        if let Some(individual) = population.iter().find(|ind| ind.len() != genome_length) {
            return Err(GeneticError::LengthMismatch {
                context: "individual factory",
                expected: genome_length,
                actual: individual.len(),
            });
        }

        if !mode.is_viable_mode() && genome_length < 2 {
            return Err(GeneticError::Configuration(format!(
                "Single-point crossover needs individuals of at least 2 genes, got {}",
                genome_length
            )));
        }

        let engine = Self {
            options,
            fitness_function,
            gene_factory,
            termination_condition,
            mode,
            rng,
            population,
            fitness: Vec::new(),
        };

        if engine.options.get_verify_viability() {
            for individual in &engine.population {
                engine.verify_viable(individual, "viable individual factory")?;
            }
        }

        info!(
            population_size = engine.population.len(),
            genome_length,
            mode = ?engine.mode,
            "Genetic algorithm initialised"
        );

        Ok(engine)
    }

    /// The current population.
    pub fn population(&self) -> &[Individual<G>] {
        &self.population
    }

    /// Fitness of the current population, index-aligned. Empty until the population
    /// has been evaluated, and cleared again by reproduction.
    pub fn fitness(&self) -> &[f64] {
        &self.fitness
    }

    pub fn options(&self) -> &EvolutionOptions {
        &self.options
    }

    pub fn mode(&self) -> &Mode<G> {
        &self.mode
    }

    pub fn gene_factory(&self) -> &dyn GeneFactory<G> {
        self.gene_factory.as_ref()
    }

    /// `None` in unconstrained mode.
    pub fn is_viable(&self, individual: &[G]) -> Option<bool> {
        self.mode.is_viable(individual)
    }

    /// Runs generations until the termination condition is met by some fitness
    /// value or `max_iter` generations have been evaluated.
    ///
    /// The generation that meets the termination condition is recorded and no
    /// reproduction happens after it.
    ///
    /// # Errors
    ///
    /// Stops the run on a non-finite fitness value or on a collaborator that
    /// breaks its contract (length mismatch, or a non-viable child when
    /// viability verification is on).
    pub fn simulate(&mut self) -> Result<RunResult<G>> {
        let max_iter = self.options.get_max_iter();
        let mut result = RunResult::with_capacity(max_iter);

        info!(
            max_iter,
            population_size = self.options.get_population_size(),
            "Simulation started"
        );

        for generation in 1..=max_iter {
            self.evaluate()?;

            let stats = GenerationStats::measure(&self.population, &self.fitness)?;
            self.log_generation(generation, &stats);
            result.record(stats);

            if self
                .fitness
                .iter()
                .any(|&value| self.termination_condition.is_met(value))
            {
                info!(generation, "Termination condition met");
                return Ok(result.finish(generation, StopReason::TerminationMet));
            }

            self.reproduce()?;
        }

        info!(max_iter, "Simulation reached the generation limit");
        Ok(result.finish(max_iter, StopReason::MaxIterExceeded))
    }

    /// Recomputes the fitness vector for the current population, in parallel
    /// when the population reaches the configured threshold.
    pub fn evaluate(&mut self) -> Result<()> {
        let fitness_function = self.fitness_function.as_ref();

        let fitness: Vec<f64> =
            if self.population.len() >= self.options.get_parallel_threshold() {
                self.population
                    .par_iter()
                    .map(|individual| fitness_function.score(individual))
                    .collect()
            } else {
                self.population
                    .iter()
                    .map(|individual| fitness_function.score(individual))
                    .collect()
            };

        if let Some((idx, value)) = fitness.iter().enumerate().find(|(_, f)| !f.is_finite()) {
            return Err(GeneticError::InvalidNumericValue(format!(
                "Non-finite fitness score {} for individual {}",
                value, idx
            )));
        }

        self.fitness = fitness;
        Ok(())
    }

    /// Replaces the population with `population_size` children of the current one.
    ///
    /// The fitness vector belongs to the replaced population and is cleared, so
    /// the next reproduction needs a fresh [`evaluate`](Self::evaluate).
    pub fn reproduce(&mut self) -> Result<()> {
        if self.fitness.len() != self.population.len() {
            return Err(GeneticError::Evolution(
                "Population must be evaluated before reproduction".to_string(),
            ));
        }

        let total_fitness: f64 = self.fitness.iter().sum();
        let population_size = self.options.get_population_size();

        let mut next_generation = Vec::with_capacity(population_size);
        for _ in 0..population_size {
            next_generation.push(self.produce_offspring(total_fitness)?);
        }

        self.population = next_generation;
        self.fitness.clear();
        Ok(())
    }

    fn produce_offspring(&mut self, total_fitness: f64) -> Result<Individual<G>> {
        let (first, second) = self.options.get_selection().select_parents(
            &self.fitness,
            total_fitness,
            self.options.get_tournament_size(),
            &mut self.rng,
        )?;

        let child = self.mode.breed(
            &self.population[first],
            &self.population[second],
            self.options.get_mutation_rate(),
            &mut self.rng,
        )?;

        if self.options.get_verify_viability() {
            self.verify_viable(&child, "viable crossover and mutation")?;
        }

        Ok(child)
    }

    fn verify_viable(&self, individual: &[G], context: &str) -> Result<()> {
        match self.mode.is_viable(individual) {
            Some(false) => Err(GeneticError::NotViable(format!(
                "{} produced {:?}",
                context, individual
            ))),
            _ => Ok(()),
        }
    }

    fn log_generation(&self, generation: usize, stats: &GenerationStats<G>) {
        match self.options.get_log_level() {
            LogLevel::Verbose => info!(
                generation,
                best = stats.best_fitness,
                worst = stats.worst_fitness,
                average = stats.average_fitness,
                best_individual = ?stats.best_individual,
                "Generation evaluated"
            ),
            LogLevel::Minimal => {
                info!(generation, best = stats.best_fitness, "Generation evaluated")
            }
            LogLevel::None => {
                debug!(generation, best = stats.best_fitness, "Generation evaluated")
            }
        }
    }
}
