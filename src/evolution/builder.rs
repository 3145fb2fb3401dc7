use crate::{
    error::{GeneticError, Result},
    genome::{Gene, GeneFactory},
    rng::RandomNumberGenerator,
    strategy::Mode,
};

use super::{EvolutionOptions, FitnessFunction, GeneticAlgorithm, TerminationCondition};

/// Fluent construction of a [`GeneticAlgorithm`].
///
/// Options default to `EvolutionOptions::default()` and the random stream to an
/// entropy-seeded generator; every other part is required.
pub struct GeneticAlgorithmBuilder<G: Gene> {
    options: Option<EvolutionOptions>,
    fitness_function: Option<Box<dyn FitnessFunction<G>>>,
    gene_factory: Option<Box<dyn GeneFactory<G>>>,
    termination_condition: Option<Box<dyn TerminationCondition>>,
    mode: Option<Mode<G>>,
    rng: Option<RandomNumberGenerator>,
}

impl<G: Gene> GeneticAlgorithmBuilder<G> {
    pub fn new() -> Self {
        Self {
            options: None,
            fitness_function: None,
            gene_factory: None,
            termination_condition: None,
            mode: None,
            rng: None,
        }
    }

    pub fn with_options(mut self, options: EvolutionOptions) -> Self {
        self.options = Some(options);
        self
    }

    pub fn with_fitness_function(
        mut self,
        fitness_function: impl FitnessFunction<G> + 'static,
    ) -> Self {
        self.fitness_function = Some(Box::new(fitness_function));
        self
    }

    pub fn with_gene_factory(mut self, gene_factory: impl GeneFactory<G> + 'static) -> Self {
        self.gene_factory = Some(Box::new(gene_factory));
        self
    }

    pub fn with_termination_condition(
        mut self,
        termination_condition: impl TerminationCondition + 'static,
    ) -> Self {
        self.termination_condition = Some(Box::new(termination_condition));
        self
    }

    pub fn with_mode(mut self, mode: Mode<G>) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn with_rng(mut self, rng: RandomNumberGenerator) -> Self {
        self.rng = Some(rng);
        self
    }

    pub fn build(self) -> Result<GeneticAlgorithm<G>> {
        let fitness_function = self.fitness_function.ok_or_else(|| {
            GeneticError::Configuration("Fitness function not specified".to_string())
        })?;

        let gene_factory = self.gene_factory.ok_or_else(|| {
            GeneticError::Configuration("Gene factory not specified".to_string())
        })?;

        let termination_condition = self.termination_condition.ok_or_else(|| {
            GeneticError::Configuration("Termination condition not specified".to_string())
        })?;

        let mode = self
            .mode
            .ok_or_else(|| GeneticError::Configuration("Mode not specified".to_string()))?;

        GeneticAlgorithm::new(
            self.options.unwrap_or_default(),
            fitness_function,
            gene_factory,
            termination_condition,
            mode,
            self.rng.unwrap_or_default(),
        )
    }
}

impl<G: Gene> Default for GeneticAlgorithmBuilder<G> {
    fn default() -> Self {
        Self::new()
    }
}
