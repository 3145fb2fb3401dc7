//! Capabilities for constrained problems, where every individual must satisfy a
//! caller-defined viability condition for the whole run.
//!
//! The four capabilities are collected with [`ViableBundleBuilder`]; building
//! fails with [`GeneticError::MissingCapability`] naming the first one absent.
//!
//! ```rust
//! use genetic_engine::error::GeneticError;
//! use genetic_engine::strategy::ViableBundle;
//!
//! let result = ViableBundle::<u8>::builder()
//!     .with_viability_condition(|ind: &[u8]| ind.iter().map(|&g| g as u32).sum::<u32>() < 10)
//!     .build();
//!
//! assert!(matches!(result, Err(GeneticError::MissingCapability("viable_mutation"))));
//! ```

use tracing::instrument;

use crate::{
    error::{GeneticError, Result},
    genome::{Gene, Individual, IndividualFactory},
    rng::RandomNumberGenerator,
};

/// Decides whether an individual is valid for the problem.
pub trait ViabilityCondition<G: Gene> {
    fn is_viable(&self, individual: &[G]) -> bool;
}

impl<G, F> ViabilityCondition<G> for F
where
    G: Gene,
    F: Fn(&[G]) -> bool,
{
    fn is_viable(&self, individual: &[G]) -> bool {
        self(individual)
    }
}

/// Proposes a replacement for the gene at `index`.
///
/// Returns the new gene when the individual stays viable with it, otherwise
/// returns a copy of the gene already at `index`.
pub trait ViableMutation<G: Gene> {
    fn mutate(&self, individual: &[G], index: usize, rng: &mut RandomNumberGenerator) -> G;
}

impl<G, F> ViableMutation<G> for F
where
    G: Gene,
    F: Fn(&[G], usize, &mut RandomNumberGenerator) -> G,
{
    fn mutate(&self, individual: &[G], index: usize, rng: &mut RandomNumberGenerator) -> G {
        self(individual, index, rng)
    }
}

/// Combines two viable parents into a viable child of the same length.
pub trait ViableCrossover<G: Gene> {
    fn crossover(&self, lhs: &[G], rhs: &[G], rng: &mut RandomNumberGenerator) -> Individual<G>;
}

impl<G, F> ViableCrossover<G> for F
where
    G: Gene,
    F: Fn(&[G], &[G], &mut RandomNumberGenerator) -> Individual<G>,
{
    fn crossover(&self, lhs: &[G], rhs: &[G], rng: &mut RandomNumberGenerator) -> Individual<G> {
        self(lhs, rhs, rng)
    }
}

/// The complete set of viable capabilities.
pub struct ViableBundle<G: Gene> {
    pub(crate) condition: Box<dyn ViabilityCondition<G>>,
    pub(crate) mutation: Box<dyn ViableMutation<G>>,
    pub(crate) crossover: Box<dyn ViableCrossover<G>>,
    pub(crate) factory: Box<dyn IndividualFactory<G>>,
}

impl<G: Gene> ViableBundle<G> {
    pub fn builder() -> ViableBundleBuilder<G> {
        ViableBundleBuilder::new()
    }

    pub fn is_viable(&self, individual: &[G]) -> bool {
        self.condition.is_viable(individual)
    }

    /// Delegates to the viable crossover and checks the child's length against `lhs`.
    #[instrument(level = "debug", skip(self, lhs, rhs, rng), fields(genome_length = lhs.len()))]
    pub fn crossover(
        &self,
        lhs: &[G],
        rhs: &[G],
        rng: &mut RandomNumberGenerator,
    ) -> Result<Individual<G>> {
        let child = self.crossover.crossover(lhs, rhs, rng);
        if child.len() != lhs.len() {
            return Err(GeneticError::LengthMismatch {
                context: "viable crossover",
                expected: lhs.len(),
                actual: child.len(),
            });
        }
        Ok(child)
    }

    /// Per-gene mutation where each replacement is proposed by the viable mutation,
    /// which sees the child as mutated so far.
    #[instrument(level = "debug", skip(self, child, rng), fields(genome_length = child.len()))]
    pub fn mutate_genes(&self, child: &mut [G], rate: f64, rng: &mut RandomNumberGenerator) {
        for i in 0..child.len() {
            if rng.gen_probability() < rate {
                let gene = self.mutation.mutate(child, i, rng);
                child[i] = gene;
            }
        }
    }
}

/// Collects the optional viable capabilities.
pub struct ViableBundleBuilder<G: Gene> {
    condition: Option<Box<dyn ViabilityCondition<G>>>,
    mutation: Option<Box<dyn ViableMutation<G>>>,
    crossover: Option<Box<dyn ViableCrossover<G>>>,
    factory: Option<Box<dyn IndividualFactory<G>>>,
}

impl<G: Gene> ViableBundleBuilder<G> {
    pub fn new() -> Self {
        Self {
            condition: None,
            mutation: None,
            crossover: None,
            factory: None,
        }
    }

    pub fn with_viability_condition(
        mut self,
        condition: impl ViabilityCondition<G> + 'static,
    ) -> Self {
        self.condition = Some(Box::new(condition));
        self
    }

    pub fn with_viable_mutation(mut self, mutation: impl ViableMutation<G> + 'static) -> Self {
        self.mutation = Some(Box::new(mutation));
        self
    }

    pub fn with_viable_crossover(mut self, crossover: impl ViableCrossover<G> + 'static) -> Self {
        self.crossover = Some(Box::new(crossover));
        self
    }

    pub fn with_viable_individual_factory(
        mut self,
        factory: impl IndividualFactory<G> + 'static,
    ) -> Self {
        self.factory = Some(Box::new(factory));
        self
    }

    pub fn build(self) -> Result<ViableBundle<G>> {
        let condition = self
            .condition
            .ok_or(GeneticError::MissingCapability("individual_viability_condition"))?;
        let mutation = self
            .mutation
            .ok_or(GeneticError::MissingCapability("viable_mutation"))?;
        let crossover = self
            .crossover
            .ok_or(GeneticError::MissingCapability("viable_crossover"))?;
        let factory = self
            .factory
            .ok_or(GeneticError::MissingCapability("viable_individual_factory"))?;

        Ok(ViableBundle {
            condition,
            mutation,
            crossover,
            factory,
        })
    }
}

impl<G: Gene> Default for ViableBundleBuilder<G> {
    fn default() -> Self {
        Self::new()
    }
}
