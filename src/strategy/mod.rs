//! # Mode
//!
//! The operating mode decides how the initial population is built and how a child
//! is bred from two parents. It is chosen once, when the engine is constructed.
//!
//! - [`Mode::Unconstrained`] uses single-point crossover and a gene-level [`Mutate`].
//! - [`Mode::Viable`] delegates crossover, mutation and creation to a [`ViableBundle`]
//!   so every individual keeps satisfying the caller's viability condition.
pub mod unconstrained;
pub mod viable;

use std::fmt;

use crate::{
    error::Result,
    genome::{Gene, GeneFactory, Individual, IndividualFactory},
    rng::RandomNumberGenerator,
};

pub use unconstrained::{mutate_genes, single_point_crossover, Mutate};
pub use viable::{
    ViabilityCondition, ViableBundle, ViableBundleBuilder, ViableCrossover, ViableMutation,
};

pub enum Mode<G: Gene> {
    Unconstrained {
        factory: Box<dyn IndividualFactory<G>>,
        mutate: Box<dyn Mutate<G>>,
    },
    Viable(ViableBundle<G>),
}

impl<G: Gene> Mode<G> {
    pub fn unconstrained(
        factory: impl IndividualFactory<G> + 'static,
        mutate: impl Mutate<G> + 'static,
    ) -> Self {
        Mode::Unconstrained {
            factory: Box::new(factory),
            mutate: Box::new(mutate),
        }
    }

    pub fn viable(bundle: ViableBundle<G>) -> Self {
        Mode::Viable(bundle)
    }

    /// Selects the mode from an `individual_viability_check` flag.
    ///
    /// With the flag set, the bundle must be complete or this fails with
    /// [`GeneticError::MissingCapability`](crate::error::GeneticError::MissingCapability).
    /// Without it, the bundle is ignored and the plain factory and mutation are used.
    pub fn from_parts(
        individual_viability_check: bool,
        factory: impl IndividualFactory<G> + 'static,
        mutate: impl Mutate<G> + 'static,
        bundle: ViableBundleBuilder<G>,
    ) -> Result<Self> {
        if individual_viability_check {
            Ok(Mode::Viable(bundle.build()?))
        } else {
            Ok(Mode::unconstrained(factory, mutate))
        }
    }

    pub fn is_viable_mode(&self) -> bool {
        matches!(self, Mode::Viable(_))
    }

    /// Creates one member of the initial population.
    pub fn create_individual(
        &self,
        gene_factory: &dyn GeneFactory<G>,
        rng: &mut RandomNumberGenerator,
    ) -> Individual<G> {
        match self {
            Mode::Unconstrained { factory, .. } => factory.create(gene_factory, rng),
            Mode::Viable(bundle) => bundle.factory.create(gene_factory, rng),
        }
    }

    /// Crossover followed by per-gene mutation.
    pub fn breed(
        &self,
        lhs: &[G],
        rhs: &[G],
        mutation_rate: f64,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Individual<G>> {
        match self {
            Mode::Unconstrained { mutate, .. } => {
                let mut child = single_point_crossover(lhs, rhs, rng)?;
                mutate_genes(&mut child, mutation_rate, mutate.as_ref(), rng);
                Ok(child)
            }
            Mode::Viable(bundle) => {
                let mut child = bundle.crossover(lhs, rhs, rng)?;
                bundle.mutate_genes(&mut child, mutation_rate, rng);
                Ok(child)
            }
        }
    }

    /// `None` in unconstrained mode, where no condition exists.
    pub fn is_viable(&self, individual: &[G]) -> Option<bool> {
        match self {
            Mode::Unconstrained { .. } => None,
            Mode::Viable(bundle) => Some(bundle.is_viable(individual)),
        }
    }
}

impl<G: Gene> fmt::Debug for Mode<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Unconstrained { .. } => f.write_str("Mode::Unconstrained"),
            Mode::Viable(_) => f.write_str("Mode::Viable"),
        }
    }
}
