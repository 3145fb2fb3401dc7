//! # Genome
//!
//! Genes are opaque to the engine: it copies them, hands them to caller-supplied
//! mutations and never looks inside. An individual is a fixed-length sequence of
//! genes, and the length chosen by the factory holds for the whole run.
//!
//! ## Example
//!
//! ```rust
//! use genetic_engine::genome::{GeneSequenceFactory, IndividualFactory};
//! use genetic_engine::rng::RandomNumberGenerator;
//!
//! let digits = |rng: &mut RandomNumberGenerator| rng.gen_range(1..=5u32);
//! let factory = GeneSequenceFactory::new(4);
//! let mut rng = RandomNumberGenerator::from_seed(3);
//!
//! let individual: Vec<u32> = factory.create(&digits, &mut rng);
//! assert_eq!(individual.len(), 4);
//! assert!(individual.iter().all(|g| (1..=5).contains(g)));
//! ```

use std::fmt::Debug;

use crate::rng::RandomNumberGenerator;

/// Marker trait for gene values.
///
/// Implemented for every `Clone + Debug + Send + Sync` type, so integers, chars,
/// booleans or problem-specific structs can all be used directly.
pub trait Gene: Clone + Debug + Send + Sync {}

impl<T> Gene for T where T: Clone + Debug + Send + Sync {}

/// A candidate solution: an ordered sequence of genes.
pub type Individual<G> = Vec<G>;

/// Produces a single gene.
pub trait GeneFactory<G: Gene> {
    fn create(&self, rng: &mut RandomNumberGenerator) -> G;
}

impl<G, F> GeneFactory<G> for F
where
    G: Gene,
    F: Fn(&mut RandomNumberGenerator) -> G,
{
    fn create(&self, rng: &mut RandomNumberGenerator) -> G {
        self(rng)
    }
}

/// Produces a new individual, usually by calling the gene factory once per position.
///
/// In viable mode the same trait is used for the viable factory, whose contract is
/// stronger: every individual it returns must satisfy the viability condition.
pub trait IndividualFactory<G: Gene> {
    fn create(&self, gene_factory: &dyn GeneFactory<G>, rng: &mut RandomNumberGenerator)
        -> Individual<G>;
}

impl<G, F> IndividualFactory<G> for F
where
    G: Gene,
    F: Fn(&dyn GeneFactory<G>, &mut RandomNumberGenerator) -> Individual<G>,
{
    fn create(
        &self,
        gene_factory: &dyn GeneFactory<G>,
        rng: &mut RandomNumberGenerator,
    ) -> Individual<G> {
        self(gene_factory, rng)
    }
}

/// An [`IndividualFactory`] that fills `length` positions from the gene factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneSequenceFactory {
    length: usize,
}

impl GeneSequenceFactory {
    pub fn new(length: usize) -> Self {
        Self { length }
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl<G: Gene> IndividualFactory<G> for GeneSequenceFactory {
    fn create(
        &self,
        gene_factory: &dyn GeneFactory<G>,
        rng: &mut RandomNumberGenerator,
    ) -> Individual<G> {
        (0..self.length).map(|_| gene_factory.create(rng)).collect()
    }
}
