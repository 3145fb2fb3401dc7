//! Operators used when no viability constraint applies: single-point crossover
//! and independent per-gene mutation through a caller-supplied [`Mutate`].

use tracing::instrument;

use crate::{
    error::{GeneticError, Result},
    genome::{Gene, Individual},
    rng::RandomNumberGenerator,
};

/// Replaces one gene with a different value.
///
/// Implementations must return a gene that differs from the input; the engine
/// does not compare genes, so a mutation that returns its input silently lowers
/// the effective mutation rate.
pub trait Mutate<G: Gene> {
    fn mutate(&self, gene: &G, rng: &mut RandomNumberGenerator) -> G;
}

impl<G, F> Mutate<G> for F
where
    G: Gene,
    F: Fn(&G, &mut RandomNumberGenerator) -> G,
{
    fn mutate(&self, gene: &G, rng: &mut RandomNumberGenerator) -> G {
        self(gene, rng)
    }
}

/// Builds a child from two parents of equal length.
///
/// A breakpoint is drawn from `[1, len - 1)`; with two genes that range is empty
/// and the breakpoint is 1. With probability 0.5 the child takes the head of
/// `lhs` and the tail of `rhs`, otherwise the head of `rhs` and the tail of `lhs`.
#[instrument(level = "debug", skip(lhs, rhs, rng), fields(genome_length = lhs.len()))]
pub fn single_point_crossover<G: Gene>(
    lhs: &[G],
    rhs: &[G],
    rng: &mut RandomNumberGenerator,
) -> Result<Individual<G>> {
    let len = lhs.len();
    if rhs.len() != len {
        return Err(GeneticError::LengthMismatch {
            context: "single-point crossover",
            expected: len,
            actual: rhs.len(),
        });
    }
    if len < 2 {
        return Err(GeneticError::Configuration(format!(
            "Single-point crossover needs individuals of at least 2 genes, got {}",
            len
        )));
    }

    let breakpoint = if len > 2 { rng.gen_range(1..len - 1) } else { 1 };
    let (head, tail) = if rng.gen_probability() < 0.5 {
        (lhs, rhs)
    } else {
        (rhs, lhs)
    };

    let mut child = Vec::with_capacity(len);
    child.extend_from_slice(&head[..breakpoint]);
    child.extend_from_slice(&tail[breakpoint..]);
    Ok(child)
}

/// Draws one probability per position and mutates the genes that fall below `rate`.
#[instrument(level = "debug", skip(child, mutate, rng), fields(genome_length = child.len()))]
pub fn mutate_genes<G: Gene>(
    child: &mut [G],
    rate: f64,
    mutate: &dyn Mutate<G>,
    rng: &mut RandomNumberGenerator,
) {
    for i in 0..child.len() {
        if rng.gen_probability() < rate {
            child[i] = mutate.mutate(&child[i], rng);
        }
    }
}
