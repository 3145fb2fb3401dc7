use crate::genome::Gene;

/// Scores an individual. Higher is better for the engine's metrics and selection.
///
/// Scoring must be free of side effects: the engine may evaluate a population
/// on several threads and expects the same vector as a sequential pass.
pub trait FitnessFunction<G: Gene>: Send + Sync {
    fn score(&self, individual: &[G]) -> f64;
}

impl<G, F> FitnessFunction<G> for F
where
    G: Gene,
    F: Fn(&[G]) -> f64 + Send + Sync,
{
    fn score(&self, individual: &[G]) -> f64 {
        self(individual)
    }
}
