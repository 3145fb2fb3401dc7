/// Decides, from a single fitness value, whether the run has found what it needs.
///
/// The engine asks this for every fitness value of a generation and stops as soon
/// as one of them satisfies it.
pub trait TerminationCondition {
    fn is_met(&self, fitness: f64) -> bool;
}

impl<F> TerminationCondition for F
where
    F: Fn(f64) -> bool,
{
    fn is_met(&self, fitness: f64) -> bool {
        self(fitness)
    }
}

/// Met by any fitness greater than or equal to the target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitnessThreshold {
    target: f64,
}

impl FitnessThreshold {
    pub fn new(target: f64) -> Self {
        Self { target }
    }

    pub fn target(&self) -> f64 {
        self.target
    }
}

impl TerminationCondition for FitnessThreshold {
    fn is_met(&self, fitness: f64) -> bool {
        fitness >= self.target
    }
}
