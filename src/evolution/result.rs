use crate::{
    error::{GeneticError, Result},
    genome::{Gene, Individual},
};

/// Why a run stopped.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Some individual's fitness satisfied the termination condition.
    TerminationMet,
    /// The generation limit was reached first.
    MaxIterExceeded,
}

/// Metrics of one evaluated generation.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationStats<G: Gene> {
    pub best_fitness: f64,
    pub worst_fitness: f64,
    pub average_fitness: f64,
    pub best_individual: Individual<G>,
}

impl<G: Gene> GenerationStats<G> {
    /// Computes the metrics of an evaluated population. Ties for best resolve to
    /// the lowest index.
    pub fn measure(population: &[Individual<G>], fitness: &[f64]) -> Result<Self> {
        if population.is_empty() || fitness.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }
        if population.len() != fitness.len() {
            return Err(GeneticError::Evolution(format!(
                "Fitness vector length ({}) doesn't match population length ({})",
                fitness.len(),
                population.len()
            )));
        }

        let mut best_idx = 0;
        let mut worst = fitness[0];
        for (idx, &value) in fitness.iter().enumerate().skip(1) {
            if value > fitness[best_idx] {
                best_idx = idx;
            }
            if value < worst {
                worst = value;
            }
        }
        let average = fitness.iter().sum::<f64>() / fitness.len() as f64;

        Ok(Self {
            best_fitness: fitness[best_idx],
            worst_fitness: worst,
            average_fitness: average,
            best_individual: population[best_idx].clone(),
        })
    }
}

/// Per-generation time series of a run, one entry per evaluated generation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct RunResult<G: Gene> {
    pub best_individual_data: Vec<f64>,
    pub worst_individual_data: Vec<f64>,
    pub generation_average_data: Vec<f64>,
    pub historic_best_individual: Vec<Individual<G>>,
    /// The generation the run stopped at, counting from 1.
    pub generations: usize,
    pub stop_reason: StopReason,
}

impl<G: Gene> RunResult<G> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            best_individual_data: Vec::with_capacity(capacity),
            worst_individual_data: Vec::with_capacity(capacity),
            generation_average_data: Vec::with_capacity(capacity),
            historic_best_individual: Vec::with_capacity(capacity),
            generations: 0,
            stop_reason: StopReason::MaxIterExceeded,
        }
    }

    pub(crate) fn record(&mut self, stats: GenerationStats<G>) {
        self.best_individual_data.push(stats.best_fitness);
        self.worst_individual_data.push(stats.worst_fitness);
        self.generation_average_data.push(stats.average_fitness);
        self.historic_best_individual.push(stats.best_individual);
    }

    pub(crate) fn finish(mut self, generation: usize, reason: StopReason) -> Self {
        self.generations = generation;
        self.stop_reason = reason;
        self
    }

    /// The best fitness recorded over the whole run and the individual that had it.
    /// The earliest generation wins ties.
    pub fn best(&self) -> Option<(f64, &Individual<G>)> {
        let mut best: Option<usize> = None;
        for (idx, &value) in self.best_individual_data.iter().enumerate() {
            if best.map_or(true, |b| value > self.best_individual_data[b]) {
                best = Some(idx);
            }
        }
        best.map(|idx| {
            (
                self.best_individual_data[idx],
                &self.historic_best_individual[idx],
            )
        })
    }
}
