//! Progress, history and outcome types reported by the evolution engine.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle phase of an engine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum EvolutionPhase {
    /// No population yet.
    #[default]
    Uninitialized,
    /// Random population created, no generation run.
    Initialized,
    /// At least one generation has been produced.
    Reproducing,
    /// Run loop finished.
    Terminated,
}

/// Reason a run stopped.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum StopReason {
    /// A chromosome with every gene set was found.
    OptimumReached,
    /// Generation cap hit first.
    MaxGenerations,
}

/// Per-generation fitness history for plotting.
///
/// Index 0 holds the initial population; index `g` the population after
/// generation `g`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct EvolutionHistory {
    /// Best fitness per generation.
    pub best_fitness: Vec<f64>,
    /// Mean fitness per generation.
    pub avg_fitness: Vec<f64>,
}

impl EvolutionHistory {
    /// Number of recorded populations.
    pub fn len(&self) -> usize {
        self.best_fitness.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.best_fitness.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.best_fitness.clear();
        self.avg_fitness.clear();
    }

    pub(crate) fn push(&mut self, best: f64, avg: f64) {
        self.best_fitness.push(best);
        self.avg_fitness.push(avg);
    }
}

/// Diagnostic snapshot of an engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionProgress {
    /// Current generation number.
    pub generation: usize,
    /// Generation cap.
    pub total_generations: usize,
    /// Number of chromosomes in the current population.
    pub population_size: usize,
    /// Best fitness in the current population.
    pub best_fitness: f64,
    /// Mean fitness of the current population.
    pub avg_fitness: f64,
    /// Index of the best chromosome.
    pub best_index: usize,
    /// Genes of the best chromosome.
    pub best_genes: Vec<bool>,
    /// Whether the best chromosome is the global optimum.
    pub optimum_reached: bool,
    /// Current phase.
    pub phase: EvolutionPhase,
}

impl fmt::Display for EvolutionProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let genes: String = self
            .best_genes
            .iter()
            .map(|&g| if g { '1' } else { '0' })
            .collect();
        write!(
            f,
            "generation {}/{}: best={:.4} avg={:.4} [{}] optimum={}",
            self.generation,
            self.total_generations,
            self.best_fitness,
            self.avg_fitness,
            genes,
            self.optimum_reached
        )
    }
}
