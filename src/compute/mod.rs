//! Compute module - the genetic algorithm engine and the sweep harness.

pub mod evolution;
mod sweep;

pub use evolution::{Chromosome, GeneticAlgorithm, GenomeRng};
pub use sweep::{SweepRunner, run_trials};
