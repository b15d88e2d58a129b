//! SimpleGA - Parameter exploration for a one-max genetic algorithm.
//!
//! This crate provides a genetic algorithm that maximizes the number of set
//! bits in a fixed-length bit string, together with a harness that measures
//! how its parameters affect convergence speed and success rate.
//!
//! # Architecture
//!
//! The crate is split into two main modules:
//!
//! - `schema`: Parameters, progress and sweep report types
//! - `compute`: The engine (chromosomes, selection, run loop) and the sweep harness
//!
//! # Example
//!
//! ```rust
//! use simple_ga::{GeneticAlgorithm, Parameters};
//!
//! // Clamped on construction: never fails
//! let parameters = Parameters::new(8, 8, 10, 0.05, 0.80);
//!
//! let mut engine = GeneticAlgorithm::with_seed(parameters, 42);
//! let reached = engine.run();
//!
//! println!(
//!     "optimum reached: {} after {} generations (best {:.3})",
//!     reached,
//!     engine.generation(),
//!     engine.best_fitness()
//! );
//! ```

pub mod compute;
pub mod schema;

// Re-export commonly used types
pub use compute::{Chromosome, GeneticAlgorithm, SweepRunner, run_trials};
pub use schema::{Parameters, SweepConfig, SweepReport, SweptParameter};
