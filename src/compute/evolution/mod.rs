//! Genetic algorithm for the one-max problem.
//!
//! # Overview
//!
//! - **Chromosomes** (`chromosome`): fixed-length bit strings with cached fitness
//! - **Fitness Functions** (`fitness`): the one-max score
//! - **Random Source** (`genome`): seedable generator owned by each engine
//! - **Selection** (`selection`): tournament selection with replacement
//! - **Search** (`search`): the generational engine and its run loop
//!
//! # Example
//!
//! ```rust
//! use simple_ga::compute::evolution::GeneticAlgorithm;
//! use simple_ga::schema::Parameters;
//!
//! let parameters = Parameters::new(16, 20, 200, 0.05, 0.8);
//! let mut engine = GeneticAlgorithm::with_seed(parameters, 42);
//!
//! let reached = engine.run_with_callback(|progress| {
//!     println!("{}", progress);
//! });
//!
//! assert!(engine.generation() <= 200);
//! assert_eq!(reached, engine.best_fitness() == 1.0);
//! ```

mod chromosome;
mod fitness;
mod genome;
mod search;
mod selection;

pub use chromosome::Chromosome;
pub use fitness::{FitnessFunction, OneMax};
pub use genome::GenomeRng;
pub use search::GeneticAlgorithm;
pub use selection::{DEFAULT_PRESSURE, tournament_selection};
