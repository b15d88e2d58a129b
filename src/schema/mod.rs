//! Schema module - Parameter, progress and sweep types for SimpleGA.

mod evolution;
mod parameters;
mod sweep;

pub use evolution::*;
pub use parameters::*;
pub use sweep::*;
