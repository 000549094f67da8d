pub mod decompose;
pub mod reduce;
pub mod coverage;
pub mod exhaustive;
pub mod greedy;
pub mod stochastic;
pub mod random;
pub mod genetic;
pub mod strategy;
pub mod observer;
pub mod config;
pub mod error;
pub mod solver;

// Re-exports to flatten the crate.
pub use config::{ConfigError, GeneticConfig, SolverConfig};
pub use decompose::Decomposition;
pub use error::SolveError;
pub use reduce::Reduction;
pub use solver::{minimum_prime_hitting_set, Solver};
pub use strategy::Strategy;
