pub mod error;
pub mod genetic_algorithm;
pub mod grid;

pub use error::ConfigError;
pub use genetic_algorithm::{GeneticAlgorithm, Solution};
