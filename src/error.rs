use thiserror::Error;

use crate::grid::Cell;

/// Invalid run configuration, reported when a run or environment is constructed.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("grid size must be positive, got {0}")]
    InvalidGridSize(usize),

    #[error("population size must be positive, got {0}")]
    InvalidPopulationSize(usize),

    #[error("elitism fraction must be in [0, 1), got {0}")]
    InvalidElitismFraction(f64),

    #[error("{name} must be a probability in [0, 1], got {value}")]
    InvalidProbability { name: &'static str, value: f64 },

    #[error("chromosomes must have {expected} genes, got one with {got}")]
    InvalidChromosomeLength { expected: usize, got: usize },

    #[error("obstacle fraction must be in [0, 1), got {0}")]
    InvalidObstacleFraction(f64),

    #[error("{label} {cell} is outside of the {size}x{size} grid")]
    CellOutOfBounds {
        label: &'static str,
        cell: Cell,
        size: usize,
    },
}
