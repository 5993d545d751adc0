use std::fmt;
use std::str::FromStr;

use rand::{Rng, RngCore};
use thiserror::Error;

/// A grid position, 0-indexed as (row, column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Uniformly random cell of a `size` x `size` grid. `size` must be positive.
    pub fn random(size: usize, rng: &mut dyn RngCore) -> Self {
        Self {
            row: rng.random_range(0..size),
            col: rng.random_range(0..size),
        }
    }

    pub fn is_within(&self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// Manhattan distance to `other`
    pub fn l1_distance(&self, other: &Cell) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseCellError {
    #[error("expected a cell as 'row,col', got '{0}'")]
    Format(String),
    #[error("invalid coordinate '{0}'")]
    Coordinate(String),
}

/// Parses `"row,col"`, optionally wrapped in parentheses.
impl FromStr for Cell {
    type Err = ParseCellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_start_matches('(').trim_end_matches(')');
        let (row, col) = trimmed
            .split_once(',')
            .ok_or_else(|| ParseCellError::Format(s.to_string()))?;

        let parse = |part: &str| {
            part.trim()
                .parse::<usize>()
                .map_err(|_| ParseCellError::Coordinate(part.trim().to_string()))
        };
        Ok(Cell::new(parse(row)?, parse(col)?))
    }
}
