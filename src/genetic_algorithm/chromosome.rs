use std::fmt;
use std::str::FromStr;

use rand::{Rng, RngCore};
use thiserror::Error;

use crate::grid::Cell;

/// One directional move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gene {
    Up,
    Down,
    Left,
    Right,
}

impl Gene {
    pub const ALL: [Gene; 4] = [Gene::Up, Gene::Down, Gene::Left, Gene::Right];

    pub fn get_random(rng: &mut dyn RngCore) -> Gene {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// Neighbour of `cell` in this direction, `None` when it would leave the
    /// `size` x `size` grid.
    pub fn apply(&self, cell: Cell, size: usize) -> Option<Cell> {
        let Cell { row, col } = cell;
        let target = match self {
            Gene::Up => Cell::new(row.checked_sub(1)?, col),
            Gene::Down => Cell::new(row + 1, col),
            Gene::Left => Cell::new(row, col.checked_sub(1)?),
            Gene::Right => Cell::new(row, col + 1),
        };
        target.is_within(size).then_some(target)
    }

    pub fn symbol(&self) -> char {
        match self {
            Gene::Up => 'U',
            Gene::Down => 'D',
            Gene::Left => 'L',
            Gene::Right => 'R',
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("'{0}' is not a gene, expected one of U, D, L, R")]
pub struct ParseGeneError(pub char);

impl TryFrom<char> for Gene {
    type Error = ParseGeneError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol.to_ascii_uppercase() {
            'U' => Ok(Gene::Up),
            'D' => Ok(Gene::Down),
            'L' => Ok(Gene::Left),
            'R' => Ok(Gene::Right),
            _ => Err(ParseGeneError(symbol)),
        }
    }
}

/// Candidate path: a fixed-length sequence of moves starting at the source.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Chromosome {
    pub genes: Vec<Gene>,
}

impl Chromosome {
    pub fn new(genes: Vec<Gene>) -> Self {
        Self { genes }
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Chromosome length used for a `grid_size` grid: 2.5 genes per row.
    pub fn length_for_grid(grid_size: usize) -> usize {
        (2.5 * grid_size as f64).round() as usize
    }
}

impl FromIterator<Gene> for Chromosome {
    fn from_iter<I: IntoIterator<Item = Gene>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.genes.iter().try_for_each(|gene| write!(f, "{}", gene.symbol()))
    }
}

/// Parses a gene string such as `"RRDDLU"`.
impl FromStr for Chromosome {
    type Err = ParseGeneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .filter(|c| !c.is_whitespace())
            .map(Gene::try_from)
            .collect()
    }
}

/// Produces chromosomes for the initial population.
pub trait ChromosomeGenerator {
    fn generate(&self, rng: &mut dyn RngCore) -> Chromosome;
}

/// Every gene drawn uniformly from the four directions.
pub struct RandomChromosomeGenerator {
    length: usize,
}

impl RandomChromosomeGenerator {
    pub fn new(length: usize) -> Self {
        Self { length }
    }
}

impl ChromosomeGenerator for RandomChromosomeGenerator {
    fn generate(&self, rng: &mut dyn RngCore) -> Chromosome {
        (0..self.length).map(|_| Gene::get_random(rng)).collect()
    }
}
