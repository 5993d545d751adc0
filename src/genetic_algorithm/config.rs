use rand::RngCore;

use super::Chromosome;
use crate::error::ConfigError;
use crate::grid::Cell;

pub const DEFAULT_ELITISM_FRACTION: f64 = 0.1;
pub const DEFAULT_RECOMBINATION_PROBABILITY: f64 = 0.7;
pub const DEFAULT_MUTATION_PROBABILITY: f64 = 0.15;

/// Parameters of a single run, fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct GaConfig {
    pub population_size: usize,
    pub grid_size: usize,
    pub source: Cell,
    pub destination: Cell,
    /// Share of the grid cells turned into obstacles, in [0, 1).
    pub obstacle_fraction: f64,
    pub elitism_fraction: f64,
    pub recombination_probability: f64,
    pub mutation_probability: f64,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 20,
            grid_size: 10,
            source: Cell::new(0, 0),
            destination: Cell::new(9, 9),
            obstacle_fraction: 0.0,
            elitism_fraction: DEFAULT_ELITISM_FRACTION,
            recombination_probability: DEFAULT_RECOMBINATION_PROBABILITY,
            mutation_probability: DEFAULT_MUTATION_PROBABILITY,
        }
    }
}

impl GaConfig {
    pub fn new(
        population_size: usize,
        grid_size: usize,
        source: Cell,
        destination: Cell,
        obstacle_fraction: f64,
    ) -> Self {
        Self {
            population_size,
            grid_size,
            source,
            destination,
            obstacle_fraction,
            ..Self::default()
        }
    }

    pub fn with_elitism_fraction(mut self, elitism_fraction: f64) -> Self {
        self.elitism_fraction = elitism_fraction;
        self
    }

    pub fn with_recombination_probability(mut self, probability: f64) -> Self {
        self.recombination_probability = probability;
        self
    }

    pub fn with_mutation_probability(mut self, probability: f64) -> Self {
        self.mutation_probability = probability;
        self
    }

    /// Replaces source and destination with uniformly random cells of the grid.
    /// Leaves the config untouched when the grid size is 0 so that `validate`
    /// still reports it.
    pub fn with_random_endpoints(mut self, rng: &mut dyn RngCore) -> Self {
        if self.grid_size > 0 {
            self.source = Cell::random(self.grid_size, rng);
            self.destination = Cell::random(self.grid_size, rng);
        }
        self
    }

    pub fn chromosome_length(&self) -> usize {
        Chromosome::length_for_grid(self.grid_size)
    }

    pub fn elitism_count(&self) -> usize {
        (self.population_size as f64 * self.elitism_fraction).floor() as usize
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 {
            return Err(ConfigError::InvalidGridSize(self.grid_size));
        }
        if self.population_size == 0 {
            return Err(ConfigError::InvalidPopulationSize(self.population_size));
        }
        if !(0.0..1.0).contains(&self.elitism_fraction) {
            return Err(ConfigError::InvalidElitismFraction(self.elitism_fraction));
        }
        for (name, value) in [
            ("recombination probability", self.recombination_probability),
            ("mutation probability", self.mutation_probability),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidProbability { name, value });
            }
        }
        if !(0.0..1.0).contains(&self.obstacle_fraction) {
            return Err(ConfigError::InvalidObstacleFraction(self.obstacle_fraction));
        }
        for (label, cell) in [("source", self.source), ("destination", self.destination)] {
            if !cell.is_within(self.grid_size) {
                return Err(ConfigError::CellOutOfBounds {
                    label,
                    cell,
                    size: self.grid_size,
                });
            }
        }
        Ok(())
    }
}

/// Generation cap used when none is given: larger grids get more generations.
pub fn default_generation_cap(grid_size: usize) -> usize {
    if grid_size <= 10 {
        300
    } else {
        500
    }
}
