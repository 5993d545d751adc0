#![allow(dead_code)]

use gridpath_genetic_algorithm::{
    genetic_algorithm::{GaConfig, GeneticAlgorithm},
    grid::{Cell, GridEnvironment},
};
use rand::{rngs::StdRng, SeedableRng};
use rstest::fixture;

// OPEN GRIDS

#[fixture]
pub fn open_grid_10() -> GridEnvironment {
    GridEnvironment::with_obstacles(10, Cell::new(0, 0), Cell::new(9, 9), []).unwrap()
}

// A 5x5 grid with a wall across row 2 and a single gap at column 4
#[fixture]
pub fn walled_grid_5() -> GridEnvironment {
    let wall = (0..4).map(|col| Cell::new(2, col));
    GridEnvironment::with_obstacles(5, Cell::new(0, 0), Cell::new(4, 0), wall).unwrap()
}

#[fixture]
pub fn default_config() -> GaConfig {
    GaConfig::default()
}

#[fixture]
pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

// RUNS

#[fixture]
pub fn default_run(default_config: GaConfig, seeded_rng: StdRng) -> GeneticAlgorithm<StdRng> {
    GeneticAlgorithm::new(default_config, seeded_rng).unwrap()
}

#[fixture]
pub fn obstacle_run(seeded_rng: StdRng) -> GeneticAlgorithm<StdRng> {
    let config = GaConfig::new(30, 10, Cell::new(0, 0), Cell::new(9, 9), 0.2);
    GeneticAlgorithm::new(config, seeded_rng).unwrap()
}
