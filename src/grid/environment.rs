use std::collections::HashSet;

use rand::RngCore;

use super::Cell;
use crate::error::ConfigError;

/// Search space of a run: a square grid, its two endpoints and the obstacles.
/// Nothing changes after construction.
#[derive(Debug, Clone)]
pub struct GridEnvironment {
    size: usize,
    source: Cell,
    destination: Cell,
    obstacle_set: HashSet<Cell>,
    // sampling order, without duplicates
    obstacle_list: Vec<Cell>,
}

impl GridEnvironment {
    /// Places `round(obstacle_fraction * size^2)` obstacles uniformly at random.
    /// Cells can be drawn more than once; the duplicates collapse. Obstacles
    /// drawn on the source or the destination are dropped.
    pub fn random(
        size: usize,
        source: Cell,
        destination: Cell,
        obstacle_fraction: f64,
        rng: &mut dyn RngCore,
    ) -> Result<Self, ConfigError> {
        Self::check_endpoints(size, source, destination)?;
        if !(0.0..1.0).contains(&obstacle_fraction) {
            return Err(ConfigError::InvalidObstacleFraction(obstacle_fraction));
        }

        let n_obstacles = (obstacle_fraction * (size * size) as f64).round() as usize;
        let sampled = (0..n_obstacles).map(|_| Cell::random(size, rng)).collect::<Vec<_>>();

        Ok(Self::build(size, source, destination, sampled))
    }

    /// Uses the given obstacle cells as they are.
    pub fn with_obstacles<I>(
        size: usize,
        source: Cell,
        destination: Cell,
        obstacles: I,
    ) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = Cell>,
    {
        Self::check_endpoints(size, source, destination)?;
        let obstacles: Vec<Cell> = obstacles.into_iter().collect();
        if let Some(cell) = obstacles.iter().find(|cell| !cell.is_within(size)) {
            return Err(ConfigError::CellOutOfBounds {
                label: "obstacle",
                cell: *cell,
                size,
            });
        }
        Ok(Self::build(size, source, destination, obstacles))
    }

    fn check_endpoints(size: usize, source: Cell, destination: Cell) -> Result<(), ConfigError> {
        if size == 0 {
            return Err(ConfigError::InvalidGridSize(size));
        }
        for (label, cell) in [("source", source), ("destination", destination)] {
            if !cell.is_within(size) {
                return Err(ConfigError::CellOutOfBounds { label, cell, size });
            }
        }
        Ok(())
    }

    fn build(size: usize, source: Cell, destination: Cell, sampled: Vec<Cell>) -> Self {
        let mut obstacle_set = HashSet::with_capacity(sampled.len());
        let mut obstacle_list = Vec::with_capacity(sampled.len());
        for cell in sampled {
            if cell == source || cell == destination {
                continue;
            }
            if obstacle_set.insert(cell) {
                obstacle_list.push(cell);
            }
        }

        Self {
            size,
            source,
            destination,
            obstacle_set,
            obstacle_list,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn source(&self) -> Cell {
        self.source
    }

    pub fn destination(&self) -> Cell {
        self.destination
    }

    /// Obstacle cells in the order they were placed.
    pub fn obstacles(&self) -> &[Cell] {
        &self.obstacle_list
    }

    pub fn is_obstacle(&self, cell: &Cell) -> bool {
        self.obstacle_set.contains(cell)
    }

    pub fn contains(&self, cell: &Cell) -> bool {
        cell.is_within(self.size)
    }

    /// Manhattan distance from `cell` to the destination
    pub fn distance(&self, cell: &Cell) -> usize {
        cell.l1_distance(&self.destination)
    }

    /// Length of the shortest conceivable walk, ignoring obstacles.
    pub fn best_possible_length(&self) -> usize {
        self.distance(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_random_obstacles_exclude_endpoints() {
        let mut rng = StdRng::seed_from_u64(3);
        let source = Cell::new(0, 0);
        let destination = Cell::new(4, 4);
        // 0.9 of a 5x5 grid makes hitting both endpoints very likely
        let env = GridEnvironment::random(5, source, destination, 0.9, &mut rng).unwrap();

        assert!(!env.is_obstacle(&source));
        assert!(!env.is_obstacle(&destination));
        assert!(env.obstacles().len() <= 23);
        assert!(env.obstacles().iter().all(|cell| env.contains(cell)));

        let unique: HashSet<_> = env.obstacles().iter().copied().collect();
        assert_eq!(unique.len(), env.obstacles().len());
    }

    #[test]
    fn test_no_obstacles() {
        let mut rng = StdRng::seed_from_u64(3);
        let env =
            GridEnvironment::random(10, Cell::new(0, 0), Cell::new(9, 9), 0.0, &mut rng).unwrap();
        assert!(env.obstacles().is_empty());
        assert_eq!(env.best_possible_length(), 18);
    }

    #[test]
    fn test_distance_to_destination() {
        let env = GridEnvironment::with_obstacles(10, Cell::new(2, 3), Cell::new(7, 1), []).unwrap();
        assert_eq!(env.distance(&Cell::new(7, 1)), 0);
        assert_eq!(env.distance(&Cell::new(0, 0)), 8);
        assert_eq!(env.best_possible_length(), 7);
    }

    #[test]
    fn test_invalid_environments() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            GridEnvironment::random(0, Cell::new(0, 0), Cell::new(0, 0), 0.0, &mut rng).unwrap_err(),
            ConfigError::InvalidGridSize(0)
        );
        assert!(matches!(
            GridEnvironment::random(5, Cell::new(5, 0), Cell::new(0, 0), 0.0, &mut rng),
            Err(ConfigError::CellOutOfBounds { label: "source", .. })
        ));
        assert!(matches!(
            GridEnvironment::random(5, Cell::new(0, 0), Cell::new(1, 1), 1.0, &mut rng),
            Err(ConfigError::InvalidObstacleFraction(_))
        ));
        assert!(matches!(
            GridEnvironment::with_obstacles(5, Cell::new(0, 0), Cell::new(1, 1), [Cell::new(2, 8)]),
            Err(ConfigError::CellOutOfBounds { label: "obstacle", .. })
        ));
    }

    #[test]
    fn test_explicit_obstacles_drop_endpoints() {
        let env = GridEnvironment::with_obstacles(
            4,
            Cell::new(0, 0),
            Cell::new(3, 3),
            [Cell::new(0, 0), Cell::new(1, 1), Cell::new(1, 1), Cell::new(3, 3)],
        )
        .unwrap();
        assert_eq!(env.obstacles(), &[Cell::new(1, 1)]);
    }
}
