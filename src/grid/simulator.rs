//! Walks a chromosome over the grid.
//!
//! Every gene is one attempted move from the current position:
//! - a move off the grid is ignored and costs nothing;
//! - a move into an obstacle leaves the position unchanged and costs the step
//!   plus [`OBSTACLE_PENALTY`];
//! - any other move succeeds and costs [`STEP_COST`].
//!
//! Once the destination is reached the remaining genes are not read.

use super::{Cell, GridEnvironment};
use crate::genetic_algorithm::Gene;

pub const STEP_COST: usize = 1;
pub const OBSTACLE_PENALTY: usize = 5;

/// Where a chromosome's walk ended and what it cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluationRecord {
    pub final_cell: Cell,
    pub path_cost: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StepOutcome {
    Moved(Cell),
    Blocked,
    OffGrid,
}

impl StepOutcome {
    fn cost(&self) -> usize {
        match self {
            StepOutcome::Moved(_) => STEP_COST,
            StepOutcome::Blocked => STEP_COST + OBSTACLE_PENALTY,
            StepOutcome::OffGrid => 0,
        }
    }
}

fn step(environment: &GridEnvironment, position: Cell, gene: Gene) -> StepOutcome {
    match gene.apply(position, environment.size()) {
        None => StepOutcome::OffGrid,
        Some(target) if environment.is_obstacle(&target) => StepOutcome::Blocked,
        Some(target) => StepOutcome::Moved(target),
    }
}

/// Iterator over `(position after the gene, cost of the gene)`, ending at the
/// destination or when the genes run out.
fn walk<'a>(
    environment: &'a GridEnvironment,
    genes: &'a [Gene],
) -> impl Iterator<Item = (Cell, usize)> + 'a {
    let destination = environment.destination();
    let mut position = environment.source();
    genes
        .iter()
        .map_while(move |gene| {
            if position == destination {
                return None;
            }
            let outcome = step(environment, position, *gene);
            if let StepOutcome::Moved(target) = outcome {
                position = target;
            }
            Some((position, outcome.cost()))
        })
}

/// Final cell and total cost of walking `genes` from the source.
pub fn simulate(environment: &GridEnvironment, genes: &[Gene]) -> EvaluationRecord {
    walk(environment, genes).fold(
        EvaluationRecord {
            final_cell: environment.source(),
            path_cost: 0,
        },
        |record, (position, cost)| EvaluationRecord {
            final_cell: position,
            path_cost: record.path_cost + cost,
        },
    )
}

/// Position after every gene read by [`simulate`]. Rejected moves repeat the
/// current cell.
pub fn trace_path(environment: &GridEnvironment, genes: &[Gene]) -> Vec<Cell> {
    walk(environment, genes).map(|(position, _)| position).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genetic_algorithm::Chromosome;

    fn open_grid(size: usize, source: Cell, destination: Cell) -> GridEnvironment {
        GridEnvironment::with_obstacles(size, source, destination, []).unwrap()
    }

    fn genes(s: &str) -> Vec<Gene> {
        s.parse::<Chromosome>().unwrap().genes
    }

    #[test]
    fn test_off_grid_moves_are_free() {
        let env = open_grid(10, Cell::new(0, 0), Cell::new(9, 9));
        let record = simulate(&env, &genes("UUUULLLLULUL"));
        assert_eq!(record.final_cell, Cell::new(0, 0));
        assert_eq!(record.path_cost, 0);
    }

    #[test]
    fn test_obstacle_costs_step_and_penalty() {
        let env = GridEnvironment::with_obstacles(
            5,
            Cell::new(0, 0),
            Cell::new(4, 4),
            [Cell::new(0, 1)],
        )
        .unwrap();

        let record = simulate(&env, &genes("R"));
        assert_eq!(record.final_cell, Cell::new(0, 0));
        assert_eq!(record.path_cost, 6);

        // blocked once, then down and right around it
        let record = simulate(&env, &genes("RDR"));
        assert_eq!(record.final_cell, Cell::new(1, 1));
        assert_eq!(record.path_cost, 6 + 1 + 1);
    }

    #[test]
    fn test_walk_stops_at_destination() {
        let env = open_grid(3, Cell::new(0, 0), Cell::new(0, 2));
        let record = simulate(&env, &genes("RRDDDLL"));
        assert_eq!(record.final_cell, Cell::new(0, 2));
        assert_eq!(record.path_cost, 2);
        assert_eq!(trace_path(&env, &genes("RRDDDLL")), vec![Cell::new(0, 1), Cell::new(0, 2)]);
    }

    #[test]
    fn test_source_is_destination() {
        let env = open_grid(4, Cell::new(2, 2), Cell::new(2, 2));
        let record = simulate(&env, &genes("UDLRUDLRUR"));
        assert_eq!(record.final_cell, Cell::new(2, 2));
        assert_eq!(record.path_cost, 0);
        assert!(trace_path(&env, &genes("UDLR")).is_empty());
    }

    #[test]
    fn test_simulate_is_repeatable() {
        let env = GridEnvironment::with_obstacles(
            6,
            Cell::new(1, 1),
            Cell::new(5, 0),
            [Cell::new(2, 1), Cell::new(3, 3)],
        )
        .unwrap();
        let chromosome = genes("DDRRDDLLUURDLD");
        let first = simulate(&env, &chromosome);
        let second = simulate(&env, &chromosome);
        assert_eq!(first, second);
        assert!(env.contains(&first.final_cell));
    }

    #[test]
    fn test_trace_repeats_rejected_moves() {
        let env = GridEnvironment::with_obstacles(
            3,
            Cell::new(0, 0),
            Cell::new(2, 2),
            [Cell::new(1, 0)],
        )
        .unwrap();
        let path = trace_path(&env, &genes("UDR"));
        assert_eq!(path, vec![Cell::new(0, 0), Cell::new(0, 0), Cell::new(0, 1)]);
    }
}
