use rand::{Rng, RngCore};

use crate::genetic_algorithm::Solution;

//SELECTION OPERATOR
// TRAIT: Selection
// Implementations:
//      RouletteWheelSelection

pub trait Selection<T> {
    /// Index of the chosen parent in `population`.
    fn select(&self, population: &[Solution<T>], rng: &mut dyn RngCore) -> usize;
}

/// Fitness-proportionate selection over the normalized scores.
#[derive(Debug, Default, Clone, Copy)]
pub struct RouletteWheelSelection;

impl<T> Selection<T> for RouletteWheelSelection {
    fn select(&self, population: &[Solution<T>], rng: &mut dyn RngCore) -> usize {
        let weights: Vec<f64> = population.iter().map(|sol| sol.get_score()).collect();
        roulette_wheel_index(&weights, rng)
    }
}

/// Draws an index with probability proportional to its weight by walking the
/// cumulative distribution. The weights do not have to sum to 1. Zero-weight
/// entries are never picked unless every weight is zero, in which case the
/// draw is uniform. Returns 0 for an empty slice.
pub fn roulette_wheel_index(weights: &[f64], rng: &mut dyn RngCore) -> usize {
    let total: f64 = weights.iter().sum();
    if weights.is_empty() {
        return 0;
    }
    if total <= 0.0 || !total.is_finite() {
        return rng.random_range(0..weights.len());
    }

    let threshold = rng.random::<f64>() * total;
    let mut cumulative = 0.0;
    for (i, weight) in weights.iter().enumerate() {
        cumulative += weight;
        if threshold < cumulative {
            return i;
        }
    }

    // rounding left the threshold above the last cumulative sum
    weights
        .iter()
        .rposition(|&weight| weight > 0.0)
        .unwrap_or(weights.len() - 1)
}
