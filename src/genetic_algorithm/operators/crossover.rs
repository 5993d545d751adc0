use rand::{Rng, RngCore};

use crate::error::ConfigError;
use crate::genetic_algorithm::Chromosome;

// CROSSOVER OPERATOR

pub trait Crossover<T> {
    /// Two offspring of `parent1` and `parent2`.
    fn crossover(&self, parent1: &T, parent2: &T, rng: &mut dyn RngCore) -> (T, T);
}

/// Single cut point, suffixes swapped. With probability `1 - probability` the
/// parents are copied unchanged.
#[derive(Debug, Clone, Copy)]
pub struct SinglePointCrossover {
    probability: f64,
}

impl SinglePointCrossover {
    pub fn new(probability: f64) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(ConfigError::InvalidProbability {
                name: "recombination probability",
                value: probability,
            });
        }
        Ok(Self { probability })
    }

    /// Offspring of cutting both parents at `cut`.
    pub fn cut_and_swap(
        parent1: &Chromosome,
        parent2: &Chromosome,
        cut: usize,
    ) -> (Chromosome, Chromosome) {
        let cut = cut.min(parent1.len()).min(parent2.len());
        let (head1, tail1) = parent1.genes.split_at(cut);
        let (head2, tail2) = parent2.genes.split_at(cut);

        let offspring1 = head1.iter().chain(tail2).copied().collect();
        let offspring2 = head2.iter().chain(tail1).copied().collect();
        (offspring1, offspring2)
    }
}

impl Crossover<Chromosome> for SinglePointCrossover {
    fn crossover(
        &self,
        parent1: &Chromosome,
        parent2: &Chromosome,
        rng: &mut dyn RngCore,
    ) -> (Chromosome, Chromosome) {
        if !rng.random_bool(self.probability) || parent1.is_empty() {
            return (parent1.clone(), parent2.clone());
        }
        // a cut at 0 just swaps the parents
        let cut = rng.random_range(0..parent1.len());
        Self::cut_and_swap(parent1, parent2, cut)
    }
}
