use rand::{Rng, RngCore};

use crate::error::ConfigError;
use crate::genetic_algorithm::{Chromosome, Gene};

// CHROMOSOME MUTATION OPERATOR
pub trait Mutation<T> {
    fn mutate(&self, chromosome: &mut T, rng: &mut dyn RngCore);
}

/// Each gene, independently with `probability`, is replaced by a uniformly
/// random direction (possibly the same one).
#[derive(Debug, Clone, Copy)]
pub struct PerGeneMutation {
    probability: f64,
}

impl PerGeneMutation {
    pub fn new(probability: f64) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(ConfigError::InvalidProbability {
                name: "mutation probability",
                value: probability,
            });
        }
        Ok(Self { probability })
    }
}

impl Mutation<Chromosome> for PerGeneMutation {
    fn mutate(&self, chromosome: &mut Chromosome, rng: &mut dyn RngCore) {
        for gene in chromosome.genes.iter_mut() {
            if rng.random_bool(self.probability) {
                *gene = Gene::get_random(rng);
            }
        }
    }
}
