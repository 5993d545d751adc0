//! Elite-preservation strategies for GA populations.
use crate::error::ConfigError;
use crate::genetic_algorithm::Solution;

/// SELECTION OF ELITE POPULATION (SURVIVAL OF BEST SOLUTIONS)

pub trait ElitesSelector<T: Clone> {
    /// Copy elite solutions from the previous population into `next_population`.
    /// Returns the new length of `next_population`.
    fn pass_elites(
        &self,
        next_population: &mut Vec<Solution<T>>,
        previous_population: &[Solution<T>],
    ) -> usize;
}

pub struct ElitesByNumberSelector {
    number_of_elites: usize,
}

impl ElitesByNumberSelector {
    /// Keep the top `number_of_elites` solutions. Zero disables elitism.
    pub fn new(number_of_elites: usize) -> Self {
        Self { number_of_elites }
    }

    /// `floor(elitism_fraction * population_size)` elites; the fraction must be in [0, 1).
    pub fn from_fraction(
        elitism_fraction: f64,
        population_size: usize,
    ) -> Result<Self, ConfigError> {
        if !(0.0..1.0).contains(&elitism_fraction) {
            return Err(ConfigError::InvalidElitismFraction(elitism_fraction));
        }
        Ok(Self::new((population_size as f64 * elitism_fraction).floor() as usize))
    }

    pub fn number_of_elites(&self) -> usize {
        self.number_of_elites
    }
}

impl<T: Clone> ElitesSelector<T> for ElitesByNumberSelector {
    /// Sorts by descending score, then takes the top-N. The sort is stable, so
    /// equal scores keep their population order.
    fn pass_elites(
        &self,
        next_population: &mut Vec<Solution<T>>,
        previous_population: &[Solution<T>],
    ) -> usize {
        let mut ranked: Vec<&Solution<T>> = previous_population.iter().collect();
        ranked.sort_by(|a, b| {
            b.get_score()
                .partial_cmp(&a.get_score())
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let elites = ranked.into_iter().take(self.number_of_elites).cloned();

        next_population.extend(elites);
        next_population.len()
    }
}
