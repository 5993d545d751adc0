use crate::grid::{simulate, EvaluationRecord, GridEnvironment};

use super::Chromosome;

// A chromosome together with its normalized fitness for the current generation.
// The score is only meaningful relative to the rest of the population it was
// evaluated with.
#[derive(Debug, Clone)]
pub struct Solution<T> {
    pub chromosome: T,
    score: f64,
}

impl<T> Solution<T> {
    pub fn new(chromosome: T, score: f64) -> Solution<T> {
        Solution { chromosome, score }
    }

    pub fn get_score(&self) -> f64 {
        self.score
    }

    pub fn get_chromosome(&self) -> &T {
        &self.chromosome
    }
}

impl<T> PartialEq for Solution<T> {
    fn eq(&self, other: &Self) -> bool {
        self.score == other.score
    }
}

impl<T> PartialOrd for Solution<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.score.partial_cmp(&other.score)
    }
}

// FITNESS SCORER

pub trait FitnessScorer {
    /// Un-normalized fitness of one walk. Must be finite and strictly positive.
    fn fitness(&self, record: &EvaluationRecord, environment: &GridEnvironment) -> f64;
}

/// `1 / (distance_weight * remaining distance + path cost)`.
pub struct DistanceCostScorer {
    distance_weight: usize,
}

impl DistanceCostScorer {
    pub fn new(distance_weight: usize) -> Self {
        Self { distance_weight }
    }
}

impl Default for DistanceCostScorer {
    fn default() -> Self {
        Self::new(3)
    }
}

impl FitnessScorer for DistanceCostScorer {
    fn fitness(&self, record: &EvaluationRecord, environment: &GridEnvironment) -> f64 {
        let distance = environment.distance(&record.final_cell);
        // zero only when the source already is the destination
        let denominator = (self.distance_weight * distance + record.path_cost).max(1);
        1.0 / denominator as f64
    }
}

/// One scored generation, every vector in population order.
#[derive(Debug, Clone)]
pub struct PopulationEvaluation {
    pub solutions: Vec<Solution<Chromosome>>,
    pub records: Vec<EvaluationRecord>,
    pub raw_fitness: Vec<f64>,
}

pub struct PopulationEvaluator {
    scorer: Box<dyn FitnessScorer>,
}

impl PopulationEvaluator {
    pub fn new(scorer: Box<dyn FitnessScorer>) -> Self {
        Self { scorer }
    }

    pub fn get_scorer(&self) -> &dyn FitnessScorer {
        self.scorer.as_ref()
    }

    /// Walks every chromosome, scores it and normalizes the scores so they sum to 1.
    pub fn evaluate(
        &self,
        chromosomes: Vec<Chromosome>,
        environment: &GridEnvironment,
    ) -> PopulationEvaluation {
        let records: Vec<EvaluationRecord> = chromosomes
            .iter()
            .map(|chromosome| simulate(environment, &chromosome.genes))
            .collect();

        let raw_fitness: Vec<f64> = records
            .iter()
            .map(|record| self.scorer.fitness(record, environment))
            .collect();

        let total: f64 = raw_fitness.iter().sum();
        let solutions = chromosomes
            .into_iter()
            .zip(raw_fitness.iter())
            .map(|(chromosome, raw)| Solution::new(chromosome, raw / total))
            .collect();

        PopulationEvaluation {
            solutions,
            records,
            raw_fitness,
        }
    }
}

impl Default for PopulationEvaluator {
    fn default() -> Self {
        Self::new(Box::new(DistanceCostScorer::default()))
    }
}

/// Indices of the highest and lowest score. Ties go to the earliest index.
/// Returns `None` for an empty slice.
pub fn best_and_worst(scores: &[f64]) -> Option<(usize, usize)> {
    let first = *scores.first()?;
    let (mut best, mut worst) = (0, 0);
    let (mut best_score, mut worst_score) = (first, first);

    for (i, &score) in scores.iter().enumerate().skip(1) {
        if score > best_score {
            best = i;
            best_score = score;
        }
        if score < worst_score {
            worst = i;
            worst_score = score;
        }
    }
    Some((best, worst))
}
