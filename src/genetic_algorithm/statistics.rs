use crate::grid::{Cell, EvaluationRecord, GridEnvironment};

/// Summary of one evaluated generation.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationStatistics {
    pub generation: usize,
    pub best_fitness: f64,
    pub worst_fitness: f64,
    pub average_fitness: f64,
    /// Best fitness before normalization; comparable across generations.
    pub best_raw_fitness: f64,
    pub best_location: Cell,
    pub worst_location: Cell,
    pub best_length: usize,
    pub worst_length: usize,
    pub best_distance: usize,
    pub worst_distance: usize,
}

impl GenerationStatistics {
    /// `scores` are the normalized fitness values; `best` and `worst` index
    /// into all three slices.
    pub fn from_generation(
        generation: usize,
        scores: &[f64],
        raw_fitness: &[f64],
        records: &[EvaluationRecord],
        (best, worst): (usize, usize),
        environment: &GridEnvironment,
    ) -> Self {
        let average_fitness = if scores.is_empty() {
            0.0
        } else {
            scores.iter().sum::<f64>() / scores.len() as f64
        };
        let best_record = records[best];
        let worst_record = records[worst];

        Self {
            generation,
            best_fitness: scores[best],
            worst_fitness: scores[worst],
            average_fitness,
            best_raw_fitness: raw_fitness[best],
            best_location: best_record.final_cell,
            worst_location: worst_record.final_cell,
            best_length: best_record.path_cost,
            worst_length: worst_record.path_cost,
            best_distance: environment.distance(&best_record.final_cell),
            worst_distance: environment.distance(&worst_record.final_cell),
        }
    }
}

/// Append-only list of per-generation statistics, indexed by generation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatisticsHistory {
    generations: Vec<GenerationStatistics>,
}

impl StatisticsHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, stats: GenerationStatistics) {
        self.generations.push(stats);
    }

    pub fn len(&self) -> usize {
        self.generations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generations.is_empty()
    }

    pub fn latest(&self) -> Option<&GenerationStatistics> {
        self.generations.last()
    }

    pub fn get(&self, generation: usize) -> Option<&GenerationStatistics> {
        self.generations.get(generation)
    }

    pub fn as_slice(&self) -> &[GenerationStatistics] {
        &self.generations
    }

    pub fn best_fitness(&self) -> Vec<f64> {
        self.generations.iter().map(|s| s.best_fitness).collect()
    }

    pub fn worst_fitness(&self) -> Vec<f64> {
        self.generations.iter().map(|s| s.worst_fitness).collect()
    }

    pub fn average_fitness(&self) -> Vec<f64> {
        self.generations.iter().map(|s| s.average_fitness).collect()
    }
}
