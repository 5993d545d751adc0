mod algorithm;
mod base;
mod chromosome;
mod config;
mod controller;
mod operators;
mod statistics;

pub use algorithm::GeneticAlgorithm;
pub use base::{
    best_and_worst, DistanceCostScorer, FitnessScorer, PopulationEvaluation, PopulationEvaluator,
    Solution,
};
pub use chromosome::{
    Chromosome, ChromosomeGenerator, Gene, ParseGeneError, RandomChromosomeGenerator,
};
pub use config::{
    default_generation_cap, GaConfig, DEFAULT_ELITISM_FRACTION, DEFAULT_MUTATION_PROBABILITY,
    DEFAULT_RECOMBINATION_PROBABILITY,
};
pub use controller::{RunController, RunState, Termination};
pub use operators::{
    roulette_wheel_index, Crossover, ElitesByNumberSelector, ElitesSelector, Mutation,
    PerGeneMutation, RouletteWheelSelection, Selection, SinglePointCrossover,
};
pub use statistics::{GenerationStatistics, StatisticsHistory};
