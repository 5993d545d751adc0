use rand::{rngs::StdRng, Rng, RngCore};

use super::base::{best_and_worst, PopulationEvaluation, PopulationEvaluator, Solution};
use super::chromosome::{Chromosome, ChromosomeGenerator, RandomChromosomeGenerator};
use super::config::GaConfig;
use super::operators::{
    Crossover, ElitesByNumberSelector, ElitesSelector, Mutation, PerGeneMutation,
    RouletteWheelSelection, Selection, SinglePointCrossover,
};
use super::statistics::{GenerationStatistics, StatisticsHistory};
use crate::error::ConfigError;
use crate::grid::{trace_path, Cell, EvaluationRecord, GridEnvironment};

//GeneticAlgorithm: one run of the path search, owning every piece of mutable state
pub struct GeneticAlgorithm<R = StdRng> {
    config: GaConfig,
    environment: GridEnvironment,
    // obstacles were supplied by the caller rather than sampled from the config
    fixed_environment: bool,
    population: Vec<Solution<Chromosome>>,
    evaluations: Vec<EvaluationRecord>,
    raw_fitness: Vec<f64>,
    evaluator: PopulationEvaluator,
    selection: Box<dyn Selection<Chromosome>>,
    crossover: Box<dyn Crossover<Chromosome>>,
    mutation: Box<dyn Mutation<Chromosome>>,
    elites_selector: Box<dyn ElitesSelector<Chromosome>>,
    generation: usize,
    statistics: StatisticsHistory,
    best_path: Vec<Cell>,
    previous_best_path: Vec<Cell>,
    is_optimal: bool,
    rng: R,
}

impl<R: RngCore> GeneticAlgorithm<R> {
    /// Validates `config`, places random obstacles, samples the initial
    /// population and evaluates generation 0, all with `rng`.
    pub fn new(config: GaConfig, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let environment = GridEnvironment::random(
            config.grid_size,
            config.source,
            config.destination,
            config.obstacle_fraction,
            &mut rng,
        )?;
        Self::sample_initial(config, environment, false, rng)
    }

    /// Like [`GeneticAlgorithm::new`] on a prepared environment. Grid size and
    /// endpoints are taken from `environment`; the obstacle fraction is ignored.
    pub fn with_environment(
        config: GaConfig,
        environment: GridEnvironment,
        rng: R,
    ) -> Result<Self, ConfigError> {
        Self::sample_initial(config, environment, true, rng)
    }

    /// Starts from the given chromosomes. Their count becomes the population
    /// size and every one must have [`GaConfig::chromosome_length`] genes for
    /// the environment's grid.
    pub fn with_population(
        config: GaConfig,
        environment: GridEnvironment,
        initial: Vec<Chromosome>,
        rng: R,
    ) -> Result<Self, ConfigError> {
        Self::build(config, environment, initial, true, rng)
    }

    fn sample_initial(
        mut config: GaConfig,
        environment: GridEnvironment,
        fixed_environment: bool,
        mut rng: R,
    ) -> Result<Self, ConfigError> {
        config.grid_size = environment.size();
        config.source = environment.source();
        config.destination = environment.destination();
        config.validate()?;

        let generator = RandomChromosomeGenerator::new(config.chromosome_length());
        let initial: Vec<Chromosome> = (0..config.population_size)
            .map(|_| generator.generate(&mut rng))
            .collect();

        Self::build(config, environment, initial, fixed_environment, rng)
    }

    fn build(
        mut config: GaConfig,
        environment: GridEnvironment,
        initial: Vec<Chromosome>,
        fixed_environment: bool,
        rng: R,
    ) -> Result<Self, ConfigError> {
        config.grid_size = environment.size();
        config.source = environment.source();
        config.destination = environment.destination();
        config.population_size = initial.len();
        config.validate()?;

        let expected = config.chromosome_length();
        if let Some(chromosome) = initial.iter().find(|c| c.len() != expected) {
            return Err(ConfigError::InvalidChromosomeLength {
                expected,
                got: chromosome.len(),
            });
        }

        let selection = Box::new(RouletteWheelSelection);
        let crossover = Box::new(SinglePointCrossover::new(config.recombination_probability)?);
        let mutation = Box::new(PerGeneMutation::new(config.mutation_probability)?);
        let elites_selector = Box::new(ElitesByNumberSelector::from_fraction(
            config.elitism_fraction,
            config.population_size,
        )?);

        log::info!(
            "New run: grid {}x{}, {} -> {}, {} obstacles, population {}, chromosome length {}, best possible length {}",
            environment.size(),
            environment.size(),
            environment.source(),
            environment.destination(),
            environment.obstacles().len(),
            config.population_size,
            config.chromosome_length(),
            environment.best_possible_length(),
        );

        let mut ga = Self {
            config,
            environment,
            fixed_environment,
            population: Vec::new(),
            evaluations: Vec::new(),
            raw_fitness: Vec::new(),
            evaluator: PopulationEvaluator::default(),
            selection,
            crossover,
            mutation,
            elites_selector,
            generation: 0,
            statistics: StatisticsHistory::new(),
            best_path: Vec::new(),
            previous_best_path: Vec::new(),
            is_optimal: false,
            rng,
        };
        ga.install(initial);
        Ok(ga)
    }

    /// Helper: build the next population from the current one
    fn breed_next_population(&mut self) -> Vec<Chromosome> {
        let population_size = self.population.len();
        let mut next_solutions: Vec<Solution<Chromosome>> = Vec::with_capacity(population_size);

        // Elitism
        let number_of_elites = self
            .elites_selector
            .pass_elites(&mut next_solutions, &self.population);

        let mut next: Vec<Chromosome> = next_solutions
            .into_iter()
            .map(|solution| solution.chromosome)
            .collect();

        // New generation
        for _ in number_of_elites..population_size {
            let parent1 = &self.population[self.selection.select(&self.population, &mut self.rng)];
            let parent2 = &self.population[self.selection.select(&self.population, &mut self.rng)];

            let (offspring1, offspring2) = self.crossover.crossover(
                parent1.get_chromosome(),
                parent2.get_chromosome(),
                &mut self.rng,
            );
            let mut offspring = if self.rng.random_bool(0.5) {
                offspring1
            } else {
                offspring2
            };

            self.mutation.mutate(&mut offspring, &mut self.rng);
            next.push(offspring);
        }

        next
    }

    /// Advances one generation: breed, replace the population, evaluate.
    pub fn evolve_one_generation(&mut self) {
        let next = self.breed_next_population();
        self.generation += 1;
        self.install(next);
    }

    /// Evaluates `chromosomes` as the current generation and records its statistics.
    fn install(&mut self, chromosomes: Vec<Chromosome>) {
        let PopulationEvaluation {
            solutions,
            records,
            raw_fitness,
        } = self.evaluator.evaluate(chromosomes, &self.environment);

        self.population = solutions;
        self.evaluations = records;
        self.raw_fitness = raw_fitness;

        let scores = self.fitness_vector();
        let Some((best, worst)) = best_and_worst(&scores) else {
            return;
        };

        let stats = GenerationStatistics::from_generation(
            self.generation,
            &scores,
            &self.raw_fitness,
            &self.evaluations,
            (best, worst),
            &self.environment,
        );

        self.previous_best_path = std::mem::take(&mut self.best_path);
        self.best_path = trace_path(&self.environment, &self.population[best].chromosome.genes);
        self.is_optimal = stats.best_location == self.environment.destination()
            && stats.best_length <= self.environment.best_possible_length();

        log::debug!(
            "Gen {}: best = {:.5}, worst = {:.5}, avg = {:.5}, best location = {}, best length = {}, best distance = {}",
            stats.generation,
            stats.best_fitness,
            stats.worst_fitness,
            stats.average_fitness,
            stats.best_location,
            stats.best_length,
            stats.best_distance,
        );

        self.statistics.push(stats);
    }

    /// Runs `generations` more generations or until the best path is optimal.
    pub fn fit(&mut self, generations: usize) -> &Solution<Chromosome> {
        for _ in 0..generations {
            if self.is_optimal {
                break;
            }
            self.evolve_one_generation();
        }
        self.best_solution()
    }
}

impl<R> GeneticAlgorithm<R> {
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    pub fn environment(&self) -> &GridEnvironment {
        &self.environment
    }

    /// True when the run was built on a caller-supplied environment.
    pub fn has_fixed_environment(&self) -> bool {
        self.fixed_environment
    }

    pub fn obstacles(&self) -> &[Cell] {
        self.environment.obstacles()
    }

    /// Number of reproduction cycles so far; 0 is the initial population.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Get a reference to the current population
    pub fn population(&self) -> &[Solution<Chromosome>] {
        &self.population
    }

    pub fn population_size(&self) -> usize {
        self.population.len()
    }

    pub fn chromosome_length(&self) -> usize {
        self.config.chromosome_length()
    }

    /// Normalized fitness of the current population, in population order.
    pub fn fitness_vector(&self) -> Vec<f64> {
        self.population.iter().map(|s| s.get_score()).collect()
    }

    /// Un-normalized fitness of the current population, in population order.
    pub fn raw_fitness(&self) -> &[f64] {
        &self.raw_fitness
    }

    pub fn evaluations(&self) -> &[EvaluationRecord] {
        &self.evaluations
    }

    pub fn statistics(&self) -> &StatisticsHistory {
        &self.statistics
    }

    pub fn latest_statistics(&self) -> Option<&GenerationStatistics> {
        self.statistics.latest()
    }

    pub fn best_fitness_history(&self) -> Vec<f64> {
        self.statistics.best_fitness()
    }

    pub fn worst_fitness_history(&self) -> Vec<f64> {
        self.statistics.worst_fitness()
    }

    pub fn average_fitness_history(&self) -> Vec<f64> {
        self.statistics.average_fitness()
    }

    /// First solution with the highest score in the current population.
    pub fn best_solution(&self) -> &Solution<Chromosome> {
        let scores = self.fitness_vector();
        let best = best_and_worst(&scores).map(|(best, _)| best).unwrap_or(0);
        &self.population[best]
    }

    /// Cells walked by the current best chromosome.
    pub fn best_path(&self) -> &[Cell] {
        &self.best_path
    }

    /// Best path of the previous generation.
    pub fn previous_best_path(&self) -> &[Cell] {
        &self.previous_best_path
    }

    pub fn best_possible_length(&self) -> usize {
        self.environment.best_possible_length()
    }

    /// The best chromosome reaches the destination in no more than the
    /// Manhattan distance between source and destination.
    pub fn is_optimal(&self) -> bool {
        self.is_optimal
    }
}
