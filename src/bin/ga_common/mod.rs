use anyhow::{Context, Result};
use clap::Args;
use gridpath_genetic_algorithm::{
    genetic_algorithm::{
        GaConfig, GenerationStatistics, GeneticAlgorithm, RunController, Termination,
        DEFAULT_ELITISM_FRACTION, DEFAULT_MUTATION_PROBABILITY, DEFAULT_RECOMBINATION_PROBABILITY,
    },
    grid::Cell,
};
use rand::{rngs::StdRng, SeedableRng};

/// Run parameters shared by the GA binaries
#[derive(Args, Debug, Clone)]
pub struct GaArgs {
    /// Population size
    #[arg(short = 'p', long, default_value_t = 20)]
    pub pop_size: usize,

    /// Grid size (the grid is N x N)
    #[arg(short = 'n', long, default_value_t = 10)]
    pub grid_size: usize,

    /// Source cell as "row,col" (random if omitted)
    #[arg(short = 's', long)]
    pub source: Option<String>,

    /// Destination cell as "row,col" (random if omitted)
    #[arg(short = 'd', long)]
    pub destination: Option<String>,

    /// Percent of grid cells that are obstacles (0-99)
    #[arg(short = 'o', long, default_value_t = 0)]
    pub obstacles_percent: u32,

    /// Generation cap (defaults to 300 for grids up to 10, 500 otherwise)
    #[arg(short = 'g', long)]
    pub generations: Option<usize>,

    /// Fraction of the population copied unchanged into the next generation
    #[arg(long, default_value_t = DEFAULT_ELITISM_FRACTION)]
    pub elitism: f64,

    /// Recombination probability (0.0-1.0)
    #[arg(long, default_value_t = DEFAULT_RECOMBINATION_PROBABILITY)]
    pub recombination: f64,

    /// Per-gene mutation probability (0.0-1.0)
    #[arg(short = 'm', long, default_value_t = DEFAULT_MUTATION_PROBABILITY)]
    pub mutation: f64,
}

impl GaArgs {
    /// Builds the run configuration. Missing endpoints are drawn from `rng`,
    /// which then goes on to drive the run itself.
    pub fn to_config(&self, rng: &mut StdRng) -> Result<GaConfig> {
        let mut config = GaConfig::new(
            self.pop_size,
            self.grid_size,
            Cell::new(0, 0),
            Cell::new(0, 0),
            self.obstacles_percent as f64 / 100.0,
        )
        .with_elitism_fraction(self.elitism)
        .with_recombination_probability(self.recombination)
        .with_mutation_probability(self.mutation);

        if self.source.is_none() || self.destination.is_none() {
            let random = config.clone().with_random_endpoints(rng);
            config.source = random.source;
            config.destination = random.destination;
        }
        if let Some(source) = &self.source {
            config.source = source
                .parse()
                .with_context(|| format!("invalid --source '{}'", source))?;
        }
        if let Some(destination) = &self.destination {
            config.destination = destination
                .parse()
                .with_context(|| format!("invalid --destination '{}'", destination))?;
        }

        config.validate().context("invalid GA configuration")?;
        Ok(config)
    }
}

/// Outcome of one run
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub seed: u64,
    pub termination: Termination,
    pub generations: usize,
    pub best_location: Cell,
    pub best_length: usize,
    pub best_possible_length: usize,
    pub reached_destination: bool,
}

/// Runs the Genetic Algorithm for one seed until it converges or hits the cap
pub fn run_ga(args: &GaArgs, seed: u64, verbose: bool) -> Result<RunSummary> {
    let mut rng = StdRng::seed_from_u64(seed);
    let config = args.to_config(&mut rng)?;
    let ga = GeneticAlgorithm::new(config, rng).context("failed to build the GA run")?;

    if verbose {
        println!(
            "Source: {}  Destination: {}  Obstacles: {}  Chromosome length: {}  Best possible length: {}",
            ga.environment().source(),
            ga.environment().destination(),
            ga.obstacles().len(),
            ga.chromosome_length(),
            ga.best_possible_length(),
        );
        if let Some(stats) = ga.latest_statistics() {
            print_generation(stats);
        }
    }

    let mut controller = match args.generations {
        Some(cap) => RunController::new(ga, cap),
        None => RunController::with_default_cap(ga),
    };
    let termination = controller.run_with_callback(|ga| {
        if verbose {
            if let Some(stats) = ga.latest_statistics() {
                print_generation(stats);
            }
        }
    });

    let ga = controller.algorithm();
    let stats = ga
        .latest_statistics()
        .context("run finished without statistics")?;

    Ok(RunSummary {
        seed,
        termination,
        generations: ga.generation(),
        best_location: stats.best_location,
        best_length: stats.best_length,
        best_possible_length: ga.best_possible_length(),
        reached_destination: stats.best_location == ga.environment().destination(),
    })
}

fn print_generation(stats: &GenerationStatistics) {
    println!(
        "Gen {}: best = {:.5}, avg = {:.5}, worst = {:.5}, best length = {}, best distance = {}, worst length = {}, worst distance = {}",
        stats.generation,
        stats.best_fitness,
        stats.average_fitness,
        stats.worst_fitness,
        stats.best_length,
        stats.best_distance,
        stats.worst_length,
        stats.worst_distance,
    );
}
