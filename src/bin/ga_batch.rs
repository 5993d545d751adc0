mod ga_common;

use anyhow::Result;
use clap::Parser;
use ga_common::{run_ga, GaArgs};
use gridpath_genetic_algorithm::genetic_algorithm::Termination;

/// Repeats the path search over consecutive seeds and reports how often it succeeds
#[derive(Parser, Debug)]
#[command(name = "ga_batch")]
#[command(about = "Run the genetic path search for many seeds with the same parameters", long_about = None)]
struct Cli {
    #[command(flatten)]
    ga: GaArgs,

    /// Number of runs
    #[arg(short = 'r', long, default_value_t = 20)]
    runs: u64,

    /// Seed of the first run; run i uses first_seed + i
    #[arg(long, default_value_t = 0)]
    first_seed: u64,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut converged = 0;
    let mut reached = 0;
    let mut total_generations = 0;

    for seed in cli.first_seed..cli.first_seed + cli.runs {
        let summary = run_ga(&cli.ga, seed, false)?;
        println!(
            "Seed {}: {:?} at generation {}, best location = {}, best length = {} (best possible {})",
            summary.seed,
            summary.termination,
            summary.generations,
            summary.best_location,
            summary.best_length,
            summary.best_possible_length,
        );

        if summary.termination == Termination::Converged {
            converged += 1;
        }
        if summary.reached_destination {
            reached += 1;
        }
        total_generations += summary.generations;
    }

    let runs = cli.runs.max(1) as f64;
    println!(
        "\n{} runs: {} converged, {} reached the destination, {:.1} generations on average",
        cli.runs,
        converged,
        reached,
        total_generations as f64 / runs,
    );
    Ok(())
}
