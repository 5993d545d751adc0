mod ga_common;

use anyhow::Result;
use clap::Parser;
use ga_common::{run_ga, GaArgs};

/// Genetic Algorithm searching for a short obstacle-free path on a grid
#[derive(Parser, Debug)]
#[command(name = "ga")]
#[command(about = "Run the genetic path search once and print per-generation statistics", long_about = None)]
struct Cli {
    #[command(flatten)]
    ga: GaArgs,

    /// Random seed for reproducibility
    #[arg(long, default_value_t = 42)]
    rng_seed: u64,

    /// Only print the final summary
    #[arg(short = 'q', long)]
    quiet: bool,
}

// Execution example:
// cargo run --bin ga -- -n 10 -s 0,0 -d 9,9 -p 40
// cargo run --bin ga -- -n 100 -o 10 -g 800

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let summary = run_ga(&cli.ga, cli.rng_seed, !cli.quiet)?;

    println!(
        "\nSeed {} finished ({:?}) after {} generations: best location = {}, best length = {}, best possible length = {}, reached destination = {}",
        summary.seed,
        summary.termination,
        summary.generations,
        summary.best_location,
        summary.best_length,
        summary.best_possible_length,
        summary.reached_destination,
    );
    Ok(())
}
