//! Benchmark CLI
//!
//! Run batches of games between players and profile the search.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use negamax_engine::{EvaluationWeights, Profile};
use tournament::{
    generate_profile_report, profile_phases, save_profile_csv, Benchmark, BenchmarkConfig,
    PlayerSpec,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Reversi benchmark runner")]
struct Cli {
    /// Log every game and search decision
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play one batch between two players
    Batch {
        /// random, ai:<depth> or ai:<depth>:<profile>
        #[arg(long, default_value = "random")]
        player1: PlayerSpec,

        #[arg(long, default_value = "ai:2")]
        player2: PlayerSpec,

        #[arg(long, short = 'g', default_value_t = 10)]
        games: u32,

        /// CSV output file
        #[arg(long, short = 'o', default_value = "benchmark_results.csv")]
        output: PathBuf,

        /// Also write records and summary as JSON
        #[arg(long)]
        json: Option<PathBuf>,

        /// Batch label (defaults to "<player1> vs <player2>")
        #[arg(long)]
        name: Option<String>,

        /// Seed for reproducible games
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Run the batches listed in a TOML file
    Run {
        #[arg(long, short = 'c')]
        config: PathBuf,
    },

    /// Compare node counts with and without table and ordering
    Profile {
        /// Search depths (comma separated)
        #[arg(long, value_delimiter = ',', default_values_t = [2u8, 3, 4])]
        depths: Vec<u8>,

        /// Seed for the random phase positions
        #[arg(long, default_value_t = 2024)]
        seed: u64,

        /// Weight profile used by the evaluator
        #[arg(long, default_value = "default")]
        profile: Profile,

        #[arg(long, short = 'o', default_value = "profile_all_phases.csv")]
        output: PathBuf,
    },
}

fn init_logging(debug: bool) {
    let default = if debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

fn run_batch(
    player1: PlayerSpec,
    player2: PlayerSpec,
    games: u32,
    output: PathBuf,
    json: Option<PathBuf>,
    name: Option<String>,
    seed: Option<u64>,
) -> Result<()> {
    let mut bench = seed.map_or_else(Benchmark::new, Benchmark::with_seed);
    let name = name.unwrap_or_else(|| format!("{player1} vs {player2}"));
    let summary = bench.run_batch(games, player1, player2, &name)?;
    summary.print_report();

    bench
        .save_csv(&output)
        .with_context(|| format!("saving {}", output.display()))?;
    if let Some(path) = json {
        bench
            .save_json(&path)
            .with_context(|| format!("saving {}", path.display()))?;
    }
    Ok(())
}

fn run_config(path: PathBuf) -> Result<()> {
    let config = BenchmarkConfig::load(&path)
        .with_context(|| format!("loading {}", path.display()))?;
    if config.batches.is_empty() {
        anyhow::bail!("{} lists no batches", path.display());
    }
    let mut bench = config.seed.map_or_else(Benchmark::new, Benchmark::with_seed);
    for summary in bench.run_multi_batch(config.games_per_batch, &config.batches)? {
        summary.print_report();
    }
    bench.save_csv(&config.output)?;
    if let Some(json) = &config.json_output {
        bench.save_json(json)?;
    }
    Ok(())
}

fn run_profile(depths: Vec<u8>, seed: u64, profile: Profile, output: PathBuf) -> Result<()> {
    let weights: EvaluationWeights = *profile.weights();
    let rows = profile_phases(&depths, seed, weights)?;
    print!("{}", generate_profile_report(&rows));
    save_profile_csv(&rows, &output)?;
    info!("profile written to {}", output.display());
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    match cli.command {
        Command::Batch {
            player1,
            player2,
            games,
            output,
            json,
            name,
            seed,
        } => run_batch(player1, player2, games, output, json, name, seed),
        Command::Run { config } => run_config(config),
        Command::Profile {
            depths,
            seed,
            profile,
            output,
        } => run_profile(depths, seed, profile, output),
    }
}
