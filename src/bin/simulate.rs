//! Tennis match simulation CLI
//!
//! Runs a Monte Carlo matchup from a JSON statistics table and prints the
//! aggregate as JSON.

use anyhow::{Context, Result};
use clap::Parser;

use tennis_sim::api::simulate_surfaces;
use tennis_sim::data::{StatsProvider, StatsTable, Surface};
use tennis_sim::monte_carlo::{LogProgress, MonteCarlo};
use tennis_sim::{MatchFormat, SimulationConfig};

#[derive(Parser)]
#[command(name = "tennis-sim")]
#[command(about = "Monte Carlo tennis match simulation", long_about = None)]
struct Cli {
    /// Player statistics table (JSON)
    #[arg(long)]
    stats: std::path::PathBuf,

    /// First player (serves first in set 1)
    #[arg(long)]
    player1: String,

    /// Second player
    #[arg(long)]
    player2: String,

    /// Court surface: hard, clay, or grass
    #[arg(long, default_value = "hard", conflicts_with = "all_surfaces")]
    surface: Surface,

    /// Simulate on every surface and print a full report
    #[arg(long)]
    all_surfaces: bool,

    /// Match format: best3 or best5
    #[arg(long, default_value = "best3")]
    format: MatchFormat,

    /// Number of simulated matches (1-10000)
    #[arg(short = 'n', long, default_value = "1000")]
    trials: u32,

    /// RNG seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Track observed serve/return statistics
    #[arg(long)]
    detailed: bool,

    /// Spread trials across all cores
    #[arg(long)]
    parallel: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    let table = StatsTable::load(&cli.stats)
        .with_context(|| format!("loading statistics from {}", cli.stats.display()))?;

    let mut config = SimulationConfig::new()
        .with_format(cli.format)
        .with_trials(cli.trials)
        .with_detailed_stats(cli.detailed)
        .with_parallel(cli.parallel);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    let json = if cli.all_surfaces {
        let report = simulate_surfaces(&table, &cli.player1, &cli.player2, &config)
            .context("simulating all surfaces")?;
        serde_json::to_string_pretty(&report)?
    } else {
        // Fallback warnings are logged by the lookup itself.
        let p1 = table.lookup(&cli.player1, cli.surface)?;
        let p2 = table.lookup(&cli.player2, cli.surface)?;

        let driver = MonteCarlo::new(config)?;
        let result = driver
            .run(&p1.stats, &p2.stats, Some(&mut LogProgress))
            .context("running simulation")?;
        serde_json::to_string_pretty(&result)?
    };

    println!("{json}");
    Ok(())
}
