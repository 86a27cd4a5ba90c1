//! Request-level entry points.
//!
//! These validate everything up front, so a rejected request never starts a
//! trial.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::{MatchFormat, PlayerStats, SimError, SimulationConfig, MAX_TRIALS, MIN_TRIALS};
use crate::data::{StatsProvider, Surface};
use crate::monte_carlo::{AggregateResult, MonteCarlo, ProgressSink};

/// Run a Monte Carlo simulation from raw request parameters.
///
/// `format` must be `"best3"` or `"best5"` and `num_trials` within
/// `1..=10000`. Both stat records are validated before the first trial.
pub fn run_simulation(
    player1: &PlayerStats,
    player2: &PlayerStats,
    format: &str,
    num_trials: u64,
    progress: Option<&mut dyn ProgressSink>,
    track_detailed_stats: bool,
) -> Result<AggregateResult, SimError> {
    let format: MatchFormat = format.parse()?;
    let num_trials = checked_trials(num_trials)?;
    player1.validate("player 1")?;
    player2.validate("player 2")?;

    let config = SimulationConfig::new()
        .with_format(format)
        .with_trials(num_trials)
        .with_detailed_stats(track_detailed_stats);

    MonteCarlo::new(config)?.run(player1, player2, progress)
}

fn checked_trials(value: u64) -> Result<u32, SimError> {
    u32::try_from(value)
        .ok()
        .filter(|n| (MIN_TRIALS..=MAX_TRIALS).contains(n))
        .ok_or(SimError::InvalidTrialCount {
            value,
            min: MIN_TRIALS,
            max: MAX_TRIALS,
        })
}

/// The model inputs a surface run used, as shown next to its results.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputParameters {
    pub first_serve_in_pct: f64,
    pub first_serve_win_pct: f64,
    pub second_serve_in_pct: f64,
    pub second_serve_win_pct: f64,
    pub vs_first_serve_win_pct: f64,
    pub vs_second_serve_win_pct: f64,
    pub break_point_save_pct: f64,
    pub break_point_conversion_pct: f64,
}

impl From<&PlayerStats> for InputParameters {
    fn from(stats: &PlayerStats) -> Self {
        Self {
            first_serve_in_pct: stats.first_serve_in_pct,
            first_serve_win_pct: stats.first_serve_win_pct,
            second_serve_in_pct: stats.second_serve_in_pct(),
            second_serve_win_pct: stats.second_serve_win_pct,
            vs_first_serve_win_pct: stats.vs_first_serve_win_pct,
            vs_second_serve_win_pct: stats.vs_second_serve_win_pct,
            break_point_save_pct: stats.break_point_save_pct,
            break_point_conversion_pct: stats.break_point_conversion_pct,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchupInputs {
    pub player1: InputParameters,
    pub player2: InputParameters,
}

/// Result of one surface.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SurfaceReport {
    #[serde(flatten)]
    pub result: AggregateResult,
    pub fallback_warnings: Vec<String>,
    pub input_parameters: MatchupInputs,
}

/// Results for one matchup on every surface.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchupReport {
    pub player1_name: String,
    pub player2_name: String,
    pub format: MatchFormat,
    pub num_simulations: u32,
    pub surfaces: BTreeMap<Surface, SurfaceReport>,
    /// Every surface's warnings, in surface order.
    pub fallback_warnings: Vec<String>,
}

/// Simulate a matchup on a single surface.
pub fn simulate_surface<P: StatsProvider + ?Sized>(
    provider: &P,
    player1: &str,
    player2: &str,
    surface: Surface,
    config: &SimulationConfig,
) -> Result<SurfaceReport, SimError> {
    let driver = MonteCarlo::new(config.clone())?;

    let p1 = provider.lookup(player1, surface)?;
    let p2 = provider.lookup(player2, surface)?;
    p1.stats.validate(player1)?;
    p2.stats.validate(player2)?;

    let fallback_warnings: Vec<String> = [
        p1.fallback_warning(player1, surface),
        p2.fallback_warning(player2, surface),
    ]
    .into_iter()
    .flatten()
    .collect();

    log::debug!("Simulating {} vs {} on {}", player1, player2, surface);
    let result = driver.run(&p1.stats, &p2.stats, None)?;

    Ok(SurfaceReport {
        result,
        fallback_warnings,
        input_parameters: MatchupInputs {
            player1: InputParameters::from(&p1.stats),
            player2: InputParameters::from(&p2.stats),
        },
    })
}

/// Simulate a matchup on hard, clay and grass in turn.
///
/// Any lookup failure aborts the whole report.
pub fn simulate_surfaces<P: StatsProvider + ?Sized>(
    provider: &P,
    player1: &str,
    player2: &str,
    config: &SimulationConfig,
) -> Result<MatchupReport, SimError> {
    config.validate()?;

    let mut surfaces = BTreeMap::new();
    let mut fallback_warnings = Vec::new();

    for surface in Surface::ALL {
        let report = simulate_surface(provider, player1, player2, surface, config)?;
        fallback_warnings.extend(report.fallback_warnings.iter().cloned());
        surfaces.insert(surface, report);
    }

    Ok(MatchupReport {
        player1_name: player1.to_string(),
        player2_name: player2.to_string(),
        format: config.format,
        num_simulations: config.num_trials,
        surfaces,
        fallback_warnings,
    })
}
