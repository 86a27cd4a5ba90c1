//! Simulation configuration types.
//!
//! - `MatchFormat`: best-of-3 or best-of-5
//! - `SimulationConfig`: everything the Monte Carlo driver needs besides the
//!   two player records

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::SimError;

/// Fewest trials a run accepts.
pub const MIN_TRIALS: u32 = 1;

/// Most trials a run accepts.
pub const MAX_TRIALS: u32 = 10_000;

/// Match length.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchFormat {
    /// First to two sets.
    #[default]
    #[serde(rename = "best3")]
    BestOfThree,
    /// First to three sets.
    #[serde(rename = "best5")]
    BestOfFive,
}

impl MatchFormat {
    /// Sets a player must win to take the match.
    #[must_use]
    pub const fn sets_to_win(self) -> u8 {
        match self {
            MatchFormat::BestOfThree => 2,
            MatchFormat::BestOfFive => 3,
        }
    }

    /// Upper bound on sets played.
    #[must_use]
    pub const fn max_sets(self) -> u8 {
        self.sets_to_win() * 2 - 1
    }

    /// Wire name (`best3` / `best5`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            MatchFormat::BestOfThree => "best3",
            MatchFormat::BestOfFive => "best5",
        }
    }
}

impl FromStr for MatchFormat {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "best3" => Ok(MatchFormat::BestOfThree),
            "best5" => Ok(MatchFormat::BestOfFive),
            other => Err(SimError::InvalidFormat {
                value: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for MatchFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Monte Carlo run configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Match length for every trial.
    pub format: MatchFormat,

    /// Number of independent matches to play.
    pub num_trials: u32,

    /// RNG seed. `None` draws a fresh seed from OS entropy per run.
    pub seed: Option<u64>,

    /// Record serve/return events and average the observed percentages.
    pub track_detailed_stats: bool,

    /// Spread trials over the rayon thread pool.
    pub parallel: bool,

    /// Progress checkpoints per run (10 = roughly every 10%).
    pub progress_steps: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            format: MatchFormat::BestOfThree,
            num_trials: 1000,
            seed: None,
            track_detailed_stats: false,
            parallel: false,
            progress_steps: 10,
        }
    }
}

impl SimulationConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the match format.
    #[must_use]
    pub fn with_format(mut self, format: MatchFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the number of trials.
    #[must_use]
    pub fn with_trials(mut self, trials: u32) -> Self {
        self.num_trials = trials;
        self
    }

    /// Fix the RNG seed for reproducible runs.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enable observed-statistics tracking.
    #[must_use]
    pub fn with_detailed_stats(mut self, track: bool) -> Self {
        self.track_detailed_stats = track;
        self
    }

    /// Run trials on the rayon pool.
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set how many progress checkpoints a run emits.
    #[must_use]
    pub fn with_progress_steps(mut self, steps: u32) -> Self {
        self.progress_steps = steps;
        self
    }

    /// Reject out-of-range parameters before any work starts.
    pub fn validate(&self) -> Result<(), SimError> {
        if !(MIN_TRIALS..=MAX_TRIALS).contains(&self.num_trials) {
            return Err(SimError::InvalidTrialCount {
                value: u64::from(self.num_trials),
                min: MIN_TRIALS,
                max: MAX_TRIALS,
            });
        }
        Ok(())
    }
}
