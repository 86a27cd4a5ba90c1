//! # tennis-sim
//!
//! A Monte Carlo tennis match simulator driven by per-player serve and
//! return statistics.
//!
//! ## Design Principles
//!
//! 1. **Point-level model**: every point is one serve exchange resolved from
//!    the server's and returner's historical rates, weighted by each
//!    player's dominance ratio.
//!
//! 2. **Stateless between points**: games, tiebreaks, sets and matches are
//!    nested state machines sharing nothing but a `&mut SimRng` and an
//!    observer.
//!
//! 3. **Reproducible runs**: trial `i` of a seeded run always draws from the
//!    same ChaCha8 stream, sequentially or on the rayon pool.
//!
//! ## Modules
//!
//! - `core`: player ids, statistics, configuration, RNG, errors
//! - `engine`: point, game, tiebreak, set and match simulation
//! - `stats`: event counters and observed percentages
//! - `monte_carlo`: batch driver, aggregation, progress reporting
//! - `data`: surfaces and statistics lookup
//! - `api`: validated request-level entry points

pub mod api;
pub mod core;
pub mod data;
pub mod engine;
pub mod monte_carlo;
pub mod stats;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    MatchFormat, PlayerId, PlayerPair, PlayerStats, SimError, SimRng, SimRngState,
    SimulationConfig, MAX_TRIALS, MIN_TRIALS,
};

pub use crate::engine::{simulate_match, simulate_match_with_observer, MatchResult, SetScore};

pub use crate::stats::{MatchObserver, MatchStats, ObservedStats};

pub use crate::monte_carlo::{
    run_monte_carlo, AggregateResult, LogProgress, MonteCarlo, ObservedSummary, Progress,
    ProgressSink,
};

pub use crate::data::{StatsLookup, StatsProvider, StatsTable, Surface};

pub use crate::api::{run_simulation, simulate_surfaces, MatchupReport, SurfaceReport};
