//! Core types: player identity, statistics records, RNG, configuration,
//! errors.
//!
//! Everything else in the crate is built on these.

pub mod config;
pub mod error;
pub mod player;
pub mod player_stats;
pub mod rng;

pub use config::{MatchFormat, SimulationConfig, MAX_TRIALS, MIN_TRIALS};
pub use error::SimError;
pub use player::{PlayerId, PlayerPair};
pub use player_stats::PlayerStats;
pub use rng::{SimRng, SimRngState};
