//! Statistics accumulation for simulated matches.
//!
//! ## Overview
//!
//! - **MatchObserver**: hooks the engine fires for every serve, rally and
//!   break point. No-op by default.
//! - **MatchStats**: observer that counts events per player
//! - **ObservedStats**: the counters reduced to percentages, in the same
//!   shape as the input `PlayerStats`
//! - **ObservedStatsSum**: running average of observed stats across trials
//!
//! ```
//! use tennis_sim::core::PlayerId;
//! use tennis_sim::stats::{MatchObserver, MatchStats};
//!
//! let mut stats = MatchStats::new();
//! stats.first_serve(PlayerId::ONE, false);
//! stats.second_serve(PlayerId::ONE, false);
//!
//! assert_eq!(stats.observed(PlayerId::ONE).double_fault_per_second_serve, 1.0);
//! ```

pub mod match_stats;
pub mod observed;
pub mod observer;

pub use match_stats::{MatchStats, PlayerCounters};
pub use observed::{ratio, ObservedStats, ObservedStatsSum, OBSERVED_FIELDS};
pub use observer::{MatchObserver, NoopObserver, ServeKind};
