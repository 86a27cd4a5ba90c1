//! The tennis simulation engine.
//!
//! Nested state machines, innermost first:
//!
//! - `point`: one serve exchange, dominance-weighted
//! - `game`: points to a game, deuce/advantage, break-point detection
//! - `tiebreak`: first to seven by two, A-B-B-A serve rotation
//! - `set`: games to a set, tiebreak at 6-6
//! - `match_sim`: sets to a match, opening server alternating per set
//!
//! Every level takes a `&mut SimRng` and a [`MatchObserver`]; nothing else
//! is carried between points.
//!
//! ```
//! use tennis_sim::core::{MatchFormat, PlayerStats, SimRng};
//! use tennis_sim::engine::simulate_match;
//!
//! let stats = PlayerStats {
//!     first_serve_in_pct: 0.6,
//!     first_serve_win_pct: 0.7,
//!     second_serve_win_pct: 0.5,
//!     double_fault_per_second_serve: 0.05,
//!     vs_first_serve_win_pct: 0.3,
//!     vs_second_serve_win_pct: 0.5,
//!     break_point_save_pct: 0.5,
//!     break_point_conversion_pct: 0.5,
//!     dominance_ratio: 1.0,
//! };
//!
//! let mut rng = SimRng::new(42);
//! let result = simulate_match(&mut rng, &stats, &stats, MatchFormat::BestOfThree, false);
//! assert_eq!(result.sets_won()[result.winner], 2);
//! ```
//!
//! [`MatchObserver`]: crate::stats::MatchObserver

pub mod game;
pub mod match_sim;
pub mod matchup;
pub mod point;
pub mod set;
pub mod tiebreak;

pub use game::{simulate_game, GameScore};
pub use match_sim::{simulate_match, simulate_match_with_observer, MatchResult, SetScores};
pub use matchup::Matchup;
pub use point::{blended_win_probability, rally_win_probability, resolve_point};
pub use set::{simulate_set, SetResult, SetScore, SetStatus};
pub use tiebreak::{simulate_tiebreak, tiebreak_server, TiebreakScore};
