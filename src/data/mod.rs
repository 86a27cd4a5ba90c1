//! Player statistics lookup.
//!
//! - `Surface`: hard, clay, grass
//! - `StatsProvider`: resolves a player and surface to `PlayerStats`
//! - `StatsTable`: JSON-backed provider with hard-court fallback

pub mod provider;
pub mod surface;
pub mod table;

pub use provider::{StatsLookup, StatsProvider};
pub use surface::Surface;
pub use table::{PlayerRecord, PlayerSummary, StatsTable};
