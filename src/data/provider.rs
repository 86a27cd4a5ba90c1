//! The seam between the simulator and wherever player statistics live.

use crate::core::{PlayerStats, SimError};

use super::surface::Surface;

/// Statistics resolved for one player on one surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatsLookup {
    pub stats: PlayerStats,
    /// The record came from hard-court data because the requested surface
    /// had none.
    pub is_fallback: bool,
}

impl StatsLookup {
    /// Warning shown to users when fallback data stood in.
    #[must_use]
    pub fn fallback_warning(&self, player: &str, surface: Surface) -> Option<String> {
        self.is_fallback
            .then(|| format!("{player} using hard court data for {surface} surface"))
    }
}

/// Resolves `(player, surface)` to statistics.
///
/// Implementations report `UnknownPlayer` / `MissingSurface` rather than
/// inventing defaults.
pub trait StatsProvider {
    fn lookup(&self, player: &str, surface: Surface) -> Result<StatsLookup, SimError>;
}

impl<P: StatsProvider + ?Sized> StatsProvider for &P {
    fn lookup(&self, player: &str, surface: Surface) -> Result<StatsLookup, SimError> {
        (**self).lookup(player, surface)
    }
}
