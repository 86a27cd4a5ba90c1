//! The two statistics records a match is played between.

use crate::core::{PlayerId, PlayerPair, PlayerStats};

/// Borrowed statistics for player 1 and player 2.
#[derive(Clone, Copy, Debug)]
pub struct Matchup<'a> {
    players: PlayerPair<&'a PlayerStats>,
}

impl<'a> Matchup<'a> {
    /// Pair up player 1 and player 2.
    pub fn new(player1: &'a PlayerStats, player2: &'a PlayerStats) -> Self {
        Self {
            players: PlayerPair::new(player1, player2),
        }
    }

    /// Statistics for one player.
    #[must_use]
    pub fn stats(&self, player: PlayerId) -> &'a PlayerStats {
        self.players[player]
    }

    /// `(server stats, returner stats)` for a point served by `server`.
    #[must_use]
    pub fn serve_order(&self, server: PlayerId) -> (&'a PlayerStats, &'a PlayerStats) {
        (self.players[server], self.players[server.opponent()])
    }
}
