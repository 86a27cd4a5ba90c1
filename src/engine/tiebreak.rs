//! Tiebreak state machine played at 6-6.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, PlayerPair, SimRng};
use crate::stats::MatchObserver;

use super::matchup::Matchup;
use super::point::resolve_point;

/// Points needed to win a tiebreak (with a two-point margin).
pub const POINTS_TO_WIN_TIEBREAK: u32 = 7;

/// Server of the point at 0-based `point_index`.
///
/// The first server serves one point, then serve changes every two points:
/// A, B, B, A, A, B, B, ...
#[must_use]
pub fn tiebreak_server(first_server: PlayerId, point_index: u32) -> PlayerId {
    if point_index == 0 {
        return first_server;
    }
    if ((point_index - 1) / 2) % 2 == 0 {
        first_server.opponent()
    } else {
        first_server
    }
}

/// Tiebreak points and serve rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TiebreakScore {
    points: PlayerPair<u32>,
    first_server: PlayerId,
}

impl TiebreakScore {
    /// Start a tiebreak with `first_server` serving the opening point.
    pub fn new(first_server: PlayerId) -> Self {
        Self {
            points: PlayerPair::default(),
            first_server,
        }
    }

    /// Points won so far by `player`.
    #[must_use]
    pub fn points(&self, player: PlayerId) -> u32 {
        self.points[player]
    }

    /// Points played so far.
    #[must_use]
    pub fn points_played(&self) -> u32 {
        self.points[PlayerId::ONE] + self.points[PlayerId::TWO]
    }

    /// Who serves the next point.
    #[must_use]
    pub fn server(&self) -> PlayerId {
        tiebreak_server(self.first_server, self.points_played())
    }

    /// Award a point. Returns the tiebreak winner once it is over.
    pub fn record_point(&mut self, winner: PlayerId) -> Option<PlayerId> {
        self.points[winner] += 1;
        self.winner()
    }

    /// The player who has won the tiebreak, if any.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        PlayerId::both().find(|&p| {
            let own = self.points[p];
            own >= POINTS_TO_WIN_TIEBREAK && own >= self.points[p.opponent()] + 2
        })
    }
}

/// Play a tiebreak. Returns the winner.
///
/// Tiebreak points never take the break-point path.
pub fn simulate_tiebreak<O: MatchObserver + ?Sized>(
    rng: &mut SimRng,
    matchup: &Matchup<'_>,
    first_server: PlayerId,
    observer: &mut O,
) -> PlayerId {
    let mut score = TiebreakScore::new(first_server);

    loop {
        let server = score.server();
        let (server_stats, returner_stats) = matchup.serve_order(server);
        let server_won = resolve_point(rng, server_stats, returner_stats, false, server, observer);
        let point_winner = if server_won { server } else { server.opponent() };

        if let Some(winner) = score.record_point(point_winner) {
            return winner;
        }
    }
}
