//! Game state machine: deuce/advantage scoring and break-point detection.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, PlayerPair, SimRng};
use crate::stats::MatchObserver;

use super::matchup::Matchup;
use super::point::resolve_point;

/// Points needed to win a game before deuce rules apply.
pub const POINTS_TO_WIN_GAME: u32 = 4;

/// Point counters for the game in progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameScore {
    points: PlayerPair<u32>,
}

impl GameScore {
    /// Start a game at love-all.
    pub fn new() -> Self {
        Self::default()
    }

    /// Points won so far by `player`.
    #[must_use]
    pub fn points(&self, player: PlayerId) -> u32 {
        self.points[player]
    }

    /// Is the next point a break point against `server`?
    ///
    /// True when the receiver has at least three points and leads, i.e. one
    /// more receiver point ends the game. Deuce is not a break point.
    #[must_use]
    pub fn is_break_point(&self, server: PlayerId) -> bool {
        let receiver = self.points[server.opponent()];
        receiver >= 3 && receiver > self.points[server]
    }

    /// Award a point. Returns the game winner once the game is over.
    pub fn record_point(&mut self, winner: PlayerId) -> Option<PlayerId> {
        self.points[winner] += 1;
        self.winner()
    }

    /// The player who has won this game, if any.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        PlayerId::both().find(|&p| {
            let own = self.points[p];
            own >= POINTS_TO_WIN_GAME && own >= self.points[p.opponent()] + 2
        })
    }

    /// Scoreboard call for both players: `0`, `15`, `30`, `40` or `A`.
    ///
    /// Deuce reads `40-40`; advantage reads `A-40`.
    #[must_use]
    pub fn call(&self) -> (&'static str, &'static str) {
        let (p1, p2) = self.points.into_tuple();
        if p1 >= 3 && p2 >= 3 {
            return match p1.cmp(&p2) {
                std::cmp::Ordering::Equal => ("40", "40"),
                std::cmp::Ordering::Greater => ("A", "40"),
                std::cmp::Ordering::Less => ("40", "A"),
            };
        }
        (point_call(p1), point_call(p2))
    }
}

fn point_call(points: u32) -> &'static str {
    match points {
        0 => "0",
        1 => "15",
        2 => "30",
        _ => "40",
    }
}

/// Play one game served by `server`. Returns the game winner.
///
/// The loop has no fixed bound; deuce games run a geometrically distributed
/// number of extra points and terminate almost surely.
pub fn simulate_game<O: MatchObserver + ?Sized>(
    rng: &mut SimRng,
    matchup: &Matchup<'_>,
    server: PlayerId,
    observer: &mut O,
) -> PlayerId {
    let (server_stats, returner_stats) = matchup.serve_order(server);
    let mut score = GameScore::new();

    loop {
        let is_break_point = score.is_break_point(server);
        let server_won = resolve_point(
            rng,
            server_stats,
            returner_stats,
            is_break_point,
            server,
            observer,
        );
        let point_winner = if server_won { server } else { server.opponent() };

        if let Some(winner) = score.record_point(point_winner) {
            return winner;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(p1: u32, p2: u32) -> GameScore {
        let mut s = GameScore::new();
        for _ in 0..p1 {
            s.points[PlayerId::ONE] += 1;
        }
        for _ in 0..p2 {
            s.points[PlayerId::TWO] += 1;
        }
        s
    }

    #[test]
    fn test_love_game() {
        let mut s = GameScore::new();
        assert_eq!(s.record_point(PlayerId::ONE), None);
        assert_eq!(s.record_point(PlayerId::ONE), None);
        assert_eq!(s.record_point(PlayerId::ONE), None);
        assert_eq!(s.record_point(PlayerId::ONE), Some(PlayerId::ONE));
    }

    #[test]
    fn test_deuce_needs_two_clear() {
        let mut s = score(3, 3);
        assert_eq!(s.record_point(PlayerId::TWO), None);
        assert_eq!(s.record_point(PlayerId::ONE), None);
        assert_eq!(s.record_point(PlayerId::ONE), None);
        assert_eq!(s.record_point(PlayerId::ONE), Some(PlayerId::ONE));
        assert_eq!(s.points(PlayerId::ONE), 6);
        assert_eq!(s.points(PlayerId::TWO), 4);
    }

    #[test]
    fn test_break_point_detection() {
        let server = PlayerId::ONE;

        assert!(score(0, 3).is_break_point(server));
        assert!(score(1, 3).is_break_point(server));
        assert!(score(2, 3).is_break_point(server));
        assert!(score(3, 4).is_break_point(server));
        assert!(score(5, 6).is_break_point(server));

        assert!(!score(3, 3).is_break_point(server));
        assert!(!score(0, 2).is_break_point(server));
        assert!(!score(4, 3).is_break_point(server));
        assert!(!score(3, 0).is_break_point(server));
    }

    #[test]
    fn test_break_point_is_relative_to_server() {
        let s = score(3, 0);
        assert!(s.is_break_point(PlayerId::TWO));
        assert!(!s.is_break_point(PlayerId::ONE));
    }

    #[test]
    fn test_calls() {
        assert_eq!(score(0, 0).call(), ("0", "0"));
        assert_eq!(score(1, 2).call(), ("15", "30"));
        assert_eq!(score(3, 2).call(), ("40", "30"));
        assert_eq!(score(3, 3).call(), ("40", "40"));
        assert_eq!(score(5, 4).call(), ("A", "40"));
        assert_eq!(score(6, 7).call(), ("40", "A"));
    }
}
