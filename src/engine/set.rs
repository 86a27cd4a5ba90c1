//! Set state machine: games with alternating serve, tiebreak at 6-6.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, PlayerPair, SimRng};
use crate::stats::MatchObserver;

use super::game::simulate_game;
use super::matchup::Matchup;
use super::tiebreak::simulate_tiebreak;

/// Games needed to win a set (with a two-game margin).
pub const GAMES_TO_WIN_SET: u8 = 6;

/// Where a set stands after the latest game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SetStatus {
    InProgress,
    /// 6-6: the set is decided by a tiebreak.
    TiebreakDue,
    Won(PlayerId),
}

/// Games won by each player in one set.
///
/// Serializes as `[player1_games, player2_games]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SetScore {
    games: PlayerPair<u8>,
}

impl SetScore {
    /// Start a set at 0-0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Score from explicit game counts.
    pub fn from_games(player1: u8, player2: u8) -> Self {
        Self {
            games: PlayerPair::new(player1, player2),
        }
    }

    /// Games won by `player`.
    #[must_use]
    pub fn games(&self, player: PlayerId) -> u8 {
        self.games[player]
    }

    /// `(player1_games, player2_games)`.
    #[must_use]
    pub fn as_tuple(&self) -> (u8, u8) {
        self.games.into_tuple()
    }

    /// Games played in this set.
    #[must_use]
    pub fn total_games(&self) -> u32 {
        u32::from(self.games[PlayerId::ONE]) + u32::from(self.games[PlayerId::TWO])
    }

    /// Player with more games. `None` only for a level (unfinished) score.
    #[must_use]
    pub fn leader(&self) -> Option<PlayerId> {
        let (p1, p2) = self.as_tuple();
        match p1.cmp(&p2) {
            std::cmp::Ordering::Greater => Some(PlayerId::ONE),
            std::cmp::Ordering::Less => Some(PlayerId::TWO),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Award a game and report the new status.
    pub fn record_game(&mut self, winner: PlayerId) -> SetStatus {
        self.games[winner] += 1;
        self.status()
    }

    /// Close the set 7-6 for the tiebreak winner.
    pub fn record_tiebreak(&mut self, winner: PlayerId) -> SetStatus {
        self.games[winner] = GAMES_TO_WIN_SET + 1;
        self.games[winner.opponent()] = GAMES_TO_WIN_SET;
        SetStatus::Won(winner)
    }

    /// Current status of the set.
    #[must_use]
    pub fn status(&self) -> SetStatus {
        for p in PlayerId::both() {
            let own = self.games[p];
            if own >= GAMES_TO_WIN_SET && own >= self.games[p.opponent()] + 2 {
                return SetStatus::Won(p);
            }
        }
        let (p1, p2) = self.as_tuple();
        if p1 == GAMES_TO_WIN_SET && p2 == GAMES_TO_WIN_SET {
            return SetStatus::TiebreakDue;
        }
        if (p1 == GAMES_TO_WIN_SET + 1 && p2 == GAMES_TO_WIN_SET)
            || (p2 == GAMES_TO_WIN_SET + 1 && p1 == GAMES_TO_WIN_SET)
        {
            return SetStatus::Won(if p1 > p2 { PlayerId::ONE } else { PlayerId::TWO });
        }
        SetStatus::InProgress
    }
}

impl std::fmt::Display for SetScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (p1, p2) = self.as_tuple();
        write!(f, "{p1}-{p2}")
    }
}

/// A completed set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SetResult {
    pub winner: PlayerId,
    pub score: SetScore,
    pub tiebreak: bool,
}

/// Play one set with `first_server` serving the opening game.
///
/// At 6-6 the player who served the twelfth game also serves first in the
/// tiebreak.
pub fn simulate_set<O: MatchObserver + ?Sized>(
    rng: &mut SimRng,
    matchup: &Matchup<'_>,
    first_server: PlayerId,
    observer: &mut O,
) -> SetResult {
    let mut score = SetScore::new();
    let mut server = first_server;

    loop {
        let game_winner = simulate_game(rng, matchup, server, observer);

        match score.record_game(game_winner) {
            SetStatus::Won(winner) => {
                return SetResult {
                    winner,
                    score,
                    tiebreak: false,
                };
            }
            SetStatus::TiebreakDue => {
                let winner = simulate_tiebreak(rng, matchup, server, observer);
                score.record_tiebreak(winner);
                return SetResult {
                    winner,
                    score,
                    tiebreak: true,
                };
            }
            SetStatus::InProgress => {}
        }

        server = server.opponent();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(games: &[u8]) -> (SetScore, SetStatus) {
        let mut score = SetScore::new();
        let mut status = SetStatus::InProgress;
        for &g in games {
            let winner = if g == 1 { PlayerId::ONE } else { PlayerId::TWO };
            status = score.record_game(winner);
        }
        (score, status)
    }

    #[test]
    fn test_six_love() {
        let (score, status) = play(&[1, 1, 1, 1, 1, 1]);
        assert_eq!(status, SetStatus::Won(PlayerId::ONE));
        assert_eq!(score.as_tuple(), (6, 0));
    }

    #[test]
    fn test_six_five_continues() {
        let (_, status) = play(&[1, 2, 1, 2, 1, 2, 1, 2, 1, 2, 1]);
        assert_eq!(status, SetStatus::InProgress);
    }

    #[test]
    fn test_seven_five() {
        let (score, status) = play(&[1, 2, 1, 2, 1, 2, 1, 2, 1, 2, 2, 2]);
        assert_eq!(status, SetStatus::Won(PlayerId::TWO));
        assert_eq!(score.as_tuple(), (5, 7));
    }

    #[test]
    fn test_tiebreak_due_at_six_all() {
        let (mut score, status) = play(&[1, 2, 1, 2, 1, 2, 1, 2, 1, 2, 1, 2]);
        assert_eq!(status, SetStatus::TiebreakDue);

        assert_eq!(score.record_tiebreak(PlayerId::TWO), SetStatus::Won(PlayerId::TWO));
        assert_eq!(score.as_tuple(), (6, 7));
        assert_eq!(score.status(), SetStatus::Won(PlayerId::TWO));
        assert_eq!(score.to_string(), "6-7");
    }

    #[test]
    fn test_leader_and_totals() {
        let score = SetScore::from_games(6, 4);
        assert_eq!(score.leader(), Some(PlayerId::ONE));
        assert_eq!(score.total_games(), 10);
        assert_eq!(SetScore::from_games(3, 3).leader(), None);
    }

    #[test]
    fn test_serializes_as_pair() {
        let json = serde_json::to_string(&SetScore::from_games(7, 6)).unwrap();
        assert_eq!(json, "[7,6]");
    }
}
