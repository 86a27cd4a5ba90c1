//! Match orchestrator: sets into a best-of-three or best-of-five match.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{MatchFormat, PlayerId, PlayerPair, PlayerStats, SimRng};
use crate::stats::{MatchObserver, MatchStats, NoopObserver, ObservedStats};

use super::matchup::Matchup;
use super::set::{simulate_set, SetScore};

/// Set history of one match; five sets fit inline.
pub type SetScores = SmallVec<[SetScore; 5]>;

/// Outcome of one simulated match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Match winner.
    pub winner: PlayerId,

    /// Games per set, in the order played.
    pub set_scores: SetScores,

    /// Games played across all sets.
    pub total_games: u32,

    /// Observed serve/return percentages, when tracking was requested.
    pub observed: Option<PlayerPair<ObservedStats>>,
}

impl MatchResult {
    /// Sets won by each player. A set counts for whoever won more games.
    #[must_use]
    pub fn sets_won(&self) -> PlayerPair<u8> {
        let mut sets = PlayerPair::<u8>::default();
        for score in &self.set_scores {
            if let Some(leader) = score.leader() {
                sets[leader] += 1;
            }
        }
        sets
    }

    /// Distribution key such as `"2-1"` (player 1 sets first).
    #[must_use]
    pub fn set_key(&self) -> String {
        let (p1, p2) = self.sets_won().into_tuple();
        format!("{p1}-{p2}")
    }
}

/// Play a full match.
///
/// Player 1 serves first in set 1 and the opening server alternates every
/// set regardless of who won the previous one. With `track_stats` a fresh
/// [`MatchStats`] follows every point and is reduced for both players.
pub fn simulate_match(
    rng: &mut SimRng,
    player1: &PlayerStats,
    player2: &PlayerStats,
    format: MatchFormat,
    track_stats: bool,
) -> MatchResult {
    if track_stats {
        let mut stats = MatchStats::new();
        let mut result = simulate_match_with_observer(rng, player1, player2, format, &mut stats);
        result.observed = Some(stats.observed_pair());
        result
    } else {
        simulate_match_with_observer(rng, player1, player2, format, &mut NoopObserver)
    }
}

/// Play a full match reporting every event to `observer`.
///
/// `observed` is left as `None`; the caller owns whatever the observer
/// gathered.
pub fn simulate_match_with_observer<O: MatchObserver + ?Sized>(
    rng: &mut SimRng,
    player1: &PlayerStats,
    player2: &PlayerStats,
    format: MatchFormat,
    observer: &mut O,
) -> MatchResult {
    let matchup = Matchup::new(player1, player2);
    let sets_to_win = format.sets_to_win();

    let mut sets_won = PlayerPair::<u8>::default();
    let mut set_scores = SetScores::new();
    let mut total_games = 0;
    let mut first_server = PlayerId::ONE;

    let winner = loop {
        let set = simulate_set(rng, &matchup, first_server, observer);
        set_scores.push(set.score);
        total_games += set.score.total_games();
        sets_won[set.winner] += 1;

        if sets_won[set.winner] == sets_to_win {
            break set.winner;
        }

        first_server = first_server.opponent();
    };

    MatchResult {
        winner,
        set_scores,
        total_games,
        observed: None,
    }
}
