//! Aggregation of trial outcomes into win rates and distributions.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, PlayerPair};
use crate::engine::MatchResult;
use crate::stats::{ObservedStats, ObservedStatsSum};

/// Occurrences of each final set count, keyed `"p1_sets-p2_sets"`.
pub type SetDistribution = FxHashMap<String, u32>;

/// Observed statistics averaged over every trial, per player.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ObservedSummary {
    pub player1: ObservedStats,
    pub player2: ObservedStats,
}

/// Result of one Monte Carlo run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AggregateResult {
    pub player1_wins: u32,
    pub player2_wins: u32,
    pub player1_win_pct: f64,
    pub player2_win_pct: f64,
    pub set_distributions: SetDistribution,
    pub total_simulations: u32,
    pub average_total_games: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observed_stats: Option<ObservedSummary>,
}

impl AggregateResult {
    /// Wins for one player.
    #[must_use]
    pub fn wins(&self, player: PlayerId) -> u32 {
        if player == PlayerId::ONE {
            self.player1_wins
        } else {
            self.player2_wins
        }
    }

    /// Win share for one player.
    #[must_use]
    pub fn win_pct(&self, player: PlayerId) -> f64 {
        if player == PlayerId::ONE {
            self.player1_win_pct
        } else {
            self.player2_win_pct
        }
    }
}

/// Running totals across trials, folded in trial order.
#[derive(Clone, Debug)]
pub struct TrialTally {
    wins: PlayerPair<u32>,
    set_distribution: SetDistribution,
    total_games: u64,
    observed: Option<PlayerPair<ObservedStatsSum>>,
    trials: u32,
}

impl TrialTally {
    /// Empty tally; `track_observed` keeps per-player observed sums.
    pub fn new(track_observed: bool) -> Self {
        Self {
            wins: PlayerPair::default(),
            set_distribution: SetDistribution::default(),
            total_games: 0,
            observed: track_observed.then(PlayerPair::default),
            trials: 0,
        }
    }

    /// Trials recorded so far.
    #[must_use]
    pub fn trials(&self) -> u32 {
        self.trials
    }

    /// Fold one match into the totals.
    pub fn record(&mut self, result: &MatchResult) {
        self.wins[result.winner] += 1;
        *self.set_distribution.entry(result.set_key()).or_insert(0) += 1;
        self.total_games += u64::from(result.total_games);

        if let (Some(sums), Some(observed)) = (self.observed.as_mut(), result.observed.as_ref()) {
            for (player, stats) in observed.iter() {
                sums[player].add(stats);
            }
        }

        self.trials += 1;
    }

    /// Turn the totals into percentages.
    #[must_use]
    pub fn finish(self) -> AggregateResult {
        let n = f64::from(self.trials.max(1));
        let (player1_wins, player2_wins) = self.wins.into_tuple();

        AggregateResult {
            player1_wins,
            player2_wins,
            player1_win_pct: f64::from(player1_wins) / n,
            player2_win_pct: f64::from(player2_wins) / n,
            set_distributions: self.set_distribution,
            total_simulations: self.trials,
            average_total_games: self.total_games as f64 / n,
            observed_stats: self.observed.map(|sums| ObservedSummary {
                player1: sums[PlayerId::ONE].average(),
                player2: sums[PlayerId::TWO].average(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::SetScore;
    use smallvec::smallvec;

    fn result(winner: PlayerId, sets: &[(u8, u8)]) -> MatchResult {
        MatchResult {
            winner,
            set_scores: sets.iter().map(|&(a, b)| SetScore::from_games(a, b)).collect(),
            total_games: sets.iter().map(|&(a, b)| u32::from(a) + u32::from(b)).sum(),
            observed: None,
        }
    }

    #[test]
    fn test_tally_counts() {
        let mut tally = TrialTally::new(false);
        tally.record(&result(PlayerId::ONE, &[(6, 4), (6, 3)]));
        tally.record(&result(PlayerId::TWO, &[(6, 4), (3, 6), (6, 7)]));
        tally.record(&result(PlayerId::ONE, &[(7, 6), (4, 6), (6, 2)]));
        tally.record(&result(PlayerId::ONE, &[(6, 0), (6, 0)]));

        let agg = tally.finish();
        assert_eq!(agg.player1_wins, 3);
        assert_eq!(agg.player2_wins, 1);
        assert_eq!(agg.player1_win_pct, 0.75);
        assert_eq!(agg.player2_win_pct, 0.25);
        assert_eq!(agg.total_simulations, 4);
        assert_eq!(agg.set_distributions["2-0"], 2);
        assert_eq!(agg.set_distributions["1-2"], 1);
        assert_eq!(agg.set_distributions["2-1"], 1);
        assert!(agg.observed_stats.is_none());

        let games = (19 + 32 + 31 + 12) as f64 / 4.0;
        assert!((agg.average_total_games - games).abs() < 1e-12);
    }

    #[test]
    fn test_observed_average() {
        let mut tally = TrialTally::new(true);
        let mut a = result(PlayerId::ONE, &[(6, 0), (6, 0)]);
        a.observed = Some(PlayerPair::new(
            ObservedStats {
                first_serve_in_pct: 0.8,
                ..Default::default()
            },
            ObservedStats::default(),
        ));
        let mut b = a.clone();
        b.observed = Some(PlayerPair::new(
            ObservedStats {
                first_serve_in_pct: 0.6,
                ..Default::default()
            },
            ObservedStats {
                break_point_save_pct: 1.0,
                ..Default::default()
            },
        ));

        tally.record(&a);
        tally.record(&b);

        let summary = tally.finish().observed_stats.expect("tracked");
        assert!((summary.player1.first_serve_in_pct - 0.7).abs() < 1e-12);
        assert!((summary.player2.break_point_save_pct - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_serialization_skips_missing_observed() {
        let mut tally = TrialTally::new(false);
        tally.record(&MatchResult {
            winner: PlayerId::TWO,
            set_scores: smallvec![SetScore::from_games(0, 6), SetScore::from_games(0, 6)],
            total_games: 12,
            observed: None,
        });
        let agg = tally.finish();

        let json = serde_json::to_value(&agg).unwrap();
        assert!(json.get("observed_stats").is_none());
        assert_eq!(json["set_distributions"]["0-2"], 1);

        let back: AggregateResult = serde_json::from_value(json).unwrap();
        assert_eq!(back, agg);
    }
}
