//! Event counters for one simulated match.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, PlayerPair};

use super::observed::{ratio, ObservedStats};
use super::observer::{MatchObserver, ServeKind};

/// Counters for one player, covering both their service and return games.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerCounters {
    // Serving
    pub first_serves_attempted: u32,
    pub first_serves_in: u32,
    pub first_serve_points_won: u32,
    pub second_serves_attempted: u32,
    pub double_faults: u32,
    pub second_serve_points_played: u32,
    pub second_serve_points_won: u32,
    pub break_points_faced: u32,
    pub break_points_saved: u32,

    // Returning
    pub return_first_points_played: u32,
    pub return_first_points_won: u32,
    pub return_second_points_played: u32,
    pub return_second_points_won: u32,
    pub break_point_opportunities: u32,
    pub break_points_converted: u32,

    pub points_served: u32,
    pub points_won: u32,
}

impl PlayerCounters {
    /// Reduce to observed percentages.
    ///
    /// Second-serve rallies exclude double faults; those only count toward
    /// `double_fault_per_second_serve` and `second_serve_in_pct`.
    #[must_use]
    pub fn observed(&self) -> ObservedStats {
        ObservedStats {
            first_serve_in_pct: ratio(self.first_serves_in, self.first_serves_attempted),
            first_serve_win_pct: ratio(self.first_serve_points_won, self.first_serves_in),
            second_serve_in_pct: ratio(
                self.second_serves_attempted - self.double_faults,
                self.second_serves_attempted,
            ),
            second_serve_win_pct: ratio(
                self.second_serve_points_won,
                self.second_serve_points_played,
            ),
            double_fault_per_second_serve: ratio(
                self.double_faults,
                self.second_serves_attempted,
            ),
            vs_first_serve_win_pct: ratio(
                self.return_first_points_won,
                self.return_first_points_played,
            ),
            vs_second_serve_win_pct: ratio(
                self.return_second_points_won,
                self.return_second_points_played,
            ),
            break_point_save_pct: ratio(self.break_points_saved, self.break_points_faced),
            break_point_conversion_pct: ratio(
                self.break_points_converted,
                self.break_point_opportunities,
            ),
        }
    }
}

/// Per-match statistics accumulator.
///
/// Attach as the observer of a match to count every serve, return, and
/// break-point event for both players.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchStats {
    counters: PlayerPair<PlayerCounters>,
}

impl MatchStats {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw counters for one player.
    #[must_use]
    pub fn counters(&self, player: PlayerId) -> &PlayerCounters {
        &self.counters[player]
    }

    /// Observed percentages for one player.
    #[must_use]
    pub fn observed(&self, player: PlayerId) -> ObservedStats {
        self.counters[player].observed()
    }

    /// Observed percentages for both players.
    #[must_use]
    pub fn observed_pair(&self) -> PlayerPair<ObservedStats> {
        PlayerPair::from_fn(|p| self.observed(p))
    }
}

impl MatchObserver for MatchStats {
    fn first_serve(&mut self, server: PlayerId, landed: bool) {
        let c = &mut self.counters[server];
        c.first_serves_attempted += 1;
        if landed {
            c.first_serves_in += 1;
        }
    }

    fn second_serve(&mut self, server: PlayerId, landed: bool) {
        let c = &mut self.counters[server];
        c.second_serves_attempted += 1;
        if !landed {
            c.double_faults += 1;
        }
    }

    fn serve_point(&mut self, server: PlayerId, kind: ServeKind, server_won: bool) {
        let returner = server.opponent();
        match kind {
            ServeKind::First => {
                if server_won {
                    self.counters[server].first_serve_points_won += 1;
                }
                let r = &mut self.counters[returner];
                r.return_first_points_played += 1;
                if !server_won {
                    r.return_first_points_won += 1;
                }
            }
            ServeKind::Second => {
                let s = &mut self.counters[server];
                s.second_serve_points_played += 1;
                if server_won {
                    s.second_serve_points_won += 1;
                }
                let r = &mut self.counters[returner];
                r.return_second_points_played += 1;
                if !server_won {
                    r.return_second_points_won += 1;
                }
            }
        }
    }

    fn break_point(&mut self, server: PlayerId, saved: bool) {
        let s = &mut self.counters[server];
        s.break_points_faced += 1;
        if saved {
            s.break_points_saved += 1;
        }
        let r = &mut self.counters[server.opponent()];
        r.break_point_opportunities += 1;
        if !saved {
            r.break_points_converted += 1;
        }
    }

    fn point_played(&mut self, server: PlayerId, server_won: bool) {
        self.counters[server].points_served += 1;
        let winner = if server_won { server } else { server.opponent() };
        self.counters[winner].points_won += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stats_are_zero() {
        let stats = MatchStats::new();
        let observed = stats.observed(PlayerId::ONE);
        assert_eq!(observed, ObservedStats::default());
    }

    #[test]
    fn test_first_serve_counts() {
        let mut stats = MatchStats::new();
        let p1 = PlayerId::ONE;

        stats.first_serve(p1, true);
        stats.serve_point(p1, ServeKind::First, true);
        stats.first_serve(p1, true);
        stats.serve_point(p1, ServeKind::First, false);
        stats.first_serve(p1, false);

        let c = stats.counters(p1);
        assert_eq!(c.first_serves_attempted, 3);
        assert_eq!(c.first_serves_in, 2);
        assert_eq!(c.first_serve_points_won, 1);

        let r = stats.counters(PlayerId::TWO);
        assert_eq!(r.return_first_points_played, 2);
        assert_eq!(r.return_first_points_won, 1);

        let observed = stats.observed(p1);
        assert!((observed.first_serve_in_pct - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(observed.first_serve_win_pct, 0.5);
        assert_eq!(stats.observed(PlayerId::TWO).vs_first_serve_win_pct, 0.5);
    }

    #[test]
    fn test_double_faults() {
        let mut stats = MatchStats::new();
        let p2 = PlayerId::TWO;

        for _ in 0..4 {
            stats.first_serve(p2, false);
            stats.second_serve(p2, false);
        }

        let observed = stats.observed(p2);
        assert_eq!(observed.double_fault_per_second_serve, 1.0);
        assert_eq!(observed.second_serve_in_pct, 0.0);
        assert_eq!(observed.second_serve_win_pct, 0.0);
    }

    #[test]
    fn test_second_serve_rally_attribution() {
        let mut stats = MatchStats::new();
        let p1 = PlayerId::ONE;

        stats.second_serve(p1, true);
        stats.serve_point(p1, ServeKind::Second, false);
        stats.second_serve(p1, false);

        let c = stats.counters(p1);
        assert_eq!(c.second_serves_attempted, 2);
        assert_eq!(c.double_faults, 1);
        assert_eq!(c.second_serve_points_played, 1);
        assert_eq!(c.second_serve_points_won, 0);

        let observed = stats.observed(p1);
        assert_eq!(observed.second_serve_in_pct, 0.5);
        assert_eq!(observed.double_fault_per_second_serve, 0.5);
        assert_eq!(stats.observed(PlayerId::TWO).vs_second_serve_win_pct, 1.0);
    }

    #[test]
    fn test_break_points_are_keyed_by_player() {
        let mut stats = MatchStats::new();

        stats.break_point(PlayerId::ONE, true);
        stats.break_point(PlayerId::ONE, false);
        stats.break_point(PlayerId::TWO, false);

        let p1 = stats.counters(PlayerId::ONE);
        assert_eq!(p1.break_points_faced, 2);
        assert_eq!(p1.break_points_saved, 1);
        assert_eq!(p1.break_point_opportunities, 1);
        assert_eq!(p1.break_points_converted, 1);

        let observed = stats.observed_pair();
        assert_eq!(observed[PlayerId::ONE].break_point_save_pct, 0.5);
        assert_eq!(observed[PlayerId::TWO].break_point_conversion_pct, 0.5);
        assert_eq!(observed[PlayerId::TWO].break_point_save_pct, 0.0);
    }

    #[test]
    fn test_point_played() {
        let mut stats = MatchStats::new();
        stats.point_played(PlayerId::ONE, true);
        stats.point_played(PlayerId::ONE, false);

        assert_eq!(stats.counters(PlayerId::ONE).points_served, 2);
        assert_eq!(stats.counters(PlayerId::ONE).points_won, 1);
        assert_eq!(stats.counters(PlayerId::TWO).points_won, 1);
    }
}
