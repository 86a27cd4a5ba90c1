//! Per-player, per-surface statistics consumed by the engine.

use serde::{Deserialize, Serialize};

use super::error::SimError;

/// Historical serve/return profile of one player on one surface.
///
/// Every field except `dominance_ratio` is a probability in `[0, 1]`.
/// `dominance_ratio` (points won / points lost) is a positive weight used to
/// blend server and returner strengths.
///
/// The engine assumes these invariants and never checks them. Data loaders
/// call [`PlayerStats::validate`] before handing records over.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub first_serve_in_pct: f64,
    pub first_serve_win_pct: f64,
    pub second_serve_win_pct: f64,
    pub double_fault_per_second_serve: f64,
    pub vs_first_serve_win_pct: f64,
    pub vs_second_serve_win_pct: f64,
    pub break_point_save_pct: f64,
    pub break_point_conversion_pct: f64,
    pub dominance_ratio: f64,
}

impl PlayerStats {
    /// Probability fields by name, in declaration order.
    pub fn probabilities(&self) -> [(&'static str, f64); 8] {
        [
            ("first_serve_in_pct", self.first_serve_in_pct),
            ("first_serve_win_pct", self.first_serve_win_pct),
            ("second_serve_win_pct", self.second_serve_win_pct),
            (
                "double_fault_per_second_serve",
                self.double_fault_per_second_serve,
            ),
            ("vs_first_serve_win_pct", self.vs_first_serve_win_pct),
            ("vs_second_serve_win_pct", self.vs_second_serve_win_pct),
            ("break_point_save_pct", self.break_point_save_pct),
            ("break_point_conversion_pct", self.break_point_conversion_pct),
        ]
    }

    /// Probability that a second serve lands in.
    #[must_use]
    pub fn second_serve_in_pct(&self) -> f64 {
        1.0 - self.double_fault_per_second_serve
    }

    /// Check every probability is in `[0, 1]` and the dominance ratio is a
    /// positive finite number.
    ///
    /// `player` only labels the error.
    pub fn validate(&self, player: &str) -> Result<(), SimError> {
        for (field, value) in self.probabilities() {
            if !(0.0..=1.0).contains(&value) {
                return Err(SimError::InvalidStats {
                    player: player.to_string(),
                    field,
                    value,
                });
            }
        }

        if !(self.dominance_ratio.is_finite() && self.dominance_ratio > 0.0) {
            return Err(SimError::InvalidStats {
                player: player.to_string(),
                field: "dominance_ratio",
                value: self.dominance_ratio,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PlayerStats {
        PlayerStats {
            first_serve_in_pct: 0.62,
            first_serve_win_pct: 0.74,
            second_serve_win_pct: 0.55,
            double_fault_per_second_serve: 0.08,
            vs_first_serve_win_pct: 0.31,
            vs_second_serve_win_pct: 0.52,
            break_point_save_pct: 0.64,
            break_point_conversion_pct: 0.42,
            dominance_ratio: 1.2,
        }
    }

    #[test]
    fn test_validate_accepts_sample() {
        assert!(sample().validate("Sample").is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let mut stats = sample();
        stats.first_serve_win_pct = 1.4;

        match stats.validate("Sample") {
            Err(SimError::InvalidStats { field, value, .. }) => {
                assert_eq!(field, "first_serve_win_pct");
                assert_eq!(value, 1.4);
            }
            other => panic!("expected InvalidStats, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_bad_dominance() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let mut stats = sample();
            stats.dominance_ratio = bad;
            assert!(stats.validate("Sample").is_err(), "accepted {bad}");
        }
    }

    #[test]
    fn test_second_serve_in_pct() {
        assert!((sample().second_serve_in_pct() - 0.92).abs() < 1e-12);
    }

    #[test]
    fn test_serde_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["break_point_save_pct"], 0.64);
        assert_eq!(json["dominance_ratio"], 1.2);
    }
}
