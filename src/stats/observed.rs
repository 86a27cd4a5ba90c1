//! Observed (simulation-derived) percentages and their running averages.

use serde::{Deserialize, Serialize};

/// `num / den`, or 0 when nothing happened.
#[must_use]
pub fn ratio(num: u32, den: u32) -> f64 {
    if den == 0 {
        0.0
    } else {
        f64::from(num) / f64::from(den)
    }
}

/// Percentages measured from events that actually occurred in simulation.
///
/// Mirrors the shape of [`PlayerStats`](crate::core::PlayerStats) so inputs
/// and outputs can be compared side by side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ObservedStats {
    pub first_serve_in_pct: f64,
    pub first_serve_win_pct: f64,
    pub second_serve_in_pct: f64,
    pub second_serve_win_pct: f64,
    pub double_fault_per_second_serve: f64,
    pub vs_first_serve_win_pct: f64,
    pub vs_second_serve_win_pct: f64,
    pub break_point_save_pct: f64,
    pub break_point_conversion_pct: f64,
}

/// Field names in declaration order, matching the serialized keys.
pub const OBSERVED_FIELDS: [&str; 9] = [
    "first_serve_in_pct",
    "first_serve_win_pct",
    "second_serve_in_pct",
    "second_serve_win_pct",
    "double_fault_per_second_serve",
    "vs_first_serve_win_pct",
    "vs_second_serve_win_pct",
    "break_point_save_pct",
    "break_point_conversion_pct",
];

impl ObservedStats {
    /// `(name, value)` for every field, keyed like the JSON form.
    #[must_use]
    pub fn named_fields(&self) -> [(&'static str, f64); 9] {
        let values = self.fields();
        std::array::from_fn(|i| (OBSERVED_FIELDS[i], values[i]))
    }

    fn fields_mut(&mut self) -> [&mut f64; 9] {
        [
            &mut self.first_serve_in_pct,
            &mut self.first_serve_win_pct,
            &mut self.second_serve_in_pct,
            &mut self.second_serve_win_pct,
            &mut self.double_fault_per_second_serve,
            &mut self.vs_first_serve_win_pct,
            &mut self.vs_second_serve_win_pct,
            &mut self.break_point_save_pct,
            &mut self.break_point_conversion_pct,
        ]
    }

    fn fields(&self) -> [f64; 9] {
        [
            self.first_serve_in_pct,
            self.first_serve_win_pct,
            self.second_serve_in_pct,
            self.second_serve_win_pct,
            self.double_fault_per_second_serve,
            self.vs_first_serve_win_pct,
            self.vs_second_serve_win_pct,
            self.break_point_save_pct,
            self.break_point_conversion_pct,
        ]
    }
}

/// Running sum of per-trial observed stats for one player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ObservedStatsSum {
    sum: ObservedStats,
    trials: u32,
}

impl ObservedStatsSum {
    /// Create an empty sum.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one trial's observed stats.
    pub fn add(&mut self, observed: &ObservedStats) {
        for (acc, value) in self.sum.fields_mut().into_iter().zip(observed.fields()) {
            *acc += value;
        }
        self.trials += 1;
    }

    /// Number of trials added.
    #[must_use]
    pub fn trials(&self) -> u32 {
        self.trials
    }

    /// Field-wise mean; all zeros when empty.
    #[must_use]
    pub fn average(&self) -> ObservedStats {
        let mut avg = self.sum;
        if self.trials == 0 {
            return ObservedStats::default();
        }
        let n = f64::from(self.trials);
        for field in avg.fields_mut() {
            *field /= n;
        }
        avg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio() {
        assert_eq!(ratio(0, 0), 0.0);
        assert_eq!(ratio(5, 0), 0.0);
        assert_eq!(ratio(1, 4), 0.25);
        assert_eq!(ratio(3, 3), 1.0);
    }

    #[test]
    fn test_average() {
        let mut sum = ObservedStatsSum::new();
        sum.add(&ObservedStats {
            first_serve_in_pct: 0.6,
            break_point_save_pct: 1.0,
            ..Default::default()
        });
        sum.add(&ObservedStats {
            first_serve_in_pct: 0.4,
            break_point_save_pct: 0.0,
            ..Default::default()
        });

        let avg = sum.average();
        assert_eq!(sum.trials(), 2);
        assert!((avg.first_serve_in_pct - 0.5).abs() < 1e-12);
        assert!((avg.break_point_save_pct - 0.5).abs() < 1e-12);
        assert_eq!(avg.double_fault_per_second_serve, 0.0);
    }

    #[test]
    fn test_named_fields_match_json_keys() {
        let observed = ObservedStats {
            first_serve_in_pct: 0.61,
            double_fault_per_second_serve: 0.04,
            break_point_conversion_pct: 0.42,
            ..Default::default()
        };

        let json = serde_json::to_value(observed).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), OBSERVED_FIELDS.len());
        for (name, value) in observed.named_fields() {
            assert_eq!(object[name], value, "{name}");
        }
        assert_eq!(observed.named_fields()[4], ("double_fault_per_second_serve", 0.04));
    }

    #[test]
    fn test_empty_average() {
        assert_eq!(ObservedStatsSum::new().average(), ObservedStats::default());
    }
}
