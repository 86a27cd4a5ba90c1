//! Error types shared by the engine, the driver, and the data layer.

use thiserror::Error;

/// Everything that can go wrong between receiving a request and returning
/// an aggregate result.
///
/// Bad arithmetic inside the engine (zero denominators) is never an error;
/// ratios fall back to 0 instead.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Format must be 'best3' or 'best5', got '{value}'")]
    InvalidFormat { value: String },

    #[error("Number of simulations must be between {min} and {max}, got {value}")]
    InvalidTrialCount { value: u64, min: u32, max: u32 },

    #[error("Surface must be 'hard', 'clay', or 'grass', got '{value}'")]
    InvalidSurface { value: String },

    #[error("Invalid statistic {field} = {value} for {player}")]
    InvalidStats {
        player: String,
        field: &'static str,
        value: f64,
    },

    #[error("Player number must be 1 or 2, got {value}")]
    InvalidPlayer { value: u8 },

    #[error("Player {name} not found in data")]
    UnknownPlayer { name: String },

    #[error("Surface {surface} not available for player {player}")]
    MissingSurface { player: String, surface: String },

    #[error("Simulation cancelled after {completed} of {total} trials")]
    Cancelled { completed: u32, total: u32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SimError {
    /// Rejected request parameters; nothing was simulated.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            SimError::InvalidFormat { .. }
                | SimError::InvalidTrialCount { .. }
                | SimError::InvalidSurface { .. }
                | SimError::InvalidStats { .. }
                | SimError::InvalidPlayer { .. }
        )
    }

    /// The data collaborator could not resolve a player or surface.
    pub fn is_missing_data(&self) -> bool {
        matches!(
            self,
            SimError::UnknownPlayer { .. } | SimError::MissingSurface { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = SimError::InvalidTrialCount {
            value: 0,
            min: 1,
            max: 10_000,
        };
        assert_eq!(
            err.to_string(),
            "Number of simulations must be between 1 and 10000, got 0"
        );

        let err = SimError::UnknownPlayer {
            name: "Nobody".into(),
        };
        assert_eq!(err.to_string(), "Player Nobody not found in data");
    }

    #[test]
    fn test_classification() {
        let invalid = SimError::InvalidFormat {
            value: "best7".into(),
        };
        assert!(invalid.is_invalid_input());
        assert!(!invalid.is_missing_data());

        let missing = SimError::MissingSurface {
            player: "A".into(),
            surface: "clay".into(),
        };
        assert!(missing.is_missing_data());
        assert!(!missing.is_invalid_input());

        let cancelled = SimError::Cancelled {
            completed: 10,
            total: 100,
        };
        assert!(!cancelled.is_invalid_input());
        assert!(!cancelled.is_missing_data());
    }
}
