//! Court surfaces.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::SimError;

/// Playing surface a statistics record was collected on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Surface {
    Hard,
    Clay,
    Grass,
}

impl Surface {
    /// Every surface, in report order.
    pub const ALL: [Surface; 3] = [Surface::Hard, Surface::Clay, Surface::Grass];

    /// Surface used when a player has no record for the requested one.
    pub const FALLBACK: Surface = Surface::Hard;

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Surface::Hard => "hard",
            Surface::Clay => "clay",
            Surface::Grass => "grass",
        }
    }
}

impl FromStr for Surface {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hard" => Ok(Surface::Hard),
            "clay" => Ok(Surface::Clay),
            "grass" => Ok(Surface::Grass),
            other => Err(SimError::InvalidSurface {
                value: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        for surface in Surface::ALL {
            assert_eq!(surface.to_string().parse::<Surface>().unwrap(), surface);
        }
        assert!("carpet".parse::<Surface>().unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Surface::Clay).unwrap(), "\"clay\"");
        let grass: Surface = serde_json::from_str("\"grass\"").unwrap();
        assert_eq!(grass, Surface::Grass);
    }
}
