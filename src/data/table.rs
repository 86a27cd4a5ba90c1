//! In-memory statistics table loaded from JSON.
//!
//! ```json
//! {
//!   "players": [
//!     { "name": "A. Player", "ranking": 1,
//!       "surfaces": { "hard": { "first_serve_in_pct": 0.62, ... } } }
//!   ]
//! }
//! ```

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{PlayerStats, SimError};

use super::provider::{StatsLookup, StatsProvider};
use super::surface::Surface;

/// One player's statistics across the surfaces they have data for.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub name: String,
    pub ranking: u32,
    pub surfaces: BTreeMap<Surface, PlayerStats>,
}

/// Player listing entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub name: String,
    pub ranking: u32,
    pub surfaces: Vec<Surface>,
}

#[derive(Serialize, Deserialize)]
struct TableFile {
    players: Vec<PlayerRecord>,
}

/// Player statistics keyed by name.
#[derive(Clone, Debug, Default)]
pub struct StatsTable {
    players: FxHashMap<String, PlayerRecord>,
}

impl StatsTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, SimError> {
        let file: TableFile = serde_json::from_str(json)?;
        Self::from_records(file.players)
    }

    /// Parse and validate JSON from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, SimError> {
        let file: TableFile = serde_json::from_reader(reader)?;
        Self::from_records(file.players)
    }

    /// Load a JSON file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref();
        log::debug!("Loading player statistics from {}", path.display());
        let table = Self::from_reader(BufReader::new(File::open(path)?))?;
        log::info!("Loaded {} players from {}", table.len(), path.display());
        Ok(table)
    }

    fn from_records(records: Vec<PlayerRecord>) -> Result<Self, SimError> {
        let mut table = Self::new();
        for record in records {
            table.insert(record)?;
        }
        Ok(table)
    }

    /// Add or replace a player. Every surface record is validated first.
    pub fn insert(&mut self, record: PlayerRecord) -> Result<(), SimError> {
        for stats in record.surfaces.values() {
            stats.validate(&record.name)?;
        }
        self.players.insert(record.name.clone(), record);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&PlayerRecord> {
        self.players.get(name)
    }

    /// Players with at least one surface, best ranking first.
    ///
    /// Hard-court data covers every surface, so a player with a hard record
    /// lists all three.
    pub fn players(&self) -> Vec<PlayerSummary> {
        let mut players: Vec<_> = self
            .players
            .values()
            .filter(|record| !record.surfaces.is_empty())
            .map(|record| PlayerSummary {
                name: record.name.clone(),
                ranking: record.ranking,
                surfaces: if record.surfaces.contains_key(&Surface::FALLBACK) {
                    Surface::ALL.to_vec()
                } else {
                    record.surfaces.keys().copied().collect()
                },
            })
            .collect();

        players.sort_by(|a, b| a.ranking.cmp(&b.ranking).then_with(|| a.name.cmp(&b.name)));
        players
    }
}

impl StatsProvider for StatsTable {
    fn lookup(&self, player: &str, surface: Surface) -> Result<StatsLookup, SimError> {
        let record = self.players.get(player).ok_or_else(|| SimError::UnknownPlayer {
            name: player.to_string(),
        })?;

        if let Some(stats) = record.surfaces.get(&surface) {
            return Ok(StatsLookup {
                stats: *stats,
                is_fallback: false,
            });
        }

        match record.surfaces.get(&Surface::FALLBACK) {
            Some(stats) => {
                log::warn!("{} using hard court data for {} surface", player, surface);
                Ok(StatsLookup {
                    stats: *stats,
                    is_fallback: true,
                })
            }
            None => Err(SimError::MissingSurface {
                player: player.to_string(),
                surface: surface.to_string(),
            }),
        }
    }
}
