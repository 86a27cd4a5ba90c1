//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe identifier for one side of a singles match. Index 0 is
//! player 1, index 1 is player 2.
//!
//! ## PlayerPair
//!
//! Fixed two-slot storage indexed by `PlayerId`. Used everywhere the engine
//! keeps something per player: scores, event counters, win tallies.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::error::SimError;

/// One of the two players in a singles match.
///
/// Indices are 0-based: player 1 is `PlayerId(0)`. Serialized as the
/// scoreboard number, 1 or 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub struct PlayerId(u8);

impl PlayerId {
    /// Player 1, who serves first in the opening set.
    pub const ONE: PlayerId = PlayerId(0);

    /// Player 2.
    pub const TWO: PlayerId = PlayerId(1);

    /// Build from a 0-based index.
    ///
    /// Returns `None` for anything other than 0 or 1.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::ONE),
            1 => Some(Self::TWO),
            _ => None,
        }
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Player number as printed on a scoreboard (1 or 2).
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0 + 1
    }

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        PlayerId(1 - self.0)
    }

    /// Both players in order.
    pub fn both() -> impl Iterator<Item = PlayerId> {
        [Self::ONE, Self::TWO].into_iter()
    }
}

impl From<PlayerId> for u8 {
    fn from(player: PlayerId) -> u8 {
        player.number()
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = SimError;

    /// Parse a scoreboard number (1 or 2).
    fn try_from(number: u8) -> Result<Self, Self::Error> {
        match number {
            1 => Ok(Self::ONE),
            2 => Ok(Self::TWO),
            value => Err(SimError::InvalidPlayer { value }),
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Per-player storage with O(1) access.
///
/// ## Example
///
/// ```
/// use tennis_sim::core::{PlayerId, PlayerPair};
///
/// let mut games: PlayerPair<u8> = PlayerPair::default();
/// games[PlayerId::TWO] += 1;
///
/// assert_eq!(games[PlayerId::ONE], 0);
/// assert_eq!(games[PlayerId::TWO], 1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerPair<T> {
    data: [T; 2],
}

impl<T> PlayerPair<T> {
    /// Create from explicit values for player 1 and player 2.
    pub const fn new(player1: T, player2: T) -> Self {
        Self {
            data: [player1, player2],
        }
    }

    /// Create with values from a factory function.
    pub fn from_fn(mut factory: impl FnMut(PlayerId) -> T) -> Self {
        Self::new(factory(PlayerId::ONE), factory(PlayerId::TWO))
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::both().zip(self.data.iter())
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        PlayerId::both().zip(self.data.iter_mut())
    }

    /// Apply a function to both entries.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> PlayerPair<U> {
        let [a, b] = self.data;
        PlayerPair::new(f(a), f(b))
    }

    /// Borrow both entries.
    pub fn each_ref(&self) -> PlayerPair<&T> {
        PlayerPair::new(&self.data[0], &self.data[1])
    }

    /// Consume into a `(player1, player2)` tuple.
    pub fn into_tuple(self) -> (T, T) {
        let [a, b] = self.data;
        (a, b)
    }
}

impl<T> Index<PlayerId> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerPair<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
