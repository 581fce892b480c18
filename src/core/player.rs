//! Player identification and per-player storage.
//!
//! ## PlayerId
//!
//! 0-based seat index. Status messages print seats 1-based ("Player 1").
//!
//! ## PlayerMap
//!
//! One entry per seat, backed by a `Vec` and indexed by `PlayerId`.
//! Hands and scores in the domino game live in `PlayerMap`s.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat that plays after this one.
    ///
    /// ```
    /// use domino_table::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(0).next(2), PlayerId::new(1));
    /// assert_eq!(PlayerId::new(1).next(2), PlayerId::new(0));
    /// ```
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        Self(((self.index() + 1) % player_count) as u8)
    }

    /// Iterate over every seat in a game with `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// Per-seat data with O(1) access.
///
/// ```
/// use domino_table::core::{PlayerId, PlayerMap};
///
/// let mut scores: PlayerMap<u32> = PlayerMap::with_value(2, 0);
/// scores[PlayerId::new(1)] += 12;
/// assert_eq!(scores[PlayerId::new(1)], 12);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Build a map by calling `factory` once per seat.
    pub fn new(player_count: usize, factory: impl FnMut(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = PlayerId::all(player_count).map(factory).collect();
        Self { data }
    }

    /// Every seat starts with a clone of `value`.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Entry for `player`, `None` if the seat does not exist.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Iterate over (PlayerId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}
