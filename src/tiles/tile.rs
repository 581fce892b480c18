//! Domino tiles.
//!
//! A tile's identity is its `(top, bottom)` pair. Equality and hashing look
//! only at the pair; `position` belongs to the view and can change freely.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use crate::core::Position;

/// Stable identifier of a tile, printed as `"top-bottom"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TileId {
    pub top: u8,
    pub bottom: u8,
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.top, self.bottom)
    }
}

/// A playable domino.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Tile {
    pub top: u8,
    pub bottom: u8,
    /// Top-left on screen. Not part of the identity.
    pub position: Position,
}

impl Tile {
    #[must_use]
    pub const fn new(top: u8, bottom: u8) -> Self {
        Self {
            top,
            bottom,
            position: Position::ORIGIN,
        }
    }

    #[must_use]
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    #[must_use]
    pub const fn id(&self) -> TileId {
        TileId {
            top: self.top,
            bottom: self.bottom,
        }
    }

    /// Sum of both halves.
    #[must_use]
    pub const fn pips(&self) -> u32 {
        self.top as u32 + self.bottom as u32
    }

    #[must_use]
    pub const fn is_double(&self) -> bool {
        self.top == self.bottom
    }

    /// Image the view renders for this tile.
    #[must_use]
    pub fn image_ref(&self) -> String {
        format!("img/{}{}.jpg", self.top, self.bottom)
    }
}

impl PartialEq for Tile {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for Tile {}

impl Hash for Tile {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}|{}]", self.top, self.bottom)
    }
}

/// Every unordered pair `(i, j)` with `i <= j <= max_pip`, in ascending order.
///
/// ```
/// use domino_table::tiles::full_set;
///
/// let set = full_set(6);
/// assert_eq!(set.len(), 28);
/// assert_eq!(set[0].id().to_string(), "0-0");
/// assert_eq!(set[27].id().to_string(), "6-6");
/// ```
#[must_use]
pub fn full_set(max_pip: u8) -> Vec<Tile> {
    (0..=max_pip)
        .flat_map(|top| (top..=max_pip).map(move |bottom| Tile::new(top, bottom)))
        .collect()
}

/// Pip-sum of a collection of tiles.
pub fn pip_sum<'a>(tiles: impl IntoIterator<Item = &'a Tile>) -> u32 {
    tiles.into_iter().map(Tile::pips).sum()
}
