//! Move intents.
//!
//! Raw drop events from the view (`source zone + index` to `destination
//! zone + index`) are translated into a `MoveIntent` before the rules see
//! them.

use serde::{Deserialize, Serialize};

use crate::core::{MoveError, PlayerId};

/// Where a placed tile lands in the board sequence.
///
/// Tiles only join at the ends of the chain: `Index(0)` is the start and
/// any other index snaps to the end.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardPosition {
    Start,
    #[default]
    End,
    Index(usize),
}

impl BoardPosition {
    /// Concrete insertion index for a board of `len` tiles.
    #[must_use]
    pub fn resolve(self, len: usize) -> usize {
        match self {
            BoardPosition::Start => 0,
            BoardPosition::End => len,
            BoardPosition::Index(0) => 0,
            BoardPosition::Index(_) => len,
        }
    }
}

/// Something a player asks the rules to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveIntent {
    /// Play the tile at `hand_index`.
    PlaceOnBoard {
        hand_index: usize,
        position: BoardPosition,
    },
    /// Reorder the player's own hand.
    ReturnToHand { from: usize, to: usize },
    DrawFromPile,
    /// Skip the turn; only allowed with an empty boneyard and nothing to play.
    Pass,
}

impl MoveIntent {
    /// Play a tile at the end of the chain.
    #[must_use]
    pub const fn place(hand_index: usize) -> Self {
        MoveIntent::PlaceOnBoard {
            hand_index,
            position: BoardPosition::End,
        }
    }
}

/// A droppable area in the view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DropZone {
    Board,
    Hand(PlayerId),
}

/// A slot inside a drop zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DropLocation {
    pub zone: DropZone,
    pub index: usize,
}

impl DropLocation {
    #[must_use]
    pub const fn new(zone: DropZone, index: usize) -> Self {
        Self { zone, index }
    }
}

impl MoveIntent {
    /// Translate a finished drag into an intent for `current`.
    ///
    /// Returns `Ok(None)` when the tile was dropped outside every zone.
    /// Tiles may only be dragged out of the current player's hand, and only
    /// onto the board or back into that same hand.
    pub fn from_drop(
        current: PlayerId,
        source: DropLocation,
        destination: Option<DropLocation>,
    ) -> Result<Option<MoveIntent>, MoveError> {
        let Some(destination) = destination else {
            return Ok(None);
        };
        if source.zone != DropZone::Hand(current) {
            return Err(MoveError::NotYourTurn);
        }

        match destination.zone {
            DropZone::Board => Ok(Some(MoveIntent::PlaceOnBoard {
                hand_index: source.index,
                position: BoardPosition::Index(destination.index),
            })),
            DropZone::Hand(owner) if owner == current => Ok(Some(MoveIntent::ReturnToHand {
                from: source.index,
                to: destination.index,
            })),
            DropZone::Hand(_) => Err(MoveError::WrongDestination),
        }
    }
}
