//! Classic block dominoes for two to four players.
//!
//! - 28 tiles (double-six), 7 per hand, the rest in the boneyard
//! - Play a tile whose halves match either open end of the chain
//! - Draw when you cannot (or would rather not) play; pass once the boneyard
//!   is empty and nothing fits
//! - Emptying your hand scores the opponents' remaining pips; a blocked
//!   round goes to the lowest pip count

mod game;
mod intent;
mod snapshot;
mod state;

pub use game::{DominoEvent, DominoGame, DominoRules, DominoTransition};
pub use intent::{BoardPosition, DropLocation, DropZone, MoveIntent};
pub use state::{DominoState, GameStatus};
