//! # domino-table
//!
//! Table state and rules for two tabletop toys: a flashcard deck that can
//! be laid out and dragged around, and a classic block dominoes game.
//!
//! ## Design Principles
//!
//! 1. **Pure Transitions**: `RulesEngine::apply` borrows a state and returns
//!    the next one. Controllers swap their state wholesale, so a rejected
//!    move can never leave a half-applied table behind.
//!
//! 2. **View-Agnostic**: Nothing here draws. Views feed pointer events and
//!    drop locations in and read positions and status messages out.
//!
//! 3. **Deterministic**: Every shuffle goes through a seeded `GameRng`, so a
//!    config plus a seed reproduces a table exactly.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: hands, board and boneyard are
//!   `im::Vector`s, so producing the next state shares structure with the
//!   previous one.
//!
//! - **Intents, not drops**: raw drag/drop events are translated into a
//!   `MoveIntent` before the rules see them.
//!
//! ## Modules
//!
//! - `core`: Seats, RNG, configuration, errors, geometry
//! - `tiles`: Domino tiles and tile sets
//! - `rules`: RulesEngine trait and round results
//! - `games`: Dominoes rules, state and controller
//! - `layout`: Grid, random and stack placement
//! - `drag`: Pointer-drag state machine
//! - `deck`: Flashcard deck and its controller

pub mod core;
pub mod deck;
pub mod drag;
pub mod games;
pub mod layout;
pub mod rules;
pub mod tiles;

#[cfg(feature = "python")]
mod python;

// Re-export commonly used types
pub use crate::core::{
    DeckConfig, DominoConfig, GameRng, GameRngState, MoveError, Opening, PlayerId, PlayerMap,
    Position, SnapshotError, SnapshotResult,
};

pub use crate::tiles::{full_set, pip_sum, Tile, TileId};

pub use crate::rules::{EndReason, GameResult, RulesEngine, Transition};

pub use crate::games::domino::{
    BoardPosition, DominoEvent, DominoGame, DominoRules, DominoState, DominoTransition,
    DropLocation, DropZone, GameStatus, MoveIntent,
};

pub use crate::layout::{LayoutConfig, LayoutMode};

pub use crate::drag::{DragCommit, DragController, DragSession, DragTarget, PointerSource};

pub use crate::deck::{Card, CardId, Deck, DeckController, QuestionAnswer, QuestionBank};
