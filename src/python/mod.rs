//! Python bindings for domino-table.
//!
//! # Quick Start
//!
//! ```python
//! import domino_table as dt
//!
//! game = dt.DominoGame(player_count=2, seed=7)
//! for i in game.playable():
//!     game.play(i)
//!     break
//! else:
//!     game.draw()
//! print(game.message)
//!
//! deck = dt.FlashcardDeck(card_count=12, container_width=1000.0)
//! deck.pointer_down(1, 20.0, 30.0)
//! deck.pointer_move(420.0, 230.0)
//! deck.pointer_up()
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_deck;
mod py_games;

pub use py_core::*;
pub use py_deck::*;
pub use py_games::*;

/// domino-table: dominoes rules and a draggable flashcard deck.
#[pymodule]
fn domino_table(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Core types
    m.add_class::<PyPlayerId>()?;
    m.add_class::<PyTile>()?;

    // Games
    m.add_class::<PyDominoGame>()?;

    // Deck
    m.add_class::<PyFlashcardDeck>()?;

    Ok(())
}
