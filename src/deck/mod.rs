//! Flashcard deck: question/answer cards laid out on a table.
//!
//! - Cards flip between question and answer on click
//! - Grid, random or stack layout; cards can be dragged except in stack
//! - Shuffle deals new questions onto the same cards

mod card;
mod controller;
mod questions;
mod table;

pub use card::{Card, CardId};
pub use controller::DeckController;
pub use questions::{QuestionAnswer, QuestionBank};
pub use table::Deck;
