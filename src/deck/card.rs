//! Flashcards.

use serde::{Deserialize, Serialize};

use crate::core::Position;

/// Card identifier, 1-based in deal order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A question on the front, its answer on the back.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub question: String,
    pub answer: String,
    pub is_flipped: bool,
    pub position: Position,
}

impl Card {
    #[must_use]
    pub fn new(id: CardId, question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            id,
            question: question.into(),
            answer: answer.into(),
            is_flipped: false,
            position: Position::ORIGIN,
        }
    }

    /// Text on the visible face.
    #[must_use]
    pub fn face(&self) -> &str {
        if self.is_flipped {
            &self.answer
        } else {
            &self.question
        }
    }

    pub fn flip(&mut self) {
        self.is_flipped = !self.is_flipped;
    }
}
