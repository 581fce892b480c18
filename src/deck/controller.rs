//! View-event routing for the deck.

use super::card::CardId;
use super::table::Deck;
use crate::core::Position;
use crate::drag::{DragCommit, DragController, PointerSource};
use crate::layout::LayoutMode;

/// Routes view events to a `Deck` and its drag session.
#[derive(Clone, Debug)]
pub struct DeckController {
    deck: Deck,
    drag: DragController<CardId>,
}

impl DeckController {
    #[must_use]
    pub fn new(deck: Deck) -> Self {
        Self {
            deck,
            drag: DragController::new(),
        }
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn drag(&self) -> &DragController<CardId> {
        &self.drag
    }

    /// Grab a card. Refused in stack layout and for unknown cards.
    pub fn pointer_down(&mut self, id: CardId, x: f32, y: f32, source: PointerSource) -> bool {
        if !self.deck.is_draggable() {
            return false;
        }
        self.drag.begin(&self.deck, id, Position::new(x, y), source)
    }

    pub fn pointer_move(&mut self, x: f32, y: f32, source: PointerSource) -> Option<Position> {
        self.drag.update(Position::new(x, y), source)
    }

    /// Drop the dragged card where it is.
    pub fn pointer_up(&mut self, source: PointerSource) -> Option<DragCommit<CardId>> {
        let commit = self.drag.release(source)?;
        self.deck.commit_position(commit.item, commit.position);
        Some(commit)
    }

    pub fn click(&mut self, id: CardId) -> Option<bool> {
        self.deck.flip(id)
    }

    /// Any drag in progress is abandoned.
    pub fn select_layout(&mut self, mode: LayoutMode) {
        self.drag.cancel();
        self.deck.select_layout(mode);
    }

    pub fn shuffle(&mut self) {
        self.deck.shuffle();
    }

    pub fn reset_flips(&mut self) {
        self.deck.reset_flips();
    }

    /// Where the view should draw a card right now.
    #[must_use]
    pub fn render_position(&self, id: CardId) -> Option<Position> {
        self.drag
            .live_position(&id)
            .or_else(|| self.deck.card(id).map(|c| c.position))
    }
}
