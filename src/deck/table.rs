//! The flashcard deck.

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use super::card::{Card, CardId};
use super::questions::QuestionBank;
use crate::core::{DeckConfig, GameRng, Position};
use crate::drag::DragTarget;
use crate::layout::{arrange, grid_layout, LayoutMode};

/// Cards on the table plus the active layout.
#[derive(Clone, Debug)]
pub struct Deck {
    config: DeckConfig,
    bank: QuestionBank,
    cards: Vec<Card>,
    /// card id -> slot in `cards`
    slots: FxHashMap<CardId, usize>,
    layout: LayoutMode,
    rng: GameRng,
}

impl Deck {
    /// Deal `config.card_count` cards from `bank` and lay them out.
    #[must_use]
    pub fn new(config: DeckConfig, bank: QuestionBank) -> Self {
        let mut rng = GameRng::new(config.seed);

        let count = config.card_count.min(bank.len());
        if count < config.card_count {
            warn!(
                requested = config.card_count,
                available = bank.len(),
                "question bank too small, dealing fewer cards"
            );
        }

        let cards: Vec<Card> = bank
            .sample(count, &mut rng)
            .into_iter()
            .enumerate()
            .map(|(i, qa)| Card::new(CardId::new(i as u32 + 1), qa.question, qa.answer))
            .collect();
        let slots = cards.iter().enumerate().map(|(i, c)| (c.id, i)).collect();

        let mut deck = Self {
            layout: config.initial_layout,
            config,
            bank,
            cards,
            slots,
            rng,
        };
        deck.select_layout(deck.layout);
        deck
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.slots.get(&id).map(|&slot| &self.cards[slot])
    }

    fn card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        let slot = *self.slots.get(&id)?;
        self.cards.get_mut(slot)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn layout_mode(&self) -> LayoutMode {
        self.layout
    }

    #[must_use]
    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    /// Cards can be dragged in every layout except stack.
    #[must_use]
    pub fn is_draggable(&self) -> bool {
        self.layout.allows_drag()
    }

    /// Toggle a card. Returns its new flip state, `None` for unknown ids.
    pub fn flip(&mut self, id: CardId) -> Option<bool> {
        let card = self.card_mut(id)?;
        card.flip();
        Some(card.is_flipped)
    }

    /// Turn every card question-side up.
    pub fn reset_flips(&mut self) {
        for card in &mut self.cards {
            card.is_flipped = false;
        }
    }

    /// Switch layout and reposition every card.
    pub fn select_layout(&mut self, mode: LayoutMode) {
        self.layout = mode;
        let positions = arrange(mode, self.cards.len(), &self.config.layout, &mut self.rng);
        for (card, position) in self.cards.iter_mut().zip(positions) {
            card.position = position;
        }
        debug!(?mode, cards = self.cards.len(), "layout applied");
    }

    /// Deal a fresh draw of questions onto the existing cards.
    ///
    /// Ids are kept and every card turns face up. Positions only change in
    /// grid layout, which is recomputed to stay dense.
    pub fn shuffle(&mut self) {
        let pairs = self.bank.sample(self.cards.len(), &mut self.rng);
        for (card, qa) in self.cards.iter_mut().zip(pairs) {
            card.question = qa.question;
            card.answer = qa.answer;
            card.is_flipped = false;
        }

        if self.layout == LayoutMode::Grid {
            let positions = grid_layout(self.cards.len(), &self.config.layout);
            for (card, position) in self.cards.iter_mut().zip(positions) {
                card.position = position;
            }
        }
        debug!(cards = self.cards.len(), "questions shuffled");
    }

    /// Store a card's new position. Returns `false` for unknown ids.
    pub fn commit_position(&mut self, id: CardId, position: Position) -> bool {
        match self.card_mut(id) {
            Some(card) => {
                card.position = position;
                true
            }
            None => false,
        }
    }
}

impl DragTarget<CardId> for Deck {
    fn position_of(&self, item: &CardId) -> Option<Position> {
        self.card(*item).map(|c| c.position)
    }
}
