//! Flashcard deck bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::DeckConfig;
use crate::deck::{CardId, Deck, DeckController, QuestionBank};
use crate::drag::PointerSource;
use crate::layout::LayoutMode;

fn parse_layout(name: &str) -> PyResult<LayoutMode> {
    match name {
        "grid" => Ok(LayoutMode::Grid),
        "random" => Ok(LayoutMode::Random),
        "stack" => Ok(LayoutMode::Stack),
        other => Err(PyValueError::new_err(format!("Unknown layout: {other}"))),
    }
}

fn parse_source(touch: bool) -> PointerSource {
    if touch {
        PointerSource::Touch
    } else {
        PointerSource::Mouse
    }
}

/// Python wrapper for DeckController.
#[pyclass(name = "FlashcardDeck")]
pub struct PyFlashcardDeck {
    table: DeckController,
}

#[pymethods]
impl PyFlashcardDeck {
    #[new]
    #[pyo3(signature = (
        card_count = 30,
        container_width = 1200.0,
        container_height = 800.0,
        layout = "grid",
        seed = 42
    ))]
    fn new(
        card_count: usize,
        container_width: f32,
        container_height: f32,
        layout: &str,
        seed: u64,
    ) -> PyResult<Self> {
        let config = DeckConfig::default()
            .with_card_count(card_count)
            .with_container(container_width, container_height)
            .with_initial_layout(parse_layout(layout)?)
            .with_seed(seed);
        Ok(Self {
            table: DeckController::new(Deck::new(config, QuestionBank::builtin())),
        })
    }

    /// `(id, face text, flipped, x, y)` for every card, in render position.
    fn cards(&self) -> Vec<(u32, String, bool, f32, f32)> {
        self.table
            .deck()
            .cards()
            .iter()
            .map(|card| {
                let pos = self.table.render_position(card.id).unwrap_or(card.position);
                (card.id.0, card.face().to_string(), card.is_flipped, pos.x, pos.y)
            })
            .collect()
    }

    fn click(&mut self, id: u32) -> Option<bool> {
        self.table.click(CardId::new(id))
    }

    #[pyo3(signature = (id, x, y, touch = false))]
    fn pointer_down(&mut self, id: u32, x: f32, y: f32, touch: bool) -> bool {
        self.table.pointer_down(CardId::new(id), x, y, parse_source(touch))
    }

    #[pyo3(signature = (x, y, touch = false))]
    fn pointer_move(&mut self, x: f32, y: f32, touch: bool) -> Option<(f32, f32)> {
        self.table
            .pointer_move(x, y, parse_source(touch))
            .map(|p| (p.x, p.y))
    }

    /// Returns the committed `(id, x, y)` if a drag ended.
    #[pyo3(signature = (touch = false))]
    fn pointer_up(&mut self, touch: bool) -> Option<(u32, f32, f32)> {
        self.table
            .pointer_up(parse_source(touch))
            .map(|c| (c.item.0, c.position.x, c.position.y))
    }

    fn select_layout(&mut self, layout: &str) -> PyResult<()> {
        self.table.select_layout(parse_layout(layout)?);
        Ok(())
    }

    fn shuffle(&mut self) {
        self.table.shuffle();
    }

    fn reset_flips(&mut self) {
        self.table.reset_flips();
    }

    #[getter]
    fn draggable(&self) -> bool {
        self.table.deck().is_draggable()
    }

    fn __len__(&self) -> usize {
        self.table.deck().len()
    }

    fn __repr__(&self) -> String {
        format!(
            "FlashcardDeck(cards={}, layout={:?})",
            self.table.deck().len(),
            self.table.deck().layout_mode()
        )
    }
}
