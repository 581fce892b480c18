//! Game bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{DominoConfig, Opening, PlayerId};
use crate::games::domino::{
    DominoEvent, DominoGame, DominoState, DropLocation, DropZone, GameStatus,
};
use crate::rules::RulesEngine;

use super::py_core::{move_err, PyPlayerId, PyTile};

fn describe(event: &DominoEvent) -> String {
    match event {
        DominoEvent::Placed {
            tile, board_index, ..
        } => format!("placed {tile} at {board_index}"),
        DominoEvent::Reordered { from, to, .. } => format!("moved {from} to {to}"),
        DominoEvent::Drew { tile, .. } => format!("drew {tile}"),
        DominoEvent::Passed { .. } => "passed".to_string(),
    }
}

fn unseated(player: PlayerId) -> PyErr {
    PyValueError::new_err(format!("{player} is not seated at this table"))
}

/// `"board"` or `"hand:<seat>"` for a seat at the table.
fn parse_zone(zone: &str, state: &DominoState) -> PyResult<DropZone> {
    if zone == "board" {
        return Ok(DropZone::Board);
    }
    let player = zone
        .strip_prefix("hand:")
        .and_then(|seat| seat.parse::<u8>().ok())
        .map(PlayerId::new)
        .ok_or_else(|| PyValueError::new_err(format!("Unknown drop zone: {zone}")))?;
    if !state.is_seated(player) {
        return Err(unseated(player));
    }
    Ok(DropZone::Hand(player))
}

/// Python wrapper for DominoGame.
#[pyclass(name = "DominoGame")]
pub struct PyDominoGame {
    game: DominoGame,
}

#[pymethods]
impl PyDominoGame {
    /// Deal a new table.
    ///
    /// # Arguments
    /// - player_count: Number of seats (2-4)
    /// - hand_size: Tiles dealt to each seat
    /// - max_pip: Highest pip value (6 for double-six)
    /// - highest_double_opens: Let the highest double holder start
    /// - seed: RNG seed for the deal
    #[new]
    #[pyo3(signature = (
        player_count = 2,
        hand_size = 7,
        max_pip = 6,
        highest_double_opens = false,
        seed = 42
    ))]
    fn new(
        player_count: usize,
        hand_size: usize,
        max_pip: u8,
        highest_double_opens: bool,
        seed: u64,
    ) -> PyResult<Self> {
        let opening = if highest_double_opens {
            Opening::HighestDouble
        } else {
            Opening::FirstPlayer
        };
        let config = DominoConfig::default()
            .with_player_count(player_count)
            .with_hand_size(hand_size)
            .with_max_pip(max_pip)
            .with_opening(opening)
            .with_seed(seed);
        config
            .check()
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self {
            game: DominoGame::new(config),
        })
    }

    /// Restore a table from `snapshot()` bytes.
    #[staticmethod]
    fn restore(bytes: &[u8]) -> PyResult<Self> {
        DominoGame::restore(bytes)
            .map(|game| Self { game })
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    fn snapshot(&self) -> PyResult<Vec<u8>> {
        self.game
            .snapshot()
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Play the tile at `hand_index` at the end of the chain.
    fn play(&mut self, hand_index: usize) -> PyResult<String> {
        self.game
            .play(hand_index)
            .map(|e| describe(&e))
            .map_err(move_err)
    }

    fn draw(&mut self) -> PyResult<String> {
        self.game
            .draw_from_pile()
            .map(|e| describe(&e))
            .map_err(move_err)
    }

    #[pyo3(name = "pass_turn")]
    fn pass_(&mut self) -> PyResult<String> {
        self.game.pass().map(|e| describe(&e)).map_err(move_err)
    }

    /// Apply a drag from the view. Zones are `"board"` or `"hand:<seat>"`.
    #[pyo3(signature = (source_zone, source_index, dest_zone = None, dest_index = 0))]
    fn drop_tile(
        &mut self,
        source_zone: &str,
        source_index: usize,
        dest_zone: Option<&str>,
        dest_index: usize,
    ) -> PyResult<Option<String>> {
        let state = self.game.state();
        let source = DropLocation::new(parse_zone(source_zone, state)?, source_index);
        let destination = dest_zone
            .map(|zone| parse_zone(zone, state).map(|z| DropLocation::new(z, dest_index)))
            .transpose()?;
        self.game
            .drop_tile(source, destination)
            .map(|event| event.as_ref().map(describe))
            .map_err(move_err)
    }

    /// Hand indices the current player could place.
    fn playable(&self) -> Vec<usize> {
        let state = self.game.state();
        state.playable_indices(state.current_player()).to_vec()
    }

    /// Number of legal intents for the current player.
    fn legal_count(&self) -> usize {
        let state = self.game.state();
        self.game
            .rules()
            .legal_intents(state, state.current_player())
            .len()
    }

    fn next_round(&mut self) {
        self.game.next_round();
    }

    fn hand(&self, player: &PyPlayerId) -> PyResult<Vec<PyTile>> {
        self.game
            .state()
            .try_hand(player.0)
            .map(|hand| hand.iter().copied().map(PyTile).collect())
            .ok_or_else(|| unseated(player.0))
    }

    #[getter]
    fn board(&self) -> Vec<PyTile> {
        self.game.state().board().iter().copied().map(PyTile).collect()
    }

    #[getter]
    fn pile_size(&self) -> usize {
        self.game.state().pile().len()
    }

    fn score(&self, player: &PyPlayerId) -> PyResult<u32> {
        self.game
            .state()
            .try_score(player.0)
            .ok_or_else(|| unseated(player.0))
    }

    #[getter]
    fn current_player(&self) -> PyPlayerId {
        PyPlayerId(self.game.state().current_player())
    }

    #[getter]
    fn message(&self) -> String {
        self.game.state().message().to_string()
    }

    #[getter]
    fn round(&self) -> u32 {
        self.game.state().round()
    }

    #[getter]
    fn is_over(&self) -> bool {
        self.game.state().status() == GameStatus::Ended
    }

    /// Winner of the round, None while it continues.
    #[getter]
    fn winner(&self) -> Option<PyPlayerId> {
        self.game.state().result().map(|r| PyPlayerId(r.winner))
    }

    fn __repr__(&self) -> String {
        let state = self.game.state();
        format!(
            "DominoGame(round={}, current={}, board={}, pile={})",
            state.round(),
            state.current_player(),
            state.board().len(),
            state.pile().len()
        )
    }
}
