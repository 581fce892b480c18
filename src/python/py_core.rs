//! Core type bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{MoveError, PlayerId};
use crate::tiles::Tile;

/// Rejected moves surface as `ValueError` carrying the status message.
pub(crate) fn move_err(err: MoveError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Python wrapper for PlayerId.
#[pyclass(name = "PlayerId")]
#[derive(Clone, Debug)]
pub struct PyPlayerId(pub PlayerId);

#[pymethods]
impl PyPlayerId {
    #[new]
    fn new(id: u8) -> Self {
        Self(PlayerId::new(id))
    }

    /// Seat index (0-based).
    fn index(&self) -> usize {
        self.0.index()
    }

    #[getter]
    fn id(&self) -> u8 {
        self.0 .0
    }

    fn __repr__(&self) -> String {
        format!("PlayerId({})", self.0 .0)
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        self.0 .0 as u64
    }
}

/// Python wrapper for Tile.
#[pyclass(name = "Tile")]
#[derive(Clone, Debug)]
pub struct PyTile(pub Tile);

#[pymethods]
impl PyTile {
    #[new]
    fn new(top: u8, bottom: u8) -> Self {
        Self(Tile::new(top, bottom))
    }

    #[getter]
    fn top(&self) -> u8 {
        self.0.top
    }

    #[getter]
    fn bottom(&self) -> u8 {
        self.0.bottom
    }

    #[getter]
    fn pips(&self) -> u32 {
        self.0.pips()
    }

    #[getter]
    fn image(&self) -> String {
        self.0.image_ref()
    }

    fn is_double(&self) -> bool {
        self.0.is_double()
    }

    fn __repr__(&self) -> String {
        format!("Tile({}, {})", self.0.top, self.0.bottom)
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        u64::from(self.0.top) * 256 + u64::from(self.0.bottom)
    }
}
