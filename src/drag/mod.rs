//! Drag controller: turns pointer down/move/up into committed positions.

pub mod controller;

pub use controller::{DragCommit, DragController, DragSession, DragTarget, PointerSource};
