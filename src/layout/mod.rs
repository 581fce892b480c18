//! Layout engine for the flashcard deck.
//!
//! Stateless functions from (item count, geometry) to positions. Only the
//! random layout consumes RNG state; grid and stack are pure.

pub mod engine;

pub use engine::{
    arrange, grid_layout, random_layout, random_position, stack_layout, LayoutConfig, LayoutMode,
};
