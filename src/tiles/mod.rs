//! Domino tiles and the standard tile sets.

pub mod tile;

pub use tile::{full_set, pip_sum, Tile, TileId};
