//! Shared building blocks: seats, RNG, configuration, errors, geometry.

pub mod config;
pub mod error;
pub mod geometry;
pub mod player;
pub mod rng;

pub use config::{DeckConfig, DominoConfig, Opening};
pub use error::{ConfigError, MoveError, SnapshotError, SnapshotResult};
pub use geometry::Position;
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
