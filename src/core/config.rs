//! Table configuration.
//!
//! - `DominoConfig`: seats, hand size, tile set and opening rule for a
//!   dominoes game
//! - `DeckConfig`: card count, card and container geometry, and initial
//!   layout for the flashcard deck
//!
//! Both serialize with serde and follow the `Default` + `with_*` builder
//! pattern.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::layout::{LayoutConfig, LayoutMode};

/// Who places the first tile of a round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Opening {
    /// Seat 0 always opens.
    #[default]
    FirstPlayer,
    /// The holder of the highest double opens; seat 0 if nobody holds one.
    HighestDouble,
}

/// Configuration for a dominoes game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DominoConfig {
    /// Number of seats (2-4).
    pub player_count: usize,

    /// Tiles dealt to each seat.
    pub hand_size: usize,

    /// Highest pip value; 6 gives the classic 28-tile double-six set.
    pub max_pip: u8,

    pub opening: Opening,

    /// Seed for the deal.
    pub seed: u64,
}

impl Default for DominoConfig {
    fn default() -> Self {
        Self {
            player_count: 2,
            hand_size: 7,
            max_pip: 6,
            opening: Opening::FirstPlayer,
            seed: 42,
        }
    }
}

impl DominoConfig {
    #[must_use]
    pub fn with_player_count(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    #[must_use]
    pub fn with_max_pip(mut self, max_pip: u8) -> Self {
        self.max_pip = max_pip;
        self
    }

    #[must_use]
    pub fn with_opening(mut self, opening: Opening) -> Self {
        self.opening = opening;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Size of the full tile set for `max_pip`.
    #[must_use]
    pub fn set_size(&self) -> usize {
        let n = self.max_pip as usize + 1;
        n * (n + 1) / 2
    }

    /// Check that a deal is possible.
    pub fn check(&self) -> Result<(), ConfigError> {
        if !(2..=4).contains(&self.player_count) {
            return Err(ConfigError::PlayerCount(self.player_count));
        }
        if self.hand_size == 0 {
            return Err(ConfigError::EmptyHand);
        }
        if self.player_count * self.hand_size > self.set_size() {
            return Err(ConfigError::NotEnoughTiles {
                players: self.player_count,
                hand_size: self.hand_size,
            });
        }
        Ok(())
    }

    /// Panics on a configuration no deal can satisfy.
    pub fn validate(&self) {
        if let Err(err) = self.check() {
            panic!("{err}");
        }
    }
}

/// Configuration for the flashcard deck.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeckConfig {
    /// Requested number of cards; capped at the question bank size.
    pub card_count: usize,

    pub layout: LayoutConfig,

    /// Layout applied when the deck is created.
    pub initial_layout: LayoutMode,

    pub seed: u64,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            card_count: 30,
            layout: LayoutConfig::default(),
            initial_layout: LayoutMode::Grid,
            seed: 42,
        }
    }
}

impl DeckConfig {
    #[must_use]
    pub fn with_card_count(mut self, count: usize) -> Self {
        self.card_count = count;
        self
    }

    #[must_use]
    pub fn with_container(mut self, width: f32, height: f32) -> Self {
        self.layout.container_width = width;
        self.layout.container_height = height;
        self
    }

    #[must_use]
    pub fn with_initial_layout(mut self, mode: LayoutMode) -> Self {
        self.initial_layout = mode;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_domino_config() {
        let config = DominoConfig::default();
        assert_eq!(config.player_count, 2);
        assert_eq!(config.hand_size, 7);
        assert_eq!(config.set_size(), 28);
        config.validate();
    }

    #[test]
    fn test_set_size_double_nine() {
        assert_eq!(DominoConfig::default().with_max_pip(9).set_size(), 55);
    }

    #[test]
    #[should_panic(expected = "Not enough tiles")]
    fn test_oversized_hands_rejected() {
        DominoConfig::default()
            .with_player_count(4)
            .with_hand_size(8)
            .validate();
    }

    #[test]
    #[should_panic(expected = "Player count must be 2-4")]
    fn test_single_player_rejected() {
        DominoConfig::default().with_player_count(1).validate();
    }

    #[test]
    fn test_check_reports_without_panicking() {
        assert_eq!(
            DominoConfig::default().with_player_count(5).check(),
            Err(ConfigError::PlayerCount(5))
        );
        assert_eq!(
            DominoConfig::default().with_hand_size(0).check(),
            Err(ConfigError::EmptyHand)
        );
        assert_eq!(
            DominoConfig::default().with_hand_size(15).check(),
            Err(ConfigError::NotEnoughTiles {
                players: 2,
                hand_size: 15
            })
        );
        assert_eq!(DominoConfig::default().check(), Ok(()));
    }

    #[test]
    fn test_deck_config_builder() {
        let config = DeckConfig::default()
            .with_card_count(12)
            .with_container(800.0, 600.0)
            .with_initial_layout(LayoutMode::Stack)
            .with_seed(9);

        assert_eq!(config.card_count, 12);
        assert_eq!(config.layout.container_width, 800.0);
        assert_eq!(config.initial_layout, LayoutMode::Stack);
        assert_eq!(config.seed, 9);
    }

    #[test]
    fn test_serialization() {
        let config = DominoConfig::default().with_opening(Opening::HighestDouble);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: DominoConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
