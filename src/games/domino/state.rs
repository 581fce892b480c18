//! Dominoes game state.
//!
//! `DominoState` is a plain serializable value. Collections are `im`
//! vectors so the rules can clone a state and edit the copy for O(1)
//! instead of mutating in place.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use crate::core::{DominoConfig, GameRng, Opening, PlayerId, PlayerMap};
use crate::rules::GameResult;
use crate::tiles::{full_set, pip_sum, Tile, TileId};

/// Round status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    Ended,
}

/// Complete state of a dominoes table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DominoState {
    pub(crate) hands: PlayerMap<Vector<Tile>>,
    pub(crate) scores: PlayerMap<u32>,
    pub(crate) board: Vector<Tile>,
    pub(crate) pile: Vector<Tile>,
    pub(crate) current: PlayerId,
    pub(crate) status: GameStatus,
    pub(crate) message: String,
    pub(crate) round: u32,
    pub(crate) result: Option<GameResult>,
}

impl DominoState {
    /// Shuffle a full set and deal a new round.
    ///
    /// Seats receive consecutive slices of the shuffled set; what is left
    /// becomes the boneyard. `scores` carries totals over from an earlier
    /// round.
    pub fn deal(
        config: &DominoConfig,
        rng: &mut GameRng,
        scores: Option<PlayerMap<u32>>,
        round: u32,
    ) -> Self {
        config.validate();

        let mut tiles = full_set(config.max_pip);
        rng.shuffle(&mut tiles);

        let mut dealt = tiles.chunks(config.hand_size);
        let hands = PlayerMap::new(config.player_count, |_| {
            dealt
                .next()
                .map(|chunk| chunk.iter().copied().collect())
                .unwrap_or_default()
        });
        let pile: Vector<Tile> = tiles[config.player_count * config.hand_size..]
            .iter()
            .copied()
            .collect();

        let current = match config.opening {
            Opening::FirstPlayer => PlayerId::new(0),
            Opening::HighestDouble => highest_double_holder(&hands).unwrap_or(PlayerId::new(0)),
        };

        Self {
            scores: scores.unwrap_or_else(|| PlayerMap::with_value(config.player_count, 0)),
            hands,
            board: Vector::new(),
            pile,
            current,
            status: GameStatus::Playing,
            message: turn_message(current),
            round,
            result: None,
        }
    }

    /// Assemble a position directly, with zero scores.
    ///
    /// Useful for puzzles, replays and tests.
    #[must_use]
    pub fn from_parts(
        hands: Vec<Vec<Tile>>,
        board: Vec<Tile>,
        pile: Vec<Tile>,
        current: PlayerId,
    ) -> Self {
        let player_count = hands.len();
        assert!(
            (2..=4).contains(&player_count),
            "Player count must be 2-4"
        );
        assert!(current.index() < player_count, "Current player out of range");

        let mut hands = hands.into_iter();
        Self {
            hands: PlayerMap::new(player_count, |_| {
                hands.next().map(Vector::from).unwrap_or_default()
            }),
            scores: PlayerMap::with_value(player_count, 0),
            board: Vector::from(board),
            pile: Vector::from(pile),
            current,
            status: GameStatus::Playing,
            message: turn_message(current),
            round: 1,
            result: None,
        }
    }

    // === Queries ===

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.hands.player_count()
    }

    /// Whether `player` has a seat at this table.
    #[must_use]
    pub fn is_seated(&self, player: PlayerId) -> bool {
        player.index() < self.player_count()
    }

    /// Panics if `player` is not seated; see `try_hand`.
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &Vector<Tile> {
        &self.hands[player]
    }

    #[must_use]
    pub fn board(&self) -> &Vector<Tile> {
        &self.board
    }

    /// The boneyard, drawn from the front.
    #[must_use]
    pub fn pile(&self) -> &Vector<Tile> {
        &self.pile
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn try_hand(&self, player: PlayerId) -> Option<&Vector<Tile>> {
        self.hands.get(player)
    }

    #[must_use]
    pub fn try_score(&self, player: PlayerId) -> Option<u32> {
        self.scores.get(player).copied()
    }

    #[must_use]
    pub fn score(&self, player: PlayerId) -> u32 {
        self.scores[player]
    }

    #[must_use]
    pub fn scores(&self) -> &PlayerMap<u32> {
        &self.scores
    }

    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    #[must_use]
    pub fn hand_pips(&self, player: PlayerId) -> u32 {
        pip_sum(&self.hands[player])
    }

    /// Index of a tile in a player's hand.
    #[must_use]
    pub fn find_in_hand(&self, player: PlayerId, id: TileId) -> Option<usize> {
        self.hands[player].iter().position(|t| t.id() == id)
    }

    /// The values a new tile can join: the first tile's top and the last
    /// tile's bottom. Empty for an empty board.
    #[must_use]
    pub fn open_ends(&self) -> SmallVec<[u8; 2]> {
        match (self.board.front(), self.board.back()) {
            (Some(first), Some(last)) => smallvec![first.top, last.bottom],
            _ => SmallVec::new(),
        }
    }

    /// Whether `tile` may be placed on the current board.
    #[must_use]
    pub fn is_valid_placement(&self, tile: &Tile) -> bool {
        let ends = self.open_ends();
        ends.is_empty() || ends.contains(&tile.top) || ends.contains(&tile.bottom)
    }

    /// Hand indices of every tile `player` could place.
    #[must_use]
    pub fn playable_indices(&self, player: PlayerId) -> SmallVec<[usize; 8]> {
        self.hands[player]
            .iter()
            .enumerate()
            .filter(|(_, t)| self.is_valid_placement(t))
            .map(|(i, _)| i)
            .collect()
    }

    /// Whether any seat holds a placeable tile.
    #[must_use]
    pub fn any_placement(&self) -> bool {
        self.hands
            .values()
            .any(|hand| hand.iter().any(|t| self.is_valid_placement(t)))
    }

    /// Every tile on the table; always the full set while a round runs.
    pub fn all_tiles(&self) -> impl Iterator<Item = &Tile> {
        self.hands
            .values()
            .flat_map(|h| h.iter())
            .chain(self.board.iter())
            .chain(self.pile.iter())
    }

    // === Copy-on-write helpers ===

    #[must_use]
    pub(crate) fn with_message(&self, message: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.message = message.into();
        next
    }
}

pub(crate) fn turn_message(player: PlayerId) -> String {
    format!("{player}'s turn")
}

fn highest_double_holder(hands: &PlayerMap<Vector<Tile>>) -> Option<PlayerId> {
    hands
        .iter()
        .flat_map(|(player, hand)| {
            hand.iter()
                .filter(|t| t.is_double())
                .map(move |t| (t.top, player))
        })
        .max_by_key(|(pips, _)| *pips)
        .map(|(_, player)| player)
}
