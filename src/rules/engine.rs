//! Rules engine trait for table games.
//!
//! Transitions are pure: `apply` borrows the current state and returns the
//! next one, so a controller can swap its state wholesale and tests can
//! drive the rules without any view.

use serde::{Deserialize, Serialize};

use crate::core::{MoveError, PlayerId};

/// How a round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// The winner played their last tile.
    Domino,
    /// Nobody could move and the boneyard was empty.
    Blocked,
}

/// Result of a finished round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: PlayerId,
    pub reason: EndReason,
    /// Points added to the winner's score.
    pub points: u32,
}

impl GameResult {
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner == player
    }
}

/// Outcome of applying one intent.
///
/// On rejection `state` differs from the input only in its status message.
#[derive(Clone, Debug)]
pub struct Transition<S, E> {
    pub state: S,
    pub outcome: Result<E, MoveError>,
}

impl<S, E> Transition<S, E> {
    #[must_use]
    pub fn accepted(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_intents`: empty if the player cannot act
/// - `apply`: deterministic; never panics on a bad intent
/// - `is_terminal`: `None` while the round continues
pub trait RulesEngine {
    type State;
    type Intent: PartialEq;
    type Event;

    /// Every intent `apply` would accept from `player` right now.
    fn legal_intents(&self, state: &Self::State, player: PlayerId) -> Vec<Self::Intent>;

    fn apply(
        &self,
        state: &Self::State,
        player: PlayerId,
        intent: &Self::Intent,
    ) -> Transition<Self::State, Self::Event>;

    fn is_terminal(&self, state: &Self::State) -> Option<GameResult>;

    fn is_legal(&self, state: &Self::State, player: PlayerId, intent: &Self::Intent) -> bool {
        self.legal_intents(state, player).contains(intent)
    }
}
