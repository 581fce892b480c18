//! Dominoes rules and the controller that owns a table.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::intent::{BoardPosition, DropLocation, MoveIntent};
use super::state::{turn_message, DominoState, GameStatus};
use crate::core::{DominoConfig, GameRng, MoveError, PlayerId};
use crate::rules::{EndReason, GameResult, RulesEngine, Transition};
use crate::tiles::Tile;

/// What an accepted intent did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DominoEvent {
    Placed {
        player: PlayerId,
        tile: Tile,
        board_index: usize,
    },
    Reordered {
        player: PlayerId,
        from: usize,
        to: usize,
    },
    Drew {
        player: PlayerId,
        tile: Tile,
    },
    Passed {
        player: PlayerId,
    },
}

pub type DominoTransition = Transition<DominoState, DominoEvent>;

/// Classic block dominoes.
///
/// A tile joins the chain when either half matches the first tile's top or
/// the last tile's bottom. A round ends when someone empties their hand or
/// when the boneyard is empty and nobody can place a tile.
#[derive(Clone, Debug, Default)]
pub struct DominoRules;

impl DominoRules {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Leave `state` as is apart from the status line.
    #[must_use]
    pub fn reject(state: &DominoState, err: MoveError) -> DominoTransition {
        Transition {
            state: state.with_message(err.to_string()),
            outcome: Err(err),
        }
    }

    fn try_apply(
        &self,
        state: &DominoState,
        player: PlayerId,
        intent: &MoveIntent,
    ) -> Result<(DominoState, DominoEvent), MoveError> {
        if state.status == GameStatus::Ended {
            return Err(MoveError::GameOver);
        }
        if player != state.current {
            return Err(MoveError::NotYourTurn);
        }

        match *intent {
            MoveIntent::PlaceOnBoard {
                hand_index,
                position,
            } => self.place(state, player, hand_index, position),
            MoveIntent::ReturnToHand { from, to } => self.reorder(state, player, from, to),
            MoveIntent::DrawFromPile => self.draw(state, player),
            MoveIntent::Pass => self.pass(state, player),
        }
    }

    fn place(
        &self,
        state: &DominoState,
        player: PlayerId,
        hand_index: usize,
        position: BoardPosition,
    ) -> Result<(DominoState, DominoEvent), MoveError> {
        let tile = *state.hands[player]
            .get(hand_index)
            .ok_or(MoveError::NoSuchTile)?;
        if !state.is_valid_placement(&tile) {
            return Err(MoveError::InvalidMove);
        }

        let mut next = state.clone();
        next.hands[player].remove(hand_index);

        let board_index = position.resolve(next.board.len());
        if let BoardPosition::Index(requested) = position {
            if requested != board_index {
                warn!(requested, board_index, "board index snapped to chain end");
            }
        }
        next.board.insert(board_index, tile);
        debug!(%player, %tile, board_index, "tile placed");

        if next.hands[player].is_empty() {
            finish_domino(&mut next, player);
        } else if next.pile.is_empty() && !next.any_placement() {
            finish_blocked(&mut next);
        } else {
            advance_turn(&mut next);
        }

        Ok((
            next,
            DominoEvent::Placed {
                player,
                tile,
                board_index,
            },
        ))
    }

    fn reorder(
        &self,
        state: &DominoState,
        player: PlayerId,
        from: usize,
        to: usize,
    ) -> Result<(DominoState, DominoEvent), MoveError> {
        if from >= state.hands[player].len() {
            return Err(MoveError::NoSuchTile);
        }

        let mut next = state.clone();
        let hand = &mut next.hands[player];
        let tile = hand.remove(from);
        let to = to.min(hand.len());
        hand.insert(to, tile);

        Ok((next, DominoEvent::Reordered { player, from, to }))
    }

    fn draw(
        &self,
        state: &DominoState,
        player: PlayerId,
    ) -> Result<(DominoState, DominoEvent), MoveError> {
        let mut next = state.clone();
        let Some(tile) = next.pile.pop_front() else {
            return Err(MoveError::BoneyardEmpty);
        };
        next.hands[player].push_back(tile);
        next.message = format!("{player} drew a domino");
        debug!(%player, remaining = next.pile.len(), "tile drawn");

        if next.pile.is_empty() && !next.any_placement() {
            finish_blocked(&mut next);
        }

        Ok((next, DominoEvent::Drew { player, tile }))
    }

    fn pass(
        &self,
        state: &DominoState,
        player: PlayerId,
    ) -> Result<(DominoState, DominoEvent), MoveError> {
        if !state.pile.is_empty() || !state.playable_indices(player).is_empty() {
            return Err(MoveError::CannotPass);
        }

        let mut next = state.clone();
        if next.any_placement() {
            advance_turn(&mut next);
            next.message = format!("{player} passes. {}", next.message);
        } else {
            finish_blocked(&mut next);
        }
        debug!(%player, "turn passed");

        Ok((next, DominoEvent::Passed { player }))
    }
}

fn advance_turn(state: &mut DominoState) {
    state.current = state.current.next(state.player_count());
    state.message = turn_message(state.current);
}

fn finish_domino(state: &mut DominoState, winner: PlayerId) {
    let points: u32 = PlayerId::all(state.player_count())
        .filter(|&p| p != winner)
        .map(|p| state.hand_pips(p))
        .sum();

    state.scores[winner] += points;
    state.status = GameStatus::Ended;
    state.message = format!("{winner} wins! Score: {points} points");
    state.result = Some(GameResult {
        winner,
        reason: EndReason::Domino,
        points,
    });
    info!(%winner, points, round = state.round, "round won by domino");
}

/// Lowest hand pip-sum wins; an exact tie goes to the lowest seat.
fn finish_blocked(state: &mut DominoState) {
    let winner = PlayerId::all(state.player_count())
        .min_by_key(|&p| (state.hand_pips(p), p))
        .unwrap_or(PlayerId::new(0));

    state.status = GameStatus::Ended;
    state.message = format!("Game blocked! {winner} wins with fewer points!");
    state.result = Some(GameResult {
        winner,
        reason: EndReason::Blocked,
        points: 0,
    });
    info!(%winner, round = state.round, "round blocked");
}

impl RulesEngine for DominoRules {
    type State = DominoState;
    type Intent = MoveIntent;
    type Event = DominoEvent;

    /// Placements at the end of the chain, a draw while the boneyard has
    /// tiles, and a pass when nothing else is possible. Hand reordering is
    /// always accepted but not listed.
    fn legal_intents(&self, state: &DominoState, player: PlayerId) -> Vec<MoveIntent> {
        if state.status == GameStatus::Ended || player != state.current {
            return vec![];
        }

        let mut intents: Vec<MoveIntent> = state
            .playable_indices(player)
            .into_iter()
            .map(MoveIntent::place)
            .collect();

        if !state.pile.is_empty() {
            intents.push(MoveIntent::DrawFromPile);
        } else if intents.is_empty() {
            intents.push(MoveIntent::Pass);
        }

        intents
    }

    fn apply(
        &self,
        state: &DominoState,
        player: PlayerId,
        intent: &MoveIntent,
    ) -> DominoTransition {
        match self.try_apply(state, player, intent) {
            Ok((next, event)) => Transition {
                state: next,
                outcome: Ok(event),
            },
            Err(err) => Self::reject(state, err),
        }
    }

    fn is_terminal(&self, state: &DominoState) -> Option<GameResult> {
        state.result.clone()
    }
}

/// Owns one dominoes table and replaces its state on every transition.
pub struct DominoGame {
    pub(super) config: DominoConfig,
    pub(super) rules: DominoRules,
    pub(super) state: DominoState,
    pub(super) rng: GameRng,
}

impl DominoGame {
    /// Deal the first round.
    #[must_use]
    pub fn new(config: DominoConfig) -> Self {
        let mut rng = GameRng::new(config.seed);
        let state = DominoState::deal(&config, &mut rng, None, 1);
        info!(
            players = config.player_count,
            seed = config.seed,
            "dominoes table dealt"
        );

        Self {
            config,
            rules: DominoRules::new(),
            state,
            rng,
        }
    }

    /// Take over an existing position.
    #[must_use]
    pub fn with_state(config: DominoConfig, state: DominoState) -> Self {
        let rng = GameRng::new(config.seed);
        Self {
            config,
            rules: DominoRules::new(),
            state,
            rng,
        }
    }

    #[must_use]
    pub fn state(&self) -> &DominoState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &DominoConfig {
        &self.config
    }

    #[must_use]
    pub fn rules(&self) -> &DominoRules {
        &self.rules
    }

    /// Apply one intent. A rejection still updates the status message.
    pub fn dispatch(
        &mut self,
        player: PlayerId,
        intent: MoveIntent,
    ) -> Result<DominoEvent, MoveError> {
        let Transition { state, outcome } = self.rules.apply(&self.state, player, &intent);
        self.state = state;

        if let Err(err) = &outcome {
            debug!(%player, ?intent, %err, "intent rejected");
        }
        outcome
    }

    /// Current player places the tile at `hand_index` at the end of the chain.
    pub fn play(&mut self, hand_index: usize) -> Result<DominoEvent, MoveError> {
        self.dispatch(self.state.current, MoveIntent::place(hand_index))
    }

    /// Current player draws from the boneyard.
    pub fn draw_from_pile(&mut self) -> Result<DominoEvent, MoveError> {
        self.dispatch(self.state.current, MoveIntent::DrawFromPile)
    }

    pub fn pass(&mut self) -> Result<DominoEvent, MoveError> {
        self.dispatch(self.state.current, MoveIntent::Pass)
    }

    /// Handle a finished drag from the view.
    ///
    /// Dropping outside every zone does nothing and returns `Ok(None)`.
    pub fn drop_tile(
        &mut self,
        source: DropLocation,
        destination: Option<DropLocation>,
    ) -> Result<Option<DominoEvent>, MoveError> {
        let current = self.state.current;
        let intent = if self.state.status == GameStatus::Ended {
            Err(MoveError::GameOver)
        } else {
            MoveIntent::from_drop(current, source, destination)
        };

        match intent {
            Ok(None) => Ok(None),
            Ok(Some(intent)) => self.dispatch(current, intent).map(Some),
            Err(err) => {
                self.state = DominoRules::reject(&self.state, err).state;
                Err(err)
            }
        }
    }

    /// Re-deal with a fresh shuffle, keeping cumulative scores.
    pub fn next_round(&mut self) {
        let mut rng = self.rng.fork();
        let round = self.state.round + 1;
        self.state = DominoState::deal(
            &self.config,
            &mut rng,
            Some(self.state.scores.clone()),
            round,
        );
        info!(round, "new round dealt");
    }
}
