//! Dominoes rules driven end to end through the public API.
//!
//! These tests play whole rounds with a seeded random policy and check the
//! table-wide invariants: the tile set is conserved, rejected intents never
//! move a tile, and every round terminates.

use domino_table::core::{DominoConfig, GameRng, MoveError, Opening, PlayerId};
use domino_table::games::domino::{
    DominoEvent, DominoGame, DominoRules, DominoState, DropLocation, DropZone, GameStatus,
    MoveIntent,
};
use domino_table::rules::{EndReason, RulesEngine};
use domino_table::tiles::Tile;
use proptest::prelude::*;

const P0: PlayerId = PlayerId::new(0);
const P1: PlayerId = PlayerId::new(1);

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Play random legal intents until the round ends. Returns the move count.
fn play_out(game: &mut DominoGame, rng: &mut GameRng) -> usize {
    let mut moves = 0;
    while game.state().status() == GameStatus::Playing {
        let player = game.state().current_player();
        let intents = game.rules().legal_intents(game.state(), player);
        assert!(!intents.is_empty(), "stuck with no legal intent");

        let intent = intents[rng.gen_range_usize(0..intents.len())];
        game.dispatch(player, intent)
            .unwrap_or_else(|e| panic!("legal intent {intent:?} rejected: {e}"));

        moves += 1;
        assert!(moves < 500, "round did not terminate");
    }
    moves
}

fn tile_count(state: &DominoState) -> usize {
    state.all_tiles().count()
}

fn pairs(tiles: &[(u8, u8)]) -> Vec<Tile> {
    tiles.iter().map(|&(t, b)| Tile::new(t, b)).collect()
}

/// Scenario: empty board, player 0 plays (3,5).
#[test]
fn test_opening_tile_passes_turn() {
    let state = DominoState::from_parts(
        vec![pairs(&[(3, 5), (1, 2)]), pairs(&[(0, 0)])],
        vec![],
        pairs(&[(6, 6)]),
        P0,
    );

    let t = DominoRules.apply(&state, P0, &MoveIntent::place(0));
    assert_eq!(
        t.outcome,
        Ok(DominoEvent::Placed {
            player: P0,
            tile: Tile::new(3, 5),
            board_index: 0,
        })
    );
    assert_eq!(t.state.board().iter().copied().collect::<Vec<_>>(), pairs(&[(3, 5)]));
    assert_eq!(t.state.current_player(), P1);
    assert_eq!(t.state.message(), "Player 2's turn");
}

/// Scenario: (6,6) against [2|4] is rejected and nothing moves.
#[test]
fn test_mismatched_tile_rejected() {
    let state = DominoState::from_parts(
        vec![pairs(&[(6, 6), (1, 2)]), pairs(&[(0, 0)])],
        pairs(&[(2, 4)]),
        vec![],
        P0,
    );

    let t = DominoRules.apply(&state, P0, &MoveIntent::place(0));
    assert_eq!(t.outcome, Err(MoveError::InvalidMove));
    assert_eq!(t.state.message(), "Invalid move! Numbers must match.");
    assert_eq!(t.state.board(), state.board());
    assert_eq!(t.state.hand(P0), state.hand(P0));
    assert_eq!(t.state.current_player(), P0);
}

/// Scenario: last tile played scores the opponent's pips.
#[test]
fn test_emptying_hand_wins() {
    let state = DominoState::from_parts(
        vec![pairs(&[(4, 1)]), pairs(&[(6, 5), (2, 2)])],
        pairs(&[(3, 4)]),
        pairs(&[(0, 0)]),
        P0,
    );

    let t = DominoRules.apply(&state, P0, &MoveIntent::place(0));
    assert!(t.accepted());
    assert_eq!(t.state.status(), GameStatus::Ended);
    assert_eq!(t.state.score(P0), 15);
    assert_eq!(t.state.score(P1), 0);
    assert_eq!(t.state.current_player(), P0);
    assert_eq!(t.state.message(), "Player 1 wins! Score: 15 points");

    let result = DominoRules.is_terminal(&t.state).unwrap();
    assert!(result.is_winner(P0));
    assert_eq!(result.reason, EndReason::Domino);
}

/// Scenario: drawing from an empty boneyard only changes the message.
#[test]
fn test_draw_from_empty_boneyard() {
    let state = DominoState::from_parts(
        vec![pairs(&[(6, 6)]), pairs(&[(0, 1)])],
        pairs(&[(1, 2)]),
        vec![],
        P0,
    );

    let t = DominoRules.apply(&state, P0, &MoveIntent::DrawFromPile);
    assert_eq!(t.outcome, Err(MoveError::BoneyardEmpty));
    assert_eq!(t.state.message(), "No more dominoes in the boneyard!");
    assert_eq!(t.state.hand(P0), state.hand(P0));
    assert_eq!(t.state.hand(P1), state.hand(P1));
    assert_eq!(t.state.board(), state.board());
    assert_eq!(t.state.current_player(), state.current_player());
    assert_eq!(t.state.status(), state.status());
}

/// Drag and drop through the controller.
#[test]
fn test_drop_tile_flow() {
    let state = DominoState::from_parts(
        vec![pairs(&[(1, 6), (2, 3), (5, 5)]), pairs(&[(0, 4)])],
        pairs(&[(3, 4)]),
        pairs(&[(0, 0)]),
        P0,
    );
    let mut game = DominoGame::with_state(DominoConfig::default(), state);
    let hand = |i| DropLocation::new(DropZone::Hand(P0), i);

    // Outside every zone: nothing happens
    assert_eq!(game.drop_tile(hand(0), None), Ok(None));
    assert_eq!(game.state().hand(P0).len(), 3);

    // Reorder within own hand
    let event = game
        .drop_tile(hand(2), Some(DropLocation::new(DropZone::Hand(P0), 0)))
        .unwrap();
    assert_eq!(event, Some(DominoEvent::Reordered { player: P0, from: 2, to: 0 }));
    assert_eq!(game.state().hand(P0)[0], Tile::new(5, 5));

    // Into the opponent's hand
    assert_eq!(
        game.drop_tile(hand(0), Some(DropLocation::new(DropZone::Hand(P1), 0))),
        Err(MoveError::WrongDestination)
    );
    assert_eq!(
        game.state().message(),
        "Dominoes can only go to the board or your own hand!"
    );

    // (2,3) joins the [3|4] chain at the front
    let event = game
        .drop_tile(hand(2), Some(DropLocation::new(DropZone::Board, 0)))
        .unwrap();
    assert!(matches!(event, Some(DominoEvent::Placed { board_index: 0, .. })));
    assert_eq!(game.state().board()[0], Tile::new(2, 3));
    assert_eq!(game.state().current_player(), P1);

    // Seat 0's hand is locked on seat 1's turn
    assert_eq!(
        game.drop_tile(hand(0), Some(DropLocation::new(DropZone::Board, 1))),
        Err(MoveError::NotYourTurn)
    );
}

#[test]
fn test_random_rounds_terminate() {
    init_tracing();

    for seed in 0..20 {
        let mut game = DominoGame::new(DominoConfig::default().with_seed(seed));
        let mut policy = GameRng::new(seed + 1000);

        play_out(&mut game, &mut policy);

        let state = game.state();
        assert_eq!(tile_count(state), 28);
        let result = state.result().expect("ended round has a result");
        match result.reason {
            EndReason::Domino => assert!(state.hand(result.winner).is_empty()),
            EndReason::Blocked => {
                assert!(state.pile().is_empty());
                assert!(!state.any_placement());
            }
        }
        assert!(game.rules().legal_intents(state, state.current_player()).is_empty());
    }
}

#[test]
fn test_tile_set_conserved_every_move() {
    let mut game = DominoGame::new(DominoConfig::default().with_seed(3));
    let mut policy = GameRng::new(11);

    while game.state().status() == GameStatus::Playing {
        let player = game.state().current_player();
        let intents = game.rules().legal_intents(game.state(), player);
        let intent = intents[policy.gen_range_usize(0..intents.len())];
        game.dispatch(player, intent).unwrap();
        assert_eq!(tile_count(game.state()), 28);
    }
}

#[test]
fn test_three_and_four_players() {
    for player_count in [3, 4] {
        let config = DominoConfig::default()
            .with_player_count(player_count)
            .with_hand_size(5)
            .with_seed(9);
        let mut game = DominoGame::new(config);

        assert_eq!(game.state().player_count(), player_count);
        assert_eq!(game.state().pile().len(), 28 - player_count * 5);

        // Placing and passing hand the turn to the next seat; drawing keeps it
        let mut policy = GameRng::new(5);
        while game.state().status() == GameStatus::Playing {
            let player = game.state().current_player();
            let intents = game.rules().legal_intents(game.state(), player);
            let intent = intents[policy.gen_range_usize(0..intents.len())];
            let event = game.dispatch(player, intent).unwrap();

            if game.state().status() == GameStatus::Playing {
                let expected = match event {
                    DominoEvent::Drew { .. } => player,
                    _ => player.next(player_count),
                };
                assert_eq!(game.state().current_player(), expected);
            }
        }
        assert_eq!(tile_count(game.state()), 28);
    }
}

#[test]
fn test_rounds_accumulate_scores() {
    let mut game = DominoGame::new(DominoConfig::default().with_seed(21));
    let mut policy = GameRng::new(2);

    let mut total = 0;
    for round in 1..=3 {
        assert_eq!(game.state().round(), round);
        play_out(&mut game, &mut policy);
        total += game.state().result().unwrap().points;
        game.next_round();
    }

    let scored: u32 = game.state().scores().values().sum();
    assert_eq!(scored, total);
    assert_eq!(game.state().status(), GameStatus::Playing);
    assert!(game.state().board().is_empty());
}

#[test]
fn test_highest_double_opening() {
    let config = DominoConfig::default()
        .with_opening(Opening::HighestDouble)
        .with_seed(17);
    let game = DominoGame::new(config);
    let state = game.state();

    let best = PlayerId::all(2)
        .flat_map(|p| {
            state
                .hand(p)
                .iter()
                .filter(|t| t.is_double())
                .map(|t| (t.top, p))
                .collect::<Vec<_>>()
        })
        .max();
    if let Some((_, holder)) = best {
        assert_eq!(state.current_player(), holder);
    } else {
        assert_eq!(state.current_player(), P0);
    }
}

#[test]
fn test_snapshot_resumes_identically() {
    let mut game = DominoGame::new(DominoConfig::default().with_seed(8));
    let mut policy = GameRng::new(8);
    for _ in 0..6 {
        let player = game.state().current_player();
        let intents = game.rules().legal_intents(game.state(), player);
        game.dispatch(player, intents[policy.gen_range_usize(0..intents.len())])
            .unwrap();
    }

    let bytes = game.snapshot().unwrap();
    let mut restored = DominoGame::restore(&bytes).unwrap();
    assert_eq!(restored.state(), game.state());

    game.next_round();
    restored.next_round();
    assert_eq!(restored.state(), game.state());
}

fn tile() -> impl Strategy<Value = (u8, u8)> {
    (0u8..=6, 0u8..=6)
}

proptest! {
    /// A tile joins a non-empty chain iff one of its halves matches the
    /// first tile's top or the last tile's bottom.
    #[test]
    fn test_validity_matches_join_rule(
        board in prop::collection::vec(tile(), 1..5),
        (top, bottom) in tile(),
    ) {
        let board = pairs(&board);
        let first = board[0].top;
        let last = board[board.len() - 1].bottom;
        let state = DominoState::from_parts(
            vec![vec![Tile::new(top, bottom), Tile::new(0, 0)], pairs(&[(1, 1)])],
            board,
            pairs(&[(6, 6)]),
            P0,
        );

        let expected = top == first || top == last || bottom == first || bottom == last;
        let t = DominoRules.apply(&state, P0, &MoveIntent::place(0));
        prop_assert_eq!(t.accepted(), expected);
    }

    /// Rejected intents leave everything but the message untouched.
    #[test]
    fn test_rejection_never_moves_tiles(
        seed in 0u64..500,
        player in 0u8..2,
        hand_index in 0usize..10,
        kind in 0usize..3,
    ) {
        let game = DominoGame::new(DominoConfig::default().with_seed(seed));
        let state = game.state();
        let intent = match kind {
            0 => MoveIntent::place(hand_index),
            1 => MoveIntent::DrawFromPile,
            _ => MoveIntent::Pass,
        };

        let t = DominoRules.apply(state, PlayerId::new(player), &intent);
        if let Err(err) = t.outcome {
            prop_assert_eq!(t.state.message(), err.to_string());
            prop_assert_eq!(t.state.board(), state.board());
            prop_assert_eq!(t.state.pile(), state.pile());
            prop_assert_eq!(t.state.hand(P0), state.hand(P0));
            prop_assert_eq!(t.state.hand(P1), state.hand(P1));
            prop_assert_eq!(t.state.current_player(), state.current_player());
            prop_assert_eq!(t.state.status(), state.status());
        }
    }
}
