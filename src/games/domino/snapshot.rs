//! Binary snapshots of a dominoes table.

use serde::{Deserialize, Serialize};

use super::game::{DominoGame, DominoRules};
use super::state::DominoState;
use crate::core::{DominoConfig, GameRng, GameRngState, SnapshotError, SnapshotResult};
use crate::tiles::{full_set, Tile, TileId};

#[derive(Serialize, Deserialize)]
struct DominoSnapshot {
    config: DominoConfig,
    state: DominoState,
    rng: GameRngState,
}

impl DominoGame {
    /// Encode the table, including the RNG position for future rounds.
    pub fn snapshot(&self) -> SnapshotResult<Vec<u8>> {
        let snapshot = DominoSnapshot {
            config: self.config.clone(),
            state: self.state.clone(),
            rng: self.rng.state(),
        };
        Ok(bincode::serialize(&snapshot)?)
    }

    /// Rebuild a table from `snapshot` bytes.
    ///
    /// The config must be dealable, every seat must exist, and the table
    /// must hold the full tile set exactly once.
    pub fn restore(bytes: &[u8]) -> SnapshotResult<Self> {
        let snapshot: DominoSnapshot = bincode::deserialize(bytes)?;
        check_table(&snapshot.config, &snapshot.state)?;

        Ok(Self {
            config: snapshot.config,
            rules: DominoRules::new(),
            state: snapshot.state,
            rng: GameRng::from_state(&snapshot.rng),
        })
    }
}

fn check_table(config: &DominoConfig, state: &DominoState) -> SnapshotResult<()> {
    config.check()?;

    let seats = config.player_count;
    if state.player_count() != seats || state.scores().player_count() != seats {
        return Err(SnapshotError::Inconsistent(format!(
            "{} hands and {} scores for {seats} players",
            state.player_count(),
            state.scores().player_count()
        )));
    }
    if state.current_player().index() >= seats {
        return Err(SnapshotError::Inconsistent(format!(
            "{} is not seated at a {seats}-player table",
            state.current_player()
        )));
    }

    let mut tiles: Vec<TileId> = state.all_tiles().map(Tile::id).collect();
    tiles.sort_unstable();
    let expected: Vec<TileId> = full_set(config.max_pip).iter().map(Tile::id).collect();
    if tiles != expected {
        return Err(SnapshotError::Inconsistent(format!(
            "{} tiles on the table do not form the double-{} set",
            tiles.len(),
            config.max_pip
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ConfigError, PlayerId};

    #[test]
    fn test_snapshot_round_trip_mid_game() {
        let mut game = DominoGame::new(DominoConfig::default().with_seed(11));
        game.draw_from_pile().unwrap();
        let _ = game.play(0);

        let bytes = game.snapshot().unwrap();
        let restored = DominoGame::restore(&bytes).unwrap();

        assert_eq!(restored.state(), game.state());
        assert_eq!(restored.config(), game.config());
    }

    #[test]
    fn test_restored_table_deals_same_next_round() {
        let mut game = DominoGame::new(DominoConfig::default());
        let mut restored = DominoGame::restore(&game.snapshot().unwrap()).unwrap();

        game.next_round();
        restored.next_round();
        assert_eq!(restored.state(), game.state());
    }

    #[test]
    fn test_garbage_is_a_codec_error() {
        let err = DominoGame::restore(&[1, 2, 3]).err().unwrap();
        assert!(matches!(err, SnapshotError::Codec(_)));
    }

    #[test]
    fn test_partial_table_is_inconsistent() {
        let state = DominoState::from_parts(
            vec![vec![Tile::new(1, 2)], vec![Tile::new(3, 4)]],
            vec![],
            vec![],
            PlayerId::new(0),
        );
        let game = DominoGame::with_state(DominoConfig::default(), state);

        let err = DominoGame::restore(&game.snapshot().unwrap()).err().unwrap();
        assert!(matches!(err, SnapshotError::Inconsistent(_)));
    }

    fn full_table(tiles: Vec<Tile>) -> DominoGame {
        let state = DominoState::from_parts(
            vec![tiles[..7].to_vec(), tiles[7..14].to_vec()],
            vec![],
            tiles[14..].to_vec(),
            PlayerId::new(0),
        );
        DominoGame::with_state(DominoConfig::default(), state)
    }

    #[test]
    fn test_full_table_restores() {
        let game = full_table(full_set(6));
        assert!(DominoGame::restore(&game.snapshot().unwrap()).is_ok());
    }

    #[test]
    fn test_unseated_current_player_is_inconsistent() {
        let mut game = DominoGame::new(DominoConfig::default());
        game.state.current = PlayerId::new(7);

        let err = DominoGame::restore(&game.snapshot().unwrap()).err().unwrap();
        assert!(matches!(err, SnapshotError::Inconsistent(_)));
    }

    #[test]
    fn test_duplicate_tile_is_inconsistent() {
        // Right count, but [0|0] twice and no [6|6]
        let mut tiles = full_set(6);
        tiles[27] = Tile::new(0, 0);
        let game = full_table(tiles);

        let err = DominoGame::restore(&game.snapshot().unwrap()).err().unwrap();
        assert!(matches!(err, SnapshotError::Inconsistent(_)));
    }

    #[test]
    fn test_undealable_config_is_rejected() {
        let mut game = DominoGame::new(DominoConfig::default());
        game.config.hand_size = 20;

        let err = DominoGame::restore(&game.snapshot().unwrap()).err().unwrap();
        assert!(matches!(
            err,
            SnapshotError::Config(ConfigError::NotEnoughTiles { .. })
        ));
    }
}
