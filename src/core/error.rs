//! Error types.
//!
//! Rule rejections are not failures of the program: their `Display` text is
//! the message shown to the player, and the game controller writes it into
//! the state's status line.

use thiserror::Error;

/// Why the domino rules refused an intent.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveError {
    #[error("Not your turn!")]
    NotYourTurn,

    #[error("Invalid move! Numbers must match.")]
    InvalidMove,

    #[error("No more dominoes in the boneyard!")]
    BoneyardEmpty,

    #[error("The game is over!")]
    GameOver,

    #[error("No such domino in hand!")]
    NoSuchTile,

    /// Passing is only allowed when nothing can be played or drawn.
    #[error("You still have a move!")]
    CannotPass,

    #[error("Dominoes can only go to the board or your own hand!")]
    WrongDestination,
}

/// A table configuration no deal can satisfy.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Player count must be 2-4, got {0}")]
    PlayerCount(usize),

    #[error("Hand size must be at least 1")]
    EmptyHand,

    #[error("Not enough tiles to deal {players} hands of {hand_size}")]
    NotEnoughTiles { players: usize, hand_size: usize },
}

/// Errors from encoding or decoding a game snapshot.
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("snapshot codec error: {0}")]
    Codec(#[from] bincode::Error),

    #[error("snapshot config is invalid: {0}")]
    Config(#[from] ConfigError),

    #[error("snapshot is inconsistent: {0}")]
    Inconsistent(String),
}

pub type SnapshotResult<T> = Result<T, SnapshotError>;
