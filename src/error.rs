use thiserror::Error;

use crate::types::PlayerId;

/// Why a move was rejected. A rejected move never changes the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("game is already over")]
    GameOver,
    #[error("square ({row}, {col}) is not placeable")]
    NotPlaceable { row: i32, col: i32 },
    #[error("square ({row}, {col}) is already taken")]
    CellOccupied { row: u8, col: u8 },
}

impl MoveError {
    /// Stable identifier for the presentation layer.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::GameOver => "game_over",
            Self::NotPlaceable { .. } => "not_placeable",
            Self::CellOccupied { .. } => "cell_occupied",
        }
    }
}

/// A stored document that breaks the game invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    #[error("board is {rows}x{cols}, expected {expected_rows}x{expected_cols}")]
    BoardSize {
        rows: u8,
        cols: u8,
        expected_rows: u8,
        expected_cols: u8,
    },
    #[error("players do not match the configured roster")]
    Players,
    #[error("unknown player id {0}")]
    UnknownPlayer(PlayerId),
    #[error("piece at ({row}, {col}) is not on a placeable square")]
    PieceNotPlaceable { row: u8, col: u8 },
    #[error("square ({row}, {col}) holds more than one piece")]
    DuplicatePiece { row: u8, col: u8 },
    #[error("player {player} has score {recorded} but owns {counted} pieces")]
    ScoreMismatch {
        player: PlayerId,
        recorded: u32,
        counted: u32,
    },
    #[error("bonus_available and bonus_player disagree")]
    BonusMismatch,
    #[error("game_over does not match a full board")]
    GameOverMismatch,
    #[error("winner does not match the final scores")]
    WinnerMismatch,
    #[error("town hall colour {0:?} does not match the result")]
    LandmarkColor(String),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage io failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("snapshot json is invalid: {0}")]
    Json(#[from] serde_json::Error),
    #[error("snapshot header is malformed: {0}")]
    Format(String),
    #[error("unsupported snapshot version: expected {expected}, got {found}")]
    UnsupportedVersion { expected: u32, found: u32 },
    #[error("snapshot checksum mismatch: expected {expected:#010x}, got {actual:#010x}")]
    ChecksumMismatch { expected: u32, actual: u32 },
    #[error("stored game is inconsistent: {0}")]
    Document(#[from] DocumentError),
    #[error("storage backend failed: {0}")]
    Backend(String),
}

impl StoreError {
    /// The stored bytes were read but cannot be a game. Anything else may be
    /// a transient failure or a newer format, and the snapshot is kept.
    pub fn is_corrupt(&self) -> bool {
        matches!(
            self,
            Self::Json(_) | Self::Format(_) | Self::ChecksumMismatch { .. } | Self::Document(_)
        )
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Move(#[from] MoveError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl SessionError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Move(err) => err.kind(),
            Self::Store(_) => "storage",
        }
    }
}
