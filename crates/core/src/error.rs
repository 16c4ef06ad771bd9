//! Error types for generator configuration and level decoding.

use thiserror::Error;

/// Rejected generator configuration. Raised before any randomness is consumed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("map must be at least 10x10 tiles, got {width}x{height}")]
    GridTooSmall { width: usize, height: usize },

    #[error("min_room_size must be at least 2, got {min_room_size}")]
    MinRoomSizeTooSmall { min_room_size: usize },

    #[error("max_room_size {max_room_size} is too large for the map (limit {limit})")]
    MaxRoomSizeTooLarge { max_room_size: usize, limit: usize },

    #[error("min_room_size {min_room_size} must not exceed max_room_size {max_room_size}")]
    InvertedRoomSizeBounds { min_room_size: usize, max_room_size: usize },
}

/// Why a serialized level could not be turned back into a [`Level`](crate::Level).
#[derive(Error, Debug)]
pub enum LevelDecodeError {
    #[error("level JSON is malformed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("tile map has {actual} rows, expected {expected}")]
    RowCount { expected: usize, actual: usize },

    #[error("tile row {row} has {actual} columns, expected {expected}")]
    RowWidth { row: usize, expected: usize, actual: usize },

    #[error("unknown tile symbol {symbol:?} at row {row}, column {column}")]
    UnknownTile { symbol: char, row: usize, column: usize },
}
