//! Typed failures of the store that callers may want to match on.

use std::path::PathBuf;

use gamelog_ingestor::models::game_log::MAX_GAME_POINTS;

use thiserror::Error;

/// Domain-level failures of the game-log store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The reader was pointed at a path with no database file.
    #[error("database {0} does not exist; run gamelog-ingest first")]
    MissingDatabase(PathBuf),

    /// A stored `game_date` is not a calendar date.
    #[error("row {row_index}: unparseable game_date {value:?}")]
    BadDate {
        /// Offending row.
        row_index: i64,
        /// Raw column text.
        value: String,
    },

    /// A stored `pts` value is negative or above [`MAX_GAME_POINTS`].
    #[error("row {row_index}: points {value} outside 0..={}", MAX_GAME_POINTS)]
    BadPoints {
        /// Offending row.
        row_index: i64,
        /// Stored value.
        value: i32,
    },

    /// A fetched points value is above [`MAX_GAME_POINTS`].
    #[error("points value {0} is above {max}", max = MAX_GAME_POINTS)]
    PointsOutOfRange(u32),
}
