//! Game-log repository (SQLite).
use gamelog_ingestor::models::game_log::{GameLogEntry, GameLogRecord};

pub mod repo;

pub use repo::SqliteRepo;

/// Season label of the oldest season the dashboard loads by default.
pub const DEFAULT_CUTOFF: &str = "2010-11";

/// The dataset handed to the dashboard, in stored row order.
pub type GameLogs = Vec<GameLogRecord>;

/// Result type used throughout the game-log repository for fallible operations.
pub type RepoResult<T> = anyhow::Result<T>;

/// How a write treats rows already in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Delete every existing row, then insert.
    #[default]
    Replace,
    /// Keep existing rows; new rows continue the row index.
    Append,
}

/// Portable surface, SQLite implementation lives in `repo.rs`.
pub trait GameLogRepo {
    /// Writes `entries` in one transaction and returns the number of rows inserted.
    fn write(
        &self,
        conn: &mut diesel::SqliteConnection,
        entries: &[GameLogEntry],
        mode: WriteMode,
    ) -> RepoResult<usize>;

    /// Loads season, player, date and points for rows with `season_year >= cutoff`,
    /// ordered by row index.
    fn load_since(&self, conn: &mut diesel::SqliteConnection, cutoff: &str) -> RepoResult<GameLogs>;

    /// Number of stored rows.
    fn count(&self, conn: &mut diesel::SqliteConnection) -> RepoResult<i64>;
}
