//! SQLite persistence for NBA player game logs.
//!
//! The ingest job writes through [`sink::SqliteSink`]; the dashboard reads once with
//! [`load_game_logs`] and keeps the result in memory.

#![deny(missing_docs)]

pub mod dates;
pub mod db;
pub mod errors;
pub mod gamelogs;
pub mod models;
#[allow(missing_docs)]
pub mod schema;
pub mod sink;

use std::path::Path;

use tracing::info;

use crate::gamelogs::{GameLogRepo, GameLogs, SqliteRepo};

/// Open an existing database at `path` and load every record from `cutoff` onwards.
///
/// Fails with [`errors::StoreError::MissingDatabase`] instead of creating an empty file.
pub fn load_game_logs(path: &Path, cutoff: &str) -> anyhow::Result<GameLogs> {
    let mut conn = db::connection::connect_existing(path)?;
    let logs = SqliteRepo::new().load_since(&mut conn, cutoff)?;
    info!(path = %path.display(), cutoff, rows = logs.len(), "loaded game logs");
    Ok(logs)
}
