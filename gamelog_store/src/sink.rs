//! [`DataSink`] that writes an ingest run into the SQLite game-log table.

use std::path::PathBuf;

use async_trait::async_trait;
use gamelog_ingestor::{
    io::sink::{ConversionSnafu, DataSink, SinkError, WriteSnafu},
    models::game_log::GameLogEntry,
};
use tokio::task;

use crate::{
    db::connection::connect_sqlite,
    gamelogs::{GameLogRepo, SqliteRepo, WriteMode},
    models::NewGameLogRow,
};

/// Writes each ingest run to the database file at `path`.
pub struct SqliteSink {
    path: PathBuf,
    mode: WriteMode,
}

impl SqliteSink {
    /// The database at `path` must already be migrated.
    pub fn new(path: impl Into<PathBuf>, mode: WriteMode) -> Self {
        Self {
            path: path.into(),
            mode,
        }
    }
}

#[async_trait]
impl DataSink for SqliteSink {
    /// Rows inserted.
    type Output = usize;

    async fn write(&self, data: &[GameLogEntry]) -> Result<usize, SinkError> {
        // Reject rows the table cannot hold before touching the database.
        for (i, entry) in data.iter().enumerate() {
            if let Err(e) = NewGameLogRow::from_entry(i as i64, entry) {
                return ConversionSnafu {
                    message: format!(
                        "entry {i} ({}, {}): {e}",
                        entry.record.player_name, entry.record.game_date
                    ),
                }
                .fail();
            }
        }

        let path = self.path.to_string_lossy().into_owned();
        let mode = self.mode;
        let entries = data.to_vec();

        // diesel is blocking; keep it off the runtime workers.
        let outcome = task::spawn_blocking(move || -> anyhow::Result<usize> {
            let mut conn = connect_sqlite(&path)?;
            SqliteRepo::new().write(&mut conn, &entries, mode)
        })
        .await;

        match outcome {
            Ok(Ok(n)) => Ok(n),
            Ok(Err(e)) => WriteSnafu {
                message: format!("{e:#}"),
            }
            .fail(),
            Err(join) => WriteSnafu {
                message: join.to_string(),
            }
            .fail(),
        }
    }
}
