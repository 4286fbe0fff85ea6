//! Diesel implementation of [`GameLogRepo`](super::GameLogRepo).

use anyhow::Context;
use diesel::{dsl::max, prelude::*};
use gamelog_ingestor::models::game_log::{GameLogEntry, GameLogRecord};
use tracing::debug;

use crate::{
    gamelogs::{GameLogRepo, GameLogs, RepoResult, WriteMode},
    models::{NewGameLogRow, RecordProjection},
    schema::player_gamelogs,
};

use crate::schema::player_gamelogs::dsl as pg;

/// SQLite caps bound parameters per statement (32766 on current builds, 999 on old
/// ones). Ten columns per row keeps each batch under the low limit.
const INSERT_CHUNK: usize = 90;

/// Repository for game-log rows in a SQLite database.
#[derive(Debug, Default, Clone, Copy)]
pub struct SqliteRepo;

impl SqliteRepo {
    /// Stateless; every call takes the connection to use.
    pub fn new() -> Self {
        Self
    }
}

fn next_row_index(conn: &mut SqliteConnection) -> QueryResult<i64> {
    let current: Option<i64> = pg::player_gamelogs.select(max(pg::row_index)).first(conn)?;
    Ok(current.map_or(0, |m| m + 1))
}

impl GameLogRepo for SqliteRepo {
    fn write(
        &self,
        conn: &mut SqliteConnection,
        entries: &[GameLogEntry],
        mode: WriteMode,
    ) -> RepoResult<usize> {
        conn.immediate_transaction(|conn| {
            let first_index = match mode {
                WriteMode::Replace => {
                    let removed = diesel::delete(pg::player_gamelogs).execute(conn)?;
                    debug!(removed, "cleared player_gamelogs");
                    0
                }
                WriteMode::Append => next_row_index(conn)?,
            };

            let rows = entries
                .iter()
                .zip(first_index..)
                .map(|(entry, idx)| NewGameLogRow::from_entry(idx, entry))
                .collect::<Result<Vec<_>, _>>()?;

            let mut inserted = 0;
            for chunk in rows.chunks(INSERT_CHUNK) {
                inserted += diesel::insert_into(player_gamelogs::table)
                    .values(chunk)
                    .execute(conn)
                    .context("insert player_gamelogs chunk")?;
            }
            debug!(inserted, first_index, ?mode, "wrote player_gamelogs");
            Ok(inserted)
        })
    }

    fn load_since(&self, conn: &mut SqliteConnection, cutoff: &str) -> RepoResult<GameLogs> {
        let rows: Vec<RecordProjection> = pg::player_gamelogs
            .filter(pg::season_year.ge(cutoff))
            .order(pg::row_index.asc())
            .select(RecordProjection::as_select())
            .load(conn)
            .context("load player_gamelogs")?;

        rows.into_iter()
            .map(|row| GameLogRecord::try_from(row).map_err(Into::into))
            .collect()
    }

    fn count(&self, conn: &mut SqliteConnection) -> RepoResult<i64> {
        Ok(pg::player_gamelogs.count().get_result(conn)?)
    }
}
