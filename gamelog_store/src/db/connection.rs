//! SQLite connection helpers.
//!
//! Provides [`connect_sqlite`] that opens a connection and applies the PRAGMAs every
//! connection to the game-log file uses: WAL journaling, foreign_keys=ON, and a 5000ms
//! busy_timeout (the dashboard may read while an ingest is finishing its write).
//! [`connect_existing`] is the read-only variant used by the dashboard.

use std::path::Path;

use diesel::{Connection, RunQueryDsl, SqliteConnection, sql_query};

use crate::errors::StoreError;

/// Open a SQLite connection and apply connection-wide PRAGMAs.
pub fn connect_sqlite(database_url: &str) -> anyhow::Result<SqliteConnection> {
    let mut conn = SqliteConnection::establish(database_url)?;

    sql_query("PRAGMA journal_mode=WAL;").execute(&mut conn)?;
    sql_query("PRAGMA foreign_keys=ON;").execute(&mut conn)?;
    sql_query("PRAGMA busy_timeout=5000;").execute(&mut conn)?;
    Ok(conn)
}

/// Open an existing database read-only.
///
/// Used by readers: a missing path is an error instead of a new empty file, and no
/// PRAGMA that writes (such as `journal_mode`) is issued, so the file is left as the
/// writer made it.
pub fn connect_existing(path: &Path) -> anyhow::Result<SqliteConnection> {
    if !path.is_file() {
        return Err(StoreError::MissingDatabase(path.to_path_buf()).into());
    }
    let mut conn = SqliteConnection::establish(&read_only_uri(path))?;
    sql_query("PRAGMA busy_timeout=5000;").execute(&mut conn)?;
    Ok(conn)
}

/// `file:` URI opening `path` with `mode=ro`.
fn read_only_uri(path: &Path) -> String {
    let escaped = path
        .to_string_lossy()
        .replace('%', "%25")
        .replace('?', "%3f")
        .replace('#', "%23");
    format!("file:{escaped}?mode=ro")
}
