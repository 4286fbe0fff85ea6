//! Location of the local game-log database.
//!
//! Resolution order: explicit path (CLI flag) -> `NBA_PLAYER_DB` -> `./nba_player.db`.

use std::path::{Path, PathBuf};

use crate::env::env_var_opt;

/// Environment variable that overrides the database location.
pub const DB_PATH_ENV: &str = "NBA_PLAYER_DB";

/// File name used when nothing else is configured, relative to the working directory.
pub const DEFAULT_DB_FILE: &str = "nba_player.db";

/// Resolve the database path from an optional explicit value.
pub fn resolve_db_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }
    match env_var_opt(DB_PATH_ENV) {
        Some(p) => PathBuf::from(p),
        None => PathBuf::from(DEFAULT_DB_FILE),
    }
}
