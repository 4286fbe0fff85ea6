//! Canonical in-memory representation of a player's game.
//!
//! [`GameLogRecord`] is what the dashboard works with. [`GameLogEntry`] is what a
//! [`GameLogProvider`](crate::providers::GameLogProvider) returns: the record plus the
//! context columns the store keeps alongside it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::season::SeasonType;

/// Upper bound on a single game's points accepted anywhere in the pipeline.
///
/// Well above any real box score (the record is 100); keeps histogram edge counts
/// small and the value inside the store's `INTEGER` column.
pub const MAX_GAME_POINTS: u32 = 250;

/// One row per player per game.
///
/// (player name, game date) is unique within a season type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameLogRecord {
    /// Season label, e.g. `"2010-11"`.
    pub season: String,

    /// Player display name as returned by the stats API.
    pub player_name: String,

    /// Calendar date of the game.
    pub game_date: NaiveDate,

    /// Points scored.
    pub points: u32,
}

/// A fetched game-log row: the core record and where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameLogEntry {
    pub record: GameLogRecord,

    /// Season type the row was fetched under.
    pub season_type: SeasonType,

    /// Stats API player id. Zero when the column was absent.
    pub player_id: i64,

    pub team_abbreviation: String,
    pub game_id: String,

    /// e.g. `"LAL vs. BOS"` or `"LAL @ BOS"`.
    pub matchup: String,
}

impl GameLogEntry {
    /// An entry with empty context columns.
    pub fn bare(record: GameLogRecord, season_type: SeasonType) -> Self {
        Self {
            record,
            season_type,
            player_id: 0,
            team_abbreviation: String::new(),
            game_id: String::new(),
            matchup: String::new(),
        }
    }
}
