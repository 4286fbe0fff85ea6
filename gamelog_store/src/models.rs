//! Diesel models mapping to the database schema.
//!
//! These types mirror [`crate::schema::player_gamelogs`]:
//! - [`GameLogRow`]: a full stored row.
//! - [`NewGameLogRow`]: insertable form built from a fetched [`GameLogEntry`].
//! - [`RecordProjection`]: the four columns the dashboard reads.

use diesel::prelude::*;
use gamelog_ingestor::models::game_log::{GameLogEntry, GameLogRecord, MAX_GAME_POINTS};

use crate::{
    dates::{date_from_db, date_to_db},
    errors::StoreError,
    schema::player_gamelogs,
};

/// A row in [`crate::schema::player_gamelogs`].
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = player_gamelogs, check_for_backend(diesel::sqlite::Sqlite))]
pub struct GameLogRow {
    /// Ingest-time position of the row.
    pub row_index: i64,
    /// Season label (e.g., "2010-11").
    pub season_year: String,
    /// "Regular Season" | "PlayIn" | "Playoffs".
    pub season_type: String,
    /// Stats API player id; 0 when unknown.
    pub player_id: i64,
    /// Player display name.
    pub player_name: String,
    /// Team abbreviation (e.g., "LAL").
    pub team_abbreviation: String,
    /// Stats API game id.
    pub game_id: String,
    /// `YYYY-MM-DD`.
    pub game_date: String,
    /// e.g., "LAL vs. BOS".
    pub matchup: String,
    /// Points scored.
    pub pts: i32,
}

/// Insertable form of [`GameLogRow`].
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = player_gamelogs)]
pub struct NewGameLogRow<'a> {
    /// Ingest-time position of the row.
    pub row_index: i64,
    /// Season label.
    pub season_year: &'a str,
    /// Season type wire label.
    pub season_type: &'static str,
    /// Stats API player id.
    pub player_id: i64,
    /// Player display name.
    pub player_name: &'a str,
    /// Team abbreviation.
    pub team_abbreviation: &'a str,
    /// Stats API game id.
    pub game_id: &'a str,
    /// `YYYY-MM-DD`.
    pub game_date: String,
    /// Matchup text.
    pub matchup: &'a str,
    /// Points scored.
    pub pts: i32,
}

impl<'a> NewGameLogRow<'a> {
    /// Build the insertable row for `entry` at position `row_index`.
    pub fn from_entry(row_index: i64, entry: &'a GameLogEntry) -> Result<Self, StoreError> {
        let rec = &entry.record;
        if rec.points > MAX_GAME_POINTS {
            return Err(StoreError::PointsOutOfRange(rec.points));
        }
        let pts = i32::try_from(rec.points).map_err(|_| StoreError::PointsOutOfRange(rec.points))?;
        Ok(Self {
            row_index,
            season_year: &rec.season,
            season_type: entry.season_type.as_str(),
            player_id: entry.player_id,
            player_name: &rec.player_name,
            team_abbreviation: &entry.team_abbreviation,
            game_id: &entry.game_id,
            game_date: date_to_db(rec.game_date),
            matchup: &entry.matchup,
            pts,
        })
    }
}

/// The dashboard's projection: season label, player name, game date, points.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = player_gamelogs, check_for_backend(diesel::sqlite::Sqlite))]
pub struct RecordProjection {
    /// Ingest-time position of the row (kept for error messages).
    pub row_index: i64,
    /// Season label.
    pub season_year: String,
    /// Player display name.
    pub player_name: String,
    /// Stored date text.
    pub game_date: String,
    /// Points scored.
    pub pts: i32,
}

impl TryFrom<RecordProjection> for GameLogRecord {
    type Error = StoreError;

    fn try_from(row: RecordProjection) -> Result<Self, Self::Error> {
        let game_date = date_from_db(&row.game_date).ok_or_else(|| StoreError::BadDate {
            row_index: row.row_index,
            value: row.game_date.clone(),
        })?;
        let points = u32::try_from(row.pts)
            .ok()
            .filter(|p| *p <= MAX_GAME_POINTS)
            .ok_or(StoreError::BadPoints {
                row_index: row.row_index,
                value: row.pts,
            })?;
        Ok(GameLogRecord {
            season: row.season_year,
            player_name: row.player_name,
            game_date,
            points,
        })
    }
}
