#![allow(dead_code)]

use chrono::NaiveDate;
use diesel::QueryableByName;
use diesel::prelude::*;
use diesel::sql_types::{Integer, Text};
use gamelog_ingestor::models::{
    game_log::{GameLogEntry, GameLogRecord},
    season::SeasonType,
};
use gamelog_store::db::{connection, migrate};
use std::path::PathBuf;
use tempfile::TempDir;

#[derive(QueryableByName)]
struct JournalMode {
    #[diesel(sql_type = Text)]
    journal_mode: String,
}
#[derive(QueryableByName)]
struct ForeignKeys {
    #[diesel(sql_type = Integer)]
    foreign_keys: i32,
}
#[derive(QueryableByName)]
struct BusyTimeout {
    #[diesel(sql_type = Integer, column_name = "timeout")]
    busy_timeout: i32,
}

pub struct TestDb {
    _dir: TempDir,        // keep alive for the life of the test
    pub path: String,     // <tmpdir>/test.db
    pub file: PathBuf,
}

pub fn setup_db() -> (TestDb, SqliteConnection) {
    let dir = TempDir::new().expect("tempdir");
    let file = dir.path().join("test.db");
    let path = file.to_string_lossy().to_string();

    migrate::run_sqlite(&path).expect("migrations");

    let conn = connection::connect_sqlite(&path).expect("connect");
    (TestDb { _dir: dir, path, file }, conn)
}

pub fn assert_sqlite_pragmas(conn: &mut SqliteConnection) {
    use diesel::sql_query;

    let jm: JournalMode = sql_query("PRAGMA journal_mode;").get_result(conn).unwrap();
    assert_eq!(jm.journal_mode.to_lowercase(), "wal"); // WAL is persistent per DB file

    let fk: ForeignKeys = sql_query("PRAGMA foreign_keys;").get_result(conn).unwrap();
    assert_eq!(fk.foreign_keys, 1);

    let bt: BusyTimeout = sql_query("PRAGMA busy_timeout;").get_result(conn).unwrap();
    assert_eq!(bt.busy_timeout, 5000);
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn entry(season: &str, kind: SeasonType, player: &str, game_date: NaiveDate, points: u32) -> GameLogEntry {
    GameLogEntry {
        record: GameLogRecord {
            season: season.to_string(),
            player_name: player.to_string(),
            game_date,
            points,
        },
        season_type: kind,
        player_id: 0,
        team_abbreviation: "LAL".to_string(),
        game_id: format!("{}{}", game_date.format("%Y%m%d"), points),
        matchup: "LAL vs. BOS".to_string(),
    }
}

/// Two seasons straddling the default cutoff.
pub fn sample_entries() -> Vec<GameLogEntry> {
    vec![
        entry("2009-10", SeasonType::RegularSeason, "Kobe Bryant", date(2009, 10, 27), 33),
        entry("2010-11", SeasonType::RegularSeason, "Kobe Bryant", date(2010, 10, 26), 27),
        entry("2010-11", SeasonType::RegularSeason, "Pau Gasol", date(2010, 10, 26), 29),
        entry("2010-11", SeasonType::Playoffs, "Kobe Bryant", date(2011, 4, 17), 34),
    ]
}
