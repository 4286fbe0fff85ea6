//! Tabular payload returned by the stats API and its projection onto [`GameLogEntry`].
//!
//! The API answers with one or more named result sets, each a header row plus a
//! row set of positional JSON values:
//!
//! ```json
//! {"resultSets": [{"name": "PlayerGameLogs",
//!                  "headers": ["SEASON_YEAR", "PLAYER_NAME", "GAME_DATE", "PTS"],
//!                  "rowSet": [["2010-11", "Kobe Bryant", "2010-10-26T00:00:00", 27]]}]}
//! ```

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::{
    models::{
        game_log::{GameLogEntry, GameLogRecord},
        season::SeasonType,
    },
    providers::{ProviderError, SchemaSnafu},
};

#[derive(Deserialize, Debug)]
pub struct StatsResponse {
    #[serde(rename = "resultSets")]
    pub result_sets: Vec<ResultSet>,
}

#[derive(Deserialize, Debug)]
pub struct ResultSet {
    #[serde(default)]
    pub name: String,
    pub headers: Vec<String>,
    #[serde(rename = "rowSet")]
    pub row_set: Vec<Vec<Value>>,
}

const SEASON_YEAR: &str = "SEASON_YEAR";
const PLAYER_NAME: &str = "PLAYER_NAME";
const GAME_DATE: &str = "GAME_DATE";
const PTS: &str = "PTS";
const PLAYER_ID: &str = "PLAYER_ID";
const TEAM_ABBREVIATION: &str = "TEAM_ABBREVIATION";
const GAME_ID: &str = "GAME_ID";
const MATCHUP: &str = "MATCHUP";

fn schema_err<T>(message: String) -> Result<T, ProviderError> {
    SchemaSnafu { message }.fail()
}

struct Columns {
    index: IndexMap<String, usize>,
}

impl Columns {
    fn new(headers: &[String]) -> Self {
        let index = headers
            .iter()
            .enumerate()
            .map(|(i, h)| (h.to_ascii_uppercase(), i))
            .collect();
        Self { index }
    }

    fn require(&self, name: &str) -> Result<usize, ProviderError> {
        match self.index.get(name) {
            Some(i) => Ok(*i),
            None => schema_err(format!("missing column {name}")),
        }
    }

    fn optional(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }
}

fn cell<'a>(
    row: &'a [Value],
    idx: usize,
    row_no: usize,
    col: &str,
) -> Result<&'a Value, ProviderError> {
    match row.get(idx) {
        Some(v) => Ok(v),
        None => schema_err(format!("row {row_no}: no value for {col}")),
    }
}

fn as_text(v: &Value, row_no: usize, col: &str) -> Result<String, ProviderError> {
    match v {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        other => schema_err(format!("row {row_no}: {col} is not text: {other}")),
    }
}

fn as_points(v: &Value, row_no: usize) -> Result<u32, ProviderError> {
    // The API sometimes serializes counting stats as floats (`27.0`).
    let n = v
        .as_u64()
        .or_else(|| v.as_f64().filter(|f| *f >= 0.0 && f.fract() == 0.0).map(|f| f as u64));
    match n.and_then(|n| u32::try_from(n).ok()) {
        Some(p) => Ok(p),
        None => schema_err(format!("row {row_no}: {PTS} is not a non-negative integer: {v}")),
    }
}

/// Accepts `2010-10-26T00:00:00` and `2010-10-26`.
pub fn parse_game_date(raw: &str) -> Option<NaiveDate> {
    let day = raw.trim().get(..10)?;
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

impl StatsResponse {
    /// Projects the first result set onto entries, preserving row order.
    pub fn into_entries(self, season_type: SeasonType) -> Result<Vec<GameLogEntry>, ProviderError> {
        let Some(set) = self.result_sets.into_iter().next() else {
            return schema_err("response has no result sets".to_string());
        };

        let cols = Columns::new(&set.headers);
        let season_i = cols.require(SEASON_YEAR)?;
        let player_i = cols.require(PLAYER_NAME)?;
        let date_i = cols.require(GAME_DATE)?;
        let pts_i = cols.require(PTS)?;
        let player_id_i = cols.optional(PLAYER_ID);
        let team_i = cols.optional(TEAM_ABBREVIATION);
        let game_i = cols.optional(GAME_ID);
        let matchup_i = cols.optional(MATCHUP);

        let mut out = Vec::with_capacity(set.row_set.len());
        for (row_no, row) in set.row_set.iter().enumerate() {
            let raw_date = as_text(cell(row, date_i, row_no, GAME_DATE)?, row_no, GAME_DATE)?;
            let Some(game_date) = parse_game_date(&raw_date) else {
                return schema_err(format!("row {row_no}: unparseable {GAME_DATE} {raw_date:?}"));
            };

            let record = GameLogRecord {
                season: as_text(cell(row, season_i, row_no, SEASON_YEAR)?, row_no, SEASON_YEAR)?,
                player_name: as_text(cell(row, player_i, row_no, PLAYER_NAME)?, row_no, PLAYER_NAME)?,
                game_date,
                points: as_points(cell(row, pts_i, row_no, PTS)?, row_no)?,
            };

            let text_or_empty = |idx: Option<usize>, col: &str| -> Result<String, ProviderError> {
                match idx.and_then(|i| row.get(i)) {
                    None | Some(Value::Null) => Ok(String::new()),
                    Some(v) => as_text(v, row_no, col),
                }
            };

            out.push(GameLogEntry {
                record,
                season_type,
                player_id: player_id_i
                    .and_then(|i| row.get(i))
                    .and_then(Value::as_i64)
                    .unwrap_or(0),
                team_abbreviation: text_or_empty(team_i, TEAM_ABBREVIATION)?,
                game_id: text_or_empty(game_i, GAME_ID)?,
                matchup: text_or_empty(matchup_i, MATCHUP)?,
            });
        }

        Ok(out)
    }
}
