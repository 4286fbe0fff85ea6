//! Text encoding of game dates in the `game_date` column.
//!
//! Dates are written as `YYYY-MM-DD`. Reading also accepts the stats API's
//! `YYYY-MM-DDT00:00:00` form, which is what a table written straight from the API
//! payload contains.

use chrono::NaiveDate;

/// Column text for `d`.
pub fn date_to_db(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

/// Parse column text; `None` when it is not a date.
pub fn date_from_db(s: &str) -> Option<NaiveDate> {
    gamelog_ingestor::providers::nba_stats::response::parse_game_date(s)
}
