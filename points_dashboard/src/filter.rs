//! Season and player/date-range selection.
//!
//! Every filter borrows from its input and preserves input order.

use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use gamelog_ingestor::models::{
    game_log::GameLogRecord,
    season::{parse_season_label, season_label},
};

use crate::error::DashboardError;

/// Label of the "every season" choice.
pub const ALL_SEASONS: &str = "All Seasons";

/// A season choice: one label or every loaded season.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SeasonSelection {
    All,
    Season(String),
}

impl SeasonSelection {
    pub fn matches(&self, season: &str) -> bool {
        match self {
            SeasonSelection::All => true,
            SeasonSelection::Season(s) => s == season,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            SeasonSelection::All => ALL_SEASONS,
            SeasonSelection::Season(s) => s,
        }
    }
}

impl fmt::Display for SeasonSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts "All Seasons" (any case), a label ("2015-16") or a start year ("2015").
impl FromStr for SeasonSelection {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case(ALL_SEASONS) {
            return Ok(SeasonSelection::All);
        }
        parse_season_label(s)
            .map(|year| SeasonSelection::Season(season_label(year)))
            .map_err(|_| DashboardError::BadSeasonLabel(s.to_string()))
    }
}

/// Player, season and inclusive date range for one compared series.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilterSpec {
    pub player: String,
    pub season: SeasonSelection,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl FilterSpec {
    pub fn matches(&self, r: &GameLogRecord) -> bool {
        r.player_name == self.player
            && self.season.matches(&r.season)
            && r.game_date >= self.start
            && r.game_date <= self.end
    }
}

pub fn filter_by_season<'a, I>(records: I, season: &SeasonSelection) -> Vec<&'a GameLogRecord>
where
    I: IntoIterator<Item = &'a GameLogRecord>,
{
    records.into_iter().filter(|r| season.matches(&r.season)).collect()
}

pub fn filter_by_player_and_range<'a, I>(records: I, spec: &FilterSpec) -> Vec<&'a GameLogRecord>
where
    I: IntoIterator<Item = &'a GameLogRecord>,
{
    records.into_iter().filter(|r| spec.matches(r)).collect()
}
