//! Seasons, season types and season ranges.
//!
//! A season is identified by the calendar year it starts in (`2010`) and labelled the way
//! the stats API labels it (`"2010-11"`). Which season types exist for a year changed when
//! the play-in tournament was introduced, see [`SeasonType::eligible_for`].

use std::{fmt, ops::RangeInclusive, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// First season (by start year) that has a play-in tournament.
pub const PLAYIN_FIRST_YEAR: i32 = 2019;

const PRE_PLAYIN: [SeasonType; 2] = [SeasonType::RegularSeason, SeasonType::Playoffs];
const WITH_PLAYIN: [SeasonType; 3] = [
    SeasonType::RegularSeason,
    SeasonType::PlayIn,
    SeasonType::Playoffs,
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeasonError {
    #[error("unknown season type: {0}")]
    UnknownSeasonType(String),

    #[error("invalid season label: {0}")]
    InvalidLabel(String),
}

/// Category of games within a season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeasonType {
    #[serde(rename = "Regular Season")]
    RegularSeason,
    #[serde(rename = "PlayIn")]
    PlayIn,
    #[serde(rename = "Playoffs")]
    Playoffs,
}

impl SeasonType {
    /// Label used by the stats API (`SeasonType` query parameter).
    pub const fn as_str(&self) -> &'static str {
        match self {
            SeasonType::RegularSeason => "Regular Season",
            SeasonType::PlayIn => "PlayIn",
            SeasonType::Playoffs => "Playoffs",
        }
    }

    /// Season types to ingest for the season starting in `year`, in fetch order.
    pub fn eligible_for(year: i32) -> &'static [SeasonType] {
        if year >= PLAYIN_FIRST_YEAR {
            &WITH_PLAYIN
        } else {
            &PRE_PLAYIN
        }
    }
}

impl fmt::Display for SeasonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeasonType {
    type Err = SeasonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Regular Season" => Ok(SeasonType::RegularSeason),
            "PlayIn" | "Play-In" => Ok(SeasonType::PlayIn),
            "Playoffs" => Ok(SeasonType::Playoffs),
            other => Err(SeasonError::UnknownSeasonType(other.to_string())),
        }
    }
}

/// `2010` -> `"2010-11"`, `1999` -> `"1999-00"`.
pub fn season_label(year: i32) -> String {
    format!("{}-{:02}", year, (year + 1).rem_euclid(100))
}

/// Inverse of [`season_label`]. Accepts a bare start year (`"2010"`) as well.
pub fn parse_season_label(label: &str) -> Result<i32, SeasonError> {
    let invalid = || SeasonError::InvalidLabel(label.to_string());
    let label = label.trim();

    let (year_part, suffix) = match label.split_once('-') {
        Some((y, s)) => (y, Some(s)),
        None => (label, None),
    };
    if year_part.len() != 4 {
        return Err(invalid());
    }
    let year: i32 = year_part.parse().map_err(|_| invalid())?;

    if let Some(suffix) = suffix {
        if season_label(year) != format!("{year_part}-{suffix}") {
            return Err(invalid());
        }
    }
    Ok(year)
}

/// Inclusive range of season start years.
///
/// A range whose start is after its end is empty, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonRange {
    pub start: i32,
    pub end: i32,
}

impl SeasonRange {
    pub const fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    pub fn years(&self) -> RangeInclusive<i32> {
        self.start..=self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Number of (year, season type) fetches an ingest of this range issues.
    pub fn fetch_count(&self) -> usize {
        self.years().map(|y| SeasonType::eligible_for(y).len()).sum()
    }
}

impl fmt::Display for SeasonRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", season_label(self.start), season_label(self.end))
    }
}
