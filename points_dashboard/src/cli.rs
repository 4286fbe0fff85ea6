//! `points-dashboard` command line.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;
use gamelog_ingestor::models::season::{parse_season_label, season_label};
use gamelog_store::gamelogs::DEFAULT_CUTOFF;

use crate::{
    error::DashboardError,
    filter::SeasonSelection,
    histogram::{BinWidth, DEFAULT_BIN_WIDTH, MAX_BIN_WIDTH, MIN_BIN_WIDTH},
    view::{DEFAULT_THRESHOLD, Dashboard, DashboardRequest},
};

/// Player name that means "no second player".
pub const NO_PLAYER: &str = "None";

/// Compare two players' scoring distributions from the local game-log database.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct DashboardArgs {
    /// SQLite database file (default: $NBA_PLAYER_DB or ./nba_player.db)
    #[arg(long)]
    pub database: Option<PathBuf>,

    /// Oldest season to load
    #[arg(long, default_value = DEFAULT_CUTOFF, value_parser = parse_cutoff)]
    pub since: String,

    /// Season label, start year, or "All Seasons" (default: latest season)
    #[arg(long)]
    pub season: Option<SeasonSelection>,

    /// First player (default: highest average in the season)
    #[arg(long)]
    pub player_one: Option<String>,

    /// Second player, or "None" (default: second highest average)
    #[arg(long)]
    pub player_two: Option<String>,

    /// First game date, YYYY-MM-DD (default: season's first game)
    #[arg(long)]
    pub start: Option<NaiveDate>,

    /// Last game date, YYYY-MM-DD (default: today)
    #[arg(long)]
    pub end: Option<NaiveDate>,

    /// Histogram bin width in points
    #[arg(
        long,
        default_value_t = DEFAULT_BIN_WIDTH,
        value_parser = clap::value_parser!(u32).range(i64::from(MIN_BIN_WIDTH)..=i64::from(MAX_BIN_WIDTH))
    )]
    pub bin_width: u32,

    /// Points threshold for the over/under counts
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: u32,

    /// Print the view as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// List the season's players ranked by average points and exit
    #[arg(long)]
    pub list_players: bool,
}

/// Normalizes `--since` to a season label ("2010" -> "2010-11").
pub fn parse_cutoff(s: &str) -> Result<String, String> {
    parse_season_label(s)
        .map(season_label)
        .map_err(|e| e.to_string())
}

impl DashboardArgs {
    pub fn season_or_default(&self, dash: &Dashboard) -> SeasonSelection {
        self.season.clone().unwrap_or_else(|| dash.default_season())
    }

    /// Fill every unset flag from the data.
    ///
    /// `None` when the selected season has no players to compare.
    pub fn to_request(
        &self,
        dash: &Dashboard,
        today: NaiveDate,
    ) -> Result<Option<DashboardRequest>, DashboardError> {
        let season = self.season_or_default(dash);
        let (first, second) = dash.default_players(&season)?;

        let player_one = match self.player_one.clone().or(first) {
            Some(p) => p,
            None => return Ok(None),
        };
        let player_two = match self.player_two.as_deref() {
            Some(p) if p.eq_ignore_ascii_case(NO_PLAYER) => None,
            Some(p) => Some(p.to_string()),
            None => second,
        };

        let (default_start, default_end) = dash.default_date_range(&season, today)?;

        Ok(Some(DashboardRequest {
            season,
            player_one,
            player_two,
            start: self.start.unwrap_or(default_start),
            end: self.end.unwrap_or(default_end),
            bin_width: BinWidth::new(self.bin_width)?,
            threshold: self.threshold,
        }))
    }
}
