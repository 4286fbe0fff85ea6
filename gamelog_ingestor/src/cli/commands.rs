use std::path::PathBuf;

use clap::Parser;

use crate::cli::params::parse_season_year;

/// Fetch NBA player game logs for a range of seasons and store them in SQLite.
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about)]
pub struct IngestArgs {
    /// Path to the config file (gamelog_ingest.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// First season, as a start year ("2010") or label ("2010-11")
    #[arg(long, value_parser = parse_season_year)]
    pub start: Option<i32>,

    /// Last season (inclusive), same formats as --start
    #[arg(long, value_parser = parse_season_year)]
    pub end: Option<i32>,

    /// SQLite database file (default: $NBA_PLAYER_DB or ./nba_player.db)
    #[arg(long)]
    pub database: Option<PathBuf>,

    /// Append to the existing table instead of replacing it
    #[arg(long)]
    pub append: bool,

    /// Seconds to wait between seasons
    #[arg(long)]
    pub pause_secs: Option<u64>,
}
