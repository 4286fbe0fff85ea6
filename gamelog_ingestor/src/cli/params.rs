use crate::{
    config::{ConfigError, IngestConfig},
    models::season::parse_season_label,
};

use super::commands::IngestArgs;

/// clap value parser for `--start` / `--end`.
pub fn parse_season_year(s: &str) -> Result<i32, String> {
    parse_season_label(s).map_err(|e| e.to_string())
}

/// Layer command-line flags over a loaded (or default) config.
pub fn apply_overrides(args: &IngestArgs, mut cfg: IngestConfig) -> Result<IngestConfig, ConfigError> {
    if let Some(start) = args.start {
        cfg.start_season = start;
    }
    if let Some(end) = args.end {
        cfg.end_season = end;
    }
    if let Some(pause) = args.pause_secs {
        cfg.pause_secs = pause;
    }
    if let Some(db) = &args.database {
        cfg.database = Some(db.clone());
    }
    cfg.validate()?;
    Ok(cfg)
}
