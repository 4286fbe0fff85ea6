//! Ingest job configuration (`gamelog_ingest.toml`).
//!
//! Every key is optional; missing keys take the defaults
//! (seasons 2000-01 through 2023-24, two seconds between seasons). Unknown keys are
//! rejected so typos do not silently fall back to defaults.
//!
//! ```toml
//! start_season = 2015
//! end_season = 2023
//! pause_secs = 3
//! database = "data/nba_player.db"
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    models::season::SeasonRange,
    providers::nba_stats::{
        ProviderSettings,
        params::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT},
    },
};

/// First season the stats API has player game logs for.
pub const EARLIEST_SEASON: i32 = 1946;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IngestConfig {
    pub base_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
    pub pause_secs: u64,
    pub start_season: i32,
    pub end_season: i32,
    /// Database file; `None` defers to `NBA_PLAYER_DB` / `./nba_player.db`.
    pub database: Option<PathBuf>,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 30,
            pause_secs: 2,
            start_season: 2000,
            end_season: 2023,
            database: None,
        }
    }
}

impl IngestConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: IngestConfig = toml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let s = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&s)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("base_url is empty".into()));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid("timeout_secs must be > 0".into()));
        }
        // An inverted range is allowed (it ingests nothing); seasons before the
        // league existed are not.
        if self.start_season < EARLIEST_SEASON || self.end_season < EARLIEST_SEASON {
            return Err(ConfigError::Invalid(format!(
                "seasons must start in {EARLIEST_SEASON} or later"
            )));
        }
        Ok(())
    }

    pub fn season_range(&self) -> SeasonRange {
        SeasonRange::new(self.start_season, self.end_season)
    }

    pub fn pause(&self) -> Duration {
        Duration::from_secs(self.pause_secs)
    }

    pub fn provider_settings(&self) -> ProviderSettings {
        ProviderSettings {
            base_url: self.base_url.clone(),
            user_agent: self.user_agent.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}
