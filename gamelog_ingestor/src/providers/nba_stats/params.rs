use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::models::request_params::GameLogRequest;

pub const DEFAULT_BASE_URL: &str = "https://stats.nba.com/stats";

/// NBA league id; the endpoint also serves WNBA and G League data.
pub const NBA_LEAGUE_ID: &str = "00";

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/120.0 Safari/537.36";

/// Connection settings for [`NbaStatsProvider`](super::NbaStatsProvider).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderSettings {
    /// Base URL without trailing slash; the endpoint path is appended.
    pub base_url: String,
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl ProviderSettings {
    pub fn endpoint(&self) -> String {
        format!("{}/playergamelogs", self.base_url.trim_end_matches('/'))
    }
}

/// Query parameters for one request.
pub fn construct_params(request: &GameLogRequest) -> Vec<(&'static str, String)> {
    vec![
        ("LeagueID", NBA_LEAGUE_ID.to_string()),
        ("Season", request.season.clone()),
        ("SeasonType", request.season_type.as_str().to_string()),
    ]
}
