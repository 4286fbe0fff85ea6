use async_trait::async_trait;
use reqwest::{Client, header};
use snafu::ResultExt;
use tracing::debug;

use crate::{
    models::{game_log::GameLogEntry, request_params::GameLogRequest},
    providers::{
        ApiSnafu, ClientBuildSnafu, GameLogProvider, InvalidHeaderSnafu, ProviderError,
        ProviderInitError, ReqwestSnafu,
        nba_stats::{
            params::{ProviderSettings, construct_params},
            response::StatsResponse,
        },
    },
};

/// `stats.nba.com` rejects requests that do not look like they come from its own site.
const ORIGIN: &str = "https://www.nba.com";
const REFERER: &str = "https://www.nba.com/";

pub struct NbaStatsProvider {
    client: Client,
    endpoint: String,
}

impl NbaStatsProvider {
    /// Creates a provider against the public endpoint with default settings.
    pub fn new() -> Result<Self, ProviderInitError> {
        Self::with_settings(&ProviderSettings::default())
    }

    pub fn with_settings(settings: &ProviderSettings) -> Result<Self, ProviderInitError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_str(&settings.user_agent).context(InvalidHeaderSnafu {
                name: header::USER_AGENT.as_str(),
            })?,
        );
        headers.insert(header::ORIGIN, header::HeaderValue::from_static(ORIGIN));
        headers.insert(header::REFERER, header::HeaderValue::from_static(REFERER));
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json, text/plain, */*"),
        );
        headers.insert("x-nba-stats-origin", header::HeaderValue::from_static("stats"));
        headers.insert("x-nba-stats-token", header::HeaderValue::from_static("true"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(settings.timeout)
            .build()
            .context(ClientBuildSnafu)?;

        Ok(Self {
            client,
            endpoint: settings.endpoint(),
        })
    }
}

#[async_trait]
impl GameLogProvider for NbaStatsProvider {
    async fn fetch_game_logs(
        &self,
        request: GameLogRequest,
    ) -> Result<Vec<GameLogEntry>, ProviderError> {
        let query = construct_params(&request);
        debug!(endpoint = %self.endpoint, season = %request.season, season_type = %request.season_type, "requesting game logs");

        let response = self
            .client
            .get(&self.endpoint)
            .query(&query)
            .send()
            .await
            .context(ReqwestSnafu)?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown API error".to_string());
            return ApiSnafu {
                status: status.as_u16(),
                message,
            }
            .fail();
        }

        let payload = response
            .json::<StatsResponse>()
            .await
            .context(ReqwestSnafu)?;

        payload.into_entries(request.season_type)
    }
}
