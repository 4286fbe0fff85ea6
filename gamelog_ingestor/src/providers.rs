//! Provider abstraction for game-log sources.
//!
//! This module defines the [`GameLogProvider`] trait, the single seam between the
//! ingestion pipeline and the remote stats API. A provider answers one
//! (season, season type) slice per call and performs no business logic: it only
//! projects the remote payload onto [`GameLogEntry`] values.
//!
//! The trait is async and object safe (`dyn GameLogProvider`), so the
//! [`HistoryBuilder`](crate::history::HistoryBuilder) can be driven by the real
//! [`nba_stats::NbaStatsProvider`] or by an in-memory fake in tests.
//!
//! # Example
//!
//! ```rust
//! use async_trait::async_trait;
//! use gamelog_ingestor::models::{game_log::GameLogEntry, request_params::GameLogRequest};
//! use gamelog_ingestor::providers::{GameLogProvider, ProviderError};
//!
//! struct EmptyProvider;
//!
//! #[async_trait]
//! impl GameLogProvider for EmptyProvider {
//!     async fn fetch_game_logs(
//!         &self,
//!         _request: GameLogRequest,
//!     ) -> Result<Vec<GameLogEntry>, ProviderError> {
//!         Ok(vec![])
//!     }
//! }
//! ```

pub mod nba_stats;

use async_trait::async_trait;
use snafu::{Backtrace, Snafu};

use crate::models::{game_log::GameLogEntry, request_params::GameLogRequest};

/// Fetches the game logs of one (season, season type) slice.
#[async_trait]
pub trait GameLogProvider {
    /// Returns the rows in the order the remote source lists them.
    ///
    /// Errors are returned as-is; the caller decides whether they are fatal.
    async fn fetch_game_logs(
        &self,
        request: GameLogRequest,
    ) -> Result<Vec<GameLogEntry>, ProviderError>;
}

/// Errors that can occur during the creation of a provider instance.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ProviderInitError {
    /// failed to init reqwest client
    #[snafu(display("Failed to build HTTP client: {source}"))]
    ClientBuild {
        source: reqwest::Error,
        backtrace: Backtrace,
    },

    /// A configured header value contains invalid characters.
    #[snafu(display("Invalid header value for {name}: {source}"))]
    InvalidHeader {
        name: String,
        source: reqwest::header::InvalidHeaderValue,
        backtrace: Backtrace,
    },
}

/// Errors that can occur within a `GameLogProvider` implementation.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ProviderError {
    /// An error during an API request (e.g., network failure, timeout, bad JSON).
    #[snafu(display("API request failed: {source}"))]
    Reqwest {
        source: reqwest::Error,
        backtrace: Backtrace,
    },

    /// The API answered with a non-success status.
    #[snafu(display("API error ({status}): {message}"))]
    Api {
        status: u16,
        message: String,
        backtrace: Backtrace,
    },

    /// The payload did not have the expected shape.
    #[snafu(display("Unexpected payload: {message}"))]
    Schema {
        message: String,
        backtrace: Backtrace,
    },
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use chrono::NaiveDate;

    use super::*;
    use crate::models::{game_log::GameLogRecord, season::SeasonType};

    struct CannedProvider {
        by_season: HashMap<String, Vec<GameLogEntry>>,
    }

    #[async_trait]
    impl GameLogProvider for CannedProvider {
        async fn fetch_game_logs(
            &self,
            request: GameLogRequest,
        ) -> Result<Vec<GameLogEntry>, ProviderError> {
            match self.by_season.get(&request.season) {
                Some(rows) => Ok(rows.clone()),
                None => SchemaSnafu {
                    message: format!("no canned rows for {}", request.season),
                }
                .fail(),
            }
        }
    }

    #[tokio::test]
    async fn provider_is_usable_as_trait_object() {
        let record = GameLogRecord {
            season: "2010-11".into(),
            player_name: "Kobe Bryant".into(),
            game_date: NaiveDate::from_ymd_opt(2010, 10, 26).unwrap(),
            points: 27,
        };
        let mut by_season = HashMap::new();
        by_season.insert(
            "2010-11".to_string(),
            vec![GameLogEntry::bare(record, SeasonType::RegularSeason)],
        );
        let provider: Box<dyn GameLogProvider + Send + Sync> = Box::new(CannedProvider { by_season });

        let rows = provider
            .fetch_game_logs(GameLogRequest::new(2010, SeasonType::RegularSeason))
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);

        let err = provider
            .fetch_game_logs(GameLogRequest::new(2011, SeasonType::RegularSeason))
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::Schema { .. }));
    }
}
