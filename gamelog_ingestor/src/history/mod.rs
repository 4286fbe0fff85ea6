//! Historical ingestion: drive a [`GameLogProvider`] across a season range.
//!
//! For every season start year in the range, the builder fetches each eligible
//! [`SeasonType`] in order (regular season, play-in from 2019 on, playoffs), then
//! pauses for a fixed delay before moving on to the next year. Results are concatenated
//! in year-then-type order.
//!
//! There is no retry or backoff: the first failed fetch aborts the run and nothing is
//! written. [`HistoryBuilder::ingest`] writes the consolidated result once, wholesale,
//! so an interrupted run has to be restarted from the beginning of its range.

pub mod pacer;

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::{
    errors::IngestError,
    io::sink::DataSink,
    models::{
        game_log::GameLogEntry,
        request_params::GameLogRequest,
        season::{SeasonRange, SeasonType},
    },
    providers::{GameLogProvider, ProviderError},
};

pub use pacer::{Pacer, RecordingPacer, TokioPacer};

/// Delay between seasons, to stay under the stats API rate limits.
pub const DEFAULT_PAUSE: Duration = Duration::from_secs(2);

/// Outcome of a completed ingest run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestSummary<O> {
    pub range: SeasonRange,
    pub fetches: usize,
    pub records: usize,
    /// `None` when nothing was fetched and the sink was left untouched.
    pub written: Option<O>,
}

pub struct HistoryBuilder {
    provider: Box<dyn GameLogProvider + Send + Sync>,
    pacer: Box<dyn Pacer + Send + Sync>,
    pause: Duration,
}

impl HistoryBuilder {
    pub fn new(
        provider: Box<dyn GameLogProvider + Send + Sync>,
        pacer: Box<dyn Pacer + Send + Sync>,
    ) -> Self {
        Self {
            provider,
            pacer,
            pause: DEFAULT_PAUSE,
        }
    }

    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }

    /// Fetch every (year, season type) slice of `range` and concatenate the results.
    ///
    /// An empty range (start after end) returns an empty vector without fetching.
    pub async fn build(&self, range: SeasonRange) -> Result<Vec<GameLogEntry>, ProviderError> {
        let mut all = Vec::new();
        let mut years = range.years().peekable();

        while let Some(year) = years.next() {
            for &season_type in SeasonType::eligible_for(year) {
                let request = GameLogRequest::new(year, season_type);
                let season = request.season.clone();
                let rows = self.provider.fetch_game_logs(request).await?;
                info!(%season, %season_type, rows = rows.len(), "fetched game logs");
                all.extend(rows);
            }

            if years.peek().is_some() {
                debug!(year, pause_ms = self.pause.as_millis() as u64, "pausing before next season");
                self.pacer.pause(self.pause).await;
            }
        }

        Ok(all)
    }

    /// Build the full range, then write it to `sink` in one call.
    ///
    /// A run that fetched no rows (including an inverted range) skips the write, so a
    /// replacing sink never clears stored data for an empty result.
    pub async fn ingest<S>(
        &self,
        range: SeasonRange,
        sink: &S,
    ) -> Result<IngestSummary<S::Output>, IngestError>
    where
        S: DataSink + Sync + ?Sized,
    {
        info!(%range, fetches = range.fetch_count(), "starting ingest");
        let entries = self.build(range).await?;
        let written = if entries.is_empty() {
            warn!(%range, "no game logs fetched, leaving sink untouched");
            None
        } else {
            Some(sink.write(&entries).await?)
        };
        info!(records = entries.len(), "ingest complete");

        Ok(IngestSummary {
            range,
            fetches: range.fetch_count(),
            records: entries.len(),
            written,
        })
    }
}
