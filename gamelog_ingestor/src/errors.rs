use thiserror::Error;

use crate::{io::sink::SinkError, providers::ProviderError};

/// Failure of an ingest run. Either kind aborts the whole run.
#[derive(Debug, Error)]
pub enum IngestError {
    /// A fetch failed; nothing was written.
    #[error("fetch failed, nothing written: {0}")]
    Provider(#[from] ProviderError),

    /// All fetches succeeded but the consolidated write failed.
    #[error("write failed: {0}")]
    Sink(#[from] SinkError),
}
