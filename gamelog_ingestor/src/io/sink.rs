use async_trait::async_trait;
use snafu::{Backtrace, Snafu};

use crate::models::game_log::GameLogEntry;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum SinkError {
    /// An error occurred while trying to write the data (e.g., database error).
    #[snafu(display("Failed to write data: {message}"))]
    Write {
        message: String,
        backtrace: Backtrace,
    },

    /// An entry could not be converted into the destination format.
    #[snafu(display("Data conversion error: {message}"))]
    Conversion {
        message: String,
        backtrace: Backtrace,
    },
}

#[async_trait]
pub trait DataSink {
    /// The type of output returned after a successful write operation.
    ///
    /// A database sink returns the number of rows written; a file sink might return
    /// the path it wrote to.
    type Output: Send;

    /// Writes the full consolidated ingest result in one go.
    async fn write(&self, data: &[GameLogEntry]) -> Result<Self::Output, SinkError>;
}
