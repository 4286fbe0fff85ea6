//! Ingestion side of the game-log pipeline.
//!
//! - [`models`]: game-log records, seasons and season types.
//! - [`providers`]: the [`GameLogProvider`](providers::GameLogProvider) seam and the
//!   `stats.nba.com` implementation.
//! - [`history`]: the batch job that walks a season range and hands the result to a
//!   [`DataSink`](io::sink::DataSink).
//! - [`config`]: TOML configuration for the job.

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod errors;
pub mod history;
pub mod io;
pub mod models;
pub mod providers;
