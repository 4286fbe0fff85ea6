//! Command-line surface of the ingest job (enabled with the `cli` feature).

pub mod commands;
pub mod params;

pub use commands::IngestArgs;
pub use params::{apply_overrides, parse_season_year};
