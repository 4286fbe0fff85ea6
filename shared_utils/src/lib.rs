//! Small helpers shared by the ingest and dashboard binaries.

pub mod env;
pub mod paths;
