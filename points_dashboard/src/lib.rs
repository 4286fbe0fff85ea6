//! Scoring-distribution comparison between two players.
//!
//! The analytics are plain functions over borrowed [`GameLogRecord`] slices:
//! - [`filter`]: season / player / date-range selection.
//! - [`stats`]: per-player averages, median, max.
//! - [`histogram`]: shared bin edges and per-series counts.
//! - [`threshold`]: over/under frequency at a points threshold.
//!
//! [`view::Dashboard`] ties them together behind explicit [`view::DashboardRequest`]
//! values and caches the last computed view.
//!
//! [`GameLogRecord`]: gamelog_ingestor::models::game_log::GameLogRecord

pub mod cli;
pub mod error;
pub mod filter;
pub mod histogram;
pub mod report;
pub mod stats;
pub mod threshold;
pub mod view;

pub use error::DashboardError;
pub use view::{ComparisonView, Dashboard, DashboardRequest};
