//! `stats.nba.com` provider (`playergamelogs` endpoint).

pub mod params;
pub mod provider;
pub mod response;

pub use params::ProviderSettings;
pub use provider::NbaStatsProvider;
