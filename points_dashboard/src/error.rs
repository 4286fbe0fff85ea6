use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DashboardError {
    #[error("bin width {0} is outside 1..=10")]
    InvalidBinWidth(u32),

    #[error("season {0:?} is not in the loaded data")]
    UnknownSeason(String),

    #[error("invalid season {0:?}: expected a label like 2010-11 or \"All Seasons\"")]
    BadSeasonLabel(String),
}
