//! Over/under frequency at a points threshold.

use gamelog_ingestor::models::game_log::GameLogRecord;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThresholdStats {
    /// Games with points at or above the threshold.
    pub count: usize,
    pub total: usize,
    /// `count / total`, or 0.0 when there are no games.
    pub proportion: f64,
}

pub fn threshold_stats(records: &[&GameLogRecord], threshold: u32) -> ThresholdStats {
    let total = records.len();
    let count = records.iter().filter(|r| r.points >= threshold).count();
    let proportion = if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    };
    ThresholdStats {
        count,
        total,
        proportion,
    }
}

/// Largest meaningful threshold: the highest score in either series, 0 if both are empty.
pub fn threshold_bound(a: &[&GameLogRecord], b: &[&GameLogRecord]) -> u32 {
    a.iter().chain(b).map(|r| r.points).max().unwrap_or(0)
}
