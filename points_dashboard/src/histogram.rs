//! Shared histogram binning for two compared series.
//!
//! Both series are binned against the same edges `0, w, 2w, ..` so their bars line up.
//! Bins are half-open `[lower, upper)`; the last edge is the smallest multiple of `w`
//! strictly above the combined maximum, so every value lands in a bin.

use std::fmt;

use gamelog_ingestor::models::game_log::{GameLogRecord, MAX_GAME_POINTS};
use serde::Serialize;

use crate::error::DashboardError;

pub const MIN_BIN_WIDTH: u32 = 1;
pub const MAX_BIN_WIDTH: u32 = 10;
pub const DEFAULT_BIN_WIDTH: u32 = 5;

/// Histogram bucket size in points, `1..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct BinWidth(u32);

impl BinWidth {
    pub fn new(width: u32) -> Result<Self, DashboardError> {
        if (MIN_BIN_WIDTH..=MAX_BIN_WIDTH).contains(&width) {
            Ok(Self(width))
        } else {
            Err(DashboardError::InvalidBinWidth(width))
        }
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Default for BinWidth {
    fn default() -> Self {
        Self(DEFAULT_BIN_WIDTH)
    }
}

impl fmt::Display for BinWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BinSpec {
    pub width: BinWidth,
    pub edges: Vec<u32>,
}

/// Per-series result of binning against a [`BinSpec`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesHistogram {
    pub counts: Vec<usize>,
    /// Share of the series in each bin, 0..=100. All zero for an empty series.
    pub percentages: Vec<f64>,
    /// One line per non-empty bin.
    pub hover_text: Vec<String>,
}

impl BinSpec {
    /// Edges covering every value of both series.
    ///
    /// With both series empty the maximum is taken as 0, giving `[0, w]`.
    pub fn shared(width: BinWidth, a: &[&GameLogRecord], b: &[&GameLogRecord]) -> Self {
        let max = a.iter().chain(b).map(|r| r.points).max().unwrap_or(0);
        Self::covering(width, max)
    }

    /// Edges `0, w, .., k*w` with `k*w` the smallest multiple of `w` above `max`.
    ///
    /// `max` is capped at [`MAX_GAME_POINTS`]; loaded records never exceed it.
    pub fn covering(width: BinWidth, max: u32) -> Self {
        let w = width.get();
        let bins = max.min(MAX_GAME_POINTS) / w + 1;
        let edges = (0..=bins).map(|i| i * w).collect();
        Self { width, edges }
    }

    pub fn bin_count(&self) -> usize {
        self.edges.len().saturating_sub(1)
    }

    /// Index of the bin holding `points`, if it is below the last edge.
    pub fn bin_index(&self, points: u32) -> Option<usize> {
        let idx = (points / self.width.get()) as usize;
        (idx < self.bin_count()).then_some(idx)
    }

    pub fn histogram(&self, series: &[&GameLogRecord]) -> SeriesHistogram {
        let mut counts = vec![0usize; self.bin_count()];
        for r in series {
            if let Some(i) = self.bin_index(r.points) {
                counts[i] += 1;
            }
        }

        let total = series.len();
        let percentages: Vec<f64> = counts
            .iter()
            .map(|&c| if total == 0 { 0.0 } else { c as f64 * 100.0 / total as f64 })
            .collect();

        let hover_text = self
            .edges
            .windows(2)
            .zip(counts.iter().zip(&percentages))
            .filter(|(_, (count, _))| **count > 0)
            .map(|(edge, (count, pct))| format!("{}-{}: {pct:.1}% ({count})", edge[0], edge[1]))
            .collect();

        SeriesHistogram {
            counts,
            percentages,
            hover_text,
        }
    }
}
