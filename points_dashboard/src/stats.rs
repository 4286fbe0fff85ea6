//! Aggregate scoring statistics.

use std::cmp::Ordering;

use gamelog_ingestor::models::game_log::GameLogRecord;
use indexmap::IndexMap;
use serde::Serialize;

/// A player's mean points over the games considered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerAverage {
    pub player_name: String,
    pub mean_points: f64,
    pub games: usize,
}

/// Mean points per player, highest first; equal means are ordered by name.
pub fn average_points_by_player<'a, I>(records: I) -> Vec<PlayerAverage>
where
    I: IntoIterator<Item = &'a GameLogRecord>,
{
    let mut totals: IndexMap<&str, (u64, usize)> = IndexMap::new();
    for r in records {
        let slot = totals.entry(r.player_name.as_str()).or_default();
        slot.0 += u64::from(r.points);
        slot.1 += 1;
    }

    let mut out: Vec<PlayerAverage> = totals
        .into_iter()
        .map(|(name, (sum, games))| PlayerAverage {
            player_name: name.to_string(),
            mean_points: sum as f64 / games as f64,
            games,
        })
        .collect();

    out.sort_by(|a, b| {
        b.mean_points
            .partial_cmp(&a.mean_points)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.player_name.cmp(&b.player_name))
    });
    out
}

/// `None` for an empty collection.
pub fn median_points(records: &[&GameLogRecord]) -> Option<f64> {
    let mut pts: Vec<u32> = records.iter().map(|r| r.points).collect();
    if pts.is_empty() {
        return None;
    }
    pts.sort_unstable();

    let mid = pts.len() / 2;
    if pts.len() % 2 == 1 {
        Some(f64::from(pts[mid]))
    } else {
        Some((f64::from(pts[mid - 1]) + f64::from(pts[mid])) / 2.0)
    }
}

pub fn max_points(records: &[&GameLogRecord]) -> Option<u32> {
    records.iter().map(|r| r.points).max()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::tests::rec;

    #[test]
    fn averages_sorted_desc_with_name_tiebreak() {
        let data = vec![
            rec("2015-16", "B", (2015, 11, 1), 10),
            rec("2015-16", "A", (2015, 11, 1), 20),
            rec("2015-16", "C", (2015, 11, 1), 30),
            rec("2015-16", "B", (2015, 11, 2), 30),
            rec("2015-16", "C", (2015, 11, 2), 10),
        ];
        let avg = average_points_by_player(&data);
        let names: Vec<&str> = avg.iter().map(|a| a.player_name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert_eq!(avg[1].games, 2);
        assert_eq!(avg[1].mean_points, 20.0);
    }

    #[test]
    fn averages_of_nothing_is_empty() {
        assert!(average_points_by_player(std::iter::empty()).is_empty());
    }

    #[test]
    fn median_odd_even_empty() {
        let data = vec![
            rec("2015-16", "A", (2015, 11, 1), 30),
            rec("2015-16", "A", (2015, 11, 2), 10),
            rec("2015-16", "A", (2015, 11, 3), 20),
            rec("2015-16", "A", (2015, 11, 4), 25),
        ];
        let all: Vec<&GameLogRecord> = data.iter().collect();
        assert_eq!(median_points(&all[..3]), Some(20.0));
        assert_eq!(median_points(&all), Some(22.5));
        assert_eq!(median_points(&[]), None);
        assert_eq!(max_points(&all), Some(30));
        assert_eq!(max_points(&[]), None);
    }
}
