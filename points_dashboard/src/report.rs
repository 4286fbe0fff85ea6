//! Plain-text rendering of a [`ComparisonView`] for the terminal.

use std::fmt::Write;

use crate::{
    stats::PlayerAverage,
    view::{ComparisonView, SeriesSummary},
};

pub fn render_view(view: &ComparisonView) -> String {
    let mut out = String::new();

    let title = match &view.series_two {
        Some(two) => format!("{} and {}", view.series_one.player, two.player),
        None => view.series_one.player.clone(),
    };
    let _ = writeln!(out, "{title} Points Distribution");
    let _ = writeln!(
        out,
        "{} | {} to {} | bin width {} | threshold {} (max {})",
        view.season, view.start, view.end, view.bins.width, view.threshold, view.threshold_bound
    );

    render_series(&mut out, &view.series_one, view.threshold);
    if let Some(two) = &view.series_two {
        render_series(&mut out, two, view.threshold);
    }
    out
}

fn render_series(out: &mut String, s: &SeriesSummary, threshold: u32) {
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", s.player);
    let _ = writeln!(out, "  Total Games Played: {}", s.games_played);
    match (s.median_points, s.max_points) {
        (Some(median), Some(max)) => {
            let _ = writeln!(out, "  Median: {median:.1}  Max: {max}");
        }
        _ => {
            let _ = writeln!(out, "  Median: -  Max: -");
        }
    }
    let _ = writeln!(
        out,
        "  {}+ points: {} of {} ({:.1}%)",
        threshold,
        s.threshold.count,
        s.threshold.total,
        s.threshold.proportion * 100.0
    );
    for line in &s.histogram.hover_text {
        let _ = writeln!(out, "  {line}");
    }
}

/// Ranked player list, as shown by `--list-players`.
pub fn render_players(players: &[PlayerAverage]) -> String {
    let mut out = String::new();
    for (rank, p) in players.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>4}. {:<28} {:>5.1} ({} games)",
            rank + 1,
            p.player_name,
            p.mean_points,
            p.games
        );
    }
    out
}
