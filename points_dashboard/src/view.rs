//! Request -> view computation with value-keyed caching.
//!
//! A [`Dashboard`] owns the loaded records. Each [`DashboardRequest`] is a plain value;
//! asking for the same request twice returns the cached [`ComparisonView`], any change
//! recomputes. Player rankings are cached per season selection. Nothing is evicted;
//! caches live as long as the dashboard.

use std::{collections::HashMap, sync::Arc};

use arc_swap::{ArcSwap, ArcSwapOption};
use chrono::{NaiveDate, Utc};
use chrono_tz::America::New_York;
use gamelog_ingestor::models::game_log::GameLogRecord;
use gamelog_store::gamelogs::GameLogs;
use indexmap::IndexSet;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::{
    error::DashboardError,
    filter::{ALL_SEASONS, FilterSpec, SeasonSelection, filter_by_player_and_range, filter_by_season},
    histogram::{BinSpec, BinWidth, SeriesHistogram},
    stats::{PlayerAverage, average_points_by_player, max_points, median_points},
    threshold::{ThresholdStats, threshold_bound, threshold_stats},
};

/// Threshold used when the caller does not pick one.
pub const DEFAULT_THRESHOLD: u32 = 20;

/// Everything the comparison depends on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DashboardRequest {
    pub season: SeasonSelection,
    pub player_one: String,
    /// `None` compares player one against nothing.
    pub player_two: Option<String>,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub bin_width: BinWidth,
    pub threshold: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesSummary {
    pub player: String,
    pub games_played: usize,
    pub median_points: Option<f64>,
    pub max_points: Option<u32>,
    pub histogram: SeriesHistogram,
    pub threshold: ThresholdStats,
}

impl SeriesSummary {
    fn new(player: &str, series: &[&GameLogRecord], bins: &BinSpec, threshold: u32) -> Self {
        Self {
            player: player.to_string(),
            games_played: series.len(),
            median_points: median_points(series),
            max_points: max_points(series),
            histogram: bins.histogram(series),
            threshold: threshold_stats(series, threshold),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonView {
    pub season: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub bins: BinSpec,
    /// Threshold actually applied, after clamping to `threshold_bound`.
    pub threshold: u32,
    pub threshold_bound: u32,
    pub series_one: SeriesSummary,
    pub series_two: Option<SeriesSummary>,
}

type CachedView = (DashboardRequest, Arc<ComparisonView>);
type AveragesBySeason = HashMap<SeasonSelection, Arc<Vec<PlayerAverage>>>;

pub struct Dashboard {
    records: GameLogs,
    /// Distinct season labels in data order.
    seasons: Vec<String>,
    last_view: ArcSwapOption<CachedView>,
    averages: ArcSwap<AveragesBySeason>,
}

impl Dashboard {
    pub fn new(records: GameLogs) -> Self {
        let seasons: IndexSet<&str> = records.iter().map(|r| r.season.as_str()).collect();
        let seasons = seasons.into_iter().map(str::to_string).collect();
        Self {
            records,
            seasons,
            last_view: ArcSwapOption::empty(),
            averages: ArcSwap::from_pointee(AveragesBySeason::new()),
        }
    }

    pub fn records(&self) -> &[GameLogRecord] {
        &self.records
    }

    /// Season labels in data order, then "All Seasons".
    pub fn season_options(&self) -> Vec<String> {
        let mut out = self.seasons.clone();
        out.push(ALL_SEASONS.to_string());
        out
    }

    /// The last season in the data; "All Seasons" when nothing is loaded.
    pub fn default_season(&self) -> SeasonSelection {
        self.seasons
            .last()
            .map_or(SeasonSelection::All, |s| SeasonSelection::Season(s.clone()))
    }

    fn check_season(&self, season: &SeasonSelection) -> Result<(), DashboardError> {
        match season {
            SeasonSelection::Season(s) if !self.seasons.contains(s) => {
                Err(DashboardError::UnknownSeason(s.clone()))
            }
            _ => Ok(()),
        }
    }

    /// Players of `season` ranked by average points.
    pub fn player_options(
        &self,
        season: &SeasonSelection,
    ) -> Result<Arc<Vec<PlayerAverage>>, DashboardError> {
        self.check_season(season)?;
        if let Some(hit) = self.averages.load().get(season) {
            debug!(%season, "player averages cache hit");
            return Ok(Arc::clone(hit));
        }

        let ranked = Arc::new(average_points_by_player(filter_by_season(&self.records, season)));
        self.averages.rcu(|cached| {
            let mut next = AveragesBySeason::clone(cached);
            next.insert(season.clone(), Arc::clone(&ranked));
            next
        });
        Ok(ranked)
    }

    /// The two highest-averaging players of `season`.
    pub fn default_players(
        &self,
        season: &SeasonSelection,
    ) -> Result<(Option<String>, Option<String>), DashboardError> {
        let ranked = self.player_options(season)?;
        let mut names = ranked.iter().map(|p| p.player_name.clone());
        Ok((names.next(), names.next()))
    }

    /// Earliest game date of `season` (or `today` if it has no games) through `today`.
    pub fn default_date_range(
        &self,
        season: &SeasonSelection,
        today: NaiveDate,
    ) -> Result<(NaiveDate, NaiveDate), DashboardError> {
        self.check_season(season)?;
        let start = filter_by_season(&self.records, season)
            .iter()
            .map(|r| r.game_date)
            .min()
            .unwrap_or(today);
        Ok((start, today))
    }

    pub fn view(&self, req: &DashboardRequest) -> Result<Arc<ComparisonView>, DashboardError> {
        if let Some(cached) = self.last_view.load_full() {
            if cached.0 == *req {
                debug!("view cache hit");
                return Ok(Arc::clone(&cached.1));
            }
        }

        self.check_season(&req.season)?;
        if req.start > req.end {
            warn!(start = %req.start, end = %req.end, "start date after end date, no games match");
        }

        let view = Arc::new(self.compute(req));
        self.last_view
            .store(Some(Arc::new((req.clone(), Arc::clone(&view)))));
        Ok(view)
    }

    fn compute(&self, req: &DashboardRequest) -> ComparisonView {
        let spec_for = |player: &str| FilterSpec {
            player: player.to_string(),
            season: req.season.clone(),
            start: req.start,
            end: req.end,
        };

        let one = filter_by_player_and_range(&self.records, &spec_for(&req.player_one));
        let two = match &req.player_two {
            Some(p) => filter_by_player_and_range(&self.records, &spec_for(p)),
            None => Vec::new(),
        };

        let bins = BinSpec::shared(req.bin_width, &one, &two);
        let bound = threshold_bound(&one, &two);
        let threshold = if req.threshold > bound {
            warn!(requested = req.threshold, bound, "threshold above observed maximum, clamping");
            bound
        } else {
            req.threshold
        };

        info!(
            season = %req.season,
            player_one = %req.player_one,
            player_two = req.player_two.as_deref().unwrap_or("None"),
            games_one = one.len(),
            games_two = two.len(),
            bins = bins.bin_count(),
            "computed comparison view"
        );

        ComparisonView {
            season: req.season.label().to_string(),
            start: req.start,
            end: req.end,
            threshold,
            threshold_bound: bound,
            series_one: SeriesSummary::new(&req.player_one, &one, &bins, threshold),
            series_two: req
                .player_two
                .as_deref()
                .map(|p| SeriesSummary::new(p, &two, &bins, threshold)),
            bins,
        }
    }
}

/// Today's date where the league schedules its games.
pub fn league_today() -> NaiveDate {
    Utc::now().with_timezone(&New_York).date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::tests::rec;

    fn dashboard() -> Dashboard {
        Dashboard::new(vec![
            rec("2014-15", "Stephen Curry", (2014, 10, 29), 23),
            rec("2014-15", "Klay Thompson", (2014, 10, 29), 21),
            rec("2015-16", "Stephen Curry", (2015, 10, 27), 40),
            rec("2015-16", "Klay Thompson", (2015, 10, 27), 10),
            rec("2015-16", "Draymond Green", (2015, 10, 27), 11),
            rec("2015-16", "Stephen Curry", (2016, 4, 13), 46),
            rec("2015-16", "Klay Thompson", (2016, 4, 13), 14),
        ])
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn request(dash: &Dashboard) -> DashboardRequest {
        let season = dash.default_season();
        let (one, two) = dash.default_players(&season).unwrap();
        let (start, end) = dash.default_date_range(&season, d(2016, 6, 1)).unwrap();
        DashboardRequest {
            season,
            player_one: one.unwrap(),
            player_two: two,
            start,
            end,
            bin_width: BinWidth::default(),
            threshold: DEFAULT_THRESHOLD,
        }
    }

    #[test]
    fn season_options_end_with_all() {
        let dash = dashboard();
        assert_eq!(dash.season_options(), vec!["2014-15", "2015-16", "All Seasons"]);
        assert_eq!(dash.default_season(), SeasonSelection::Season("2015-16".into()));
    }

    #[test]
    fn defaults_follow_rankings_and_season_start() {
        let dash = dashboard();
        let req = request(&dash);
        assert_eq!(req.player_one, "Stephen Curry");
        assert_eq!(req.player_two.as_deref(), Some("Klay Thompson"));
        assert_eq!(req.start, d(2015, 10, 27));

        let (start, _) = dash.default_date_range(&SeasonSelection::All, d(2016, 6, 1)).unwrap();
        assert_eq!(start, d(2014, 10, 29));
    }

    #[test]
    fn view_bins_and_thresholds() {
        let dash = dashboard();
        let view = dash.view(&request(&dash)).unwrap();

        assert_eq!(view.bins.edges, vec![0, 5, 10, 15, 20, 25, 30, 35, 40, 45, 50]);
        assert_eq!(view.threshold_bound, 46);
        assert_eq!(view.series_one.games_played, 2);
        assert_eq!(view.series_one.median_points, Some(43.0));
        let two = view.series_two.as_ref().unwrap();
        assert_eq!(two.threshold.count, 0);
        assert_eq!(two.histogram.counts.iter().sum::<usize>(), 2);
    }

    #[test]
    fn repeated_request_hits_cache() {
        let dash = dashboard();
        let req = request(&dash);
        let a = dash.view(&req).unwrap();
        let b = dash.view(&req).unwrap();
        assert!(Arc::ptr_eq(&a, &b));

        let mut changed = req.clone();
        changed.bin_width = BinWidth::new(3).unwrap();
        let c = dash.view(&changed).unwrap();
        assert!(!Arc::ptr_eq(&a, &c));
        assert_eq!(c.bins.edges.last(), Some(&48));
    }

    #[test]
    fn averages_cached_per_season() {
        let dash = dashboard();
        let a = dash.player_options(&SeasonSelection::All).unwrap();
        let b = dash.player_options(&SeasonSelection::All).unwrap();
        assert!(Arc::ptr_eq(&a, &b));

        let s = dash.player_options(&SeasonSelection::Season("2014-15".into())).unwrap();
        assert_eq!(s.len(), 2);
        assert_eq!(a.len(), 3);
    }

    #[test]
    fn player_two_none_uses_first_series_only() {
        let dash = dashboard();
        let mut req = request(&dash);
        req.player_one = "Klay Thompson".into();
        req.player_two = None;
        req.threshold = 99;

        let view = dash.view(&req).unwrap();
        assert!(view.series_two.is_none());
        assert_eq!(view.threshold_bound, 14);
        assert_eq!(view.threshold, 14);
        assert_eq!(view.bins.edges, vec![0, 5, 10, 15]);
    }

    #[test]
    fn no_games_in_range_is_not_an_error() {
        let dash = dashboard();
        let mut req = request(&dash);
        req.start = d(2015, 11, 1);
        req.end = d(2015, 11, 2);

        let view = dash.view(&req).unwrap();
        assert_eq!(view.bins.edges, vec![0, 5]);
        assert_eq!(view.series_one.median_points, None);
        assert_eq!(view.series_one.threshold.proportion, 0.0);
        assert_eq!(view.threshold, 0);
    }

    #[test]
    fn rejects_unknown_season() {
        let dash = dashboard();
        let mut req = request(&dash);
        req.season = SeasonSelection::Season("1999-00".into());
        assert_eq!(dash.view(&req).unwrap_err(), DashboardError::UnknownSeason("1999-00".into()));
    }

    #[test]
    fn inverted_dates_give_the_empty_view() {
        let dash = dashboard();
        let mut req = request(&dash);
        req.start = d(2016, 7, 1);

        let view = dash.view(&req).unwrap();
        assert_eq!(view.bins.edges, vec![0, 5]);
        assert_eq!(view.series_one.games_played, 0);
        assert_eq!(view.series_one.median_points, None);
        assert_eq!(view.series_one.threshold.proportion, 0.0);
        let two = view.series_two.as_ref().unwrap();
        assert_eq!(two.histogram.counts, vec![0]);
        assert!(two.histogram.hover_text.is_empty());
    }
}
