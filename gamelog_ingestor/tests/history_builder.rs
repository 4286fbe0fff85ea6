use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use async_trait::async_trait;
use chrono::NaiveDate;
use gamelog_ingestor::{
    errors::IngestError,
    history::{HistoryBuilder, RecordingPacer},
    io::sink::{DataSink, SinkError, WriteSnafu},
    models::{
        game_log::{GameLogEntry, GameLogRecord},
        request_params::GameLogRequest,
        season::{SeasonRange, SeasonType},
    },
    providers::{ApiSnafu, GameLogProvider, ProviderError},
};

/// Returns one row per request and remembers what was asked for.
#[derive(Clone, Default)]
struct FakeProvider {
    calls: Arc<Mutex<Vec<(String, SeasonType)>>>,
    fail_on: Option<(i32, SeasonType)>,
}

impl FakeProvider {
    fn calls(&self) -> Vec<(String, SeasonType)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GameLogProvider for FakeProvider {
    async fn fetch_game_logs(
        &self,
        request: GameLogRequest,
    ) -> Result<Vec<GameLogEntry>, ProviderError> {
        self.calls
            .lock()
            .unwrap()
            .push((request.season.clone(), request.season_type));

        if self.fail_on == Some((request.year, request.season_type)) {
            return ApiSnafu {
                status: 429u16,
                message: "Too Many Requests",
            }
            .fail();
        }

        let record = GameLogRecord {
            season: request.season.clone(),
            player_name: format!("{} player", request.season_type),
            game_date: NaiveDate::from_ymd_opt(request.year, 12, 25).unwrap(),
            points: request.year as u32 % 50,
        };
        Ok(vec![GameLogEntry::bare(record, request.season_type)])
    }
}

#[derive(Default)]
struct MemorySink {
    writes: Mutex<Vec<usize>>,
    fail: bool,
}

#[async_trait]
impl DataSink for MemorySink {
    type Output = usize;

    async fn write(&self, data: &[GameLogEntry]) -> Result<usize, SinkError> {
        if self.fail {
            return WriteSnafu { message: "disk full" }.fail();
        }
        self.writes.lock().unwrap().push(data.len());
        Ok(data.len())
    }
}

fn builder(provider: &FakeProvider, pacer: &RecordingPacer) -> HistoryBuilder {
    HistoryBuilder::new(Box::new(provider.clone()), Box::new(pacer.clone()))
        .with_pause(Duration::from_secs(2))
}

#[tokio::test]
async fn inverted_range_fetches_nothing() {
    let provider = FakeProvider::default();
    let pacer = RecordingPacer::new();

    let rows = builder(&provider, &pacer)
        .build(SeasonRange::new(2020, 2019))
        .await
        .unwrap();

    assert!(rows.is_empty());
    assert!(provider.calls().is_empty());
    assert!(pacer.pauses().is_empty());
}

#[tokio::test]
async fn inverted_range_ingest_leaves_sink_untouched() {
    let provider = FakeProvider::default();
    let pacer = RecordingPacer::new();
    let sink = MemorySink::default();

    let summary = builder(&provider, &pacer)
        .ingest(SeasonRange::new(2020, 2019), &sink)
        .await
        .unwrap();

    assert_eq!(summary.fetches, 0);
    assert_eq!(summary.records, 0);
    assert_eq!(summary.written, None);
    assert!(sink.writes.lock().unwrap().is_empty());
}

#[tokio::test]
async fn pre_playin_year_issues_two_fetches() {
    let provider = FakeProvider::default();
    let pacer = RecordingPacer::new();

    let rows = builder(&provider, &pacer)
        .build(SeasonRange::new(2018, 2018))
        .await
        .unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(
        provider.calls(),
        vec![
            ("2018-19".to_string(), SeasonType::RegularSeason),
            ("2018-19".to_string(), SeasonType::Playoffs),
        ]
    );
}

#[tokio::test]
async fn playin_year_issues_three_fetches() {
    let provider = FakeProvider::default();
    let pacer = RecordingPacer::new();

    builder(&provider, &pacer)
        .build(SeasonRange::new(2019, 2019))
        .await
        .unwrap();

    assert_eq!(
        provider.calls(),
        vec![
            ("2019-20".to_string(), SeasonType::RegularSeason),
            ("2019-20".to_string(), SeasonType::PlayIn),
            ("2019-20".to_string(), SeasonType::Playoffs),
        ]
    );
}

#[tokio::test]
async fn results_are_year_then_type_ordered_with_pause_between_years() {
    let provider = FakeProvider::default();
    let pacer = RecordingPacer::new();

    let rows = builder(&provider, &pacer)
        .build(SeasonRange::new(2017, 2019))
        .await
        .unwrap();

    let order: Vec<(String, SeasonType)> = rows
        .iter()
        .map(|r| (r.record.season.clone(), r.season_type))
        .collect();
    assert_eq!(order, provider.calls());
    assert_eq!(rows.len(), 2 + 2 + 3);
    assert_eq!(rows.first().unwrap().record.season, "2017-18");
    assert_eq!(rows.last().unwrap().season_type, SeasonType::Playoffs);

    // one pause between each pair of consecutive years
    assert_eq!(pacer.pauses(), vec![Duration::from_secs(2); 2]);
}

#[tokio::test]
async fn failed_fetch_aborts_run_and_writes_nothing() {
    let provider = FakeProvider {
        fail_on: Some((2019, SeasonType::PlayIn)),
        ..Default::default()
    };
    let pacer = RecordingPacer::new();
    let sink = MemorySink::default();

    let err = builder(&provider, &pacer)
        .ingest(SeasonRange::new(2018, 2020), &sink)
        .await
        .unwrap_err();

    assert!(matches!(err, IngestError::Provider(ProviderError::Api { status: 429, .. })));
    // 2018: 2 fetches, 2019: regular season + the failing play-in; 2020 never reached
    assert_eq!(provider.calls().len(), 4);
    assert!(sink.writes.lock().unwrap().is_empty());
}

#[tokio::test]
async fn ingest_writes_once_with_everything() {
    let provider = FakeProvider::default();
    let pacer = RecordingPacer::new();
    let sink = MemorySink::default();

    let summary = builder(&provider, &pacer)
        .ingest(SeasonRange::new(2018, 2019), &sink)
        .await
        .unwrap();

    assert_eq!(summary.fetches, 5);
    assert_eq!(summary.records, 5);
    assert_eq!(summary.written, Some(5));
    assert_eq!(*sink.writes.lock().unwrap(), vec![5]);
}

#[tokio::test]
async fn sink_failure_is_reported_as_sink_error() {
    let provider = FakeProvider::default();
    let pacer = RecordingPacer::new();
    let sink = MemorySink {
        fail: true,
        ..Default::default()
    };

    let err = builder(&provider, &pacer)
        .ingest(SeasonRange::new(2010, 2010), &sink)
        .await
        .unwrap_err();
    assert!(matches!(err, IngestError::Sink(_)));
}
