#![cfg(test)]
use gamelog_ingestor::{
    models::{request_params::GameLogRequest, season::SeasonType},
    providers::{GameLogProvider, nba_stats::NbaStatsProvider},
};
use serial_test::serial;

#[tokio::test]
#[serial]
#[ignore]
async fn test_nba_stats_provider_fetch_game_logs() {
    // Hits the public stats API; run with `--ignored` from a network that is not blocked by it.
    let provider = NbaStatsProvider::new().expect("Failed to create NbaStatsProvider");

    let result = provider
        .fetch_game_logs(GameLogRequest::new(2020, SeasonType::PlayIn))
        .await;

    assert!(result.is_ok(), "fetch_game_logs returned an error: {:?}", result.err());

    let rows = result.unwrap();
    assert!(!rows.is_empty(), "Expected play-in games for 2020-21");
    assert!(rows.iter().all(|r| r.record.season == "2020-21"));
    assert!(rows.iter().all(|r| r.season_type == SeasonType::PlayIn));
}
