//! `gamelog-ingest`: fetch a range of seasons from stats.nba.com into SQLite.

use anyhow::Context;
use clap::Parser;
use gamelog_ingestor::{
    cli::{IngestArgs, apply_overrides},
    config::IngestConfig,
    history::{HistoryBuilder, TokioPacer},
    providers::nba_stats::NbaStatsProvider,
};
use gamelog_store::{db::migrate, gamelogs::WriteMode, sink::SqliteSink};
use shared_utils::paths::resolve_db_path;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("gamelog_ingestor=info,gamelog_store=info")),
        )
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = IngestArgs::parse();

    let base = match &args.config {
        Some(path) => IngestConfig::load(path)?,
        None => IngestConfig::default(),
    };
    let cfg = apply_overrides(&args, base)?;

    let db_path = resolve_db_path(cfg.database.as_deref());
    let db_url = db_path.to_string_lossy().into_owned();
    migrate::run_sqlite(&db_url).with_context(|| format!("migrate {}", db_path.display()))?;

    let provider = NbaStatsProvider::with_settings(&cfg.provider_settings())?;
    let builder = HistoryBuilder::new(Box::new(provider), Box::new(TokioPacer)).with_pause(cfg.pause());

    let mode = if args.append {
        WriteMode::Append
    } else {
        WriteMode::Replace
    };
    let sink = SqliteSink::new(&db_path, mode);

    info!(db = %db_path.display(), ?mode, "writing game logs");
    let summary = builder.ingest(cfg.season_range(), &sink).await?;

    println!(
        "{}: {} fetches, {} records, {} rows written to {}",
        summary.range,
        summary.fetches,
        summary.records,
        summary.written.unwrap_or(0),
        db_path.display()
    );
    Ok(())
}
