//! `points-dashboard`: compare two players' scoring distributions.

use anyhow::Context;
use clap::Parser;
use gamelog_store::load_game_logs;
use points_dashboard::{
    Dashboard,
    cli::DashboardArgs,
    report::{render_players, render_view},
    view::league_today,
};
use shared_utils::paths::resolve_db_path;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("points_dashboard=info")))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = DashboardArgs::parse();

    let db_path = resolve_db_path(args.database.as_deref());
    let logs = load_game_logs(&db_path, &args.since)
        .with_context(|| format!("load game logs from {}", db_path.display()))?;
    let dash = Dashboard::new(logs);

    if args.list_players {
        let season = args.season_or_default(&dash);
        let players = dash.player_options(&season)?;
        print!("{}", render_players(&players));
        return Ok(());
    }

    let Some(request) = args.to_request(&dash, league_today())? else {
        warn!(since = %args.since, "no games loaded, nothing to compare");
        return Ok(());
    };
    let view = dash.view(&request)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&*view)?);
    } else {
        print!("{}", render_view(&view));
    }
    Ok(())
}
