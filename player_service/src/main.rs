//! Player service entry point

use std::sync::Arc;

use clap::Parser;
use tracing::info;

use player_service::core::FactCorpus;
use player_service::services::{HttpGameClient, HttpRandomSource, HttpScoreClient};
use player_service::web;
use player_service::{PlayerError, PlayerResult, RoundOrchestrator};

/// Command line arguments for the player service
#[derive(Parser, Debug)]
#[command(name = "player_service")]
#[command(about = "Public play-round orchestration service")]
struct Args {
    /// Port for the HTTP server
    #[arg(long, default_value = "5080")]
    port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Game service compute endpoint
    #[arg(long, default_value = "http://localhost:5148/api/game/compute")]
    game_url: String,

    /// Score service add endpoint
    #[arg(long, default_value = "http://localhost:5064/api/score/add")]
    score_url: String,

    /// Remote random number endpoint
    #[arg(long, default_value = "http://codechallenge.boohma.com/random")]
    random_url: String,
}

#[tokio::main]
async fn main() -> PlayerResult<()> {
    let args = Args::parse();
    shared::logging::init_tracing("player_service", Some(&args.log_level));

    let client = reqwest::Client::new();
    let orchestrator = Arc::new(RoundOrchestrator::new(
        HttpRandomSource::new(client.clone(), &args.random_url),
        HttpGameClient::new(client.clone(), &args.game_url),
        HttpScoreClient::new(client, &args.score_url),
        Arc::new(FactCorpus::standard()),
    ));
    let router = web::build_router(orchestrator);

    let bind_address = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .map_err(|e| PlayerError::ServerStartup {
            message: format!("Failed to bind to {bind_address}: {e}"),
        })?;

    info!("Player service listening on http://{bind_address}");
    info!(game_url = %args.game_url, score_url = %args.score_url, random_url = %args.random_url, "Dependency endpoints configured");
    axum::serve(listener, router).await?;

    Ok(())
}
