//! Game service entry point

use std::sync::Arc;

use clap::Parser;
use tracing::info;

use game_service::{web, GameServiceError, GameServiceResult, RuleSet};

/// Command line arguments for the game service
#[derive(Parser, Debug)]
#[command(name = "game_service")]
#[command(about = "Choice resolution service")]
struct Args {
    /// Port for the HTTP server
    #[arg(long, default_value = "5148")]
    port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> GameServiceResult<()> {
    let args = Args::parse();
    shared::logging::init_tracing("game_service", Some(&args.log_level));

    let rules = Arc::new(RuleSet::standard());
    let router = web::build_router(rules);

    let bind_address = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .map_err(|e| GameServiceError::ServerStartup {
            message: format!("Failed to bind to {bind_address}: {e}"),
        })?;

    info!("Game service listening on http://{bind_address}");
    axum::serve(listener, router).await?;

    Ok(())
}
