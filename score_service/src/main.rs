//! Score service entry point

use std::sync::Arc;

use clap::Parser;
use tracing::info;

use score_service::{web, ScoreLedger, ScoreServiceError, ScoreServiceResult};

/// Command line arguments for the score service
#[derive(Parser, Debug)]
#[command(name = "score_service")]
#[command(about = "Bounded in-memory score ledger service")]
struct Args {
    /// Port for the HTTP server
    #[arg(long, default_value = "5064")]
    port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> ScoreServiceResult<()> {
    let args = Args::parse();
    shared::logging::init_tracing("score_service", Some(&args.log_level));

    let ledger = Arc::new(ScoreLedger::new());
    let router = web::build_router(ledger);

    let bind_address = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .map_err(|e| ScoreServiceError::ServerStartup {
            message: format!("Failed to bind to {bind_address}: {e}"),
        })?;

    info!("Score service listening on http://{bind_address}");
    axum::serve(listener, router).await?;

    Ok(())
}
