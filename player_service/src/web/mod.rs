//! HTTP surface for the player service

pub mod handlers;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use crate::core::RoundOrchestrator;
use crate::traits::{GameClient, RandomSource, ScoreClient};

/// Build the Axum router with all routes
pub fn build_router<R, G, S>(orchestrator: Arc<RoundOrchestrator<R, G, S>>) -> Router
where
    R: RandomSource + 'static,
    G: GameClient + 'static,
    S: ScoreClient + 'static,
{
    Router::new()
        .route("/api/player/play", post(handlers::play))
        .route("/api/player/choices", get(handlers::choices))
        .route("/api/player/choice", get(handlers::random_choice))
        .route("/health", get(handlers::health_check))
        .layer(
            ServiceBuilder::new()
                .layer(CorsLayer::permissive())
                .into_inner(),
        )
        .with_state(orchestrator)
}
