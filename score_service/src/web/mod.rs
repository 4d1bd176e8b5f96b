//! HTTP surface for the score service

pub mod handlers;

use std::sync::Arc;

use axum::routing::{delete, get, post};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use crate::core::ScoreLedger;

/// Build the Axum router with all routes
pub fn build_router(ledger: Arc<ScoreLedger>) -> Router {
    Router::new()
        .route("/api/score/add", post(handlers::add))
        .route("/api/score/recent", get(handlers::recent))
        .route("/api/score/reset", delete(handlers::reset))
        .route("/health", get(handlers::health_check))
        .layer(
            ServiceBuilder::new()
                .layer(CorsLayer::permissive())
                .into_inner(),
        )
        .with_state(ledger)
}
