//! HTTP surface for the game service

pub mod handlers;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use crate::core::RuleSet;

/// Build the Axum router with all routes
pub fn build_router(rules: Arc<RuleSet>) -> Router {
    Router::new()
        .route("/api/game/compute", post(handlers::compute))
        .route("/health", get(handlers::health_check))
        .layer(
            ServiceBuilder::new()
                .layer(CorsLayer::permissive())
                .into_inner(),
        )
        .with_state(rules)
}
