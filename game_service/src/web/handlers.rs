//! Resolution endpoint handlers

use std::sync::Arc;

use axum::extract::State;
use axum::response::Json;
use serde_json::{json, Value};
use tracing::{info, warn};

use shared::{ComputeRequest, ComputeResponse};

use crate::core::RuleSet;
use crate::error::GameServiceError;

/// Resolve a pair of choices - /api/game/compute
///
/// The body is decoded by hand so an unknown choice name gets the same 400
/// error shape as a missing field, instead of the extractor's rejection.
pub async fn compute(
    State(rules): State<Arc<RuleSet>>,
    Json(body): Json<Value>,
) -> Result<Json<ComputeResponse>, GameServiceError> {
    let request: ComputeRequest = serde_json::from_value(body).map_err(|e| {
        warn!(error = %e, "Rejecting compute request with undecodable choices");
        GameServiceError::InvalidChoices
    })?;

    let (Some(player), Some(computer)) = (request.player_choice, request.computer_choice) else {
        warn!(?request, "Rejecting compute request with missing choices");
        return Err(GameServiceError::InvalidChoices);
    };

    let result = rules.resolve(player, computer);
    info!(%player, %computer, %result, "Resolved round");
    Ok(Json(ComputeResponse { result }))
}

/// Health check - /health
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok", "service": "game_service" }))
}
