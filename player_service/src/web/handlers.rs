//! Player endpoint handlers

use std::sync::Arc;

use axum::extract::State;
use axum::response::Json;
use serde_json::{json, Value};
use tracing::{info, warn};

use shared::{Choice, ChoiceDescriptor, PlayRequest, PlayResponse};

use crate::core::RoundOrchestrator;
use crate::error::PlayerError;
use crate::traits::{GameClient, RandomSource, ScoreClient};

/// Play one round - /api/player/play
pub async fn play<R, G, S>(
    State(orchestrator): State<Arc<RoundOrchestrator<R, G, S>>>,
    Json(request): Json<PlayRequest>,
) -> Result<Json<PlayResponse>, PlayerError>
where
    R: RandomSource,
    G: GameClient,
    S: ScoreClient,
{
    match orchestrator.play(request).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            if e.is_validation() {
                warn!(error = %e, "Rejected play request");
            }
            Err(e)
        }
    }
}

/// List the playable choices - /api/player/choices
pub async fn choices() -> Json<Vec<ChoiceDescriptor>> {
    let choices: Vec<ChoiceDescriptor> = Choice::ALL.into_iter().map(Into::into).collect();
    info!("Retrieved all game choices");
    Json(choices)
}

/// A random choice via the opponent-selection path - /api/player/choice
pub async fn random_choice<R, G, S>(
    State(orchestrator): State<Arc<RoundOrchestrator<R, G, S>>>,
) -> Json<ChoiceDescriptor>
where
    R: RandomSource,
    G: GameClient,
    S: ScoreClient,
{
    let choice = orchestrator.select_opponent(&Choice::ALL).await;
    info!(%choice, "Generated random choice");
    Json(choice.into())
}

/// Health check - /health
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok", "service": "player_service" }))
}
