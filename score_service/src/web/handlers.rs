//! Score endpoint handlers

use std::sync::Arc;

use axum::extract::State;
use axum::response::Json;
use serde_json::{json, Value};
use tracing::info;

use shared::{ScoreEntry, ANONYMOUS_USER};

use crate::core::ledger::DEFAULT_CAPACITY;
use crate::core::ScoreLedger;

/// Record a round outcome - /api/score/add
pub async fn add(State(ledger): State<Arc<ScoreLedger>>, Json(mut entry): Json<ScoreEntry>) -> Json<Value> {
    if entry.user_id.trim().is_empty() {
        entry.user_id = ANONYMOUS_USER.to_string();
    }

    info!(
        user_id = %entry.user_id,
        player = %entry.player_choice,
        computer = %entry.computer_choice,
        result = %entry.result,
        "Score added"
    );
    ledger.record(entry).await;

    Json(json!({ "status": "ok" }))
}

/// Most recent outcomes, newest first - /api/score/recent
pub async fn recent(State(ledger): State<Arc<ScoreLedger>>) -> Json<Vec<ScoreEntry>> {
    let entries = ledger.recent(DEFAULT_CAPACITY).await;
    info!("Retrieved {} recent game results", entries.len());
    Json(entries)
}

/// Clear the ledger - /api/score/reset
pub async fn reset(State(ledger): State<Arc<ScoreLedger>>) -> Json<Value> {
    ledger.reset().await;
    info!("Scoreboard reset");
    Json(json!({ "status": "ok" }))
}

/// Health check - /health
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok", "service": "score_service" }))
}
