//! Round orchestration
//!
//! One orchestrator handles one play request end to end: validate the player
//! choice, select an opponent, resolve the round, record the score, compose
//! the response. Failure policy per step:
//!
//! - validation failures abort before any dependency call
//! - opponent selection degrades to local randomness, never fails outward
//! - resolution failures abort the round (a guessed outcome would corrupt
//!   the recorded history)
//! - score persistence failures are logged and swallowed

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use rand::Rng;
use tokio::time::timeout;
use tracing::{info, warn};

use shared::{Choice, ChoiceInput, Outcome, PlayRequest, PlayResponse, ScoreEntry, ANONYMOUS_USER};

use crate::core::FactCorpus;
use crate::error::{PlayerError, PlayerResult};
use crate::traits::{GameClient, RandomSource, ScoreClient};

/// Budget for each outbound dependency call
pub const REMOTE_CALL_TIMEOUT: Duration = Duration::from_secs(5);

/// Stateless per-request coordinator over the three injected dependencies
pub struct RoundOrchestrator<R, G, S>
where
    R: RandomSource,
    G: GameClient,
    S: ScoreClient,
{
    random_source: R,
    game: G,
    score: S,
    facts: Arc<FactCorpus>,
    call_timeout: Duration,
}

impl<R, G, S> RoundOrchestrator<R, G, S>
where
    R: RandomSource,
    G: GameClient,
    S: ScoreClient,
{
    /// Create a new orchestrator with injected dependencies
    pub fn new(random_source: R, game: G, score: S, facts: Arc<FactCorpus>) -> Self {
        Self {
            random_source,
            game,
            score,
            facts,
            call_timeout: REMOTE_CALL_TIMEOUT,
        }
    }

    /// Override the per-call timeout budget (tests use a short one)
    pub fn with_call_timeout(mut self, call_timeout: Duration) -> Self {
        self.call_timeout = call_timeout;
        self
    }

    /// Play one round
    pub async fn play(&self, request: PlayRequest) -> PlayerResult<PlayResponse> {
        let player_choice = validate_choice(request.player_choice.as_ref())?;

        let computer_choice = self.select_opponent(&Choice::ALL).await;
        let result = self.resolve(player_choice, computer_choice).await?;

        let user_id = normalize_user_id(request.user_id);
        self.record_score(&user_id, player_choice, computer_choice, result)
            .await;

        let fun_fact = self.facts.pick(player_choice, computer_choice, result);
        info!(%player_choice, %computer_choice, %result, user_id, "Round complete");

        Ok(PlayResponse {
            player_choice,
            computer_choice,
            result,
            fun_fact,
        })
    }

    /// Select the opponent's choice from `candidates`.
    ///
    /// Prefers the remote randomness source; an out-of-range number, a
    /// malformed response, a transport error or a timeout all degrade to a
    /// local uniform pick. This step never fails outward.
    pub async fn select_opponent(&self, candidates: &[Choice]) -> Choice {
        debug_assert!(!candidates.is_empty());

        match timeout(self.call_timeout, self.random_source.random_number()).await {
            Ok(Ok(n)) if (1..=100).contains(&n) => {
                let index = (n - 1) as usize % candidates.len();
                candidates[index]
            }
            Ok(Ok(n)) => {
                warn!(random_number = n, "Random number out of range, falling back to local random generation");
                local_pick(candidates)
            }
            Ok(Err(e)) => {
                warn!(error = %e, "Random number service failed, falling back to local random generation");
                local_pick(candidates)
            }
            Err(_) => {
                warn!("Random number service timed out, falling back to local random generation");
                local_pick(candidates)
            }
        }
    }

    /// Resolve the round via the game service.
    ///
    /// This step may not degrade locally; any failure aborts the round.
    async fn resolve(&self, player: Choice, computer: Choice) -> PlayerResult<Outcome> {
        match timeout(self.call_timeout, self.game.compute(player, computer)).await {
            Ok(Ok(outcome)) => Ok(outcome),
            Ok(Err(e)) => {
                warn!(error = %e, "Game service call failed");
                Err(PlayerError::GameUnavailable {
                    message: e.to_string(),
                })
            }
            Err(_) => {
                warn!("Game service timed out");
                Err(PlayerError::GameTimeout)
            }
        }
    }

    /// Best-effort score persistence; failures never fail the round
    async fn record_score(&self, user_id: &str, player: Choice, computer: Choice, result: Outcome) {
        let entry = ScoreEntry {
            user_id: user_id.to_string(),
            player_choice: player,
            computer_choice: computer,
            result,
            timestamp: Utc::now(),
        };

        match timeout(self.call_timeout, self.score.record(entry)).await {
            Ok(Ok(())) => info!(user_id, %result, "Score saved"),
            Ok(Err(e)) => {
                warn!(user_id, error = %e, "Score service call failed, continuing without saving score");
            }
            Err(_) => {
                warn!(user_id, "Score service timed out, continuing without saving score");
            }
        }
    }
}

/// Resolve the inbound choice value to a real [`Choice`].
///
/// Absence, the legacy `-1` sentinel and blank names are all "choice
/// required"; a present but unknown name or id is "invalid choice".
pub fn validate_choice(input: Option<&ChoiceInput>) -> PlayerResult<Choice> {
    let input = input.ok_or(PlayerError::ChoiceRequired)?;
    match input {
        ChoiceInput::Id(-1) => Err(PlayerError::ChoiceRequired),
        ChoiceInput::Id(id) => Choice::from_id(*id).ok_or_else(PlayerError::invalid_choice),
        ChoiceInput::Name(name) if name.trim().is_empty() => Err(PlayerError::ChoiceRequired),
        ChoiceInput::Name(name) => name.parse().map_err(|_| PlayerError::invalid_choice()),
    }
}

fn normalize_user_id(user_id: Option<String>) -> String {
    match user_id {
        Some(id) if !id.trim().is_empty() => id,
        _ => ANONYMOUS_USER.to_string(),
    }
}

fn local_pick(candidates: &[Choice]) -> Choice {
    let index = rand::thread_rng().gen_range(0..candidates.len());
    candidates[index]
}
