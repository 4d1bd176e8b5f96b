//! Dependency traits with mockall annotations for testing
//!
//! The orchestrator talks to its three collaborators through these traits so
//! the round flow can be exercised with mocks. The real implementations live
//! in [`crate::services`]. Timeout bounding happens in the orchestrator, not
//! here, so mocked dependencies run under the same budget as real ones.

use shared::{Choice, Outcome, ScoreEntry};

use crate::error::PlayerResult;

/// Remote randomness source used for opponent selection.
///
/// Returns an integer expected to be in [1, 100]; anything else is handled
/// by the caller as a fallback trigger.
#[mockall::automock]
#[async_trait::async_trait]
pub trait RandomSource: Send + Sync {
    async fn random_number(&self) -> PlayerResult<i64>;
}

/// Remote resolution engine client
#[mockall::automock]
#[async_trait::async_trait]
pub trait GameClient: Send + Sync {
    /// Resolve a round from the player's perspective
    async fn compute(&self, player: Choice, computer: Choice) -> PlayerResult<Outcome>;
}

/// Remote score ledger client
#[mockall::automock]
#[async_trait::async_trait]
pub trait ScoreClient: Send + Sync {
    async fn record(&self, entry: ScoreEntry) -> PlayerResult<()>;
}
