//! Player service: the round orchestrator
//!
//! Composes the three game dependencies for a single play request: pick an
//! opponent choice (remote randomness with a local fallback), resolve the
//! round via the game service, and record the outcome on the score ledger.
//! Each dependency sits behind a trait so the flow is testable without a
//! network.

pub mod core;
pub mod error;
pub mod services;
pub mod traits;
pub mod web;

pub use self::core::{FactCorpus, RoundOrchestrator};
pub use error::{PlayerError, PlayerResult};
pub use traits::{GameClient, RandomSource, ScoreClient};
