//! Score service: the bounded score ledger
//!
//! Keeps the last ten recorded rounds in memory, evicting the oldest entry
//! on overflow. Volatile by design: nothing survives a restart.

pub mod core;
pub mod error;
pub mod web;

pub use self::core::ScoreLedger;
pub use error::{ScoreServiceError, ScoreServiceResult};
