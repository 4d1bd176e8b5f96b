//! Score service error types
//!
//! Inbound entries are validated by deserialization (an unknown result label
//! never reaches the ledger), so only startup failures remain.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoreServiceError {
    #[error("Server startup failed: {message}")]
    ServerStartup { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ScoreServiceResult<T> = Result<T, ScoreServiceError>;
