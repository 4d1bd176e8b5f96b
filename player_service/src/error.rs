//! Player service error types
//!
//! Only validation errors and game-service failures ever reach the caller.
//! Random-source and score failures are absorbed inside the orchestrator, so
//! they never map to a status code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use thiserror::Error;

use shared::{Choice, ErrorResponse};

#[derive(Error, Debug)]
pub enum PlayerError {
    #[error("playerChoice is required.")]
    ChoiceRequired,

    #[error("Invalid choice. Choose {valid_choices}.")]
    InvalidChoice { valid_choices: String },

    #[error("Game service is currently unavailable: {message}")]
    GameUnavailable { message: String },

    #[error("Game service timed out.")]
    GameTimeout,

    #[error("Malformed dependency response: {message}")]
    InvalidResponse { message: String },

    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server startup failed: {message}")]
    ServerStartup { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type PlayerResult<T> = Result<T, PlayerError>;

impl PlayerError {
    /// Invalid-choice validation error enumerating the valid names
    pub fn invalid_choice() -> Self {
        PlayerError::InvalidChoice {
            valid_choices: Choice::valid_names(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            PlayerError::ChoiceRequired | PlayerError::InvalidChoice { .. }
        )
    }
}

impl IntoResponse for PlayerError {
    fn into_response(self) -> Response {
        let status = match &self {
            PlayerError::ChoiceRequired | PlayerError::InvalidChoice { .. } => {
                StatusCode::BAD_REQUEST
            }
            PlayerError::GameUnavailable { .. } | PlayerError::GameTimeout => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
