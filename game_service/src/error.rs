//! Game service error types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use shared::ErrorResponse;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameServiceError {
    #[error("Invalid game choices.")]
    InvalidChoices,

    #[error("Server startup failed: {message}")]
    ServerStartup { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GameServiceResult<T> = Result<T, GameServiceError>;

impl IntoResponse for GameServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            GameServiceError::InvalidChoices => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
