//! Shared error types for the FunGame services

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Invalid choice: {input}")]
    InvalidChoice { input: String },
}

pub type SharedResult<T> = Result<T, SharedError>;
