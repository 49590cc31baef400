//! Error Types

use thiserror::Error;

pub type TodoResult<T> = Result<T, TodoError>;

/// Errors surfaced by the todos frontend
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TodoError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Network error: {0}")]
    Transport(String),
    #[error("Service error ({status}): {message}")]
    Service { status: u16, message: String },
    #[error("Unexpected response: {0}")]
    Decode(String),
    #[error("Not signed in")]
    Unauthenticated,
}

impl From<serde_json::Error> for TodoError {
    fn from(e: serde_json::Error) -> Self {
        TodoError::Decode(e.to_string())
    }
}

impl From<serde_wasm_bindgen::Error> for TodoError {
    fn from(e: serde_wasm_bindgen::Error) -> Self {
        TodoError::Decode(e.to_string())
    }
}
