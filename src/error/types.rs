// src/error/types.rs
use thiserror::Error;

/// Error kinds surfaced by catalog lookups and process wiring.
///
/// `Transport`, `NotFound` and `Decode` are deliberately distinct so callers
/// can react differently to "the catalog has no such card" versus "the
/// catalog could not be reached" (see `ResolutionOutcome`).
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Catalog transport error: {0}")]
    Transport(String),

    #[error("No card matches the requested name")]
    NotFound,

    #[error("Malformed catalog response: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// True when the catalog explicitly reported zero matches (404).
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound)
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::Decode(err.to_string())
        } else {
            AppError::Transport(err.to_string())
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
