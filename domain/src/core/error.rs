//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("No candidate models configured")]
    EmptyCandidates,

    #[error("Invalid model: {0:?}")]
    InvalidModel(String),

    #[error("Invalid mood: {0} (expected 'normal' or 'erotic')")]
    InvalidMood(String),
}
