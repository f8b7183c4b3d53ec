//! Error types for the Horde adapter

use companion_application::GatewayError;
use reqwest::StatusCode;
use thiserror::Error;

/// Result type alias for Horde operations
pub type Result<T> = std::result::Result<T, HordeError>;

/// Errors that can occur when talking to the Horde API
#[derive(Error, Debug)]
pub enum HordeError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    #[error("Horde returned HTTP {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Submission accepted without a job id")]
    MissingJobId,
}

impl From<HordeError> for GatewayError {
    fn from(err: HordeError) -> Self {
        match err {
            HordeError::Request(e) if e.is_decode() => GatewayError::Decode(e.to_string()),
            HordeError::Request(e) => GatewayError::Transport(e.to_string()),
            HordeError::ClientBuild(msg) => GatewayError::Transport(msg),
            HordeError::Status { status, .. } if status == StatusCode::TOO_MANY_REQUESTS => {
                GatewayError::RateLimited {
                    status: status.as_u16(),
                }
            }
            HordeError::Status { status, body } => GatewayError::Http {
                status: status.as_u16(),
                body,
            },
            HordeError::MissingJobId => GatewayError::MissingJobId,
        }
    }
}
