//! Generation gateway port
//!
//! Defines the submit-then-poll interface of the text generation provider.
//! There is no push notification and no cancel primitive: a job is submitted
//! once and its status is queried until it is terminal.

use async_trait::async_trait;
use companion_domain::{CandidateModel, GenerationParams};
use thiserror::Error;

/// Errors that can occur during gateway operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Rate limited by provider (HTTP {status})")]
    RateLimited { status: u16 },

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Submission response carried no job id")]
    MissingJobId,

    #[error("Failed to decode provider response: {0}")]
    Decode(String),
}

impl GatewayError {
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, GatewayError::RateLimited { .. })
    }
}

/// Opaque provider job identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JobId(String);

impl JobId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything the provider needs to start one job on one model
#[derive(Debug, Clone, Copy)]
pub struct JobSubmission<'a> {
    pub model: &'a CandidateModel,
    pub prompt: &'a str,
    pub max_length: u32,
    pub temperature: f32,
    pub params: &'a GenerationParams,
}

/// One status snapshot of a submitted job
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobStatus {
    pub done: bool,
    pub faulted: bool,
    pub generations: Vec<String>,
}

impl JobStatus {
    pub fn pending() -> Self {
        Self::default()
    }

    pub fn completed(text: impl Into<String>) -> Self {
        Self {
            done: true,
            faulted: false,
            generations: vec![text.into()],
        }
    }

    pub fn faulted() -> Self {
        Self {
            faulted: true,
            ..Self::default()
        }
    }
}

/// Gateway to the asynchronous text generation provider
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait GenerationGateway: Send + Sync {
    /// Submit a job, returning the provider's job id
    async fn submit(&self, job: &JobSubmission<'_>) -> Result<JobId, GatewayError>;

    /// Query the current status of a job
    async fn status(&self, job_id: &JobId) -> Result<JobStatus, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_constructors() {
        assert!(!JobStatus::pending().done);
        assert_eq!(JobStatus::completed("hi").generations, vec!["hi".to_string()]);
        assert!(JobStatus::faulted().faulted);
    }

    #[test]
    fn test_rate_limited_check() {
        assert!(GatewayError::RateLimited { status: 429 }.is_rate_limited());
        assert!(!GatewayError::MissingJobId.is_rate_limited());
    }
}
