//! Outcomes of a single generation job and of a whole orchestration call

use crate::reply::Rejection;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Terminal result of one job against one candidate model
///
/// The set is closed: the fallback walk matches on all four variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobOutcome {
    /// The provider finished and returned generated text (unvalidated)
    Success(String),
    /// The provider reported the generation as failed
    Faulted,
    /// The poll ceiling was reached without a terminal status
    TimedOut,
    /// The job could not be submitted
    TransportError(String),
}

impl JobOutcome {
    /// Short label for log fields
    pub fn as_str(&self) -> &'static str {
        match self {
            JobOutcome::Success(_) => "success",
            JobOutcome::Faulted => "faulted",
            JobOutcome::TimedOut => "timed_out",
            JobOutcome::TransportError(_) => "submit_failed",
        }
    }
}

/// Why a single candidate did not produce a reply
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum AttemptFailure {
    #[error("submission failed: {0}")]
    SubmitFailed(String),

    #[error("generation faulted")]
    Faulted,

    #[error("polling timed out")]
    TimedOut,

    #[error("reply rejected: {0}")]
    Rejected(Rejection),
}

/// Terminal failure of one orchestration call
///
/// Carries no per-model detail; that goes to the log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrchestrationFailure {
    #[error("all {attempted} candidate models failed to produce a usable reply")]
    AllCandidatesExhausted { attempted: usize },

    #[error("not accepting new messages")]
    Closed,
}
