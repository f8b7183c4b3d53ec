//! Domain layer for horde-companion
//!
//! This crate contains the pure core of reply generation: request
//! analysis, prompt composition, sampling policy and reply validation.
//! It has no dependencies on the async runtime, the provider protocol or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! ## Candidate models
//!
//! The provider routes each job to one named model. A call walks an ordered
//! [`ModelCandidates`] list until one model yields a [`ValidatedReply`].
//!
//! ## Outcomes
//!
//! - [`JobOutcome`]: the closed result set of one job
//! - [`AttemptFailure`]: why one candidate produced nothing usable
//! - [`OrchestrationFailure`]: every candidate failed, or the gate was closed

pub mod core;
pub mod generation;
pub mod prompt;
pub mod reply;
pub mod request;

// Re-export commonly used types
pub use core::{
    error::DomainError,
    model::{CandidateModel, ModelCandidates},
};
pub use generation::{
    AttemptFailure, GenerationParams, JobOutcome, OrchestrationFailure, SamplingPolicy,
};
pub use prompt::{PersonaTemplates, PromptComposer};
pub use reply::{Rejection, ResponseValidator, ValidatedReply};
pub use request::{ContextHints, InferenceRequest, Mood};
