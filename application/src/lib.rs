//! Application layer for horde-companion
//!
//! This crate contains the inference orchestration use cases, the port
//! definitions they drive, and their configuration. It depends only on the
//! domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::OrchestrationParams;
pub use ports::{
    generation_gateway::{GatewayError, GenerationGateway, JobId, JobStatus, JobSubmission},
    progress::{AttemptNotifier, NoProgress},
};
pub use use_cases::admission_gate::{AdmissionGate, AdmissionSlot, GateClosed};
pub use use_cases::fallback::FallbackSequencer;
pub use use_cases::generate_reply::{GenerateReplyInput, GenerateReplyUseCase};
pub use use_cases::poll_job::{Job, JobPoller};
