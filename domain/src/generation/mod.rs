//! Generation domain
//!
//! Request-independent generation parameters, the per-request sampling
//! policy, and the closed outcome types of a job and of an orchestration
//! call.

pub mod outcome;
pub mod params;
pub mod sampling;

pub use outcome::{AttemptFailure, JobOutcome, OrchestrationFailure};
pub use params::GenerationParams;
pub use sampling::SamplingPolicy;
