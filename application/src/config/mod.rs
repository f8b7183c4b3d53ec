//! Application-level configuration.
//!
//! - [`OrchestrationParams`]: admission ceiling, poll timing, fallback delay

pub mod orchestration_params;

pub use orchestration_params::OrchestrationParams;
