//! Use cases
//!
//! Application-level operations that orchestrate domain logic:
//!
//! - [`admission_gate`]: global FIFO concurrency ceiling
//! - [`poll_job`]: submit-then-poll state machine for one job
//! - [`fallback`]: sequential walk over candidate models
//! - [`generate_reply`]: the inbound `generate reply` operation

pub mod admission_gate;
pub mod fallback;
pub mod generate_reply;
pub mod poll_job;
