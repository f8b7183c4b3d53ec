//! Request domain
//!
//! Everything derived from one inbound user message before any provider
//! call is made.

pub mod entities;
pub mod hints;
pub mod mood;

pub use entities::InferenceRequest;
pub use hints::ContextHints;
pub use mood::Mood;
