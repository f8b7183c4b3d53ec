//! AI Horde text generation adapter
//!
//! Implements [`GenerationGateway`](companion_application::GenerationGateway)
//! over the Horde v2 REST API:
//!
//! ```text
//! POST {base}/generate/text/async        -> { "id": "..." }
//! GET  {base}/generate/text/status/{id}  -> { "done", "faulted", "generations": [{ "text" }] }
//! ```

pub mod error;
pub mod gateway;
pub mod protocol;

pub use error::HordeError;
pub use gateway::HordeGateway;
