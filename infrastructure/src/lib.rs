//! Infrastructure layer for horde-companion
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod horde;

// Re-export commonly used types
pub use config::{
    ANONYMOUS_API_KEY, ConfigError, ConfigLoader, ConfigValidationError, FileConfig,
    FileOrchestrationConfig, FileProviderConfig, FileReplConfig,
};
pub use horde::{HordeError, HordeGateway};
