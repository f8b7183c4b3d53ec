//! Configuration loading for horde-companion
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `COMPANION_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./companion.toml` or `./.companion.toml`
//! 4. Global: `<config_dir>/horde-companion/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ANONYMOUS_API_KEY, ConfigValidationError, FileConfig, FileOrchestrationConfig,
    FileProviderConfig, FileReplConfig,
};
pub use loader::{ConfigError, ConfigLoader};
