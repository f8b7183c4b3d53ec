//! Presentation layer for horde-companion
//!
//! This crate contains CLI definitions, reply formatting, attempt
//! progress reporters, and the interactive chat interface.

pub mod chat;
pub mod cli;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::{ChatRepl, ReplCommand};
pub use cli::commands::Cli;
pub use config::ReplConfig;
pub use output::console::{APOLOGY_MESSAGE, ReplyFormatter};
pub use progress::reporter::{ProgressReporter, SimpleProgress};
