//! Presentation-level configuration
//!
//! Configuration for REPL behavior, converted from the file config by the
//! binary.

use companion_domain::Mood;
use std::path::PathBuf;

/// REPL configuration for the presentation layer
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Show attempt progress while a reply is generated
    pub show_progress: bool,
    /// Path to history file (`None` = platform data dir)
    pub history_file: Option<PathBuf>,
    /// Mood a session starts in
    pub default_mood: Mood,
    /// Name the reply is attributed to
    pub bot_name: String,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
            default_mood: Mood::Normal,
            bot_name: "Lily".to_string(),
        }
    }
}

impl ReplConfig {
    /// History file location, falling back to `<data_dir>/horde-companion/history.txt`
    pub fn history_path(&self) -> Option<PathBuf> {
        self.history_file
            .clone()
            .or_else(|| dirs::data_dir().map(|p| p.join("horde-companion").join("history.txt")))
    }
}
