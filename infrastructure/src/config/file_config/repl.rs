//! REPL configuration from TOML (`[repl]` section)

use companion_domain::Mood;
use serde::{Deserialize, Serialize};

/// Raw REPL configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Show attempt progress while a reply is generated
    pub show_progress: bool,
    /// Path to history file
    pub history_file: Option<String>,
    /// Mood a chat session starts in
    pub default_mood: Mood,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
            default_mood: Mood::Normal,
        }
    }
}
