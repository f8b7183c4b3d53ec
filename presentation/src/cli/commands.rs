//! CLI command definitions

use clap::Parser;
use companion_domain::Mood;
use std::path::PathBuf;

/// CLI arguments for horde-companion
#[derive(Parser, Debug)]
#[command(name = "horde-companion")]
#[command(author, version, about = "Companion chatbot replies generated on the AI Horde")]
#[command(long_about = r#"
horde-companion turns a chat message into an in-character reply using
volunteer-run models on the AI Horde.

Each message is tried against an ordered list of candidate models. A model
that fails to submit, faults, times out or returns an unusable reply is
skipped and the next one is tried.

Configuration files are loaded from (in priority order):
1. COMPANION_* environment variables (e.g. COMPANION_ORCHESTRATION__MAX_CONCURRENT=3)
2. --config <path>     Explicit config file
3. ./companion.toml    Project-level config
4. ~/.config/horde-companion/config.toml   Global config

The API key is read from HORDE_API_KEY; without it the anonymous key is used.

Example:
  horde-companion "hey, how was your day?"
  horde-companion --mood erotic -m koboldcpp/Fimbulvetr-11B-v2 "miss me?"
  horde-companion --chat
"#)]
pub struct Cli {
    /// The message to reply to (not required in chat mode)
    pub message: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Conversation mood (defaults to repl.default_mood)
    #[arg(long, value_name = "MOOD")]
    pub mood: Option<Mood>,

    /// Candidate models in preference order (can be specified multiple times)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Vec<String>,

    /// Note about the ongoing conversation to include in the prompt
    #[arg(long, value_name = "TEXT")]
    pub note: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_message_with_models() {
        let cli = Cli::try_parse_from([
            "horde-companion",
            "-m",
            "a/one",
            "--model",
            "b/two",
            "--mood",
            "Erotic",
            "hello there",
        ])
        .unwrap();
        assert_eq!(cli.message.as_deref(), Some("hello there"));
        assert_eq!(cli.model, vec!["a/one", "b/two"]);
        assert_eq!(cli.mood, Some(Mood::Erotic));
        assert!(!cli.chat);
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from(["horde-companion", "--chat", "-vv", "-q", "--no-config"])
            .unwrap();
        assert!(cli.chat);
        assert_eq!(cli.verbose, 2);
        assert!(cli.quiet);
        assert!(cli.no_config);
        assert!(cli.mood.is_none());
    }

    #[test]
    fn test_rejects_unknown_mood() {
        assert!(Cli::try_parse_from(["horde-companion", "--mood", "grumpy", "hi"]).is_err());
    }
}
