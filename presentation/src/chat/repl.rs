//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::config::ReplConfig;
use crate::output::console::ReplyFormatter;
use crate::progress::reporter::ProgressReporter;
use companion_application::{GenerateReplyInput, GenerateReplyUseCase, GenerationGateway};
use companion_domain::Mood;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use tracing::debug;

/// Slash command parsed from one REPL line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Quit,
    Help,
    Models,
    /// `/mood` with no argument
    ShowMood,
    SetMood(Mood),
    Unknown(String),
}

impl ReplCommand {
    /// Parse a line starting with `/`
    pub fn parse(line: &str) -> Self {
        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or_default();
        let arg = parts.next();

        match (command, arg) {
            ("/quit" | "/exit" | "/q", _) => Self::Quit,
            ("/help" | "/h" | "/?", _) => Self::Help,
            ("/models", _) => Self::Models,
            ("/mood", None) => Self::ShowMood,
            ("/mood", Some(value)) => match value.parse() {
                Ok(mood) => Self::SetMood(mood),
                Err(_) => Self::Unknown(line.to_string()),
            },
            _ => Self::Unknown(line.to_string()),
        }
    }
}

/// Interactive chat REPL
pub struct ChatRepl<G: GenerationGateway + ?Sized + 'static> {
    use_case: GenerateReplyUseCase<G>,
    config: ReplConfig,
    mood: Mood,
}

impl<G: GenerationGateway + ?Sized + 'static> ChatRepl<G> {
    /// Create a new ChatRepl
    pub fn new(use_case: GenerateReplyUseCase<G>, config: ReplConfig) -> Self {
        let mood = config.default_mood;
        Self {
            use_case,
            config,
            mood,
        }
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        // Try to load history
        let history_path = self.config.history_path();

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            let readline = rl.readline("You: ");

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    // Skip empty lines
                    if line.is_empty() {
                        continue;
                    }

                    // Handle commands
                    if line.starts_with('/') {
                        if self.handle_command(ReplCommand::parse(line)) {
                            break;
                        }
                        continue;
                    }

                    // Add to history
                    let _ = rl.add_history_entry(line);

                    self.process_message(line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        self.use_case.gate().close();

        // Save history
        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│        horde-companion - Chat Mode          │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Chatting with {} (mood: {})", self.config.bot_name, self.mood);
        println!();
        Self::print_help();
    }

    fn print_help() {
        println!("Commands:");
        println!("  /mood [normal|erotic] - Show or switch the mood");
        println!("  /models               - Show candidate models");
        println!("  /help, /h, /?         - Show this help");
        println!("  /quit, /exit, /q      - Exit chat");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    fn handle_command(&mut self, command: ReplCommand) -> bool {
        match command {
            ReplCommand::Quit => {
                println!("Bye!");
                true
            }
            ReplCommand::Help => {
                println!();
                Self::print_help();
                false
            }
            ReplCommand::Models => {
                println!();
                println!("Candidate models (tried in order):");
                println!("{}", ReplyFormatter::format_candidates(self.use_case.candidates()));
                println!();
                false
            }
            ReplCommand::ShowMood => {
                println!("Mood: {}", self.mood);
                false
            }
            ReplCommand::SetMood(mood) => {
                self.mood = mood;
                println!("Mood set to {}", mood);
                false
            }
            ReplCommand::Unknown(cmd) => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                false
            }
        }
    }

    async fn process_message(&self, message: &str) {
        let input = GenerateReplyInput::new(message, self.mood);

        let result = if self.config.show_progress {
            let progress = ProgressReporter::new();
            self.use_case.execute_with_progress(input, &progress).await
        } else {
            self.use_case.execute(input).await
        };

        if let Err(failure) = &result {
            debug!(error = %failure, "Substituting apology for failed reply");
        }
        println!("{}", ReplyFormatter::format_chat(&self.config.bot_name, &result));
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(ReplCommand::parse("/quit"), ReplCommand::Quit);
        assert_eq!(ReplCommand::parse("/q"), ReplCommand::Quit);
        assert_eq!(ReplCommand::parse("/?"), ReplCommand::Help);
        assert_eq!(ReplCommand::parse("/models"), ReplCommand::Models);
        assert_eq!(ReplCommand::parse("/mood"), ReplCommand::ShowMood);
        assert_eq!(
            ReplCommand::parse("/mood  EROTIC"),
            ReplCommand::SetMood(Mood::Erotic)
        );
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            ReplCommand::parse("/mood sleepy"),
            ReplCommand::Unknown("/mood sleepy".to_string())
        );
        assert_eq!(
            ReplCommand::parse("/dance"),
            ReplCommand::Unknown("/dance".to_string())
        );
    }
}
