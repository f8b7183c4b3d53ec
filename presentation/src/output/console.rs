//! Console output formatter for generated replies

use colored::Colorize;
use companion_domain::{ModelCandidates, OrchestrationFailure, ValidatedReply};

/// The single message shown when no candidate produced a usable reply
pub const APOLOGY_MESSAGE: &str = "Baby, thoda connection issue ho raha hai... try again? 🥺💕";

/// Formats replies for console display
pub struct ReplyFormatter;

impl ReplyFormatter {
    /// Text the user sees for one orchestration result
    ///
    /// A failure always becomes [`APOLOGY_MESSAGE`]; no model output or
    /// failure detail is shown.
    pub fn reply_text(result: &Result<ValidatedReply, OrchestrationFailure>) -> &str {
        match result {
            Ok(reply) => reply.text(),
            Err(_) => APOLOGY_MESSAGE,
        }
    }

    /// Chat-style line: `<bot>: <text>`
    pub fn format_chat(
        bot_name: &str,
        result: &Result<ValidatedReply, OrchestrationFailure>,
    ) -> String {
        let text = Self::reply_text(result);
        match result {
            Ok(_) => format!("{} {}", format!("{}:", bot_name).magenta().bold(), text),
            Err(_) => format!("{} {}", format!("{}:", bot_name).magenta().bold(), text.dimmed()),
        }
    }

    /// Source attribution line for verbose output
    pub fn format_source(reply: &ValidatedReply) -> String {
        format!("{} {}", "via".dimmed(), reply.source_model().as_str().dimmed())
    }

    pub fn format_candidates(candidates: &ModelCandidates) -> String {
        candidates
            .iter()
            .enumerate()
            .map(|(i, model)| format!("  {}. {}", i + 1, model))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use companion_domain::{CandidateModel, ResponseValidator};

    fn reply(text: &str) -> ValidatedReply {
        let model = CandidateModel::new("koboldcpp/Tiefighter").unwrap();
        ResponseValidator::for_bot("Lily").validate(text, &model).unwrap()
    }

    #[test]
    fn test_success_shows_reply_text() {
        let result = Ok(reply("Lily: Hey there, missed you!"));
        assert_eq!(ReplyFormatter::reply_text(&result), "Hey there, missed you!");
    }

    #[test]
    fn test_failure_shows_fixed_apology() {
        let result = Err(OrchestrationFailure::AllCandidatesExhausted { attempted: 5 });
        assert_eq!(ReplyFormatter::reply_text(&result), APOLOGY_MESSAGE);

        colored::control::set_override(false);
        let line = ReplyFormatter::format_chat("Lily", &result);
        assert_eq!(line, format!("Lily: {}", APOLOGY_MESSAGE));
        assert!(!line.contains("candidate"));
    }

    #[test]
    fn test_format_candidates_numbered() {
        let candidates = ModelCandidates::parse(&["a", "b"]).unwrap();
        assert_eq!(ReplyFormatter::format_candidates(&candidates), "  1. a\n  2. b");
    }
}
