//! Structural validation of raw generated text
//!
//! The provider returns unvalidated completions: echoed speaker labels,
//! run-on continuations of the conversation, list markers. The validator
//! normalizes those away and rejects whatever is left if it is too small to
//! be a reply. Content is never judged.

use super::entities::ValidatedReply;
use crate::core::model::CandidateModel;
use crate::core::string::word_count;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a raw completion was refused
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum Rejection {
    #[error("empty reply")]
    Empty,

    #[error("reply too short ({chars} chars)")]
    TooShort { chars: usize },

    #[error("reply has too few words ({words})")]
    TooFewWords { words: usize },
}

const BULLETS: &[char] = &['-', '*', '•'];

/// Normalizes and accepts or rejects raw generated text. Deterministic, no I/O.
#[derive(Debug, Clone)]
pub struct ResponseValidator {
    /// Speaker labels including the trailing colon, e.g. `"User:"`
    labels: Vec<String>,
    min_chars: usize,
    min_words: usize,
}

impl Default for ResponseValidator {
    fn default() -> Self {
        Self::for_bot("Lily")
    }
}

impl ResponseValidator {
    /// Validator that strips the bot's own label plus the common role labels
    pub fn for_bot(bot_name: &str) -> Self {
        let mut labels = vec![format!("{}:", bot_name.trim())];
        for role in ["User", "Human", "Assistant"] {
            let label = format!("{role}:");
            if !labels.iter().any(|l| l.eq_ignore_ascii_case(&label)) {
                labels.push(label);
            }
        }
        Self {
            labels,
            min_chars: 5,
            min_words: 2,
        }
    }

    /// Validate a completion produced by `source`
    pub fn validate(
        &self,
        raw: &str,
        source: &CandidateModel,
    ) -> Result<ValidatedReply, Rejection> {
        let text = self.clean(raw)?;
        Ok(ValidatedReply::new(text, source.clone()))
    }

    /// Normalize `raw` and check its structure, returning the cleaned text
    pub fn clean(&self, raw: &str) -> Result<String, Rejection> {
        if raw.trim().is_empty() {
            return Err(Rejection::Empty);
        }

        let normalized = normalize_line_endings(raw);
        let mut text = normalized.trim();

        // Labels and bullets can nest ("- Lily: ..."), strip until stable
        loop {
            let before = text.len();
            text = self.strip_label(text).trim_start();
            text = text.trim_start_matches(BULLETS).trim_start();
            if let Some(end) = text.find("\n\n") {
                text = &text[..end];
            }
            text = text.trim();
            if text.len() == before {
                break;
            }
        }

        if text.is_empty() {
            return Err(Rejection::Empty);
        }

        let chars = text.chars().count();
        if chars < self.min_chars {
            return Err(Rejection::TooShort { chars });
        }

        let words = word_count(text);
        if words < self.min_words {
            return Err(Rejection::TooFewWords { words });
        }

        Ok(text.to_string())
    }

    fn strip_label<'a>(&self, text: &'a str) -> &'a str {
        for label in &self.labels {
            if let Some(head) = text.get(..label.len())
                && head.eq_ignore_ascii_case(label)
            {
                return &text[label.len()..];
            }
        }
        text
    }
}

/// Map `\r\r\n`, `\r\n` and lone `\r` to `\n`
fn normalize_line_endings(raw: &str) -> String {
    raw.replace("\r\r\n", "\n")
        .replace("\r\n", "\n")
        .replace('\r', "\n")
}
