//! Inference request entity

use super::hints::ContextHints;
use super::mood::Mood;
use serde::Serialize;

/// One user message ready for orchestration
///
/// Built once per inbound message and consumed read-only by every
/// downstream component. Fields are private so the hints always match
/// the text they were derived from. Serialize-only for the same reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InferenceRequest {
    user_text: String,
    mood: Mood,
    hints: ContextHints,
    prior_turn_note: Option<String>,
}

impl InferenceRequest {
    /// Build a request, deriving the context hints from the text
    pub fn new(user_text: impl Into<String>, mood: Mood) -> Self {
        let user_text = user_text.into();
        let hints = ContextHints::analyze(&user_text);
        Self {
            user_text,
            mood,
            hints,
            prior_turn_note: None,
        }
    }

    /// Attach a note about the ongoing conversation, placed before the user turn
    pub fn with_prior_turn_note(mut self, note: impl Into<String>) -> Self {
        let note = note.into();
        self.prior_turn_note = (!note.trim().is_empty()).then_some(note);
        self
    }

    pub fn user_text(&self) -> &str {
        &self.user_text
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    pub fn hints(&self) -> &ContextHints {
        &self.hints
    }

    pub fn prior_turn_note(&self) -> Option<&str> {
        self.prior_turn_note.as_deref()
    }
}
