//! Single-shot prompt composition
//!
//! The provider takes plain completion prompts, so persona, mood rules,
//! formatting rules and the user turn are flattened into one string that
//! ends with the bot's speaker label.

use super::template::PersonaTemplates;
use crate::request::{ContextHints, InferenceRequest, Mood};

/// Builds completion prompts from persona templates. Pure and deterministic.
#[derive(Debug, Clone, Default)]
pub struct PromptComposer {
    templates: PersonaTemplates,
}

impl PromptComposer {
    pub fn new(templates: PersonaTemplates) -> Self {
        Self { templates }
    }

    pub fn templates(&self) -> &PersonaTemplates {
        &self.templates
    }

    /// Compose the prompt for a request
    pub fn compose_request(&self, request: &InferenceRequest) -> String {
        self.compose(
            request.mood(),
            request.hints(),
            request.user_text(),
            request.prior_turn_note(),
        )
    }

    /// Compose the prompt from its parts
    ///
    /// When `prior_turn_note` is `None` the template's default note is used.
    pub fn compose(
        &self,
        mood: Mood,
        hints: &ContextHints,
        user_text: &str,
        prior_turn_note: Option<&str>,
    ) -> String {
        let t = &self.templates;
        let mut prompt = t.render(&t.persona);
        prompt.push('\n');
        prompt.push_str(&t.render(t.mood_block(mood)));

        prompt.push_str("\n\nImportant rules:");
        for rule in &t.rules {
            prompt.push_str("\n- ");
            prompt.push_str(&t.render(rule));
        }
        prompt.push_str(&format!(
            "\n- Keep responses {} unless user asks for more",
            hints.sentence_budget()
        ));

        if let Some(note) = prior_turn_note.or(t.default_prior_note.as_deref()) {
            prompt.push_str("\n\n");
            prompt.push_str(&t.render(note));
        }

        prompt.push_str(&format!(
            "\n\nUser: {}\n{}:",
            user_text.trim(),
            t.bot_name
        ));
        prompt
    }
}
