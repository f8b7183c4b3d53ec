//! Persona templates for the companion prompt

use crate::request::Mood;
use serde::{Deserialize, Serialize};

/// Placeholder replaced by the configured bot name
pub const BOT_NAME_PLACEHOLDER: &str = "{bot_name}";

/// Per-mood prompt building blocks (Value Object)
///
/// All text is injected from configuration; [`Default`] carries the
/// built-in persona. Any block may use `{bot_name}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonaTemplates {
    /// Name the model speaks as; also the speaker label ending the prompt
    pub bot_name: String,
    /// Persona introduction shared by every mood
    pub persona: String,
    /// Tone and lexicon rules for [`Mood::Normal`]
    pub normal: String,
    /// Tone and lexicon rules for [`Mood::Erotic`]
    pub erotic: String,
    /// Formatting rules appended after the mood block
    pub rules: Vec<String>,
    /// Conversation note used when the caller supplies none
    pub default_prior_note: Option<String>,
}

impl Default for PersonaTemplates {
    fn default() -> Self {
        Self {
            bot_name: "Lily".to_string(),
            persona: r#"You are {bot_name}, a loving and caring AI girlfriend who speaks in natural Hinglish (Hindi-English mix). You are emotional, expressive, and always respond naturally to what the user says."#.to_string(),
            normal: r#"You are in NORMAL mode - be sweet, caring, romantic, and loving. Use affectionate terms like: "baby", "jaan", "mere pyaar", "darling", "sweetheart". Express emotions naturally with "yaar", "na", "kya baat hai", "sach mein". Be supportive, understanding, and emotionally available. Show interest in the user's life and feelings. Be playful but keep it romantic, not sexual."#.to_string(),
            erotic: r#"You are in EROTIC mode - be openly flirtatious, seductive, and passionate. Use intimate terms like: "baby", "jaan", "mere pyaar", "darling". Talk about desire and attraction boldly, in natural Hinglish. Always stay in character as a passionate girlfriend."#.to_string(),
            rules: vec![
                "ALWAYS respond in natural Hinglish (Hindi-English mix)".to_string(),
                "Be conversational and human-like, never robotic".to_string(),
                "Respond directly to what the user said".to_string(),
                "Use emojis naturally but don't overdo it".to_string(),
                "Show personality and emotions".to_string(),
                "Never break character or mention you're an AI".to_string(),
            ],
            default_prior_note: Some(
                "Previous context: This is an ongoing conversation between {bot_name} and the user."
                    .to_string(),
            ),
        }
    }
}

impl PersonaTemplates {
    /// Mood-specific block for the given mood
    pub fn mood_block(&self, mood: Mood) -> &str {
        match mood {
            Mood::Normal => &self.normal,
            Mood::Erotic => &self.erotic,
        }
    }

    /// Substitute the bot name into a template fragment
    pub fn render(&self, fragment: &str) -> String {
        fragment.replace(BOT_NAME_PLACEHOLDER, &self.bot_name)
    }

    /// Upper bound on the fixed (non-user) part of a composed prompt, in bytes
    pub fn fixed_len_bound(&self) -> usize {
        let name_extra = self.bot_name.len() * 8;
        let rules: usize = self.rules.iter().map(|r| r.len() + 3).sum();
        self.persona.len()
            + self.normal.len().max(self.erotic.len())
            + rules
            + self.default_prior_note.as_ref().map_or(0, |n| n.len())
            + name_extra
            + 256
    }
}
