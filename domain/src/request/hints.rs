//! Context hints derived from the user's message.
//!
//! Hints are cheap keyword heuristics over Hinglish chat text. They steer
//! the prompt's length guidance, the generation length budget and the
//! sampling temperature; they never block a request.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static GREETING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(hi|hello|hey|good morning|good evening|good night|namaste|hii|hiii)")
        .expect("valid greeting pattern")
});

static QUESTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\?|what|how|why|when|where|who|kya|kaise|kab|kahan|kaun")
        .expect("valid question pattern")
});

static SEXUAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"sex|fuck|chod|lund|chut|gaand|randi|kutiya|pelo|pregnant|cum|orgasm")
        .expect("valid sexual pattern")
});

static EMOTIONAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"love|miss|sad|happy|angry|excited|pyaar|yaad|khush|udaas")
        .expect("valid emotional pattern")
});

static COMPLIMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"beautiful|cute|hot|sexy|gorgeous|pretty|amazing|wonderful|sundar|khubsurat")
        .expect("valid compliment pattern")
});

static SUPPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"help|problem|issue|sad|depressed|upset|pareshan|tension|dikkat")
        .expect("valid support pattern")
});

/// Flags derived from a single user message (Value Object)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextHints {
    pub is_question: bool,
    pub is_greeting: bool,
    pub is_emotional: bool,
    pub is_sexual: bool,
    pub is_compliment: bool,
    pub needs_support: bool,
    pub has_emojis: bool,
    /// Message length in characters
    pub length: usize,
}

impl ContextHints {
    /// Derive hints from raw user text. Matching is case-insensitive and
    /// substring based.
    pub fn analyze(message: &str) -> Self {
        let lower = message.to_lowercase();
        Self {
            is_question: QUESTION.is_match(&lower),
            is_greeting: GREETING.is_match(&lower),
            is_emotional: EMOTIONAL.is_match(&lower),
            is_sexual: SEXUAL.is_match(&lower),
            is_compliment: COMPLIMENT.is_match(&lower),
            needs_support: SUPPORT.is_match(&lower),
            has_emojis: message.chars().any(is_emoji),
            length: message.chars().count(),
        }
    }

    /// Generation length budget (provider `max_length`, in tokens)
    pub fn reply_length(&self) -> u32 {
        if self.is_question {
            150
        } else if self.needs_support {
            120
        } else if self.is_greeting {
            80
        } else {
            100
        }
    }

    /// Human-readable length target for the prompt's formatting rules
    pub fn sentence_budget(&self) -> &'static str {
        if self.is_question {
            "2-4 sentences"
        } else if self.needs_support {
            "2-3 sentences"
        } else if self.is_greeting {
            "1 short sentence"
        } else {
            "1-3 sentences"
        }
    }
}

fn is_emoji(c: char) -> bool {
    matches!(
        c as u32,
        0x1F600..=0x1F64F
            | 0x1F300..=0x1F5FF
            | 0x1F680..=0x1F6FF
            | 0x1F1E0..=0x1F1FF
            | 0x2600..=0x26FF
            | 0x2700..=0x27BF
    )
}
