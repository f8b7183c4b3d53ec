//! Conversation mood selected by the user.
//!
//! The mood picks the persona block of the prompt and nudges the sampling
//! temperature.
//!
//! # Examples
//!
//! ```
//! use companion_domain::request::mood::Mood;
//!
//! let mood: Mood = "erotic".parse().unwrap();
//! assert_eq!(mood, Mood::Erotic);
//! assert_eq!(mood.as_str(), "erotic");
//! ```

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    /// Sweet, caring, romantic.
    #[default]
    Normal,
    /// Adult, flirtatious.
    Erotic,
}

impl Mood {
    pub fn as_str(&self) -> &str {
        match self {
            Mood::Normal => "normal",
            Mood::Erotic => "erotic",
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Mood {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(Mood::Normal),
            "erotic" => Ok(Mood::Erotic),
            other => Err(DomainError::InvalidMood(other.to_string())),
        }
    }
}
