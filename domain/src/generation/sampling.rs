//! Sampling temperature policy

use crate::request::{ContextHints, Mood};
use serde::{Deserialize, Serialize};

/// Temperature adjustments by mood and message content (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingPolicy {
    pub base_temperature: f32,
    pub erotic_bonus: f32,
    pub emotional_bonus: f32,
    pub sexual_bonus: f32,
    pub min_temperature: f32,
    pub max_temperature: f32,
}

impl Default for SamplingPolicy {
    fn default() -> Self {
        Self {
            base_temperature: 0.9,
            erotic_bonus: 0.1,
            emotional_bonus: 0.05,
            sexual_bonus: 0.1,
            min_temperature: 0.7,
            max_temperature: 1.0,
        }
    }
}

impl SamplingPolicy {
    /// Temperature for one request, clamped to `[min, max]`
    pub fn temperature(&self, mood: Mood, hints: &ContextHints) -> f32 {
        let mut temp = self.base_temperature;
        if mood == Mood::Erotic {
            temp += self.erotic_bonus;
        }
        if hints.is_emotional {
            temp += self.emotional_bonus;
        }
        if hints.is_sexual {
            temp += self.sexual_bonus;
        }
        temp.clamp(self.min_temperature, self.max_temperature)
    }

    /// Name of the first field that is NaN or infinite, if any
    ///
    /// `temperature` requires every field finite and `min <= max`.
    pub fn non_finite_field(&self) -> Option<&'static str> {
        [
            ("base_temperature", self.base_temperature),
            ("erotic_bonus", self.erotic_bonus),
            ("emotional_bonus", self.emotional_bonus),
            ("sexual_bonus", self.sexual_bonus),
            ("min_temperature", self.min_temperature),
            ("max_temperature", self.max_temperature),
        ]
        .into_iter()
        .find(|(_, value)| !value.is_finite())
        .map(|(name, _)| name)
    }
}
