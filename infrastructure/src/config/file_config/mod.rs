//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod orchestration;
mod provider;
mod repl;

pub use orchestration::FileOrchestrationConfig;
pub use provider::{ANONYMOUS_API_KEY, FileProviderConfig};
pub use repl::FileReplConfig;

use companion_domain::{GenerationParams, PersonaTemplates, SamplingPolicy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("orchestration.max_concurrent cannot be 0")]
    ZeroConcurrency,

    #[error("orchestration.max_poll_attempts cannot be 0")]
    ZeroPollAttempts,

    #[error("orchestration.poll_interval_ms cannot be 0")]
    ZeroPollInterval,

    #[error("model name cannot be empty")]
    EmptyModelName,

    #[error("persona.bot_name cannot be empty")]
    EmptyBotName,

    #[error("sampling.{field} must be a finite number")]
    NonFiniteSampling { field: &'static str },

    #[error("sampling.min_temperature ({min}) is above sampling.max_temperature ({max})")]
    InvalidTemperatureRange { min: String, max: String },
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Horde connection settings
    pub provider: FileProviderConfig,
    /// Admission, polling and fallback settings
    pub orchestration: FileOrchestrationConfig,
    /// Temperature policy
    pub sampling: SamplingPolicy,
    /// Persona and prompt templates
    pub persona: PersonaTemplates,
    /// Fixed generation parameters
    pub generation: GenerationParams,
    /// REPL settings
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Validate the configuration, returning the first problem found
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let orchestration = &self.orchestration;
        if orchestration.max_concurrent == 0 {
            return Err(ConfigValidationError::ZeroConcurrency);
        }
        if orchestration.max_poll_attempts == 0 {
            return Err(ConfigValidationError::ZeroPollAttempts);
        }
        if orchestration.poll_interval_ms == 0 {
            return Err(ConfigValidationError::ZeroPollInterval);
        }

        // Check for empty model names
        for model in &orchestration.models {
            if model.trim().is_empty() {
                return Err(ConfigValidationError::EmptyModelName);
            }
        }

        if self.persona.bot_name.trim().is_empty() {
            return Err(ConfigValidationError::EmptyBotName);
        }

        if let Some(field) = self.sampling.non_finite_field() {
            return Err(ConfigValidationError::NonFiniteSampling { field });
        }

        if self.sampling.min_temperature > self.sampling.max_temperature {
            return Err(ConfigValidationError::InvalidTemperatureRange {
                min: self.sampling.min_temperature.to_string(),
                max: self.sampling.max_temperature.to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use companion_domain::Mood;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[provider]
api_key = "abc123"
client_agent = "my-bot:1.0:me@example.com"

[orchestration]
max_concurrent = 3
models = ["koboldcpp/Tiefighter", "koboldcpp/Psyfighter2"]
poll_interval_ms = 1500
inter_attempt_delay_ms = 0

[sampling]
base_temperature = 0.8

[persona]
bot_name = "Riya"

[generation]
stop_sequence = ["\nYou:"]

[repl]
show_progress = false
default_mood = "erotic"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.provider.api_key.as_deref(), Some("abc123"));
        assert_eq!(config.orchestration.max_concurrent, 3);
        assert_eq!(config.orchestration.models.len(), 2);
        // Unset keys keep their defaults
        assert_eq!(config.orchestration.max_poll_attempts, 60);
        assert!((config.sampling.base_temperature - 0.8).abs() < 1e-6);
        assert!((config.sampling.max_temperature - 1.0).abs() < 1e-6);
        assert_eq!(config.persona.bot_name, "Riya");
        assert!(config.persona.persona.contains("{bot_name}"));
        assert_eq!(config.generation.stop_sequence, vec!["\nYou:".to_string()]);
        assert_eq!(config.generation.top_k, 60);
        assert!(!config.repl.show_progress);
        assert_eq!(config.repl.default_mood, Mood::Erotic);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = FileConfig::default();
        assert!(config.orchestration.models.is_empty());
        assert_eq!(config.provider.submit_timeout_seconds, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = FileConfig::default();
        config.orchestration.max_concurrent = 0;
        assert_eq!(config.validate(), Err(ConfigValidationError::ZeroConcurrency));

        let mut config = FileConfig::default();
        config.orchestration.models = vec!["ok".to_string(), "".to_string()];
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyModelName));

        let mut config = FileConfig::default();
        config.sampling.min_temperature = 1.2;
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidTemperatureRange { .. })
        ));

        let mut config = FileConfig::default();
        config.persona.bot_name = " ".to_string();
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyBotName));
        let mut config = FileConfig::default();
        config.sampling.min_temperature = f32::NAN;
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::NonFiniteSampling {
                field: "min_temperature"
            })
        );

        let mut config = FileConfig::default();
        config.sampling.base_temperature = f32::NAN;
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::NonFiniteSampling {
                field: "base_temperature"
            })
        );
    }
}
