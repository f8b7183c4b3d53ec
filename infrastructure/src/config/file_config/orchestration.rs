//! Orchestration configuration from TOML (`[orchestration]` section)

use companion_application::OrchestrationParams;
use companion_domain::{CandidateModel, ModelCandidates};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw orchestration configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOrchestrationConfig {
    /// Ceiling on simultaneous provider calls
    pub max_concurrent: usize,
    /// Candidate model ids in preference order (empty = built-in list)
    pub models: Vec<String>,
    pub poll_interval_ms: u64,
    pub max_poll_attempts: u32,
    pub inter_attempt_delay_ms: u64,
}

impl Default for FileOrchestrationConfig {
    fn default() -> Self {
        let params = OrchestrationParams::default();
        Self {
            max_concurrent: params.max_concurrent,
            models: Vec::new(),
            poll_interval_ms: params.poll_interval.as_millis() as u64,
            max_poll_attempts: params.max_poll_attempts,
            inter_attempt_delay_ms: params.inter_attempt_delay.as_millis() as u64,
        }
    }
}

impl FileOrchestrationConfig {
    pub fn to_params(&self) -> OrchestrationParams {
        OrchestrationParams::default()
            .with_max_concurrent(self.max_concurrent)
            .with_poll_interval(Duration::from_millis(self.poll_interval_ms))
            .with_max_poll_attempts(self.max_poll_attempts)
            .with_inter_attempt_delay(Duration::from_millis(self.inter_attempt_delay_ms))
    }

    /// Candidate list, falling back to the built-in models when unset.
    ///
    /// Blank names are skipped here; `FileConfig::validate` reports them.
    pub fn candidates(&self) -> ModelCandidates {
        let models = self
            .models
            .iter()
            .filter_map(|m| CandidateModel::new(m.as_str()).ok());
        ModelCandidates::new(models).unwrap_or_else(|_| ModelCandidates::default_models())
    }
}
