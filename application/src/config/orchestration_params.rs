//! Orchestration parameters for admission, polling and fallback control.
//!
//! [`OrchestrationParams`] groups the static timing and capacity knobs used
//! by [`GenerateReplyUseCase`](crate::use_cases::generate_reply::GenerateReplyUseCase).
//! They are injected from configuration; nothing in the use cases hardcodes
//! them.
//!
//! | Field | Used by | Default |
//! |-------|---------|---------|
//! | `max_concurrent` | Admission gate | 5 |
//! | `poll_interval` | Job poller | 1s |
//! | `max_poll_attempts` | Job poller | 60 |
//! | `inter_attempt_delay` | Fallback sequencer | 2s |

use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrchestrationParams {
    /// Global ceiling on in-flight provider calls.
    pub max_concurrent: usize,
    /// Wait before each status query.
    pub poll_interval: Duration,
    /// Status queries per candidate before giving up.
    pub max_poll_attempts: u32,
    /// Pause before every candidate after the first.
    pub inter_attempt_delay: Duration,
}

impl Default for OrchestrationParams {
    fn default() -> Self {
        Self {
            max_concurrent: 5,
            poll_interval: Duration::from_secs(1),
            max_poll_attempts: 60,
            inter_attempt_delay: Duration::from_secs(2),
        }
    }
}

impl OrchestrationParams {
    // ==================== Builder Methods ====================

    pub fn with_max_concurrent(mut self, max: usize) -> Self {
        self.max_concurrent = max;
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn with_max_poll_attempts(mut self, max: u32) -> Self {
        self.max_poll_attempts = max;
        self
    }

    pub fn with_inter_attempt_delay(mut self, delay: Duration) -> Self {
        self.inter_attempt_delay = delay;
        self
    }

    /// Wall-clock ceiling of one candidate's polling phase
    pub fn poll_ceiling(&self) -> Duration {
        self.poll_interval * self.max_poll_attempts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let params = OrchestrationParams::default();
        assert_eq!(params.max_concurrent, 5);
        assert_eq!(params.max_poll_attempts, 60);
        assert_eq!(params.poll_ceiling(), Duration::from_secs(60));
    }

    #[test]
    fn test_builder() {
        let params = OrchestrationParams::default()
            .with_max_concurrent(2)
            .with_poll_interval(Duration::from_millis(500))
            .with_max_poll_attempts(10)
            .with_inter_attempt_delay(Duration::ZERO);

        assert_eq!(params.max_concurrent, 2);
        assert_eq!(params.poll_ceiling(), Duration::from_secs(5));
        assert_eq!(params.inter_attempt_delay, Duration::ZERO);
    }
}
