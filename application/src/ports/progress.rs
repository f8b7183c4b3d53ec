//! Attempt progress port
//!
//! Defines the interface for observing candidate attempts during one
//! orchestration call.

use companion_domain::{AttemptFailure, CandidateModel, ValidatedReply};

/// Callback for progress updates while candidates are tried
///
/// Implementations live in the presentation layer. All methods run on the
/// caller's task and must not block.
pub trait AttemptNotifier: Send + Sync {
    /// Called before a candidate is dispatched (`index` is zero-based)
    fn on_attempt_start(&self, model: &CandidateModel, index: usize, total: usize);

    /// Called when a candidate attempt reaches its final result
    fn on_attempt_complete(
        &self,
        model: &CandidateModel,
        result: Result<&ValidatedReply, &AttemptFailure>,
    );

    /// Called after each status poll that left the job pending
    fn on_poll(&self, _model: &CandidateModel, _attempt: u32) {}
}

/// No-op notifier for when progress reporting is not needed
pub struct NoProgress;

impl AttemptNotifier for NoProgress {
    fn on_attempt_start(&self, _model: &CandidateModel, _index: usize, _total: usize) {}
    fn on_attempt_complete(
        &self,
        _model: &CandidateModel,
        _result: Result<&ValidatedReply, &AttemptFailure>,
    ) {
    }
}
