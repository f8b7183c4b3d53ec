//! Progress reporting for candidate attempts

use colored::Colorize;
use companion_application::AttemptNotifier;
use companion_domain::{AttemptFailure, CandidateModel, ValidatedReply};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Reports progress with one spinner per candidate attempt
pub struct ProgressReporter {
    multi: MultiProgress,
    current: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            current: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn failure_label(failure: &AttemptFailure) -> &'static str {
        match failure {
            AttemptFailure::SubmitFailed(_) => "submit failed",
            AttemptFailure::Faulted => "faulted",
            AttemptFailure::TimedOut => "timed out",
            AttemptFailure::Rejected(_) => "unusable reply",
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl AttemptNotifier for ProgressReporter {
    fn on_attempt_start(&self, model: &CandidateModel, index: usize, total: usize) {
        let pb = self.multi.add(ProgressBar::new_spinner());
        pb.set_style(Self::spinner_style());
        pb.set_prefix(format!("[{}/{}] {}", index + 1, total, model));
        pb.set_message("submitting...");
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut current) = self.current.lock() {
            *current = Some(pb);
        }
    }

    fn on_poll(&self, _model: &CandidateModel, attempt: u32) {
        if let Ok(current) = self.current.lock()
            && let Some(pb) = current.as_ref()
        {
            pb.set_message(format!("waiting for a worker (poll {})", attempt));
        }
    }

    fn on_attempt_complete(
        &self,
        _model: &CandidateModel,
        result: Result<&ValidatedReply, &AttemptFailure>,
    ) {
        let Ok(mut current) = self.current.lock() else {
            return;
        };
        if let Some(pb) = current.take() {
            match result {
                Ok(_) => pb.finish_with_message(format!("{}", "v done".green())),
                Err(failure) => pb.finish_with_message(format!(
                    "{} {}",
                    "x".red(),
                    Self::failure_label(failure)
                )),
            }
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl AttemptNotifier for SimpleProgress {
    fn on_attempt_start(&self, model: &CandidateModel, index: usize, total: usize) {
        eprintln!(
            "{} {} ({}/{})",
            "->".cyan(),
            model.as_str().bold(),
            index + 1,
            total
        );
    }

    fn on_attempt_complete(
        &self,
        model: &CandidateModel,
        result: Result<&ValidatedReply, &AttemptFailure>,
    ) {
        match result {
            Ok(_) => eprintln!("  {} {}", "v".green(), model),
            Err(failure) => eprintln!(
                "  {} {} ({})",
                "x".red(),
                model,
                ProgressReporter::failure_label(failure)
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use companion_domain::Rejection;

    #[test]
    fn test_failure_labels() {
        assert_eq!(
            ProgressReporter::failure_label(&AttemptFailure::SubmitFailed("429".into())),
            "submit failed"
        );
        assert_eq!(
            ProgressReporter::failure_label(&AttemptFailure::Rejected(Rejection::Empty)),
            "unusable reply"
        );
    }

    #[test]
    fn test_reporter_tolerates_hidden_terminal() {
        let reporter = ProgressReporter::new();
        reporter.multi.set_draw_target(indicatif::ProgressDrawTarget::hidden());
        let model = CandidateModel::new("m").unwrap();

        reporter.on_attempt_start(&model, 0, 2);
        reporter.on_poll(&model, 3);
        reporter.on_attempt_complete(&model, Err(&AttemptFailure::TimedOut));
        assert!(reporter.current.lock().unwrap().is_none());
    }
}
