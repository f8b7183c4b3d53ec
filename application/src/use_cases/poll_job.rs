//! Job poller
//!
//! Drives one generation job on one candidate model through
//! `Submitting -> Polling -> {Done, Faulted, TimedOut, SubmitFailed}`.
//! Submission is never retried here; the fallback sequencer decides what
//! happens next. The remote job is not cancelled on timeout because the
//! provider has no cancel primitive; polling simply stops.

use crate::ports::generation_gateway::{GenerationGateway, JobId, JobStatus, JobSubmission};
use crate::ports::progress::AttemptNotifier;
use companion_domain::{CandidateModel, JobOutcome};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// A submitted job, owned by one poller run
#[derive(Debug, Clone)]
pub struct Job {
    pub candidate: CandidateModel,
    pub prompt: String,
    pub provider_job_id: JobId,
    pub created_at: Instant,
}

#[derive(Debug)]
enum PollState {
    Submitting,
    Polling { job: Job, attempts: u32 },
    Done(String),
    Faulted,
    TimedOut,
    SubmitFailed(String),
}

/// Submits a job and polls it at a fixed interval up to an attempt ceiling
pub struct JobPoller<G: GenerationGateway + ?Sized> {
    gateway: Arc<G>,
    poll_interval: Duration,
    max_poll_attempts: u32,
}

impl<G: GenerationGateway + ?Sized> JobPoller<G> {
    pub fn new(gateway: Arc<G>, poll_interval: Duration, max_poll_attempts: u32) -> Self {
        Self {
            gateway,
            poll_interval,
            max_poll_attempts,
        }
    }

    /// Run one job to a terminal outcome
    pub async fn run(
        &self,
        submission: &JobSubmission<'_>,
        progress: &dyn AttemptNotifier,
    ) -> JobOutcome {
        let model = submission.model;
        let mut state = PollState::Submitting;

        loop {
            state = match state {
                PollState::Submitting => match self.gateway.submit(submission).await {
                    Ok(id) => {
                        info!(model = %model, job_id = %id, "Job submitted");
                        PollState::Polling {
                            job: Job {
                                candidate: model.clone(),
                                prompt: submission.prompt.to_string(),
                                provider_job_id: id,
                                created_at: Instant::now(),
                            },
                            attempts: 0,
                        }
                    }
                    Err(e) => {
                        if e.is_rate_limited() {
                            warn!(model = %model, "Submission rate limited: {}", e);
                        } else {
                            warn!(model = %model, "Submission failed: {}", e);
                        }
                        PollState::SubmitFailed(e.to_string())
                    }
                },

                PollState::Polling { job, attempts } if attempts >= self.max_poll_attempts => {
                    warn!(
                        model = %model,
                        job_id = %job.provider_job_id,
                        attempts,
                        elapsed_ms = job.created_at.elapsed().as_millis() as u64,
                        "Polling ceiling reached"
                    );
                    PollState::TimedOut
                }

                PollState::Polling { job, attempts } => {
                    tokio::time::sleep(self.poll_interval).await;
                    let attempt = attempts + 1;
                    match self.gateway.status(&job.provider_job_id).await {
                        Ok(status) => self.on_status(job, attempt, status, progress),
                        Err(e) => {
                            warn!(
                                model = %model,
                                job_id = %job.provider_job_id,
                                attempt,
                                "Status query failed: {}",
                                e
                            );
                            PollState::Polling { job, attempts: attempt }
                        }
                    }
                }

                PollState::Done(text) => return JobOutcome::Success(text),
                PollState::Faulted => return JobOutcome::Faulted,
                PollState::TimedOut => return JobOutcome::TimedOut,
                PollState::SubmitFailed(cause) => return JobOutcome::TransportError(cause),
            };
        }
    }

    fn on_status(
        &self,
        job: Job,
        attempt: u32,
        status: JobStatus,
        progress: &dyn AttemptNotifier,
    ) -> PollState {
        if status.done {
            return match status.generations.into_iter().next() {
                Some(text) => {
                    info!(
                        model = %job.candidate,
                        job_id = %job.provider_job_id,
                        attempt,
                        chars = text.chars().count(),
                        "Generation received"
                    );
                    PollState::Done(text)
                }
                None => {
                    warn!(
                        model = %job.candidate,
                        job_id = %job.provider_job_id,
                        "Job done without generations"
                    );
                    PollState::Faulted
                }
            };
        }

        if status.faulted {
            warn!(model = %job.candidate, job_id = %job.provider_job_id, attempt, "Job faulted");
            return PollState::Faulted;
        }

        debug!(model = %job.candidate, job_id = %job.provider_job_id, attempt, "Job pending");
        progress.on_poll(&job.candidate, attempt);
        PollState::Polling { job, attempts: attempt }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::ports::generation_gateway::GatewayError;
    use crate::ports::progress::NoProgress;
    use async_trait::async_trait;
    use companion_domain::GenerationParams;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    // ==================== Test Mocks ====================

    /// Scripted gateway: one submit result, then a queue of status results.
    /// An exhausted status script keeps answering "pending".
    pub(crate) struct ScriptedGateway {
        submit: Mutex<Option<Result<JobId, GatewayError>>>,
        statuses: Mutex<VecDeque<Result<JobStatus, GatewayError>>>,
        pub(crate) submits: Mutex<u32>,
        pub(crate) polls: Mutex<u32>,
    }

    impl ScriptedGateway {
        pub(crate) fn new(
            submit: Result<JobId, GatewayError>,
            statuses: Vec<Result<JobStatus, GatewayError>>,
        ) -> Self {
            Self {
                submit: Mutex::new(Some(submit)),
                statuses: Mutex::new(VecDeque::from(statuses)),
                submits: Mutex::new(0),
                polls: Mutex::new(0),
            }
        }
    }

    #[async_trait]
    impl GenerationGateway for ScriptedGateway {
        async fn submit(&self, _job: &JobSubmission<'_>) -> Result<JobId, GatewayError> {
            *self.submits.lock().unwrap() += 1;
            self.submit
                .lock()
                .unwrap()
                .take()
                .unwrap_or(Err(GatewayError::Transport("submitted twice".to_string())))
        }

        async fn status(&self, _job_id: &JobId) -> Result<JobStatus, GatewayError> {
            *self.polls.lock().unwrap() += 1;
            self.statuses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Ok(JobStatus::pending()))
        }
    }

    fn poller(gateway: Arc<ScriptedGateway>, max_attempts: u32) -> JobPoller<ScriptedGateway> {
        JobPoller::new(gateway, Duration::from_secs(1), max_attempts)
    }

    async fn run(poller: &JobPoller<ScriptedGateway>) -> JobOutcome {
        let model = CandidateModel::new("koboldcpp/test").unwrap();
        let params = GenerationParams::default();
        let submission = JobSubmission {
            model: &model,
            prompt: "User: hi\nLily:",
            max_length: 80,
            temperature: 0.9,
            params: &params,
        };
        poller.run(&submission, &NoProgress).await
    }

    #[tokio::test(start_paused = true)]
    async fn test_done_after_five_pending_polls() {
        let mut statuses: Vec<_> = (0..5).map(|_| Ok(JobStatus::pending())).collect();
        statuses.push(Ok(JobStatus::completed("Hey jaan!")));
        let gateway = Arc::new(ScriptedGateway::new(Ok(JobId::new("job-1")), statuses));

        let start = Instant::now();
        let outcome = run(&poller(Arc::clone(&gateway), 60)).await;

        assert_eq!(outcome, JobOutcome::Success("Hey jaan!".to_string()));
        assert_eq!(*gateway.polls.lock().unwrap(), 6);
        assert_eq!(start.elapsed(), Duration::from_secs(6));
    }

    #[tokio::test(start_paused = true)]
    async fn test_faulted_stops_immediately() {
        let gateway = Arc::new(ScriptedGateway::new(
            Ok(JobId::new("job-2")),
            vec![Ok(JobStatus::pending()), Ok(JobStatus::faulted())],
        ));

        let outcome = run(&poller(Arc::clone(&gateway), 60)).await;

        assert_eq!(outcome, JobOutcome::Faulted);
        assert_eq!(*gateway.polls.lock().unwrap(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_done_without_generations_is_faulted() {
        let done_empty = JobStatus {
            done: true,
            faulted: false,
            generations: Vec::new(),
        };
        let gateway = Arc::new(ScriptedGateway::new(
            Ok(JobId::new("job-3")),
            vec![Ok(done_empty)],
        ));

        assert_eq!(run(&poller(Arc::clone(&gateway), 60)).await, JobOutcome::Faulted);
        assert_eq!(*gateway.polls.lock().unwrap(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_times_out_at_ceiling() {
        let gateway = Arc::new(ScriptedGateway::new(Ok(JobId::new("job-4")), Vec::new()));

        let start = Instant::now();
        let outcome = run(&poller(Arc::clone(&gateway), 10)).await;

        assert_eq!(outcome, JobOutcome::TimedOut);
        assert_eq!(*gateway.polls.lock().unwrap(), 10);
        assert_eq!(start.elapsed(), Duration::from_secs(10));
    }

    #[tokio::test(start_paused = true)]
    async fn test_transient_status_errors_are_swallowed() {
        let gateway = Arc::new(ScriptedGateway::new(
            Ok(JobId::new("job-5")),
            vec![
                Err(GatewayError::Transport("connection reset".to_string())),
                Err(GatewayError::Http {
                    status: 502,
                    body: "bad gateway".to_string(),
                }),
                Ok(JobStatus::completed("theek hoon baby")),
            ],
        ));

        let outcome = run(&poller(Arc::clone(&gateway), 60)).await;

        assert_eq!(outcome, JobOutcome::Success("theek hoon baby".to_string()));
        assert_eq!(*gateway.polls.lock().unwrap(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_status_errors_bounded_by_ceiling() {
        let errors = (0..20)
            .map(|_| Err(GatewayError::Transport("down".to_string())))
            .collect();
        let gateway = Arc::new(ScriptedGateway::new(Ok(JobId::new("job-6")), errors));

        assert_eq!(run(&poller(Arc::clone(&gateway), 5)).await, JobOutcome::TimedOut);
        assert_eq!(*gateway.polls.lock().unwrap(), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_failure_is_not_retried() {
        let gateway = Arc::new(ScriptedGateway::new(Err(GatewayError::MissingJobId), Vec::new()));

        let outcome = run(&poller(Arc::clone(&gateway), 60)).await;

        assert!(matches!(outcome, JobOutcome::TransportError(ref cause) if cause.contains("job id")));
        assert_eq!(*gateway.submits.lock().unwrap(), 1);
        assert_eq!(*gateway.polls.lock().unwrap(), 0);
    }
}
