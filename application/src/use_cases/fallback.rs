//! Fallback sequencer
//!
//! Walks the candidate list in preference order, one model at a time, and
//! stops at the first reply that passes validation. A failed candidate is
//! never retried within the same call.

use crate::ports::generation_gateway::{GenerationGateway, JobSubmission};
use crate::ports::progress::AttemptNotifier;
use crate::use_cases::poll_job::JobPoller;
use companion_domain::core::string::preview;
use companion_domain::{
    AttemptFailure, CandidateModel, GenerationParams, InferenceRequest, JobOutcome,
    ModelCandidates, OrchestrationFailure, PromptComposer, ResponseValidator, SamplingPolicy,
    ValidatedReply,
};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Sequential try-next-model policy
pub struct FallbackSequencer<G: GenerationGateway + ?Sized> {
    poller: JobPoller<G>,
    composer: PromptComposer,
    validator: ResponseValidator,
    sampling: SamplingPolicy,
    generation: GenerationParams,
    inter_attempt_delay: Duration,
}

impl<G: GenerationGateway + ?Sized> FallbackSequencer<G> {
    pub fn new(poller: JobPoller<G>, inter_attempt_delay: Duration) -> Self {
        Self {
            poller,
            composer: PromptComposer::default(),
            validator: ResponseValidator::default(),
            sampling: SamplingPolicy::default(),
            generation: GenerationParams::default(),
            inter_attempt_delay,
        }
    }

    /// Use a composer; the validator follows its bot name
    pub fn with_composer(mut self, composer: PromptComposer) -> Self {
        self.validator = ResponseValidator::for_bot(&composer.templates().bot_name);
        self.composer = composer;
        self
    }

    pub fn with_sampling(mut self, sampling: SamplingPolicy) -> Self {
        self.sampling = sampling;
        self
    }

    pub fn with_generation_params(mut self, generation: GenerationParams) -> Self {
        self.generation = generation;
        self
    }

    /// Try candidates in order until one yields a validated reply
    pub async fn run(
        &self,
        request: &InferenceRequest,
        candidates: &ModelCandidates,
        progress: &dyn AttemptNotifier,
    ) -> Result<ValidatedReply, OrchestrationFailure> {
        let prompt = self.composer.compose_request(request);
        let temperature = self.sampling.temperature(request.mood(), request.hints());
        let max_length = request.hints().reply_length();
        let total = candidates.len();

        for (index, model) in candidates.iter().enumerate() {
            if index > 0 && !self.inter_attempt_delay.is_zero() {
                tokio::time::sleep(self.inter_attempt_delay).await;
            }

            info!(model = %model, attempt = index + 1, total, "Trying candidate model");
            progress.on_attempt_start(model, index, total);

            let submission = JobSubmission {
                model,
                prompt: &prompt,
                max_length,
                temperature,
                params: &self.generation,
            };

            match self.attempt(model, &submission, progress).await {
                Ok(reply) => {
                    info!(model = %model, reply = %preview(reply.text(), 80), "Candidate succeeded");
                    progress.on_attempt_complete(model, Ok(&reply));
                    return Ok(reply);
                }
                Err(failure) => {
                    warn!(model = %model, "Candidate failed: {}", failure);
                    progress.on_attempt_complete(model, Err(&failure));
                }
            }
        }

        warn!(attempted = total, "All candidate models exhausted");
        Err(OrchestrationFailure::AllCandidatesExhausted { attempted: total })
    }

    async fn attempt(
        &self,
        model: &CandidateModel,
        submission: &JobSubmission<'_>,
        progress: &dyn AttemptNotifier,
    ) -> Result<ValidatedReply, AttemptFailure> {
        let outcome = self.poller.run(submission, progress).await;
        debug!(model = %model, outcome = outcome.as_str(), "Job finished");
        match outcome {
            JobOutcome::Success(raw) => self
                .validator
                .validate(&raw, model)
                .map_err(AttemptFailure::Rejected),
            JobOutcome::Faulted => Err(AttemptFailure::Faulted),
            JobOutcome::TimedOut => Err(AttemptFailure::TimedOut),
            JobOutcome::TransportError(cause) => Err(AttemptFailure::SubmitFailed(cause)),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::ports::generation_gateway::{GatewayError, JobId, JobStatus};
    use crate::ports::progress::NoProgress;
    use async_trait::async_trait;
    use companion_domain::{Mood, Rejection};
    use std::collections::{HashMap, VecDeque};
    use std::sync::{Arc, Mutex};
    use tokio::time::Instant;

    // ==================== Test Mocks ====================

    /// How a scripted model behaves
    #[derive(Clone)]
    pub(crate) enum Script {
        SubmitFails,
        Faults,
        NeverFinishes,
        Replies(&'static str),
    }

    /// Gateway whose behavior is scripted per model id
    pub(crate) struct ModelScriptGateway {
        scripts: HashMap<String, Script>,
        jobs: Mutex<HashMap<String, String>>,
        pub(crate) submitted: Mutex<Vec<String>>,
        pub(crate) prompts: Mutex<VecDeque<(String, u32, f32)>>,
    }

    impl ModelScriptGateway {
        pub(crate) fn new(scripts: &[(&str, Script)]) -> Self {
            Self {
                scripts: scripts
                    .iter()
                    .map(|(id, s)| (id.to_string(), s.clone()))
                    .collect(),
                jobs: Mutex::new(HashMap::new()),
                submitted: Mutex::new(Vec::new()),
                prompts: Mutex::new(VecDeque::new()),
            }
        }

        pub(crate) fn submitted(&self) -> Vec<String> {
            self.submitted.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl GenerationGateway for ModelScriptGateway {
        async fn submit(&self, job: &JobSubmission<'_>) -> Result<JobId, GatewayError> {
            let id = job.model.as_str().to_string();
            self.submitted.lock().unwrap().push(id.clone());
            self.prompts.lock().unwrap().push_back((
                job.prompt.to_string(),
                job.max_length,
                job.temperature,
            ));
            match self.scripts.get(&id) {
                Some(Script::SubmitFails) | None => {
                    Err(GatewayError::Transport("connection refused".to_string()))
                }
                Some(_) => {
                    let job_id = format!("job-{id}");
                    self.jobs.lock().unwrap().insert(job_id.clone(), id);
                    Ok(JobId::new(job_id))
                }
            }
        }

        async fn status(&self, job_id: &JobId) -> Result<JobStatus, GatewayError> {
            let model = self.jobs.lock().unwrap().get(job_id.as_str()).cloned();
            match model.and_then(|m| self.scripts.get(&m).cloned()) {
                Some(Script::Faults) => Ok(JobStatus::faulted()),
                Some(Script::Replies(text)) => Ok(JobStatus::completed(text)),
                _ => Ok(JobStatus::pending()),
            }
        }
    }

    /// Records attempt events in order
    #[derive(Default)]
    pub(crate) struct RecordingProgress {
        pub(crate) events: Mutex<Vec<String>>,
    }

    impl AttemptNotifier for RecordingProgress {
        fn on_attempt_start(&self, model: &CandidateModel, index: usize, total: usize) {
            self.events
                .lock()
                .unwrap()
                .push(format!("start {model} {}/{total}", index + 1));
        }

        fn on_attempt_complete(
            &self,
            model: &CandidateModel,
            result: Result<&ValidatedReply, &AttemptFailure>,
        ) {
            let label = match result {
                Ok(_) => "ok".to_string(),
                Err(failure) => failure.to_string(),
            };
            self.events.lock().unwrap().push(format!("done {model} {label}"));
        }
    }

    pub(crate) fn sequencer(gateway: Arc<ModelScriptGateway>) -> FallbackSequencer<ModelScriptGateway> {
        let poller = JobPoller::new(gateway, Duration::from_secs(1), 5);
        FallbackSequencer::new(poller, Duration::from_secs(2))
    }

    #[tokio::test(start_paused = true)]
    async fn test_stops_at_first_valid_reply() {
        let gateway = Arc::new(ModelScriptGateway::new(&[
            ("A", Script::Replies("ok")),
            ("B", Script::Replies("Lily: haan baby, bolo na")),
            ("C", Script::Replies("never used here")),
        ]));
        let candidates = ModelCandidates::parse(&["A", "B", "C"]).unwrap();
        let request = InferenceRequest::new("kya kar rahi ho?", Mood::Normal);

        let reply = sequencer(Arc::clone(&gateway))
            .run(&request, &candidates, &NoProgress)
            .await
            .unwrap();

        assert_eq!(reply.text(), "haan baby, bolo na");
        assert_eq!(reply.source_model().as_str(), "B");
        assert_eq!(gateway.submitted(), vec!["A", "B"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_all_fail_exhausts_after_delays() {
        let gateway = Arc::new(ModelScriptGateway::new(&[
            ("A", Script::SubmitFails),
            ("B", Script::Faults),
            ("C", Script::Replies("x")),
        ]));
        let candidates = ModelCandidates::parse(&["A", "B", "C"]).unwrap();
        let request = InferenceRequest::new("hi", Mood::Normal);
        let progress = RecordingProgress::default();

        let start = Instant::now();
        let result = sequencer(Arc::clone(&gateway))
            .run(&request, &candidates, &progress)
            .await;

        assert_eq!(
            result,
            Err(OrchestrationFailure::AllCandidatesExhausted { attempted: 3 })
        );
        assert!(start.elapsed() >= Duration::from_secs(2) * 2);
        assert_eq!(gateway.submitted(), vec!["A", "B", "C"]);
        assert_eq!(
            *progress.events.lock().unwrap(),
            vec![
                "start A 1/3".to_string(),
                "done A submission failed: Transport error: connection refused".to_string(),
                "start B 2/3".to_string(),
                "done B generation faulted".to_string(),
                "start C 3/3".to_string(),
                format!(
                    "done C {}",
                    AttemptFailure::Rejected(Rejection::TooShort { chars: 1 })
                ),
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_delay_before_first_candidate() {
        let gateway = Arc::new(ModelScriptGateway::new(&[(
            "A",
            Script::Replies("hello there jaan"),
        )]));
        let candidates = ModelCandidates::parse(&["A"]).unwrap();

        let start = Instant::now();
        sequencer(gateway)
            .run(&InferenceRequest::new("hi", Mood::Normal), &candidates, &NoProgress)
            .await
            .unwrap();

        // One poll interval, no inter-attempt delay
        assert_eq!(start.elapsed(), Duration::from_secs(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_prompt_composed_once_with_request_sampling() {
        let gateway = Arc::new(ModelScriptGateway::new(&[
            ("A", Script::Faults),
            ("B", Script::Replies("main bhi miss karti hoon")),
        ]));
        let candidates = ModelCandidates::parse(&["A", "B"]).unwrap();
        let request = InferenceRequest::new("miss you baby", Mood::Erotic);

        sequencer(Arc::clone(&gateway))
            .run(&request, &candidates, &NoProgress)
            .await
            .unwrap();

        let prompts: Vec<_> = gateway.prompts.lock().unwrap().iter().cloned().collect();
        assert_eq!(prompts.len(), 2);
        assert_eq!(prompts[0], prompts[1]);
        let (prompt, max_length, temperature) = &prompts[0];
        assert!(prompt.ends_with("User: miss you baby\nLily:"));
        assert_eq!(*max_length, 100);
        assert!((*temperature - 1.0).abs() < 1e-6);
    }
}
