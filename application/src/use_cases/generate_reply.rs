//! Generate Reply use case
//!
//! The inbound boundary of the orchestrator: one user message in, one
//! validated reply (or a single terminal failure) out. Each call holds one
//! admission slot for its whole candidate walk.

use crate::config::OrchestrationParams;
use crate::ports::generation_gateway::GenerationGateway;
use crate::ports::progress::{AttemptNotifier, NoProgress};
use crate::use_cases::admission_gate::AdmissionGate;
use crate::use_cases::fallback::FallbackSequencer;
use crate::use_cases::poll_job::JobPoller;
use companion_domain::{
    GenerationParams, InferenceRequest, ModelCandidates, Mood, OrchestrationFailure,
    PromptComposer, SamplingPolicy, ValidatedReply,
};
use std::sync::Arc;
use tracing::{debug, info};

/// Input for the GenerateReply use case
#[derive(Debug, Clone)]
pub struct GenerateReplyInput {
    pub user_text: String,
    pub mood: Mood,
    /// Optional note about the ongoing conversation
    pub prior_turn_note: Option<String>,
    /// Overrides the configured candidate list for this call
    pub candidates: Option<ModelCandidates>,
}

impl GenerateReplyInput {
    pub fn new(user_text: impl Into<String>, mood: Mood) -> Self {
        Self {
            user_text: user_text.into(),
            mood,
            prior_turn_note: None,
            candidates: None,
        }
    }

    pub fn with_prior_turn_note(mut self, note: impl Into<String>) -> Self {
        self.prior_turn_note = Some(note.into());
        self
    }

    pub fn with_candidates(mut self, candidates: ModelCandidates) -> Self {
        self.candidates = Some(candidates);
        self
    }

    fn to_request(&self) -> InferenceRequest {
        let request = InferenceRequest::new(self.user_text.clone(), self.mood);
        match &self.prior_turn_note {
            Some(note) => request.with_prior_turn_note(note.clone()),
            None => request,
        }
    }
}

/// Use case for turning one user message into one reply
pub struct GenerateReplyUseCase<G: GenerationGateway + ?Sized + 'static> {
    gate: AdmissionGate,
    sequencer: FallbackSequencer<G>,
    candidates: ModelCandidates,
}

impl<G: GenerationGateway + ?Sized + 'static> GenerateReplyUseCase<G> {
    pub fn new(gateway: Arc<G>, params: OrchestrationParams, candidates: ModelCandidates) -> Self {
        let poller = JobPoller::new(gateway, params.poll_interval, params.max_poll_attempts);
        Self {
            gate: AdmissionGate::new(params.max_concurrent),
            sequencer: FallbackSequencer::new(poller, params.inter_attempt_delay),
            candidates,
        }
    }

    /// Share an existing gate (e.g. across several use case instances)
    pub fn with_gate(mut self, gate: AdmissionGate) -> Self {
        self.gate = gate;
        self
    }

    pub fn with_composer(mut self, composer: PromptComposer) -> Self {
        self.sequencer = self.sequencer.with_composer(composer);
        self
    }

    pub fn with_sampling(mut self, sampling: SamplingPolicy) -> Self {
        self.sequencer = self.sequencer.with_sampling(sampling);
        self
    }

    pub fn with_generation_params(mut self, generation: GenerationParams) -> Self {
        self.sequencer = self.sequencer.with_generation_params(generation);
        self
    }

    pub fn gate(&self) -> &AdmissionGate {
        &self.gate
    }

    pub fn candidates(&self) -> &ModelCandidates {
        &self.candidates
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        input: GenerateReplyInput,
    ) -> Result<ValidatedReply, OrchestrationFailure> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: GenerateReplyInput,
        progress: &dyn AttemptNotifier,
    ) -> Result<ValidatedReply, OrchestrationFailure> {
        let request = input.to_request();
        let candidates = input.candidates.as_ref().unwrap_or(&self.candidates);

        debug!(
            mood = %request.mood(),
            hints = ?request.hints(),
            in_flight = self.gate.in_flight(),
            "Waiting for admission"
        );
        let slot = self
            .gate
            .acquire()
            .await
            .map_err(|_| OrchestrationFailure::Closed)?;
        info!(
            mood = %request.mood(),
            candidates = candidates.len(),
            "Generating reply"
        );

        let result = self.sequencer.run(&request, candidates, progress).await;
        slot.release();
        result
    }
}
