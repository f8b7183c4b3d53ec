//! Horde v2 wire types
//!
//! Only the fields this client reads or writes are modelled; unknown
//! response fields are ignored.

use companion_application::JobSubmission;
use serde::{Deserialize, Serialize};

/// Body of `POST /generate/text/async`
#[derive(Debug, Clone, Serialize)]
pub struct GenerationRequest<'a> {
    pub prompt: &'a str,
    pub params: GenerationRequestParams<'a>,
    pub trusted_workers: bool,
    pub slow_workers: bool,
    pub workers: Vec<String>,
    pub worker_blacklist: bool,
    /// Always exactly one model; fallback is done client-side
    pub models: Vec<&'a str>,
    pub dry_run: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerationRequestParams<'a> {
    pub max_context_length: u32,
    pub max_length: u32,
    pub rep_pen: f32,
    pub rep_pen_range: u32,
    pub rep_pen_slope: f32,
    pub temperature: f32,
    pub tfs: f32,
    pub top_a: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub typical: f32,
    pub sampler_order: &'a [u8],
    pub use_default_badwordsids: bool,
    pub stop_sequence: &'a [String],
}

impl<'a> GenerationRequest<'a> {
    pub fn from_submission(job: &JobSubmission<'a>) -> Self {
        let params = job.params;
        Self {
            prompt: job.prompt,
            params: GenerationRequestParams {
                max_context_length: params.max_context_length,
                max_length: job.max_length,
                rep_pen: params.rep_pen,
                rep_pen_range: params.rep_pen_range,
                rep_pen_slope: params.rep_pen_slope,
                temperature: job.temperature,
                tfs: params.tfs,
                top_a: params.top_a,
                top_k: params.top_k,
                top_p: params.top_p,
                typical: params.typical,
                sampler_order: &params.sampler_order,
                use_default_badwordsids: params.use_default_badwordsids,
                stop_sequence: &params.stop_sequence,
            },
            trusted_workers: false,
            slow_workers: true,
            workers: Vec::new(),
            worker_blacklist: false,
            models: vec![job.model.as_str()],
            dry_run: false,
        }
    }
}

/// Response of `POST /generate/text/async`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmitResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Response of `GET /generate/text/status/{id}`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StatusResponse {
    pub done: bool,
    pub faulted: bool,
    pub generations: Vec<Generation>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Generation {
    pub text: String,
    pub model: Option<String>,
}
