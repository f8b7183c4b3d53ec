//! Horde implementation of the generation gateway

use super::error::{HordeError, Result};
use super::protocol::{GenerationRequest, StatusResponse, SubmitResponse};
use crate::config::FileProviderConfig;
use async_trait::async_trait;
use companion_application::{GatewayError, GenerationGateway, JobId, JobStatus, JobSubmission};
use reqwest::{Client, RequestBuilder, Response};
use std::time::Duration;
use tracing::{debug, warn};

/// Gateway to the AI Horde text generation API
#[derive(Debug, Clone)]
pub struct HordeGateway {
    client: Client,
    base_url: String,
    api_key: String,
    client_agent: String,
    submit_timeout: Duration,
    status_timeout: Duration,
}

impl HordeGateway {
    /// Create a gateway from the `[provider]` config section
    pub fn from_config(config: &FileProviderConfig) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| HordeError::ClientBuild(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.resolve_api_key(),
            client_agent: config.client_agent.clone(),
            submit_timeout: Duration::from_secs(config.submit_timeout_seconds),
            status_timeout: Duration::from_secs(config.status_timeout_seconds),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .header("Client-Agent", &self.client_agent)
            .header("Accept", "application/json")
    }

    async fn submit_job(&self, job: &JobSubmission<'_>) -> Result<JobId> {
        let url = format!("{}/generate/text/async", self.base_url);
        let body = GenerationRequest::from_submission(job);

        let response = self
            .authorized(self.client.post(&url))
            .timeout(self.submit_timeout)
            .json(&body)
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        let parsed: SubmitResponse = response.json().await?;
        match parsed.id.filter(|id| !id.is_empty()) {
            Some(id) => Ok(JobId::new(id)),
            None => {
                if let Some(message) = parsed.message {
                    debug!(model = %job.model, message = %message, "Horde accepted submission without id");
                }
                Err(HordeError::MissingJobId)
            }
        }
    }

    async fn job_status(&self, job_id: &JobId) -> Result<JobStatus> {
        let url = format!("{}/generate/text/status/{}", self.base_url, job_id);

        let response = self
            .authorized(self.client.get(&url))
            .timeout(self.status_timeout)
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        let parsed: StatusResponse = response.json().await?;
        Ok(JobStatus {
            done: parsed.done,
            faulted: parsed.faulted,
            generations: parsed.generations.into_iter().map(|g| g.text).collect(),
        })
    }

    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(HordeError::Status { status, body })
    }
}

#[async_trait]
impl GenerationGateway for HordeGateway {
    async fn submit(&self, job: &JobSubmission<'_>) -> std::result::Result<JobId, GatewayError> {
        let result = self.submit_job(job).await.map_err(GatewayError::from);
        match &result {
            Ok(id) => debug!(model = %job.model, job_id = %id, "Submitted generation job"),
            Err(e) if e.is_rate_limited() => {
                warn!(model = %job.model, "Horde rate limited the submission")
            }
            Err(e) => warn!(model = %job.model, error = %e, "Submission failed"),
        }
        result
    }

    async fn status(&self, job_id: &JobId) -> std::result::Result<JobStatus, GatewayError> {
        self.job_status(job_id).await.map_err(GatewayError::from)
    }
}
