use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use std::sync::Arc;

use super::dto::BatchJobSpec;
use super::status::{BatchJobHandle, BatchJobPage, BatchJobStatus};
use crate::domain::auth::Credentials;
use crate::domain::shared::{read_json, status_error};
use crate::error::{Operation, SpeechError, SpeechResult};
use crate::infrastructure::endpoints::{
    Endpoints, CONTENT_TYPE_HEADER, CONTENT_TYPE_JSON, SUBSCRIPTION_KEY_HEADER,
};
use crate::infrastructure::http::{Transport, TransportRequest};

pub struct BatchJobClient {
    transport: Arc<dyn Transport>,
    credentials: Arc<Credentials>,
    endpoints: Arc<Endpoints>,
}

impl BatchJobClient {
    pub fn new(
        transport: Arc<dyn Transport>,
        credentials: Arc<Credentials>,
        endpoints: Arc<Endpoints>,
    ) -> Self {
        Self {
            transport,
            credentials,
            endpoints,
        }
    }

    fn request(&self, method: Method, url: String) -> TransportRequest {
        TransportRequest::new(method, url)
            .header(SUBSCRIPTION_KEY_HEADER, self.credentials.subscription_key())
            .header(CONTENT_TYPE_HEADER, CONTENT_TYPE_JSON)
    }
}

/// Long-form synthesis jobs. These endpoints authenticate with the
/// subscription key alone.
#[async_trait]
pub trait BatchSynthesisApi: Send + Sync {
    /// Submit a job. Only `201 Created` counts as success.
    async fn create(&self, spec: &BatchJobSpec) -> SpeechResult<BatchJobHandle>;

    async fn get_by_id(&self, id: &str) -> SpeechResult<BatchJobStatus>;

    /// One page of jobs, in the order the service returned them
    async fn list(&self, skip: u32, top: u32) -> SpeechResult<Vec<BatchJobStatus>>;

    /// Remove a job. Only `204 No Content` counts as success.
    async fn delete(&self, id: &str) -> SpeechResult<()>;
}

#[async_trait]
impl BatchSynthesisApi for BatchJobClient {
    async fn create(&self, spec: &BatchJobSpec) -> SpeechResult<BatchJobHandle> {
        let body = serde_json::to_vec(spec).map_err(|source| SpeechError::Encode {
            operation: Operation::CreateJob,
            source,
        })?;

        tracing::info!(
            display_name = %spec.display_name,
            input_count = spec.inputs.len(),
            voice = %spec.synthesis_config.voice,
            "Creating batch synthesis job"
        );

        let request = self
            .request(Method::POST, self.endpoints.batch_url.clone())
            .body(body);
        let response = self.transport.send(request).await?;

        if response.status != StatusCode::CREATED {
            return Err(status_error(Operation::CreateJob, response).await);
        }

        let job: BatchJobHandle = read_json(Operation::CreateJob, response).await?;
        tracing::info!(job_id = %job.id, status = %job.status, "Batch synthesis job created");
        Ok(job)
    }

    async fn get_by_id(&self, id: &str) -> SpeechResult<BatchJobStatus> {
        let request = self.request(Method::GET, self.endpoints.batch_job_url(id));
        let response = self.transport.send(request).await?;

        if response.status != StatusCode::OK {
            return Err(status_error(Operation::GetJob, response).await);
        }

        let job: BatchJobStatus = read_json(Operation::GetJob, response).await?;
        tracing::debug!(job_id = %job.id, status = %job.status, "Fetched batch job");
        Ok(job)
    }

    async fn list(&self, skip: u32, top: u32) -> SpeechResult<Vec<BatchJobStatus>> {
        let request = self.request(Method::GET, self.endpoints.batch_list_url(skip, top));
        let response = self.transport.send(request).await?;

        if response.status != StatusCode::OK {
            return Err(status_error(Operation::ListJobs, response).await);
        }

        let page: BatchJobPage = read_json(Operation::ListJobs, response).await?;
        tracing::debug!(skip, top, count = page.values.len(), "Listed batch jobs");
        Ok(page.values)
    }

    async fn delete(&self, id: &str) -> SpeechResult<()> {
        let request = self.request(Method::DELETE, self.endpoints.batch_job_url(id));

        // A send failure has no status to inspect
        let response = self.transport.send(request).await?;

        if response.status != StatusCode::NO_CONTENT {
            return Err(status_error(Operation::DeleteJob, response).await);
        }

        tracing::info!(job_id = %id, "Batch synthesis job deleted");
        Ok(())
    }
}
