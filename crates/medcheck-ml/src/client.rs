use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use ureq::Agent;

use crate::error::MlError;
use crate::service::{BoxFuture, PredictionService};
use crate::types::{
    DiseaseListing, HealthStatus, ModelInfo, PredictRequest, PredictResponse, RetrainSummary,
    SymptomListing,
};

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// HTTP client for the prediction service.
///
/// Requests are blocking `ureq` calls moved onto the Tokio blocking pool.
/// Any transport failure, timeout or non-2xx status becomes an [`MlError`].
#[derive(Clone)]
pub struct MlApiClient {
    base_url: String,
    agent: Agent,
    timeout_secs: u64,
}

impl MlApiClient {
    pub fn new(base_url: &str, timeout_secs: u64) -> Self {
        let config = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(timeout_secs)))
            .build();

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            agent: Agent::new_with_config(config),
            timeout_secs,
        }
    }

    /// Local service on port 5000 with a 10 second timeout.
    pub fn default_local() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T>(&self, path: &'static str) -> Result<T, MlError>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let url = self.url(path);
        let timeout_secs = self.timeout_secs;
        self.run(move |agent| {
            tracing::debug!(%url, "GET");
            let mut response = agent
                .get(&url)
                .call()
                .map_err(|e| map_transport(&url, timeout_secs, e))?;
            response
                .body_mut()
                .read_json::<T>()
                .map_err(|e| MlError::ResponseParse(e.to_string()))
        })
        .await
    }

    async fn post_json<B, T>(&self, path: &'static str, body: Option<B>) -> Result<T, MlError>
    where
        B: Serialize + Send + 'static,
        T: DeserializeOwned + Send + 'static,
    {
        let url = self.url(path);
        let timeout_secs = self.timeout_secs;
        self.run(move |agent| {
            tracing::debug!(%url, "POST");
            let request = agent.post(&url);
            let sent = match &body {
                Some(body) => request.send_json(body),
                None => request.send_empty(),
            };
            let mut response = sent.map_err(|e| map_transport(&url, timeout_secs, e))?;
            response
                .body_mut()
                .read_json::<T>()
                .map_err(|e| MlError::ResponseParse(e.to_string()))
        })
        .await
    }

    async fn run<T, F>(&self, op: F) -> Result<T, MlError>
    where
        F: FnOnce(Agent) -> Result<T, MlError> + Send + 'static,
        T: Send + 'static,
    {
        let agent = self.agent.clone();
        tokio::task::spawn_blocking(move || op(agent))
            .await
            .map_err(|e| MlError::Task(e.to_string()))?
    }
}

fn map_transport(url: &str, timeout_secs: u64, err: ureq::Error) -> MlError {
    match err {
        ureq::Error::StatusCode(status) => MlError::Status {
            url: url.to_string(),
            status,
        },
        ureq::Error::Timeout(_) => MlError::Timeout {
            url: url.to_string(),
            secs: timeout_secs,
        },
        other => MlError::Connection {
            url: url.to_string(),
            reason: other.to_string(),
        },
    }
}

impl PredictionService for MlApiClient {
    fn health_check(&self) -> BoxFuture<'_, Result<HealthStatus, MlError>> {
        Box::pin(self.get_json::<HealthStatus>("/health"))
    }

    fn predict(&self, symptoms: Vec<String>) -> BoxFuture<'_, Result<PredictResponse, MlError>> {
        Box::pin(self.post_json::<_, PredictResponse>(
            "/predict",
            Some(PredictRequest { symptoms }),
        ))
    }

    fn model_info(&self) -> BoxFuture<'_, Result<ModelInfo, MlError>> {
        Box::pin(self.get_json::<ModelInfo>("/model-info"))
    }

    fn symptoms(&self) -> BoxFuture<'_, Result<SymptomListing, MlError>> {
        Box::pin(self.get_json::<SymptomListing>("/symptoms"))
    }

    fn diseases(&self) -> BoxFuture<'_, Result<DiseaseListing, MlError>> {
        Box::pin(self.get_json::<DiseaseListing>("/diseases"))
    }

    fn retrain(&self) -> BoxFuture<'_, Result<RetrainSummary, MlError>> {
        Box::pin(self.post_json::<(), RetrainSummary>("/retrain", None))
    }
}
