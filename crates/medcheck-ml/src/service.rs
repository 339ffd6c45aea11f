use std::future::Future;
use std::pin::Pin;

use crate::error::MlError;
use crate::types::{
    DiseaseListing, HealthStatus, ModelInfo, PredictResponse, RetrainSummary, SymptomListing,
};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// The remote classification boundary.
///
/// Implemented over HTTP by [`crate::MlApiClient`]; tests substitute fakes.
pub trait PredictionService: Send + Sync {
    /// `GET /health`.
    fn health_check(&self) -> BoxFuture<'_, Result<HealthStatus, MlError>>;

    /// `POST /predict` with the selected symptom ids.
    fn predict(&self, symptoms: Vec<String>) -> BoxFuture<'_, Result<PredictResponse, MlError>>;

    /// `GET /model-info`.
    fn model_info(&self) -> BoxFuture<'_, Result<ModelInfo, MlError>>;

    /// `GET /symptoms`.
    fn symptoms(&self) -> BoxFuture<'_, Result<SymptomListing, MlError>>;

    /// `GET /diseases`.
    fn diseases(&self) -> BoxFuture<'_, Result<DiseaseListing, MlError>>;

    /// `POST /retrain`.
    fn retrain(&self) -> BoxFuture<'_, Result<RetrainSummary, MlError>>;
}
