//! One user's symptom-checking session.
//!
//! The session owns the selection and both result buffers. Rule-based
//! results are recomputed inline on every selection change. Remote
//! predictions are asynchronous: each request carries a sequence number and
//! only the latest one issued may update the panel, so a slow response for
//! an older selection can never overwrite a newer one.

use std::sync::Arc;

use medcheck_catalog::{Catalog, predict};
use medcheck_core::models::{PredictionResult, Selection};
use medcheck_ml::types::{MlPrediction, ModelInfo, PredictResponse};
use medcheck_ml::{MlError, PredictionService};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteStatus {
    Checking,
    Available,
    Unavailable { reason: String },
}

/// State of the remote predictions panel.
#[derive(Debug, Clone)]
pub struct RemotePanel {
    pub status: RemoteStatus,
    pub predictions: Vec<MlPrediction>,
    pub model_info: Option<ModelInfo>,
    pub loading: bool,
}

/// A remote prediction request the caller should send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingPrediction {
    pub seq: u64,
    pub symptoms: Vec<String>,
}

/// What happened to a remote result handed to [`Session::apply_remote_result`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteUpdate {
    Applied,
    /// A newer request was issued; the result was dropped.
    Stale,
    /// The call failed and the panel is now unavailable.
    Failed,
}

pub struct Session {
    catalog: Arc<Catalog>,
    service: Arc<dyn PredictionService>,
    selection: Selection,
    rule_results: Vec<PredictionResult>,
    remote: RemotePanel,
    latest_seq: u64,
}

impl Session {
    pub fn new(catalog: Arc<Catalog>, service: Arc<dyn PredictionService>) -> Self {
        Self {
            catalog,
            service,
            selection: Selection::new(),
            rule_results: Vec::new(),
            remote: RemotePanel {
                status: RemoteStatus::Checking,
                predictions: Vec::new(),
                model_info: None,
                loading: false,
            },
            latest_seq: 0,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn service(&self) -> Arc<dyn PredictionService> {
        Arc::clone(&self.service)
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn rule_results(&self) -> &[PredictionResult] {
        &self.rule_results
    }

    pub fn remote(&self) -> &RemotePanel {
        &self.remote
    }

    pub fn is_remote_available(&self) -> bool {
        self.remote.status == RemoteStatus::Available
    }

    /// Returns `false` if the symptom was already selected.
    pub fn add_symptom(&mut self, id: &str) -> bool {
        let added = self.selection.insert(id);
        if added {
            self.on_selection_changed();
        }
        added
    }

    /// Returns `false` if the symptom was not selected.
    pub fn remove_symptom(&mut self, id: &str) -> bool {
        let removed = self.selection.remove(id);
        if removed {
            self.on_selection_changed();
        }
        removed
    }

    /// Returns `false` if nothing was selected.
    pub fn clear(&mut self) -> bool {
        if self.selection.is_empty() {
            return false;
        }
        self.selection.clear();
        self.on_selection_changed();
        true
    }

    pub fn set_selection(&mut self, selection: Selection) {
        if selection != self.selection {
            self.selection = selection;
            self.on_selection_changed();
        }
    }

    fn on_selection_changed(&mut self) {
        self.rule_results = predict(&self.catalog, &self.selection);
        // Anything in flight was computed for the previous selection.
        self.latest_seq += 1;
        self.remote.loading = false;
        if self.selection.is_empty() || !self.is_remote_available() {
            self.remote.predictions.clear();
        }
        tracing::debug!(
            selected = self.selection.len(),
            matches = self.rule_results.len(),
            "selection changed"
        );
    }

    /// Check service health, then load model metadata if it is up.
    pub async fn connect(&mut self) {
        // Requests issued before a reconnect are answered by a service
        // whose state is no longer known.
        self.latest_seq += 1;
        self.remote.loading = false;
        self.remote.status = RemoteStatus::Checking;

        self.remote.status = match self.service.health_check().await {
            Ok(health) if health.model_loaded => RemoteStatus::Available,
            Ok(health) => RemoteStatus::Unavailable {
                reason: format!("service is {} but no model is loaded", health.status),
            },
            Err(e) => {
                tracing::warn!(error = %e, "prediction service health check failed");
                RemoteStatus::Unavailable {
                    reason: e.to_string(),
                }
            }
        };

        if !self.is_remote_available() {
            self.remote.predictions.clear();
            self.remote.loading = false;
            return;
        }

        match self.service.model_info().await {
            Ok(info) => self.remote.model_info = Some(info),
            Err(e) => tracing::warn!(error = %e, "failed to load model info"),
        }
    }

    /// Issue a remote prediction request for the current selection.
    ///
    /// Returns `None`, and clears the remote predictions, when the selection
    /// is empty or the service is not available.
    pub fn begin_remote_prediction(&mut self) -> Option<PendingPrediction> {
        if self.selection.is_empty() || !self.is_remote_available() {
            self.remote.predictions.clear();
            self.remote.loading = false;
            return None;
        }

        self.latest_seq += 1;
        self.remote.loading = true;
        Some(PendingPrediction {
            seq: self.latest_seq,
            symptoms: self.selection.as_slice().to_vec(),
        })
    }

    /// Hand back the outcome of a request started with
    /// [`Session::begin_remote_prediction`].
    pub fn apply_remote_result(
        &mut self,
        seq: u64,
        result: Result<PredictResponse, MlError>,
    ) -> RemoteUpdate {
        if seq != self.latest_seq {
            tracing::debug!(seq, latest = self.latest_seq, "dropping stale remote prediction");
            return RemoteUpdate::Stale;
        }

        self.remote.loading = false;
        match result {
            Ok(response) => {
                self.remote.predictions = response.predictions;
                RemoteUpdate::Applied
            }
            Err(e) => {
                tracing::warn!(error = %e, "remote prediction failed");
                self.remote.predictions.clear();
                self.remote.status = RemoteStatus::Unavailable {
                    reason: e.to_string(),
                };
                RemoteUpdate::Failed
            }
        }
    }

    /// Request and apply remote predictions for the current selection.
    pub async fn refresh_remote(&mut self) -> Option<RemoteUpdate> {
        let pending = self.begin_remote_prediction()?;
        let service = Arc::clone(&self.service);
        let result = service.predict(pending.symptoms).await;
        Some(self.apply_remote_result(pending.seq, result))
    }

    /// Manual retry: reconnect and, if the service is back, re-request
    /// predictions for the current selection.
    pub async fn retry(&mut self) -> Option<RemoteUpdate> {
        tracing::info!("retrying prediction service");
        self.connect().await;
        self.refresh_remote().await
    }
}
