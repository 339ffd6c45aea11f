use std::sync::Arc;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::disease::Disease;

/// One rule-based hypothesis for the current selection.
///
/// Ephemeral: recomputed in full whenever the selection changes. `disease`
/// is shared with the catalog rather than copied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    pub disease: Arc<Disease>,
    /// Integer percentage in `0..=100`.
    pub confidence: u8,
    /// Selected symptom ids that appear in the disease profile, in the
    /// profile's declared order.
    pub matched_symptoms: Vec<String>,
    pub total_symptoms: usize,
}

impl PredictionResult {
    pub fn tier(&self) -> ConfidenceTier {
        ConfidenceTier::from_confidence(self.confidence)
    }
}

/// Coarse banding of a confidence percentage for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ConfidenceTier {
    /// 75 and above.
    High,
    /// 50 to 74.
    Medium,
    /// Below 50.
    Low,
}

impl ConfidenceTier {
    pub fn from_confidence(confidence: u8) -> Self {
        match confidence {
            75.. => ConfidenceTier::High,
            50..=74 => ConfidenceTier::Medium,
            _ => ConfidenceTier::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceTier::High => "high",
            ConfidenceTier::Medium => "medium",
            ConfidenceTier::Low => "low",
        }
    }
}
