use medcheck_core::models::PredictionResult;

use crate::catalog::Catalog;

/// Number of results shown before the list is truncated.
pub const DEFAULT_DISPLAY_LIMIT: usize = 6;

/// A display-sized slice of a ranked result list.
#[derive(Debug, Clone, Copy)]
pub struct PredictionSummary<'a> {
    pub shown: &'a [PredictionResult],
    pub total: usize,
}

impl<'a> PredictionSummary<'a> {
    pub fn new(results: &'a [PredictionResult], limit: usize) -> Self {
        Self {
            shown: &results[..results.len().min(limit)],
            total: results.len(),
        }
    }

    pub fn is_truncated(&self) -> bool {
        self.total > self.shown.len()
    }
}

/// Display names of a result's matched symptoms, in profile order.
pub fn matched_symptom_names<'a>(catalog: &'a Catalog, result: &'a PredictionResult) -> Vec<&'a str> {
    result
        .matched_symptoms
        .iter()
        .map(|id| catalog.symptom_name(id))
        .collect()
}
