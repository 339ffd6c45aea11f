//! Rule-based disease scoring.
//!
//! For a disease with `D` profile symptoms and a selection of `S` symptoms
//! sharing `m` of them, the confidence is the mean of the two coverages:
//!
//! ```text
//! disease coverage   = m / D
//! selection coverage = m / S
//! confidence         = round((100·m/D + 100·m/S) / 2) = round(50·m·(D + S) / (D·S))
//! ```
//!
//! The value is computed in integer arithmetic and rounded half away from
//! zero, so `62.5` becomes `63` regardless of floating point
//! representation. Since `m <= min(D, S)` the result never exceeds 100; it is
//! clamped anyway.

use std::collections::HashSet;
use std::sync::Arc;

use medcheck_core::models::{Disease, PredictionResult, Selection};

use crate::catalog::Catalog;

/// Score every catalog disease against `selection`.
///
/// Diseases with no matched symptom are omitted. Results are ordered by
/// confidence, highest first; equal confidences keep catalog order. Ids
/// unknown to the catalog never match and are ignored. Pure: equal inputs
/// give identical output.
pub fn predict(catalog: &Catalog, selection: &Selection) -> Vec<PredictionResult> {
    if selection.is_empty() {
        return Vec::new();
    }

    let selected = selection.to_set();
    let mut results: Vec<PredictionResult> = catalog
        .diseases()
        .iter()
        .filter_map(|disease| score(disease, &selected))
        .collect();

    // Stable: ties stay in catalog order.
    results.sort_by(|a, b| b.confidence.cmp(&a.confidence));
    results
}

fn score(disease: &Arc<Disease>, selected: &HashSet<&str>) -> Option<PredictionResult> {
    let matched: Vec<String> = disease
        .symptoms
        .iter()
        .filter(|id| selected.contains(id.as_str()))
        .cloned()
        .collect();

    if matched.is_empty() {
        return None;
    }

    Some(PredictionResult {
        disease: Arc::clone(disease),
        confidence: confidence(matched.len(), disease.symptoms.len(), selected.len()),
        matched_symptoms: matched,
        total_symptoms: disease.symptoms.len(),
    })
}

/// Confidence percentage for `matched` shared symptoms between a profile of
/// `profile_len` symptoms and a selection of `selection_len` symptoms.
///
/// Returns 0 when either set is empty.
pub fn confidence(matched: usize, profile_len: usize, selection_len: usize) -> u8 {
    if profile_len == 0 || selection_len == 0 {
        return 0;
    }
    let m = matched as u64;
    let d = profile_len as u64;
    let s = selection_len as u64;

    let numerator = 50 * m * (d + s);
    let denominator = d * s;
    let rounded = (2 * numerator + denominator) / (2 * denominator);
    rounded.min(100) as u8
}
