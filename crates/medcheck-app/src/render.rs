//! Plain-text rendering of catalog listings and prediction panels.

use std::fmt::Write;

use medcheck_catalog::Catalog;
use medcheck_catalog::display::{PredictionSummary, matched_symptom_names};
use medcheck_core::models::{ConfidenceTier, PredictionResult, Symptom};
use medcheck_ml::types::{ModelInfo, RetrainSummary};

use crate::session::{RemotePanel, RemoteStatus};

pub const DISCLAIMER: &str = "This tool is for educational purposes only. \
Always consult a qualified healthcare professional for medical advice.";

pub fn symptoms(list: &[&Symptom]) -> String {
    let mut out = String::new();
    let mut current: Option<&str> = None;
    for symptom in list {
        if current != Some(symptom.category.as_str()) {
            let _ = writeln!(out, "{}", symptom.category);
            current = Some(symptom.category.as_str());
        }
        let _ = writeln!(out, "  {:<20} {}", symptom.id, symptom.name);
    }
    if list.is_empty() {
        out.push_str("No symptoms match.\n");
    }
    out
}

pub fn diseases(catalog: &Catalog) -> String {
    let mut out = String::new();
    for disease in catalog.diseases() {
        let _ = writeln!(
            out,
            "{:<20} {:<22} {:<7} {}",
            disease.id, disease.name, disease.severity.as_str(), disease.category
        );
    }
    out
}

pub fn selection(catalog: &Catalog, ids: &[String]) -> String {
    if ids.is_empty() {
        return "Selected: (none)\n".to_string();
    }
    let names: Vec<&str> = ids.iter().map(|id| catalog.symptom_name(id)).collect();
    format!("Selected: {}\n", names.join(", "))
}

pub fn rule_results(catalog: &Catalog, results: &[PredictionResult], limit: usize) -> String {
    let mut out = String::from("Possible conditions (rule-based)\n");
    if results.is_empty() {
        out.push_str("  No predictions yet. Select symptoms to see matching conditions.\n");
        return out;
    }

    let summary = PredictionSummary::new(results, limit);
    for result in summary.shown {
        let _ = writeln!(
            out,
            "  {:>3}% [{}] {} ({} severity)",
            result.confidence,
            tier_label(result.tier()),
            result.disease.name,
            result.disease.severity,
        );
        let _ = writeln!(out, "       {}", result.disease.description);
        let _ = writeln!(
            out,
            "       matched {}/{}: {}",
            result.matched_symptoms.len(),
            result.total_symptoms,
            matched_symptom_names(catalog, result).join(", ")
        );
    }
    if summary.is_truncated() {
        let _ = writeln!(
            out,
            "  Showing top {} of {} possible conditions",
            summary.shown.len(),
            summary.total
        );
    }
    out
}

pub fn remote_panel(panel: &RemotePanel, selected: usize, limit: usize) -> String {
    let mut out = String::from("ML predictions\n");
    match &panel.status {
        RemoteStatus::Checking => {
            out.push_str("  Checking prediction service...\n");
        }
        RemoteStatus::Unavailable { reason } => {
            let _ = writeln!(out, "  Prediction service unavailable: {reason}");
            out.push_str("  Start the service and type `retry` (or rerun the command).\n");
        }
        RemoteStatus::Available if panel.loading => {
            out.push_str("  Waiting for predictions...\n");
        }
        RemoteStatus::Available if selected == 0 => {
            out.push_str("  Select symptoms to get ML predictions.\n");
            if let Some(info) = &panel.model_info {
                out.push_str(&indent(&model_info(info)));
            }
        }
        RemoteStatus::Available => {
            if panel.predictions.is_empty() {
                out.push_str("  No predictions returned.\n");
            }
            for prediction in panel.predictions.iter().take(limit) {
                let percent = prediction.confidence.round().clamp(0.0, 100.0) as u8;
                let tier = ConfidenceTier::from_confidence(percent);
                let _ = writeln!(
                    out,
                    "  {:>5.1}% [{}] {}",
                    prediction.confidence,
                    tier_label(tier),
                    prediction.disease
                );
            }
            if panel.predictions.len() > limit {
                let _ = writeln!(
                    out,
                    "  Showing top {limit} of {} predictions",
                    panel.predictions.len()
                );
            }
        }
    }
    out
}

/// How many of the model's most informative symptoms are listed.
pub const TOP_IMPORTANT_SYMPTOMS: usize = 8;

pub fn model_info(info: &ModelInfo) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Model: {}", info.model_type);
    let depth = info
        .max_depth
        .map(|d| d.to_string())
        .unwrap_or_else(|| "unlimited".to_string());
    let _ = writeln!(
        out,
        "  {} trees, max depth {}, {} symptoms, {} diseases",
        info.n_estimators, depth, info.total_features, info.total_diseases
    );
    if !info.top_important_symptoms.is_empty() {
        out.push_str("  Most informative symptoms:\n");
        for item in info.top_important_symptoms.iter().take(TOP_IMPORTANT_SYMPTOMS) {
            let _ = writeln!(out, "    {:<20} {:.3}", item.symptom, item.importance);
        }
    }
    out
}

pub fn retrain_summary(summary: &RetrainSummary) -> String {
    format!(
        "{} (accuracy {:.1}%, {} samples)\n",
        summary.message,
        summary.accuracy * 100.0,
        summary.total_samples
    )
}

fn tier_label(tier: ConfidenceTier) -> &'static str {
    match tier {
        ConfidenceTier::High => "high",
        ConfidenceTier::Medium => "med ",
        ConfidenceTier::Low => "low ",
    }
}

fn indent(text: &str) -> String {
    text.lines().map(|l| format!("  {l}\n")).collect()
}
