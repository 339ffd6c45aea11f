use std::str::FromStr;

use medcheck_core::models::{ConfidenceTier, Disease, Selection, Severity};

#[test]
fn selection_deduplicates_and_keeps_insertion_order() {
    let mut selection = Selection::new();
    assert!(selection.insert("fever"));
    assert!(selection.insert("cough"));
    assert!(!selection.insert("fever"));
    assert_eq!(selection.as_slice(), ["fever", "cough"]);
    assert_eq!(selection.len(), 2);

    assert!(selection.remove("fever"));
    assert!(!selection.remove("fever"));
    assert_eq!(selection.as_slice(), ["cough"]);

    selection.clear();
    assert!(selection.is_empty());
}

#[test]
fn selection_collects_without_duplicates() {
    let selection: Selection = ["a", "b", "a", "c", "b"].into_iter().collect();
    assert_eq!(selection.as_slice(), ["a", "b", "c"]);
    assert!(selection.to_set().contains("c"));
}

#[test]
fn selection_serializes_as_a_list() {
    let selection: Selection = ["rash", "itching"].into_iter().collect();
    let json = serde_json::to_string(&selection).unwrap();
    assert_eq!(json, r#"["rash","itching"]"#);

    let parsed: Selection = serde_json::from_str(r#"["rash","rash","itching"]"#).unwrap();
    assert_eq!(parsed, selection);
}

#[test]
fn severity_parses_and_displays() {
    assert_eq!(Severity::from_str("High").unwrap(), Severity::High);
    assert_eq!(Severity::from_str(" low ").unwrap(), Severity::Low);
    assert!(Severity::from_str("critical").is_err());
    assert_eq!(Severity::Medium.to_string(), "medium");
    assert_eq!(
        serde_json::to_string(&Severity::Medium).unwrap(),
        r#""medium""#
    );
}

#[test]
fn confidence_tier_boundaries() {
    assert_eq!(ConfidenceTier::from_confidence(100), ConfidenceTier::High);
    assert_eq!(ConfidenceTier::from_confidence(75), ConfidenceTier::High);
    assert_eq!(ConfidenceTier::from_confidence(74), ConfidenceTier::Medium);
    assert_eq!(ConfidenceTier::from_confidence(50), ConfidenceTier::Medium);
    assert_eq!(ConfidenceTier::from_confidence(49), ConfidenceTier::Low);
    assert_eq!(ConfidenceTier::from_confidence(0), ConfidenceTier::Low);
}

#[test]
fn disease_deserializes_from_catalog_json() {
    let disease: Disease = serde_json::from_str(
        r#"{
            "id": "asthma",
            "name": "Asthma",
            "symptoms": ["shortness_breath", "wheezing", "cough", "chest_pain"],
            "description": "A condition where airways narrow and swell",
            "severity": "medium",
            "category": "Respiratory"
        }"#,
    )
    .unwrap();
    assert_eq!(disease.severity, Severity::Medium);
    assert!(disease.has_symptom("wheezing"));
    assert!(!disease.has_symptom("fever"));
}
