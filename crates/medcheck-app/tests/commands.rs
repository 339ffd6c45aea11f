use std::sync::Arc;

use medcheck_app::commands::{Command, ConfigAction, edit_selection, load_catalog, parse_args};
use medcheck_app::config::MedcheckConfig;
use medcheck_app::render;
use medcheck_app::session::{RemotePanel, RemoteStatus, Session};
use medcheck_catalog::{Catalog, predict};
use medcheck_core::models::Selection;
use medcheck_ml::MlApiClient;
use medcheck_ml::types::{MlPrediction, ModelInfo, SymptomImportance};

fn args(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

#[test]
fn no_arguments_prints_help() {
    assert_eq!(parse_args(&[]).unwrap(), Command::Help);
}

#[test]
fn parse_symptom_filters() {
    let command = parse_args(&args(&["symptoms", "--category", "Skin", "--search", "dry"])).unwrap();
    assert_eq!(
        command,
        Command::Symptoms {
            category: Some("Skin".to_string()),
            search: Some("dry".to_string()),
        }
    );

    let command = parse_args(&args(&["symptoms", "--category", "all"])).unwrap();
    assert_eq!(
        command,
        Command::Symptoms {
            category: None,
            search: None,
        }
    );

    assert!(parse_args(&args(&["symptoms", "--category"])).is_err());
    assert!(parse_args(&args(&["symptoms", "--colour", "red"])).is_err());
}

#[test]
fn parse_predict_requires_symptoms() {
    assert!(parse_args(&args(&["predict"])).is_err());
    assert_eq!(
        parse_args(&args(&["predict", "fever", "cough"])).unwrap(),
        Command::Predict {
            symptoms: vec!["fever".to_string(), "cough".to_string()],
        }
    );
}

#[test]
fn parse_config_actions() {
    assert_eq!(
        parse_args(&args(&["config"])).unwrap(),
        Command::Config(ConfigAction::Show)
    );
    assert_eq!(
        parse_args(&args(&["config", "init"])).unwrap(),
        Command::Config(ConfigAction::Init)
    );
    assert!(parse_args(&args(&["config", "destroy"])).is_err());
    assert!(parse_args(&args(&["diagnose"])).is_err());
}

#[test]
fn catalog_path_in_config_is_honoured() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    std::fs::write(
        &path,
        r#"{
            "symptoms": [{ "id": "itch", "name": "Itch", "category": "Skin" }],
            "diseases": [{
                "id": "hives", "name": "Hives", "symptoms": ["itch"],
                "description": "Raised welts", "severity": "low", "category": "Skin"
            }]
        }"#,
    )
    .unwrap();

    let config = MedcheckConfig {
        catalog_path: Some(path),
        ..MedcheckConfig::default()
    };
    let catalog = load_catalog(&config).unwrap();
    assert_eq!(catalog.diseases().len(), 1);
    assert!(load_catalog(&MedcheckConfig::default()).unwrap().diseases().len() > 1);
}

#[test]
fn rule_results_render_with_truncation_footer() {
    let catalog = Catalog::builtin().unwrap();
    let selection: Selection = ["fatigue"].into_iter().collect();
    let results = predict(&catalog, &selection);

    let text = render::rule_results(&catalog, &results, 6);
    assert!(text.contains(&format!("Showing top 6 of {} possible conditions", results.len())));
    assert!(text.contains("Fatigue"));
}

#[test]
fn empty_rule_results_render_a_prompt() {
    let catalog = Catalog::builtin().unwrap();
    let text = render::rule_results(&catalog, &[], 6);
    assert!(text.contains("No predictions yet"));
}

#[test]
fn unavailable_panel_renders_retry_hint() {
    let panel = RemotePanel {
        status: RemoteStatus::Unavailable {
            reason: "connection refused".to_string(),
        },
        predictions: vec![],
        model_info: None,
        loading: false,
    };
    let text = render::remote_panel(&panel, 2, 6);
    assert!(text.contains("unavailable: connection refused"));
    assert!(text.contains("retry"));
}

#[test]
fn available_panel_lists_predictions() {
    let panel = RemotePanel {
        status: RemoteStatus::Available,
        predictions: vec![
            MlPrediction {
                disease: "Influenza".to_string(),
                confidence: 81.25,
            },
            MlPrediction {
                disease: "COVID-19".to_string(),
                confidence: 12.0,
            },
        ],
        model_info: None,
        loading: false,
    };
    let text = render::remote_panel(&panel, 2, 1);
    assert!(text.contains("81.2% [high] Influenza") || text.contains("81.3% [high] Influenza"));
    assert!(!text.contains("COVID-19"));
    assert!(text.contains("Showing top 1 of 2 predictions"));
}

#[test]
fn selection_uses_display_names() {
    let catalog = Catalog::builtin().unwrap();
    let text = render::selection(&catalog, &["high_bp".to_string(), "mystery".to_string()]);
    assert_eq!(text, "Selected: High blood pressure, mystery\n");
}

#[test]
fn repl_edits_report_only_real_changes() {
    let catalog = Arc::new(Catalog::builtin().unwrap());
    let mut session = Session::new(catalog, Arc::new(MlApiClient::default_local()));

    assert!(edit_selection(&mut session, "add", &["fever", "cough"]));
    assert!(!edit_selection(&mut session, "add", &["fever"]));
    assert!(!edit_selection(&mut session, "add", &["not_a_symptom"]));
    assert_eq!(session.selection().len(), 2);

    assert!(!edit_selection(&mut session, "remove", &["rash"]));
    assert!(edit_selection(&mut session, "remove", &["rash", "cough"]));
    assert!(edit_selection(&mut session, "clear", &[]));
    assert!(!edit_selection(&mut session, "clear", &[]));
    assert!(session.selection().is_empty());
}

#[test]
fn model_info_lists_at_most_eight_symptoms() {
    let info = ModelInfo {
        model_type: "Random Forest Classifier".to_string(),
        n_estimators: 100,
        max_depth: None,
        total_features: 39,
        total_diseases: 20,
        top_important_symptoms: (0..12)
            .map(|i| SymptomImportance {
                symptom: format!("symptom_{i:02}"),
                importance: 0.1,
            })
            .collect(),
    };

    let text = render::model_info(&info);
    assert!(text.contains("max depth unlimited"));
    assert!(text.contains("symptom_07"));
    assert!(!text.contains("symptom_08"));
    assert_eq!(text.matches("symptom_").count(), render::TOP_IMPORTANT_SYMPTOMS);
}
