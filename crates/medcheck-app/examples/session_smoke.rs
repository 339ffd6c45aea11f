//! Smoke test for a full session against a running prediction service.
//!
//! Connects, selects the given symptoms one at a time (recomputing the
//! rule-based panel after each), then requests ML predictions once.
//!
//! Usage:
//!   MEDCHECK_API_URL=http://localhost:5000/api \
//!   cargo run -p medcheck-app --example session_smoke -- fever cough headache

use std::sync::Arc;

use medcheck_app::commands::load_catalog;
use medcheck_app::config::{self, MedcheckConfig};
use medcheck_app::render;
use medcheck_app::session::{RemoteStatus, Session};
use medcheck_ml::MlApiClient;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .init();

    let symptoms: Vec<String> = std::env::args().skip(1).collect();
    if symptoms.is_empty() {
        return Err(eyre::eyre!("pass one or more symptom ids"));
    }

    let mut config = MedcheckConfig::default();
    config::apply_env_overrides(&mut config)?;

    println!("Service:  {}", config.api_base_url);
    println!("Timeout:  {}s", config.timeout_secs);
    println!();

    let catalog = Arc::new(load_catalog(&config)?);
    let client = MlApiClient::new(&config.api_base_url, config.timeout_secs);
    let mut session = Session::new(Arc::clone(&catalog), Arc::new(client));

    println!("Connecting...");
    session.connect().await;
    match &session.remote().status {
        RemoteStatus::Available => println!("  available"),
        RemoteStatus::Unavailable { reason } => println!("  unavailable: {reason}"),
        RemoteStatus::Checking => println!("  still checking"),
    }
    println!();

    for id in &symptoms {
        session.add_symptom(id);
        let top = session
            .rule_results()
            .first()
            .map(|r| format!("{} ({}%)", r.disease.name, r.confidence))
            .unwrap_or_else(|| "no match".to_string());
        println!("+ {:<20} top rule-based match: {top}", catalog.symptom_name(id));
    }
    println!();

    session.refresh_remote().await;
    print!(
        "{}",
        render::rule_results(session.catalog(), session.rule_results(), config.display_limit)
    );
    println!();
    print!(
        "{}",
        render::remote_panel(session.remote(), session.selection().len(), config.display_limit)
    );

    Ok(())
}
