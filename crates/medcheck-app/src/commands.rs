use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use medcheck_catalog::{Catalog, SymptomFilter};
use medcheck_core::models::Selection;
use medcheck_ml::types::PredictResponse;
use medcheck_ml::{MlApiClient, MlError, PredictionService};

use crate::config::{self, MedcheckConfig};
use crate::render;
use crate::session::{RemoteUpdate, Session};

pub const USAGE: &str = "\
usage: medcheck [--json] <command>

commands:
  symptoms [--category C] [--search S]   list selectable symptoms
  categories                             list symptom categories
  diseases                               list the disease catalog
  predict <symptom-id>...                rule-based and ML predictions
  model-info                             describe the remote model
  retrain                                ask the service to retrain
  config show|init|path                  inspect or create the config file
  interactive                            pick symptoms one at a time
";

const REPL_HELP: &str = "\
  add <id>...     select symptoms
  remove <id>...  deselect symptoms
  clear           deselect everything
  show            print both panels
  retry           reconnect to the prediction service
  quit            leave
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    Show,
    Init,
    Path,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Symptoms { category: Option<String>, search: Option<String> },
    Categories,
    Diseases,
    Predict { symptoms: Vec<String> },
    ModelInfo,
    Retrain,
    Config(ConfigAction),
    Interactive,
    Help,
}

pub fn parse_args(args: &[String]) -> eyre::Result<Command> {
    let Some((name, rest)) = args.split_first() else {
        return Ok(Command::Help);
    };

    match name.as_str() {
        "symptoms" => {
            let mut category = None;
            let mut search = None;
            let mut iter = rest.iter();
            while let Some(flag) = iter.next() {
                let value = iter
                    .next()
                    .ok_or_else(|| eyre::eyre!("{flag} needs a value"))?
                    .clone();
                match flag.as_str() {
                    // "all" is the unfiltered view.
                    "--category" => category = Some(value).filter(|c| c != "all"),
                    "--search" => search = Some(value),
                    other => return Err(eyre::eyre!("unknown option: {other}")),
                }
            }
            Ok(Command::Symptoms { category, search })
        }
        "categories" => Ok(Command::Categories),
        "diseases" => Ok(Command::Diseases),
        "predict" => {
            if rest.is_empty() {
                return Err(eyre::eyre!("predict needs at least one symptom id"));
            }
            Ok(Command::Predict {
                symptoms: rest.to_vec(),
            })
        }
        "model-info" => Ok(Command::ModelInfo),
        "retrain" => Ok(Command::Retrain),
        "config" => match rest.first().map(String::as_str) {
            None | Some("show") => Ok(Command::Config(ConfigAction::Show)),
            Some("init") => Ok(Command::Config(ConfigAction::Init)),
            Some("path") => Ok(Command::Config(ConfigAction::Path)),
            Some(other) => Err(eyre::eyre!("unknown config action: {other}")),
        },
        "interactive" => Ok(Command::Interactive),
        "help" | "--help" | "-h" => Ok(Command::Help),
        other => Err(eyre::eyre!("unknown command: {other}\n\n{USAGE}")),
    }
}

pub fn load_catalog(config: &MedcheckConfig) -> eyre::Result<Catalog> {
    let catalog = match &config.catalog_path {
        Some(path) => Catalog::load(path)?,
        None => Catalog::builtin()?,
    };
    Ok(catalog)
}

fn build_service(config: &MedcheckConfig) -> Arc<dyn PredictionService> {
    Arc::new(MlApiClient::new(&config.api_base_url, config.timeout_secs))
}

pub async fn run(command: Command, config: MedcheckConfig) -> eyre::Result<()> {
    match command {
        Command::Help => print!("{USAGE}"),
        Command::Config(action) => run_config(action, &config)?,
        Command::Symptoms { category, search } => {
            let catalog = load_catalog(&config)?;
            let list = catalog.filter_symptoms(&SymptomFilter { search, category });
            print!("{}", render::symptoms(&list));
        }
        Command::Categories => {
            let catalog = load_catalog(&config)?;
            for category in catalog.categories() {
                println!("{category}");
            }
        }
        Command::Diseases => {
            let catalog = load_catalog(&config)?;
            print!("{}", render::diseases(&catalog));
        }
        Command::Predict { symptoms } => {
            let catalog = Arc::new(load_catalog(&config)?);
            for id in &symptoms {
                if catalog.symptom(id).is_none() {
                    tracing::warn!(symptom = %id, "unknown symptom id, it will not match anything");
                }
            }
            let mut session = Session::new(Arc::clone(&catalog), build_service(&config));
            session.connect().await;
            session.set_selection(symptoms.into_iter().collect::<Selection>());
            session.refresh_remote().await;
            print_panels(&session, config.display_limit);
        }
        Command::ModelInfo => {
            let service = build_service(&config);
            let info = service
                .model_info()
                .await
                .map_err(|e| eyre::eyre!("prediction service unavailable: {e}"))?;
            print!("{}", render::model_info(&info));
        }
        Command::Retrain => {
            let service = build_service(&config);
            let summary = service
                .retrain()
                .await
                .map_err(|e| eyre::eyre!("prediction service unavailable: {e}"))?;
            print!("{}", render::retrain_summary(&summary));
        }
        Command::Interactive => {
            let catalog = Arc::new(load_catalog(&config)?);
            let session = Session::new(catalog, build_service(&config));
            interactive(session, config.display_limit).await?;
        }
    }
    Ok(())
}

fn run_config(action: ConfigAction, config: &MedcheckConfig) -> eyre::Result<()> {
    match action {
        ConfigAction::Show => println!("{}", serde_json::to_string_pretty(config)?),
        ConfigAction::Path => println!("{}", config::config_path()?.display()),
        ConfigAction::Init => {
            if config::has_config() {
                println!("config already exists at {}", config::config_path()?.display());
            } else {
                let path = config::save_config(&MedcheckConfig::default())?;
                println!("wrote {}", path.display());
            }
        }
    }
    Ok(())
}

fn print_panels(session: &Session, limit: usize) {
    print!("{}", render::selection(session.catalog(), session.selection().as_slice()));
    println!();
    print!(
        "{}",
        render::rule_results(session.catalog(), session.rule_results(), limit)
    );
    println!();
    print!(
        "{}",
        render::remote_panel(session.remote(), session.selection().len(), limit)
    );
    println!();
    println!("{}", render::DISCLAIMER);
}

/// Spawn the remote request for the current selection, if one is due.
/// The response comes back through `tx` tagged with its sequence number.
fn dispatch_remote(
    session: &mut Session,
    tx: &mpsc::UnboundedSender<(u64, Result<PredictResponse, MlError>)>,
) {
    let Some(pending) = session.begin_remote_prediction() else {
        return;
    };
    let service = session.service();
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = service.predict(pending.symptoms).await;
        let _ = tx.send((pending.seq, result));
    });
}

/// Apply one REPL selection edit. Returns whether the selection changed.
pub fn edit_selection(session: &mut Session, verb: &str, ids: &[&str]) -> bool {
    match verb {
        "add" => {
            let mut changed = false;
            for id in ids {
                if session.catalog().symptom(id).is_none() {
                    println!("unknown symptom: {id}");
                } else {
                    changed |= session.add_symptom(id);
                }
            }
            changed
        }
        "remove" => ids
            .iter()
            .fold(false, |changed, id| session.remove_symptom(id) | changed),
        "clear" => session.clear(),
        _ => false,
    }
}

async fn interactive(mut session: Session, limit: usize) -> eyre::Result<()> {
    session.connect().await;
    println!("Type `help` for commands.");
    print_panels(&session, limit);

    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let mut words = line.split_whitespace();
                let Some(verb) = words.next() else { continue };
                let args: Vec<&str> = words.collect();

                match verb {
                    "add" | "remove" | "clear" => {
                        if edit_selection(&mut session, verb, &args) {
                            dispatch_remote(&mut session, &tx);
                        }
                    }
                    "retry" => {
                        session.connect().await;
                        dispatch_remote(&mut session, &tx);
                    }
                    "show" => {}
                    "help" => {
                        print!("{REPL_HELP}");
                        continue;
                    }
                    "quit" | "exit" => break,
                    other => {
                        println!("unknown command: {other}");
                        continue;
                    }
                }
                print_panels(&session, limit);
            }
            Some((seq, result)) = rx.recv() => {
                match session.apply_remote_result(seq, result) {
                    RemoteUpdate::Stale => {}
                    RemoteUpdate::Applied | RemoteUpdate::Failed => {
                        print!(
                            "{}",
                            render::remote_panel(session.remote(), session.selection().len(), limit)
                        );
                    }
                }
            }
        }
    }

    Ok(())
}
