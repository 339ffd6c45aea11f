use eyre::Result;
use tracing_subscriber::EnvFilter;

use medcheck_app::{commands, config};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let json_logs = args.iter().any(|a| a == "--json");
    args.retain(|a| a != "--json");

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    let command = commands::parse_args(&args)?;

    let mut config = config::load_or_default()?;
    config::apply_env_overrides(&mut config)?;

    commands::run(command, config).await
}
