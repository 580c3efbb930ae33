use clap::Parser;
use tracing_subscriber::EnvFilter;

pub mod cli;
pub mod commands;
pub mod file_store;
pub mod profile;
pub mod state;


use self::cli::Cli;
use self::state::AppState;

fn main() -> anyhow::Result<()> {
    if let Ok(path) = std::env::var("CARNET_ENV_PATH") {
        dotenvy::from_path(path).ok();
    } else {
        dotenvy::dotenv().ok();
    }

    init_tracing();

    let cli = Cli::parse();
    let config = profile::resolve_config(cli.config.as_deref(), cli.profile.as_deref())?;
    tracing::debug!("Data directory: {}", config.store.data_dir.display());

    let state = AppState::new(config);
    commands::run(&state, cli.cmd)
}

/// Logs go to stderr so exported CSV on stdout stays clean
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("CARNET_LOG_JSON").is_ok_and(|v| v == "1" || v == "true");

    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}
