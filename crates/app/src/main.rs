//! Gatekeeper - Main Entry Point
//!
//! Wires the reqwest, file-storage and console adapters into an
//! [`AuthClient`] and runs one subcommand against it.

mod cli;
mod commands;
mod settings;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use gatekeeper_application::AuthClient;
use gatekeeper_application::ports::KeyValueStorage;
use gatekeeper_infrastructure::{
    ConsoleNavigator, FileStorage, MemoryStorage, ReqwestHttpClient, SystemClock,
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = settings::load(cli.config.as_deref())?;
    tracing::debug!(
        base_url = %config.base_url,
        "starting gatekeeper v{}",
        env!("CARGO_PKG_VERSION")
    );

    let storage: Arc<dyn KeyValueStorage> = if cli.ephemeral {
        Arc::new(MemoryStorage::new())
    } else {
        let path = settings::storage_path(cli.storage)?;
        tracing::debug!(storage = %path.display(), "using session file");
        Arc::new(FileStorage::open(path)?)
    };
    let navigator = Arc::new(ConsoleNavigator::new(config.base_url.clone()));
    let http = Arc::new(ReqwestHttpClient::new(&config.user_agent)?);

    let client = AuthClient::new(
        config,
        http,
        storage,
        navigator.clone(),
        Arc::new(SystemClock::new()),
    )?;

    commands::run(&client, &navigator, cli.command).await
}
