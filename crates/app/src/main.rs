//! Rekey - Desktop account-recovery client entry point.
//!
//! Composition root: initializes logging, loads configuration, constructs
//! the adapters, hydrates the session store exactly once and hands
//! everything to the front-end.

mod config;
mod terminal;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use rekey_application::SessionStore;
use rekey_infrastructure::{FileTokenStorage, HttpCredentialService};

use crate::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AppConfig::load();
    tracing::info!(
        api = %config.api_base_url,
        "starting rekey v{}",
        env!("CARGO_PKG_VERSION")
    );

    let storage = FileTokenStorage::new()?;
    let sessions = SessionStore::new(storage);
    sessions.hydrate().await;

    let service = HttpCredentialService::new(&config.api_base_url)?;

    terminal::run(&sessions, service).await?;

    Ok(())
}
