//! Phonebook Service - Main entry point

use anyhow::Result;
use phonebook_service::repositories::{ContactRepository, SqliteContactRepository};
use phonebook_service::services::{seed_sample_contacts, ContactService, ContactServiceImpl};
use phonebook_service::{AppState, Config, ContactStore};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can drive the filter
    let config = Config::from_env();
    let log_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!("Opening contact store at {}", config.database_path);
    let store = ContactStore::open(&config.database_path)?;
    let repository =
        Arc::new(SqliteContactRepository::new(store)) as Arc<dyn ContactRepository>;

    if config.seed_sample_data {
        seed_sample_contacts(repository.as_ref()).await?;
    }

    let service = Arc::new(ContactServiceImpl::new(repository)) as Arc<dyn ContactService>;

    phonebook_service::server::run_server(config.bind_addr, AppState::new(service)).await?;

    info!("Phonebook service shutdown complete");
    Ok(())
}
