//! Configuration management for the phonebook service.
//!
//! This module handles loading and validating configuration from environment
//! variables, after loading a `.env` file if one is present.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::net::SocketAddr;

/// Default listen address.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Default SQLite database file.
pub const DEFAULT_DATABASE_PATH: &str = "phonebook.db";

/// Configuration for the phonebook service.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server listens on
    pub bind_addr: SocketAddr,

    /// SQLite database path (`:memory:` for an ephemeral database)
    pub database_path: String,

    /// Insert the sample contacts when the table is empty (default: true)
    pub seed_sample_data: bool,

    /// Log level used when `RUST_LOG` is not set (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `PHONEBOOK_BIND_ADDR`: Listen address (default: 127.0.0.1:8080)
    /// - `PHONEBOOK_DATABASE_PATH`: SQLite path (default: phonebook.db)
    /// - `PHONEBOOK_SEED_SAMPLE_DATA`: Seed sample contacts (default: true)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let bind_addr = match env::var("PHONEBOOK_BIND_ADDR") {
            Ok(val) => val.parse::<SocketAddr>().map_err(|_| ConfigError::InvalidValue {
                var: "PHONEBOOK_BIND_ADDR".to_string(),
                reason: format!("Must be a socket address like 127.0.0.1:8080, got: {}", val),
            })?,
            Err(_) => Self::default_bind_addr(),
        };

        let database_path = env::var("PHONEBOOK_DATABASE_PATH")
            .unwrap_or_else(|_| DEFAULT_DATABASE_PATH.to_string());
        if database_path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "PHONEBOOK_DATABASE_PATH".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let seed_sample_data = Self::parse_env_bool("PHONEBOOK_SEED_SAMPLE_DATA", true)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            bind_addr,
            database_path,
            seed_sample_data,
            log_level,
        })
    }

    fn default_bind_addr() -> SocketAddr {
        SocketAddr::from(([127, 0, 0, 1], 8080))
    }

    /// Parse an environment variable as a boolean with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true/false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind_addr: Self::default_bind_addr(),
            database_path: DEFAULT_DATABASE_PATH.to_string(),
            seed_sample_data: true,
            log_level: "info".to_string(),
        }
    }
}
