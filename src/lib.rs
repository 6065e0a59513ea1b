//! Phonebook Service - a small HTTP/JSON contact book backed by SQLite.
//!
//! # Architecture
//!
//! - **models**: The contact record, its wire form, and update requests
//! - **domain**: Type-safe identifiers
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **store**: Synchronous SQLite access to the `contacts` table
//! - **repositories**: Async repository trait over the store
//! - **services**: Business rules (phone uniqueness, existence checks, seeding)
//! - **server**: axum router and serve loop

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod server;
pub mod services;
pub mod store;

pub use config::Config;
pub use domain::ContactId;
pub use error::{ConfigError, PhonebookError, StoreError};
pub use models::{Contact, ContactResponse, ContactUpdate};
pub use repositories::{ContactRepository, SqliteContactRepository};
pub use server::AppState;
pub use services::{ContactService, ContactServiceImpl};
pub use store::ContactStore;
