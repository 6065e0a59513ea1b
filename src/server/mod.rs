//! HTTP server for the phonebook API.
//!
//! Routes:
//! - `GET    /api/phonebook`      list contacts
//! - `POST   /api/phonebook`      add a contact
//! - `PUT    /api/phonebook/:id`  update phone number and/or name
//! - `DELETE /api/phonebook/:id`  delete a contact
//! - `GET    /health`             liveness probe

pub mod handlers;

use crate::services::ContactService;
use anyhow::Result;
use axum::routing::{get, put};
use axum::Router;
use chrono::{Local, NaiveDate};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Base path of the phonebook resource.
pub const PHONEBOOK_PATH: &str = "/api/phonebook";

/// State shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<dyn ContactService>,
    clock: fn() -> NaiveDate,
}

impl AppState {
    /// Create state that derives ages against the local calendar date.
    pub fn new(service: Arc<dyn ContactService>) -> Self {
        Self::with_clock(service, local_today)
    }

    /// Create state with a custom source for "today".
    pub fn with_clock(service: Arc<dyn ContactService>, clock: fn() -> NaiveDate) -> Self {
        Self { service, clock }
    }

    /// Today's date according to the configured clock.
    pub fn today(&self) -> NaiveDate {
        (self.clock)()
    }
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            PHONEBOOK_PATH,
            get(handlers::list_contacts).post(handlers::add_contact),
        )
        .route(
            &format!("{PHONEBOOK_PATH}/:id"),
            put(handlers::update_contact).delete(handlers::delete_contact),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Serve the phonebook API on `addr` until Ctrl-C is received.
pub async fn run_server(addr: SocketAddr, state: AppState) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!("Phonebook API listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("Shutdown signal received");
}
