//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::config::Config;

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `reqwest::Client` uses an `Arc` internally
/// - `Arc<Config>` is a reference-counted pointer
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for calls to the external media-upload host.
    ///
    /// Configured with redirects disabled to keep outbound requests pinned to
    /// the configured host.
    pub http_client: reqwest::Client,

    /// Application configuration loaded once at startup.
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, http_client: reqwest::Client, config: Config) -> Self {
        Self {
            db,
            http_client,
            config: Arc::new(config),
        }
    }
}
