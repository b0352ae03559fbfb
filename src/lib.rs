//! Pixsoft Storefront Library
//!
//! Catalog browsing and search, account sessions, an admin product panel and
//! cart checkout into an order ledger, over SQLite.

pub mod checkout;
pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod guard;
pub mod models;
pub mod routes;
pub mod search;
pub mod security;
pub mod store;
pub mod views;

pub use config::Config;
pub use db::{open_database, Db};
pub use error::{AppError, Result};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub db: Db,
    pub config: Config,
}

impl AppState {
    /// Create a new AppState with the given database and configuration
    pub fn new(db: Db, config: Config) -> Self {
        Self { db, config }
    }
}
