//! SIRIU - Equipment Inventory Management Server
//!
//! A Rust REST API server for the university equipment inventory:
//! equipment records, locations, departments, lookup catalogs, change
//! history and the dashboard aggregation views built on top of them.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
