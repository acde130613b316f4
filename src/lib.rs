//! Library records server
//!
//! A REST JSON API over the books and members of a library, backed by a
//! Postgres database.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub repository: repository::Repository,
}
