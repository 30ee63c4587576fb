//! Marketplace API: record-management REST backend for customers, customer
//! accounts, products, and orders over PostgreSQL.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repo;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;
pub mod validation;

pub use config::AppConfig;
pub use error::{AppError, ConfigError};
pub use routes::{api_routes, common_routes};
pub use state::AppState;
pub use store::{connect, ensure_database_exists, run_migrations};
