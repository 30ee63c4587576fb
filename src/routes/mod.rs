//! Route tables: entity API routes and common operational routes.

pub mod api;
pub mod common;

pub use api::api_routes;
pub use common::common_routes;
