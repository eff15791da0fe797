//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod orders;

pub use orders::{get_order, list_orders};
