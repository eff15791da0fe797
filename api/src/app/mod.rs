//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and ports.

pub mod beer_order_service;

pub use beer_order_service::BeerOrderService;
