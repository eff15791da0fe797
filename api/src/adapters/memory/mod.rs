//! In-memory adapters
//!
//! Used when no database is configured, and by tests.

pub mod beer_order_repo;

pub use beer_order_repo::InMemoryBeerOrderRepository;
