//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod beer_order_repo;


pub use beer_order_repo::PostgresBeerOrderRepository;
