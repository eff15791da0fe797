//! SeaORM entities
//!
//! Row models for the PostgreSQL tables. Domain entities live in
//! `domain::entities`; adapters convert between the two.

pub mod beer_order_lines;
pub mod beer_orders;
