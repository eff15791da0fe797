//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod beer_order;
pub mod beer_order_line;
pub mod page;

pub use beer_order::{BeerOrder, BeerOrderId, CustomerId, OrderStatus};
pub use beer_order_line::{BeerOrderLine, BeerOrderLineId};
pub use page::{Page, PageRequest};
