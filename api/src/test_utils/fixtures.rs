//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use chrono::Utc;
use uuid::Uuid;

use crate::domain::entities::{
    BeerOrder, BeerOrderId, BeerOrderLine, BeerOrderLineId, CustomerId, OrderStatus,
};

/// Create a test order line for 50 of a random beer
pub fn test_order_line() -> BeerOrderLine {
    test_order_line_for(Uuid::new_v4(), 50)
}

/// Create a test order line for a specific beer and quantity
pub fn test_order_line_for(beer_id: Uuid, order_quantity: i32) -> BeerOrderLine {
    let now = Utc::now();
    BeerOrderLine {
        id: BeerOrderLineId::new(),
        version: 1,
        created_date: now,
        last_modified_date: now,
        beer_id,
        order_quantity,
    }
}

/// Create a NEW test order for a random customer with a single line
pub fn test_order() -> BeerOrder {
    test_order_for(CustomerId::new())
}

/// Create a NEW test order for a specific customer
pub fn test_order_for(customer_id: CustomerId) -> BeerOrder {
    let now = Utc::now();
    BeerOrder {
        id: BeerOrderId::new(),
        customer_id,
        beer_order_lines: vec![test_order_line()],
        order_status: OrderStatus::New,
        order_status_callback_url: Some("http://example.com".to_string()),
        customer_ref: Some("reference".to_string()),
        created_date: now,
        last_modified_date: now,
        version: 1,
    }
}
