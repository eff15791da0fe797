//! Beer order domain entity
//!
//! A customer's order of one or more beers. Orders are placed by an external
//! workflow; this service only reads them.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::beer_order_line::BeerOrderLine;

/// Unique identifier for a beer order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct BeerOrderId(pub Uuid);

impl BeerOrderId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BeerOrderId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for BeerOrderId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for BeerOrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of the customer owning an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CustomerId(pub Uuid);

impl CustomerId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CustomerId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for CustomerId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Order lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    New,
    Ready,
    PickedUp,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::New => write!(f, "NEW"),
            OrderStatus::Ready => write!(f, "READY"),
            OrderStatus::PickedUp => write!(f, "PICKED_UP"),
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NEW" => Ok(OrderStatus::New),
            "READY" => Ok(OrderStatus::Ready),
            "PICKED_UP" => Ok(OrderStatus::PickedUp),
            _ => Err(format!("Unknown order status: {}", s)),
        }
    }
}

/// A beer order with its lines
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BeerOrder {
    pub id: BeerOrderId,
    pub customer_id: CustomerId,
    pub beer_order_lines: Vec<BeerOrderLine>,
    pub order_status: OrderStatus,
    /// Where status changes get reported, if the customer asked for it
    pub order_status_callback_url: Option<String>,
    /// Customer supplied reference, opaque to us
    pub customer_ref: Option<String>,
    pub created_date: DateTime<Utc>,
    pub last_modified_date: DateTime<Utc>,
    /// Optimistic locking counter
    pub version: i64,
}

impl BeerOrder {
    /// Check whether this order belongs to the given customer
    pub fn is_owned_by(&self, customer_id: &CustomerId) -> bool {
        self.customer_id == *customer_id
    }
}
