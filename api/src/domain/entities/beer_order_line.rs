//! Beer order line entity
//!
//! One product and quantity entry within a beer order.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Unique identifier for an order line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BeerOrderLineId(pub Uuid);

impl BeerOrderLineId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BeerOrderLineId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for BeerOrderLineId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for BeerOrderLineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BeerOrderLine {
    pub id: BeerOrderLineId,
    pub version: i64,
    pub created_date: DateTime<Utc>,
    pub last_modified_date: DateTime<Utc>,
    pub beer_id: Uuid,
    pub order_quantity: i32,
}

impl BeerOrderLine {
    /// Quantities must be positive
    pub fn is_valid_quantity(&self) -> bool {
        self.order_quantity > 0
    }
}
