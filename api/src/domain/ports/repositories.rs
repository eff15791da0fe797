//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (PostgreSQL, in-memory).

use async_trait::async_trait;

use crate::domain::entities::{BeerOrder, BeerOrderId, CustomerId, Page, PageRequest};
use crate::error::DomainError;

/// Read access to beer orders
#[async_trait]
pub trait BeerOrderRepository: Send + Sync {
    /// Find an order by id, scoped to the customer that owns it
    async fn find_by_customer_and_id(
        &self,
        customer_id: &CustomerId,
        order_id: &BeerOrderId,
    ) -> Result<Option<BeerOrder>, DomainError>;

    /// List a customer's orders, oldest first (ties broken by id)
    async fn find_page_by_customer(
        &self,
        customer_id: &CustomerId,
        page: PageRequest,
    ) -> Result<Page<BeerOrder>, DomainError>;
}
