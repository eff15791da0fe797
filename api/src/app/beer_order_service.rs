//! Beer order service
//!
//! Looks up single orders and lists a customer's orders page by page.

use std::sync::Arc;

use crate::domain::entities::{BeerOrder, BeerOrderId, CustomerId, Page, PageRequest};
use crate::domain::ports::BeerOrderRepository;
use crate::error::DomainError;

/// Service for reading beer orders
pub struct BeerOrderService<OR>
where
    OR: BeerOrderRepository + ?Sized,
{
    orders: Arc<OR>,
}

impl<OR> BeerOrderService<OR>
where
    OR: BeerOrderRepository + ?Sized,
{
    pub fn new(orders: Arc<OR>) -> Self {
        Self { orders }
    }

    /// Get a single order of a customer
    ///
    /// Returns `DomainError::NotFound` when the customer has no order with that id,
    /// including when the order exists but belongs to someone else.
    pub async fn get_order(
        &self,
        customer_id: &CustomerId,
        order_id: &BeerOrderId,
    ) -> Result<BeerOrder, DomainError> {
        tracing::debug!(%customer_id, %order_id, "Looking up beer order");

        let order = self
            .orders
            .find_by_customer_and_id(customer_id, order_id)
            .await?
            .filter(|o| o.id == *order_id && o.is_owned_by(customer_id));

        match order {
            Some(order) => Ok(order),
            None => {
                tracing::debug!(%customer_id, %order_id, "Beer order not found");
                Err(DomainError::NotFound(format!(
                    "Order {} not found for customer {}",
                    order_id, customer_id
                )))
            }
        }
    }

    /// List a customer's orders
    ///
    /// A page past the end comes back empty with the real total.
    pub async fn list_orders(
        &self,
        customer_id: &CustomerId,
        page: PageRequest,
    ) -> Result<Page<BeerOrder>, DomainError> {
        tracing::debug!(
            %customer_id,
            page = page.index(),
            size = page.size(),
            "Listing beer orders"
        );

        let mut result = self.orders.find_page_by_customer(customer_id, page).await?;

        // Never hand out more than was asked for, or another customer's orders
        result.items.retain(|o| o.is_owned_by(customer_id));
        result.items.truncate(usize::try_from(page.size()).unwrap_or(usize::MAX));

        Ok(result)
    }
}
