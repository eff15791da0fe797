//! Mock implementations of port traits
//!
//! These record the arguments they were called with, or fail, so tests can
//! check what the service layer passes down and how it handles errors.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{BeerOrder, BeerOrderId, CustomerId, Page, PageRequest};
use crate::domain::ports::BeerOrderRepository;
use crate::error::DomainError;

// ============================================================================
// Recording Beer Order Repository
// ============================================================================

/// Returns canned orders without filtering and records every call
#[derive(Default)]
pub struct RecordingBeerOrderRepository {
    orders: Vec<BeerOrder>,
    lookups: Arc<RwLock<Vec<(CustomerId, BeerOrderId)>>>,
    listings: Arc<RwLock<Vec<(CustomerId, PageRequest)>>>,
}

impl RecordingBeerOrderRepository {
    pub fn returning(orders: Vec<BeerOrder>) -> Self {
        Self {
            orders,
            ..Default::default()
        }
    }

    pub fn lookups(&self) -> Vec<(CustomerId, BeerOrderId)> {
        self.lookups.read().unwrap().clone()
    }

    pub fn listings(&self) -> Vec<(CustomerId, PageRequest)> {
        self.listings.read().unwrap().clone()
    }
}

#[async_trait]
impl BeerOrderRepository for RecordingBeerOrderRepository {
    async fn find_by_customer_and_id(
        &self,
        customer_id: &CustomerId,
        order_id: &BeerOrderId,
    ) -> Result<Option<BeerOrder>, DomainError> {
        self.lookups
            .write()
            .unwrap()
            .push((*customer_id, *order_id));
        // Ignores the customer on purpose
        Ok(self.orders.iter().find(|o| o.id == *order_id).cloned())
    }

    async fn find_page_by_customer(
        &self,
        customer_id: &CustomerId,
        page: PageRequest,
    ) -> Result<Page<BeerOrder>, DomainError> {
        self.listings.write().unwrap().push((*customer_id, page));
        Ok(Page::new(
            self.orders.clone(),
            page,
            self.orders.len() as u64,
        ))
    }
}

// ============================================================================
// Failing Beer Order Repository
// ============================================================================

/// Every call fails with a database error
pub struct FailingBeerOrderRepository;

#[async_trait]
impl BeerOrderRepository for FailingBeerOrderRepository {
    async fn find_by_customer_and_id(
        &self,
        _customer_id: &CustomerId,
        _order_id: &BeerOrderId,
    ) -> Result<Option<BeerOrder>, DomainError> {
        Err(DomainError::Database("connection refused".to_string()))
    }

    async fn find_page_by_customer(
        &self,
        _customer_id: &CustomerId,
        _page: PageRequest,
    ) -> Result<Page<BeerOrder>, DomainError> {
        Err(DomainError::Database("connection refused".to_string()))
    }
}
