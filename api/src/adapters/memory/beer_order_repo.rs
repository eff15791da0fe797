//! In-memory adapter for BeerOrderRepository

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::entities::{BeerOrder, BeerOrderId, CustomerId, Page, PageRequest};
use crate::domain::ports::BeerOrderRepository;
use crate::error::DomainError;

/// Beer orders held in a map, keyed by order id
#[derive(Default)]
pub struct InMemoryBeerOrderRepository {
    orders: RwLock<HashMap<BeerOrderId, BeerOrder>>,
}

impl InMemoryBeerOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with an order
    pub fn with_order(mut self, order: BeerOrder) -> Self {
        self.orders
            .get_mut()
            .unwrap_or_else(|e| e.into_inner())
            .insert(order.id, order);
        self
    }
}

fn lock_poisoned() -> DomainError {
    DomainError::Database("beer order store lock poisoned".to_string())
}

#[async_trait]
impl BeerOrderRepository for InMemoryBeerOrderRepository {
    async fn find_by_customer_and_id(
        &self,
        customer_id: &CustomerId,
        order_id: &BeerOrderId,
    ) -> Result<Option<BeerOrder>, DomainError> {
        let orders = self.orders.read().map_err(|_| lock_poisoned())?;
        Ok(orders
            .get(order_id)
            .filter(|o| o.customer_id == *customer_id)
            .cloned())
    }

    async fn find_page_by_customer(
        &self,
        customer_id: &CustomerId,
        page: PageRequest,
    ) -> Result<Page<BeerOrder>, DomainError> {
        let orders = self.orders.read().map_err(|_| lock_poisoned())?;

        let mut matching: Vec<&BeerOrder> = orders
            .values()
            .filter(|o| o.customer_id == *customer_id)
            .collect();
        matching.sort_by_key(|o| (o.created_date, o.id));

        let total = matching.len() as u64;
        let offset = match page.offset() {
            Some(offset) if offset < total => offset as usize,
            _ => return Ok(Page::empty(page, total)),
        };

        let items = matching
            .into_iter()
            .skip(offset)
            .take(usize::try_from(page.size()).unwrap_or(usize::MAX))
            .cloned()
            .collect();

        Ok(Page::new(items, page, total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    use crate::test_utils::{test_order, test_order_for};

    fn page(index: u64, size: u64) -> PageRequest {
        PageRequest::new(index, size).unwrap()
    }

    #[tokio::test]
    async fn finds_order_by_customer_and_id() {
        let order = test_order();
        let repo = InMemoryBeerOrderRepository::new().with_order(order.clone());

        let found = repo
            .find_by_customer_and_id(&order.customer_id, &order.id)
            .await
            .unwrap();

        assert_eq!(found, Some(order));
    }

    #[tokio::test]
    async fn does_not_find_order_of_other_customer() {
        let order = test_order();
        let repo = InMemoryBeerOrderRepository::new().with_order(order.clone());

        let found = repo
            .find_by_customer_and_id(&CustomerId::new(), &order.id)
            .await
            .unwrap();

        assert!(found.is_none());
    }

    #[tokio::test]
    async fn pages_are_ordered_by_created_date() {
        let customer = CustomerId::new();
        let now = Utc::now();
        let mut newest = test_order_for(customer);
        newest.created_date = now;
        let mut oldest = test_order_for(customer);
        oldest.created_date = now - Duration::hours(2);
        let mut middle = test_order_for(customer);
        middle.created_date = now - Duration::hours(1);

        let repo = InMemoryBeerOrderRepository::new()
            .with_order(newest.clone())
            .with_order(oldest.clone())
            .with_order(middle.clone());

        let result = repo.find_page_by_customer(&customer, page(0, 10)).await.unwrap();
        let ids: Vec<_> = result.items.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![oldest.id, middle.id, newest.id]);
    }

    #[tokio::test]
    async fn equal_created_dates_are_ordered_by_id() {
        let customer = CustomerId::new();
        let now = Utc::now();
        let mut a = test_order_for(customer);
        let mut b = test_order_for(customer);
        a.created_date = now;
        b.created_date = now;
        let mut expected = vec![a.id, b.id];
        expected.sort();

        let repo = InMemoryBeerOrderRepository::new()
            .with_order(a)
            .with_order(b);

        let result = repo.find_page_by_customer(&customer, page(0, 10)).await.unwrap();
        let ids: Vec<_> = result.items.iter().map(|o| o.id).collect();
        assert_eq!(ids, expected);
    }

    #[tokio::test]
    async fn pages_walk_through_all_orders() {
        let customer = CustomerId::new();
        let now = Utc::now();
        let orders: Vec<BeerOrder> = (0..5)
            .map(|i| {
                let mut o = test_order_for(customer);
                o.created_date = now + Duration::minutes(i);
                o
            })
            .collect();
        let repo = orders
            .iter()
            .cloned()
            .fold(InMemoryBeerOrderRepository::new(), |repo, o| repo.with_order(o));

        let mut seen = Vec::new();
        for index in 0..3 {
            let result = repo
                .find_page_by_customer(&customer, page(index, 2))
                .await
                .unwrap();
            assert_eq!(result.total_count, 5);
            seen.extend(result.items.into_iter().map(|o| o.id));
        }

        let expected: Vec<_> = orders.iter().map(|o| o.id).collect();
        assert_eq!(seen, expected);
    }

    #[tokio::test]
    async fn maximal_page_size_takes_all_orders() {
        let customer = CustomerId::new();
        let repo = InMemoryBeerOrderRepository::new()
            .with_order(test_order_for(customer))
            .with_order(test_order_for(customer));

        let result = repo
            .find_page_by_customer(&customer, page(0, u64::MAX))
            .await
            .unwrap();

        assert_eq!(result.items.len(), 2);
        assert_eq!(result.total_count, 2);
    }

    #[tokio::test]
    async fn huge_page_index_is_empty() {
        let customer = CustomerId::new();
        let repo = InMemoryBeerOrderRepository::new().with_order(test_order_for(customer));

        let result = repo
            .find_page_by_customer(&customer, page(u64::MAX, 10))
            .await
            .unwrap();

        assert!(result.items.is_empty());
        assert_eq!(result.total_count, 1);
    }
}
