//! PostgreSQL adapter for BeerOrderRepository

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    AccessMode, ColumnTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction,
    EntityTrait, IsolationLevel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    TransactionTrait,
};
use uuid::Uuid;

use crate::domain::entities::{
    BeerOrder, BeerOrderId, BeerOrderLine, BeerOrderLineId, CustomerId, OrderStatus, Page,
    PageRequest,
};
use crate::domain::ports::BeerOrderRepository;
use crate::entity::{beer_order_lines, beer_orders};
use crate::error::DomainError;

/// PostgreSQL implementation of BeerOrderRepository
///
/// Every read runs in one repeatable-read, read-only transaction so that an
/// order, its lines and the page total all come from the same snapshot.
pub struct PostgresBeerOrderRepository {
    db: DatabaseConnection,
}

impl PostgresBeerOrderRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn begin_read(&self) -> Result<DatabaseTransaction, DomainError> {
        self.db
            .begin_with_config(
                Some(IsolationLevel::RepeatableRead),
                Some(AccessMode::ReadOnly),
            )
            .await
            .map_err(|e| DomainError::Database(e.to_string()))
    }
}

async fn commit(txn: DatabaseTransaction) -> Result<(), DomainError> {
    txn.commit()
        .await
        .map_err(|e| DomainError::Database(e.to_string()))
}

/// Load the lines of the given orders, grouped by order id
async fn lines_for<C: ConnectionTrait>(
    db: &C,
    order_ids: Vec<Uuid>,
) -> Result<HashMap<Uuid, Vec<beer_order_lines::Model>>, DomainError> {
    if order_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let lines = beer_order_lines::Entity::find()
        .filter(beer_order_lines::Column::BeerOrderId.is_in(order_ids))
        .order_by_asc(beer_order_lines::Column::CreatedDate)
        .order_by_asc(beer_order_lines::Column::Id)
        .all(db)
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

    let mut grouped: HashMap<Uuid, Vec<beer_order_lines::Model>> = HashMap::new();
    for line in lines {
        grouped.entry(line.beer_order_id).or_default().push(line);
    }
    Ok(grouped)
}

#[async_trait]
impl BeerOrderRepository for PostgresBeerOrderRepository {
    async fn find_by_customer_and_id(
        &self,
        customer_id: &CustomerId,
        order_id: &BeerOrderId,
    ) -> Result<Option<BeerOrder>, DomainError> {
        let txn = self.begin_read().await?;

        let result = beer_orders::Entity::find_by_id(order_id.0)
            .filter(beer_orders::Column::CustomerId.eq(customer_id.0))
            .one(&txn)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let found = match result {
            Some(order) => {
                let mut lines = lines_for(&txn, vec![order.id]).await?;
                let order_lines = lines.remove(&order.id).unwrap_or_default();
                Some((order, order_lines))
            }
            None => None,
        };

        commit(txn).await?;

        found
            .map(|(order, order_lines)| to_domain(order, order_lines))
            .transpose()
    }

    async fn find_page_by_customer(
        &self,
        customer_id: &CustomerId,
        page: PageRequest,
    ) -> Result<Page<BeerOrder>, DomainError> {
        let txn = self.begin_read().await?;

        let query = beer_orders::Entity::find()
            .filter(beer_orders::Column::CustomerId.eq(customer_id.0))
            .order_by_asc(beer_orders::Column::CreatedDate)
            .order_by_asc(beer_orders::Column::Id);

        let total = query
            .clone()
            .count(&txn)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let offset = match page.offset() {
            Some(offset) if offset < total => offset,
            _ => {
                commit(txn).await?;
                return Ok(Page::empty(page, total));
            }
        };

        let orders = query
            .offset(offset)
            .limit(page.size())
            .all(&txn)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let mut lines = lines_for(&txn, orders.iter().map(|o| o.id).collect()).await?;

        commit(txn).await?;

        let items = orders
            .into_iter()
            .map(|order| {
                let order_lines = lines.remove(&order.id).unwrap_or_default();
                to_domain(order, order_lines)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(items, page, total))
    }
}

/// Convert SeaORM models to a domain order
fn to_domain(
    model: beer_orders::Model,
    lines: Vec<beer_order_lines::Model>,
) -> Result<BeerOrder, DomainError> {
    let order_status: OrderStatus = model
        .order_status
        .parse()
        .map_err(|e: String| DomainError::Database(format!("Order {}: {}", model.id, e)))?;

    let beer_order_lines: Vec<BeerOrderLine> = lines.into_iter().map(|l| l.into()).collect();
    if let Some(line) = beer_order_lines.iter().find(|l| !l.is_valid_quantity()) {
        return Err(DomainError::Database(format!(
            "Order {}: line {} has non-positive quantity {}",
            model.id, line.id, line.order_quantity
        )));
    }

    Ok(BeerOrder {
        id: BeerOrderId(model.id),
        customer_id: CustomerId(model.customer_id),
        beer_order_lines,
        order_status,
        order_status_callback_url: model.order_status_callback_url,
        customer_ref: model.customer_ref,
        created_date: model.created_date.with_timezone(&Utc),
        last_modified_date: model.last_modified_date.with_timezone(&Utc),
        version: model.version,
    })
}

/// Convert SeaORM model to domain entity
impl From<beer_order_lines::Model> for BeerOrderLine {
    fn from(model: beer_order_lines::Model) -> Self {
        BeerOrderLine {
            id: BeerOrderLineId(model.id),
            version: model.version,
            created_date: model.created_date.with_timezone(&Utc),
            last_modified_date: model.last_modified_date.with_timezone(&Utc),
            beer_id: model.beer_id,
            order_quantity: model.order_quantity,
        }
    }
}
