//! Beer order handlers
//!
//! Read endpoints for a customer's beer orders.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{
    BeerOrder, BeerOrderId, BeerOrderLine, CustomerId, Page, PageRequest,
};
use crate::error::{AppError, DomainError};
use crate::AppState;

/// Query parameters for listing orders
#[derive(Debug, Deserialize)]
pub struct ListOrdersQuery {
    /// Zero-based page index
    #[serde(default)]
    pub page: u64,
    pub size: Option<u64>,
}

/// One line of an order
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BeerOrderLineResponse {
    pub id: String,
    pub version: i64,
    pub created_date: String,
    pub last_modified_date: String,
    pub beer_id: String,
    pub order_quantity: i32,
}

impl From<BeerOrderLine> for BeerOrderLineResponse {
    fn from(l: BeerOrderLine) -> Self {
        Self {
            id: l.id.to_string(),
            version: l.version,
            created_date: l.created_date.to_rfc3339(),
            last_modified_date: l.last_modified_date.to_rfc3339(),
            beer_id: l.beer_id.to_string(),
            order_quantity: l.order_quantity,
        }
    }
}

/// A beer order as rendered to clients
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BeerOrderResponse {
    pub id: String,
    pub customer_id: String,
    pub beer_order_lines: Vec<BeerOrderLineResponse>,
    pub order_status: String,
    pub order_status_callback_url: Option<String>,
    pub customer_ref: Option<String>,
    pub created_date: String,
    pub last_modified_date: String,
    pub version: i64,
}

impl From<BeerOrder> for BeerOrderResponse {
    fn from(o: BeerOrder) -> Self {
        Self {
            id: o.id.to_string(),
            customer_id: o.customer_id.to_string(),
            beer_order_lines: o.beer_order_lines.into_iter().map(Into::into).collect(),
            order_status: o.order_status.to_string(),
            order_status_callback_url: o.order_status_callback_url,
            customer_ref: o.customer_ref,
            created_date: o.created_date.to_rfc3339(),
            last_modified_date: o.last_modified_date.to_rfc3339(),
            version: o.version,
        }
    }
}

/// Page envelope for order listings
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BeerOrderPagedList {
    pub content: Vec<BeerOrderResponse>,
    pub number: u64,
    pub size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
    pub number_of_elements: usize,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
}

impl From<Page<BeerOrder>> for BeerOrderPagedList {
    fn from(page: Page<BeerOrder>) -> Self {
        let page = page.map(BeerOrderResponse::from);
        Self {
            number: page.index,
            size: page.size,
            total_elements: page.total_count,
            total_pages: page.total_pages(),
            number_of_elements: page.number_of_elements(),
            first: page.is_first(),
            last: page.is_last(),
            empty: page.is_empty(),
            content: page.items,
        }
    }
}

/// GET /api/v1/customers/:customer_id/orders/:order_id
///
/// Get a single order of a customer.
pub async fn get_order(
    State(state): State<AppState>,
    Path((customer_id, order_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<BeerOrderResponse>, AppError> {
    let order = state
        .order_service
        .get_order(&CustomerId(customer_id), &BeerOrderId(order_id))
        .await?;

    Ok(Json(order.into()))
}

/// GET /api/v1/customers/:customer_id/orders
///
/// List a customer's orders, oldest first.
pub async fn list_orders(
    State(state): State<AppState>,
    Path(customer_id): Path<Uuid>,
    Query(query): Query<ListOrdersQuery>,
) -> Result<Json<BeerOrderPagedList>, AppError> {
    let size = query.size.unwrap_or(state.config.default_page_size);
    if size > state.config.max_page_size {
        return Err(AppError::BadRequest(format!(
            "Page size must not exceed {}",
            state.config.max_page_size
        )));
    }
    let page = PageRequest::new(query.page, size).map_err(|e| match e {
        DomainError::Validation(msg) => AppError::BadRequest(msg),
        e => AppError::Domain(e),
    })?;

    let orders = state
        .order_service
        .list_orders(&CustomerId(customer_id), page)
        .await?;

    Ok(Json(orders.into()))
}
