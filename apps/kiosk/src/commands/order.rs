//! # Order Commands
//!
//! Checkout and the counter's order queue.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  submit_order                                                           │
//! │     │                                                                   │
//! │     ├── 1. OrderRequest::from_cart (ids + quantities only)              │
//! │     ├── 2. price_order against the live catalog                         │
//! │     ├── 3. OrderState::place → "A001", pending                          │
//! │     └── 4. clear the cart                                               │
//! │                                                                         │
//! │  Counter screen: list_orders(Some("pending")) ──► update_order_status   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use kiosk_core::order::{price_order, OrderRequest};
use kiosk_core::validation::parse_order_status;
use kiosk_core::{CoreError, Order};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::{CartState, CatalogState, OrderState, SettingsState};

/// Prices and records an order request.
///
/// The request only carries ids and quantities; every price comes from the
/// catalog.
///
/// ## Errors
/// - `ORDER_ERROR` if nothing in the request could be priced
/// - `VALIDATION_ERROR` for a bad quantity
pub fn place_order(catalog: &CatalogState, orders: &OrderState, request: &OrderRequest) -> Result<Order, ApiError> {
    debug!(items = request.items.len(), language = %request.language, "place_order command");

    let priced = catalog.read(|categories| price_order(categories, request))?;
    let order = orders.place(priced, request, Utc::now());

    info!(
        order_id = %order.id,
        order_number = %order.order_number,
        total = order.total_amount,
        items = order.item_count(),
        "Order placed"
    );
    Ok(order)
}

/// Turns the current cart into an order and empties the cart.
///
/// The cart is left untouched when the order fails.
pub fn submit_order(
    catalog: &CatalogState,
    cart: &CartState,
    orders: &OrderState,
    settings: &SettingsState,
    language: Option<&str>,
) -> Result<Order, ApiError> {
    let language = settings.resolve_language(language);
    debug!(language = %language, "submit_order command");

    cart.with_cart_mut(|c| -> Result<Order, ApiError> {
        if c.is_empty() {
            return Err(ApiError::from(CoreError::EmptyOrder));
        }
        let request = OrderRequest::from_cart(c, &language);
        let order = place_order(catalog, orders, &request)?;
        c.clear();
        Ok(order)
    })
}

/// Orders, newest first.
///
/// ## Arguments
/// * `status` - `"pending"` or `"completed"`; `None` lists everything
pub fn list_orders(orders: &OrderState, status: Option<&str>) -> Result<Vec<Order>, ApiError> {
    debug!(?status, "list_orders command");
    let status = status
        .map(parse_order_status)
        .transpose()
        .map_err(CoreError::from)?;
    Ok(orders.list(status))
}

fn parse_order_id(id: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(id).map_err(|_| ApiError::validation(format!("Invalid order id: {}", id)))
}

/// One order by id.
pub fn get_order(orders: &OrderState, id: &str) -> Result<Order, ApiError> {
    debug!(order_id = %id, "get_order command");
    parse_order_id(id)?;
    orders.get(id).ok_or_else(|| ApiError::not_found("Order", id))
}

/// Moves an order to `pending` or `completed`.
pub fn update_order_status(orders: &OrderState, id: &str, status: &str) -> Result<Order, ApiError> {
    debug!(order_id = %id, status = %status, "update_order_status command");
    parse_order_id(id)?;
    let status = parse_order_status(status).map_err(CoreError::from)?;

    let order = orders
        .set_status(id, status)
        .ok_or_else(|| ApiError::not_found("Order", id))?;
    info!(order_number = %order.order_number, status = status.as_str(), "Order status changed");
    Ok(order)
}
