//! # Order Module
//!
//! Turns a cart into an order request and prices that request against the
//! catalog.
//!
//! ## Order Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Cart ──► OrderRequest::from_cart ──► (menuId, qty, [groupId,optionId]) │
//! │                                              │                          │
//! │                                              ▼                          │
//! │                           price_order(catalog, request)                 │
//! │                           • prices come from the catalog, never         │
//! │                             from the client                             │
//! │                           • unknown menus / options are skipped         │
//! │                                              │                          │
//! │                                              ▼                          │
//! │                           Order { "A001", pending, lines, total }       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::cart::Cart;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{find_menu, Category, Order, OrderLine, OrderStatus, OrderType, OrderedOption};
use crate::validation::validate_quantity;

// =============================================================================
// Request Types
// =============================================================================

/// A (group, option) reference without display data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OptionRef {
    pub group_id: i64,
    pub option_id: i64,
}

/// One requested line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OrderItemRequest {
    pub menu_id: i64,
    pub quantity: i64,
    #[serde(default)]
    pub selected_options: Vec<OptionRef>,
}

/// What the storefront submits at checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OrderRequest {
    pub items: Vec<OrderItemRequest>,
    pub language: String,
    #[serde(default)]
    pub order_type: Option<OrderType>,
}

impl OrderRequest {
    /// Serializes the cart into a request, dropping display snapshots.
    pub fn from_cart(cart: &Cart, language: &str) -> Self {
        OrderRequest {
            items: cart
                .lines()
                .iter()
                .map(|line| OrderItemRequest {
                    menu_id: line.menu_id,
                    quantity: line.quantity,
                    selected_options: line
                        .selected_options
                        .iter()
                        .map(|o| OptionRef {
                            group_id: o.group_id,
                            option_id: o.option_id,
                        })
                        .collect(),
                })
                .collect(),
            language: language.to_string(),
            order_type: cart.order_type(),
        }
    }
}

// =============================================================================
// Pricing
// =============================================================================

/// Result of pricing a request.
#[derive(Debug, Clone, PartialEq)]
pub struct PricedOrder {
    pub lines: Vec<OrderLine>,
    pub total: Money,
}

/// Prices a request against the current catalog.
///
/// ## Rules
/// - Unit price = menu base price + modifiers of the recognised options
/// - Subtotal = unit price × quantity; total = Σ subtotals
/// - Menus missing from the catalog are skipped
/// - Option references that don't belong to the menu are skipped
///
/// ## Errors
/// - `EmptyOrder` if the request has no items or nothing could be priced
/// - `Validation` if a quantity is out of range
pub fn price_order(categories: &[Category], request: &OrderRequest) -> CoreResult<PricedOrder> {
    if request.items.is_empty() {
        return Err(CoreError::EmptyOrder);
    }

    let mut lines = Vec::with_capacity(request.items.len());
    let mut total = Money::zero();

    for item in &request.items {
        validate_quantity(item.quantity)?;

        let Some(menu) = find_menu(categories, item.menu_id) else {
            continue;
        };

        let mut unit_price = menu.unit_price();
        let mut selected_options = Vec::with_capacity(item.selected_options.len());
        for reference in &item.selected_options {
            let Some(group) = menu.group(reference.group_id) else {
                continue;
            };
            let Some(option) = group.option(reference.option_id) else {
                continue;
            };
            unit_price += option.modifier();
            selected_options.push(OrderedOption {
                group: group.name.clone(),
                option: option.name.clone(),
                price: option.price_modifier,
            });
        }

        let subtotal = unit_price.multiply_quantity(item.quantity);
        total += subtotal;

        lines.push(OrderLine {
            menu_id: menu.id,
            menu_name: menu.name.clone(),
            quantity: item.quantity,
            unit_price: unit_price.won(),
            selected_options,
            subtotal: subtotal.won(),
        });
    }

    if lines.is_empty() {
        return Err(CoreError::EmptyOrder);
    }

    Ok(PricedOrder { lines, total })
}

/// Customer-facing order number for the n-th order: `A001`, `A042`, `A1234`.
pub fn format_order_number(sequence: u64) -> String {
    format!("A{:03}", sequence)
}

/// Assembles a new pending order.
pub fn create_order(
    sequence: u64,
    priced: PricedOrder,
    request: &OrderRequest,
    created_at: DateTime<Utc>,
) -> Order {
    Order {
        id: Uuid::new_v4().to_string(),
        order_number: format_order_number(sequence),
        status: OrderStatus::Pending,
        order_type: request.order_type,
        total_amount: priced.total.won(),
        language: request.language.clone(),
        items: priced.lines,
        created_at,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::LineDetails;
    use crate::fixtures::{americano, category, latte, pick};

    fn catalog() -> Vec<Category> {
        vec![category(1, "Coffee", vec![latte(), americano()])]
    }

    fn item(menu_id: i64, quantity: i64, options: &[(i64, i64)]) -> OrderItemRequest {
        OrderItemRequest {
            menu_id,
            quantity,
            selected_options: options
                .iter()
                .map(|&(group_id, option_id)| OptionRef { group_id, option_id })
                .collect(),
        }
    }

    fn request(items: Vec<OrderItemRequest>) -> OrderRequest {
        OrderRequest {
            items,
            language: "en".to_string(),
            order_type: Some(OrderType::DineIn),
        }
    }

    #[test]
    fn test_from_cart_strips_display_fields() {
        let menu = latte();
        let mut cart = Cart::new();
        cart.set_order_type(Some(OrderType::TakeOut));
        cart.add_line(
            menu.id,
            menu.unit_price(),
            &[pick(&menu, 10, 101), pick(&menu, 20, 201)],
            2,
            &LineDetails::from_menu(&menu),
        )
        .unwrap();

        let req = OrderRequest::from_cart(&cart, "ja");

        assert_eq!(req.language, "ja");
        assert_eq!(req.order_type, Some(OrderType::TakeOut));
        assert_eq!(req.items, vec![item(1, 2, &[(10, 101), (20, 201)])]);
    }

    #[test]
    fn test_price_order_uses_catalog_prices() {
        let priced = price_order(
            &catalog(),
            &request(vec![item(1, 2, &[(10, 101), (20, 201)]), item(2, 1, &[(12, 120)])]),
        )
        .unwrap();

        assert_eq!(priced.lines.len(), 2);
        assert_eq!(priced.lines[0].unit_price, 5500);
        assert_eq!(priced.lines[0].subtotal, 11000);
        assert_eq!(priced.lines[0].selected_options[0].option, "Iced");
        assert_eq!(priced.lines[1].subtotal, 3000);
        assert_eq!(priced.total.won(), 14000);
    }

    #[test]
    fn test_price_order_skips_unknown_menus_and_options() {
        let priced = price_order(
            &catalog(),
            &request(vec![item(404, 1, &[]), item(2, 1, &[(12, 121), (12, 999), (77, 1)])]),
        )
        .unwrap();

        assert_eq!(priced.lines.len(), 1);
        assert_eq!(priced.lines[0].selected_options.len(), 1);
        assert_eq!(priced.total.won(), 3500);
    }

    #[test]
    fn test_price_order_rejects_empty() {
        assert!(matches!(
            price_order(&catalog(), &request(vec![])),
            Err(CoreError::EmptyOrder)
        ));
        assert!(matches!(
            price_order(&catalog(), &request(vec![item(404, 1, &[])])),
            Err(CoreError::EmptyOrder)
        ));
    }

    #[test]
    fn test_price_order_rejects_bad_quantity() {
        assert!(matches!(
            price_order(&catalog(), &request(vec![item(1, 0, &[])])),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn test_order_number_format() {
        assert_eq!(format_order_number(1), "A001");
        assert_eq!(format_order_number(42), "A042");
        assert_eq!(format_order_number(1234), "A1234");
    }

    #[test]
    fn test_create_order_is_pending() {
        let req = request(vec![item(2, 3, &[])]);
        let priced = price_order(&catalog(), &req).unwrap();
        let order = create_order(7, priced, &req, Utc::now());

        assert_eq!(order.order_number, "A007");
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.total_amount, 9000);
        assert_eq!(order.item_count(), 3);
        assert_eq!(order.order_type, Some(OrderType::DineIn));
        assert!(Uuid::parse_str(&order.id).is_ok());
    }
}
