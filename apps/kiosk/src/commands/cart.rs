//! # Cart Commands
//!
//! Cart manipulation for the storefront.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│ Dine-in/ │────►│ Submitted│       │
//! │  │  Cart    │     │          │     │ Take-out │     │  Order   │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                                  │             │
//! │              tap_vending_card                        submit_order       │
//! │              add_with_options                        (order.rs)         │
//! │              decrement_vending_card                                     │
//! │              update_cart_line                                           │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   clear_cart ──────────────────────► (back to empty)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Option choices arrive as `(groupId, optionId)` references. Adding
//! resolves them against the catalog, so cart lines always carry current
//! names and modifiers; removing and decrementing match on the ids alone,
//! so a line stays removable after its menu or group is deleted.

use std::collections::HashSet;

use kiosk_core::cart::{Cart, CartLine, LineDetails};
use kiosk_core::order::OptionRef;
use kiosk_core::validation::validate_quantity;
use kiosk_core::vending::expand;
use kiosk_core::{
    canonical_key, find_menu, Category, CoreError, CoreResult, MenuItem, Money, OrderType, SelectedOption, VariantKey,
};
use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::state::{CartState, CatalogState};

/// Cart response including lines and totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub lines: Vec<CartLine>,
    pub order_type: Option<OrderType>,
    pub total_amount: i64,
    pub total_item_count: i64,
    pub line_count: usize,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            lines: cart.lines().to_vec(),
            order_type: cart.order_type(),
            total_amount: cart.total_amount().won(),
            total_item_count: cart.total_item_count(),
            line_count: cart.line_count(),
        }
    }
}

// =============================================================================
// Option resolution
// =============================================================================

/// Resolves option references against a menu.
///
/// ## Rules
/// - Every reference must name a group of this menu and an option of that group
/// - At most one option per group
/// - With `require_all`, every required group must be chosen
fn resolve_options(menu: &MenuItem, refs: &[OptionRef], require_all: bool) -> CoreResult<Vec<SelectedOption>> {
    let mut seen_groups = HashSet::new();
    let mut selected = Vec::with_capacity(refs.len());

    for r in refs {
        let option = menu
            .select(r.group_id, r.option_id)
            .ok_or(CoreError::UnknownOption {
                menu_id: menu.id,
                group_id: r.group_id,
                option_id: r.option_id,
            })?;
        if !seen_groups.insert(r.group_id) {
            return Err(CoreError::DuplicateGroupChoice { group_id: r.group_id });
        }
        selected.push(option);
    }

    if require_all {
        if let Some(missing) = menu.required_groups().find(|g| !seen_groups.contains(&g.id)) {
            return Err(CoreError::MissingRequiredOption {
                menu_id: menu.id,
                group_id: missing.id,
            });
        }
    }

    Ok(selected)
}

/// Looks up a sellable menu.
fn sellable_menu(categories: &[Category], menu_id: i64) -> CoreResult<&MenuItem> {
    let menu = find_menu(categories, menu_id).ok_or(CoreError::MenuNotFound(menu_id))?;
    if !menu.is_active {
        return Err(CoreError::MenuInactive(menu_id));
    }
    Ok(menu)
}

// =============================================================================
// Commands
// =============================================================================

/// Gets the current cart contents.
pub fn get_cart(cart: &CartState) -> CartResponse {
    debug!("get_cart command");
    cart.with_cart(|c| CartResponse::from(c))
}

/// Adds one of a vending variant.
///
/// ## Behavior
/// - Same menu and same option set already in cart: quantity + 1, same position
/// - Otherwise: appended with quantity 1
///
/// ## Errors
/// - `NOT_FOUND` for an unknown menu
/// - `VALIDATION_ERROR` if the options are not exactly one vending variant
///   (unknown option, missing required group, or an optional add-on)
pub fn tap_vending_card(
    catalog: &CatalogState,
    cart: &CartState,
    menu_id: i64,
    options: &[OptionRef],
    language: &str,
) -> Result<CartResponse, ApiError> {
    debug!(menu_id, options = options.len(), "tap_vending_card command");

    let card = catalog.read(|categories| -> Result<_, ApiError> {
        let menu = sellable_menu(categories, menu_id)?;
        let selected = resolve_options(menu, options, true)?;
        let key = canonical_key(&selected);
        expand(menu, language)?
            .into_iter()
            .find(|card| card.key() == key)
            .ok_or_else(|| ApiError::validation("Vending tiles carry required options only"))
    })?;

    cart.with_cart_mut(|c| -> Result<CartResponse, ApiError> {
        c.add_or_increment(
            card.menu_id,
            Money::from_won(card.unit_price),
            &card.selected_options,
            &LineDetails::from_card(&card),
        )?;
        Ok(CartResponse::from(&*c))
    })
}

/// Adds a line from the option picker.
///
/// Always appends a new line, even when an identical line exists.
///
/// ## Errors
/// - `NOT_FOUND` for an unknown menu
/// - `VALIDATION_ERROR` for foreign options, two choices in one group, a
///   missing required group or a bad quantity
/// - `CART_ERROR` for an inactive menu or a full cart
pub fn add_with_options(
    catalog: &CatalogState,
    cart: &CartState,
    menu_id: i64,
    options: &[OptionRef],
    quantity: i64,
) -> Result<CartResponse, ApiError> {
    debug!(menu_id, options = options.len(), quantity, "add_with_options command");
    validate_quantity(quantity).map_err(CoreError::from)?;

    let (unit_price, selected, details) = catalog.read(|categories| -> CoreResult<_> {
        let menu = sellable_menu(categories, menu_id)?;
        let selected = resolve_options(menu, options, true)?;
        Ok((menu.unit_price(), selected, LineDetails::from_menu(menu)))
    })?;

    cart.with_cart_mut(|c| -> Result<CartResponse, ApiError> {
        c.add_line(menu_id, unit_price, &selected, quantity, &details)?;
        Ok(CartResponse::from(&*c))
    })
}

/// Removes the line holding this exact variant.
///
/// Matches on ids only; the catalog is not consulted. Nothing happens when
/// no line matches.
pub fn remove_vending_card(cart: &CartState, menu_id: i64, options: &[OptionRef]) -> CartResponse {
    debug!(menu_id, options = options.len(), "remove_vending_card command");
    let key = VariantKey::from_refs(options);

    cart.with_cart_mut(|c| {
        c.remove_by_key(menu_id, &key);
        CartResponse::from(&*c)
    })
}

/// Takes one of this exact variant out of the cart (the tile's "−" button).
///
/// At quantity 1 the line disappears. Nothing happens when no line matches.
pub fn decrement_vending_card(cart: &CartState, menu_id: i64, options: &[OptionRef]) -> CartResponse {
    debug!(menu_id, options = options.len(), "decrement_vending_card command");
    let key = VariantKey::from_refs(options);

    cart.with_cart_mut(|c| {
        c.decrement_by_key(menu_id, &key);
        CartResponse::from(&*c)
    })
}

/// Sets the quantity of the line at `index`; zero removes it.
pub fn update_cart_line(cart: &CartState, index: usize, quantity: i64) -> Result<CartResponse, ApiError> {
    debug!(index, quantity, "update_cart_line command");
    cart.with_cart_mut(|c| -> Result<CartResponse, ApiError> {
        c.update_quantity(index, quantity)?;
        Ok(CartResponse::from(&*c))
    })
}

/// Removes the line at `index` (no-op when out of range).
pub fn remove_cart_line(cart: &CartState, index: usize) -> CartResponse {
    debug!(index, "remove_cart_line command");
    cart.with_cart_mut(|c| {
        c.remove_at(index);
        CartResponse::from(&*c)
    })
}

/// Records dine-in or take-out.
pub fn set_order_type(cart: &CartState, order_type: Option<OrderType>) -> CartResponse {
    debug!(?order_type, "set_order_type command");
    cart.with_cart_mut(|c| {
        c.set_order_type(order_type);
        CartResponse::from(&*c)
    })
}

/// Empties the cart and forgets the order type.
pub fn clear_cart(cart: &CartState) -> CartResponse {
    debug!("clear_cart command");
    cart.with_cart_mut(|c| {
        c.clear();
        CartResponse::from(&*c)
    })
}
