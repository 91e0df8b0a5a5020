//! # Cart Module
//!
//! The customer's shopping cart and the variant matching behind it.
//!
//! ## Two Insertion Policies
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How items enter the cart                             │
//! │                                                                         │
//! │  Vending tile tap ─────► add_or_increment()                            │
//! │                            │                                            │
//! │                            ├── same (menu, variant key) exists?         │
//! │                            │      yes → quantity + 1, stays in place    │
//! │                            └──    no  → append with quantity 1          │
//! │                                                                         │
//! │  Option picker "Add" ──► add_line()                                    │
//! │                            └── always append, even if identical         │
//! │                                (each add is its own purchase line)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Line Lifecycle
//! ```text
//! create(qty=1) ──► increment(qty+1)* ──► decrement(qty-1) ──► ... ──► absent
//!                                     └─► remove_by_match ───────────► absent
//! ```
//! There is no resting state at quantity 0: dropping to zero removes the line.
//!
//! The cart is an ordinary owned value. The application keeps one per
//! kiosk session and passes it where needed.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{options_total, MenuItem, OrderType, SelectedOption, Translations};
use crate::validation::validate_quantity;
use crate::variant::{canonical_key, VariantKey};
use crate::vending::VendingCard;
use crate::{MAX_CART_LINES, MAX_LINE_QUANTITY};

// =============================================================================
// Line Details
// =============================================================================

/// Display fields frozen onto a cart line when it is created.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineDetails {
    pub menu_name: String,
    #[serde(default)]
    pub menu_name_translations: Translations,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl LineDetails {
    /// Details with only a name.
    pub fn named(menu_name: impl Into<String>) -> Self {
        LineDetails {
            menu_name: menu_name.into(),
            ..Default::default()
        }
    }

    /// Snapshot of a menu item's display fields (source-language name).
    pub fn from_menu(menu: &MenuItem) -> Self {
        LineDetails {
            menu_name: menu.name.clone(),
            menu_name_translations: menu.name_translations.clone(),
            image_url: menu.image_url.clone(),
        }
    }

    /// Snapshot of a vending card's display fields (localized name).
    pub fn from_card(card: &VendingCard) -> Self {
        LineDetails {
            menu_name: card.menu_name.clone(),
            menu_name_translations: card.menu_name_translations.clone(),
            image_url: card.image_url.clone(),
        }
    }
}

// =============================================================================
// Cart Line
// =============================================================================

/// One row in the cart: a (menu, variant) pair and its quantity.
///
/// ## Invariants
/// - `subtotal == (unit_price + Σ selected_options[].price_modifier) × quantity`
/// - `quantity >= 1`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLine {
    pub menu_id: i64,
    pub menu_name: String,
    pub menu_name_translations: Translations,
    pub image_url: Option<String>,
    pub quantity: i64,
    /// Base price of the menu item, frozen when the line was created.
    pub unit_price: i64,
    pub selected_options: Vec<SelectedOption>,
    pub subtotal: i64,
}

impl CartLine {
    fn new(
        menu_id: i64,
        unit_price: Money,
        options: &[SelectedOption],
        quantity: i64,
        details: &LineDetails,
    ) -> Self {
        let mut line = CartLine {
            menu_id,
            menu_name: details.menu_name.clone(),
            menu_name_translations: details.menu_name_translations.clone(),
            image_url: details.image_url.clone(),
            quantity,
            unit_price: unit_price.won(),
            selected_options: options.to_vec(),
            subtotal: 0,
        };
        line.recompute();
        line
    }

    /// Variant identity of this line.
    pub fn key(&self) -> VariantKey {
        canonical_key(&self.selected_options)
    }

    /// Price of one unit including option modifiers.
    pub fn unit_total(&self) -> Money {
        Money::from_won(self.unit_price) + options_total(&self.selected_options)
    }

    pub fn subtotal(&self) -> Money {
        Money::from_won(self.subtotal)
    }

    fn matches(&self, menu_id: i64, key: &VariantKey) -> bool {
        self.menu_id == menu_id && &self.key() == key
    }

    fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.subtotal = self.unit_total().multiply_quantity(self.quantity).won();
    }
}

// =============================================================================
// Slice Operations
// =============================================================================

/// Position of the first line for `menu_id` with the same variant as `options`.
///
/// Not finding a line is an ordinary outcome, hence `Option`.
pub fn find_matching_index(lines: &[CartLine], menu_id: i64, options: &[SelectedOption]) -> Option<usize> {
    let key = canonical_key(options);
    lines.iter().position(|line| line.matches(menu_id, &key))
}

/// Sum of line subtotals. Zero for an empty cart.
pub fn total_amount(lines: &[CartLine]) -> Money {
    lines.iter().map(CartLine::subtotal).sum()
}

/// Sum of line quantities. Zero for an empty cart.
pub fn total_item_count(lines: &[CartLine]) -> i64 {
    lines.iter().map(|line| line.quantity).sum()
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart of one kiosk session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Cart {
    lines: Vec<CartLine>,
    order_type: Option<OrderType>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn order_type(&self) -> Option<OrderType> {
        self.order_type
    }

    pub fn set_order_type(&mut self, order_type: Option<OrderType>) {
        self.order_type = order_type;
    }

    /// Vending tap: increments the matching line in place, or appends a new
    /// line with quantity 1.
    ///
    /// ## Returns
    /// Index of the affected line.
    ///
    /// ## Errors
    /// - `QuantityTooLarge` if the line is already at the maximum
    /// - `CartTooLarge` if a new line would exceed the line limit
    pub fn add_or_increment(
        &mut self,
        menu_id: i64,
        unit_price: Money,
        options: &[SelectedOption],
        details: &LineDetails,
    ) -> CoreResult<usize> {
        if let Some(index) = find_matching_index(&self.lines, menu_id, options) {
            let line = &mut self.lines[index];
            let new_qty = line.quantity + 1;
            if new_qty > MAX_LINE_QUANTITY {
                return Err(CoreError::QuantityTooLarge {
                    requested: new_qty,
                    max: MAX_LINE_QUANTITY,
                });
            }
            line.set_quantity(new_qty);
            return Ok(index);
        }

        self.push_line(CartLine::new(menu_id, unit_price, options, 1, details))
    }

    /// Option-picker add: always appends a new line, even when an identical
    /// variant is already in the cart.
    pub fn add_line(
        &mut self,
        menu_id: i64,
        unit_price: Money,
        options: &[SelectedOption],
        quantity: i64,
        details: &LineDetails,
    ) -> CoreResult<usize> {
        validate_quantity(quantity)?;
        self.push_line(CartLine::new(menu_id, unit_price, options, quantity, details))
    }

    fn push_line(&mut self, line: CartLine) -> CoreResult<usize> {
        if self.lines.len() >= MAX_CART_LINES {
            return Err(CoreError::CartTooLarge {
                max: MAX_CART_LINES,
            });
        }
        self.lines.push(line);
        Ok(self.lines.len() - 1)
    }

    /// Index of the first line matching `(menu_id, options)`.
    pub fn find_matching_index(&self, menu_id: i64, options: &[SelectedOption]) -> Option<usize> {
        find_matching_index(&self.lines, menu_id, options)
    }

    /// Index of the first line for `menu_id` with variant `key`.
    ///
    /// Works from ids alone, so lines whose menu or options have since left
    /// the catalog can still be found.
    pub fn find_by_key(&self, menu_id: i64, key: &VariantKey) -> Option<usize> {
        self.lines.iter().position(|line| line.matches(menu_id, key))
    }

    /// Removes the first line matching `(menu_id, options)`.
    ///
    /// No match is a no-op and returns `None`.
    pub fn remove_by_match(&mut self, menu_id: i64, options: &[SelectedOption]) -> Option<CartLine> {
        self.remove_by_key(menu_id, &canonical_key(options))
    }

    /// Removes the first line for `menu_id` with variant `key`.
    pub fn remove_by_key(&mut self, menu_id: i64, key: &VariantKey) -> Option<CartLine> {
        let index = self.find_by_key(menu_id, key)?;
        Some(self.lines.remove(index))
    }

    /// Decreases the matching line by one, removing it when it reaches zero.
    ///
    /// ## Returns
    /// Remaining quantity (`0` when the line was removed), or `None` when
    /// nothing matched.
    pub fn decrement_by_match(&mut self, menu_id: i64, options: &[SelectedOption]) -> Option<i64> {
        self.decrement_by_key(menu_id, &canonical_key(options))
    }

    /// [`Cart::decrement_by_match`] for a precomputed key.
    pub fn decrement_by_key(&mut self, menu_id: i64, key: &VariantKey) -> Option<i64> {
        let index = self.find_by_key(menu_id, key)?;
        let remaining = self.lines[index].quantity - 1;
        if remaining <= 0 {
            self.lines.remove(index);
            return Some(0);
        }
        self.lines[index].set_quantity(remaining);
        Some(remaining)
    }

    /// Quantity badge for a variant: the matching line's quantity, or 0.
    pub fn quantity_of(&self, menu_id: i64, options: &[SelectedOption]) -> i64 {
        self.find_matching_index(menu_id, options)
            .map(|i| self.lines[i].quantity)
            .unwrap_or(0)
    }

    /// Sets the quantity of the line at `index`; `0` removes it.
    pub fn update_quantity(&mut self, index: usize, quantity: i64) -> CoreResult<()> {
        if index >= self.lines.len() {
            return Err(CoreError::LineNotFound { index });
        }
        if quantity == 0 {
            self.lines.remove(index);
            return Ok(());
        }
        validate_quantity(quantity)?;
        self.lines[index].set_quantity(quantity);
        Ok(())
    }

    /// Removes the line at `index`, if there is one.
    pub fn remove_at(&mut self, index: usize) -> Option<CartLine> {
        if index < self.lines.len() {
            Some(self.lines.remove(index))
        } else {
            None
        }
    }

    /// Empties the cart and forgets the order type.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.order_type = None;
    }

    /// Sum of subtotals.
    pub fn total_amount(&self) -> Money {
        total_amount(&self.lines)
    }

    /// Sum of quantities.
    pub fn total_item_count(&self) -> i64 {
        total_item_count(&self.lines)
    }

    /// Number of lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
