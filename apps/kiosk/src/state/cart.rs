//! # Cart State
//!
//! Holds the cart of the customer currently at the kiosk.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  Storefront Action        Command                 Cart State Change     │
//! │  ─────────────────        ───────                 ─────────────────     │
//! │                                                                         │
//! │  Tap vending tile ───────► tap_vending_card() ──► merge or append       │
//! │                                                                         │
//! │  Option picker "Add" ────► add_with_options() ──► always append         │
//! │                                                                         │
//! │  Tile "−" button ────────► decrement_vending_card() ─► qty - 1          │
//! │                                                                         │
//! │  Cart stepper ───────────► update_cart_line() ──► lines[i].qty = n      │
//! │                                                                         │
//! │  Checkout / Cancel ──────► clear_cart() ────────► lines.clear()         │
//! │                                                                         │
//! │  NOTE: All operations acquire the Mutex lock exclusively.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard};

use kiosk_core::cart::Cart;

/// Shared cart state.
///
/// The cart itself is a plain `kiosk_core::cart::Cart`; this wrapper only
/// serializes access to it.
#[derive(Debug, Clone, Default)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        CartState::default()
    }

    fn lock(&self) -> MutexGuard<'_, Cart> {
        // A panic while holding the lock leaves a structurally valid cart.
        self.cart.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let total = cart_state.with_cart(|cart| cart.total_amount());
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.lock();
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// cart_state.with_cart_mut(|cart| cart.add_or_increment(id, price, &options, &details))?;
    /// ```
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.lock();
        f(&mut cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiosk_core::cart::LineDetails;
    use kiosk_core::Money;

    #[test]
    fn test_clones_share_the_same_cart() {
        let state = CartState::new();
        let other = state.clone();

        other
            .with_cart_mut(|c| c.add_or_increment(1, Money::from_won(3000), &[], &LineDetails::named("Americano")))
            .unwrap();

        assert_eq!(state.with_cart(|c| c.total_item_count()), 1);
        assert_eq!(state.with_cart(|c| c.total_amount()), Money::from_won(3000));
    }

    #[test]
    fn test_with_cart_mut_returns_closure_result() {
        let state = CartState::new();
        let was_empty = state.with_cart_mut(|c| {
            let empty = c.is_empty();
            c.clear();
            empty
        });
        assert!(was_empty);
    }
}
