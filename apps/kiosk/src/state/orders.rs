//! # Order State
//!
//! In-memory queue of placed orders and the order-number sequence.
//!
//! ```text
//! submit ──► next sequence (1, 2, 3, ...) ──► "A001" ──► push to queue
//!                                                           │
//!          counter screen lists pending orders ◄────────────┤
//!          staff marks them completed ──────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use kiosk_core::order::{create_order, OrderRequest, PricedOrder};
use kiosk_core::{Order, OrderStatus};

#[derive(Debug, Default)]
struct OrderBook {
    /// Last sequence handed out; the first order gets 1.
    last_sequence: u64,
    orders: Vec<Order>,
}

/// Shared order state.
#[derive(Debug, Clone, Default)]
pub struct OrderState {
    book: Arc<Mutex<OrderBook>>,
}

impl OrderState {
    pub fn new() -> Self {
        OrderState::default()
    }

    fn lock(&self) -> MutexGuard<'_, OrderBook> {
        self.book.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Numbers and stores a priced order.
    ///
    /// Sequence allocation and insertion happen under one lock, so two
    /// kiosks submitting at once never share an order number.
    pub fn place(&self, priced: PricedOrder, request: &OrderRequest, created_at: DateTime<Utc>) -> Order {
        let mut book = self.lock();
        book.last_sequence += 1;
        let order = create_order(book.last_sequence, priced, request, created_at);
        book.orders.push(order.clone());
        order
    }

    /// Orders, newest first, optionally filtered by status.
    pub fn list(&self, status: Option<OrderStatus>) -> Vec<Order> {
        let book = self.lock();
        let mut orders: Vec<Order> = book
            .orders
            .iter()
            .filter(|o| status.map_or(true, |s| o.status == s))
            .cloned()
            .collect();
        // Stable sort keeps insertion order for equal timestamps; reverse
        // afterwards so the latest submission comes first.
        orders.sort_by_key(|o| o.created_at);
        orders.reverse();
        orders
    }

    pub fn get(&self, id: &str) -> Option<Order> {
        self.lock().orders.iter().find(|o| o.id == id).cloned()
    }

    /// Sets an order's status. Returns the updated order, or `None` if the
    /// id is unknown.
    pub fn set_status(&self, id: &str, status: OrderStatus) -> Option<Order> {
        let mut book = self.lock();
        let order = book.orders.iter_mut().find(|o| o.id == id)?;
        order.status = status;
        Some(order.clone())
    }

    pub fn len(&self) -> usize {
        self.lock().orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
