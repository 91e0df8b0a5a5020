//! # kiosk-core: Pure Business Logic for the Café Kiosk
//!
//! This crate is the **heart** of the kiosk. It contains the storefront and
//! back-office business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Café Kiosk Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Storefront / Admin UI                        │   │
//! │  │   Category tabs ──► Vending grid ──► Cart ──► Signature pay     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    apps/kiosk (commands + state)                │   │
//! │  │    get_vending_grid, tap_vending_card, submit_order, etc.       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ kiosk-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐  │   │
//! │  │   │ variant │ │ vending │ │  cart   │ │  order  │ │translat.│  │   │
//! │  │   │   key   │ │ expand  │ │ matcher │ │ pricing │ │coverage │  │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └─────────┘ └─────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Category, MenuItem, OptionGroup, Order, ...)
//! - [`money`] - Money type with integer arithmetic (whole won)
//! - [`variant`] - Canonical variant key for option selections
//! - [`vending`] - Option-combination expansion into vending cards
//! - [`cart`] - Cart lines, matching and totals
//! - [`order`] - Order requests and server-side re-pricing
//! - [`translation`] - Translation coverage and propagation
//! - [`language`] - Known language codes
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Example Usage
//!
//! ```rust
//! use kiosk_core::cart::{Cart, LineDetails};
//! use kiosk_core::Money;
//!
//! let mut cart = Cart::new();
//! let details = LineDetails::named("Americano");
//!
//! cart.add_or_increment(1, Money::from_won(3000), &[], &details).unwrap();
//! cart.add_or_increment(1, Money::from_won(3000), &[], &details).unwrap();
//!
//! assert_eq!(cart.line_count(), 1);
//! assert_eq!(cart.total_amount().won(), 6000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod language;
pub mod money;
pub mod order;
pub mod translation;
pub mod types;
pub mod validation;
pub mod variant;
pub mod vending;

#[cfg(test)]
mod fixtures;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;
pub use variant::{canonical_key, VariantKey};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum lines allowed in a single cart.
///
/// Prevents runaway carts on an unattended kiosk.
pub const MAX_CART_LINES: usize = 100;

/// Maximum quantity of a single cart line.
pub const MAX_LINE_QUANTITY: i64 = 999;

/// Separator placed between option labels on a vending card.
pub const OPTION_LABEL_SEPARATOR: &str = " / ";

/// Language used for untranslated source text (store content is authored in Korean).
pub const DEFAULT_LANGUAGE: &str = "ko";
