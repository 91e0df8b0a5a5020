//! # Commands Module
//!
//! Every operation the storefront and the back office can invoke.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs          ◄─── You are here (exports)
//! ├── catalog.rs      ◄─── Categories, vending grid, menu detail
//! ├── cart.rs         ◄─── Cart manipulation (tile taps, option picker)
//! ├── order.rs        ◄─── Checkout and the order queue
//! ├── admin.rs        ◄─── Catalog editing
//! ├── translation.rs  ◄─── Translation overview and translate-all
//! └── config.rs       ◄─── Configuration, store settings, language list
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  UI event (tile tap)                                                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  fn tap_vending_card(                                                   │
//! │      catalog: &CatalogState,   ◄── only the state it needs              │
//! │      cart: &CartState,                                                  │
//! │      menu_id: i64,             ◄── plain arguments                      │
//! │      options: &[OptionRef],                                             │
//! │      language: &str,                                                    │
//! │  ) -> Result<CartResponse, ApiError>                                    │
//! │         │                                                               │
//! │         │ (serde, camelCase)                                            │
//! │         ▼                                                               │
//! │  UI receives: CartResponse or { code, message }                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod admin;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod order;
pub mod translation;
