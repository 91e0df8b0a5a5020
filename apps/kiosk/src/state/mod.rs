//! # State Module
//!
//! Application state for the kiosk, split into one type per concern.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐ ┌──────────────┐ ┌──────────────┐ ┌──────────────┐   │
//! │  │ CatalogState │ │  CartState   │ │  OrderState  │ │ ConfigState  │   │
//! │  │              │ │              │ │              │ │              │   │
//! │  │ RwLock<      │ │ Arc<Mutex<   │ │ Mutex<       │ │ store name   │   │
//! │  │  Vec<        │ │   Cart       │ │  queue +     │ │ languages    │   │
//! │  │  Category>>  │ │ >>           │ │  sequence>   │ │ catalog path │   │
//! │  └──────────────┘ └──────────────┘ └──────────────┘ └──────────────┘   │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • CatalogState: many readers (storefront), rare writers (admin)       │
//! │  • CartState: exclusive access per operation                           │
//! │  • OrderState: exclusive access; sequence and queue move together      │
//! │  • ConfigState: read-only after initialization                         │
//! │  • SettingsState: RwLock<StoreSettings>, seeded from ConfigState       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Commands take only the state they need, e.g.
//! `tap_vending_card(&catalog, &cart, ...)`.

mod cart;
mod catalog;
mod config;
mod orders;
mod settings;

pub use cart::CartState;
pub use catalog::{CatalogError, CatalogState};
pub use config::ConfigState;
pub use orders::OrderState;
pub use settings::SettingsState;
