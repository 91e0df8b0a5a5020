//! # Café Kiosk Application Library
//!
//! State, commands and startup for the self-order kiosk. Business rules live
//! in `kiosk-core`; this crate wires them to owned state objects.
//!
//! ## Module Organization
//! ```text
//! kiosk_app/
//! ├── lib.rs              ◄─── You are here (startup & logging)
//! ├── state/
//! │   ├── mod.rs          ◄─── State type exports
//! │   ├── catalog.rs      ◄─── Catalog (RwLock) + JSON loading
//! │   ├── cart.rs         ◄─── Cart of the current customer
//! │   ├── orders.rs       ◄─── Order queue + order numbers
//! │   ├── settings.rs     ◄─── Admin-editable store settings
//! │   └── config.rs       ◄─── Configuration state
//! ├── commands/
//! │   ├── catalog.rs      ◄─── Category tabs, vending grid, menu detail
//! │   ├── cart.rs         ◄─── Tile taps, option picker, cart edits
//! │   ├── order.rs        ◄─── Checkout and order queue
//! │   ├── admin.rs        ◄─── Catalog editing
//! │   ├── translation.rs  ◄─── Translation coverage and translate-all
//! │   └── config.rs       ◄─── Store settings, languages, price formatting
//! └── error.rs            ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod state;

#[cfg(test)]
mod test_support;

use tracing::{info, warn, Level};
use tracing_subscriber::EnvFilter;

use error::ApiError;
use state::{CartState, CatalogState, ConfigState, OrderState, SettingsState};

/// Everything a running kiosk owns.
#[derive(Debug, Clone)]
pub struct Kiosk {
    pub config: ConfigState,
    pub settings: SettingsState,
    pub catalog: CatalogState,
    pub cart: CartState,
    pub orders: OrderState,
}

impl Kiosk {
    /// Builds the state objects from a configuration.
    ///
    /// ## Startup Sequence
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────────┐
    /// │  1. Resolve catalog path ─────────────────────────────────────────────► │
    /// │     • KIOSK_CATALOG_PATH if set                                         │
    /// │     • otherwise <app data dir>/catalog.json                             │
    /// │                                                                         │
    /// │  2. Load catalog ─────────────────────────────────────────────────────► │
    /// │     • missing file: empty catalog, created on the first admin edit      │
    /// │     • unreadable or invalid file: startup fails                         │
    /// │                                                                         │
    /// │  3. Initialize state objects ─────────────────────────────────────────► │
    /// │     • SettingsState: store name and languages from the config           │
    /// │     • CartState: empty cart                                             │
    /// │     • OrderState: empty queue, next number A001                         │
    /// └─────────────────────────────────────────────────────────────────────────┘
    /// ```
    pub fn init(config: ConfigState) -> Result<Self, ApiError> {
        let catalog = load_catalog(&config)?;
        info!(menus = catalog.menu_count(), "Catalog loaded");

        let settings = SettingsState::new(config.store_settings(), config.default_language.clone());

        Ok(Kiosk {
            config,
            settings,
            catalog,
            cart: CartState::new(),
            orders: OrderState::new(),
        })
    }
}

fn load_catalog(config: &ConfigState) -> Result<CatalogState, ApiError> {
    let Some(path) = config.catalog_file() else {
        warn!("Could not determine app data directory, starting with an empty catalog");
        return Ok(CatalogState::empty());
    };

    if !path.exists() {
        warn!(?path, "Catalog file not found, starting with an empty catalog");
        return Ok(CatalogState::empty().with_file(path));
    }

    info!(?path, "Loading catalog");
    Ok(CatalogState::load(&path)?)
}

/// Runs the kiosk: configuration, catalog, and the initial storefront grid.
pub fn run() -> Result<Kiosk, ApiError> {
    init_tracing();

    info!("Starting Café Kiosk");

    let kiosk = Kiosk::init(ConfigState::from_env())?;
    info!(
        store = %kiosk.config.store_name,
        language = %kiosk.config.default_language,
        languages = ?kiosk.config.supported_languages,
        "Configuration loaded"
    );

    let overview = commands::translation::translation_overview(&kiosk.catalog, &kiosk.settings, None)?;
    for coverage in overview.coverage.iter().filter(|c| !c.is_complete()) {
        warn!(
            language = %coverage.language,
            percent = coverage.percent(),
            "Catalog translations incomplete"
        );
    }

    let rows = commands::catalog::get_vending_rows(&kiosk.catalog, &kiosk.cart, &kiosk.settings, &kiosk.config, None)?;
    for (index, row) in rows.iter().enumerate() {
        let tiles: Vec<String> = row
            .iter()
            .map(|t| {
                let price = kiosk.config.format_price(t.card.total_price);
                if t.card.option_label.is_empty() {
                    format!("{} {}", t.card.menu_name, price)
                } else {
                    format!("{} ({}) {}", t.card.menu_name, t.card.option_label, price)
                }
            })
            .collect();
        info!(row = index + 1, ?tiles, "Vending shelf");
    }

    Ok(kiosk)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=kiosk_app=trace` - Show trace for this crate only
/// - Default: INFO, DEBUG for the kiosk crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,kiosk=debug"));

    // A second call (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::TRACE)
        .try_init();
}
