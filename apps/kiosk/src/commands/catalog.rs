//! # Catalog Commands
//!
//! Read-only catalog views for the storefront.
//!
//! ## Storefront Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  [ 커피 ]  [ 디저트 ]                               list_categories     │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │  ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────┐                    │
//! │  │Americano │ │Americano │ │  Latte   │ │  Latte   │  get_vending_rows  │
//! │  │   HOT    │ │   ICE    │ │HOT/Reg.  │ │HOT/Large │  (shelves of 4)    │
//! │  │  3,000   │ │  3,500 ②│ │  4,000   │ │  5,000   │                    │
//! │  └──────────┘ └──────────┘ └──────────┘ └──────────┘                    │
//! │                      ▲                                                   │
//! │                      └── badge = quantity of that exact variant in cart  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use kiosk_core::vending::{build_vending_grid, vending_rows, VendingCard};
use kiosk_core::{find_menu, MenuItem};
use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::state::{CartState, CatalogState, ConfigState, SettingsState};

/// Category tab.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub id: i64,
    /// Localized name.
    pub name: String,
    /// Active menus in this category.
    pub menu_count: usize,
}

/// A vending card plus how many of that exact variant are in the cart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VendingTile {
    #[serde(flatten)]
    pub card: VendingCard,
    pub quantity_in_cart: i64,
}

/// Menu detail for the option picker.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuDetail {
    /// Localized name.
    pub display_name: String,
    /// Localized description.
    pub display_description: String,
    pub menu: MenuItem,
}

/// Active categories in display order.
pub fn list_categories(catalog: &CatalogState, language: &str) -> Vec<CategorySummary> {
    debug!(language = %language, "list_categories command");
    catalog.read(|categories| {
        let mut active: Vec<_> = categories.iter().filter(|c| c.is_active).collect();
        active.sort_by_key(|c| c.sort_order);
        active
            .into_iter()
            .map(|c| CategorySummary {
                id: c.id,
                name: c.display_name(language).to_string(),
                menu_count: c.menus.iter().filter(|m| m.is_active).count(),
            })
            .collect()
    })
}

/// The whole vending grid in `language` (falls back to the default language).
///
/// ## Errors
/// `MALFORMED_MENU` if any active menu cannot be expanded.
pub fn get_vending_grid(
    catalog: &CatalogState,
    cart: &CartState,
    settings: &SettingsState,
    language: Option<&str>,
) -> Result<Vec<VendingTile>, ApiError> {
    let language = settings.resolve_language(language);
    debug!(language = %language, "get_vending_grid command");

    let cards = catalog.read(|categories| build_vending_grid(categories, &language))?;
    Ok(cart.with_cart(|c| cards.into_iter().map(|card| tile(c, card)).collect()))
}

/// The vending grid split into shelves of `config.vending_row_size`.
pub fn get_vending_rows(
    catalog: &CatalogState,
    cart: &CartState,
    settings: &SettingsState,
    config: &ConfigState,
    language: Option<&str>,
) -> Result<Vec<Vec<VendingTile>>, ApiError> {
    let language = settings.resolve_language(language);
    debug!(language = %language, row_size = config.vending_row_size, "get_vending_rows command");

    let cards = catalog.read(|categories| build_vending_grid(categories, &language))?;
    let rows = vending_rows(&cards, config.vending_row_size);
    Ok(cart.with_cart(|c| {
        rows.into_iter()
            .map(|row| row.into_iter().map(|card| tile(c, card)).collect())
            .collect()
    }))
}

fn tile(cart: &kiosk_core::cart::Cart, card: VendingCard) -> VendingTile {
    let quantity_in_cart = cart.quantity_of(card.menu_id, &card.selected_options);
    VendingTile {
        card,
        quantity_in_cart,
    }
}

/// One menu with all of its option groups (including optional add-ons).
pub fn get_menu(catalog: &CatalogState, menu_id: i64, language: &str) -> Result<MenuDetail, ApiError> {
    debug!(menu_id, language = %language, "get_menu command");
    catalog
        .read(|categories| {
            find_menu(categories, menu_id).map(|menu| MenuDetail {
                display_name: menu.display_name(language).to_string(),
                display_description: menu.display_description(language).to_string(),
                menu: menu.clone(),
            })
        })
        .ok_or_else(|| ApiError::not_found("Menu", menu_id))
}
