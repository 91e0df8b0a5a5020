//! # Vending Module
//!
//! Flattens menu items into their purchasable variants for the vending
//! machine style storefront: one tile per combination of required options.
//!
//! ## Expansion
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Latte 4,000                                                            │
//! │    Temperature (required): Hot +0, Iced +500                            │
//! │    Size        (required): Small +0, Large +1,000                       │
//! │    Syrup       (optional): ...            ◄── ignored here              │
//! │                                                                         │
//! │  [[]]                                                                   │
//! │    × Temperature ──► [[Hot], [Iced]]                                    │
//! │    × Size        ──► [[Hot,Small], [Hot,Large], [Iced,Small], [Iced,Large]]
//! │                                                                         │
//! │  Cards: 4,000   5,000   4,500   5,500                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Groups are taken in `sort_order` and options within a group likewise
//! (ties keep catalog order). Earlier groups vary slowest, later groups
//! fastest, so the grid layout is stable between renders.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{options_total, Category, MenuItem, MenuOption, OptionGroup, SelectedOption, Translations};
use crate::variant::{canonical_key, VariantKey};
use crate::OPTION_LABEL_SEPARATOR;

/// Tiles per shelf on the storefront grid.
pub const DEFAULT_ROW_SIZE: usize = 4;

// =============================================================================
// Vending Card
// =============================================================================

/// One concrete purchasable variant of a menu item.
///
/// Ephemeral: rebuilt from catalog data on every render.
///
/// ## Invariant
/// `total_price == unit_price + Σ selected_options[].price_modifier`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct VendingCard {
    pub menu_id: i64,
    /// Localized menu name.
    pub menu_name: String,
    pub menu_name_translations: Translations,
    pub image_url: Option<String>,
    /// Base price of the menu item.
    pub unit_price: i64,
    /// One entry per required group, in group order.
    pub selected_options: Vec<SelectedOption>,
    /// Localized option names joined with `" / "`; empty without options.
    pub option_label: String,
    pub total_price: i64,
}

impl VendingCard {
    /// Variant identity of this card.
    pub fn key(&self) -> VariantKey {
        canonical_key(&self.selected_options)
    }

    pub fn total(&self) -> Money {
        Money::from_won(self.total_price)
    }
}

// =============================================================================
// Expansion
// =============================================================================

/// Expands a menu item into every purchasable variant.
///
/// ## Behavior
/// - Only `required` groups participate; optional add-ons are ignored
/// - No required groups: a single card with no options at base price
/// - Otherwise the Cartesian product over required groups, in sort order
///
/// ## Errors
/// `CoreError::MalformedMenu` when a required group has no options. Such a
/// menu has no purchasable variant, which points at broken upstream data.
///
/// ```rust
/// use kiosk_core::vending::expand;
/// use kiosk_core::MenuItem;
///
/// let menu: MenuItem = serde_json::from_str(r#"{
///     "id": 1, "categoryId": 1, "name": "Americano", "price": 3000,
///     "optionGroups": [{"id": 10, "menuId": 1, "name": "Temperature", "required": true,
///         "options": [
///             {"id": 100, "optionGroupId": 10, "name": "Hot"},
///             {"id": 101, "optionGroupId": 10, "name": "Iced", "priceModifier": 500}
///         ]}]
/// }"#).unwrap();
///
/// let cards = expand(&menu, "en").unwrap();
/// assert_eq!(cards.len(), 2);
/// assert_eq!(cards[1].option_label, "Iced");
/// assert_eq!(cards[1].total_price, 3500);
/// ```
pub fn expand(menu: &MenuItem, language: &str) -> CoreResult<Vec<VendingCard>> {
    let mut required: Vec<&OptionGroup> = menu.required_groups().collect();
    required.sort_by_key(|g| g.sort_order);

    let mut combos: Vec<Vec<SelectedOption>> = vec![Vec::new()];
    for group in required {
        if group.options.is_empty() {
            return Err(CoreError::malformed(
                menu.id,
                format!("required option group {} has no options", group.id),
            ));
        }

        let mut options: Vec<&MenuOption> = group.options.iter().collect();
        options.sort_by_key(|o| o.sort_order);

        let mut next = Vec::with_capacity(combos.len() * options.len());
        for combo in &combos {
            for option in &options {
                let mut extended = Vec::with_capacity(combo.len() + 1);
                extended.extend_from_slice(combo);
                extended.push(SelectedOption::from_choice(group, option));
                next.push(extended);
            }
        }
        combos = next;
    }

    let menu_name = menu.display_name(language).to_string();
    let unit_price = menu.unit_price();

    Ok(combos
        .into_iter()
        .map(|selected_options| {
            let option_label = selected_options
                .iter()
                .map(|o| o.label(language))
                .collect::<Vec<_>>()
                .join(OPTION_LABEL_SEPARATOR);
            let total = unit_price + options_total(&selected_options);

            VendingCard {
                menu_id: menu.id,
                menu_name: menu_name.clone(),
                menu_name_translations: menu.name_translations.clone(),
                image_url: menu.image_url.clone(),
                unit_price: unit_price.won(),
                selected_options,
                option_label,
                total_price: total.won(),
            }
        })
        .collect())
}

/// Builds the whole vending grid.
///
/// Active menus of active categories, categories and menus each ordered by
/// `sort_order` (ties keep catalog order). Fails on the first malformed menu.
pub fn build_vending_grid(categories: &[Category], language: &str) -> CoreResult<Vec<VendingCard>> {
    let mut active_categories: Vec<&Category> = categories.iter().filter(|c| c.is_active).collect();
    active_categories.sort_by_key(|c| c.sort_order);

    let mut cards = Vec::new();
    for category in active_categories {
        let mut menus: Vec<&MenuItem> = category.menus.iter().filter(|m| m.is_active).collect();
        menus.sort_by_key(|m| m.sort_order);

        for menu in menus {
            cards.extend(expand(menu, language)?);
        }
    }
    Ok(cards)
}

/// Splits the grid into shelves of `row_size` cards (the last may be short).
pub fn vending_rows(cards: &[VendingCard], row_size: usize) -> Vec<Vec<VendingCard>> {
    cards
        .chunks(row_size.max(1))
        .map(<[VendingCard]>::to_vec)
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{americano, group, latte, menu, option};
    use std::collections::HashSet;

    #[test]
    fn test_menu_without_required_groups_is_single_card() {
        let mut plain = menu(5, "Croissant", 3500);
        plain
            .option_groups
            .push(group(50, 5, "Jam", false, vec![option(500, 50, "Strawberry", 300)]));

        let cards = expand(&plain, "ko").unwrap();

        assert_eq!(cards.len(), 1);
        assert!(cards[0].selected_options.is_empty());
        assert_eq!(cards[0].total_price, 3500);
        assert_eq!(cards[0].option_label, "");
        assert!(cards[0].key().is_empty());
    }

    #[test]
    fn test_latte_scenario_order_and_totals() {
        let cards = expand(&latte(), "en").unwrap();

        let totals: Vec<i64> = cards.iter().map(|c| c.total_price).collect();
        assert_eq!(totals, vec![4000, 5000, 4500, 5500]);

        let labels: Vec<&str> = cards.iter().map(|c| c.option_label.as_str()).collect();
        assert_eq!(labels, vec!["Hot / Small", "Hot / Large", "Iced / Small", "Iced / Large"]);
    }

    #[test]
    fn test_sort_order_decides_card_and_label_order() {
        let mut m = americano();
        m.option_groups[0].sort_order = 1;
        let mut size = group(
            13,
            m.id,
            "Size",
            true,
            vec![option(131, 13, "L", 1000), option(130, 13, "S", 0)],
        );
        size.options[0].sort_order = 2;
        size.options[1].sort_order = 1;
        m.option_groups.push(size);

        let cards = expand(&m, "en").unwrap();
        let labels: Vec<&str> = cards.iter().map(|c| c.option_label.as_str()).collect();
        assert_eq!(labels, vec!["S / Hot", "S / Iced", "L / Hot", "L / Iced"]);
    }

    #[test]
    fn test_card_count_is_product_of_group_sizes() {
        let mut m = latte();
        m.option_groups.push(group(
            30,
            m.id,
            "Milk",
            true,
            vec![
                option(300, 30, "Whole", 0),
                option(301, 30, "Oat", 500),
                option(302, 30, "Soy", 300),
            ],
        ));

        let cards = expand(&m, "ko").unwrap();
        assert_eq!(cards.len(), 2 * 2 * 3);

        let keys: HashSet<_> = cards.iter().map(VendingCard::key).collect();
        assert_eq!(keys.len(), cards.len());

        for card in &cards {
            let modifiers: i64 = card.selected_options.iter().map(|o| o.price_modifier).sum();
            assert_eq!(card.total_price, card.unit_price + modifiers);
            assert_eq!(card.selected_options.len(), 3);
        }
    }

    #[test]
    fn test_optional_groups_are_excluded() {
        let mut m = latte();
        m.option_groups.insert(
            0,
            group(99, m.id, "Extra shot", false, vec![option(990, 99, "+1 shot", 500)]),
        );

        let cards = expand(&m, "en").unwrap();
        assert_eq!(cards.len(), 4);
        assert!(cards
            .iter()
            .all(|c| c.selected_options.iter().all(|o| o.group_id != 99)));
    }

    #[test]
    fn test_empty_required_group_is_malformed() {
        let mut m = latte();
        m.option_groups.push(group(40, m.id, "Cup", true, vec![]));

        let err = expand(&m, "ko").unwrap_err();
        assert!(matches!(err, CoreError::MalformedMenu { menu_id, .. } if menu_id == m.id));
    }

    #[test]
    fn test_labels_use_translations_with_fallback() {
        let cards = expand(&latte(), "ja").unwrap();
        // Only "Hot" has a Japanese translation in the fixture.
        assert_eq!(cards[0].option_label, "ホット / Small");
        assert_eq!(cards[0].menu_name, "ラテ");

        let cards = expand(&latte(), "fr").unwrap();
        assert_eq!(cards[0].menu_name, "Latte");
    }

    #[test]
    fn test_grid_skips_inactive_and_sorts() {
        let mut coffee = crate::fixtures::category(1, "Coffee", vec![latte(), americano()]);
        coffee.menus[0].sort_order = 2;
        coffee.menus[1].sort_order = 1;

        let mut hidden = menu(9, "Seasonal", 6000);
        hidden.is_active = false;
        coffee.menus.push(hidden);

        let mut closed = crate::fixtures::category(2, "Closed", vec![menu(20, "Tea", 3000)]);
        closed.is_active = false;

        let cards = build_vending_grid(&[coffee, closed], "en").unwrap();

        // Americano (2 temperatures) first, then Latte (4 variants).
        assert_eq!(cards.len(), 6);
        assert_eq!(cards[0].menu_id, americano().id);
        assert_eq!(cards[2].menu_id, latte().id);
        assert!(cards.iter().all(|c| c.menu_id != 9 && c.menu_id != 20));
    }

    #[test]
    fn test_rows_chunk_by_size() {
        let cards = expand(&latte(), "en").unwrap();
        let mut all = cards.clone();
        all.extend(expand(&americano(), "en").unwrap());

        let rows = vending_rows(&all, DEFAULT_ROW_SIZE);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].len(), 4);
        assert_eq!(rows[1].len(), 2);

        assert_eq!(vending_rows(&all, 0).len(), all.len());
        assert!(vending_rows(&[], 4).is_empty());
    }
}
