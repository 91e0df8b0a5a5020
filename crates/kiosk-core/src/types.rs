//! # Domain Types
//!
//! Core domain types used throughout the kiosk.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌───────┐ │
//! │  │  Category   │ 1─* │  MenuItem   │ 1─* │ OptionGroup │ 1─* │Option │ │
//! │  │  name       │     │  price      │     │  required   │     │ ±mod  │ │
//! │  └─────────────┘     └─────────────┘     └─────────────┘     └───────┘ │
//! │                                                                         │
//! │  Derived:  SelectedOption (group+option snapshot)                       │
//! │  Orders:   Order 1─* OrderLine 1─* OrderedOption                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every translatable entity carries its source-language text (`name`) and
//! a [`Translations`] map keyed by language code.
//!
//! Catalog documents deserialize leniently for optional fields, but an
//! option group without an `options` array is rejected outright.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

fn default_true() -> bool {
    true
}

// =============================================================================
// Translations
// =============================================================================

/// Language code → translated text.
///
/// Serializes as a plain JSON object: `{"en": "Latte", "ja": "ラテ"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Translations(BTreeMap<String, String>);

impl Translations {
    /// Creates an empty translation map.
    pub fn new() -> Self {
        Translations(BTreeMap::new())
    }

    /// Returns the translation for `lang`, if any.
    pub fn get(&self, lang: &str) -> Option<&str> {
        self.0.get(lang).map(String::as_str)
    }

    /// Whether a non-blank translation exists for `lang`.
    pub fn has(&self, lang: &str) -> bool {
        self.get(lang).is_some_and(|t| !t.trim().is_empty())
    }

    /// Resolves display text: the translation for `lang` when present and
    /// non-blank, otherwise `fallback`.
    pub fn resolve<'a>(&'a self, lang: &str, fallback: &'a str) -> &'a str {
        match self.get(lang) {
            Some(t) if !t.trim().is_empty() => t,
            _ => fallback,
        }
    }

    /// Sets (or replaces) the translation for `lang`.
    pub fn set(&mut self, lang: impl Into<String>, text: impl Into<String>) {
        self.0.insert(lang.into(), text.into());
    }

    /// Number of stored languages.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Translations {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Translations(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// A menu category (tab on the storefront).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub name_translations: Translations,
    #[serde(default)]
    pub sort_order: i64,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub menus: Vec<MenuItem>,
}

impl Category {
    /// Localized category name.
    pub fn display_name(&self, lang: &str) -> &str {
        self.name_translations.resolve(lang, &self.name)
    }
}

/// Finds a menu anywhere in the catalog.
pub fn find_menu(categories: &[Category], menu_id: i64) -> Option<&MenuItem> {
    categories
        .iter()
        .flat_map(|c| c.menus.iter())
        .find(|m| m.id == menu_id)
}

/// A purchasable menu item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MenuItem {
    pub id: i64,
    pub category_id: i64,
    pub name: String,
    #[serde(default)]
    pub name_translations: Translations,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub description_translations: Translations,
    /// Base price in won.
    pub price: i64,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub sort_order: i64,
    /// Option groups in display order.
    #[serde(default)]
    pub option_groups: Vec<OptionGroup>,
}

impl MenuItem {
    /// Base price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_won(self.price)
    }

    /// Localized menu name.
    pub fn display_name(&self, lang: &str) -> &str {
        self.name_translations.resolve(lang, &self.name)
    }

    /// Localized description.
    pub fn display_description(&self, lang: &str) -> &str {
        self.description_translations
            .resolve(lang, &self.description)
    }

    /// Required groups, in their stored relative order.
    pub fn required_groups(&self) -> impl Iterator<Item = &OptionGroup> {
        self.option_groups.iter().filter(|g| g.required)
    }

    /// Puts the groups, and the options inside each group, in `sort_order`.
    ///
    /// Stable: entries with equal sort orders keep their relative order.
    pub fn sort_option_groups(&mut self) {
        self.option_groups.sort_by_key(|g| g.sort_order);
        for group in &mut self.option_groups {
            group.options.sort_by_key(|o| o.sort_order);
        }
    }

    /// Looks up a group by id.
    pub fn group(&self, group_id: i64) -> Option<&OptionGroup> {
        self.option_groups.iter().find(|g| g.id == group_id)
    }

    /// Resolves a (group, option) pair into a [`SelectedOption`] snapshot.
    ///
    /// Returns `None` when either id does not belong to this menu.
    pub fn select(&self, group_id: i64, option_id: i64) -> Option<SelectedOption> {
        let group = self.group(group_id)?;
        let option = group.option(option_id)?;
        Some(SelectedOption::from_choice(group, option))
    }
}

/// A group of options on a menu item ("Temperature", "Size", "Extra shot").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OptionGroup {
    pub id: i64,
    pub menu_id: i64,
    pub name: String,
    #[serde(default)]
    pub name_translations: Translations,
    /// The customer must pick exactly one option.
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub sort_order: i64,
    /// Choices in display order. Mandatory in catalog documents.
    pub options: Vec<MenuOption>,
}

impl OptionGroup {
    /// Looks up an option by id.
    pub fn option(&self, option_id: i64) -> Option<&MenuOption> {
        self.options.iter().find(|o| o.id == option_id)
    }

    pub fn display_name(&self, lang: &str) -> &str {
        self.name_translations.resolve(lang, &self.name)
    }
}

/// A single choice within an option group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MenuOption {
    pub id: i64,
    pub option_group_id: i64,
    pub name: String,
    #[serde(default)]
    pub name_translations: Translations,
    /// Added to the unit price when selected; may be negative.
    #[serde(default)]
    pub price_modifier: i64,
    #[serde(default)]
    pub sort_order: i64,
}

impl MenuOption {
    #[inline]
    pub fn modifier(&self) -> Money {
        Money::from_won(self.price_modifier)
    }

    pub fn display_name(&self, lang: &str) -> &str {
        self.name_translations.resolve(lang, &self.name)
    }
}

// =============================================================================
// Selected Option
// =============================================================================

/// One chosen option, denormalized for display and cart storage.
///
/// Only `group_id` and `option_id` take part in variant identity; the
/// remaining fields are a snapshot of names and price at selection time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SelectedOption {
    pub group_id: i64,
    pub option_id: i64,
    pub group_name: String,
    #[serde(default)]
    pub group_name_translations: Translations,
    pub option_name: String,
    #[serde(default)]
    pub option_name_translations: Translations,
    pub price_modifier: i64,
}

impl SelectedOption {
    /// Snapshots a group/option pair.
    pub fn from_choice(group: &OptionGroup, option: &MenuOption) -> Self {
        SelectedOption {
            group_id: group.id,
            option_id: option.id,
            group_name: group.name.clone(),
            group_name_translations: group.name_translations.clone(),
            option_name: option.name.clone(),
            option_name_translations: option.name_translations.clone(),
            price_modifier: option.price_modifier,
        }
    }

    #[inline]
    pub fn modifier(&self) -> Money {
        Money::from_won(self.price_modifier)
    }

    /// Localized option label.
    pub fn label(&self, lang: &str) -> &str {
        self.option_name_translations
            .resolve(lang, &self.option_name)
    }
}

/// Sum of modifiers over a selection.
pub fn options_total(options: &[SelectedOption]) -> Money {
    options.iter().map(SelectedOption::modifier).sum()
}

// =============================================================================
// Order Type / Status
// =============================================================================

/// Where the customer eats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum OrderType {
    DineIn,
    TakeOut,
}

/// Kitchen queue status of a submitted order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Waiting to be prepared / picked up.
    #[default]
    Pending,
    /// Handed to the customer.
    Completed,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Completed => "completed",
        }
    }
}

// =============================================================================
// Order
// =============================================================================

/// Option as recorded on an order line (names frozen at order time).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OrderedOption {
    pub group: String,
    pub option: String,
    pub price: i64,
}

/// A line in a submitted order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OrderLine {
    pub menu_id: i64,
    /// Menu name at time of order (frozen).
    pub menu_name: String,
    pub quantity: i64,
    /// Base price plus option modifiers.
    pub unit_price: i64,
    pub selected_options: Vec<OrderedOption>,
    /// `unit_price × quantity`.
    pub subtotal: i64,
}

/// A submitted order in the kitchen queue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Order {
    /// Unique identifier (UUID v4).
    pub id: String,
    /// Customer-facing number ("A001").
    pub order_number: String,
    pub status: OrderStatus,
    pub order_type: Option<OrderType>,
    pub total_amount: i64,
    /// Language the customer ordered in.
    pub language: String,
    pub items: Vec<OrderLine>,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn total(&self) -> Money {
        Money::from_won(self.total_amount)
    }

    /// Total number of items across all lines.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|l| l.quantity).sum()
    }
}

// =============================================================================
// Store Settings
// =============================================================================

/// Admin-managed store settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct StoreSettings {
    pub store_name: String,
    #[serde(default)]
    pub store_description: String,
    /// Languages offered on the storefront; the first is the source language.
    pub supported_languages: Vec<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
}

impl Default for StoreSettings {
    fn default() -> Self {
        StoreSettings {
            store_name: "My Café".to_string(),
            store_description: String::new(),
            supported_languages: vec![
                "ko".to_string(),
                "en".to_string(),
                "zh".to_string(),
                "ja".to_string(),
            ],
            logo_url: None,
        }
    }
}

impl StoreSettings {
    /// Languages that need translations (everything but the source language).
    pub fn translation_targets(&self) -> Vec<&str> {
        self.supported_languages
            .iter()
            .map(String::as_str)
            .filter(|l| crate::translation::is_translation_target(l))
            .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
