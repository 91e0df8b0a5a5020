//! # Translation Module
//!
//! Bookkeeping for multi-language catalog content.
//!
//! ## Translatable Entities
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  category     name                                                      │
//! │  menu         name, description (only when the description is set)      │
//! │  optionGroup  name                                                      │
//! │  option       name                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Translate-All Flow
//! ```text
//! pending_translations(catalog, "ja", only_missing)
//!        │   [{id, type, field, value: source text}, ...]
//!        ▼
//! Translator::translate(...)            ◄── external AI collaborator
//!        │   [{id, type, field, value: translated text}, ...]
//!        ▼
//! apply_translations(catalog, "ja", results) ──► number written
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{Category, Translations};
use crate::DEFAULT_LANGUAGE;

// =============================================================================
// Types
// =============================================================================

/// Kind of translatable entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum EntityKind {
    Category,
    Menu,
    OptionGroup,
    Option,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Category => "category",
            EntityKind::Menu => "menu",
            EntityKind::OptionGroup => "optionGroup",
            EntityKind::Option => "option",
        }
    }
}

/// Which text of the entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum TranslationField {
    Name,
    Description,
}

impl TranslationField {
    pub fn as_str(&self) -> &'static str {
        match self {
            TranslationField::Name => "name",
            TranslationField::Description => "description",
        }
    }
}

/// Row of the admin translation review table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TranslationItem {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: EntityKind,
    pub field: TranslationField,
    /// Source-language text.
    pub original: String,
    /// Current translation, empty when missing.
    pub translated: String,
    /// Stable row key, e.g. `menu-3-description`.
    pub translation_key: String,
}

/// A text exchanged with the translator: source text going out, translated
/// text coming back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TranslationText {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: EntityKind,
    pub field: TranslationField,
    pub value: String,
}

/// How much of the catalog is translated into one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TranslationCoverage {
    pub language: String,
    pub total: usize,
    pub translated: usize,
}

impl TranslationCoverage {
    pub fn is_complete(&self) -> bool {
        self.translated >= self.total
    }

    /// Whole-number percentage; an empty catalog counts as 100%.
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 100;
        }
        ((self.translated * 100) / self.total) as u8
    }
}

/// Whether `language` can receive translations.
///
/// Catalog text is authored in [`DEFAULT_LANGUAGE`]; every other language
/// is a target, whatever language the storefront opens in.
pub fn is_translation_target(language: &str) -> bool {
    language != DEFAULT_LANGUAGE
}

/// External machine-translation service.
pub trait Translator {
    type Error: std::error::Error;

    /// Translates every `value` into `target_language`, echoing `id`,
    /// `kind` and `field` so results can be written back.
    fn translate(
        &self,
        items: &[TranslationText],
        target_language: &str,
    ) -> Result<Vec<TranslationText>, Self::Error>;
}

// =============================================================================
// Walking the catalog
// =============================================================================

struct Entry<'a> {
    kind: EntityKind,
    id: i64,
    field: TranslationField,
    original: &'a str,
    translations: &'a Translations,
}

fn visit<'a>(categories: &'a [Category], mut f: impl FnMut(Entry<'a>)) {
    for category in categories {
        f(Entry {
            kind: EntityKind::Category,
            id: category.id,
            field: TranslationField::Name,
            original: &category.name,
            translations: &category.name_translations,
        });

        for menu in &category.menus {
            f(Entry {
                kind: EntityKind::Menu,
                id: menu.id,
                field: TranslationField::Name,
                original: &menu.name,
                translations: &menu.name_translations,
            });
            if !menu.description.trim().is_empty() {
                f(Entry {
                    kind: EntityKind::Menu,
                    id: menu.id,
                    field: TranslationField::Description,
                    original: &menu.description,
                    translations: &menu.description_translations,
                });
            }

            for group in &menu.option_groups {
                f(Entry {
                    kind: EntityKind::OptionGroup,
                    id: group.id,
                    field: TranslationField::Name,
                    original: &group.name,
                    translations: &group.name_translations,
                });

                for option in &group.options {
                    f(Entry {
                        kind: EntityKind::Option,
                        id: option.id,
                        field: TranslationField::Name,
                        original: &option.name,
                        translations: &option.name_translations,
                    });
                }
            }
        }
    }
}

fn translations_mut(
    categories: &mut [Category],
    kind: EntityKind,
    id: i64,
    field: TranslationField,
) -> Option<&mut Translations> {
    for category in categories.iter_mut() {
        if kind == EntityKind::Category && category.id == id {
            return match field {
                TranslationField::Name => Some(&mut category.name_translations),
                TranslationField::Description => None,
            };
        }

        for menu in category.menus.iter_mut() {
            if kind == EntityKind::Menu && menu.id == id {
                return Some(match field {
                    TranslationField::Name => &mut menu.name_translations,
                    TranslationField::Description => &mut menu.description_translations,
                });
            }

            for group in menu.option_groups.iter_mut() {
                if kind == EntityKind::OptionGroup && group.id == id {
                    return match field {
                        TranslationField::Name => Some(&mut group.name_translations),
                        TranslationField::Description => None,
                    };
                }

                for option in group.options.iter_mut() {
                    if kind == EntityKind::Option && option.id == id {
                        return match field {
                            TranslationField::Name => Some(&mut option.name_translations),
                            TranslationField::Description => None,
                        };
                    }
                }
            }
        }
    }
    None
}

// =============================================================================
// Operations
// =============================================================================

/// Builds the review table for `language`.
pub fn collect_translation_items(categories: &[Category], language: &str) -> Vec<TranslationItem> {
    let mut items = Vec::new();
    visit(categories, |entry| {
        items.push(TranslationItem {
            id: entry.id,
            kind: entry.kind,
            field: entry.field,
            original: entry.original.to_string(),
            translated: entry.translations.get(language).unwrap_or_default().to_string(),
            translation_key: format!("{}-{}-{}", entry.kind.as_str(), entry.id, entry.field.as_str()),
        });
    });
    items
}

/// Source texts to send to the translator.
///
/// With `only_missing`, texts that already have a non-blank translation
/// for `language` are left out.
pub fn pending_translations(categories: &[Category], language: &str, only_missing: bool) -> Vec<TranslationText> {
    let mut pending = Vec::new();
    visit(categories, |entry| {
        if only_missing && entry.translations.has(language) {
            return;
        }
        pending.push(TranslationText {
            id: entry.id,
            kind: entry.kind,
            field: entry.field,
            value: entry.original.to_string(),
        });
    });
    pending
}

/// Writes translated texts back into the catalog.
///
/// Results pointing at entities that no longer exist (or at a field the
/// entity doesn't have) are ignored.
///
/// ## Returns
/// Number of translations written.
pub fn apply_translations(categories: &mut [Category], language: &str, results: &[TranslationText]) -> usize {
    let mut written = 0;
    for result in results {
        if let Some(translations) = translations_mut(categories, result.kind, result.id, result.field) {
            translations.set(language, result.value.clone());
            written += 1;
        }
    }
    written
}

/// Coverage of `language` across every translatable text.
pub fn translation_coverage(categories: &[Category], language: &str) -> TranslationCoverage {
    let mut total = 0;
    let mut translated = 0;
    visit(categories, |entry| {
        total += 1;
        if entry.translations.has(language) {
            translated += 1;
        }
    });
    TranslationCoverage {
        language: language.to_string(),
        total,
        translated,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
