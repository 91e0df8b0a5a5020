//! # Translation Commands
//!
//! Back-office view of catalog translations and the translate-all action.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Translations                        en ██████████ 100%                 │
//! │                                      zh ████░░░░░░  40%                 │
//! │                                      ja ██░░░░░░░░  20%                 │
//! │                                                                         │
//! │  [ Translate missing ]  ──► translate_catalog(lang, only_missing=true)  │
//! │                                                                         │
//! │  category-1-name   커피        │ Coffee        │ ✎ save_translations    │
//! │  menu-1-name       아메리카노  │ Americano     │                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Korean is always the source language of the catalog, whatever language
//! the storefront opens in. The translator runs without holding the catalog
//! lock; results are written back in one pass afterwards and saved.

use kiosk_core::translation::{
    apply_translations, collect_translation_items, is_translation_target, pending_translations, translation_coverage,
    TranslationCoverage, TranslationItem, TranslationText, Translator,
};
use kiosk_core::validation::validate_language_code;
use kiosk_core::CoreError;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::state::{CatalogState, SettingsState};

/// Coverage per target language, plus the review rows of one language.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationOverview {
    pub coverage: Vec<TranslationCoverage>,
    /// Empty unless a language was selected.
    pub items: Vec<TranslationItem>,
}

/// What a translate-all run did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateOutcome {
    pub language: String,
    /// Texts sent to the translator.
    pub requested: usize,
    /// Translations written into the catalog.
    pub applied: usize,
}

/// Rejects unknown codes and the catalog's own source language.
fn target_language(language: &str) -> Result<(), ApiError> {
    validate_language_code(language).map_err(CoreError::from)?;
    if !is_translation_target(language) {
        return Err(ApiError::validation(format!(
            "{} is the source language and needs no translation",
            language
        )));
    }
    Ok(())
}

/// Coverage for every language the store offers besides the source language.
pub fn translation_overview(
    catalog: &CatalogState,
    settings: &SettingsState,
    language: Option<&str>,
) -> Result<TranslationOverview, ApiError> {
    debug!(?language, "translation_overview command");
    if let Some(language) = language {
        target_language(language)?;
    }

    let settings = settings.get();
    Ok(catalog.read(|categories| TranslationOverview {
        coverage: settings
            .translation_targets()
            .into_iter()
            .map(|l| translation_coverage(categories, l))
            .collect(),
        items: language
            .map(|l| collect_translation_items(categories, l))
            .unwrap_or_default(),
    }))
}

/// Sends catalog texts to the translator and stores the results.
///
/// ## Arguments
/// * `only_missing` - skip texts that already have a translation
///
/// ## Errors
/// - `VALIDATION_ERROR` for an unknown or source language
/// - `INTERNAL` when the translator fails (the catalog is left unchanged)
pub fn translate_catalog<T: Translator>(
    catalog: &CatalogState,
    translator: &T,
    language: &str,
    only_missing: bool,
) -> Result<TranslateOutcome, ApiError> {
    debug!(language = %language, only_missing, "translate_catalog command");
    target_language(language)?;

    let pending = catalog.read(|categories| pending_translations(categories, language, only_missing));
    if pending.is_empty() {
        info!(language = %language, "Nothing to translate");
        return Ok(TranslateOutcome {
            language: language.to_string(),
            requested: 0,
            applied: 0,
        });
    }

    let results = translator.translate(&pending, language).map_err(|e| {
        warn!(language = %language, error = %e, "Translator failed");
        ApiError::internal(format!("Translation failed: {}", e))
    })?;

    let applied = catalog.write(|categories| apply_translations(categories, language, &results));
    catalog.save()?;
    info!(language = %language, requested = pending.len(), applied, "Catalog translated");

    Ok(TranslateOutcome {
        language: language.to_string(),
        requested: pending.len(),
        applied,
    })
}

/// Stores hand-edited translations from the review table.
///
/// ## Returns
/// Number of translations written (rows for deleted entities are skipped).
pub fn save_translations(
    catalog: &CatalogState,
    language: &str,
    items: &[TranslationText],
) -> Result<usize, ApiError> {
    debug!(language = %language, count = items.len(), "save_translations command");
    target_language(language)?;

    let written = catalog.write(|categories| apply_translations(categories, language, items));
    catalog.save()?;
    info!(language = %language, written, "Translations saved");
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::catalog::get_vending_grid;
    use crate::error::ErrorCode;
    use crate::state::CartState;
    use kiosk_core::StoreSettings;
    use crate::test_support::loaded_catalog;
    use kiosk_core::translation::{EntityKind, TranslationField};
    use std::cell::Cell;

    /// Prefixes every text with the language code and counts calls.
    #[derive(Default)]
    struct PrefixTranslator {
        calls: Cell<usize>,
    }

    impl Translator for PrefixTranslator {
        type Error = std::fmt::Error;

        fn translate(&self, items: &[TranslationText], target_language: &str) -> Result<Vec<TranslationText>, Self::Error> {
            self.calls.set(self.calls.get() + 1);
            Ok(items
                .iter()
                .map(|t| TranslationText {
                    value: format!("[{}] {}", target_language, t.value),
                    ..t.clone()
                })
                .collect())
        }
    }

    struct BrokenTranslator;

    impl Translator for BrokenTranslator {
        type Error = std::fmt::Error;

        fn translate(&self, _: &[TranslationText], _: &str) -> Result<Vec<TranslationText>, Self::Error> {
            Err(std::fmt::Error)
        }
    }

    #[test]
    fn test_overview_coverage() {
        let catalog = loaded_catalog();
        let overview = translation_overview(&catalog, &SettingsState::default(), Some("en")).unwrap();

        let languages: Vec<&str> = overview.coverage.iter().map(|c| c.language.as_str()).collect();
        assert_eq!(languages, vec!["en", "zh", "ja"]);
        assert_eq!(overview.coverage[1].translated, 0);
        assert!(!overview.coverage[0].is_complete());
        assert_eq!(overview.items.len(), overview.coverage[0].total);
        assert_eq!(overview.items[0].translation_key, "category-1-name");
        assert_eq!(overview.items[0].translated, "Coffee");
    }

    #[test]
    fn test_overview_rejects_source_language() {
        let err = translation_overview(&loaded_catalog(), &SettingsState::default(), Some("ko")).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_source_language_is_korean_whatever_the_storefront_default() {
        let catalog = loaded_catalog();
        let english_first = SettingsState::new(StoreSettings::default(), "en");

        let overview = translation_overview(&catalog, &english_first, Some("en")).unwrap();
        let languages: Vec<&str> = overview.coverage.iter().map(|c| c.language.as_str()).collect();
        assert_eq!(languages, vec!["en", "zh", "ja"]);
        assert!(!overview.items.is_empty());

        let outcome = translate_catalog(&catalog, &PrefixTranslator::default(), "en", true).unwrap();
        assert!(outcome.applied > 0);

        let err = translation_overview(&catalog, &english_first, Some("ko")).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_translate_missing_then_nothing_left() {
        let catalog = loaded_catalog();
        let settings = SettingsState::default();
        let translator = PrefixTranslator::default();

        let before = translation_coverage(&catalog.snapshot(), "ja");
        let outcome = translate_catalog(&catalog, &translator, "ja", true).unwrap();
        assert_eq!(outcome.requested, before.total - before.translated);
        assert_eq!(outcome.applied, outcome.requested);

        // existing translations are kept
        let grid = get_vending_grid(&catalog, &CartState::new(), &settings, Some("ja")).unwrap();
        assert_eq!(grid[0].card.menu_name, "アメリカーノ");
        assert_eq!(grid[2].card.menu_name, "[ja] 카페라떼");

        let again = translate_catalog(&catalog, &translator, "ja", true).unwrap();
        assert_eq!(again.requested, 0);
        assert_eq!(translator.calls.get(), 1);
        assert!(translation_coverage(&catalog.snapshot(), "ja").is_complete());
    }

    #[test]
    fn test_translate_all_overwrites() {
        let catalog = loaded_catalog();
        let translator = PrefixTranslator::default();

        translate_catalog(&catalog, &translator, "en", false).unwrap();

        let grid = get_vending_grid(&catalog, &CartState::new(), &SettingsState::default(), Some("en")).unwrap();
        assert_eq!(grid[0].card.menu_name, "[en] 아메리카노");
    }

    #[test]
    fn test_translator_failure_leaves_catalog() {
        let catalog = loaded_catalog();
        let before = catalog.snapshot();

        let err = translate_catalog(&catalog, &BrokenTranslator, "zh", true).unwrap_err();
        assert_eq!(err.code, ErrorCode::Internal);
        assert_eq!(catalog.snapshot(), before);
    }

    #[test]
    fn test_save_translations() {
        let catalog = loaded_catalog();
        let written = save_translations(
            &catalog,
            "zh",
            &[
                TranslationText {
                    id: 4,
                    kind: EntityKind::Menu,
                    field: TranslationField::Name,
                    value: "芝士蛋糕".to_string(),
                },
                TranslationText {
                    id: 404,
                    kind: EntityKind::Option,
                    field: TranslationField::Name,
                    value: "?".to_string(),
                },
            ],
        )
        .unwrap();

        assert_eq!(written, 1);
        let grid = get_vending_grid(&catalog, &CartState::new(), &SettingsState::default(), Some("zh")).unwrap();
        assert_eq!(grid[6].card.menu_name, "芝士蛋糕");

        let err = save_translations(&catalog, "xx", &[]).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }
}
