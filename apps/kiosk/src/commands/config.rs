//! # Config Commands
//!
//! Configuration and store settings for the storefront header, the language
//! picker and price tags.

use kiosk_core::language::{is_core, label, ALL_LANGUAGES, CORE_LANGUAGES};
use kiosk_core::validation::{validate_description, validate_language_code, validate_name};
use kiosk_core::{CoreError, StoreSettings};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{ConfigState, SettingsState};

/// One entry of the language list in the settings screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageOption {
    pub code: String,
    /// Native name, e.g. "日本語".
    pub label: String,
    /// One of the four languages shown first.
    pub core: bool,
    /// Currently offered on the storefront.
    pub enabled: bool,
}

/// Settings form; `None` leaves a field as it is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSettingsUpdate {
    #[serde(default)]
    pub store_name: Option<String>,
    #[serde(default)]
    pub store_description: Option<String>,
    #[serde(default)]
    pub supported_languages: Option<Vec<String>>,
    /// Path of an uploaded logo.
    #[serde(default)]
    pub logo_url: Option<String>,
    /// Removes the logo; wins over `logo_url`.
    #[serde(default)]
    pub clear_logo: bool,
}

/// Gets the current application configuration.
///
/// ## When Used
/// - App startup (to configure the UI)
/// - Admin settings screen
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}

/// Store name, description, logo and offered languages.
pub fn get_store_settings(settings: &SettingsState) -> StoreSettings {
    debug!("get_store_settings command");
    settings.get()
}

/// Applies the settings form.
///
/// ## Rules
/// - The store name must not be blank
/// - Languages must be known codes; duplicates are dropped
/// - The storefront's default language is always kept in the list
///
/// ## Errors
/// `VALIDATION_ERROR` for any rule above; nothing changes in that case.
pub fn update_store_settings(settings: &SettingsState, update: StoreSettingsUpdate) -> Result<StoreSettings, ApiError> {
    debug!(
        store_name = ?update.store_name,
        languages = ?update.supported_languages,
        clear_logo = update.clear_logo,
        "update_store_settings command"
    );

    let mut next = settings.get();

    if let Some(store_name) = update.store_name {
        validate_name("store name", &store_name).map_err(CoreError::from)?;
        next.store_name = store_name.trim().to_string();
    }

    if let Some(description) = update.store_description {
        validate_description(&description).map_err(CoreError::from)?;
        next.store_description = description;
    }

    if let Some(languages) = update.supported_languages {
        let mut unique: Vec<String> = Vec::with_capacity(languages.len());
        for code in languages {
            validate_language_code(&code).map_err(CoreError::from)?;
            if !unique.contains(&code) {
                unique.push(code);
            }
        }
        if !unique.iter().any(|l| l == settings.default_language()) {
            return Err(ApiError::validation(format!(
                "{} is the storefront default language and cannot be removed",
                settings.default_language()
            )));
        }
        next.supported_languages = unique;
    }

    if update.clear_logo {
        next.logo_url = None;
    } else if let Some(logo_url) = update.logo_url {
        next.logo_url = Some(logo_url);
    }

    settings.set(next.clone());
    info!(store = %next.store_name, languages = ?next.supported_languages, "Store settings updated");
    Ok(next)
}

/// Every language an admin can enable; the core four first, then the rest
/// in list order.
pub fn list_languages(settings: &SettingsState) -> Vec<LanguageOption> {
    debug!("list_languages command");
    let current = settings.get();
    let enabled = |code: &str| current.supported_languages.iter().any(|l| l == code);

    CORE_LANGUAGES
        .iter()
        .copied()
        .chain(ALL_LANGUAGES.iter().map(|(code, _)| *code).filter(|code| !is_core(code)))
        .map(|code| LanguageOption {
            code: code.to_string(),
            label: label(code).to_string(),
            core: is_core(code),
            enabled: enabled(code),
        })
        .collect()
}

/// Formats a won amount the way price tags show it ("4,500원").
pub fn format_price(config: &ConfigState, won: i64) -> String {
    config.format_price(won)
}
