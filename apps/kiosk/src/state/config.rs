//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`KIOSK_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no lock is needed.

use std::path::PathBuf;

use directories::ProjectDirs;
use kiosk_core::validation::validate_language_code;
use kiosk_core::vending::DEFAULT_ROW_SIZE;
use kiosk_core::{Money, StoreSettings, DEFAULT_LANGUAGE};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// File name of the catalog inside the app data directory.
pub const CATALOG_FILE_NAME: &str = "catalog.json";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name shown in the storefront header
    pub store_name: String,

    pub store_description: String,

    /// Language the storefront opens in; also the catalog source language
    pub default_language: String,

    /// Languages offered in the customer language picker
    pub supported_languages: Vec<String>,

    /// Appended to formatted prices, e.g. "4,500원"
    pub currency_suffix: String,

    /// Vending tiles per shelf row
    pub vending_row_size: usize,

    /// Explicit catalog file; `None` means the app data directory
    pub catalog_path: Option<PathBuf>,
}

impl Default for ConfigState {
    /// Returns default configuration suitable for development.
    fn default() -> Self {
        let settings = StoreSettings::default();
        ConfigState {
            store_name: settings.store_name,
            store_description: settings.store_description,
            default_language: DEFAULT_LANGUAGE.to_string(),
            supported_languages: settings.supported_languages,
            currency_suffix: "원".to_string(),
            vending_row_size: DEFAULT_ROW_SIZE,
            catalog_path: None,
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `KIOSK_STORE_NAME`: Override store name
    /// - `KIOSK_DEFAULT_LANGUAGE`: Storefront start language (e.g. "en")
    /// - `KIOSK_LANGUAGES`: Comma-separated language list (e.g. "ko,en,ja")
    /// - `KIOSK_CURRENCY_SUFFIX`: Price suffix (e.g. " KRW")
    /// - `KIOSK_CATALOG_PATH`: Catalog JSON file
    pub fn from_env() -> Self {
        ConfigState::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(store_name) = lookup("KIOSK_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(languages) = lookup("KIOSK_LANGUAGES") {
            let parsed: Vec<String> = languages
                .split(',')
                .map(str::trim)
                .filter(|code| !code.is_empty())
                .filter(|code| match validate_language_code(code) {
                    Ok(()) => true,
                    Err(e) => {
                        warn!(code = %code, error = %e, "Ignoring unknown language in KIOSK_LANGUAGES");
                        false
                    }
                })
                .map(str::to_string)
                .collect();

            if parsed.is_empty() {
                warn!("KIOSK_LANGUAGES has no usable language, keeping defaults");
            } else {
                config.supported_languages = parsed;
            }
        }

        if let Some(language) = lookup("KIOSK_DEFAULT_LANGUAGE") {
            match validate_language_code(&language) {
                Ok(()) => config.default_language = language,
                Err(e) => warn!(language = %language, error = %e, "Ignoring KIOSK_DEFAULT_LANGUAGE"),
            }
        }

        if !config.supported_languages.contains(&config.default_language) {
            config.supported_languages.insert(0, config.default_language.clone());
        }

        if let Some(suffix) = lookup("KIOSK_CURRENCY_SUFFIX") {
            config.currency_suffix = suffix;
        }

        if let Some(path) = lookup("KIOSK_CATALOG_PATH") {
            config.catalog_path = Some(PathBuf::from(path));
        }

        config
    }

    /// Where the catalog file lives.
    ///
    /// ## Platform-Specific Defaults
    /// - **macOS**: `~/Library/Application Support/com.cafe.kiosk/catalog.json`
    /// - **Windows**: `%APPDATA%\cafe\kiosk\data\catalog.json`
    /// - **Linux**: `~/.local/share/kiosk/catalog.json`
    pub fn catalog_file(&self) -> Option<PathBuf> {
        if let Some(path) = &self.catalog_path {
            return Some(path.clone());
        }
        ProjectDirs::from("com", "cafe", "kiosk").map(|dirs| dirs.data_dir().join(CATALOG_FILE_NAME))
    }

    /// Store settings the kiosk starts with; the back office edits them
    /// afterwards through [`SettingsState`](super::SettingsState).
    pub fn store_settings(&self) -> StoreSettings {
        StoreSettings {
            store_name: self.store_name.clone(),
            store_description: self.store_description.clone(),
            supported_languages: self.supported_languages.clone(),
            logo_url: None,
        }
    }

    /// Formats a won amount for display.
    ///
    /// ## Example
    /// ```rust
    /// use kiosk_app::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_price(4500), "4,500원");
    /// ```
    pub fn format_price(&self, won: i64) -> String {
        format!("{}{}", Money::from_won(won), self.currency_suffix)
    }
}
