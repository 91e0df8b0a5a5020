//! # Store Settings State
//!
//! Admin-editable store settings: name, description, offered languages and
//! logo. Seeded from [`ConfigState`](super::ConfigState) at startup and
//! changed from the back office while the kiosk runs.
//!
//! ```text
//! ConfigState (env) ──► SettingsState::new ──► RwLock<StoreSettings>
//!                                                   │
//!     storefront: header, language picker ◄─────────┤ read
//!     back office: update_store_settings ───────────┘ write
//! ```
//!
//! Settings live for the running process; the next start seeds them from
//! the environment again.

use std::sync::{Arc, RwLock};

use kiosk_core::StoreSettings;

/// Live store settings shared by all commands.
#[derive(Debug, Clone)]
pub struct SettingsState {
    settings: Arc<RwLock<StoreSettings>>,

    /// Language the storefront opens in; always offered.
    default_language: String,
}

impl SettingsState {
    pub fn new(settings: StoreSettings, default_language: impl Into<String>) -> Self {
        Self {
            settings: Arc::new(RwLock::new(settings)),
            default_language: default_language.into(),
        }
    }

    /// Gets a copy of the current settings.
    pub fn get(&self) -> StoreSettings {
        self.settings
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Replaces the settings.
    pub fn set(&self, settings: StoreSettings) {
        let mut current = self
            .settings
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *current = settings;
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Whether `language` is offered on the storefront.
    pub fn supports(&self, language: &str) -> bool {
        self.settings
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .supported_languages
            .iter()
            .any(|l| l == language)
    }

    /// Falls back to the default language for anything not offered.
    pub fn resolve_language(&self, requested: Option<&str>) -> String {
        match requested {
            Some(lang) if self.supports(lang) => lang.to_string(),
            _ => self.default_language.clone(),
        }
    }
}

impl Default for SettingsState {
    fn default() -> Self {
        SettingsState::new(StoreSettings::default(), kiosk_core::DEFAULT_LANGUAGE)
    }
}
