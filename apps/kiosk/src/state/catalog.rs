//! # Catalog State
//!
//! The menu catalog: categories with their menus, option groups and options.
//!
//! ## Lifecycle
//! ```text
//! catalog.json ──► CatalogState::load ──► validate every menu ──► RwLock
//!                                                                  │
//!          storefront reads (grid, menu detail, pricing) ◄─────────┤
//!          admin writes (CRUD, reorder, translations) ─────────────┘
//!                                                                  │
//! catalog.json ◄── CatalogState::save ◄────────────────────────────┘
//! ```
//!
//! A catalog with a broken menu is rejected as a whole; the storefront
//! never renders a partially valid catalog. Option groups and options are
//! kept in `sortOrder` order from the moment the catalog is loaded.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use kiosk_core::validation::{validate_menu, validate_name};
use kiosk_core::{Category, CoreError, CoreResult, ValidationError};
use thiserror::Error;
use tracing::debug;

/// Errors while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Could not read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not write catalog file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] CoreError),
}

/// Checks the catalog as a whole.
///
/// ## Rules
/// - Every menu passes `validate_menu`
/// - Category ids are unique
/// - Menu, option group and option ids are unique across the catalog
pub fn validate_catalog(categories: &[Category]) -> CoreResult<()> {
    let mut category_ids = HashSet::new();
    let mut menu_ids = HashSet::new();
    let mut group_ids = HashSet::new();
    let mut option_ids = HashSet::new();

    for category in categories {
        validate_name("category name", &category.name)?;
        if !category_ids.insert(category.id) {
            return Err(CoreError::Validation(ValidationError::Duplicate {
                field: "category id".to_string(),
                value: category.id.to_string(),
            }));
        }

        for menu in &category.menus {
            if !menu_ids.insert(menu.id) {
                return Err(CoreError::malformed(menu.id, "menu id appears more than once"));
            }
            validate_menu(menu)?;

            for group in &menu.option_groups {
                if !group_ids.insert(group.id) {
                    return Err(CoreError::malformed(
                        menu.id,
                        format!("option group id {} is used by another group", group.id),
                    ));
                }
                for option in &group.options {
                    if !option_ids.insert(option.id) {
                        return Err(CoreError::malformed(
                            menu.id,
                            format!("option id {} is used by another option", option.id),
                        ));
                    }
                }
            }
        }
    }
    Ok(())
}

/// Shared catalog state.
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    categories: Arc<RwLock<Vec<Category>>>,

    /// Where `save` writes; `None` keeps edits in memory only.
    file: Option<PathBuf>,
}

impl CatalogState {
    /// Wraps an already-built catalog after validating it.
    pub fn new(mut categories: Vec<Category>) -> Result<Self, CatalogError> {
        validate_catalog(&categories)?;
        for menu in categories.iter_mut().flat_map(|c| c.menus.iter_mut()) {
            menu.sort_option_groups();
        }
        Ok(CatalogState {
            categories: Arc::new(RwLock::new(categories)),
            file: None,
        })
    }

    /// An empty catalog (fresh install).
    pub fn empty() -> Self {
        CatalogState::default()
    }

    /// Parses a JSON array of categories.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let categories: Vec<Category> = serde_json::from_str(json)?;
        CatalogState::new(categories)
    }

    /// Reads a catalog file; later saves go back to the same file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(CatalogState::from_json(&json)?.with_file(path))
    }

    /// Sets the file `save` writes to.
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Writes the catalog back to its file as pretty-printed JSON.
    ///
    /// Creates the parent directory on first save. Without a file this is
    /// a no-op.
    pub fn save(&self) -> Result<(), CatalogError> {
        let Some(path) = &self.file else {
            return Ok(());
        };

        let json = serde_json::to_string_pretty(&self.snapshot())?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| CatalogError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, json).map_err(|source| CatalogError::Write {
            path: path.clone(),
            source,
        })?;

        debug!(?path, "Catalog saved");
        Ok(())
    }

    /// Executes a function with read access to the categories.
    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&[Category]) -> R,
    {
        let categories = self
            .categories
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&categories)
    }

    /// Executes a function with write access to the categories.
    pub fn write<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Vec<Category>) -> R,
    {
        let mut categories = self
            .categories
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut categories)
    }

    /// Copy of the current catalog.
    pub fn snapshot(&self) -> Vec<Category> {
        self.read(|c| c.to_vec())
    }

    pub fn menu_count(&self) -> usize {
        self.read(|c| c.iter().map(|cat| cat.menus.len()).sum())
    }
}
