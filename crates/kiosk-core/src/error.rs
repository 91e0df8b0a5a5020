//! # Error Types
//!
//! Domain-specific error types for kiosk-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  kiosk-core errors (this file)                                         │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  kiosk app errors                                                      │
//! │  └── ApiError         - What the UI sees (serialized)                  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → UI                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! "Nothing matched" outcomes (removing a variant that is not in the cart,
//! looking up a line that does not exist) are NOT errors. Those return
//! `Option` or are silent no-ops.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Menu data is structurally broken.
    ///
    /// ## When This Occurs
    /// - A required option group has no options (the menu would have no
    ///   purchasable variant at all)
    /// - Duplicate option ids inside one group
    /// - Duplicate group ids inside one menu
    ///
    /// Upstream content has a data-integrity problem; we fail instead of
    /// hiding the menu.
    #[error("Menu {menu_id} is malformed: {reason}")]
    MalformedMenu { menu_id: i64, reason: String },

    /// Menu cannot be found in the catalog.
    #[error("Menu not found: {0}")]
    MenuNotFound(i64),

    /// Selected option does not belong to the menu.
    #[error("Option {option_id} of group {group_id} does not belong to menu {menu_id}")]
    UnknownOption {
        menu_id: i64,
        group_id: i64,
        option_id: i64,
    },

    /// A required option group was left unselected (manual picker).
    #[error("Menu {menu_id} requires a choice for option group {group_id}")]
    MissingRequiredOption { menu_id: i64, group_id: i64 },

    /// More than one option was chosen for the same group.
    #[error("Option group {group_id} allows only one choice")]
    DuplicateGroupChoice { group_id: i64 },

    /// Menu is inactive and cannot be sold.
    #[error("Menu {0} is not available for sale")]
    MenuInactive(i64),

    /// Cart has exceeded maximum allowed lines.
    #[error("Cart cannot have more than {max} lines")]
    CartTooLarge { max: usize },

    /// Line quantity exceeds maximum allowed.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// No cart line at the given position.
    #[error("Cart line {index} does not exist")]
    LineNotFound { index: usize },

    /// Order request contained nothing that could be priced.
    #[error("Order has no items")]
    EmptyOrder,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Creates a malformed-menu error.
    pub fn malformed(menu_id: i64, reason: impl Into<String>) -> Self {
        CoreError::MalformedMenu {
            menu_id,
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user or admin input doesn't meet requirements.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., unknown language code).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },

    /// Duplicate value (e.g., duplicate option id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::malformed(7, "required group 2 has no options");
        assert_eq!(
            err.to_string(),
            "Menu 7 is malformed: required group 2 has no options"
        );

        let err = CoreError::UnknownOption {
            menu_id: 1,
            group_id: 2,
            option_id: 3,
        };
        assert_eq!(
            err.to_string(),
            "Option 3 of group 2 does not belong to menu 1"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: 999,
        };
        assert_eq!(err.to_string(), "quantity must be between 1 and 999");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
