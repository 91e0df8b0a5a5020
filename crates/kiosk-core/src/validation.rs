//! # Validation Module
//!
//! Input validation utilities for the kiosk.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: UI                                                           │
//! │  ├── Required option groups pre-selected                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Commands (Rust)                                              │
//! │  ├── Type validation (deserialization)                                 │
//! │  └── THIS MODULE: Business rule validation                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Catalog load                                                 │
//! │  └── validate_menu: structural integrity of menu data                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use kiosk_core::validation::{validate_language_code, validate_quantity};
//!
//! assert!(validate_quantity(5).is_ok());
//! assert!(validate_language_code("en").is_ok());
//! assert!(validate_language_code("klingon").is_err());
//! ```

use std::collections::HashSet;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::language;
use crate::types::{MenuItem, OrderStatus};
use crate::MAX_LINE_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted display name.
pub const MAX_NAME_LEN: usize = 100;

/// Longest accepted menu description.
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Highest accepted menu price, in won. Option modifiers are bounded by
/// `±MAX_PRICE`, which keeps every cart and order total far inside `i64`.
pub const MAX_PRICE: i64 = 10_000_000;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a display name (category, menu, option group, option).
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most 100 characters
pub fn validate_name(field: &str, name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a menu description (may be empty).
pub fn validate_description(description: &str) -> ValidationResult<()> {
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(ValidationError::TooLong {
            field: "description".to_string(),
            max: MAX_DESCRIPTION_LEN,
        });
    }
    Ok(())
}

/// Validates a language code against the known list.
pub fn validate_language_code(code: &str) -> ValidationResult<()> {
    if code.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "language".to_string(),
        });
    }

    if !language::is_known(code) {
        return Err(ValidationError::InvalidFormat {
            field: "language".to_string(),
            reason: format!("unknown language code '{}'", code),
        });
    }

    Ok(())
}

/// Parses an order status from its wire form.
///
/// Only `pending` and `completed` are accepted.
pub fn parse_order_status(status: &str) -> ValidationResult<OrderStatus> {
    match status {
        "pending" => Ok(OrderStatus::Pending),
        "completed" => Ok(OrderStatus::Completed),
        _ => Err(ValidationError::NotAllowed {
            field: "status".to_string(),
            allowed: vec!["pending".to_string(), "completed".to_string()],
        }),
    }
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_LINE_QUANTITY (999)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_LINE_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_LINE_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a base menu price in won.
///
/// ## Rules
/// - Must be non-negative; zero is allowed (free water, samples)
/// - Must not exceed MAX_PRICE
pub fn validate_price(won: i64) -> ValidationResult<()> {
    if !(0..=MAX_PRICE).contains(&won) {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_PRICE,
        });
    }

    Ok(())
}

/// Validates an option price modifier; discounts are negative.
pub fn validate_price_modifier(won: i64) -> ValidationResult<()> {
    if !(-MAX_PRICE..=MAX_PRICE).contains(&won) {
        return Err(ValidationError::OutOfRange {
            field: "price modifier".to_string(),
            min: -MAX_PRICE,
            max: MAX_PRICE,
        });
    }

    Ok(())
}

// =============================================================================
// Structural Validators
// =============================================================================

/// Checks a menu item's structure before it enters the catalog.
///
/// ## Rules
/// - Name, price and every option modifier are valid
/// - Group ids are unique within the menu
/// - Option ids are unique within each group
/// - Every required group has at least one option
///
/// ## Errors
/// `CoreError::MalformedMenu` for structural problems,
/// `CoreError::Validation` for field problems.
pub fn validate_menu(menu: &MenuItem) -> CoreResult<()> {
    validate_name("name", &menu.name)?;
    validate_description(&menu.description)?;
    validate_price(menu.price)?;

    let mut group_ids = HashSet::new();
    for group in &menu.option_groups {
        if !group_ids.insert(group.id) {
            return Err(CoreError::malformed(
                menu.id,
                format!("duplicate option group id {}", group.id),
            ));
        }

        validate_name("option group name", &group.name)?;

        if group.required && group.options.is_empty() {
            return Err(CoreError::malformed(
                menu.id,
                format!("required option group {} has no options", group.id),
            ));
        }

        let mut option_ids = HashSet::new();
        for option in &group.options {
            if !option_ids.insert(option.id) {
                return Err(CoreError::malformed(
                    menu.id,
                    format!("duplicate option id {} in group {}", option.id, group.id),
                ));
            }
            validate_name("option name", &option.name)?;
            validate_price_modifier(option.price_modifier)?;
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
