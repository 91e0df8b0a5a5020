//! # API Error Type
//!
//! Unified error type for kiosk commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Kiosk                              │
//! │                                                                         │
//! │  Storefront / Admin          Rust Backend                               │
//! │  ──────────────────          ────────────                               │
//! │                                                                         │
//! │  tap_vending_card(...)                                                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Catalog Error? ─── CatalogError::Parse("...") ──┐              │  │
//! │  │         │                                         │              │  │
//! │  │         ▼                                         ▼              │  │
//! │  │  Domain Error? ─── CoreError::MalformedMenu ──── ApiError ──────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  { "code": "MALFORMED_MENU", "message": "Menu 3 is malformed: ..." }    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Errors serialize with both a machine-readable `code` and a human-readable
//! `message`.

use kiosk_core::CoreError;
use serde::Serialize;

use crate::state::CatalogError;

/// Error returned from kiosk commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Menu not found: 42"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Catalog data is structurally broken
    MalformedMenu,

    /// Cart operation failed
    CartError,

    /// Order could not be placed
    OrderError,

    /// Configuration or catalog file problem
    ConfigError,

    /// Anything else
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: impl std::fmt::Display) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }

    /// Creates a cart error.
    pub fn cart(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::CartError, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let message = err.to_string();
        match err {
            CoreError::MalformedMenu { .. } => ApiError::new(ErrorCode::MalformedMenu, message),
            CoreError::MenuNotFound(id) => ApiError::not_found("Menu", id),
            CoreError::UnknownOption { .. }
            | CoreError::MissingRequiredOption { .. }
            | CoreError::DuplicateGroupChoice { .. }
            | CoreError::QuantityTooLarge { .. }
            | CoreError::Validation(_) => ApiError::validation(message),
            CoreError::MenuInactive(_) | CoreError::CartTooLarge { .. } => ApiError::cart(message),
            CoreError::LineNotFound { .. } => ApiError::new(ErrorCode::NotFound, message),
            CoreError::EmptyOrder => ApiError::new(ErrorCode::OrderError, message),
        }
    }
}

/// Converts catalog loading errors to API errors.
impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Invalid(core) => ApiError::from(core),
            other => {
                tracing::error!("Catalog load failed: {}", other);
                ApiError::new(ErrorCode::ConfigError, other.to_string())
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use kiosk_core::ValidationError;

    #[test]
    fn test_core_error_codes() {
        assert_eq!(
            ApiError::from(CoreError::malformed(3, "required option group 9 has no options")).code,
            ErrorCode::MalformedMenu
        );
        assert_eq!(ApiError::from(CoreError::MenuNotFound(42)).message, "Menu not found: 42");
        assert_eq!(
            ApiError::from(CoreError::CartTooLarge { max: 100 }).code,
            ErrorCode::CartError
        );
        assert_eq!(ApiError::from(CoreError::EmptyOrder).code, ErrorCode::OrderError);
        assert_eq!(
            ApiError::from(CoreError::Validation(ValidationError::Required {
                field: "name".to_string()
            }))
            .code,
            ErrorCode::ValidationError
        );
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(ApiError::not_found("Order", "abc")).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "Order not found: abc");
    }
}
