//! # Error Types
//!
//! Domain-specific error types for tailorkart-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tailorkart-core errors (this file)                                     │
//! │  ├── CoreError        - Cart operation failures                         │
//! │  └── ValidationError  - Input validation failures                       │
//! │                                                                         │
//! │  tailorkart-db errors (separate crate)                                  │
//! │  └── DbError          - Snapshot storage failures                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Is NOT an Error
//! - Requesting fabric on a design without a fabric option: clamped, logged.
//! - An incomplete configuration: reported by [`crate::checkout`], never raised.
//! - Updating an id that is not in the cart: `ItemNotFound` internally, a
//!   logged no-op at the UI-facing surface.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Cart operation errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No cart line with this id.
    ///
    /// ## When This Occurs
    /// - Stale UI event after the item was removed
    /// - Quantity change racing a cart clear in another view
    #[error("Cart item not found: {0}")]
    ItemNotFound(String),

    /// Cart has reached the maximum number of lines.
    #[error("Cart cannot have more than {max} items")]
    CartTooLarge { max: usize },

    /// The persisted snapshot could not be encoded or decoded.
    #[error("Cart snapshot is invalid: {0}")]
    Snapshot(#[from] serde_json::Error),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g. unparseable policy name).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
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
        let err = CoreError::ItemNotFound("a1".to_string());
        assert_eq!(err.to_string(), "Cart item not found: a1");

        let err = CoreError::CartTooLarge { max: 100 };
        assert_eq!(err.to_string(), "Cart cannot have more than 100 items");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        };
        assert_eq!(err.to_string(), "price must not be negative");
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
