//! # Validation Module
//!
//! Input checks applied at the cart boundary.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Storefront (TypeScript)                                                │
//! │  └── Form-level checks, immediate feedback                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  THIS MODULE                                                            │
//! │  ├── Reject: negative or oversized price, nameless item                 │
//! │  └── Clamp:  quantity into [1, MAX_ITEM_QUANTITY]                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  configurator: coupling rules between fields                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Configuration completeness is deliberately absent here: an item without
//! measurements is valid in the cart and only blocks checkout.

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::CartItem;
use crate::{MAX_ITEM_QUANTITY, MAX_UNIT_PRICE};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Clamps a requested quantity into `[1, MAX_ITEM_QUANTITY]`.
///
/// ```rust
/// use tailorkart_core::validation::clamp_quantity;
///
/// assert_eq!(clamp_quantity(0), 1);
/// assert_eq!(clamp_quantity(-3), 1);
/// assert_eq!(clamp_quantity(4), 4);
/// assert_eq!(clamp_quantity(5000), 999);
/// ```
pub fn clamp_quantity(qty: i64) -> i64 {
    qty.clamp(1, MAX_ITEM_QUANTITY)
}

/// Validates a unit price. Zero is allowed (free alterations).
///
/// ## Rules
/// - Must not be negative
/// - Must not exceed [`MAX_UNIT_PRICE`]
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }

    if price > MAX_UNIT_PRICE {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_UNIT_PRICE.rupees(),
        });
    }

    Ok(())
}

/// Validates the fields of an item about to be added to the cart.
///
/// ## Rules
/// - `design_id` and `name` must not be blank
/// - `price` must not be negative
pub fn validate_new_item(item: &CartItem) -> ValidationResult<()> {
    if item.design_id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "designId".to_string(),
        });
    }

    if item.name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    validate_price(item.price)
}

/// Validates a configured tax rate in basis points (0% to 100%).
pub fn validate_tax_rate_bps(bps: u32) -> ValidationResult<()> {
    if bps > 10_000 {
        return Err(ValidationError::OutOfRange {
            field: "tax_rate".to_string(),
            min: 0,
            max: 10_000,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
