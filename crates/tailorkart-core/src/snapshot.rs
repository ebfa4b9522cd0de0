//! # Cart Snapshot
//!
//! The persisted layout of a cart: a JSON array of [`CartItem`], field for
//! field, in cart order.
//!
//! ```json
//! [
//!   {
//!     "id": "3f1c…", "designId": "d456", "name": "Kurta", "image": null,
//!     "price": 1200, "quantity": 1, "orderType": "stitching",
//!     "withMaterial": false, "measurementType": "pickup", "measurements": null,
//!     "pickupSlot": { "date": "2026-10-21", "time": "morning" },
//!     "tailorId": "t-1", "shopName": "Khan Tailors", "estimatedDays": 7,
//!     "size": "custom", "hasFabricOption": false, "productKind": "design"
//!   }
//! ]
//! ```
//!
//! Decoding does not re-check invariants; [`crate::cart::CartStore::restore`]
//! normalizes what it loads.

use crate::error::CoreResult;
use crate::types::CartItem;

/// Encodes the cart contents for the durable client-local slot.
pub fn encode(items: &[CartItem]) -> CoreResult<String> {
    Ok(serde_json::to_string(items)?)
}

/// Decodes a snapshot previously written by [`encode`].
pub fn decode(payload: &str) -> CoreResult<Vec<CartItem>> {
    Ok(serde_json::from_str(payload)?)
}

// =============================================================================
// Unit Tests
// =============================================================================
