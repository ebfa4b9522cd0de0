//! # Wishlist Bridge
//!
//! Turns a saved wishlist entry into a fresh, unconfigured cart item.
//!
//! ## Upstream Id Convention
//! The wishlist still hands over catalog ids whose first character encodes
//! the product kind: `m…` is a material product, anything else a design.
//! [`ProductKind::from_upstream_id`] is the only place that reads it; past
//! this boundary every item carries an explicit [`ProductKind`].
//!
//! ```text
//! WishlistItem { id: "m123" } ──► CartItem { productKind: material, size: "N/A",  orderType: null }
//! WishlistItem { id: "d456" } ──► CartItem { productKind: design,   size: "custom", orderType: stitching }
//! ```

use tracing::debug;

use crate::types::{CartItem, OrderType, ProductKind, WishlistItem};

/// Leading character of upstream ids that denote material products.
pub const MATERIAL_ID_PREFIX: char = 'm';

/// Size shown for material products, which are not tailored.
pub const MATERIAL_SIZE: &str = "N/A";

/// Size shown for designs, which are cut to the customer's measurements.
pub const DESIGN_SIZE: &str = "custom";

impl ProductKind {
    /// Reads the product kind from an upstream catalog id.
    ///
    /// ```rust
    /// use tailorkart_core::types::ProductKind;
    ///
    /// assert_eq!(ProductKind::from_upstream_id("m123"), ProductKind::Material);
    /// assert_eq!(ProductKind::from_upstream_id("d456"), ProductKind::Design);
    /// ```
    pub fn from_upstream_id(id: &str) -> Self {
        if id.starts_with(MATERIAL_ID_PREFIX) {
            ProductKind::Material
        } else {
            ProductKind::Design
        }
    }
}

/// Builds the cart item for a wishlist entry's "move to cart" action.
///
/// The result always arrives unconfigured (`measurement_type = None`) with
/// quantity 1. The id is left blank for the cart to assign.
pub fn from_wishlist_item(wishlist_item: &WishlistItem) -> CartItem {
    let product_kind = ProductKind::from_upstream_id(&wishlist_item.id);

    debug!(
        wishlist_id = %wishlist_item.id,
        category = ?wishlist_item.category,
        kind = ?product_kind,
        "Converting wishlist item to cart item"
    );

    let (size, order_type) = match product_kind {
        ProductKind::Material => (MATERIAL_SIZE, None),
        ProductKind::Design => (DESIGN_SIZE, Some(OrderType::Stitching)),
    };

    CartItem {
        id: String::new(),
        design_id: wishlist_item.id.clone(),
        name: wishlist_item.name.clone(),
        image: wishlist_item.image.clone(),
        price: wishlist_item.price,
        quantity: 1,
        order_type,
        with_material: false,
        measurement_type: None,
        measurements: None,
        pickup_slot: None,
        tailor_id: wishlist_item.tailor_id.clone(),
        shop_name: wishlist_item.shop_name.clone(),
        estimated_days: None,
        size: Some(size.to_string()),
        has_fabric_option: false,
        product_kind,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
