//! # Domain Types
//!
//! Core domain types of the TailorKart cart.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐        │
//! │  │    Design       │   │    CartItem     │   │  WishlistItem   │        │
//! │  │  (catalog)      │──►│  id (UUID)      │◄──│  (wishlist)     │        │
//! │  │  price          │   │  design_id      │   │  id "m…"/"d…"   │        │
//! │  │  price_with_mat │   │  order_type     │   │  price          │        │
//! │  └─────────────────┘   │  measurement_*  │   └─────────────────┘        │
//! │                        │  pickup_slot    │                              │
//! │                        └─────────────────┘                              │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐        │
//! │  │   OrderType     │   │ MeasurementType │   │  ProductKind    │        │
//! │  │  Stitching      │   │  Manual         │   │  Design         │        │
//! │  │  StitchingAnd-  │   │  Pickup         │   │  Material       │        │
//! │  │    Fabric       │   └─────────────────┘   └─────────────────┘        │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Weak References
//! A `CartItem` points at its catalog entry through `design_id` only. The
//! design's lifecycle is independent of the cart.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

/// Customer-entered body measurements, keyed by field name ("chest", "waist", ...).
pub type Measurements = BTreeMap<String, String>;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// 1 basis point = 0.01%, so GST at 18% is 1800 bps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from a percentage (configuration input only).
    pub fn from_percentage(pct: f64) -> Self {
        TaxRate((pct * 100.0).round() as u32)
    }

    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// The rate of `1 + self`, e.g. 18% → 118%.
    #[inline]
    pub const fn inclusive(&self) -> Self {
        TaxRate(10_000 + self.0)
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Order Type
// =============================================================================

/// What the customer is ordering for a design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderType {
    /// The customer supplies the fabric; the tailor only stitches.
    Stitching,
    /// The tailor supplies fabric and stitches. Requires `has_fabric_option`.
    StitchingAndFabric,
}

impl OrderType {
    /// Whether this order type bundles fabric (`withMaterial` on the wire).
    #[inline]
    pub const fn includes_material(&self) -> bool {
        matches!(self, OrderType::StitchingAndFabric)
    }
}

// =============================================================================
// Measurement Type
// =============================================================================

/// How the tailor gets the customer's measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementType {
    /// Customer types the measurements in.
    Manual,
    /// Tailor visits the customer at a scheduled slot.
    Pickup,
}

/// Where a manual measurement set came from.
///
/// Both sources are applied identically; the distinction is kept for logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementSource {
    /// Entered just now in the measurement form.
    Fresh,
    /// Reused from the customer's saved measurement profile.
    Saved,
}

// =============================================================================
// Product Kind
// =============================================================================

/// Whether a cart line is a tailoring design or a raw material product.
///
/// Upstream catalog ids still encode this as a leading character; the
/// translation happens once, in [`crate::wishlist`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ProductKind {
    #[default]
    Design,
    Material,
}

// =============================================================================
// Pickup Slot
// =============================================================================

/// A scheduled tailor-visits-customer measurement appointment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PickupSlot {
    /// Appointment date as entered by the date picker (e.g. "2026-10-21").
    #[serde(default)]
    pub date: Option<String>,

    /// Named time band (e.g. "morning", "10am-1pm").
    #[serde(default)]
    pub time: Option<String>,
}

impl PickupSlot {
    pub fn new(date: impl Into<String>, time: impl Into<String>) -> Self {
        PickupSlot {
            date: Some(date.into()),
            time: Some(time.into()),
        }
    }

    pub fn has_date(&self) -> bool {
        is_set(&self.date)
    }

    pub fn has_time(&self) -> bool {
        is_set(&self.time)
    }

    /// Both date and time are present and non-blank.
    pub fn is_complete(&self) -> bool {
        self.has_date() && self.has_time()
    }
}

fn is_set(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

// =============================================================================
// Cart Item
// =============================================================================

/// One line in the cart: a design (or material) plus its tailoring configuration.
///
/// ## Invariants (enforced by [`crate::configurator`])
/// - `with_material == (order_type == Some(StitchingAndFabric))`
/// - `order_type == Some(StitchingAndFabric)` only when `has_fabric_option`
/// - `measurements` is `Some` only under `Manual`, `pickup_slot` only under `Pickup`
/// - `quantity >= 1`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Stable identity within the cart. Blank means "assign one on add".
    #[serde(default)]
    pub id: String,

    /// Weak reference to the catalog entry.
    pub design_id: String,

    pub name: String,

    #[serde(default)]
    pub image: Option<String>,

    /// Unit price, frozen when the item was added.
    pub price: Money,

    pub quantity: i64,

    #[serde(default)]
    pub order_type: Option<OrderType>,

    #[serde(default)]
    pub with_material: bool,

    #[serde(default)]
    pub measurement_type: Option<MeasurementType>,

    #[serde(default)]
    pub measurements: Option<Measurements>,

    #[serde(default)]
    pub pickup_slot: Option<PickupSlot>,

    #[serde(default)]
    pub tailor_id: Option<String>,

    #[serde(default)]
    pub shop_name: Option<String>,

    #[serde(default)]
    pub estimated_days: Option<u32>,

    #[serde(default)]
    pub size: Option<String>,

    #[serde(default)]
    pub has_fabric_option: bool,

    #[serde(default)]
    pub product_kind: ProductKind,
}

impl CartItem {
    /// Creates the cart line for a design page's add-to-cart action.
    ///
    /// The unit price follows the requested order type: `price_with_material`
    /// for fabric orders, `price` otherwise. A fabric request on a design
    /// without a fabric option is clamped to plain stitching first.
    pub fn from_design(design: &Design, selection: DesignSelection) -> Self {
        let has_fabric_option = design.has_fabric_option();
        let order_type = match selection.order_type {
            OrderType::StitchingAndFabric if !has_fabric_option => OrderType::Stitching,
            other => other,
        };
        let price = if order_type.includes_material() {
            design.price_with_material
        } else {
            design.price
        };

        CartItem {
            id: String::new(),
            design_id: design.id.clone(),
            name: design.name.clone(),
            image: design.image.clone(),
            price,
            quantity: selection.quantity.max(1),
            order_type: Some(order_type),
            with_material: order_type.includes_material(),
            measurement_type: None,
            measurements: None,
            pickup_slot: None,
            tailor_id: design.tailor_id.clone(),
            shop_name: design.shop_name.clone(),
            estimated_days: design.time_in_days,
            size: selection.size,
            has_fabric_option,
            product_kind: ProductKind::Design,
        }
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Catalog & Wishlist Records (external)
// =============================================================================

/// A catalog design record, as served by the catalog collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Design {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    pub price: Money,
    pub price_with_material: Money,
    #[serde(default)]
    pub tailor_id: Option<String>,
    #[serde(default)]
    pub shop_name: Option<String>,
    #[serde(default)]
    pub time_in_days: Option<u32>,
}

impl Design {
    /// A design can be ordered with fabric when that costs more than stitching alone.
    #[inline]
    pub fn has_fabric_option(&self) -> bool {
        self.price_with_material > self.price
    }
}

/// The choices a customer makes on a design page before adding to cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DesignSelection {
    pub order_type: OrderType,
    #[serde(default)]
    pub size: Option<String>,
    pub quantity: i64,
}

impl Default for DesignSelection {
    fn default() -> Self {
        DesignSelection {
            order_type: OrderType::Stitching,
            size: None,
            quantity: 1,
        }
    }
}

/// A saved wishlist entry, as served by the wishlist collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct WishlistItem {
    /// Upstream id; a leading `m` marks a material product.
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    pub price: Money,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tailor_id: Option<String>,
    #[serde(default)]
    pub shop_name: Option<String>,
}

// =============================================================================
// Unit Tests
// =============================================================================
