//! # Item Configurator
//!
//! Merges a configuration patch into one cart item while keeping the item's
//! coupling invariants intact.
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Patch field                    Effect                                  │
//! │  ─────────────────────────────  ──────────────────────────────────────  │
//! │  orderType = stitching          withMaterial = false                    │
//! │  orderType = stitching+fabric   withMaterial = true                     │
//! │    … but !hasFabricOption       clamped to stitching                    │
//! │  measurementType = pickup       measurements = null                     │
//! │  measurementType = manual       pickupSlot = null                       │
//! │    + measurements               measurements replaced                   │
//! │  pickupSlot (no type given)     measurementType = pickup                │
//! │  measurements (no type given)   measurementType = manual                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Conflicts resolve to the nearest valid state and are never raised.

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::types::{CartItem, MeasurementSource, MeasurementType, Measurements, OrderType, PickupSlot};
use crate::validation::clamp_quantity;

/// A partial update to a cart item's tailoring configuration.
///
/// `None` means "leave as is".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ItemPatch {
    #[serde(default)]
    pub order_type: Option<OrderType>,

    #[serde(default)]
    pub measurement_type: Option<MeasurementType>,

    #[serde(default)]
    pub measurements: Option<Measurements>,

    #[serde(default)]
    pub measurement_source: Option<MeasurementSource>,

    #[serde(default)]
    pub pickup_slot: Option<PickupSlot>,

    #[serde(default)]
    pub size: Option<String>,
}

impl ItemPatch {
    pub fn order_type(order_type: OrderType) -> Self {
        ItemPatch {
            order_type: Some(order_type),
            ..Default::default()
        }
    }

    pub fn measurement_type(measurement_type: MeasurementType) -> Self {
        ItemPatch {
            measurement_type: Some(measurement_type),
            ..Default::default()
        }
    }

    /// Manual measurements from the measurement-entry form.
    pub fn manual(measurements: Measurements, source: MeasurementSource) -> Self {
        ItemPatch {
            measurement_type: Some(MeasurementType::Manual),
            measurements: Some(measurements),
            measurement_source: Some(source),
            ..Default::default()
        }
    }

    /// A pickup appointment; the measurement type follows implicitly.
    pub fn pickup_slot(slot: PickupSlot) -> Self {
        ItemPatch {
            pickup_slot: Some(slot),
            ..Default::default()
        }
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }
}

/// Applies `patch` to `item`, returning the reconfigured item.
///
/// Pure: the input is consumed and a new value returned; persisting the
/// result is the caller's job.
///
/// ```rust
/// use tailorkart_core::configurator::{apply, ItemPatch};
/// use tailorkart_core::types::{MeasurementType, PickupSlot};
/// # use tailorkart_core::types::{CartItem, Design, DesignSelection};
/// # use tailorkart_core::money::Money;
/// # let design = Design {
/// #     id: "d1".into(), name: "Kurta".into(), image: None,
/// #     price: Money::from_rupees(900), price_with_material: Money::from_rupees(900),
/// #     tailor_id: None, shop_name: None, time_in_days: None,
/// # };
/// # let item = CartItem::from_design(&design, DesignSelection::default());
///
/// let item = apply(item, ItemPatch::pickup_slot(PickupSlot::new("2026-10-21", "evening")));
/// assert_eq!(item.measurement_type, Some(MeasurementType::Pickup));
/// ```
pub fn apply(item: CartItem, patch: ItemPatch) -> CartItem {
    let ItemPatch {
        order_type,
        measurement_type,
        measurements,
        measurement_source,
        pickup_slot,
        size,
    } = patch;

    let mut item = item;

    if let Some(requested) = order_type {
        item.order_type = Some(requested);
    }

    if let Some(size) = size {
        item.size = Some(size);
    }

    // An explicit type wins; otherwise the payload decides the mode.
    let mode = measurement_type.or_else(|| {
        if pickup_slot.is_some() {
            Some(MeasurementType::Pickup)
        } else if measurements.is_some() {
            Some(MeasurementType::Manual)
        } else {
            None
        }
    });

    match mode {
        Some(MeasurementType::Pickup) => {
            item.measurement_type = Some(MeasurementType::Pickup);
            item.measurements = None;
            if let Some(slot) = pickup_slot {
                item.pickup_slot = Some(slot);
            }
        }
        Some(MeasurementType::Manual) => {
            item.measurement_type = Some(MeasurementType::Manual);
            item.pickup_slot = None;
            if let Some(map) = measurements {
                debug!(
                    item_id = %item.id,
                    fields = map.len(),
                    source = ?measurement_source,
                    "Applying manual measurements"
                );
                item.measurements = Some(map);
            }
        }
        None => {}
    }

    normalize(item)
}

/// Re-establishes every item invariant without applying a patch.
///
/// Used when items enter the cart from outside (add, snapshot restore).
pub fn normalize(item: CartItem) -> CartItem {
    let mut item = item;

    if item.order_type == Some(OrderType::StitchingAndFabric) && !item.has_fabric_option {
        debug!(
            item_id = %item.id,
            design_id = %item.design_id,
            "Design has no fabric option, clamping order type to stitching"
        );
        item.order_type = Some(OrderType::Stitching);
    }
    item.with_material = item.order_type.is_some_and(|t| t.includes_material());

    item.quantity = clamp_quantity(item.quantity);

    // Each payload lives only under its own mode.
    if item.measurement_type != Some(MeasurementType::Pickup) {
        item.pickup_slot = None;
    }
    if item.measurement_type != Some(MeasurementType::Manual) {
        item.measurements = None;
    }

    item
}

// =============================================================================
// Unit Tests
// =============================================================================
