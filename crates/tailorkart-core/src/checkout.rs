//! # Checkout Gate
//!
//! Decides whether the cart may proceed to checkout and explains why not.
//!
//! ## Readiness Rules
//! ```text
//! measurementType   ready when
//! ───────────────   ─────────────────────────────────────────────
//! null              never          → missing_measurement_mode
//! pickup            slot date AND  → missing_pickup_slot
//!                   time are set
//! manual            measurements   → missing_measurements
//!                   has ≥ 1 key
//! ```
//!
//! Individual measurement values are not checked for emptiness; the
//! storefront has always accepted any non-empty map.
//!
//! Carts are small, so everything is recomputed from scratch on each call.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{CartItem, MeasurementType};

/// Why a cart item blocks checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum NotReadyReason {
    MissingMeasurementMode,
    MissingPickupSlot,
    MissingMeasurements,
}

impl NotReadyReason {
    /// The wire tag, e.g. `"missing_pickup_slot"`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            NotReadyReason::MissingMeasurementMode => "missing_measurement_mode",
            NotReadyReason::MissingPickupSlot => "missing_pickup_slot",
            NotReadyReason::MissingMeasurements => "missing_measurements",
        }
    }
}

/// A non-ready cart item and the reason it is not ready.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ItemDiagnostic {
    pub item_id: String,
    pub reason: NotReadyReason,
}

/// Full readiness evaluation for the checkout button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutReport {
    pub ready: bool,
    pub diagnostics: Vec<ItemDiagnostic>,
}

/// Returns the reason `item` is not ready, or `None` when it is.
pub fn item_blocker(item: &CartItem) -> Option<NotReadyReason> {
    match item.measurement_type {
        None => Some(NotReadyReason::MissingMeasurementMode),
        Some(MeasurementType::Pickup) => {
            let slot_complete = item.pickup_slot.as_ref().is_some_and(|s| s.is_complete());
            (!slot_complete).then_some(NotReadyReason::MissingPickupSlot)
        }
        Some(MeasurementType::Manual) => {
            let has_measurements = item.measurements.as_ref().is_some_and(|m| !m.is_empty());
            (!has_measurements).then_some(NotReadyReason::MissingMeasurements)
        }
    }
}

/// Whether a single item is fully configured.
#[inline]
pub fn is_item_ready(item: &CartItem) -> bool {
    item_blocker(item).is_none()
}

/// The cart is non-empty and every item is ready.
pub fn is_checkout_ready(items: &[CartItem]) -> bool {
    !items.is_empty() && items.iter().all(is_item_ready)
}

/// One entry per non-ready item, in cart order.
pub fn diagnostics(items: &[CartItem]) -> Vec<ItemDiagnostic> {
    items
        .iter()
        .filter_map(|item| {
            item_blocker(item).map(|reason| ItemDiagnostic {
                item_id: item.id.clone(),
                reason,
            })
        })
        .collect()
}

/// Readiness and diagnostics in one pass over the cart.
pub fn evaluate(items: &[CartItem]) -> CheckoutReport {
    let diagnostics = diagnostics(items);
    CheckoutReport {
        ready: !items.is_empty() && diagnostics.is_empty(),
        diagnostics,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::{Measurements, OrderType, PickupSlot, ProductKind};

    fn item(id: &str) -> CartItem {
        CartItem {
            id: id.to_string(),
            design_id: format!("d-{}", id),
            name: format!("Design {}", id),
            image: None,
            price: Money::from_rupees(1000),
            quantity: 1,
            order_type: Some(OrderType::Stitching),
            with_material: false,
            measurement_type: None,
            measurements: None,
            pickup_slot: None,
            tailor_id: None,
            shop_name: None,
            estimated_days: None,
            size: Some("custom".to_string()),
            has_fabric_option: false,
            product_kind: ProductKind::Design,
        }
    }

    fn pickup(id: &str, slot: Option<PickupSlot>) -> CartItem {
        CartItem {
            measurement_type: Some(MeasurementType::Pickup),
            pickup_slot: slot,
            ..item(id)
        }
    }

    fn manual(id: &str, measurements: Option<Measurements>) -> CartItem {
        CartItem {
            measurement_type: Some(MeasurementType::Manual),
            measurements,
            ..item(id)
        }
    }

    #[test]
    fn test_unconfigured_item_never_ready() {
        let unconfigured = item("a");
        assert!(!is_item_ready(&unconfigured));
        assert_eq!(item_blocker(&unconfigured), Some(NotReadyReason::MissingMeasurementMode));
    }

    #[test]
    fn test_pickup_requires_date_and_time() {
        assert!(is_item_ready(&pickup("a", Some(PickupSlot::new("2026-10-21", "morning")))));
        assert!(!is_item_ready(&pickup("a", None)));

        let no_time = PickupSlot {
            date: Some("2026-10-21".to_string()),
            time: None,
        };
        assert_eq!(
            item_blocker(&pickup("a", Some(no_time))),
            Some(NotReadyReason::MissingPickupSlot)
        );

        let blank_date = PickupSlot::new("", "morning");
        assert!(!is_item_ready(&pickup("a", Some(blank_date))));
    }

    #[test]
    fn test_manual_requires_at_least_one_measurement() {
        let one = Measurements::from([("chest".to_string(), "36".to_string())]);
        assert!(is_item_ready(&manual("a", Some(one))));

        assert!(!is_item_ready(&manual("a", None)));
        assert_eq!(
            item_blocker(&manual("a", Some(Measurements::new()))),
            Some(NotReadyReason::MissingMeasurements)
        );
    }

    #[test]
    fn test_manual_values_not_checked_for_emptiness() {
        let blank_value = Measurements::from([("waist".to_string(), String::new())]);
        assert!(is_item_ready(&manual("a", Some(blank_value))));
    }

    #[test]
    fn test_empty_cart_not_ready() {
        assert!(!is_checkout_ready(&[]));
        let report = evaluate(&[]);
        assert!(!report.ready);
        assert!(report.diagnostics.is_empty());
    }

    #[test]
    fn test_mixed_cart_names_only_blocking_item() {
        let items = vec![
            pickup("ready", Some(PickupSlot::new("2026-10-21", "afternoon"))),
            manual("blocked", None),
        ];

        assert!(!is_checkout_ready(&items));
        assert_eq!(
            diagnostics(&items),
            vec![ItemDiagnostic {
                item_id: "blocked".to_string(),
                reason: NotReadyReason::MissingMeasurements,
            }]
        );
    }

    #[test]
    fn test_all_ready_cart() {
        let chest = Measurements::from([("chest".to_string(), "40".to_string())]);
        let items = vec![
            pickup("a", Some(PickupSlot::new("2026-10-21", "morning"))),
            manual("b", Some(chest)),
        ];
        let report = evaluate(&items);
        assert!(report.ready);
        assert!(report.diagnostics.is_empty());
    }

    #[test]
    fn test_reason_tags() {
        let json = serde_json::to_string(&NotReadyReason::MissingMeasurementMode).unwrap();
        assert_eq!(json, "\"missing_measurement_mode\"");
        assert_eq!(NotReadyReason::MissingPickupSlot.as_str(), "missing_pickup_slot");
    }
}
