//! # Cart Store
//!
//! Owns the ordered cart lines and routes every mutation through the
//! configurator.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operations                                │
//! │                                                                         │
//! │  UI Action               Store Operation           State Change         │
//! │  ─────────               ───────────────           ────────────         │
//! │                                                                         │
//! │  Add to cart ──────────► add_to_cart() ──────────► items.push(item)     │
//! │  Move from wishlist ───► add_to_cart() ──────────► items.push(item)     │
//! │  Change quantity ──────► update_quantity() ──────► items[i].quantity    │
//! │  Pick measurements ────► update_item_details() ──► configurator::apply  │
//! │  Click remove ─────────► remove_from_cart() ─────► items.remove(i)      │
//! │  Place order / reset ──► clear_cart() ───────────► items.clear()        │
//! │                                                                         │
//! │  After every real change: observers.on_cart_changed(event, items)       │
//! │  (re-render, snapshot persistence)                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Two Surfaces
//! The `add`/`update`/`set_quantity`/`remove` methods return [`CoreResult`]
//! so callers can tell `ItemNotFound` apart. The UI-facing `*_cart` methods
//! wrap them, log failures, and carry on: a stale click on a removed item
//! is not something the customer needs to hear about.
//!
//! There is no merge-by-design: the same design added twice with different
//! configurations is two separate lines.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use ts_rs::TS;
use uuid::Uuid;

use crate::checkout::{self, CheckoutReport, ItemDiagnostic};
use crate::configurator::{self, ItemPatch};
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::pricing::{CartTotals, PricingEngine};
use crate::types::CartItem;
use crate::validation::{clamp_quantity, validate_new_item};
use crate::MAX_CART_ITEMS;

// =============================================================================
// Quantity Floor Policy
// =============================================================================

/// What happens when the customer decrements a quantity below 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum QuantityFloorPolicy {
    /// The quantity stays at 1; removal needs the explicit remove action.
    #[default]
    ClampAtOne,
    /// The line is removed from the cart.
    RemoveItem,
}

/// The storefront clamps; it never removes on decrement.
pub const DEFAULT_QUANTITY_FLOOR_POLICY: QuantityFloorPolicy = QuantityFloorPolicy::ClampAtOne;

impl FromStr for QuantityFloorPolicy {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clamp" | "clamp_at_one" => Ok(QuantityFloorPolicy::ClampAtOne),
            "remove" | "remove_item" => Ok(QuantityFloorPolicy::RemoveItem),
            other => Err(ValidationError::InvalidFormat {
                field: "quantity floor policy".to_string(),
                reason: format!("expected 'clamp' or 'remove', got '{}'", other),
            }),
        }
    }
}

// =============================================================================
// Observers
// =============================================================================

/// A change that happened to the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    Added { item_id: String },
    Updated { item_id: String },
    QuantityChanged { item_id: String, quantity: i64 },
    Removed { item_id: String },
    Cleared,
    Restored { count: usize },
}

/// Receives the cart contents after every state change.
///
/// Observers must not fail the mutation: anything they do (re-render,
/// write a snapshot) is best-effort.
pub trait CartObserver {
    fn on_cart_changed(&self, event: &CartEvent, items: &[CartItem]);
}

// =============================================================================
// Cart Store
// =============================================================================

/// The customer's cart for one session.
///
/// Created by the session owner and passed by reference to whatever needs
/// it; there is no process-wide cart.
pub struct CartStore {
    items: Vec<CartItem>,
    floor_policy: QuantityFloorPolicy,
    observers: Vec<Box<dyn CartObserver>>,
}

impl CartStore {
    /// Creates an empty cart with the default quantity floor policy.
    pub fn new() -> Self {
        CartStore {
            items: Vec::new(),
            floor_policy: DEFAULT_QUANTITY_FLOOR_POLICY,
            observers: Vec::new(),
        }
    }

    pub fn with_floor_policy(mut self, policy: QuantityFloorPolicy) -> Self {
        self.floor_policy = policy;
        self
    }

    pub fn floor_policy(&self) -> QuantityFloorPolicy {
        self.floor_policy
    }

    /// Registers an observer, called after each subsequent change.
    pub fn subscribe(&mut self, observer: impl CartObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    // -------------------------------------------------------------------------
    // Read access
    // -------------------------------------------------------------------------

    /// Read-only view of the lines, in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&CartItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Σ quantity.
    pub fn total_items(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Σ price × quantity, before tax.
    pub fn total_price(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    // -------------------------------------------------------------------------
    // Result-returning operations
    // -------------------------------------------------------------------------

    /// Adds a line and returns its id.
    ///
    /// ## Behavior
    /// - Rejects a blank name/design id, a negative price, or a full cart
    /// - Normalizes the item (quantity floor, fabric clamp, exclusivity)
    /// - Assigns a UUID v4 when the id is blank or already in the cart
    pub fn add(&mut self, item: CartItem) -> CoreResult<String> {
        if self.items.len() >= MAX_CART_ITEMS {
            return Err(CoreError::CartTooLarge { max: MAX_CART_ITEMS });
        }
        validate_new_item(&item)?;

        let mut item = configurator::normalize(item);
        if item.id.trim().is_empty() || self.get(&item.id).is_some() {
            if !item.id.trim().is_empty() {
                debug!(item_id = %item.id, "Id already in cart, assigning a new one");
            }
            item.id = Uuid::new_v4().to_string();
        }

        let item_id = item.id.clone();
        debug!(item_id = %item_id, design_id = %item.design_id, "Adding item to cart");
        self.items.push(item);
        self.notify(CartEvent::Added {
            item_id: item_id.clone(),
        });
        Ok(item_id)
    }

    /// Applies a configuration patch to one line.
    pub fn update(&mut self, id: &str, patch: ItemPatch) -> CoreResult<()> {
        let index = self.index_of(id)?;
        let updated = configurator::apply(self.items[index].clone(), patch);
        if updated == self.items[index] {
            return Ok(());
        }

        self.items[index] = updated;
        self.notify(CartEvent::Updated {
            item_id: id.to_string(),
        });
        Ok(())
    }

    /// Sets a line's quantity, applying the floor policy below 1.
    pub fn set_quantity(&mut self, id: &str, quantity: i64) -> CoreResult<()> {
        let index = self.index_of(id)?;

        if quantity < 1 && self.floor_policy == QuantityFloorPolicy::RemoveItem {
            debug!(item_id = %id, quantity, "Quantity below floor, removing item");
            self.remove(id)?;
            return Ok(());
        }

        let quantity = clamp_quantity(quantity);
        if self.items[index].quantity == quantity {
            return Ok(());
        }

        self.items[index].quantity = quantity;
        self.notify(CartEvent::QuantityChanged {
            item_id: id.to_string(),
            quantity,
        });
        Ok(())
    }

    /// Removes a line and returns it.
    pub fn remove(&mut self, id: &str) -> CoreResult<CartItem> {
        let index = self.index_of(id)?;
        let removed = self.items.remove(index);
        self.notify(CartEvent::Removed {
            item_id: id.to_string(),
        });
        Ok(removed)
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.items.clear();
        self.notify(CartEvent::Cleared);
    }

    /// Replaces the contents with a persisted snapshot.
    ///
    /// Entries that fail validation are dropped, the rest normalized.
    /// Blank or duplicate ids get fresh ones. Returns the number kept.
    pub fn restore(&mut self, items: Vec<CartItem>) -> usize {
        let offered = items.len();
        let mut seen = HashSet::new();
        let mut restored = Vec::with_capacity(offered.min(MAX_CART_ITEMS));

        for item in items {
            if restored.len() >= MAX_CART_ITEMS {
                warn!(max = MAX_CART_ITEMS, "Snapshot exceeds cart limit, truncating");
                break;
            }
            if let Err(e) = validate_new_item(&item) {
                warn!(item_id = %item.id, error = %e, "Dropping invalid item from snapshot");
                continue;
            }

            let mut item = configurator::normalize(item);
            if item.id.trim().is_empty() || seen.contains(&item.id) {
                item.id = Uuid::new_v4().to_string();
            }
            seen.insert(item.id.clone());
            restored.push(item);
        }

        let count = restored.len();
        info!(offered, restored = count, "Cart restored from snapshot");
        self.items = restored;
        self.notify(CartEvent::Restored { count });
        count
    }

    // -------------------------------------------------------------------------
    // UI-facing operations (lenient)
    // -------------------------------------------------------------------------

    /// Adds a line, returning its id, or `None` if it was rejected.
    pub fn add_to_cart(&mut self, item: CartItem) -> Option<String> {
        match self.add(item) {
            Ok(id) => Some(id),
            Err(e) => {
                warn!(error = %e, "add_to_cart rejected item");
                None
            }
        }
    }

    pub fn update_quantity(&mut self, id: &str, quantity: i64) {
        if let Err(e) = self.set_quantity(id, quantity) {
            debug!(item_id = %id, error = %e, "update_quantity ignored");
        }
    }

    pub fn update_item_details(&mut self, id: &str, patch: ItemPatch) {
        if let Err(e) = self.update(id, patch) {
            debug!(item_id = %id, error = %e, "update_item_details ignored");
        }
    }

    pub fn remove_from_cart(&mut self, id: &str) {
        if let Err(e) = self.remove(id) {
            debug!(item_id = %id, error = %e, "remove_from_cart ignored");
        }
    }

    pub fn clear_cart(&mut self) {
        self.clear();
    }

    // -------------------------------------------------------------------------
    // Derived views
    // -------------------------------------------------------------------------

    pub fn is_checkout_ready(&self) -> bool {
        checkout::is_checkout_ready(&self.items)
    }

    pub fn diagnostics(&self) -> Vec<ItemDiagnostic> {
        checkout::diagnostics(&self.items)
    }

    pub fn totals(&self, pricing: &PricingEngine) -> CartTotals {
        pricing.compute_totals(&self.items)
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn index_of(&self, id: &str) -> CoreResult<usize> {
        self.items
            .iter()
            .position(|i| i.id == id)
            .ok_or_else(|| CoreError::ItemNotFound(id.to_string()))
    }

    fn notify(&self, event: CartEvent) {
        for observer in &self.observers {
            observer.on_cart_changed(&event, &self.items);
        }
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("items", &self.items)
            .field("floor_policy", &self.floor_policy)
            .field("observers", &self.observers.len())
            .finish()
    }
}

// =============================================================================
// Cart View
// =============================================================================

/// Everything the cart page renders, in one response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub items: Vec<CartItem>,
    pub total_items: i64,
    pub total_price: Money,
    pub totals: CartTotals,
    pub checkout: CheckoutReport,
}

impl CartView {
    pub fn new(cart: &CartStore, pricing: &PricingEngine) -> Self {
        CartView {
            items: cart.items.clone(),
            total_items: cart.total_items(),
            total_price: cart.total_price(),
            totals: cart.totals(pricing),
            checkout: checkout::evaluate(&cart.items),
        }
    }
}

impl From<&CartStore> for CartView {
    fn from(cart: &CartStore) -> Self {
        CartView::new(cart, &PricingEngine::default())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::checkout::NotReadyReason;
    use crate::types::{
        Design, DesignSelection, MeasurementSource, MeasurementType, Measurements, OrderType,
        PickupSlot, ProductKind, WishlistItem,
    };
    use crate::wishlist::from_wishlist_item;

    fn design(id: &str, price: i64, price_with_material: i64) -> Design {
        Design {
            id: id.to_string(),
            name: format!("Design {}", id),
            image: None,
            price: Money::from_rupees(price),
            price_with_material: Money::from_rupees(price_with_material),
            tailor_id: Some("t-1".to_string()),
            shop_name: Some("Khan Tailors".to_string()),
            time_in_days: Some(7),
        }
    }

    fn stitching(id: &str, price: i64) -> CartItem {
        CartItem::from_design(&design(id, price, price), DesignSelection::default())
    }

    #[derive(Clone, Default)]
    struct Recorder {
        events: Rc<RefCell<Vec<CartEvent>>>,
    }

    impl CartObserver for Recorder {
        fn on_cart_changed(&self, event: &CartEvent, _items: &[CartItem]) {
            self.events.borrow_mut().push(event.clone());
        }
    }

    #[test]
    fn test_add_assigns_id_and_totals() {
        let mut cart = CartStore::new();
        let mut item = stitching("d1", 1000);
        item.quantity = 2;

        let id = cart.add(item).unwrap();
        assert!(!id.is_empty());
        assert_eq!(cart.total_items(), 2);
        assert_eq!(cart.total_price(), Money::from_rupees(2000));

        let totals = cart.totals(&PricingEngine::default());
        assert_eq!(totals.tax, Money::from_rupees(360));
        assert_eq!(totals.grand_total, Money::from_rupees(2360));
    }

    #[test]
    fn test_same_design_twice_is_two_lines() {
        let mut cart = CartStore::new();
        let a = cart.add(stitching("d1", 900)).unwrap();
        let b = cart.add(stitching("d1", 900)).unwrap();

        assert_ne!(a, b);
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total_items(), 2);
    }

    #[test]
    fn test_add_keeps_caller_id_unless_taken() {
        let mut cart = CartStore::new();
        let mut first = stitching("d1", 900);
        first.id = "line-1".to_string();
        assert_eq!(cart.add(first.clone()).unwrap(), "line-1");

        let reassigned = cart.add(first).unwrap();
        assert_ne!(reassigned, "line-1");
        assert_eq!(cart.items()[0].id, "line-1");
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut cart = CartStore::new();
        let ids: Vec<String> = (0..3)
            .map(|n| cart.add(stitching(&format!("d{}", n), 100)).unwrap())
            .collect();
        let order: Vec<&str> = cart.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(order, ids.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn test_add_rejects_invalid_item() {
        let mut cart = CartStore::new();
        let mut item = stitching("d1", 100);
        item.price = Money::from_paise(-1);

        assert!(matches!(cart.add(item.clone()), Err(CoreError::Validation(_))));
        assert_eq!(cart.add_to_cart(item), None);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_rejects_oversized_price() {
        let mut cart = CartStore::new();
        let mut item = stitching("d1", 100);
        item.price = Money::from_paise(i64::MAX / 2 + 1);
        item.quantity = 2;

        assert!(matches!(
            cart.add(item.clone()),
            Err(CoreError::Validation(ValidationError::OutOfRange { .. }))
        ));
        assert_eq!(cart.restore(vec![item]), 0);
        assert_eq!(cart.total_price(), Money::zero());
    }

    #[test]
    fn test_largest_cart_totals_do_not_overflow() {
        let mut cart = CartStore::new();
        for n in 0..MAX_CART_ITEMS {
            let mut item = stitching(&format!("d{}", n), 1);
            item.price = crate::MAX_UNIT_PRICE;
            item.quantity = crate::MAX_ITEM_QUANTITY;
            cart.add(item).unwrap();
        }

        let expected = crate::MAX_UNIT_PRICE
            .multiply_quantity(crate::MAX_ITEM_QUANTITY)
            .multiply_quantity(MAX_CART_ITEMS as i64);
        assert_eq!(cart.total_price(), expected);

        let totals = cart.totals(&PricingEngine::default());
        assert!(totals.grand_total > totals.subtotal);
    }

    #[test]
    fn test_add_rejects_full_cart() {
        let mut cart = CartStore::new();
        for n in 0..MAX_CART_ITEMS {
            cart.add(stitching(&format!("d{}", n), 10)).unwrap();
        }
        assert!(matches!(
            cart.add(stitching("one-more", 10)),
            Err(CoreError::CartTooLarge { max: MAX_CART_ITEMS })
        ));
    }

    #[test]
    fn test_add_normalizes_fabric_request() {
        let mut cart = CartStore::new();
        let mut item = stitching("d1", 800);
        item.order_type = Some(OrderType::StitchingAndFabric);
        item.with_material = true;

        let id = cart.add(item).unwrap();
        let stored = cart.get(&id).unwrap();
        assert_eq!(stored.order_type, Some(OrderType::Stitching));
        assert!(!stored.with_material);
    }

    #[test]
    fn test_update_fabric_without_option_is_clamped() {
        let mut cart = CartStore::new();
        let id = cart.add(stitching("d1", 800)).unwrap();

        cart.update_item_details(&id, ItemPatch::order_type(OrderType::StitchingAndFabric));
        assert_eq!(cart.get(&id).unwrap().order_type, Some(OrderType::Stitching));
    }

    #[test]
    fn test_update_pickup_clears_manual_measurements() {
        let mut cart = CartStore::new();
        let id = cart.add(stitching("d1", 800)).unwrap();
        let chest = Measurements::from([("chest".to_string(), "36".to_string())]);

        cart.update(&id, ItemPatch::manual(chest, MeasurementSource::Fresh)).unwrap();
        cart.update(&id, ItemPatch::measurement_type(MeasurementType::Pickup)).unwrap();

        let item = cart.get(&id).unwrap();
        assert_eq!(item.measurement_type, Some(MeasurementType::Pickup));
        assert_eq!(item.measurements, None);
    }

    #[test]
    fn test_missing_id_is_not_found_internally_and_noop_externally() {
        let mut cart = CartStore::new();
        cart.add(stitching("d1", 800)).unwrap();
        let before = cart.items().to_vec();

        assert!(matches!(cart.update("nope", ItemPatch::default()), Err(CoreError::ItemNotFound(_))));
        assert!(matches!(cart.set_quantity("nope", 3), Err(CoreError::ItemNotFound(_))));
        assert!(matches!(cart.remove("nope"), Err(CoreError::ItemNotFound(_))));

        cart.update_item_details("nope", ItemPatch::order_type(OrderType::Stitching));
        cart.update_quantity("nope", 5);
        cart.remove_from_cart("nope");
        assert_eq!(cart.items(), before.as_slice());
    }

    #[test]
    fn test_quantity_clamps_at_one_by_default() {
        let mut cart = CartStore::new();
        let id = cart.add(stitching("d1", 500)).unwrap();

        cart.update_quantity(&id, 4);
        assert_eq!(cart.get(&id).unwrap().quantity, 4);

        cart.update_quantity(&id, 0);
        assert_eq!(cart.get(&id).unwrap().quantity, 1);

        cart.update_quantity(&id, -7);
        assert_eq!(cart.get(&id).unwrap().quantity, 1);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_quantity_remove_policy() {
        let mut cart = CartStore::new().with_floor_policy(QuantityFloorPolicy::RemoveItem);
        let id = cart.add(stitching("d1", 500)).unwrap();

        cart.update_quantity(&id, 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_quantity_capped_at_max() {
        let mut cart = CartStore::new();
        let id = cart.add(stitching("d1", 500)).unwrap();
        cart.update_quantity(&id, 10_000);
        assert_eq!(cart.get(&id).unwrap().quantity, crate::MAX_ITEM_QUANTITY);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut cart = CartStore::new();
        let a = cart.add(stitching("d1", 500)).unwrap();
        cart.add(stitching("d2", 700)).unwrap();

        let removed = cart.remove(&a).unwrap();
        assert_eq!(removed.design_id, "d1");
        assert_eq!(cart.len(), 1);

        cart.clear_cart();
        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert!(cart.total_price().is_zero());
    }

    #[test]
    fn test_observers_see_changes_but_not_noops() {
        let recorder = Recorder::default();
        let mut cart = CartStore::new();
        cart.subscribe(recorder.clone());

        let id = cart.add(stitching("d1", 500)).unwrap();
        cart.update_quantity(&id, 3);
        cart.update_quantity(&id, 3);
        cart.update_quantity("missing", 3);
        cart.update_item_details(&id, ItemPatch::pickup_slot(PickupSlot::new("2026-10-21", "morning")));
        cart.remove_from_cart("missing");
        cart.clear_cart();
        cart.clear_cart();

        assert_eq!(
            *recorder.events.borrow(),
            vec![
                CartEvent::Added { item_id: id.clone() },
                CartEvent::QuantityChanged { item_id: id.clone(), quantity: 3 },
                CartEvent::Updated { item_id: id },
                CartEvent::Cleared,
            ]
        );
    }

    #[test]
    fn test_checkout_readiness_mixed_cart() {
        let mut cart = CartStore::new();
        let ready = cart.add(stitching("d1", 500)).unwrap();
        let blocked = cart.add(stitching("d2", 500)).unwrap();

        cart.update_item_details(&ready, ItemPatch::pickup_slot(PickupSlot::new("2026-10-21", "morning")));
        cart.update_item_details(&blocked, ItemPatch::measurement_type(MeasurementType::Manual));

        assert!(!cart.is_checkout_ready());
        assert_eq!(
            cart.diagnostics(),
            vec![ItemDiagnostic {
                item_id: blocked,
                reason: NotReadyReason::MissingMeasurements,
            }]
        );
    }

    #[test]
    fn test_wishlist_item_into_cart() {
        let mut cart = CartStore::new();
        let wish = WishlistItem {
            id: "m123".to_string(),
            name: "Cotton Fabric".to_string(),
            image: None,
            price: Money::from_rupees(450),
            category: None,
            tailor_id: None,
            shop_name: None,
        };

        let id = cart.add_to_cart(from_wishlist_item(&wish)).unwrap();
        let item = cart.get(&id).unwrap();
        assert_eq!(item.product_kind, ProductKind::Material);
        assert_eq!(item.size.as_deref(), Some("N/A"));
        assert_eq!(item.order_type, None);
    }

    #[test]
    fn test_restore_normalizes_and_dedupes() {
        let mut first = stitching("d1", 500);
        first.id = "same".to_string();
        first.quantity = 0;
        let mut second = stitching("d2", 600);
        second.id = "same".to_string();
        let mut invalid = stitching("d3", 700);
        invalid.name = String::new();

        let mut cart = CartStore::new();
        cart.add(stitching("old", 100)).unwrap();
        let kept = cart.restore(vec![first, second, invalid]);

        assert_eq!(kept, 2);
        assert_eq!(cart.items()[0].id, "same");
        assert_eq!(cart.items()[0].quantity, 1);
        assert_ne!(cart.items()[1].id, "same");
        assert_eq!(cart.items()[1].design_id, "d2");
    }

    #[test]
    fn test_cart_view() {
        let mut cart = CartStore::new();
        let mut item = stitching("d1", 1000);
        item.quantity = 2;
        cart.add(item).unwrap();

        let view = CartView::from(&cart);
        assert_eq!(view.total_items, 2);
        assert_eq!(view.total_price, Money::from_rupees(2000));
        assert_eq!(view.totals.grand_total, Money::from_rupees(2360));
        assert!(!view.checkout.ready);
        assert_eq!(view.checkout.diagnostics.len(), 1);
    }

    #[test]
    fn test_floor_policy_from_str() {
        assert_eq!("clamp".parse::<QuantityFloorPolicy>().unwrap(), QuantityFloorPolicy::ClampAtOne);
        assert_eq!(" Remove ".parse::<QuantityFloorPolicy>().unwrap(), QuantityFloorPolicy::RemoveItem);
        assert!("drop".parse::<QuantityFloorPolicy>().is_err());
        assert_eq!(DEFAULT_QUANTITY_FLOOR_POLICY, QuantityFloorPolicy::default());
    }
}
