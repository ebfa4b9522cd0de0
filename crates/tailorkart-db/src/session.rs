//! # Cart Session
//!
//! The cart a storefront session works with: restored from the local store
//! on open, persisted in the background on every change.
//!
//! ## Startup
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    CartSession::open                                    │
//! │                                                                         │
//! │  load snapshot(slot) ──┬── Ok(items)  ──► restore(items)                │
//! │                        ├── Ok(none)   ──► empty cart                    │
//! │                        └── Err(e)     ──► warn!, empty cart             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  subscribe SnapshotPersister ── later mutations write through           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A session never fails to open: an unreadable store costs the customer
//! their saved cart, not the storefront.

use tailorkart_core::{CartStore, CartView, PricingEngine};
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::persister::SnapshotPersister;
use crate::pool::Database;

/// A cart bound to a snapshot slot.
#[derive(Debug)]
pub struct CartSession {
    cart: CartStore,
    pricing: PricingEngine,
    persister: SnapshotPersister,
}

impl CartSession {
    pub async fn open(db: Database, config: &AppConfig) -> Self {
        let slot = config.cart_slot.clone();

        let items = match db.cart_snapshots().load_items(&slot).await {
            Ok(items) => items,
            Err(e) => {
                warn!(slot = %slot, error = %e, "Could not load cart snapshot; starting with an empty cart");
                Vec::new()
            }
        };

        let mut cart = CartStore::new().with_floor_policy(config.quantity_floor);
        let restored = cart.restore(items);

        let persister = SnapshotPersister::new(db, slot.clone());
        cart.subscribe(persister.clone());

        info!(slot = %slot, restored, "Cart session opened");

        CartSession {
            cart,
            pricing: config.pricing_engine(),
            persister,
        }
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// Mutable cart access; every change is persisted in the background.
    pub fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    pub fn pricing(&self) -> &PricingEngine {
        &self.pricing
    }

    /// What the cart page renders.
    pub fn view(&self) -> CartView {
        CartView::new(&self.cart, &self.pricing)
    }

    pub fn persister(&self) -> &SnapshotPersister {
        &self.persister
    }

    /// Waits for outstanding snapshot writes (before shutdown, or in tests).
    pub async fn settle(&self) {
        self.persister.settle().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::DbConfig;
    use tailorkart_core::configurator::ItemPatch;
    use tailorkart_core::wishlist::from_wishlist_item;
    use tailorkart_core::{
        CartItem, Design, DesignSelection, MeasurementSource, Money, OrderType, QuantityFloorPolicy,
        TaxRate, WishlistItem,
    };

    fn config() -> AppConfig {
        AppConfig {
            cart_slot: "cart".to_string(),
            ..AppConfig::default()
        }
    }

    fn lehenga() -> CartItem {
        let design = Design {
            id: "d-lehenga".to_string(),
            name: "Bridal Lehenga".to_string(),
            image: None,
            price: Money::from_rupees(4500),
            price_with_material: Money::from_rupees(6000),
            tailor_id: Some("t-9".to_string()),
            shop_name: Some("Chandni Chowk Couture".to_string()),
            time_in_days: Some(21),
        };
        CartItem::from_design(
            &design,
            DesignSelection {
                order_type: OrderType::StitchingAndFabric,
                ..Default::default()
            },
        )
    }

    #[tokio::test]
    async fn test_cart_survives_reopen() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let mut first = CartSession::open(db.clone(), &config()).await;
        assert!(first.cart().is_empty());

        let id = first.cart_mut().add_to_cart(lehenga()).unwrap();
        let measurements = [("waist".to_string(), "30".to_string())].into_iter().collect();
        first
            .cart_mut()
            .update_item_details(&id, ItemPatch::manual(measurements, MeasurementSource::Fresh));
        first.settle().await;

        let second = CartSession::open(db, &config()).await;
        assert_eq!(second.cart().items(), first.cart().items());
        assert!(second.cart().is_checkout_ready());
    }

    #[tokio::test]
    async fn test_corrupt_snapshot_opens_empty() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.cart_snapshots().save_payload("cart", "[{\"broken\":", 1, 1).await.unwrap();

        let session = CartSession::open(db, &config()).await;
        assert!(session.cart().is_empty());
        assert!(!session.view().checkout.ready);
    }

    #[tokio::test]
    async fn test_config_flows_into_session() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let config = AppConfig {
            quantity_floor: QuantityFloorPolicy::RemoveItem,
            gst_rate: TaxRate::from_bps(500),
            ..config()
        };

        let mut session = CartSession::open(db, &config).await;
        assert_eq!(session.pricing().tax_rate().bps(), 500);

        let wish = WishlistItem {
            id: "m-silk-01".to_string(),
            name: "Banarasi Silk (2m)".to_string(),
            image: None,
            price: Money::from_rupees(1000),
            category: Some("fabric".to_string()),
            tailor_id: None,
            shop_name: None,
        };
        let id = session.cart_mut().add_to_cart(from_wishlist_item(&wish)).unwrap();
        assert_eq!(session.view().totals.tax, Money::from_rupees(50));

        session.cart_mut().update_quantity(&id, 0);
        assert!(session.cart().is_empty());
        session.settle().await;
    }
}
