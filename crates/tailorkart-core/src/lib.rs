//! # tailorkart-core: Cart Configuration & Checkout Readiness
//!
//! Pure business logic for the TailorKart cart: how a cart line is
//! configured for tailoring, when the cart may go to checkout, and what it
//! costs including GST. Zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        TailorKart Cart Flow                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐    │
//! │  │                    Storefront (pages, forms)                    │    │
//! │  │   Design page ──► Cart page ──► Measurement form ──► Checkout   │    │
//! │  └─────────────────────────────┬───────────────────────────────────┘    │
//! │                                │ UI events                              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐    │
//! │  │             ★ tailorkart-core (THIS CRATE) ★                    │    │
//! │  │                                                                 │    │
//! │  │   ┌───────────┐  ┌──────────────┐  ┌──────────┐  ┌──────────┐   │    │
//! │  │   │   cart    │─►│ configurator │  │ checkout │  │ pricing  │   │    │
//! │  │   │ CartStore │  │  apply()     │  │  gate    │  │  GST     │   │    │
//! │  │   └─────┬─────┘  └──────────────┘  └──────────┘  └──────────┘   │    │
//! │  │         │ observers         ┌──────────┐  ┌──────────┐          │    │
//! │  │         │                   │ wishlist │  │ snapshot │          │    │
//! │  │         │                   │  bridge  │  │  codec   │          │    │
//! │  │         │                   └──────────┘  └──────────┘          │    │
//! │  └─────────┼───────────────────────────────────────────────────────┘    │
//! │            ▼                                                            │
//! │  ┌─────────────────────────────────────────────────────────────────┐    │
//! │  │              tailorkart-db (snapshot persistence)               │    │
//! │  └─────────────────────────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (CartItem, Design, WishlistItem, ...)
//! - [`money`] - Integer money in paise, half-up rupee rounding
//! - [`configurator`] - Patch application and item invariants
//! - [`cart`] - The cart store and its observers
//! - [`checkout`] - Checkout readiness and per-item diagnostics
//! - [`pricing`] - Subtotal, GST, grand total
//! - [`wishlist`] - Wishlist entry → cart item
//! - [`snapshot`] - Persisted cart layout
//! - [`validation`] - Input checks at the cart boundary
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use tailorkart_core::cart::CartStore;
//! use tailorkart_core::configurator::ItemPatch;
//! use tailorkart_core::pricing::PricingEngine;
//! use tailorkart_core::types::{CartItem, Design, DesignSelection, PickupSlot};
//! use tailorkart_core::Money;
//!
//! let design = Design {
//!     id: "d456".to_string(),
//!     name: "Nehru Jacket".to_string(),
//!     image: None,
//!     price: Money::from_rupees(1000),
//!     price_with_material: Money::from_rupees(1000),
//!     tailor_id: None,
//!     shop_name: None,
//!     time_in_days: Some(5),
//! };
//!
//! let mut cart = CartStore::new();
//! let id = cart
//!     .add_to_cart(CartItem::from_design(&design, DesignSelection { quantity: 2, ..Default::default() }))
//!     .unwrap();
//! assert!(!cart.is_checkout_ready());
//!
//! cart.update_item_details(&id, ItemPatch::pickup_slot(PickupSlot::new("2026-10-21", "morning")));
//! assert!(cart.is_checkout_ready());
//!
//! let totals = cart.totals(&PricingEngine::default());
//! assert_eq!(totals.grand_total, Money::from_rupees(2360));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod checkout;
pub mod configurator;
pub mod error;
pub mod money;
pub mod pricing;
pub mod snapshot;
pub mod types;
pub mod validation;
pub mod wishlist;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{CartEvent, CartObserver, CartStore, CartView, QuantityFloorPolicy};
pub use checkout::{CheckoutReport, ItemDiagnostic, NotReadyReason};
pub use configurator::ItemPatch;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pricing::{CartTotals, PricingEngine};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum lines allowed in a single cart.
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum quantity of a single line.
///
/// Stops a mistyped "1000" from reaching checkout.
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Maximum unit price of a line (₹1 crore).
///
/// With [`MAX_ITEM_QUANTITY`] and [`MAX_CART_ITEMS`] this keeps every cart
/// total far inside `i64` paise.
pub const MAX_UNIT_PRICE: Money = Money::from_rupees(10_000_000);
