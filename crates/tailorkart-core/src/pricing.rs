//! # Pricing Engine
//!
//! Subtotal, GST and grand total for the cart summary panel.
//!
//! ## Calculation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  line_total   = price × quantity                                        │
//! │  subtotal     = Σ line_total                                            │
//! │  tax          = round(subtotal × 18%)                                   │
//! │  grand_total  = round(subtotal × 118%)     ← NOT subtotal + tax         │
//! │  delivery_fee = 0                                                       │
//! │                                                                         │
//! │  round = half-up to the nearest whole rupee                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Independent Rounding
//! `grand_total` is rounded on its own. When the subtotal has a fractional
//! rupee part (prices such as `1499.5` are accepted) it can differ from
//! `subtotal + tax` by up to one rupee. Customers have seen totals computed
//! this way; they must not shift.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{CartItem, TaxRate};

/// Flat GST rate applied to every cart (18%).
pub const GST_RATE: TaxRate = TaxRate::from_bps(1800);

/// Delivery is free on every order.
pub const DELIVERY_FEE: Money = Money::zero();

/// Totals shown in the cart summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub subtotal: Money,
    pub tax: Money,
    pub grand_total: Money,
    pub delivery_fee: Money,
}

/// Computes cart totals at a fixed tax rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingEngine {
    tax_rate: TaxRate,
}

impl PricingEngine {
    pub const fn new(tax_rate: TaxRate) -> Self {
        PricingEngine { tax_rate }
    }

    pub const fn tax_rate(&self) -> TaxRate {
        self.tax_rate
    }

    #[inline]
    pub fn line_total(&self, item: &CartItem) -> Money {
        item.line_total()
    }

    pub fn subtotal(&self, items: &[CartItem]) -> Money {
        items.iter().map(CartItem::line_total).sum()
    }

    pub fn tax(&self, subtotal: Money) -> Money {
        subtotal.apply_rate_rounded_to_major(self.tax_rate)
    }

    /// Rounded independently from `subtotal × (1 + rate)`.
    pub fn grand_total(&self, subtotal: Money) -> Money {
        subtotal.apply_rate_rounded_to_major(self.tax_rate.inclusive())
    }

    pub fn compute_totals(&self, items: &[CartItem]) -> CartTotals {
        let subtotal = self.subtotal(items);
        CartTotals {
            subtotal,
            tax: self.tax(subtotal),
            grand_total: self.grand_total(subtotal),
            delivery_fee: DELIVERY_FEE,
        }
    }
}

impl Default for PricingEngine {
    fn default() -> Self {
        PricingEngine::new(GST_RATE)
    }
}

/// Totals at the standard GST rate.
pub fn compute_totals(items: &[CartItem]) -> CartTotals {
    PricingEngine::default().compute_totals(items)
}

// =============================================================================
// Unit Tests
// =============================================================================
