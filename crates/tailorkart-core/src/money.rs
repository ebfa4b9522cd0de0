//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    1499.99 * 1.18 = 1769.9882000000001                                  │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Paise                                            │
//! │    149999 paise × 1800 bps is exact in i128, and the final rounding     │
//! │    to whole rupees happens exactly once, in one place.                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Format
//! On the wire (storefront DTOs, persisted snapshot) an amount is a JSON
//! number in **rupees**: `1000` is ₹1000, `1499.5` is ₹1499.50. Paise are an
//! in-memory detail; they never leak into JSON.
//!
//! ## Overflow
//! Arithmetic saturates at the `i64` bounds instead of panicking. Prices are
//! capped at [`crate::MAX_UNIT_PRICE`] on entry, so real carts never get near
//! them.
//!
//! ## Usage
//! ```rust
//! use tailorkart_core::money::Money;
//!
//! let price = Money::from_rupees(1000);
//! let doubled = price * 2;
//! assert_eq!(doubled.rupees(), 2000);
//! ```

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};
use ts_rs::TS;

use crate::types::TaxRate;

/// Minor units (paise) per major unit (rupee).
pub const MINOR_PER_MAJOR: i64 = 100;

/// Basis points in 100%.
const BPS_SCALE: i128 = 10_000;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (paise).
///
/// ## Where Money is Used
/// ```text
/// Design.price ──► CartItem.price ──► line_total = price × quantity
///                                         │
///                                         ▼
///                         subtotal ──► GST (18%) ──► grand total
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, TS)]
#[ts(export)]
pub struct Money(#[ts(type = "number")] i64);

impl Money {
    /// Creates a Money value from paise.
    ///
    /// ```rust
    /// use tailorkart_core::money::Money;
    ///
    /// let price = Money::from_paise(149_950); // ₹1499.50
    /// assert_eq!(price.rupees(), 1499);
    /// assert_eq!(price.paise_part(), 50);
    /// ```
    #[inline]
    pub const fn from_paise(paise: i64) -> Self {
        Money(paise)
    }

    /// Creates a Money value from whole rupees.
    #[inline]
    pub const fn from_rupees(rupees: i64) -> Self {
        Money(rupees.saturating_mul(MINOR_PER_MAJOR))
    }

    /// Returns the value in paise.
    #[inline]
    pub const fn paise(&self) -> i64 {
        self.0
    }

    /// Returns the whole-rupee portion (truncated toward zero).
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0 / MINOR_PER_MAJOR
    }

    /// Returns the paise portion (always 0-99).
    #[inline]
    pub const fn paise_part(&self) -> i64 {
        (self.0 % MINOR_PER_MAJOR).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ```rust
    /// use tailorkart_core::money::Money;
    ///
    /// let unit_price = Money::from_rupees(1000);
    /// assert_eq!(unit_price.multiply_quantity(2).rupees(), 2000);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }

    /// Rounds half-up to the nearest whole rupee.
    ///
    /// Half-up means away from zero at exactly 50 paise, which is what the
    /// storefront has always displayed (`Math.round` on non-negative sums).
    ///
    /// ```rust
    /// use tailorkart_core::money::Money;
    ///
    /// assert_eq!(Money::from_paise(12_349).round_half_up_to_major().paise(), 12_300);
    /// assert_eq!(Money::from_paise(12_350).round_half_up_to_major().paise(), 12_400);
    /// ```
    pub fn round_half_up_to_major(&self) -> Money {
        let rupees = round_half_up(self.0 as i128, MINOR_PER_MAJOR as i128);
        Money::from_rupees(saturate(rupees))
    }

    /// Computes `round(self × rate)` to whole rupees, in integer math.
    ///
    /// ## Implementation
    /// `paise × bps` is exact in i128. One whole rupee is
    /// `100 paise × 10000 bps`, so a single half-up division yields rupees.
    ///
    /// ```rust
    /// use tailorkart_core::money::Money;
    /// use tailorkart_core::types::TaxRate;
    ///
    /// let subtotal = Money::from_rupees(2000);
    /// let tax = subtotal.apply_rate_rounded_to_major(TaxRate::from_bps(1800));
    /// assert_eq!(tax.rupees(), 360);
    /// ```
    pub fn apply_rate_rounded_to_major(&self, rate: TaxRate) -> Money {
        let scaled = self.0 as i128 * rate.bps() as i128;
        let rupees = round_half_up(scaled, MINOR_PER_MAJOR as i128 * BPS_SCALE);
        Money::from_rupees(saturate(rupees))
    }
}

/// `value / divisor` rounded half away from zero. `divisor` must be positive.
fn round_half_up(value: i128, divisor: i128) -> i128 {
    let half = divisor / 2;
    if value >= 0 {
        (value + half) / divisor
    } else {
        -((-value + half) / divisor)
    }
}

fn saturate(value: i128) -> i64 {
    i64::try_from(value).unwrap_or(if value < 0 { i64::MIN } else { i64::MAX })
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Debug-oriented rendering; the storefront formats currency itself.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}₹{}.{:02}", sign, self.rupees().abs(), self.paise_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Serde: rupees on the wire
// =============================================================================

/// Whole amounts serialize as integers (`1000`), fractional ones as
/// decimals (`1499.5`).
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0 % MINOR_PER_MAJOR == 0 {
            serializer.serialize_i64(self.0 / MINOR_PER_MAJOR)
        } else {
            serializer.serialize_f64(self.0 as f64 / MINOR_PER_MAJOR as f64)
        }
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RupeesVisitor)
    }
}

struct RupeesVisitor;

impl<'de> Visitor<'de> for RupeesVisitor {
    type Value = Money;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an amount in rupees")
    }

    fn visit_i64<E: de::Error>(self, rupees: i64) -> Result<Money, E> {
        rupees
            .checked_mul(MINOR_PER_MAJOR)
            .map(Money::from_paise)
            .ok_or_else(|| E::custom(format!("amount {} is out of range", rupees)))
    }

    fn visit_u64<E: de::Error>(self, rupees: u64) -> Result<Money, E> {
        let rupees = i64::try_from(rupees)
            .map_err(|_| E::custom(format!("amount {} is out of range", rupees)))?;
        self.visit_i64(rupees)
    }

    /// Rounds to the nearest paisa (half away from zero).
    fn visit_f64<E: de::Error>(self, rupees: f64) -> Result<Money, E> {
        let paise = (rupees * MINOR_PER_MAJOR as f64).round();
        if !paise.is_finite() || paise.abs() >= i64::MAX as f64 {
            return Err(E::custom(format!("amount {} is out of range", rupees)));
        }
        Ok(Money::from_paise(paise as i64))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rupees_and_paise() {
        let money = Money::from_paise(149_950);
        assert_eq!(money.rupees(), 1499);
        assert_eq!(money.paise_part(), 50);
        assert_eq!(Money::from_rupees(12).paise(), 1200);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_paise(149_950)), "₹1499.50");
        assert_eq!(format!("{}", Money::from_rupees(5)), "₹5.00");
        assert_eq!(format!("{}", Money::from_paise(-550)), "-₹5.50");
    }

    #[test]
    fn test_arithmetic_and_sum() {
        let a = Money::from_rupees(10);
        let b = Money::from_rupees(5);
        assert_eq!((a + b).rupees(), 15);
        assert_eq!((a - b).rupees(), 5);
        assert_eq!((a * 3).rupees(), 30);

        let total: Money = vec![a, b, b].into_iter().sum();
        assert_eq!(total.rupees(), 20);
    }

    #[test]
    fn test_round_half_up_to_major() {
        assert_eq!(Money::from_paise(149).round_half_up_to_major().paise(), 100);
        assert_eq!(Money::from_paise(150).round_half_up_to_major().paise(), 200);
        assert_eq!(Money::from_paise(250).round_half_up_to_major().paise(), 300);
        assert_eq!(Money::zero().round_half_up_to_major(), Money::zero());
    }

    #[test]
    fn test_gst_rounding() {
        let gst = TaxRate::from_bps(1800);

        // ₹2000 × 18% = ₹360 exactly
        assert_eq!(Money::from_rupees(2000).apply_rate_rounded_to_major(gst).rupees(), 360);

        // ₹25 × 18% = ₹4.50 → ₹5 (half-up, not bankers)
        assert_eq!(Money::from_rupees(25).apply_rate_rounded_to_major(gst).rupees(), 5);

        // ₹24 × 18% = ₹4.32 → ₹4
        assert_eq!(Money::from_rupees(24).apply_rate_rounded_to_major(gst).rupees(), 4);

        // Paise inputs: ₹99.99 × 118% = ₹117.9882 → ₹118
        let inclusive = TaxRate::from_bps(11_800);
        assert_eq!(Money::from_paise(9_999).apply_rate_rounded_to_major(inclusive).rupees(), 118);
    }

    #[test]
    fn test_wire_format_is_rupees() {
        assert_eq!(serde_json::to_string(&Money::from_rupees(1000)).unwrap(), "1000");
        assert_eq!(serde_json::to_string(&Money::from_paise(149_950)).unwrap(), "1499.5");

        let whole: Money = serde_json::from_str("1000").unwrap();
        assert_eq!(whole, Money::from_rupees(1000));

        let fractional: Money = serde_json::from_str("1499.5").unwrap();
        assert_eq!(fractional, Money::from_paise(149_950));

        let sub_paisa: Money = serde_json::from_str("0.125").unwrap();
        assert_eq!(sub_paisa, Money::from_paise(13));
    }

    #[test]
    fn test_wire_format_rejects_out_of_range() {
        assert!(serde_json::from_str::<Money>("92233720368547759").is_err());
        assert!(serde_json::from_str::<Money>("1e300").is_err());
        assert!(serde_json::from_str::<Money>("\"1000\"").is_err());
    }

    #[test]
    fn test_arithmetic_saturates() {
        let huge = Money::from_paise(i64::MAX / 2 + 1);
        assert_eq!(huge + huge, Money::from_paise(i64::MAX));
        assert_eq!(huge.multiply_quantity(3), Money::from_paise(i64::MAX));
        assert_eq!(vec![huge, huge, huge].into_iter().sum::<Money>(), Money::from_paise(i64::MAX));
        assert_eq!(Money::from_paise(i64::MIN) - Money::from_rupees(1), Money::from_paise(i64::MIN));

        let gst = TaxRate::from_bps(11_800);
        assert_eq!(Money::from_paise(i64::MAX).apply_rate_rounded_to_major(gst), Money::from_paise(i64::MAX));
    }

    #[test]
    fn test_zero_rate_and_zero_amount() {
        let gst = TaxRate::from_bps(1800);
        assert!(Money::zero().apply_rate_rounded_to_major(gst).is_zero());
        assert!(Money::from_rupees(500).apply_rate_rounded_to_major(TaxRate::zero()).is_zero());
    }
}
