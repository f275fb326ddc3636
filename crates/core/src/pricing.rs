//! Pricing
//!
//! Pure line-item price composition. Everything here is deterministic
//! decimal arithmetic; each cart line's price is an independently computed
//! snapshot, never an accumulated running sum of float operations.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors rejected by the pricing engine before any arithmetic happens.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    /// Quantity was zero; callers must pass at least 1.
    #[error("quantity must be at least 1")]
    ZeroQuantity,

    /// A base price below zero is a contract violation.
    #[error("base price cannot be negative")]
    NegativeBasePrice,

    /// A combo option price below zero is a contract violation.
    #[error("combo option price cannot be negative")]
    NegativeComboPrice,

    /// The tier modifier drove the per-unit price below zero.
    #[error("quantity tier modifier drives the unit price below zero")]
    NegativeUnitPrice,
}

/// Composes the per-unit price of a line item.
///
/// `unit = base + (tier modifier or 0) + sum(combo prices)`. The tier
/// modifier is the only input allowed to be negative, and only as far as a
/// non-negative unit price.
///
/// # Errors
///
/// - [`PricingError::NegativeBasePrice`] if `base_price` is negative.
/// - [`PricingError::NegativeComboPrice`] if any combo price is negative.
/// - [`PricingError::NegativeUnitPrice`] if the composed unit price is
///   negative.
pub fn unit_price(
    base_price: Decimal,
    tier_modifier: Option<Decimal>,
    combo_prices: &[Decimal],
) -> Result<Decimal, PricingError> {
    if base_price < Decimal::ZERO {
        return Err(PricingError::NegativeBasePrice);
    }

    if combo_prices.iter().any(|price| *price < Decimal::ZERO) {
        return Err(PricingError::NegativeComboPrice);
    }

    let unit = base_price
        + tier_modifier.unwrap_or_default()
        + combo_prices.iter().copied().sum::<Decimal>();

    if unit < Decimal::ZERO {
        return Err(PricingError::NegativeUnitPrice);
    }

    Ok(unit)
}

/// Computes a line-item total: `(base + modifier + sum(combos)) * quantity`.
///
/// Zero quantity is rejected rather than clamped; the cart never holds a
/// line with fewer than one unit.
///
/// # Errors
///
/// - [`PricingError::ZeroQuantity`] if `quantity` is zero.
/// - Any error from [`unit_price`].
pub fn line_price(
    base_price: Decimal,
    quantity: u32,
    tier_modifier: Option<Decimal>,
    combo_prices: &[Decimal],
) -> Result<Decimal, PricingError> {
    if quantity == 0 {
        return Err(PricingError::ZeroQuantity);
    }

    Ok(unit_price(base_price, tier_modifier, combo_prices)? * Decimal::from(quantity))
}
