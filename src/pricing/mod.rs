//! Pricing
//!
//! Volume pricing over a [`TierSchedule`], plus the display formatting shared by every surface
//! that shows an amount.

use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::iso::{self, Currency};
use thiserror::Error;

use crate::products::Product;

pub mod tiers;

pub use tiers::{PricingTier, TierError, TierSchedule};

/// The currency used when a caller does not name one.
pub fn default_currency() -> &'static Currency {
    iso::ILS
}

/// Errors raised when an amount leaves the range of `Decimal`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    /// A unit price multiplied by a quantity overflowed.
    #[error("{quantity} units at {unit_price} overflows")]
    LineOverflow {
        /// The unit price being multiplied
        unit_price: Decimal,
        /// The quantity it was multiplied by
        quantity: u32,
    },
}

/// Effective unit price at `quantity`: `base_price × (1 − discount)`.
///
/// The result is not rounded; rounding only happens when the amount is formatted. A validated
/// schedule keeps discounts in `[0, 1)`, so the result never exceeds `base_price`.
pub fn effective_unit_price(
    base_price: Decimal,
    quantity: u32,
    schedule: &TierSchedule,
) -> Decimal {
    base_price * (Decimal::ONE - schedule.discount_for(quantity))
}

/// Line total at `quantity`: the effective unit price multiplied by the quantity.
///
/// # Errors
///
/// Returns [`PricingError::LineOverflow`] if the product does not fit in a `Decimal`.
pub fn line_total(
    base_price: Decimal,
    quantity: u32,
    schedule: &TierSchedule,
) -> Result<Decimal, PricingError> {
    extend(effective_unit_price(base_price, quantity, schedule), quantity)
}

/// Multiply a unit price by a quantity without overflowing.
///
/// # Errors
///
/// Returns [`PricingError::LineOverflow`] if the product does not fit in a `Decimal`.
pub fn extend(unit_price: Decimal, quantity: u32) -> Result<Decimal, PricingError> {
    unit_price
        .checked_mul(Decimal::from(quantity))
        .ok_or(PricingError::LineOverflow {
            unit_price,
            quantity,
        })
}

/// A product's unit price within one tier.
#[derive(Debug, Clone, PartialEq)]
pub struct TierPrice<'a> {
    /// The tier
    pub tier: &'a PricingTier,

    /// The unit price while the quantity stays inside the tier
    pub unit_price: Decimal,
}

/// The bulk pricing table for a product: one unit price per tier, in schedule order.
pub fn tier_prices<'a>(product: &Product, schedule: &'a TierSchedule) -> Vec<TierPrice<'a>> {
    schedule
        .iter()
        .map(|tier| TierPrice {
            tier,
            unit_price: product.base_price * (Decimal::ONE - tier.discount_fraction()),
        })
        .collect()
}

/// Format an amount in the default currency, e.g. `₪41.39`.
pub fn format_price(amount: Decimal) -> String {
    format_price_in(amount, default_currency())
}

/// Format an amount as the currency symbol followed by the amount rounded to two decimals.
pub fn format_price_in(amount: Decimal, currency: &Currency) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);

    format!("{}{rounded}", currency.symbol)
}

/// Convert an amount to whole minor units of `currency`, rounding half away from zero.
///
/// Returns `None` if the amount does not fit in an `i64`.
pub fn to_minor_units(amount: Decimal, currency: &Currency) -> Option<i64> {
    let mut rounded =
        amount.round_dp_with_strategy(currency.exponent, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(currency.exponent);

    i64::try_from(rounded.mantissa()).ok()
}
