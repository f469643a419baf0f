//! Bulk Discount Tiers
//!
//! A tier schedule partitions the positive quantity axis into contiguous closed ranges
//! `[min, max]`, the last of which is unbounded. Each range carries a discount fraction in
//! `[0, 1)` and a label shown next to discounted cart lines.

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use smallvec::{SmallVec, smallvec};
use thiserror::Error;

/// Errors raised when a tier schedule does not partition the quantity axis.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TierError {
    /// No tiers were supplied.
    #[error("tier schedule must contain at least one tier")]
    Empty,

    /// The first tier must start at quantity 1 (found minimum).
    #[error("first tier must start at 1, starts at {0}")]
    FirstTierMin(u32),

    /// A tier's minimum exceeds its maximum.
    #[error("tier {index} has min {min} greater than max {max}")]
    InvertedRange {
        /// Tier position in the schedule
        index: usize,
        /// Lower bound
        min: u32,
        /// Upper bound
        max: u32,
    },

    /// A tier does not start where the previous tier ended.
    #[error("tier {index} starts at {found}, expected {expected}")]
    NotContiguous {
        /// Tier position in the schedule
        index: usize,
        /// The quantity directly after the previous tier's maximum
        expected: u32,
        /// The tier's actual minimum
        found: u32,
    },

    /// An unbounded tier was followed by another tier.
    #[error("tier {0} is unbounded but is not the last tier")]
    UnboundedNotLast(usize),

    /// A tier other than the last ends at `u32::MAX`, leaving no quantities for later tiers.
    #[error("tier {0} ends at the largest quantity but is not the last tier")]
    ExhaustedNotLast(usize),

    /// The last tier has an upper bound, leaving larger quantities unpriced.
    #[error("last tier must be unbounded, ends at {0}")]
    BoundedLast(u32),

    /// A discount fell outside `[0, 1)`.
    #[error("tier {index} discount {discount} is outside [0, 1)")]
    DiscountOutOfRange {
        /// Tier position in the schedule
        index: usize,
        /// The offending discount fraction
        discount: Decimal,
    },
}

/// A quantity range mapped to a discount.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingTier {
    min: u32,
    max: Option<u32>,
    discount: Percentage,
    label: String,
}

impl PricingTier {
    /// Create a new tier covering `[min, max]`, or `[min, ∞)` when `max` is `None`.
    pub fn new(min: u32, max: Option<u32>, discount: Percentage, label: impl Into<String>) -> Self {
        Self {
            min,
            max,
            discount,
            label: label.into(),
        }
    }

    /// Lower bound, inclusive.
    pub fn min(&self) -> u32 {
        self.min
    }

    /// Upper bound, inclusive. `None` means unbounded.
    pub fn max(&self) -> Option<u32> {
        self.max
    }

    /// The tier discount.
    pub fn discount(&self) -> Percentage {
        self.discount
    }

    /// The tier discount as a fraction, e.g. `0.10` for 10% off.
    pub fn discount_fraction(&self) -> Decimal {
        self.discount * Decimal::ONE
    }

    /// Human readable label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether this tier takes anything off the base price.
    pub fn is_discounted(&self) -> bool {
        self.discount_fraction() > Decimal::ZERO
    }

    /// Closed-interval containment.
    pub fn contains(&self, quantity: u32) -> bool {
        quantity >= self.min && self.max.is_none_or(|max| quantity <= max)
    }
}

/// An ordered, validated list of pricing tiers.
#[derive(Debug, Clone, PartialEq)]
pub struct TierSchedule {
    tiers: SmallVec<[PricingTier; 5]>,
}

impl TierSchedule {
    /// Create a schedule, checking that the tiers partition every quantity from 1 upwards.
    ///
    /// # Errors
    ///
    /// Returns a [`TierError`] describing the first broken invariant.
    pub fn new(tiers: impl IntoIterator<Item = PricingTier>) -> Result<Self, TierError> {
        let tiers: SmallVec<[PricingTier; 5]> = tiers.into_iter().collect();

        validate(&tiers)?;

        Ok(Self { tiers })
    }

    /// The tiers in schedule order.
    pub fn tiers(&self) -> &[PricingTier] {
        &self.tiers
    }

    /// Iterate over the tiers in schedule order.
    pub fn iter(&self) -> impl Iterator<Item = &PricingTier> {
        self.tiers.iter()
    }

    /// Number of tiers.
    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    /// Check if the schedule has no tiers.
    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    /// Return the first tier whose range contains `quantity`.
    pub fn resolve(&self, quantity: u32) -> Option<&PricingTier> {
        let tier = self.tiers.iter().find(|tier| tier.contains(quantity));

        if tier.is_none() {
            tracing::trace!(quantity, "no pricing tier matches quantity");
        }

        tier
    }

    /// Discount fraction applying at `quantity`, or zero when no tier matches.
    pub fn discount_for(&self, quantity: u32) -> Decimal {
        self.resolve(quantity)
            .map_or(Decimal::ZERO, PricingTier::discount_fraction)
    }
}

impl Default for TierSchedule {
    /// The storefront's standard bulk schedule: 0%, 10%, 20%, 30% and 40% off.
    fn default() -> Self {
        Self {
            tiers: smallvec![
                PricingTier::new(1, Some(9), percent(0), "Regular Price"),
                PricingTier::new(10, Some(49), percent(10), "10% off (10-49 items)"),
                PricingTier::new(50, Some(99), percent(20), "20% off (50-99 items)"),
                PricingTier::new(100, Some(499), percent(30), "30% off (100-499 items)"),
                PricingTier::new(500, None, percent(40), "40% off (500+ items)"),
            ],
        }
    }
}

fn percent(points: i64) -> Percentage {
    Percentage::from(Decimal::new(points, 2))
}

fn validate(tiers: &[PricingTier]) -> Result<(), TierError> {
    let first = tiers.first().ok_or(TierError::Empty)?;

    if first.min != 1 {
        return Err(TierError::FirstTierMin(first.min));
    }

    let mut expected = Some(1_u32);

    for (index, tier) in tiers.iter().enumerate() {
        let Some(expected_min) = expected else {
            return Err(TierError::UnboundedNotLast(index.saturating_sub(1)));
        };

        if tier.min != expected_min {
            return Err(TierError::NotContiguous {
                index,
                expected: expected_min,
                found: tier.min,
            });
        }

        if let Some(max) = tier.max.filter(|max| *max < tier.min) {
            return Err(TierError::InvertedRange {
                index,
                min: tier.min,
                max,
            });
        }

        let discount = tier.discount_fraction();

        if discount < Decimal::ZERO || discount >= Decimal::ONE {
            return Err(TierError::DiscountOutOfRange { index, discount });
        }

        let is_last = index.saturating_add(1) == tiers.len();

        if !is_last && tier.max == Some(u32::MAX) {
            return Err(TierError::ExhaustedNotLast(index));
        }

        expected = tier.max.map(|max| max.saturating_add(1));
    }

    match tiers.last().and_then(PricingTier::max) {
        Some(max) => Err(TierError::BoundedLast(max)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn tier(min: u32, max: Option<u32>, points: i64) -> PricingTier {
        PricingTier::new(min, max, percent(points), format!("{points}%"))
    }

    #[test]
    fn default_schedule_is_valid() -> TestResult {
        let schedule = TierSchedule::default();

        TierSchedule::new(schedule.tiers().to_vec())?;
        assert_eq!(schedule.len(), 5);

        Ok(())
    }

    #[test]
    fn resolve_respects_closed_boundaries() {
        let schedule = TierSchedule::default();
        let cases = [
            (1, 0),
            (9, 0),
            (10, 10),
            (49, 10),
            (50, 20),
            (99, 20),
            (100, 30),
            (499, 30),
            (500, 40),
            (10_000, 40),
        ];

        for (quantity, points) in cases {
            assert_eq!(
                schedule.discount_for(quantity),
                Decimal::new(points, 2),
                "quantity {quantity}"
            );
        }
    }

    #[test]
    fn resolve_returns_matching_label() {
        let schedule = TierSchedule::default();

        assert_eq!(
            schedule.resolve(50).map(PricingTier::label),
            Some("20% off (50-99 items)")
        );
        assert_eq!(
            schedule.resolve(3).map(PricingTier::label),
            Some("Regular Price")
        );
    }

    #[test]
    fn zero_quantity_has_no_tier_and_no_discount() {
        let schedule = TierSchedule::default();

        assert!(schedule.resolve(0).is_none());
        assert_eq!(schedule.discount_for(0), Decimal::ZERO);
    }

    #[test]
    fn is_discounted_only_above_zero() {
        let schedule = TierSchedule::default();

        assert_eq!(
            schedule.resolve(1).map(PricingTier::is_discounted),
            Some(false)
        );
        assert_eq!(
            schedule.resolve(10).map(PricingTier::is_discounted),
            Some(true)
        );
    }

    #[test]
    fn new_rejects_empty() {
        assert_eq!(TierSchedule::new(Vec::new()), Err(TierError::Empty));
    }

    #[test]
    fn new_rejects_schedule_not_starting_at_one() {
        let result = TierSchedule::new([tier(2, None, 0)]);

        assert_eq!(result, Err(TierError::FirstTierMin(2)));
    }

    #[test]
    fn new_rejects_gap() {
        let result = TierSchedule::new([tier(1, Some(9), 0), tier(11, None, 10)]);

        assert_eq!(
            result,
            Err(TierError::NotContiguous {
                index: 1,
                expected: 10,
                found: 11,
            })
        );
    }

    #[test]
    fn new_rejects_overlap() {
        let result = TierSchedule::new([tier(1, Some(10), 0), tier(10, None, 10)]);

        assert_eq!(
            result,
            Err(TierError::NotContiguous {
                index: 1,
                expected: 11,
                found: 10,
            })
        );
    }

    #[test]
    fn new_rejects_inverted_range() {
        let result = TierSchedule::new([tier(1, Some(0), 0), tier(1, None, 10)]);

        assert_eq!(
            result,
            Err(TierError::InvertedRange {
                index: 0,
                min: 1,
                max: 0,
            })
        );
    }

    #[test]
    fn new_rejects_unbounded_middle_tier() {
        let result = TierSchedule::new([tier(1, None, 0), tier(10, None, 10)]);

        assert_eq!(result, Err(TierError::UnboundedNotLast(0)));
    }

    #[test]
    fn new_rejects_bounded_last_tier() {
        let result = TierSchedule::new([tier(1, Some(9), 0), tier(10, Some(49), 10)]);

        assert_eq!(result, Err(TierError::BoundedLast(49)));
    }

    #[test]
    fn new_rejects_middle_tier_ending_at_largest_quantity() {
        let result = TierSchedule::new([tier(1, Some(u32::MAX), 0), tier(10, None, 10)]);

        assert_eq!(result, Err(TierError::ExhaustedNotLast(0)));
    }

    #[test]
    fn new_reports_last_tier_ending_at_largest_quantity_as_bounded() {
        let result = TierSchedule::new([tier(1, Some(9), 0), tier(10, Some(u32::MAX), 10)]);

        assert_eq!(result, Err(TierError::BoundedLast(u32::MAX)));
    }

    #[test]
    fn new_rejects_full_discount() {
        let result = TierSchedule::new([tier(1, None, 100)]);

        assert_eq!(
            result,
            Err(TierError::DiscountOutOfRange {
                index: 0,
                discount: Decimal::ONE,
            })
        );
    }
}
