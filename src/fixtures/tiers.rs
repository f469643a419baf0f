//! Tier Fixtures

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{fixtures::FixtureError, pricing::PricingTier};

/// Wrapper for a bulk tier schedule in YAML, ordered by ascending `min`
#[derive(Debug, Deserialize)]
pub struct TiersFixture {
    /// Tiers in schedule order
    pub tiers: Vec<TierFixture>,
}

/// Tier Fixture
#[derive(Debug, Deserialize)]
pub struct TierFixture {
    /// Lowest quantity in the tier
    pub min: u32,

    /// Highest quantity in the tier, absent for the open-ended last tier
    #[serde(default)]
    pub max: Option<u32>,

    /// Discount (e.g., "10%" or "0.10")
    pub discount: String,

    /// Display label
    pub label: String,
}

impl TryFrom<TierFixture> for PricingTier {
    type Error = FixtureError;

    fn try_from(fixture: TierFixture) -> Result<Self, Self::Error> {
        let discount = parse_percentage(&fixture.discount)?;

        Ok(PricingTier::new(
            fixture.min,
            fixture.max,
            discount,
            fixture.label,
        ))
    }
}

/// Parse a percentage string (e.g., "15%" or "0.15") into a `Percentage`
///
/// # Errors
///
/// Returns an error if the value cannot be parsed as a decimal.
pub fn parse_percentage(s: &str) -> Result<Percentage, FixtureError> {
    let trimmed = s.trim();

    let fraction = if let Some(percent_str) = trimmed.strip_suffix('%') {
        let points = percent_str
            .trim()
            .parse::<Decimal>()
            .map_err(|_err| FixtureError::InvalidPercentage(s.to_string()))?;

        points / Decimal::ONE_HUNDRED
    } else {
        trimmed
            .parse::<Decimal>()
            .map_err(|_err| FixtureError::InvalidPercentage(s.to_string()))?
    };

    Ok(Percentage::from(fraction))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parse_percentage_accepts_percentage_format() -> TestResult {
        let percent = parse_percentage("15%")?;

        assert_eq!(percent * Decimal::ONE, Decimal::new(15, 2));

        Ok(())
    }

    #[test]
    fn parse_percentage_accepts_decimal_format() -> TestResult {
        let percent = parse_percentage(" 0.40 ")?;

        assert_eq!(percent * Decimal::ONE, Decimal::new(40, 2));

        Ok(())
    }

    #[test]
    fn parse_percentage_rejects_garbage() {
        assert!(matches!(
            parse_percentage("ten percent"),
            Err(FixtureError::InvalidPercentage(_))
        ));
        assert!(matches!(
            parse_percentage("x%"),
            Err(FixtureError::InvalidPercentage(_))
        ));
    }

    #[test]
    fn tier_fixture_converts_open_ended_tier() -> TestResult {
        let fixture: TierFixture =
            serde_norway::from_str("min: 500\ndiscount: 40%\nlabel: 40% off (500+ items)\n")?;

        let tier = PricingTier::try_from(fixture)?;

        assert_eq!(tier.min(), 500);
        assert_eq!(tier.max(), None);
        assert_eq!(tier.discount_fraction(), Decimal::new(40, 2));
        assert_eq!(tier.label(), "40% off (500+ items)");

        Ok(())
    }
}
