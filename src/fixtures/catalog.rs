//! Catalog Fixtures

use rust_decimal::Decimal;
use rusty_money::{Findable, iso::Currency};
use serde::Deserialize;

use crate::{
    colors::ColorSet,
    fixtures::FixtureError,
    products::{Category, Product},
};

/// Wrapper for catalog products in YAML, listed in display order
#[derive(Debug, Deserialize)]
pub struct CatalogFixture {
    /// Products in catalog order
    pub products: Vec<ProductFixture>,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product id
    pub id: String,

    /// Product name
    pub name: String,

    /// Product description
    #[serde(default)]
    pub description: String,

    /// Product price (e.g., "45.99 ILS")
    pub price: String,

    /// Available colors, first is the default
    pub colors: Vec<String>,

    /// Product category
    pub category: Category,

    /// Stock count
    #[serde(default)]
    pub inventory: u32,

    /// Product image
    #[serde(default)]
    pub image_url: Option<String>,
}

impl TryFrom<ProductFixture> for Product {
    type Error = FixtureError;

    fn try_from(fixture: ProductFixture) -> Result<Self, Self::Error> {
        let (base_price, _currency) = parse_price(&fixture.price)?;

        let color_refs: Vec<&str> = fixture.colors.iter().map(String::as_str).collect();
        let colors = ColorSet::from_strs(&color_refs);

        let mut product = Product::new(
            fixture.id,
            fixture.name,
            base_price,
            colors,
            fixture.category,
            fixture.inventory,
        )?
        .with_description(fixture.description);

        product.image_url = fixture.image_url;

        Ok(product)
    }
}

/// Parse price string (e.g., "45.99 ILS") into an amount and currency
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount cannot be parsed as a decimal, or if the currency code
/// is not recognized.
pub fn parse_price(s: &str) -> Result<(Decimal, &'static Currency), FixtureError> {
    let parts: Vec<&str> = s.split_whitespace().collect();

    let [amount, currency_code] = parts.as_slice() else {
        return Err(FixtureError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    };

    let amount = amount
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))?;

    let currency = Currency::find(currency_code)
        .ok_or_else(|| FixtureError::UnknownCurrency((*currency_code).to_string()))?;

    Ok((amount, currency))
}
