//! Fixtures
//!
//! YAML-backed catalogs, tier schedules and carts, read from
//! `<base>/catalogs/<name>.yml`, `<base>/tiers/<name>.yml` and `<base>/carts/<name>.yml`.

use std::{fs, path::PathBuf};

use rustc_hash::FxHashSet;
use rusty_money::iso::Currency;
use thiserror::Error;

use crate::{
    cart::{Cart, CartItem},
    catalog::{Catalog, CatalogError},
    fixtures::{carts::CartFixture, catalog::CatalogFixture, tiers::TiersFixture},
    pricing::{PricingTier, TierError, TierSchedule},
    products::{Product, ProductError},
};

pub mod carts;
pub mod catalog;
pub mod tiers;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Invalid percentage format
    #[error("Invalid percentage format: {0}")]
    InvalidPercentage(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Currency mismatch between products
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// No catalog loaded yet
    #[error("No catalog loaded")]
    NoCatalog,

    /// Cart item with a quantity below 1
    #[error("Cart item {0} must have a quantity of at least 1")]
    InvalidQuantity(String),

    /// The same product listed twice in a cart
    #[error("Cart lists product {0} more than once")]
    DuplicateCartItem(String),

    /// Catalog construction error
    #[error("Failed to build catalog: {0}")]
    Catalog(#[from] CatalogError),

    /// Tier schedule validation error
    #[error("Invalid tier schedule: {0}")]
    Tier(#[from] TierError),

    /// Product validation error
    #[error("Invalid product: {0}")]
    Product(#[from] ProductError),
}

/// Fixture
#[derive(Debug)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,

    /// Catalog, once loaded
    catalog: Option<Catalog>,

    /// Tier schedule, the standard schedule until one is loaded
    tiers: TierSchedule,

    /// Cart, empty until one is loaded
    cart: Cart,
}

impl Fixture {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            catalog: None,
            tiers: TierSchedule::default(),
            cart: Cart::new(),
        }
    }

    fn read(&self, category: &str, name: &str) -> Result<String, FixtureError> {
        let file_path = self.base_path.join(category).join(format!("{name}.yml"));

        tracing::debug!(path = %file_path.display(), "loading fixture");

        Ok(fs::read_to_string(&file_path)?)
    }

    /// Load a catalog from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, if products disagree on currency,
    /// or if the products break a catalog invariant.
    pub fn load_catalog(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let contents = self.read("catalogs", name)?;
        let fixture: CatalogFixture = serde_norway::from_str(&contents)?;

        let mut currency: Option<&'static Currency> = None;
        let mut products = Vec::with_capacity(fixture.products.len());

        for product_fixture in fixture.products {
            let (_amount, product_currency) = catalog::parse_price(&product_fixture.price)?;

            if let Some(existing_currency) = currency {
                if existing_currency != product_currency {
                    return Err(FixtureError::CurrencyMismatch(
                        existing_currency.iso_alpha_code.to_string(),
                        product_currency.iso_alpha_code.to_string(),
                    ));
                }
            } else {
                currency = Some(product_currency);
            }

            let product: Product = product_fixture.try_into()?;

            products.push(product);
        }

        let catalog = match currency {
            Some(currency) => Catalog::with_products_in(products, currency)?,
            None => Catalog::with_products(products)?,
        };

        self.catalog = Some(catalog);

        Ok(self)
    }

    /// Load a tier schedule from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the tiers do not form a
    /// valid schedule.
    pub fn load_tiers(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let contents = self.read("tiers", name)?;
        let fixture: TiersFixture = serde_norway::from_str(&contents)?;

        let tiers = fixture
            .tiers
            .into_iter()
            .map(PricingTier::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        self.tiers = TierSchedule::new(tiers)?;

        Ok(self)
    }

    /// Load a cart from a YAML fixture file
    ///
    /// Items may reference products missing from the catalog; pricing skips them.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, if an item has a quantity below 1,
    /// or if a product is listed twice.
    pub fn load_cart(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let contents = self.read("carts", name)?;
        let fixture: CartFixture = serde_norway::from_str(&contents)?;

        let mut seen = FxHashSet::default();
        let mut items = Vec::with_capacity(fixture.items.len());

        for item_fixture in fixture.items {
            if item_fixture.quantity < 1 {
                return Err(FixtureError::InvalidQuantity(item_fixture.product));
            }

            if !seen.insert(item_fixture.product.clone()) {
                return Err(FixtureError::DuplicateCartItem(item_fixture.product));
            }

            items.push(CartItem::from(item_fixture));
        }

        self.cart = Cart::with_items(items);

        Ok(self)
    }

    /// Load a complete fixture set (catalog, tiers, and cart with the same name)
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture
            .load_catalog(name)?
            .load_tiers(name)?
            .load_cart(name)?;

        Ok(fixture)
    }

    /// Get the loaded catalog
    ///
    /// # Errors
    ///
    /// Returns an error if no catalog has been loaded yet.
    pub fn catalog(&self) -> Result<&Catalog, FixtureError> {
        self.catalog.as_ref().ok_or(FixtureError::NoCatalog)
    }

    /// Get the tier schedule
    pub fn tiers(&self) -> &TierSchedule {
        &self.tiers
    }

    /// Get the cart
    pub fn cart(&self) -> &Cart {
        &self.cart
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, path::Path};

    use rusty_money::iso::{ILS, USD};
    use tempfile::TempDir;
    use testresult::TestResult;

    use crate::catalog::seed;

    use super::*;

    fn write_fixture(base: &Path, category: &str, name: &str, contents: &str) -> TestResult {
        let dir = base.join(category);

        fs::create_dir_all(&dir)?;
        fs::write(dir.join(format!("{name}.yml")), contents)?;

        Ok(())
    }

    #[test]
    fn fixture_from_set_loads_all_fixtures() -> TestResult {
        let fixture = Fixture::from_set("gifts")?;

        assert_eq!(fixture.catalog()?.len(), 8);
        assert_eq!(fixture.catalog()?.currency(), ILS);
        assert_eq!(fixture.tiers().len(), 5);
        assert_eq!(fixture.cart().len(), 4);

        Ok(())
    }

    #[test]
    fn gifts_catalog_matches_seed_catalog() -> TestResult {
        let mut fixture = Fixture::new();

        fixture.load_catalog("gifts")?;

        let seeded = seed::gifts()?;
        let loaded: Vec<&Product> = fixture.catalog()?.iter().collect();
        let expected: Vec<&Product> = seeded.iter().collect();

        assert_eq!(loaded, expected);

        Ok(())
    }

    #[test]
    fn gifts_tiers_match_default_schedule() -> TestResult {
        let mut fixture = Fixture::new();

        fixture.load_tiers("gifts")?;

        assert_eq!(fixture.tiers(), &TierSchedule::default());

        Ok(())
    }

    #[test]
    fn gifts_cart_keeps_file_order() -> TestResult {
        let mut fixture = Fixture::new();

        fixture.load_cart("gifts")?;

        let first = fixture.cart().items().first().ok_or("empty cart")?;

        assert_eq!(first, &CartItem::new("GIFT-001", 10, "white"));
        assert!(fixture.cart().contains("GIFT-099"));

        Ok(())
    }

    #[test]
    fn fixture_defaults_before_loading() {
        let fixture = Fixture::default();

        assert!(matches!(fixture.catalog(), Err(FixtureError::NoCatalog)));
        assert_eq!(fixture.tiers(), &TierSchedule::default());
        assert!(fixture.cart().is_empty());
    }

    #[test]
    fn fixture_missing_file_returns_io_error() {
        let mut fixture = Fixture::new();
        let result = fixture.load_catalog("nonexistent");

        assert!(matches!(result, Err(FixtureError::Io(_))));
    }

    #[test]
    fn fixture_load_catalog_rejects_currency_mismatch() -> TestResult {
        let dir = TempDir::new()?;

        write_fixture(
            dir.path(),
            "catalogs",
            "mixed",
            "products:\n  - id: A\n    name: Apple\n    price: 1.00 USD\n    colors: [red]\n    category: home\n  - id: B\n    name: Banana\n    price: 1.00 ILS\n    colors: [yellow]\n    category: home\n",
        )?;

        let mut fixture = Fixture::with_base_path(dir.path());
        let result = fixture.load_catalog("mixed");

        assert!(matches!(result, Err(FixtureError::CurrencyMismatch(_, _))));

        Ok(())
    }

    #[test]
    fn fixture_load_catalog_uses_product_currency() -> TestResult {
        let dir = TempDir::new()?;

        write_fixture(
            dir.path(),
            "catalogs",
            "usd",
            "products:\n  - id: A\n    name: Apple\n    price: 1.00 USD\n    colors: [red]\n    category: home\n",
        )?;

        let mut fixture = Fixture::with_base_path(dir.path());

        fixture.load_catalog("usd")?;

        assert_eq!(fixture.catalog()?.currency(), USD);

        Ok(())
    }

    #[test]
    fn fixture_load_catalog_rejects_duplicate_ids() -> TestResult {
        let dir = TempDir::new()?;

        write_fixture(
            dir.path(),
            "catalogs",
            "dupes",
            "products:\n  - id: A\n    name: Apple\n    price: 1.00 ILS\n    colors: [red]\n    category: home\n  - id: A\n    name: Again\n    price: 2.00 ILS\n    colors: [red]\n    category: home\n",
        )?;

        let mut fixture = Fixture::with_base_path(dir.path());
        let result = fixture.load_catalog("dupes");

        assert!(matches!(
            result,
            Err(FixtureError::Catalog(CatalogError::DuplicateId(id))) if id == "A"
        ));

        Ok(())
    }

    #[test]
    fn fixture_load_tiers_rejects_gap() -> TestResult {
        let dir = TempDir::new()?;

        write_fixture(
            dir.path(),
            "tiers",
            "gappy",
            "tiers:\n  - min: 1\n    max: 9\n    discount: 0%\n    label: Regular\n  - min: 20\n    discount: 10%\n    label: Bulk\n",
        )?;

        let mut fixture = Fixture::with_base_path(dir.path());
        let result = fixture.load_tiers("gappy");

        assert!(matches!(
            result,
            Err(FixtureError::Tier(TierError::NotContiguous { .. }))
        ));

        Ok(())
    }

    #[test]
    fn fixture_load_cart_rejects_zero_quantity() -> TestResult {
        let dir = TempDir::new()?;

        write_fixture(
            dir.path(),
            "carts",
            "zero",
            "items:\n  - product: A\n    quantity: 0\n    color: red\n",
        )?;

        let mut fixture = Fixture::with_base_path(dir.path());
        let result = fixture.load_cart("zero");

        assert!(matches!(result, Err(FixtureError::InvalidQuantity(id)) if id == "A"));

        Ok(())
    }

    #[test]
    fn fixture_load_cart_rejects_duplicate_products() -> TestResult {
        let dir = TempDir::new()?;

        write_fixture(
            dir.path(),
            "carts",
            "dupes",
            "items:\n  - product: A\n    color: red\n  - product: A\n    quantity: 2\n    color: blue\n",
        )?;

        let mut fixture = Fixture::with_base_path(dir.path());
        let result = fixture.load_cart("dupes");

        assert!(matches!(result, Err(FixtureError::DuplicateCartItem(id)) if id == "A"));

        Ok(())
    }
}
