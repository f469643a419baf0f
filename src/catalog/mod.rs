//! Catalog
//!
//! The immutable set of sellable products. A catalog is built once, validated, and then only
//! read: callers hold it behind a shared reference and pass it into filtering and pricing.

use rustc_hash::FxHashMap;
use rusty_money::iso::Currency;
use slotmap::SlotMap;
use thiserror::Error;

use crate::{
    pricing::default_currency,
    products::{Category, Product, ProductError, ProductKey},
};

pub mod filter;
pub mod seed;

pub use filter::{CatalogQuery, filter};

/// Errors related to catalog construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Two products share an id.
    #[error("duplicate product id: {0}")]
    DuplicateId(String),

    /// A product broke one of its own invariants.
    #[error(transparent)]
    Product(#[from] ProductError),
}

/// Catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    products: SlotMap<ProductKey, Product>,
    order: Vec<ProductKey>,
    ids: FxHashMap<String, ProductKey>,
    currency: &'static Currency,
}

impl Catalog {
    /// Create an empty catalog priced in `currency`.
    pub fn new(currency: &'static Currency) -> Self {
        Catalog {
            products: SlotMap::with_key(),
            order: Vec::new(),
            ids: FxHashMap::default(),
            currency,
        }
    }

    /// Create a catalog from products in display order, priced in the default currency.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if any product is invalid or an id repeats.
    pub fn with_products(
        products: impl IntoIterator<Item = Product>,
    ) -> Result<Self, CatalogError> {
        Self::with_products_in(products, default_currency())
    }

    /// Create a catalog from products in display order, priced in `currency`.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if any product is invalid or an id repeats.
    pub fn with_products_in(
        products: impl IntoIterator<Item = Product>,
        currency: &'static Currency,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Catalog::new(currency);

        for product in products {
            catalog.insert(product)?;
        }

        Ok(catalog)
    }

    fn insert(&mut self, product: Product) -> Result<ProductKey, CatalogError> {
        product.validate()?;

        if self.ids.contains_key(&product.id) {
            return Err(CatalogError::DuplicateId(product.id));
        }

        let id = product.id.clone();
        let key = self.products.insert(product);

        self.order.push(key);
        self.ids.insert(id, key);

        Ok(key)
    }

    /// Look up a product by its id.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.key(id).and_then(|key| self.products.get(key))
    }

    /// Look up the key of a product by its id.
    pub fn key(&self, id: &str) -> Option<ProductKey> {
        self.ids.get(id).copied()
    }

    /// Look up a product by key.
    pub fn product(&self, key: ProductKey) -> Option<&Product> {
        self.products.get(key)
    }

    /// Iterate over products in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.order.iter().filter_map(|key| self.products.get(*key))
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The currency catalog prices are expressed in.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Products matching `query`, in catalog order.
    pub fn filter(&self, query: &CatalogQuery) -> Vec<&Product> {
        self.iter().filter(|product| query.matches(product)).collect()
    }

    /// Every color offered by any product, in first-seen order.
    pub fn distinct_colors(&self) -> Vec<&str> {
        let mut colors: Vec<&str> = Vec::new();

        for color in self.iter().flat_map(|product| product.colors.iter()) {
            if !colors.contains(&color.as_str()) {
                colors.push(color);
            }
        }

        colors
    }

    /// Every category used by any product, in first-seen order.
    pub fn distinct_categories(&self) -> Vec<Category> {
        let mut categories: Vec<Category> = Vec::new();

        for product in self.iter() {
            if !categories.contains(&product.category) {
                categories.push(product.category);
            }
        }

        categories
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rusty_money::iso::{GBP, ILS};
    use testresult::TestResult;

    use crate::colors::ColorSet;

    use super::*;

    fn product(id: &str, category: Category, colors: &[&str]) -> Result<Product, ProductError> {
        Product::new(
            id,
            format!("Product {id}"),
            Decimal::new(1000, 2),
            ColorSet::from_strs(colors),
            category,
            10,
        )
    }

    #[test]
    fn with_products_preserves_order() -> TestResult {
        let catalog = Catalog::with_products([
            product("B", Category::Home, &["white"])?,
            product("A", Category::Mugs, &["black"])?,
            product("C", Category::Home, &["navy"])?,
        ])?;

        let ids: Vec<&str> = catalog.iter().map(|product| product.id.as_str()).collect();

        assert_eq!(ids, ["B", "A", "C"]);
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.currency(), ILS);

        Ok(())
    }

    #[test]
    fn with_products_rejects_duplicate_ids() -> TestResult {
        let result = Catalog::with_products([
            product("A", Category::Home, &["white"])?,
            product("A", Category::Mugs, &["black"])?,
        ]);

        assert!(matches!(result, Err(CatalogError::DuplicateId(id)) if id == "A"));

        Ok(())
    }

    #[test]
    fn with_products_rejects_invalid_products() -> TestResult {
        let mut invalid = product("A", Category::Home, &["white"])?;
        invalid.colors = ColorSet::default();

        let result = Catalog::with_products([invalid]);

        assert_eq!(
            result.err(),
            Some(CatalogError::Product(ProductError::NoColors("A".to_string())))
        );

        Ok(())
    }

    #[test]
    fn get_and_key_look_up_by_id() -> TestResult {
        let catalog = Catalog::with_products_in([product("A", Category::Home, &["white"])?], GBP)?;

        let key = catalog.key("A").ok_or("missing key")?;

        assert_eq!(catalog.product(key).map(|p| p.id.as_str()), Some("A"));
        assert_eq!(catalog.get("A").map(|p| p.category), Some(Category::Home));
        assert!(catalog.get("a").is_none());
        assert!(catalog.key("missing").is_none());
        assert_eq!(catalog.currency(), GBP);

        Ok(())
    }

    #[test]
    fn distinct_values_are_first_seen_order() -> TestResult {
        let catalog = Catalog::with_products([
            product("A", Category::Travel, &["white", "navy"])?,
            product("B", Category::Home, &["navy", "black"])?,
            product("C", Category::Travel, &["gray", "white"])?,
        ])?;

        assert_eq!(catalog.distinct_colors(), ["white", "navy", "black", "gray"]);
        assert_eq!(
            catalog.distinct_categories(),
            [Category::Travel, Category::Home]
        );

        Ok(())
    }

    #[test]
    fn empty_catalog_has_no_facets() {
        let catalog = Catalog::new(ILS);

        assert!(catalog.is_empty());
        assert!(catalog.distinct_colors().is_empty());
        assert!(catalog.distinct_categories().is_empty());
    }
}
