//! Catalog Filter
//!
//! A stable filter over the catalog. A product is kept when every predicate in the query holds:
//! the search term is a case-insensitive substring of its name or id, its category equals the
//! selected category, and its colors include the selected color. Unset predicates always hold.

use crate::{
    catalog::Catalog,
    products::{Category, Product},
};

/// Filter criteria for a catalog listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    search: String,
    category: Option<Category>,
    color: Option<String>,
}

impl CatalogQuery {
    /// A query that matches every product.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the free-text search term.
    #[must_use]
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    /// Restrict to a category, or clear the restriction with `None`.
    #[must_use]
    pub fn category(mut self, category: impl Into<Option<Category>>) -> Self {
        self.category = category.into();
        self
    }

    /// Restrict to products offered in a color.
    #[must_use]
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Clear the color restriction.
    #[must_use]
    pub fn any_color(mut self) -> Self {
        self.color = None;
        self
    }

    /// The search term.
    pub fn search_term(&self) -> &str {
        &self.search
    }

    /// The selected category.
    pub fn selected_category(&self) -> Option<Category> {
        self.category
    }

    /// The selected color.
    pub fn selected_color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    /// Check whether a product satisfies every predicate.
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_search(product)
            && self.matches_category(product)
            && self.matches_color(product)
    }

    fn matches_search(&self, product: &Product) -> bool {
        if self.search.is_empty() {
            return true;
        }

        let needle = self.search.to_lowercase();

        product.name.to_lowercase().contains(&needle) || product.id.to_lowercase().contains(&needle)
    }

    fn matches_category(&self, product: &Product) -> bool {
        self.category.is_none_or(|category| category == product.category)
    }

    fn matches_color(&self, product: &Product) -> bool {
        self.color
            .as_deref()
            .is_none_or(|color| product.has_color(color))
    }
}

/// Filter `catalog` by search term, category and color, preserving catalog order.
pub fn filter<'a>(
    catalog: &'a Catalog,
    search: &str,
    category: Option<Category>,
    color: Option<&str>,
) -> Vec<&'a Product> {
    let mut query = CatalogQuery::new().search(search).category(category);

    if let Some(color) = color {
        query = query.color(color);
    }

    catalog.filter(&query)
}
