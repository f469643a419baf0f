//! Products

use std::{fmt, str::FromStr};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use slotmap::new_key_type;
use thiserror::Error;

use crate::colors::ColorSet;

new_key_type! {
    /// Product Key
    pub struct ProductKey;
}

/// Errors raised when a product record breaks a catalog invariant.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProductError {
    /// The product id was empty.
    #[error("product id must not be empty")]
    EmptyId,

    /// The product declared no colors (product id).
    #[error("product {0} must offer at least one color")]
    NoColors(String),

    /// The base price was below zero (product id, price).
    #[error("product {0} has negative base price {1}")]
    NegativePrice(String, Decimal),

    /// A category name did not match the closed set of categories.
    #[error("unknown category: {0}")]
    UnknownCategory(String),
}

/// Product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Mugs
    Mugs,

    /// Office
    Office,

    /// Home
    Home,

    /// Travel
    Travel,

    /// Seasonal
    Seasonal,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 5] = [
        Category::Mugs,
        Category::Office,
        Category::Home,
        Category::Travel,
        Category::Seasonal,
    ];

    /// The lowercase identifier used in fixtures and filters.
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Mugs => "mugs",
            Category::Office => "office",
            Category::Home => "home",
            Category::Travel => "travel",
            Category::Seasonal => "seasonal",
        }
    }

    /// Capitalised label for filter options.
    pub const fn label(self) -> &'static str {
        match self {
            Category::Mugs => "Mugs",
            Category::Office => "Office",
            Category::Home => "Home",
            Category::Travel => "Travel",
            Category::Seasonal => "Seasonal",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ProductError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| ProductError::UnknownCategory(s.to_string()))
    }
}

/// A sellable product. Immutable once it has been added to a catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Unique, stable product id (e.g. `GIFT-001`)
    pub id: String,

    /// Product name
    pub name: String,

    /// Display description
    pub description: String,

    /// Unit price before any bulk discount
    pub base_price: Decimal,

    /// Available color variants, in declared order
    pub colors: ColorSet,

    /// Product category
    pub category: Category,

    /// Stock count, display only
    pub inventory: u32,

    /// Optional product image
    pub image_url: Option<String>,
}

impl Product {
    /// Create a validated product.
    ///
    /// # Errors
    ///
    /// - [`ProductError::EmptyId`]: the id is empty.
    /// - [`ProductError::NoColors`]: `colors` is empty.
    /// - [`ProductError::NegativePrice`]: `base_price` is below zero.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        base_price: Decimal,
        colors: ColorSet,
        category: Category,
        inventory: u32,
    ) -> Result<Self, ProductError> {
        let product = Product {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            base_price,
            colors,
            category,
            inventory,
            image_url: None,
        };

        product.validate()?;

        Ok(product)
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the image URL.
    #[must_use]
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Check the product invariants.
    ///
    /// # Errors
    ///
    /// Returns the first [`ProductError`] found.
    pub fn validate(&self) -> Result<(), ProductError> {
        if self.id.is_empty() {
            return Err(ProductError::EmptyId);
        }

        if self.colors.is_empty() {
            return Err(ProductError::NoColors(self.id.clone()));
        }

        if self.base_price < Decimal::ZERO {
            return Err(ProductError::NegativePrice(self.id.clone(), self.base_price));
        }

        Ok(())
    }

    /// The color pre-selected when the product is shown: its first declared color.
    pub fn default_color(&self) -> Option<&str> {
        self.colors.first()
    }

    /// Check whether the product is offered in `color`.
    pub fn has_color(&self, color: &str) -> bool {
        self.colors.contains(color)
    }

    /// Check whether any stock is left. Cart operations never change the count.
    pub fn is_in_stock(&self) -> bool {
        self.inventory > 0
    }
}
