//! Utils

use clap::Parser;

use crate::{
    cart::{Cart, CartItem},
    catalog::CatalogQuery,
    products::Category,
};

/// Arguments for the storefront demo
#[derive(Debug, Parser)]
pub struct ExampleStorefrontArgs {
    /// Fixture set to load the catalog, tiers and cart from
    #[clap(short, long, default_value = "gifts")]
    pub fixture: String,

    /// Case-insensitive search over product names and ids
    #[clap(short, long, default_value = "")]
    pub search: String,

    /// Only list products in this category
    #[clap(short, long)]
    pub category: Option<Category>,

    /// Only list products offered in this color
    #[clap(long)]
    pub color: Option<String>,

    /// Cart items as `ID:QUANTITY:COLOR`, replacing the fixture cart
    #[clap(short, long = "item", value_parser = parse_item)]
    pub items: Vec<CartItem>,
}

impl ExampleStorefrontArgs {
    /// Build the catalog query from the filter flags.
    pub fn query(&self) -> CatalogQuery {
        let query = CatalogQuery::new()
            .search(self.search.as_str())
            .category(self.category);

        match &self.color {
            Some(color) => query.color(color.as_str()),
            None => query,
        }
    }

    /// The cart given on the command line, if any items were passed.
    ///
    /// Repeated product ids are merged into one item.
    pub fn cart(&self) -> Option<Cart> {
        (!self.items.is_empty()).then(|| Cart::with_items(self.items.clone()))
    }
}

/// Parse a cart item given as `ID:QUANTITY:COLOR`.
///
/// # Errors
///
/// Returns a message if the value does not have three parts or the quantity is not a positive
/// integer.
pub fn parse_item(s: &str) -> Result<CartItem, String> {
    let parts: Vec<&str> = s.split(':').collect();

    let [id, quantity, color] = parts.as_slice() else {
        return Err(format!("expected ID:QUANTITY:COLOR, got: {s}"));
    };

    let quantity = quantity
        .parse::<u32>()
        .ok()
        .filter(|quantity| *quantity >= 1)
        .ok_or_else(|| format!("quantity must be a positive integer, got: {quantity}"))?;

    Ok(CartItem::new(*id, quantity, *color))
}
