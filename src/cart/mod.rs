//! Cart
//!
//! An ordered list of cart items, keyed by product id. Every mutation returns a new cart and
//! leaves the receiver untouched, so a state holder can swap the value in after each event.

use std::slice;

mod quantity;

pub use quantity::parse_quantity;

use crate::products::Product;

/// One line a shopper intends to purchase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItem {
    product_id: String,
    quantity: u32,
    color: String,
}

impl CartItem {
    /// Create a new cart item.
    pub fn new(product_id: impl Into<String>, quantity: u32, color: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
            color: color.into(),
        }
    }

    /// Id of the referenced product.
    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    /// Requested quantity.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Color chosen when the product was first added.
    pub fn color(&self) -> &str {
        &self.color
    }
}

/// Cart
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cart holding `items` in the given order.
    ///
    /// Repeated product ids are merged into the first item for that product, summing quantities
    /// and keeping its color, the same way [`Cart::add_item`] treats a product already in the
    /// cart. Items with a quantity of 0 are dropped.
    #[must_use]
    pub fn with_items(items: impl IntoIterator<Item = CartItem>) -> Self {
        let mut merged: Vec<CartItem> = Vec::new();

        for item in items {
            if item.quantity < 1 {
                tracing::debug!(
                    product_id = item.product_id.as_str(),
                    "dropping cart item with quantity 0"
                );

                continue;
            }

            match merged
                .iter_mut()
                .find(|existing| existing.product_id == item.product_id)
            {
                Some(existing) => {
                    existing.quantity = existing.quantity.saturating_add(item.quantity);
                }
                None => merged.push(item),
            }
        }

        Self { items: merged }
    }

    /// Add one unit of `product` in `color`.
    ///
    /// If the product is already in the cart its quantity goes up by one and its original color
    /// is kept; otherwise a new item with quantity 1 is appended.
    #[must_use]
    pub fn add_item(&self, product: &Product, color: &str) -> Self {
        if self.contains(&product.id) {
            return self.map_item(&product.id, |item| CartItem {
                quantity: item.quantity.saturating_add(1),
                ..item.clone()
            });
        }

        let mut items = self.items.clone();
        items.push(CartItem::new(product.id.clone(), 1, color));

        Self { items }
    }

    /// Replace the quantity of `product_id`.
    ///
    /// Quantities below 1 are ignored: the item is neither removed nor clamped.
    #[must_use]
    pub fn update_quantity(&self, product_id: &str, quantity: i64) -> Self {
        if quantity < 1 {
            tracing::debug!(product_id, quantity, "ignoring non-positive quantity update");

            return self.clone();
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);

        self.map_item(product_id, |item| CartItem {
            quantity,
            ..item.clone()
        })
    }

    /// Apply a quantity typed into a free-text field.
    ///
    /// Input that does not start with an integer reads as 0, which leaves the cart unchanged.
    #[must_use]
    pub fn set_quantity_from_input(&self, product_id: &str, input: &str) -> Self {
        self.update_quantity(product_id, parse_quantity(input))
    }

    /// Increase the quantity of `product_id` by one.
    #[must_use]
    pub fn increment(&self, product_id: &str) -> Self {
        match self.get(product_id) {
            Some(item) => {
                self.update_quantity(product_id, i64::from(item.quantity).saturating_add(1))
            }
            None => self.clone(),
        }
    }

    /// Decrease the quantity of `product_id` by one, stopping at 1.
    #[must_use]
    pub fn decrement(&self, product_id: &str) -> Self {
        match self.get(product_id) {
            Some(item) => {
                self.update_quantity(product_id, i64::from(item.quantity.saturating_sub(1).max(1)))
            }
            None => self.clone(),
        }
    }

    /// Remove `product_id` from the cart. Unknown ids leave the cart unchanged.
    #[must_use]
    pub fn remove_item(&self, product_id: &str) -> Self {
        Self {
            items: self
                .items
                .iter()
                .filter(|item| item.product_id != product_id)
                .cloned()
                .collect(),
        }
    }

    /// Look up the item for a product id.
    pub fn get(&self, product_id: &str) -> Option<&CartItem> {
        self.items.iter().find(|item| item.product_id == product_id)
    }

    /// Check whether the cart holds a product id.
    pub fn contains(&self, product_id: &str) -> bool {
        self.get(product_id).is_some()
    }

    /// Iterate over items in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, CartItem> {
        self.items.iter()
    }

    /// The items in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Number of items (distinct products).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all item quantities.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    fn map_item(&self, product_id: &str, f: impl Fn(&CartItem) -> CartItem) -> Self {
        Self {
            items: self
                .items
                .iter()
                .map(|item| {
                    if item.product_id == product_id {
                        f(item)
                    } else {
                        item.clone()
                    }
                })
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartItem;
    type IntoIter = slice::Iter<'a, CartItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
