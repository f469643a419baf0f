//! Cart Fixtures

use serde::Deserialize;

use crate::cart::CartItem;

/// Wrapper for cart items in YAML
#[derive(Debug, Deserialize)]
pub struct CartFixture {
    /// Items in insertion order
    pub items: Vec<CartItemFixture>,
}

/// Cart Item Fixture
#[derive(Debug, Deserialize)]
pub struct CartItemFixture {
    /// Referenced product id
    pub product: String,

    /// Requested quantity
    #[serde(default = "default_quantity")]
    pub quantity: u32,

    /// Chosen color
    pub color: String,
}

fn default_quantity() -> u32 {
    1
}

impl From<CartItemFixture> for CartItem {
    fn from(fixture: CartItemFixture) -> Self {
        CartItem::new(fixture.product, fixture.quantity, fixture.color)
    }
}
