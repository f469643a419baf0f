//! Storefront
//!
//! Storefront is the catalog and cart pricing core of a promotional-gift shop: catalog filtering,
//! bulk-tier pricing, an immutable cart, and a ledger that turns the cart into priced lines and a
//! grand total.

pub mod cart;
pub mod catalog;
pub mod colors;
pub mod fixtures;
pub mod ledger;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod utils;
