//! Storefront prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartItem, parse_quantity},
    catalog::{Catalog, CatalogError, CatalogQuery, filter, seed},
    colors::ColorSet,
    ledger::{LedgerError, PricedCart, PricedLine, price_cart},
    pricing::{
        PricingError, PricingTier, TierError, TierPrice, TierSchedule, default_currency,
        effective_unit_price, extend, format_price, format_price_in, line_total, tier_prices,
        to_minor_units,
    },
    products::{Category, Product, ProductError, ProductKey},
};
