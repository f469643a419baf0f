//! Seed Catalog
//!
//! The gift catalog the storefront ships with.

use rust_decimal::Decimal;

use crate::{
    catalog::{Catalog, CatalogError},
    colors::ColorSet,
    products::{Category, Product},
};

/// Build the built-in gift catalog: eight products across all five categories.
///
/// # Errors
///
/// Returns a [`CatalogError`] if a seed product breaks a catalog invariant.
pub fn gifts() -> Result<Catalog, CatalogError> {
    Catalog::with_products([
        Product::new(
            "GIFT-001",
            "Premium Ceramic Mug",
            Decimal::new(4599, 2),
            ColorSet::from_strs(&["white", "black", "navy"]),
            Category::Mugs,
            500,
        )?
        .with_description("High-quality ceramic mug perfect for custom designs and logos")
        .with_image_url(
            "https://images.unsplash.com/photo-1577937927133-66ef06acdf18?auto=format&fit=crop&q=80&w=800",
        ),
        Product::new(
            "GIFT-002",
            "Travel Tumbler",
            Decimal::new(8999, 2),
            ColorSet::from_strs(&["black", "white", "navy"]),
            Category::Travel,
            300,
        )?
        .with_description("Double-walled stainless steel tumbler for hot and cold drinks")
        .with_image_url(
            "https://images.unsplash.com/photo-1578766415570-db37e724c6d5?auto=format&fit=crop&q=80&w=800",
        ),
        Product::new(
            "GIFT-003",
            "Desk Organizer Set",
            Decimal::new(10999, 2),
            ColorSet::from_strs(&["black", "white", "natural"]),
            Category::Office,
            200,
        )?
        .with_description("Elegant desk organizer set with pen holder and accessories tray")
        .with_image_url(
            "https://images.unsplash.com/photo-1587829741301-dc798b83add3?auto=format&fit=crop&q=80&w=800",
        ),
        Product::new(
            "GIFT-004",
            "Insulated Water Bottle",
            Decimal::new(6999, 2),
            ColorSet::from_strs(&["black", "white", "navy"]),
            Category::Travel,
            400,
        )?
        .with_description("Premium insulated water bottle keeps drinks cold for 24 hours")
        .with_image_url(
            "https://images.unsplash.com/photo-1602143407151-7111542de6e8?auto=format&fit=crop&q=80&w=800",
        ),
        Product::new(
            "GIFT-005",
            "Decorative Candle Set",
            Decimal::new(12999, 2),
            ColorSet::from_strs(&["white", "black", "natural"]),
            Category::Home,
            150,
        )?
        .with_description("Set of 3 scented candles in elegant glass containers")
        .with_image_url(
            "https://images.unsplash.com/photo-1603006905003-be475563bc59?auto=format&fit=crop&q=80&w=800",
        ),
        Product::new(
            "GIFT-006",
            "Holiday Ornament Set",
            Decimal::new(7999, 2),
            ColorSet::from_strs(&["white", "navy", "natural"]),
            Category::Seasonal,
            250,
        )?
        .with_description("Set of 6 customizable holiday ornaments")
        .with_image_url(
            "https://images.unsplash.com/photo-1544919982-b61976f0ba43?auto=format&fit=crop&q=80&w=800",
        ),
        Product::new(
            "GIFT-007",
            "Mousepad with Wrist Rest",
            Decimal::new(5999, 2),
            ColorSet::from_strs(&["black", "gray", "navy"]),
            Category::Office,
            350,
        )?
        .with_description("Ergonomic mousepad with memory foam wrist support")
        .with_image_url(
            "https://images.unsplash.com/photo-1527864550417-7fd91fc51a46?auto=format&fit=crop&q=80&w=800",
        ),
        Product::new(
            "GIFT-008",
            "Photo Frame Set",
            Decimal::new(14999, 2),
            ColorSet::from_strs(&["white", "black", "natural"]),
            Category::Home,
            180,
        )?
        .with_description("Set of 3 elegant photo frames in different sizes")
        .with_image_url(
            "https://images.unsplash.com/photo-1581612129334-551ccd069e63?auto=format&fit=crop&q=80&w=800",
        ),
    ])
}
