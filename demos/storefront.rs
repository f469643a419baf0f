//! Storefront Example
//!
//! This example lists a filtered catalog with its bulk prices and prices a cart.
//!
//! Use `-f` to load a fixture set by name
//! Use `-s`, `-c` and `--color` to filter the catalog listing
//! Use `-i ID:QUANTITY:COLOR` (repeatable) to price a cart other than the fixture's

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use storefront::{
    fixtures::Fixture,
    ledger::price_cart,
    pricing::{format_price_in, tier_prices},
    utils::ExampleStorefrontArgs,
};
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Storefront Example
#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = ExampleStorefrontArgs::parse();

    let fixture = Fixture::from_set(&args.fixture)?;
    let catalog = fixture.catalog()?;
    let schedule = fixture.tiers();

    let mut builder = Builder::default();

    let mut header = vec![
        "ID".to_string(),
        "Product".to_string(),
        "Category".to_string(),
        "Colors".to_string(),
        "Stock".to_string(),
    ];
    header.extend(schedule.iter().map(|tier| match tier.max() {
        Some(max) => format!("{}-{max}", tier.min()),
        None => format!("{}+", tier.min()),
    }));

    builder.push_record(header);

    let listed = catalog.filter(&args.query());

    for product in &listed {
        let mut record = vec![
            product.id.clone(),
            product.name.clone(),
            product.category.label().to_string(),
            product.colors.to_string(),
            if product.is_in_stock() {
                product.inventory.to_string()
            } else {
                "Out of Stock".to_string()
            },
        ];
        record.extend(
            tier_prices(product, schedule)
                .iter()
                .map(|price| format_price_in(price.unit_price, catalog.currency())),
        );

        builder.push_record(record);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(4..), Alignment::right());

    println!("{table}");
    println!("{} of {} products", listed.len(), catalog.len());

    let cart = args.cart().unwrap_or_else(|| fixture.cart().clone());
    let priced = price_cart(catalog, &cart, schedule)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    priced.write_to(&mut handle)?;

    writeln!(handle, "\nItems: {}", cart.total_quantity())?;

    Ok(())
}
