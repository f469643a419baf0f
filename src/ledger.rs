//! Cart Ledger
//!
//! Prices a cart against a catalog and a tier schedule. Items whose product id is not in the
//! catalog are left out of both the lines and the totals.

use std::io;

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use smallvec::SmallVec;
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    cart::{Cart, CartItem},
    catalog::Catalog,
    pricing::{
        PricingError, PricingTier, TierSchedule, effective_unit_price, extend, format_price_in,
        to_minor_units,
    },
    products::Product,
};

/// Errors that can occur while pricing or reporting on a cart.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// A line amount overflowed.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// Summing the line amounts overflowed.
    #[error("cart total overflows")]
    TotalOverflow,

    /// An amount could not be expressed in minor units.
    #[error("amount {0} is out of range for minor units")]
    AmountOutOfRange(Decimal),

    /// IO error
    #[error("IO error")]
    IO,
}

/// A cart item resolved against the catalog and priced.
#[derive(Debug, Clone, PartialEq)]
pub struct PricedLine<'a> {
    product: &'a Product,
    item: &'a CartItem,
    tier: Option<&'a PricingTier>,
    unit_price: Decimal,
    line_total: Decimal,
    base_total: Decimal,
}

impl<'a> PricedLine<'a> {
    /// The resolved product.
    pub fn product(&self) -> &'a Product {
        self.product
    }

    /// The cart item this line prices.
    pub fn item(&self) -> &'a CartItem {
        self.item
    }

    /// Quantity on the line.
    pub fn quantity(&self) -> u32 {
        self.item.quantity()
    }

    /// Color chosen for the line.
    pub fn color(&self) -> &'a str {
        self.item.color()
    }

    /// The tier the quantity falls in.
    pub fn tier(&self) -> Option<&'a PricingTier> {
        self.tier
    }

    /// Label of the tier the quantity falls in.
    pub fn tier_label(&self) -> Option<&'a str> {
        self.tier.map(PricingTier::label)
    }

    /// Label of the tier, only when that tier takes something off.
    pub fn discount_label(&self) -> Option<&'a str> {
        self.tier
            .filter(|tier| tier.is_discounted())
            .map(PricingTier::label)
    }

    /// Effective unit price, unrounded.
    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    /// Unit price multiplied by quantity, unrounded.
    pub fn line_total(&self) -> Decimal {
        self.line_total
    }

    /// Price of the line without any bulk discount.
    pub fn base_total(&self) -> Decimal {
        self.base_total
    }
}

/// The result of pricing a cart.
#[derive(Debug, Clone, PartialEq)]
pub struct PricedCart<'a> {
    lines: Vec<PricedLine<'a>>,
    skipped: SmallVec<[&'a str; 2]>,
    subtotal: Decimal,
    total: Decimal,
    currency: &'static Currency,
}

impl<'a> PricedCart<'a> {
    /// Priced lines in cart order.
    pub fn lines(&self) -> &[PricedLine<'a>] {
        &self.lines
    }

    /// Product ids of cart items that were not found in the catalog.
    pub fn skipped(&self) -> &[&'a str] {
        &self.skipped
    }

    /// Sum of all line totals.
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Sum of all lines at base price.
    pub fn subtotal(&self) -> Decimal {
        self.subtotal
    }

    /// Amount taken off by bulk discounts.
    pub fn savings(&self) -> Decimal {
        self.subtotal - self.total
    }

    /// Currency of every amount in the cart.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Check whether no line could be priced.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The grand total as money, rounded to the currency's minor units.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::AmountOutOfRange`] if the total does not fit in minor units.
    pub fn total_money(&self) -> Result<Money<'static, Currency>, LedgerError> {
        let minor = to_minor_units(self.total, self.currency)
            .ok_or(LedgerError::AmountOutOfRange(self.total))?;

        Ok(Money::from_minor(minor, self.currency))
    }

    /// Render the priced cart as a table followed by its totals.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::IO`] if writing fails.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), LedgerError> {
        let mut builder = Builder::default();

        builder.push_record(["", "Item", "Color", "Qty", "Unit Price", "Line Total", "Tier"]);

        for (idx, line) in self.lines.iter().enumerate() {
            builder.push_record([
                idx.saturating_add(1).to_string(),
                line.product.name.clone(),
                line.color().to_string(),
                line.quantity().to_string(),
                format_price_in(line.unit_price, self.currency),
                format_price_in(line.line_total, self.currency),
                line.discount_label().unwrap_or_default().to_string(),
            ]);
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Columns::new(3..6), Alignment::right());

        writeln!(out, "\n{table}").map_err(|_err| LedgerError::IO)?;

        self.write_summary(&mut out)
    }

    fn write_summary(&self, out: &mut impl io::Write) -> Result<(), LedgerError> {
        let rows = [
            ("Subtotal:", format_price_in(self.subtotal, self.currency)),
            ("Savings:", format_price_in(self.savings(), self.currency)),
            ("Total:", format_price_in(self.total, self.currency)),
        ];

        let value_width = rows
            .iter()
            .map(|(_, value)| value.chars().count())
            .max()
            .unwrap_or_default();

        for (label, value) in rows {
            writeln!(out, " {label:<10}{value:>value_width$}").map_err(|_err| LedgerError::IO)?;
        }

        for id in &self.skipped {
            writeln!(out, " (unavailable: {id})").map_err(|_err| LedgerError::IO)?;
        }

        Ok(())
    }
}

/// Price every item of `cart` that refers to a product in `catalog`.
///
/// # Errors
///
/// Returns a [`LedgerError`] if a line amount or a cart total does not fit in a `Decimal`.
pub fn price_cart<'a>(
    catalog: &'a Catalog,
    cart: &'a Cart,
    schedule: &'a TierSchedule,
) -> Result<PricedCart<'a>, LedgerError> {
    let mut lines = Vec::with_capacity(cart.len());
    let mut skipped = SmallVec::new();
    let mut subtotal = Decimal::ZERO;
    let mut total = Decimal::ZERO;

    for item in cart {
        let Some(product) = catalog.get(item.product_id()) else {
            tracing::debug!(
                product_id = item.product_id(),
                "skipping cart item for unknown product"
            );

            skipped.push(item.product_id());
            continue;
        };

        let quantity = item.quantity();
        let unit_price = effective_unit_price(product.base_price, quantity, schedule);

        let line = PricedLine {
            product,
            item,
            tier: schedule.resolve(quantity),
            unit_price,
            line_total: extend(unit_price, quantity)?,
            base_total: extend(product.base_price, quantity)?,
        };

        subtotal = subtotal
            .checked_add(line.base_total)
            .ok_or(LedgerError::TotalOverflow)?;
        total = total
            .checked_add(line.line_total)
            .ok_or(LedgerError::TotalOverflow)?;

        lines.push(line);
    }

    Ok(PricedCart {
        lines,
        skipped,
        subtotal,
        total,
        currency: catalog.currency(),
    })
}
