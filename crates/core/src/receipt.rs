//! Receipt
//!
//! Terminal receipt rendering for a cart, one row per line item plus a
//! grand total. Prices are formatted as USD through `rusty-money`; the
//! storefront does not do multi-currency pricing.

use rust_decimal::Decimal;
use rusty_money::{Money, iso};
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};

use crate::cart::{Cart, CartLineItem};

/// Formats a decimal amount as US dollars, e.g. `$2,549.00`.
#[must_use]
pub fn format_usd(amount: Decimal) -> String {
    Money::from_decimal(amount, iso::USD).to_string()
}

fn describe_options(item: &CartLineItem) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(tier) = item.selected_quantity() {
        parts.push(format!("{} stems", tier.stems));
    }

    for combo in item.selected_combos() {
        parts.push(combo.name.clone());
    }

    if parts.is_empty() {
        "-".to_string()
    } else {
        parts.join(", ")
    }
}

/// Renders the cart as a table with a trailing total row.
#[must_use]
pub fn render(cart: &Cart) -> String {
    let mut builder = Builder::default();

    builder.push_record(["Item", "Qty", "Options", "Total"]);

    for item in cart.items() {
        builder.push_record([
            item.product_name().to_string(),
            item.quantity().to_string(),
            describe_options(item),
            format_usd(item.total_price()),
        ]);
    }

    builder.push_record([
        "Total".to_string(),
        cart.item_count().to_string(),
        String::new(),
        format_usd(cart.total()),
    ]);

    let mut table = builder.build();

    table.with(Style::sharp());
    table.modify(Columns::last(), Alignment::right());

    table.to_string()
}
