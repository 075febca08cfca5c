//! JSON output utilities for CLI commands.
//!
//! This module provides:
//! - Shared event types for consistent JSON output (`events`)
//! - Helper functions for emitting NDJSON events
//! - Serializable views of basket and category results

pub mod events;

use std::io::{self, Write};

use bazaar::domain::entities::{Basket, Category, LineItem, VendorGroup};
use bazaar::domain::ports::Clock;
use serde::Serialize;
use serde_json::{json, Value};

use super::render::money;

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &Value) -> io::Result<()> {
    let line = serde_json::to_string(event)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()
}

/// Emit a typed event as NDJSON to stdout.
pub fn emit_event<T: Serialize>(event: &T) -> io::Result<()> {
    let value =
        serde_json::to_value(event).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    write_event(&mut io::stdout().lock(), &value)
}

/// Categories are emitted with their full subtree, as received.
pub fn categories_value(nodes: &[Category]) -> Value {
    serde_json::to_value(nodes).unwrap_or(Value::Null)
}

fn line_item_value(item: &LineItem) -> Value {
    json!({
        "id": item.id(),
        "productId": item.product_id(),
        "name": item.name(),
        "price": money(item.price()),
        "quantity": item.quantity(),
        "image": item.image(),
        "vendorId": item.vendor_id(),
        "vendorName": item.vendor_name(),
        "protectionFeePercentage": item.protection_fee_percentage().to_string(),
        "lineTotal": money(item.line_total()),
        "protectionFee": money(item.protection_fee()),
    })
}

fn vendor_value(group: &VendorGroup) -> Value {
    json!({
        "vendorId": group.vendor_id(),
        "vendorName": group.vendor_name(),
        "itemCount": group.item_count(),
        "subtotal": money(group.subtotal()),
        "protectionFee": money(group.protection_fee()),
        "total": money(group.total()),
        "items": group.items().iter().map(|item| item.id()).collect::<Vec<_>>(),
    })
}

/// Full basket state: items, vendor groups and totals.
pub fn basket_value<C: Clock>(basket: &Basket<C>) -> Value {
    let totals = basket.totals();
    json!({
        "items": basket.items().iter().map(line_item_value).collect::<Vec<_>>(),
        "vendors": basket.vendors().values().map(vendor_value).collect::<Vec<_>>(),
        "totals": {
            "itemCount": totals.item_count,
            "subtotal": money(totals.subtotal),
            "protectionFee": money(totals.protection_fee),
            "total": money(totals.total),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bazaar::domain::value_objects::NewLineItem;
    use bazaar::infrastructure::FixedClock;
    use rust_decimal_macros::dec;

    #[test]
    fn write_event_is_one_line() {
        let mut buf = Vec::new();
        write_event(&mut buf, &json!({"event": "start", "command": "basket"})).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "{\"command\":\"basket\",\"event\":\"start\"}\n");
    }

    #[test]
    fn basket_value_reports_totals_as_money_strings() {
        let mut basket = Basket::with_clock(FixedClock::default());
        basket.add_item(
            NewLineItem::new(1, 7, "Scarf", dec!(12.5))
                .with_quantity(2)
                .with_vendor_name("Knit Co")
                .with_protection_fee(dec!(0.072)),
        );

        let value = basket_value(&basket);
        assert_eq!(value["totals"]["subtotal"], "25.00");
        assert_eq!(value["totals"]["protectionFee"], "1.80");
        assert_eq!(value["totals"]["total"], "26.80");
        assert_eq!(value["totals"]["itemCount"], 2);
        assert_eq!(value["vendors"][0]["vendorName"], "Knit Co");
        assert_eq!(value["items"][0]["lineTotal"], "25.00");
        assert_eq!(value["items"][0]["id"], "1-7-1704067200000-0");
    }
}
