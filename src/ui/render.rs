//! Human-readable rendering of basket and category results.

use std::fmt::Write as _;

use bazaar::application::ReplayReport;
use bazaar::domain::entities::{Basket, Category};
use bazaar::domain::ports::Clock;
use rust_decimal::{Decimal, RoundingStrategy};

/// Currency amount with exactly two decimal places.
pub fn money(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded.to_string()
}

fn plural(count: u64, one: &str, many: &str) -> String {
    if count == 1 {
        format!("{} {}", count, one)
    } else {
        format!("{} {}", count, many)
    }
}

pub fn render_basket<C: Clock>(basket: &Basket<C>) -> String {
    let mut out = String::new();
    if basket.is_empty() {
        out.push_str("Basket is empty\n");
        return out;
    }

    let _ = writeln!(
        out,
        "Basket: {} from {}",
        plural(basket.item_count(), "item", "items"),
        plural(basket.vendors().len() as u64, "vendor", "vendors"),
    );

    for group in basket.vendors().values() {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{} (#{}) - {}",
            display_name(group.vendor_name()),
            group.vendor_id(),
            plural(group.item_count(), "item", "items"),
        );
        for item in group.items() {
            let _ = write!(
                out,
                "  {} x {} @ {} = {}",
                item.quantity(),
                item.name(),
                money(item.price()),
                money(item.line_total()),
            );
            if !item.protection_fee().is_zero() {
                let _ = write!(out, " (+{} protection)", money(item.protection_fee()));
            }
            let _ = writeln!(out);
        }
        let _ = writeln!(out, "  Vendor total: {}", money(group.total()));
    }

    let totals = basket.totals();
    let _ = writeln!(out);
    let _ = writeln!(out, "Subtotal:       {:>10}", money(totals.subtotal));
    let _ = writeln!(out, "Protection fee: {:>10}", money(totals.protection_fee));
    let _ = writeln!(out, "Total:          {:>10}", money(totals.total));
    out
}

fn display_name(vendor_name: &str) -> &str {
    if vendor_name.is_empty() {
        "Unnamed vendor"
    } else {
        vendor_name
    }
}

pub fn render_replay(report: &ReplayReport) -> String {
    format!(
        "Replayed {}: {} changed the basket, {} ignored\n",
        plural(report.steps.len() as u64, "action", "actions"),
        report.changed(),
        report.ignored(),
    )
}

fn category_line(category: &Category) -> String {
    format!(
        "{} [{}] ({})",
        category.name,
        category.slug,
        plural(category.product_count, "product", "products"),
    )
}

/// One line per node; with `subtrees`, children are indented beneath.
pub fn render_categories(nodes: &[Category], subtrees: bool) -> String {
    let mut out = String::new();
    for node in nodes {
        render_node(&mut out, node, 0, subtrees);
    }
    out
}

fn render_node(out: &mut String, node: &Category, depth: usize, subtrees: bool) {
    let _ = writeln!(out, "{}- {}", "  ".repeat(depth), category_line(node));
    if subtrees {
        for child in &node.children {
            render_node(out, child, depth + 1, subtrees);
        }
    }
}

/// Breadcrumb from the root down, e.g. `Mens > Shoes`.
pub fn render_path(path: &[Category]) -> String {
    let names: Vec<&str> = path.iter().map(|c| c.name.as_str()).collect();
    format!("{}\n", names.join(" > "))
}
