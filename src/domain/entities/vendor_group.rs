//! Vendor grouping - the basket partitioned by seller
//!
//! Groups are never stored on their own; the basket rebuilds all of them
//! from its item list after each mutation.

use rust_decimal::Decimal;

use super::LineItem;

/// Items in the basket sold by one vendor, with per-seller totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorGroup {
    vendor_id: i64,
    vendor_name: String,
    item_count: u64,
    subtotal: Decimal,
    protection_fee: Decimal,
    items: Vec<LineItem>,
}

impl VendorGroup {
    /// Start a group from the first item seen for its vendor.
    pub(crate) fn seeded_by(item: &LineItem) -> Self {
        Self {
            vendor_id: item.vendor_id(),
            vendor_name: item.vendor_name().to_string(),
            item_count: 0,
            subtotal: Decimal::ZERO,
            protection_fee: Decimal::ZERO,
            items: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, item: &LineItem) {
        self.item_count += u64::from(item.quantity());
        self.subtotal += item.line_total();
        self.protection_fee += item.protection_fee();
        self.items.push(item.clone());
    }

    pub fn vendor_id(&self) -> i64 {
        self.vendor_id
    }

    pub fn vendor_name(&self) -> &str {
        &self.vendor_name
    }

    /// Sum of quantities across this vendor's items
    pub fn item_count(&self) -> u64 {
        self.item_count
    }

    pub fn subtotal(&self) -> Decimal {
        self.subtotal
    }

    pub fn protection_fee(&self) -> Decimal {
        self.protection_fee
    }

    pub fn total(&self) -> Decimal {
        self.subtotal + self.protection_fee
    }

    /// This vendor's items, in basket order
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }
}
