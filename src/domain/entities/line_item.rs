//! Line item entity - one product/vendor pairing in the basket

use rust_decimal::Decimal;

use crate::domain::value_objects::{LineItemId, NewLineItem};

/// A basket entry.
///
/// Only the sources (price, quantity, percentage) are stored; `line_total`
/// and `protection_fee` are computed on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    id: LineItemId,
    product_id: i64,
    name: String,
    price: Decimal,
    quantity: u32,
    image: String,
    vendor_id: i64,
    vendor_name: String,
    protection_fee_percentage: Decimal,
}

impl LineItem {
    /// Create a line item from an add request.
    ///
    /// Callers must have rejected a zero quantity already.
    pub(crate) fn from_request(id: LineItemId, request: NewLineItem) -> Self {
        debug_assert!(request.quantity > 0);
        Self {
            id,
            product_id: request.product_id,
            name: request.name,
            price: request.price,
            quantity: request.quantity,
            image: request.image,
            vendor_id: request.vendor_id,
            vendor_name: request.vendor_name,
            protection_fee_percentage: request.protection_fee_percentage,
        }
    }

    pub fn id(&self) -> &LineItemId {
        &self.id
    }

    pub fn product_id(&self) -> i64 {
        self.product_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price
    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn vendor_id(&self) -> i64 {
        self.vendor_id
    }

    pub fn vendor_name(&self) -> &str {
        &self.vendor_name
    }

    pub fn protection_fee_percentage(&self) -> Decimal {
        self.protection_fee_percentage
    }

    /// `price × quantity`
    ///
    /// A basket only holds items whose amounts passed `checked_line_total`
    /// and `checked_protection_fee`, so this cannot overflow for them.
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }

    /// `line_total × protection_fee_percentage`
    pub fn protection_fee(&self) -> Decimal {
        self.line_total() * self.protection_fee_percentage
    }

    /// `line_total`, or `None` if it exceeds the `Decimal` range.
    pub fn checked_line_total(&self) -> Option<Decimal> {
        self.price.checked_mul(Decimal::from(self.quantity))
    }

    /// `protection_fee`, or `None` if it exceeds the `Decimal` range.
    pub fn checked_protection_fee(&self) -> Option<Decimal> {
        self.checked_line_total()?
            .checked_mul(self.protection_fee_percentage)
    }

    /// Whether this item is the given product sold by the given vendor.
    pub fn matches(&self, product_id: i64, vendor_id: i64) -> bool {
        self.product_id == product_id && self.vendor_id == vendor_id
    }

    pub(crate) fn add_quantity(&mut self, quantity: u32) {
        self.quantity = self.quantity.saturating_add(quantity);
    }

    pub(crate) fn set_quantity(&mut self, quantity: u32) {
        debug_assert!(quantity > 0);
        self.quantity = quantity;
    }
}
