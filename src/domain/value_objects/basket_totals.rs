//! Basket-wide totals

use rust_decimal::Decimal;

/// Grand totals derived from the basket's item list.
///
/// Always produced by a full recomputation; never patched in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BasketTotals {
    /// Sum of every line total
    pub subtotal: Decimal,
    /// Sum of every line's protection fee
    pub protection_fee: Decimal,
    /// `subtotal + protection_fee`
    pub total: Decimal,
    /// Sum of quantities across all line items
    pub item_count: u64,
}

impl BasketTotals {
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}
