//! Basket aggregate root
//!
//! The basket owns the flat list of line items. Vendor groupings and grand
//! totals are derived state: after every mutation that changes the item list
//! they are thrown away and rebuilt from scratch, so they can never drift
//! from the items they summarise.
//!
//! No operation here fails. Unknown ids, zero quantities, removals on an
//! empty basket and changes whose totals would overflow `Decimal` all
//! degrade to no-ops.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use tracing::{debug, trace, warn};

use super::{LineItem, VendorGroup};
use crate::domain::ports::{Clock, SystemClock};
use crate::domain::value_objects::{BasketTotals, LineItemId, NewLineItem};

/// The single mutable shopping basket of an app session.
#[derive(Debug, Clone)]
pub struct Basket<C: Clock = SystemClock> {
    items: Vec<LineItem>,
    vendors: BTreeMap<i64, VendorGroup>,
    totals: BasketTotals,
    next_seq: u64,
    clock: C,
}

impl Basket<SystemClock> {
    /// Create an empty basket stamping ids with wall-clock time.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for Basket<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Basket<C> {
    /// Create an empty basket stamping ids with the given clock.
    pub fn with_clock(clock: C) -> Self {
        Self {
            items: Vec::new(),
            vendors: BTreeMap::new(),
            totals: BasketTotals::default(),
            next_seq: 0,
            clock,
        }
    }

    /// Add a product to the basket.
    ///
    /// If the same product from the same vendor is already present the
    /// quantities are merged into that line item; otherwise a new line item
    /// is appended. Returns the id of the affected line item, or `None` when
    /// nothing changed: `quantity` is zero, or the resulting amounts would
    /// not fit in a `Decimal`.
    pub fn add_item(&mut self, request: NewLineItem) -> Option<LineItemId> {
        if request.quantity == 0 {
            debug!(
                product_id = request.product_id,
                vendor_id = request.vendor_id,
                "ignoring add with zero quantity"
            );
            return None;
        }
        let request = clamp_amounts(request);
        let (product_id, vendor_id, quantity) =
            (request.product_id, request.vendor_id, request.quantity);

        let mut items = self.items.clone();
        let (id, appended) = match items
            .iter_mut()
            .find(|item| item.matches(product_id, vendor_id))
        {
            Some(existing) => {
                existing.add_quantity(quantity);
                (existing.id().clone(), false)
            }
            None => {
                let id = LineItemId::generate(
                    product_id,
                    vendor_id,
                    self.clock.now_millis(),
                    self.next_seq,
                );
                items.push(LineItem::from_request(id.clone(), request));
                (id, true)
            }
        };

        if !self.commit(items) {
            warn!(product_id, vendor_id, quantity, "add ignored: basket totals would overflow");
            return None;
        }
        if appended {
            self.next_seq += 1;
            debug!(%id, quantity, "appended line item");
        } else {
            debug!(%id, added = quantity, "merged into existing line item");
        }
        Some(id)
    }

    /// Remove a line item. Returns `false` (and changes nothing) if absent.
    pub fn remove_item(&mut self, id: &LineItemId) -> bool {
        let Some(index) = self.position(id) else {
            trace!(%id, "remove of unknown line item ignored");
            return false;
        };
        let mut items = self.items.clone();
        items.remove(index);
        // Dropping non-negative amounts cannot overflow
        let removed = self.commit(items);
        debug!(%id, "removed line item");
        removed
    }

    /// Set a line item's quantity; zero or below removes the item.
    ///
    /// Returns `false` when the id is unknown or the new quantity would
    /// push the basket totals past the `Decimal` range.
    pub fn update_quantity(&mut self, id: &LineItemId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove_item(id);
        }
        let Some(index) = self.position(id) else {
            trace!(%id, "quantity update of unknown line item ignored");
            return false;
        };
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        let mut items = self.items.clone();
        items[index].set_quantity(quantity);

        if !self.commit(items) {
            warn!(%id, quantity, "quantity update ignored: basket totals would overflow");
            return false;
        }
        debug!(%id, quantity, "updated line item quantity");
        true
    }

    /// Empty the basket and reset every total to zero.
    pub fn clear(&mut self) {
        self.items.clear();
        self.vendors.clear();
        self.totals = BasketTotals::default();
        debug!("cleared basket");
    }

    /// All line items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn item(&self, id: &LineItemId) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// The line item for a product/vendor pairing, if present.
    pub fn find(&self, product_id: i64, vendor_id: i64) -> Option<&LineItem> {
        self.items
            .iter()
            .find(|item| item.matches(product_id, vendor_id))
    }

    /// Vendor groupings keyed by vendor id (ascending).
    pub fn vendors(&self) -> &BTreeMap<i64, VendorGroup> {
        &self.vendors
    }

    pub fn vendor(&self, vendor_id: i64) -> Option<&VendorGroup> {
        self.vendors.get(&vendor_id)
    }

    pub fn totals(&self) -> &BasketTotals {
        &self.totals
    }

    pub fn subtotal(&self) -> Decimal {
        self.totals.subtotal
    }

    pub fn total_protection_fee(&self) -> Decimal {
        self.totals.protection_fee
    }

    pub fn total(&self) -> Decimal {
        self.totals.total
    }

    /// Sum of quantities across all line items
    pub fn item_count(&self) -> u64 {
        self.totals.item_count
    }

    /// Number of distinct line items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, id: &LineItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    /// Replace the item list if its derived state is representable.
    /// On overflow the basket is left untouched and `false` is returned.
    fn commit(&mut self, items: Vec<LineItem>) -> bool {
        let Some((totals, vendors)) = recompute_derived(&items) else {
            return false;
        };
        trace!(
            items = items.len(),
            vendors = vendors.len(),
            subtotal = %totals.subtotal,
            total = %totals.total,
            "recomputed basket totals"
        );
        self.items = items;
        self.totals = totals;
        self.vendors = vendors;
        true
    }
}

/// Rebuild totals and vendor groups from an item list.
///
/// Every mutation ends here; there is no incremental path. Returns `None`
/// when any amount exceeds the `Decimal` range. Vendor sums are bounded by
/// the grand sums since every amount is non-negative.
fn recompute_derived(items: &[LineItem]) -> Option<(BasketTotals, BTreeMap<i64, VendorGroup>)> {
    let mut totals = BasketTotals::default();
    let mut vendors: BTreeMap<i64, VendorGroup> = BTreeMap::new();

    for item in items {
        totals.subtotal = totals.subtotal.checked_add(item.checked_line_total()?)?;
        totals.protection_fee = totals
            .protection_fee
            .checked_add(item.checked_protection_fee()?)?;
        totals.item_count += u64::from(item.quantity());

        vendors
            .entry(item.vendor_id())
            .or_insert_with(|| VendorGroup::seeded_by(item))
            .push(item);
    }
    totals.total = totals.subtotal.checked_add(totals.protection_fee)?;

    Some((totals, vendors))
}

fn clamp_amounts(mut request: NewLineItem) -> NewLineItem {
    if request.price.is_sign_negative() && !request.price.is_zero() {
        warn!(
            product_id = request.product_id,
            price = %request.price,
            "negative price clamped to zero"
        );
        request.price = Decimal::ZERO;
    }
    if request.protection_fee_percentage.is_sign_negative()
        && !request.protection_fee_percentage.is_zero()
    {
        warn!(
            product_id = request.product_id,
            percentage = %request.protection_fee_percentage,
            "negative protection fee percentage clamped to zero"
        );
        request.protection_fee_percentage = Decimal::ZERO;
    }
    request
}
