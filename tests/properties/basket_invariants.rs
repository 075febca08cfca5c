//! Property tests for basket derived state.

use proptest::prelude::*;
use rust_decimal::Decimal;

use bazaar::infrastructure::SteppingClock;
use bazaar::{Basket, LineItemId, NewLineItem};

#[derive(Debug, Clone)]
enum Op {
    Add {
        product_id: i64,
        vendor_id: i64,
        price_cents: i64,
        quantity: u32,
        fee_permille: i64,
    },
    Remove(usize),
    RemoveMissing,
    Update(usize, i64),
    Clear,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0i64..5, 0i64..3, 0i64..50_000, 0u32..6, 0i64..150).prop_map(
            |(product_id, vendor_id, price_cents, quantity, fee_permille)| Op::Add {
                product_id,
                vendor_id,
                price_cents,
                quantity,
                fee_permille,
            }
        ),
        1 => any::<usize>().prop_map(Op::Remove),
        1 => Just(Op::RemoveMissing),
        2 => (any::<usize>(), -6i64..12).prop_map(|(i, q)| Op::Update(i, q)),
        1 => Just(Op::Clear),
    ]
}

fn new_basket() -> Basket<SteppingClock> {
    Basket::with_clock(SteppingClock::new(1_700_000_000_000, 1))
}

fn nth_id(basket: &Basket<SteppingClock>, index: usize) -> Option<LineItemId> {
    if basket.is_empty() {
        return None;
    }
    Some(basket.items()[index % basket.len()].id().clone())
}

fn apply(basket: &mut Basket<SteppingClock>, op: &Op) {
    match op {
        Op::Add {
            product_id,
            vendor_id,
            price_cents,
            quantity,
            fee_permille,
        } => {
            basket.add_item(
                NewLineItem::new(
                    *product_id,
                    *vendor_id,
                    format!("Product {}", product_id),
                    Decimal::new(*price_cents, 2),
                )
                .with_quantity(*quantity)
                .with_vendor_name(format!("Vendor {}", vendor_id))
                .with_protection_fee(Decimal::new(*fee_permille, 3)),
            );
        }
        Op::Remove(index) => {
            if let Some(id) = nth_id(basket, *index) {
                basket.remove_item(&id);
            }
        }
        Op::RemoveMissing => {
            basket.remove_item(&LineItemId::from("no-such-item"));
        }
        Op::Update(index, quantity) => {
            if let Some(id) = nth_id(basket, *index) {
                basket.update_quantity(&id, *quantity);
            }
        }
        Op::Clear => basket.clear(),
    }
}

fn check_consistency(basket: &Basket<SteppingClock>) -> Result<(), TestCaseError> {
    let items = basket.items();

    let subtotal: Decimal = items.iter().map(|i| i.price() * Decimal::from(i.quantity())).sum();
    let fees: Decimal = items.iter().map(|i| i.protection_fee()).sum();
    let count: u64 = items.iter().map(|i| u64::from(i.quantity())).sum();

    prop_assert_eq!(basket.subtotal(), subtotal);
    prop_assert_eq!(basket.total_protection_fee(), fees);
    prop_assert_eq!(basket.total(), basket.subtotal() + basket.total_protection_fee());
    prop_assert_eq!(basket.item_count(), count);
    prop_assert!(items.iter().all(|i| i.quantity() >= 1));

    for item in items {
        let holders: Vec<i64> = basket
            .vendors()
            .values()
            .filter(|g| g.items().iter().any(|grouped| grouped.id() == item.id()))
            .map(|g| g.vendor_id())
            .collect();
        prop_assert_eq!(holders, vec![item.vendor_id()]);
    }

    let grouped: usize = basket.vendors().values().map(|g| g.items().len()).sum();
    prop_assert_eq!(grouped, items.len());

    for (vendor_id, group) in basket.vendors() {
        let expected: u64 = items
            .iter()
            .filter(|i| i.vendor_id() == *vendor_id)
            .map(|i| u64::from(i.quantity()))
            .sum();
        prop_assert!(expected > 0, "empty vendor group {}", vendor_id);
        prop_assert_eq!(group.item_count(), expected);
        prop_assert_eq!(group.total(), group.subtotal() + group.protection_fee());
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: totals and vendor groups match the item list after every mutation.
    #[test]
    fn property_derived_state_is_consistent(ops in proptest::collection::vec(op(), 0..40)) {
        let mut basket = new_basket();
        check_consistency(&basket)?;
        for op in &ops {
            apply(&mut basket, op);
            check_consistency(&basket)?;
        }
    }

    /// PROPERTY: adding the same product/vendor twice merges into one line.
    #[test]
    fn property_repeat_add_merges(
        product_id in 0i64..1000,
        vendor_id in 0i64..1000,
        first in 1u32..50,
        second in 1u32..50,
    ) {
        let mut basket = new_basket();
        let a = basket.add_item(NewLineItem::new(product_id, vendor_id, "Item", Decimal::ONE).with_quantity(first));
        let b = basket.add_item(NewLineItem::new(product_id, vendor_id, "Item", Decimal::ONE).with_quantity(second));

        prop_assert_eq!(a, b);
        prop_assert_eq!(basket.len(), 1);
        prop_assert_eq!(basket.items()[0].quantity(), first + second);
    }

    /// PROPERTY: removing an unknown id leaves the basket untouched.
    #[test]
    fn property_remove_missing_is_noop(ops in proptest::collection::vec(op(), 0..20)) {
        let mut basket = new_basket();
        for op in &ops {
            apply(&mut basket, op);
        }
        let items = basket.items().to_vec();
        let vendors = basket.vendors().clone();
        let totals = *basket.totals();

        prop_assert!(!basket.remove_item(&LineItemId::from("0-0-0-999999")));
        prop_assert_eq!(basket.items(), items.as_slice());
        prop_assert_eq!(basket.vendors(), &vendors);
        prop_assert_eq!(basket.totals(), &totals);
    }

    /// PROPERTY: a non-positive quantity update removes the item.
    #[test]
    fn property_non_positive_update_removes(quantity in -100i64..=0, start in 1u32..20) {
        let mut basket = new_basket();
        let id = basket
            .add_item(NewLineItem::new(1, 1, "Item", Decimal::TEN).with_quantity(start))
            .unwrap();

        prop_assert!(basket.update_quantity(&id, quantity));
        prop_assert!(basket.is_empty());
        prop_assert!(basket.vendors().is_empty());
        prop_assert!(basket.totals().is_zero());
    }
}
