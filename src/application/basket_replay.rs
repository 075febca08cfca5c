//! Basket Replay Use Case
//!
//! Applies a recorded list of basket actions (the same add/remove/update/
//! clear calls product and basket screens make) to a basket and reports
//! which ones changed it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::entities::Basket;
use crate::domain::ports::Clock;
use crate::domain::value_objects::{LineItemId, NewLineItem};

fn default_quantity() -> u32 {
    1
}

/// The product a screen adds; mirrors `NewLineItem` with optional extras.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptItem {
    pub product_id: i64,
    pub vendor_id: i64,
    pub name: String,
    pub price: Decimal,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub vendor_name: String,
    /// Falls back to the configured default when absent
    #[serde(default)]
    pub protection_fee_percentage: Option<Decimal>,
}

/// Line items are generated at run time, so scripts address them by the
/// product/vendor pairing that identifies them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRef {
    pub product_id: i64,
    pub vendor_id: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantityChange {
    pub product_id: i64,
    pub vendor_id: i64,
    pub quantity: i64,
}

/// One recorded basket call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum BasketAction {
    Add(ScriptItem),
    Remove(ItemRef),
    Update(QuantityChange),
    Clear,
}

impl BasketAction {
    pub fn name(&self) -> &'static str {
        match self {
            BasketAction::Add(_) => "add",
            BasketAction::Remove(_) => "remove",
            BasketAction::Update(_) => "update",
            BasketAction::Clear => "clear",
        }
    }
}

/// What happened for a single action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepOutcome {
    pub index: usize,
    pub action: &'static str,
    pub changed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<LineItemId>,
}

/// Result of a replay run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReplayReport {
    pub steps: Vec<StepOutcome>,
}

impl ReplayReport {
    pub fn changed(&self) -> usize {
        self.steps.iter().filter(|s| s.changed).count()
    }

    pub fn ignored(&self) -> usize {
        self.steps.len() - self.changed()
    }
}

/// Replays actions against a basket.
#[derive(Debug, Clone)]
pub struct BasketReplay {
    default_protection_fee: Decimal,
}

impl BasketReplay {
    pub fn new(default_protection_fee: Decimal) -> Self {
        Self {
            default_protection_fee,
        }
    }

    /// Apply every action in order. Actions that target missing items are
    /// recorded as unchanged, never as failures.
    pub fn run<C: Clock>(&self, basket: &mut Basket<C>, actions: &[BasketAction]) -> ReplayReport {
        let steps: Vec<StepOutcome> = actions
            .iter()
            .enumerate()
            .map(|(index, action)| self.apply(basket, index, action))
            .collect();

        let report = ReplayReport { steps };
        info!(
            actions = actions.len(),
            changed = report.changed(),
            items = basket.len(),
            total = %basket.total(),
            "replayed basket script"
        );
        report
    }

    fn apply<C: Clock>(
        &self,
        basket: &mut Basket<C>,
        index: usize,
        action: &BasketAction,
    ) -> StepOutcome {
        let (changed, item_id) = match action {
            BasketAction::Add(item) => {
                let id = basket.add_item(self.to_request(item));
                (id.is_some(), id)
            }
            BasketAction::Remove(target) => match lookup(basket, target.product_id, target.vendor_id) {
                Some(id) => (basket.remove_item(&id), Some(id)),
                None => (false, None),
            },
            BasketAction::Update(change) => match lookup(basket, change.product_id, change.vendor_id) {
                Some(id) => (basket.update_quantity(&id, change.quantity), Some(id)),
                None => (false, None),
            },
            BasketAction::Clear => {
                let had_items = !basket.is_empty();
                basket.clear();
                (had_items, None)
            }
        };

        StepOutcome {
            index,
            action: action.name(),
            changed,
            item_id,
        }
    }

    fn to_request(&self, item: &ScriptItem) -> NewLineItem {
        NewLineItem::new(item.product_id, item.vendor_id, item.name.clone(), item.price)
            .with_quantity(item.quantity)
            .with_image(item.image.clone())
            .with_vendor_name(item.vendor_name.clone())
            .with_protection_fee(
                item.protection_fee_percentage
                    .unwrap_or(self.default_protection_fee),
            )
    }
}

fn lookup<C: Clock>(basket: &Basket<C>, product_id: i64, vendor_id: i64) -> Option<LineItemId> {
    basket.find(product_id, vendor_id).map(|item| item.id().clone())
}
