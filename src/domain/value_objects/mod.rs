//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod basket_totals;
mod category_weights;
mod config_warning;
mod line_item_id;
mod new_line_item;

pub use basket_totals::BasketTotals;
pub use category_weights::{CategoryWeights, DEFAULT_CATEGORY_WEIGHT};
pub use config_warning::ConfigWarning;
pub use line_item_id::LineItemId;
pub use new_line_item::NewLineItem;
