//! Domain Entities
//!
//! Core domain entities that have identity and lifecycle.
//! - `Basket` - The session's shopping basket (aggregate root)
//! - `LineItem` - One product/vendor pairing inside the basket
//! - `VendorGroup` - Derived per-seller partition of the basket
//! - `Category` - A node of the product category tree

mod basket;
mod category;
mod line_item;
mod vendor_group;

pub use basket::Basket;
pub use category::Category;
pub use line_item::LineItem;
pub use vendor_group::VendorGroup;
