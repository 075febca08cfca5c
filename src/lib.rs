//! Bazaar - basket and category logic for a second-hand marketplace
//!
//! Bazaar keeps the client-side state behind the basket and discovery
//! screens: a multi-vendor basket with per-vendor subtotals and buyer
//! protection fees, and read-only navigation over the category tree served
//! by the search backend.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use config::Config;
pub use domain::entities::{Basket, Category, LineItem, VendorGroup};
pub use domain::ports::{Clock, SystemClock};
pub use domain::services::{
    all_leaves, filter, find_by_id, find_by_slug, path_to, sort_by_weight, walk,
};
pub use domain::value_objects::{BasketTotals, CategoryWeights, LineItemId, NewLineItem};
pub use error::{BazaarError, BazaarResult};
