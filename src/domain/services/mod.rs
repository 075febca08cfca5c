//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

pub mod category_navigator;

pub use category_navigator::{
    all_leaves, filter, find_by_id, find_by_slug, path_to, sort_by_weight, walk, Walk,
};
