//! CategorySource port - where category trees come from
//!
//! In the app this is the search backend; the CLI reads exported JSON.

use crate::domain::entities::Category;
use crate::error::BazaarResult;

/// Supplies a complete category tree per request.
pub trait CategorySource {
    fn load_tree(&self) -> BazaarResult<Vec<Category>>;
}
