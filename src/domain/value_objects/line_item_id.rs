//! Line item identity
//!
//! Ids are synthesized from the product, the vendor, the insertion time and a
//! per-basket sequence number: `{product}-{vendor}-{millis}-{seq}`.

use serde::{Deserialize, Serialize};

/// Unique id of a basket line item, stable for the lifetime of the basket.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineItemId(String);

impl LineItemId {
    /// Build an id for a freshly inserted line item.
    pub fn generate(product_id: i64, vendor_id: i64, timestamp_ms: i64, seq: u64) -> Self {
        Self(format!("{}-{}-{}-{}", product_id, vendor_id, timestamp_ms, seq))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for LineItemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for LineItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl AsRef<str> for LineItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LineItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_joins_parts_with_dashes() {
        let id = LineItemId::generate(42, 7, 1_704_067_200_000, 3);
        assert_eq!(id.as_str(), "42-7-1704067200000-3");
    }

    #[test]
    fn generate_differs_by_sequence() {
        let a = LineItemId::generate(1, 1, 100, 0);
        let b = LineItemId::generate(1, 1, 100, 1);
        assert_ne!(a, b);
    }

    #[test]
    fn serde_is_transparent() {
        let id = LineItemId::from("1-2-3-4");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"1-2-3-4\"");
    }
}
