//! Add-to-basket request

use rust_decimal::Decimal;

/// Everything a product screen knows when it adds a product to the basket.
///
/// `quantity` must be positive and `price`/`protection_fee_percentage`
/// non-negative; the basket treats a zero quantity as a no-op and clamps
/// negative amounts to zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLineItem {
    pub product_id: i64,
    pub vendor_id: i64,
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
    pub image: String,
    pub vendor_name: String,
    /// Fraction of the line total charged as protection fee (e.g. `0.072`)
    pub protection_fee_percentage: Decimal,
}

impl NewLineItem {
    /// A single unit of a product with no image, vendor name or protection fee.
    pub fn new(product_id: i64, vendor_id: i64, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            product_id,
            vendor_id,
            name: name.into(),
            price,
            quantity: 1,
            image: String::new(),
            vendor_name: String::new(),
            protection_fee_percentage: Decimal::ZERO,
        }
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_vendor_name(mut self, vendor_name: impl Into<String>) -> Self {
        self.vendor_name = vendor_name.into();
        self
    }

    pub fn with_protection_fee(mut self, percentage: Decimal) -> Self {
        self.protection_fee_percentage = percentage;
        self
    }
}
