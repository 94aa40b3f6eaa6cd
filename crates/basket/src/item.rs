//! Basket line items.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use uplift_core::Price;

/// One product line in the basket.
///
/// Serde field names match the durable storage layout: `name`, `price`,
/// `quantity`, `image`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product name; unique within a basket.
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Number of units; always at least one.
    pub quantity: u32,
    /// Image tag used by the presentation layer.
    pub image: String,
}

impl LineItem {
    /// Unit price times quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price.amount() * Decimal::from(self.quantity)
    }
}
