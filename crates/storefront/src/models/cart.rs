//! Cart records.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shelf_core::ProductId;

use super::Product;

/// One stored cart line. Unique by `product_id` within a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: ProductId,
    pub quantity: u32,
    pub added_at: DateTime<Utc>,
}

/// A cart line joined with its live catalog product.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    #[serde(flatten)]
    pub line: CartLine,
    pub product: Product,
}

impl CartItem {
    /// Quantity on the line.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.line.quantity
    }

    /// Live unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.line.quantity)
    }
}
