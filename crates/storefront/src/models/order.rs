//! Order records.
//!
//! An order is a frozen copy: line prices, names, images, and the delivery
//! address are duplicated at creation time so later catalog or address-book
//! edits never reach historical orders. Only `status` and `updated_at` change
//! afterwards.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shelf_core::{OrderId, OrderStatus, ProductId};

use super::{Address, CartItem};

/// Price-locked copy of one cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub product_id: ProductId,
    pub product_name: String,
    pub product_image: String,
    pub price: Decimal,
    pub quantity: u32,
}

impl OrderLine {
    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

impl From<&CartItem> for OrderLine {
    fn from(item: &CartItem) -> Self {
        Self {
            product_id: item.line.product_id,
            product_name: item.product.name.clone(),
            product_image: item.product.image.clone(),
            price: item.product.price,
            quantity: item.line.quantity,
        }
    }
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub items: Vec<OrderLine>,
    /// Delivery address as it was when the order was placed.
    pub address: Address,
    pub total: Decimal,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Total units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|line| line.quantity).sum()
    }
}
