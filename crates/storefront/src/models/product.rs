//! Catalog records.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use shelf_core::{CategoryId, Price, ProductId};

/// A product listed in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Current unit price in the shop currency.
    pub price: Decimal,
    /// Pre-discount price, shown struck through.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_price: Option<Decimal>,
    /// Units available.
    pub stock: u32,
    /// Average review score, 0.0 to 5.0.
    pub rating: f32,
    pub category_id: CategoryId,
    pub is_new: bool,
    pub is_featured: bool,
    /// Image URL.
    pub image: String,
}

impl Product {
    /// Whether at least one unit is available.
    #[must_use]
    pub const fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Largest quantity one cart line may hold, given a per-line cap.
    #[must_use]
    pub fn max_orderable(&self, cap: u32) -> u32 {
        self.stock.min(cap)
    }

    /// Unit price as a display-ready value.
    #[must_use]
    pub fn unit_price(&self) -> Price {
        Price::shop(self.price)
    }

    /// Percentage saved against `old_price`, rounded down.
    #[must_use]
    pub fn discount_percent(&self) -> Option<u32> {
        let old = self.old_price.filter(|old| *old > self.price)?;
        let saved = (old - self.price) * Decimal::ONE_HUNDRED / old;
        saved.trunc().to_u32()
    }
}

/// A product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub description: String,
    pub image: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(price: i64, old_price: Option<i64>, stock: u32) -> Product {
        Product {
            id: ProductId::new(1),
            name: "Kettle".to_string(),
            description: "Boils water".to_string(),
            price: Decimal::new(price, 0),
            old_price: old_price.map(|p| Decimal::new(p, 0)),
            stock,
            rating: 4.0,
            category_id: CategoryId::new(4),
            is_new: false,
            is_featured: false,
            image: String::new(),
        }
    }

    #[test]
    fn test_max_orderable_is_tighter_bound() {
        assert_eq!(product(10, None, 3).max_orderable(10), 3);
        assert_eq!(product(10, None, 50).max_orderable(10), 10);
        assert!(!product(10, None, 0).in_stock());
    }

    #[test]
    fn test_discount_percent() {
        assert_eq!(product(75, Some(100), 1).discount_percent(), Some(25));
        assert_eq!(product(90, Some(300), 1).discount_percent(), Some(70));
        assert_eq!(product(100, Some(100), 1).discount_percent(), None);
        assert_eq!(product(100, None, 1).discount_percent(), None);
    }
}
