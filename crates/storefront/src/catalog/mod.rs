//! Read-only product catalog.
//!
//! The catalog is the authority for price and stock at the moment an engine
//! acts. It never changes after construction; a different catalog means a
//! different `Catalog` value.

mod seed;

use std::cmp::Ordering;
use std::str::FromStr;

use rust_decimal::Decimal;

use shelf_core::{CategoryId, ProductId};

use crate::models::{Category, Product};

/// Static product and category list.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<Category>,
}

/// Browse filter. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    /// Case-insensitive substring of name or description.
    pub search: Option<String>,
    pub category: Option<CategoryId>,
    /// Inclusive lower price bound.
    pub min_price: Option<Decimal>,
    /// Inclusive upper price bound.
    pub max_price: Option<Decimal>,
}

/// Browse ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    /// Catalog order.
    #[default]
    Default,
    PriceAsc,
    PriceDesc,
    Name,
    /// Highest rated first.
    Rating,
}

impl FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "default" => Ok(Self::Default),
            "price-asc" => Ok(Self::PriceAsc),
            "price-desc" => Ok(Self::PriceDesc),
            "name" => Ok(Self::Name),
            "rating" => Ok(Self::Rating),
            other => Err(format!("invalid sort order: {other}")),
        }
    }
}

impl Catalog {
    /// Build a catalog from explicit data.
    #[must_use]
    pub const fn new(products: Vec<Product>, categories: Vec<Category>) -> Self {
        Self {
            products,
            categories,
        }
    }

    /// The built-in demo catalog.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(seed::products(), seed::categories())
    }

    /// Product by ID.
    #[must_use]
    pub fn find_by_id(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Every product, in catalog order.
    #[must_use]
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    /// Products in one category.
    #[must_use]
    pub fn list_by_category(&self, category: CategoryId) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category_id == category)
            .collect()
    }

    /// Case-insensitive substring search over name and description.
    ///
    /// A blank query returns every product.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let needle = query.trim().to_lowercase();
        self.products
            .iter()
            .filter(|p| matches_search(p, &needle))
            .collect()
    }

    /// Products flagged as featured.
    #[must_use]
    pub fn featured(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_featured).collect()
    }

    /// Products flagged as new.
    #[must_use]
    pub fn new_arrivals(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_new).collect()
    }

    /// Every category.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Category by ID.
    #[must_use]
    pub fn category_by_id(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Apply every set field of `filter`.
    #[must_use]
    pub fn filter(&self, filter: &ProductFilter) -> Vec<&Product> {
        let needle = filter
            .search
            .as_deref()
            .map(|q| q.trim().to_lowercase())
            .unwrap_or_default();

        self.products
            .iter()
            .filter(|p| matches_search(p, &needle))
            .filter(|p| filter.category.is_none_or(|c| p.category_id == c))
            .filter(|p| filter.min_price.is_none_or(|min| p.price >= min))
            .filter(|p| filter.max_price.is_none_or(|max| p.price <= max))
            .collect()
    }
}

/// Reorder `products` in place. The sort is stable, so ties keep catalog order.
pub fn sort_products(products: &mut [&Product], sort_by: SortBy) {
    let compare: fn(&&Product, &&Product) -> Ordering = match sort_by {
        SortBy::Default => return,
        SortBy::PriceAsc => |a: &&Product, b: &&Product| a.price.cmp(&b.price),
        SortBy::PriceDesc => |a: &&Product, b: &&Product| b.price.cmp(&a.price),
        SortBy::Name => |a: &&Product, b: &&Product| {
            a.name.to_lowercase().cmp(&b.name.to_lowercase())
        },
        SortBy::Rating => |a: &&Product, b: &&Product| b.rating.total_cmp(&a.rating),
    };
    products.sort_by(compare);
}

fn matches_search(product: &Product, needle: &str) -> bool {
    needle.is_empty()
        || product.name.to_lowercase().contains(needle)
        || product.description.to_lowercase().contains(needle)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn ids(products: &[&Product]) -> Vec<u32> {
        products.iter().map(|p| p.id.as_u32()).collect()
    }

    #[test]
    fn test_seeded_catalog_is_consistent() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.categories().len(), 12);
        assert!(!catalog.list().is_empty());

        for product in catalog.list() {
            assert!(
                catalog.category_by_id(product.category_id).is_some(),
                "product {} has unknown category",
                product.id
            );
            assert!((0.0..=5.0).contains(&product.rating));
            assert!(product.price > Decimal::ZERO);
        }

        let mut seen: Vec<u32> = catalog.list().iter().map(|p| p.id.as_u32()).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), catalog.list().len(), "duplicate product ids");
    }

    #[test]
    fn test_find_by_id() {
        let catalog = Catalog::seeded();
        let first = catalog.list().first().unwrap();
        assert_eq!(catalog.find_by_id(first.id), Some(first));
        assert_eq!(catalog.find_by_id(ProductId::new(99_999)), None);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = Catalog::seeded();
        let hits = catalog.search("  LAPTOP ");
        assert!(!hits.is_empty());
        assert!(hits.iter().all(|p| {
            p.name.to_lowercase().contains("laptop")
                || p.description.to_lowercase().contains("laptop")
        }));
        assert_eq!(catalog.search("").len(), catalog.list().len());
        assert!(catalog.search("no such thing anywhere").is_empty());
    }

    #[test]
    fn test_filter_combines_fields() {
        let catalog = Catalog::seeded();
        let filter = ProductFilter {
            category: Some(CategoryId::new(3)),
            max_price: Some(Decimal::new(5000, 0)),
            ..ProductFilter::default()
        };
        let hits = catalog.filter(&filter);
        assert!(!hits.is_empty());
        assert!(hits.iter().all(|p| p.category_id == CategoryId::new(3)));
        assert!(hits.iter().all(|p| p.price <= Decimal::new(5000, 0)));

        assert_eq!(
            catalog.filter(&ProductFilter::default()).len(),
            catalog.list().len()
        );
    }

    #[test]
    fn test_list_by_category_matches_filter() {
        let catalog = Catalog::seeded();
        let category = CategoryId::new(2);
        let filter = ProductFilter {
            category: Some(category),
            ..ProductFilter::default()
        };
        assert_eq!(
            ids(&catalog.list_by_category(category)),
            ids(&catalog.filter(&filter))
        );
    }

    #[test]
    fn test_sort_orders() {
        let catalog = Catalog::seeded();
        let mut products: Vec<&Product> = catalog.list().iter().collect();

        sort_products(&mut products, SortBy::PriceAsc);
        assert!(products.windows(2).all(|w| w[0].price <= w[1].price));

        sort_products(&mut products, SortBy::PriceDesc);
        assert!(products.windows(2).all(|w| w[0].price >= w[1].price));

        sort_products(&mut products, SortBy::Rating);
        assert!(products.windows(2).all(|w| w[0].rating >= w[1].rating));
    }

    #[test]
    fn test_sort_by_parse() {
        assert_eq!("price-asc".parse::<SortBy>().unwrap(), SortBy::PriceAsc);
        assert_eq!("".parse::<SortBy>().unwrap(), SortBy::Default);
        assert!("cheapest".parse::<SortBy>().is_err());
    }
}
