//! Integration tests for Shelf.
//!
//! The tests under `tests/` drive several engines against one shared store,
//! the way a front end does.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p shelf-integration-tests
//! ```

use std::path::Path;

use shelf_core::{CategoryId, ProductId};
use shelf_storefront::catalog::Catalog;
use shelf_storefront::config::StorefrontConfig;
use shelf_storefront::models::{Category, Product};
use shelf_storefront::state::AppState;
use shelf_storefront::storage::Storage;

pub use rust_decimal::Decimal;

/// Demo login email used by every test context.
pub const DEMO_EMAIL: &str = "haythem@example.com";
/// Demo login password used by every test context.
pub const DEMO_PASSWORD: &str = "123456";

/// In-memory state over the built-in catalog.
#[must_use]
pub fn memory_state() -> AppState {
    AppState::new(
        StorefrontConfig::default(),
        Storage::in_memory(),
        Catalog::seeded(),
    )
}

/// In-memory state over an explicit catalog.
#[must_use]
pub fn state_with_catalog(catalog: Catalog) -> AppState {
    AppState::new(StorefrontConfig::default(), Storage::in_memory(), catalog)
}

/// File-backed state rooted at `dir`.
///
/// # Panics
///
/// Panics if the directory cannot be created.
#[must_use]
#[allow(clippy::expect_used)]
pub fn file_state(dir: &Path) -> AppState {
    let config = StorefrontConfig {
        data_dir: dir.to_path_buf(),
        ..StorefrontConfig::default()
    };
    AppState::from_config(config).expect("Failed to open file store")
}

/// Log in as the demo account.
///
/// # Panics
///
/// Panics if the demo login is rejected.
#[allow(clippy::expect_used)]
pub fn login(state: &AppState) {
    state
        .auth()
        .login(DEMO_EMAIL, DEMO_PASSWORD)
        .expect("Demo login should succeed");
}

/// A product with whole-riyal `price` and the given `stock`.
#[must_use]
pub fn product(id: u32, price: i64, stock: u32) -> Product {
    Product {
        id: ProductId::new(id),
        name: format!("Test Product {id}"),
        description: format!("Description of product {id}"),
        price: Decimal::new(price, 0),
        old_price: None,
        stock,
        rating: 4.0,
        category_id: CategoryId::new(1),
        is_new: false,
        is_featured: false,
        image: format!("/images/products/{id}.jpg"),
    }
}

/// A one-category catalog holding `products`.
#[must_use]
pub fn catalog(products: Vec<Product>) -> Catalog {
    Catalog::new(
        products,
        vec![Category {
            id: CategoryId::new(1),
            name: "Test".to_string(),
            description: "Test category".to_string(),
            image: "/images/categories/test.jpg".to_string(),
        }],
    )
}
