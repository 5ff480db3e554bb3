//! Catalog browsing commands.

use tracing::info;

use shelf_core::ProductId;
use shelf_storefront::catalog::{ProductFilter, SortBy, sort_products};
use shelf_storefront::error::{AppError, Result};
use shelf_storefront::filters::{format_price, star_rating, truncate};
use shelf_storefront::models::Product;
use shelf_storefront::state::AppState;

const NAME_WIDTH: usize = 36;

pub fn list(state: &AppState, filter: &ProductFilter, sort: SortBy) {
    let mut products = state.catalog().filter(filter);
    sort_products(&mut products, sort);
    print_table(&products);
}

pub fn search(state: &AppState, query: &str, sort: SortBy) {
    let mut products = state.catalog().search(query);
    sort_products(&mut products, sort);
    print_table(&products);
}

/// Show one product in detail.
///
/// # Errors
///
/// Returns `AppError::NotFound` if the catalog has no such product.
pub fn show(state: &AppState, id: ProductId) -> Result<()> {
    let catalog = state.catalog();
    let product = catalog
        .find_by_id(id)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    info!("#{} {}", product.id, product.name);
    info!("{}", product.description);
    match (product.old_price, product.discount_percent()) {
        (Some(old), Some(off)) => info!(
            "Price: {} (was {}, {off}% off)",
            format_price(product.price),
            format_price(old)
        ),
        _ => info!("Price: {}", format_price(product.price)),
    }
    info!("Rating: {} {:.1}", star_rating(product.rating), product.rating);
    if let Some(category) = catalog.category_by_id(product.category_id) {
        info!("Category: {}", category.name);
    }
    if product.in_stock() {
        info!(
            "In stock: {} (up to {} per order)",
            product.stock,
            product.max_orderable(state.cart().max_quantity())
        );
    } else {
        info!("Out of stock");
    }
    Ok(())
}

pub fn categories(state: &AppState) {
    let catalog = state.catalog();
    for category in catalog.categories() {
        let count = catalog.list_by_category(category.id).len();
        info!(
            "#{:<3} {:<18} {count:>3} products  {}",
            category.id.as_u32(),
            category.name,
            category.description
        );
    }
}

fn print_table(products: &[&Product]) {
    if products.is_empty() {
        info!("No products found");
        return;
    }
    for product in products {
        let mut flags = String::new();
        if product.is_new {
            flags.push_str(" [new]");
        }
        if !product.in_stock() {
            flags.push_str(" [sold out]");
        }
        info!(
            "#{:<3} {:<width$} {:>12}  {}{flags}",
            product.id.as_u32(),
            truncate(&product.name, NAME_WIDTH),
            format_price(product.price),
            star_rating(product.rating),
            width = NAME_WIDTH + 3,
        );
    }
    info!("{} products", products.len());
}
