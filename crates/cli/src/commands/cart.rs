//! Cart and checkout commands.

use tracing::{info, warn};

use super::notify;

use shelf_core::{AddressId, ProductId};
use shelf_storefront::error::{Notice, Result};
use shelf_storefront::filters::format_price;
use shelf_storefront::state::AppState;

pub fn show(state: &AppState) {
    let cart = state.cart();
    let items = cart.cart_with_details();
    if items.is_empty() {
        notify(&Notice::info("Your cart is empty"));
        return;
    }
    for item in &items {
        let product = &item.product;
        info!(
            "#{:<3} {:<36} {:>3} x {:>12} = {:>12}",
            product.id.as_u32(),
            product.name,
            item.quantity(),
            product.unit_price().display(),
            format_price(item.line_total())
        );
        if item.quantity() > product.stock {
            warn!(
                "Only {} of #{} left in stock",
                product.stock, product.id
            );
        }
    }
    info!(
        "{} items, total {}",
        cart.cart_count(),
        format_price(cart.cart_total())
    );
}

/// # Errors
///
/// Returns an error if the product is unknown or the quantity is not available.
pub fn add(state: &AppState, product: ProductId, quantity: u32) -> Result<()> {
    let cart = state.cart();
    let line = cart.add_to_cart(product, quantity)?;
    notify(&Notice::success(format!(
        "Added to cart: #{} now x{} ({} items in cart)",
        line.product_id,
        line.quantity,
        cart.cart_count()
    )));
    Ok(())
}

/// # Errors
///
/// Returns an error if the product is unknown, not in the cart, or the
/// quantity is not available.
pub fn update(state: &AppState, product: ProductId, quantity: u32) -> Result<()> {
    let cart = state.cart();
    match cart.update_quantity(product, quantity)? {
        Some(line) => notify(&Notice::success(format!(
            "Cart updated: #{} x{}",
            line.product_id, line.quantity
        ))),
        None => notify(&Notice::success(format!("Removed #{product} from cart"))),
    }
    Ok(())
}

pub fn remove(state: &AppState, product: ProductId) {
    state.cart().remove_from_cart(product);
    notify(&Notice::success(format!("Removed #{product} from cart")));
}

pub fn clear(state: &AppState) {
    state.cart().clear_cart();
    notify(&Notice::success("Cart cleared"));
}

/// Place an order, to `address` or else the default address.
///
/// # Errors
///
/// Returns an error if nobody is logged in, the cart is empty, or there is
/// no usable address.
pub fn checkout(state: &AppState, address: Option<AddressId>) -> Result<()> {
    let checkout = state.checkout();
    let order = match address {
        Some(id) => checkout.place_order(id)?,
        None => checkout.place_order_to_default()?,
    };
    notify(&Notice::success(format!("Order placed: {}", order.id)));
    info!(
        "{} items, total {}, shipping to {}",
        order.item_count(),
        format_price(order.total),
        order.address.summary()
    );
    Ok(())
}
