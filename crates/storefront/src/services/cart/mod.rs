//! Cart service.
//!
//! The cart is an ordered list of [`CartLine`]s, unique by product. Each
//! mutation reads the whole list, checks the requested quantity against live
//! catalog stock and the per-line cap, and writes the whole list back.
//!
//! Reads join lines against the catalog. Lines whose product has vanished
//! are left out of the joined view but stay in storage.

mod error;

pub use error::CartError;

use chrono::Utc;
use rust_decimal::Decimal;

use shelf_core::ProductId;

use crate::catalog::Catalog;
use crate::models::{CartItem, CartLine, Product};
use crate::storage::{Storage, keys};

/// Cart service.
pub struct CartService<'a> {
    storage: &'a Storage,
    catalog: &'a Catalog,
    max_quantity: u32,
}

impl<'a> CartService<'a> {
    /// Create a new cart service with a per-line quantity cap.
    #[must_use]
    pub const fn new(storage: &'a Storage, catalog: &'a Catalog, max_quantity: u32) -> Self {
        Self {
            storage,
            catalog,
            max_quantity,
        }
    }

    /// The per-line quantity cap.
    #[must_use]
    pub const fn max_quantity(&self) -> u32 {
        self.max_quantity
    }

    /// Stored lines, unjoined.
    #[must_use]
    pub fn cart(&self) -> Vec<CartLine> {
        self.storage.get_or_default(keys::CART)
    }

    fn save_cart(&self, cart: &[CartLine]) {
        self.storage.set(keys::CART, cart);
    }

    /// Add `quantity` units, merging into an existing line.
    ///
    /// Returns the line as stored.
    ///
    /// # Errors
    ///
    /// - `CartError::InvalidQuantity` if `quantity` is zero.
    /// - `CartError::ProductNotFound` if the product is not in the catalog.
    /// - `CartError::InsufficientStock` if the merged quantity exceeds stock.
    /// - `CartError::QuantityCapExceeded` if the merged quantity exceeds the cap.
    pub fn add_to_cart(&self, product_id: ProductId, quantity: u32) -> Result<CartLine, CartError> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }
        let product = self.product(product_id)?;

        let mut cart = self.cart();
        let existing = cart.iter().position(|line| line.product_id == product_id);
        let current = existing
            .and_then(|i| cart.get(i))
            .map_or(0, |line| line.quantity);
        let requested = current.saturating_add(quantity);
        self.check_quantity(product, requested)?;

        let line = if let Some(line) = existing.and_then(|i| cart.get_mut(i)) {
            line.quantity = requested;
            line.clone()
        } else {
            let line = CartLine {
                product_id,
                quantity: requested,
                added_at: Utc::now(),
            };
            cart.push(line.clone());
            line
        };
        self.save_cart(&cart);

        tracing::info!(
            product_id = %product_id,
            added = quantity,
            quantity = line.quantity,
            "Added to cart"
        );
        Ok(line)
    }

    /// Set a line's quantity outright. Zero removes the line.
    ///
    /// Returns the updated line, or `None` when the line was removed.
    ///
    /// # Errors
    ///
    /// - `CartError::ProductNotFound` if the product is not in the catalog.
    /// - `CartError::InsufficientStock` if `quantity` exceeds stock.
    /// - `CartError::QuantityCapExceeded` if `quantity` exceeds the cap.
    /// - `CartError::ItemNotInCart` if there is no line to update.
    pub fn update_quantity(
        &self,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<Option<CartLine>, CartError> {
        if quantity == 0 {
            self.remove_from_cart(product_id);
            return Ok(None);
        }
        let product = self.product(product_id)?;
        self.check_quantity(product, quantity)?;

        let mut cart = self.cart();
        let line = cart
            .iter_mut()
            .find(|line| line.product_id == product_id)
            .ok_or(CartError::ItemNotInCart(product_id))?;
        line.quantity = quantity;
        let line = line.clone();
        self.save_cart(&cart);

        tracing::info!(product_id = %product_id, quantity, "Cart quantity updated");
        Ok(Some(line))
    }

    /// Drop a line. Missing lines are ignored.
    pub fn remove_from_cart(&self, product_id: ProductId) {
        let mut cart = self.cart();
        cart.retain(|line| line.product_id != product_id);
        self.save_cart(&cart);
        tracing::info!(product_id = %product_id, "Removed from cart");
    }

    /// Lines joined with live catalog products.
    #[must_use]
    pub fn cart_with_details(&self) -> Vec<CartItem> {
        self.cart()
            .into_iter()
            .filter_map(|line| {
                let Some(product) = self.catalog.find_by_id(line.product_id) else {
                    tracing::debug!(
                        product_id = %line.product_id,
                        "Cart line references unknown product"
                    );
                    return None;
                };
                Some(CartItem {
                    line,
                    product: product.clone(),
                })
            })
            .collect()
    }

    /// Units across the joined view.
    #[must_use]
    pub fn cart_count(&self) -> u32 {
        self.cart_with_details()
            .iter()
            .map(CartItem::quantity)
            .sum()
    }

    /// Sum of live price times quantity across the joined view.
    #[must_use]
    pub fn cart_total(&self) -> Decimal {
        self.cart_with_details()
            .iter()
            .map(CartItem::line_total)
            .sum()
    }

    /// Empty the cart.
    pub fn clear_cart(&self) {
        self.save_cart(&[]);
        tracing::info!("Cart cleared");
    }

    fn product(&self, product_id: ProductId) -> Result<&'a Product, CartError> {
        self.catalog.find_by_id(product_id).ok_or_else(|| {
            tracing::warn!(product_id = %product_id, "Cart change for unknown product");
            CartError::ProductNotFound(product_id)
        })
    }

    fn check_quantity(&self, product: &Product, requested: u32) -> Result<(), CartError> {
        if requested > product.stock {
            tracing::warn!(
                product_id = %product.id,
                requested,
                stock = product.stock,
                "Cart change exceeds stock"
            );
            return Err(CartError::InsufficientStock {
                requested,
                available: product.stock,
            });
        }
        if requested > self.max_quantity {
            tracing::warn!(
                product_id = %product.id,
                requested,
                max = self.max_quantity,
                "Cart change exceeds quantity cap"
            );
            return Err(CartError::QuantityCapExceeded {
                max: self.max_quantity,
            });
        }
        Ok(())
    }
}
