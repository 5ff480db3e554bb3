//! Cart error types.

use thiserror::Error;

use shelf_core::ProductId;

/// Errors that can occur when changing the cart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// No catalog product has this ID.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// The resulting line quantity would exceed live stock.
    #[error("Insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: u32, available: u32 },

    /// The resulting line quantity would exceed the per-line cap.
    #[error("Maximum quantity is {max}")]
    QuantityCapExceeded { max: u32 },

    /// Quantity update for a product that has no cart line.
    #[error("Item not in cart: {0}")]
    ItemNotInCart(ProductId),

    /// Adding zero units.
    #[error("Quantity must be at least 1")]
    InvalidQuantity,
}
