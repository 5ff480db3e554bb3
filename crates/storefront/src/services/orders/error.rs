//! Order error types.

use thiserror::Error;

use shelf_core::{OrderId, OrderStatus};

/// Errors that can occur when reading or changing orders.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    OrderNotFound(OrderId),

    /// The lifecycle does not allow this status change.
    #[error("Cannot move order from {from} to {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    /// Status text that names no known status.
    #[error("Invalid order status: {0}")]
    InvalidStatus(String),
}
