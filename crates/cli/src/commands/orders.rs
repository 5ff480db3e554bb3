//! Order history and status commands.
//!
//! `ship` and `deliver` follow the order lifecycle; `set-status` is an
//! administrative override that does not.

use tracing::info;

use super::notify;

use shelf_core::{OrderId, OrderStatus};
use shelf_storefront::error::{Notice, Result};
use shelf_storefront::filters::{format_date, format_date_short, format_price};
use shelf_storefront::models::Order;
use shelf_storefront::services::{OrderError, OrderService};
use shelf_storefront::state::AppState;

pub fn list(state: &AppState) {
    let orders = state.orders().orders();
    if orders.is_empty() {
        notify(&Notice::info("No orders yet"));
        return;
    }
    for order in &orders {
        info!(
            "{}  {:<9}  {}  {:>3} items  {:>12}",
            order.id,
            order.status.label(),
            format_date_short(&order.created_at),
            order.item_count(),
            format_price(order.total)
        );
    }
}

/// # Errors
///
/// Returns `OrderError::OrderNotFound` if there is no such order.
pub fn show(state: &AppState, id: &str) -> Result<()> {
    let id = OrderId::from(id);
    let order = state
        .orders()
        .order_by_id(&id)
        .ok_or(OrderError::OrderNotFound(id))?;

    info!("Order {}", order.id);
    info!("Status: {}", order.status.label());
    info!("Placed: {}", format_date(&order.created_at));
    if order.updated_at != order.created_at {
        info!("Updated: {}", format_date(&order.updated_at));
    }
    info!("Ship to: {}", order.address.summary());
    for line in &order.items {
        info!(
            "  #{:<3} {:<36} {:>3} x {:>12} = {:>12}",
            line.product_id.as_u32(),
            line.product_name,
            line.quantity,
            format_price(line.price),
            format_price(line.line_total())
        );
    }
    info!("Total: {}", format_price(order.total));

    if order.status.is_terminal() {
        info!("This order is closed");
        return Ok(());
    }
    let mut actions = Vec::new();
    if OrderService::can_cancel_order(&order) {
        actions.push("cancel");
    }
    if OrderService::can_return_order(&order) {
        actions.push("return");
    }
    if !actions.is_empty() {
        info!("Available: {}", actions.join(", "));
    }
    Ok(())
}

/// # Errors
///
/// Returns an error if the order is missing or no longer pending.
pub fn cancel(state: &AppState, id: &str) -> Result<()> {
    let order = state.orders().cancel_order(&OrderId::from(id))?;
    report(&order);
    Ok(())
}

/// # Errors
///
/// Returns an error if the order is missing or not delivered.
pub fn return_order(state: &AppState, id: &str) -> Result<()> {
    let order = state.orders().return_order(&OrderId::from(id))?;
    report(&order);
    Ok(())
}

/// # Errors
///
/// Returns an error if the order is missing or not pending.
pub fn ship(state: &AppState, id: &str) -> Result<()> {
    let order = state
        .orders()
        .advance_order(&OrderId::from(id), OrderStatus::Shipped)?;
    report(&order);
    Ok(())
}

/// # Errors
///
/// Returns an error if the order is missing or not shipped.
pub fn deliver(state: &AppState, id: &str) -> Result<()> {
    let order = state
        .orders()
        .advance_order(&OrderId::from(id), OrderStatus::Delivered)?;
    report(&order);
    Ok(())
}

/// # Errors
///
/// Returns an error if the order is missing or `status` is not a status.
pub fn set_status(state: &AppState, id: &str, status: &str) -> Result<()> {
    let order = state
        .orders()
        .update_order_status(&OrderId::from(id), status)?;
    report(&order);
    Ok(())
}

fn report(order: &Order) {
    notify(&Notice::success(format!(
        "Order {} is now {}",
        order.id,
        order.status.label()
    )));
}
