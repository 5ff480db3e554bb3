//! Order service.
//!
//! Orders are stored newest-first as one list. An order is a price-locked
//! snapshot: line names, images and prices are copied from the catalog when
//! the order is created and never re-read afterwards.

mod error;

pub use error::OrderError;

use chrono::Utc;
use rust_decimal::Decimal;

use shelf_core::{OrderId, OrderStatus};

use crate::models::{Address, CartItem, Order, OrderLine};
use crate::storage::{Storage, keys};

/// Order service.
pub struct OrderService<'a> {
    storage: &'a Storage,
}

impl<'a> OrderService<'a> {
    /// Create a new order service.
    #[must_use]
    pub const fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// All orders, newest first.
    #[must_use]
    pub fn orders(&self) -> Vec<Order> {
        self.storage.get_or_default(keys::ORDERS)
    }

    /// Look up one order.
    #[must_use]
    pub fn order_by_id(&self, id: &OrderId) -> Option<Order> {
        let order = self.orders().into_iter().find(|order| &order.id == id);
        tracing::debug!(order_id = %id, found = order.is_some(), "Order lookup");
        order
    }

    fn save_orders(&self, orders: &[Order]) {
        self.storage.set(keys::ORDERS, orders);
    }

    /// Record a new `PENDING` order from joined cart lines.
    ///
    /// The cart itself is left alone; see
    /// [`CheckoutService`](crate::services::CheckoutService) for the
    /// composite command.
    pub fn create_order(&self, items: &[CartItem], address: &Address, total: Decimal) -> Order {
        let mut orders = self.orders();

        let mut id = OrderId::generate();
        while orders.iter().any(|order| order.id == id) {
            tracing::warn!(order_id = %id, "Order ID clash, regenerating");
            id = OrderId::generate();
        }

        let now = Utc::now();
        let order = Order {
            id,
            items: items.iter().map(OrderLine::from).collect(),
            address: address.clone(),
            total,
            status: OrderStatus::Pending,
            created_at: now,
            updated_at: now,
        };
        orders.insert(0, order.clone());
        self.save_orders(&orders);

        tracing::info!(
            order_id = %order.id,
            lines = order.items.len(),
            total = %order.total,
            "Order created"
        );
        order
    }

    /// Set an order's status without consulting the lifecycle.
    ///
    /// # Errors
    ///
    /// - `OrderError::OrderNotFound` if no order has this ID.
    /// - `OrderError::InvalidStatus` if `status` names no known status.
    pub fn update_order_status(&self, id: &OrderId, status: &str) -> Result<Order, OrderError> {
        if self.order_by_id(id).is_none() {
            tracing::warn!(order_id = %id, "Status change for unknown order");
            return Err(OrderError::OrderNotFound(id.clone()));
        }
        let status: OrderStatus = status.parse().map_err(|_| {
            tracing::warn!(order_id = %id, status, "Unknown order status");
            OrderError::InvalidStatus(status.to_owned())
        })?;
        self.set_status(id, status)
    }

    /// Move an order to `target` if the lifecycle allows it.
    ///
    /// # Errors
    ///
    /// - `OrderError::OrderNotFound` if no order has this ID.
    /// - `OrderError::InvalidTransition` if the move is not allowed.
    pub fn advance_order(&self, id: &OrderId, target: OrderStatus) -> Result<Order, OrderError> {
        let order = self
            .order_by_id(id)
            .ok_or_else(|| OrderError::OrderNotFound(id.clone()))?;
        if !order.status.can_transition_to(target) {
            tracing::warn!(
                order_id = %id,
                from = %order.status,
                to = %target,
                "Order transition rejected"
            );
            return Err(OrderError::InvalidTransition {
                from: order.status,
                to: target,
            });
        }
        self.set_status(id, target)
    }

    /// Cancel a pending order.
    ///
    /// # Errors
    ///
    /// See [`advance_order`](Self::advance_order).
    pub fn cancel_order(&self, id: &OrderId) -> Result<Order, OrderError> {
        self.advance_order(id, OrderStatus::Cancelled)
    }

    /// Return a delivered order.
    ///
    /// # Errors
    ///
    /// See [`advance_order`](Self::advance_order).
    pub fn return_order(&self, id: &OrderId) -> Result<Order, OrderError> {
        self.advance_order(id, OrderStatus::Returned)
    }

    #[must_use]
    pub const fn can_cancel_order(order: &Order) -> bool {
        order.status.can_transition_to(OrderStatus::Cancelled)
    }

    #[must_use]
    pub const fn can_return_order(order: &Order) -> bool {
        order.status.can_transition_to(OrderStatus::Returned)
    }

    fn set_status(&self, id: &OrderId, status: OrderStatus) -> Result<Order, OrderError> {
        let mut orders = self.orders();
        let Some(order) = orders.iter_mut().find(|order| &order.id == id) else {
            tracing::warn!(order_id = %id, "Status change for unknown order");
            return Err(OrderError::OrderNotFound(id.clone()));
        };
        let from = order.status;
        order.status = status;
        order.updated_at = Utc::now();
        let order = order.clone();
        self.save_orders(&orders);

        tracing::info!(order_id = %id, from = %from, to = %status, "Order status updated");
        Ok(order)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use shelf_core::{AddressId, CategoryId, ProductId};

    use super::*;
    use crate::models::{CartLine, Product};

    fn item(id: u32, price: i64, quantity: u32) -> CartItem {
        CartItem {
            line: CartLine {
                product_id: ProductId::new(id),
                quantity,
                added_at: Utc::now(),
            },
            product: Product {
                id: ProductId::new(id),
                name: format!("Product {id}"),
                description: String::new(),
                price: Decimal::new(price, 0),
                old_price: None,
                stock: 10,
                rating: 4.0,
                category_id: CategoryId::new(1),
                is_new: false,
                is_featured: false,
                image: format!("/images/{id}.jpg"),
            },
        }
    }

    fn address() -> Address {
        Address {
            id: AddressId::new(1),
            city: "Riyadh".to_string(),
            street: "King Fahd Rd".to_string(),
            district: None,
            building_number: None,
            postal_code: None,
            is_default: true,
        }
    }

    fn place(orders: &OrderService<'_>) -> Order {
        let items = [item(1, 100, 2), item(2, 5, 1)];
        orders.create_order(&items, &address(), Decimal::new(205, 0))
    }

    #[test]
    fn test_create_order_snapshots_lines() {
        let storage = Storage::in_memory();
        let orders = OrderService::new(&storage);

        let order = place(&orders);
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.items[0].product_name, "Product 1");
        assert_eq!(order.items[0].price, Decimal::new(100, 0));
        assert_eq!(order.item_count(), 3);
        assert_eq!(order.address, address());
        assert!(order.id.as_str().starts_with(OrderId::PREFIX));
        assert_eq!(orders.order_by_id(&order.id), Some(order));
    }

    #[test]
    fn test_orders_newest_first_with_unique_ids() {
        let storage = Storage::in_memory();
        let orders = OrderService::new(&storage);

        let first = place(&orders);
        let second = place(&orders);
        assert_ne!(first.id, second.id);

        let ids: Vec<OrderId> = orders.orders().into_iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![second.id, first.id]);
    }

    #[test]
    fn test_cancel_only_pending() {
        let storage = Storage::in_memory();
        let orders = OrderService::new(&storage);
        let order = place(&orders);

        assert!(OrderService::can_cancel_order(&order));
        let cancelled = orders.cancel_order(&order.id).unwrap();
        assert_eq!(cancelled.status, OrderStatus::Cancelled);
        assert!(!OrderService::can_cancel_order(&cancelled));
        assert_eq!(
            orders.cancel_order(&order.id),
            Err(OrderError::InvalidTransition {
                from: OrderStatus::Cancelled,
                to: OrderStatus::Cancelled
            })
        );
    }

    #[test]
    fn test_return_only_delivered() {
        let storage = Storage::in_memory();
        let orders = OrderService::new(&storage);
        let order = place(&orders);

        assert!(matches!(
            orders.return_order(&order.id),
            Err(OrderError::InvalidTransition { .. })
        ));
        orders.advance_order(&order.id, OrderStatus::Shipped).unwrap();
        assert!(matches!(
            orders.cancel_order(&order.id),
            Err(OrderError::InvalidTransition { .. })
        ));
        orders
            .advance_order(&order.id, OrderStatus::Delivered)
            .unwrap();
        let delivered = orders.order_by_id(&order.id).unwrap();
        assert!(OrderService::can_return_order(&delivered));

        let returned = orders.return_order(&order.id).unwrap();
        assert_eq!(returned.status, OrderStatus::Returned);
        assert!(returned.updated_at >= returned.created_at);
    }

    #[test]
    fn test_update_status_is_unchecked_override() {
        let storage = Storage::in_memory();
        let orders = OrderService::new(&storage);
        let order = place(&orders);

        let updated = orders.update_order_status(&order.id, "delivered").unwrap();
        assert_eq!(updated.status, OrderStatus::Delivered);
        let updated = orders.update_order_status(&order.id, "PENDING").unwrap();
        assert_eq!(updated.status, OrderStatus::Pending);
    }

    #[test]
    fn test_update_status_rejects_unknown() {
        let storage = Storage::in_memory();
        let orders = OrderService::new(&storage);
        let order = place(&orders);

        assert_eq!(
            orders.update_order_status(&order.id, "LOST"),
            Err(OrderError::InvalidStatus("LOST".to_string()))
        );
        assert_eq!(
            orders.order_by_id(&order.id).unwrap().status,
            OrderStatus::Pending
        );
    }

    #[test]
    fn test_missing_order() {
        let storage = Storage::in_memory();
        let orders = OrderService::new(&storage);
        let id = OrderId::new("ORD-0-missing");

        assert_eq!(orders.order_by_id(&id), None);
        assert_eq!(
            orders.cancel_order(&id),
            Err(OrderError::OrderNotFound(id.clone()))
        );
        assert_eq!(
            orders.update_order_status(&id, "SHIPPED"),
            Err(OrderError::OrderNotFound(id.clone()))
        );
        // An unknown order is reported before an unknown status.
        assert_eq!(
            orders.update_order_status(&id, "LOST"),
            Err(OrderError::OrderNotFound(id))
        );
    }
}
