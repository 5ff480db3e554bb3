//! Checkout service.
//!
//! Turns the live cart into an order for one of the user's addresses, then
//! empties the cart. The order is written before the cart is cleared, so any
//! failure up to that point leaves the cart as it was.

use thiserror::Error;

use shelf_core::AddressId;

use super::{AuthService, CartService, OrderError, OrderService, ProfileService};
use crate::models::{Address, CartItem, Order, Session};

/// Errors that can occur when placing an order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("Please log in to place an order")]
    NotAuthenticated,

    #[error("Your cart is empty")]
    EmptyCart,

    #[error("Address not found: {0}")]
    AddressNotFound(AddressId),

    #[error("Please add a shipping address first")]
    NoDefaultAddress,

    #[error(transparent)]
    Order(#[from] OrderError),
}

/// Checkout service.
pub struct CheckoutService<'a> {
    auth: AuthService<'a>,
    cart: CartService<'a>,
    orders: OrderService<'a>,
    profile: ProfileService<'a>,
}

impl<'a> CheckoutService<'a> {
    /// Create a new checkout service from the engines it composes.
    #[must_use]
    pub const fn new(
        auth: AuthService<'a>,
        cart: CartService<'a>,
        orders: OrderService<'a>,
        profile: ProfileService<'a>,
    ) -> Self {
        Self {
            auth,
            cart,
            orders,
            profile,
        }
    }

    /// Place an order for the current cart, shipped to `address_id`.
    ///
    /// # Errors
    ///
    /// - `CheckoutError::NotAuthenticated` if nobody is logged in.
    /// - `CheckoutError::EmptyCart` if the cart has no purchasable lines.
    /// - `CheckoutError::AddressNotFound` if the address is not in the book.
    pub fn place_order(&self, address_id: AddressId) -> Result<Order, CheckoutError> {
        let (session, items) = self.ready()?;
        let Some(address) = self
            .profile
            .addresses()
            .into_iter()
            .find(|a| a.id == address_id)
        else {
            tracing::warn!(address_id = %address_id, "Checkout with unknown address");
            return Err(CheckoutError::AddressNotFound(address_id));
        };
        Ok(self.complete(&session, &items, &address))
    }

    /// Place an order for the current cart, shipped to the default address.
    ///
    /// # Errors
    ///
    /// - `CheckoutError::NotAuthenticated` if nobody is logged in.
    /// - `CheckoutError::EmptyCart` if the cart has no purchasable lines.
    /// - `CheckoutError::NoDefaultAddress` if the address book is empty.
    pub fn place_order_to_default(&self) -> Result<Order, CheckoutError> {
        let (session, items) = self.ready()?;
        let Some(address) = self.profile.default_address() else {
            tracing::warn!(email = %session.email, "Checkout without default address");
            return Err(CheckoutError::NoDefaultAddress);
        };
        Ok(self.complete(&session, &items, &address))
    }

    fn ready(&self) -> Result<(Session, Vec<CartItem>), CheckoutError> {
        let Some(session) = self.auth.current_user() else {
            tracing::warn!("Checkout without session");
            return Err(CheckoutError::NotAuthenticated);
        };

        let items = self.cart.cart_with_details();
        if items.is_empty() {
            tracing::warn!(email = %session.email, "Checkout with empty cart");
            return Err(CheckoutError::EmptyCart);
        }
        Ok((session, items))
    }

    fn complete(&self, session: &Session, items: &[CartItem], address: &Address) -> Order {
        let total = items.iter().map(CartItem::line_total).sum();
        let order = self.orders.create_order(items, address, total);
        self.cart.clear_cart();

        tracing::info!(
            order_id = %order.id,
            email = %session.email,
            total = %order.total,
            "Order placed"
        );
        order
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;
    use shelf_core::{DemoCredentials, OrderStatus, ProductId};

    use super::*;
    use crate::catalog::Catalog;
    use crate::storage::Storage;

    const EMAIL: &str = "haythem@example.com";
    const PASSWORD: &str = "123456";

    fn checkout<'a>(
        storage: &'a Storage,
        catalog: &'a Catalog,
        creds: &'a DemoCredentials,
    ) -> CheckoutService<'a> {
        CheckoutService::new(
            AuthService::new(storage, creds),
            CartService::new(storage, catalog, 10),
            OrderService::new(storage),
            ProfileService::new(storage),
        )
    }

    #[test]
    fn test_requires_session() {
        let storage = Storage::in_memory();
        let catalog = Catalog::seeded();
        let creds = DemoCredentials::default();
        let checkout = checkout(&storage, &catalog, &creds);

        assert_eq!(
            checkout.place_order(AddressId::new(1)),
            Err(CheckoutError::NotAuthenticated)
        );
    }

    #[test]
    fn test_empty_cart() {
        let storage = Storage::in_memory();
        let catalog = Catalog::seeded();
        let creds = DemoCredentials::default();
        AuthService::new(&storage, &creds)
            .login(EMAIL, PASSWORD)
            .unwrap();
        let checkout = checkout(&storage, &catalog, &creds);

        assert_eq!(
            checkout.place_order(AddressId::new(1)),
            Err(CheckoutError::EmptyCart)
        );
    }

    #[test]
    fn test_unknown_address_keeps_cart() {
        let storage = Storage::in_memory();
        let catalog = Catalog::seeded();
        let creds = DemoCredentials::default();
        AuthService::new(&storage, &creds)
            .login(EMAIL, PASSWORD)
            .unwrap();
        let cart = CartService::new(&storage, &catalog, 10);
        cart.add_to_cart(ProductId::new(1), 2).unwrap();

        let checkout = checkout(&storage, &catalog, &creds);
        assert_eq!(
            checkout.place_order(AddressId::new(42)),
            Err(CheckoutError::AddressNotFound(AddressId::new(42)))
        );
        assert_eq!(cart.cart_count(), 2);
        assert!(OrderService::new(&storage).orders().is_empty());
    }

    #[test]
    fn test_place_order_creates_then_clears() {
        let storage = Storage::in_memory();
        let catalog = Catalog::seeded();
        let creds = DemoCredentials::default();
        AuthService::new(&storage, &creds)
            .login(EMAIL, PASSWORD)
            .unwrap();
        let cart = CartService::new(&storage, &catalog, 10);
        cart.add_to_cart(ProductId::new(1), 2).unwrap();
        cart.add_to_cart(ProductId::new(3), 1).unwrap();
        let expected_total = cart.cart_total();

        let order = checkout(&storage, &catalog, &creds)
            .place_order(AddressId::new(1))
            .unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.total, expected_total);
        assert_eq!(order.total, Decimal::new(899 * 2 + 249, 0));
        assert_eq!(order.address.id, AddressId::new(1));
        assert_eq!(order.item_count(), 3);
        assert!(cart.cart().is_empty());
        assert_eq!(OrderService::new(&storage).orders(), vec![order]);
    }

    #[test]
    fn test_place_order_to_default() {
        let storage = Storage::in_memory();
        let catalog = Catalog::seeded();
        let creds = DemoCredentials::default();
        AuthService::new(&storage, &creds)
            .login(EMAIL, PASSWORD)
            .unwrap();
        let cart = CartService::new(&storage, &catalog, 10);
        cart.add_to_cart(ProductId::new(2), 1).unwrap();

        let profile = ProfileService::new(&storage);
        profile.delete_address(AddressId::new(1)).unwrap();
        let checkout = checkout(&storage, &catalog, &creds);
        assert_eq!(
            checkout.place_order_to_default(),
            Err(CheckoutError::NoDefaultAddress)
        );
        assert_eq!(cart.cart_count(), 1);

        let address = profile
            .add_address(crate::models::NewAddress::new("Riyadh", "Olaya St"))
            .unwrap();
        let order = checkout.place_order_to_default().unwrap();
        assert_eq!(order.address, address);
        assert!(cart.cart().is_empty());
    }
}
