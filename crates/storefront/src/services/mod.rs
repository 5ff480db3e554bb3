//! Business logic services for the storefront.
//!
//! # Services
//!
//! - `auth` - Demo login, logout, and the persisted session
//! - `cart` - Cart lines with stock and quantity-cap enforcement
//! - `orders` - Order creation and lifecycle transitions
//! - `profile` - Display name and address book
//! - `checkout` - Place an order from the cart and empty it
//!
//! Services borrow their collaborators and hold no state of their own; every
//! call reads what it needs from [`crate::storage::Storage`] and writes whole
//! collections back.

pub mod auth;
pub mod cart;
pub mod checkout;
pub mod orders;
pub mod profile;

pub use auth::{AuthError, AuthService};
pub use cart::{CartError, CartService};
pub use checkout::{CheckoutError, CheckoutService};
pub use orders::{OrderError, OrderService};
pub use profile::{ProfileError, ProfileService};
