//! Domain records for the storefront.
//!
//! Every record round-trips through [`crate::storage::Storage`] as JSON, so
//! field names are camelCase on the wire.

pub mod cart;
pub mod order;
pub mod product;
pub mod session;
pub mod user;

pub use cart::{CartItem, CartLine};
pub use order::{Order, OrderLine};
pub use product::{Category, Product};
pub use session::Session;
pub use user::{Address, NewAddress, UserData};
