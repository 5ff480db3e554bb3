//! Shelf Core - Shared types library.
//!
//! This crate provides common types used across all Shelf components:
//! - `storefront` - Store, catalog, cart, order, and profile engines
//! - `cli` - Command-line front end over a file-backed store
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no storage access.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, order
//!   statuses, and the demo credential pair

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
