//! Shelf storefront library.
//!
//! Local-first storefront engines over a pluggable key-value store: session,
//! cart, orders, and profile, plus the read-only catalog they draw on.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod filters;
pub mod models;
pub mod services;
pub mod state;
pub mod storage;
