//! Application state shared by front ends.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::services::{AuthService, CartService, CheckoutService, OrderService, ProfileService};
use crate::storage::{Storage, StoreError};

/// Application state: configuration, store and catalog.
///
/// This struct is cheaply cloneable via `Arc`. Engines are built on demand
/// and borrow from it.
#[derive(Clone, Debug)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

#[derive(Debug)]
struct AppStateInner {
    config: StorefrontConfig,
    storage: Storage,
    catalog: Catalog,
}

impl AppState {
    /// Create state from already-built parts.
    #[must_use]
    pub fn new(config: StorefrontConfig, storage: Storage, catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                storage,
                catalog,
            }),
        }
    }

    /// File-backed state over `config.data_dir` with the built-in catalog.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the data directory cannot be created.
    pub fn from_config(config: StorefrontConfig) -> Result<Self, StoreError> {
        let storage = Storage::open(&config.data_dir)?;
        tracing::debug!(data_dir = %config.data_dir.display(), "Opened file store");
        Ok(Self::new(config, storage, Catalog::seeded()))
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the store.
    #[must_use]
    pub fn storage(&self) -> &Storage {
        &self.inner.storage
    }

    /// Get a reference to the catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    #[must_use]
    pub fn auth(&self) -> AuthService<'_> {
        AuthService::new(self.storage(), &self.inner.config.demo)
    }

    #[must_use]
    pub fn cart(&self) -> CartService<'_> {
        CartService::new(
            self.storage(),
            self.catalog(),
            self.inner.config.max_cart_quantity,
        )
    }

    #[must_use]
    pub fn orders(&self) -> OrderService<'_> {
        OrderService::new(self.storage())
    }

    #[must_use]
    pub fn profile(&self) -> ProfileService<'_> {
        ProfileService::new(self.storage())
    }

    #[must_use]
    pub fn checkout(&self) -> CheckoutService<'_> {
        CheckoutService::new(self.auth(), self.cart(), self.orders(), self.profile())
    }
}
