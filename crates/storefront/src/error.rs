//! Unified error handling.
//!
//! Every engine returns its own error enum. `AppError` gathers them so a
//! front end can handle any failure in one place, and [`AppError::notice`]
//! turns a failure into the short-lived message shown to the user.

use serde::Serialize;
use thiserror::Error;

use crate::config::ConfigError;
use crate::services::{AuthError, CartError, CheckoutError, OrderError, ProfileError};
use crate::storage::StoreError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Cart(#[from] CartError),

    #[error(transparent)]
    Order(#[from] OrderError),

    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error(transparent)]
    Checkout(#[from] CheckoutError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The store backend could not be opened.
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

impl AppError {
    /// The notice a front end shows for this failure.
    #[must_use]
    pub fn notice(&self) -> Notice {
        if matches!(self, Self::Config(_) | Self::Store(_)) {
            tracing::error!(error = %self, "Storefront unavailable");
        }
        Notice::error(self.to_string())
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Severity of a [`Notice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Error,
    Info,
}

/// Short message reporting the outcome of an operation to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }
}

impl From<&AppError> for Notice {
    fn from(err: &AppError) -> Self {
        err.notice()
    }
}
