//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `SHELF_DATA_DIR` - Directory holding the persisted documents (default: `.shelf`)
//! - `SHELF_MAX_CART_QUANTITY` - Per-line cart cap, at least 1 (default: 10)
//! - `SHELF_DEMO_NAME` - Display name of the demo account (default: Haythem)
//! - `SHELF_DEMO_EMAIL` - Login email of the demo account (default: haythem@example.com)
//! - `SHELF_DEMO_PASSWORD` - Login password of the demo account (default: 123456)

use std::path::PathBuf;

use secrecy::ExposeSecret;
use thiserror::Error;

use shelf_core::{DemoCredentials, Email};

const DEFAULT_DATA_DIR: &str = ".shelf";
const DEFAULT_MAX_CART_QUANTITY: u32 = 10;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Directory for the file-backed store
    pub data_dir: PathBuf,
    /// Maximum quantity of one product in the cart
    pub max_cart_quantity: u32,
    /// The one account login accepts
    pub demo: DemoCredentials,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            max_cart_quantity: DEFAULT_MAX_CART_QUANTITY,
            demo: DemoCredentials::default(),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let data_dir = get("SHELF_DATA_DIR").map_or(defaults.data_dir, PathBuf::from);

        let max_cart_quantity = match get("SHELF_MAX_CART_QUANTITY") {
            Some(raw) => parse_max_quantity("SHELF_MAX_CART_QUANTITY", &raw)?,
            None => defaults.max_cart_quantity,
        };

        let name = get("SHELF_DEMO_NAME").unwrap_or_else(|| defaults.demo.name.clone());
        let email = match get("SHELF_DEMO_EMAIL") {
            Some(raw) => Email::parse(&raw)
                .map_err(|e| {
                    ConfigError::InvalidEnvVar("SHELF_DEMO_EMAIL".to_string(), e.to_string())
                })?
                .into_inner(),
            None => defaults.demo.email.clone(),
        };
        let password = get("SHELF_DEMO_PASSWORD")
            .unwrap_or_else(|| defaults.demo.password.expose_secret().to_owned());

        Ok(Self {
            data_dir,
            max_cart_quantity,
            demo: DemoCredentials::new(name, email, password),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse the cart cap, which must be a positive integer.
fn parse_max_quantity(key: &str, raw: &str) -> Result<u32, ConfigError> {
    let value = raw
        .trim()
        .parse::<u32>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    if value == 0 {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "must be at least 1".to_string(),
        ));
    }
    Ok(value)
}
