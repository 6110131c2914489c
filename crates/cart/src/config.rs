//! Shopfront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `SHOPFRONT_DATA_DIR` - Directory holding the persisted slots (default: `.shopfront`)
//! - `SHOPFRONT_CATALOG` - Catalog source, an `http(s)://` URL or a file path (default: `products.json`)
//! - `SHOPFRONT_SHIPPING_COST` - Flat shipping cost added to every cart (default: 20)
//! - `SHOPFRONT_CURRENCY` - ISO 4217 display currency (default: USD)
//! - `SHOPFRONT_DEFAULT_IMAGE` - Image used when a product has none (default: `./imgs/not-found.jpg`)
//! - `SHOPFRONT_CATALOG_CACHE_TTL_SECS` - How long a fetched catalog is reused (default: 300)

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use rust_decimal::Decimal;
use shopfront_core::CurrencyCode;
use thiserror::Error;

use crate::catalog::CatalogSource;

const DEFAULT_DATA_DIR: &str = ".shopfront";
const DEFAULT_CATALOG: &str = "products.json";
const DEFAULT_SHIPPING_COST: &str = "20";
const DEFAULT_IMAGE: &str = "./imgs/not-found.jpg";
const DEFAULT_CACHE_TTL_SECS: &str = "300";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Top-level application configuration.
#[derive(Debug, Clone)]
pub struct ShopConfig {
    /// Directory for slot files
    pub data_dir: PathBuf,
    /// Catalog source and caching
    pub catalog: CatalogConfig,
    /// Shipping and currency
    pub pricing: PricingConfig,
    /// Placeholder for products without an image
    pub default_image: String,
}

/// Where the catalog comes from and how long it is cached.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub source: CatalogSource,
    pub cache_ttl: Duration,
}

/// Pricing inputs shared by totals, checkout and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingConfig {
    /// Flat shipping cost.
    pub shipping_cost: Decimal,
    /// Display currency.
    pub currency: CurrencyCode,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            shipping_cost: Decimal::from(20),
            currency: CurrencyCode::default(),
        }
    }
}

impl ShopConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_dir = PathBuf::from(get_or_default(
            &lookup,
            "SHOPFRONT_DATA_DIR",
            DEFAULT_DATA_DIR,
        ));

        let source =
            parse_var::<CatalogSource, _>(&lookup, "SHOPFRONT_CATALOG", DEFAULT_CATALOG)?;
        let ttl_secs = parse_var::<u64, _>(
            &lookup,
            "SHOPFRONT_CATALOG_CACHE_TTL_SECS",
            DEFAULT_CACHE_TTL_SECS,
        )?;

        let shipping_cost = parse_var::<Decimal, _>(
            &lookup,
            "SHOPFRONT_SHIPPING_COST",
            DEFAULT_SHIPPING_COST,
        )?;
        if shipping_cost.is_sign_negative() {
            return Err(ConfigError::InvalidEnvVar(
                "SHOPFRONT_SHIPPING_COST".to_string(),
                "must not be negative".to_string(),
            ));
        }
        let currency = parse_var::<CurrencyCode, _>(&lookup, "SHOPFRONT_CURRENCY", "USD")?;

        let default_image = get_or_default(&lookup, "SHOPFRONT_DEFAULT_IMAGE", DEFAULT_IMAGE);

        Ok(Self {
            data_dir,
            catalog: CatalogConfig {
                source,
                cache_ttl: Duration::from_secs(ttl_secs),
            },
            pricing: PricingConfig {
                shipping_cost,
                currency,
            },
            default_image,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a variable, treating empty values as unset.
fn get_or_default<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Get a variable and parse it with `FromStr`.
fn parse_var<T, F>(lookup: &F, key: &str, default: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    get_or_default(lookup, key, default)
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}
