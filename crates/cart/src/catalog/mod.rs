//! Product catalog client.
//!
//! Fetches the catalog as a JSON array of products, either over HTTP(S) with
//! `reqwest` or from a local file. The parsed catalog is cached with `moka`
//! so a product listing and a category listing share one fetch.

mod cache;

use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use moka::future::Cache;
use shopfront_core::{CategoryFilter, ProductId};
use thiserror::Error;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::config::CatalogConfig;
use crate::models::Product;

use cache::{CacheKey, CacheValue};

/// Errors that can occur when loading the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status.
    #[error("Catalog request returned HTTP {0}")]
    Status(u16),

    /// Reading the catalog file failed.
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Product not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Where the catalog is loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Url(Url),
    File(PathBuf),
}

impl FromStr for CatalogSource {
    type Err = url::ParseError;

    /// `http://` and `https://` inputs are URLs; anything else is a path.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Url::parse(s).map(Self::Url)
        } else {
            Ok(Self::File(PathBuf::from(s)))
        }
    }
}

impl std::fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Url(url) => write!(f, "{url}"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

// =============================================================================
// CatalogClient
// =============================================================================

/// Client for the product catalog.
///
/// Cheap to clone; clones share the HTTP client and the cache.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    source: CatalogSource,
    cache: Cache<CacheKey, CacheValue>,
}

impl CatalogClient {
    /// Create a new catalog client.
    #[must_use]
    pub fn new(config: &CatalogConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(16)
            .time_to_live(config.cache_ttl)
            .build();

        Self {
            inner: Arc::new(CatalogClientInner {
                client: reqwest::Client::new(),
                source: config.source.clone(),
                cache,
            }),
        }
    }

    /// Source this client loads from.
    #[must_use]
    pub fn source(&self) -> &CatalogSource {
        &self.inner.source
    }

    /// Fetch the raw catalog body.
    async fn fetch(&self) -> Result<String, CatalogError> {
        match &self.inner.source {
            CatalogSource::Url(url) => {
                let response = self.inner.client.get(url.clone()).send().await?;
                let status = response.status();
                if !status.is_success() {
                    tracing::error!(
                        status = %status,
                        url = %url,
                        "Catalog fetch returned non-success status"
                    );
                    return Err(CatalogError::Status(status.as_u16()));
                }
                Ok(response.text().await?)
            }
            CatalogSource::File(path) => {
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| CatalogError::Io {
                        path: path.clone(),
                        source,
                    })
            }
        }
    }

    /// The whole catalog, from cache when possible.
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch fails or the body is not a JSON array.
    /// Individual records that are not valid products are skipped.
    #[instrument(skip(self), fields(source = %self.inner.source))]
    pub async fn catalog(&self) -> Result<Arc<Vec<Product>>, CatalogError> {
        if let Some(CacheValue::Catalog(products)) = self.inner.cache.get(&CacheKey::Catalog).await
        {
            debug!("Cache hit for catalog");
            return Ok(products);
        }

        let body = self.fetch().await?;
        let products = match serde_json::from_str::<Vec<serde_json::Value>>(&body) {
            Ok(records) => parse_products(records),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    body = %body.chars().take(500).collect::<String>(),
                    "Failed to parse catalog"
                );
                return Err(CatalogError::Parse(e));
            }
        };
        debug!(products = products.len(), "Catalog fetched");

        let products = Arc::new(products);
        self.inner
            .cache
            .insert(CacheKey::Catalog, CacheValue::Catalog(Arc::clone(&products)))
            .await;

        Ok(products)
    }

    /// Products passing `filter`, in catalog order.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded.
    #[instrument(skip(self))]
    pub async fn products(&self, filter: &CategoryFilter) -> Result<Vec<Product>, CatalogError> {
        let catalog = self.catalog().await?;
        Ok(catalog
            .iter()
            .filter(|product| filter.matches(&product.category))
            .cloned()
            .collect())
    }

    /// Unique category names in first-seen order.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded.
    #[instrument(skip(self))]
    pub async fn categories(&self) -> Result<Arc<Vec<String>>, CatalogError> {
        if let Some(CacheValue::Categories(categories)) =
            self.inner.cache.get(&CacheKey::Categories).await
        {
            debug!("Cache hit for categories");
            return Ok(categories);
        }

        let catalog = self.catalog().await?;
        let mut categories: Vec<String> = Vec::new();
        for product in catalog.iter() {
            if !categories.contains(&product.category) {
                categories.push(product.category.clone());
            }
        }

        let categories = Arc::new(categories);
        self.inner
            .cache
            .insert(
                CacheKey::Categories,
                CacheValue::Categories(Arc::clone(&categories)),
            )
            .await;

        Ok(categories)
    }

    /// Look up one product.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if no product has this id, or an
    /// error if the catalog cannot be loaded.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn find(&self, id: &ProductId) -> Result<Product, CatalogError> {
        let catalog = self.catalog().await?;
        catalog
            .iter()
            .find(|product| &product.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(format!("Product not found: {id}")))
    }
}

/// Parse catalog records, skipping the ones that are not valid products.
fn parse_products(records: Vec<serde_json::Value>) -> Vec<Product> {
    records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(product) => Some(product),
            Err(e) => {
                warn!(index, error = %e, "Skipping invalid catalog record");
                None
            }
        })
        .collect()
}
