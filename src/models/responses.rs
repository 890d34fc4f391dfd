//! Response DTOs for the catalog service API
//!
//! Defines the structure of outgoing HTTP response bodies.

use std::collections::HashMap;

use serde::Serialize;

use crate::cache::CachedProduct;
use crate::models::{ProductId, ProductSummary};

/// Response body for the search operation (GET /search/:query)
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    /// The query that was searched for
    pub query: String,
    /// Number of matching products
    pub total: usize,
    /// Matching product codes in catalog order
    pub matches: Vec<String>,
}

impl SearchResponse {
    /// Creates a new SearchResponse
    pub fn new(query: impl Into<String>, matches: Vec<String>) -> Self {
        Self {
            query: query.into(),
            total: matches.len(),
            matches,
        }
    }
}

/// Response body for the full listing (GET /products)
#[derive(Debug, Clone, Serialize)]
pub struct ProductListResponse {
    /// Number of products in the catalog
    pub total: usize,
    /// The listing entries in catalog order
    pub products: Vec<ProductSummary>,
}

impl ProductListResponse {
    /// Creates a new ProductListResponse
    pub fn new(products: Vec<ProductSummary>) -> Self {
        Self {
            total: products.len(),
            products,
        }
    }
}

/// Response body for the cache toggle operation (PUT /cache/enabled)
#[derive(Debug, Clone, Serialize)]
pub struct CacheToggleResponse {
    /// The caching flag after the change
    pub enabled: bool,
    /// Confirmation message
    pub message: String,
}

impl CacheToggleResponse {
    /// Creates a new CacheToggleResponse
    pub fn new(enabled: bool) -> Self {
        let message = if enabled {
            "Caching enabled".to_string()
        } else {
            "Caching disabled".to_string()
        };
        Self { enabled, message }
    }
}

/// Response body for the cache inspection endpoint (GET /cache/all)
#[derive(Debug, Clone, Serialize)]
pub struct CacheSnapshotResponse {
    /// Whether caching is currently on
    pub enabled: bool,
    /// Number of cached entries
    pub total_entries: usize,
    /// The cached entries keyed by product id
    pub entries: HashMap<ProductId, CachedProduct>,
}

impl CacheSnapshotResponse {
    /// Creates a new CacheSnapshotResponse
    pub fn new(enabled: bool, entries: HashMap<ProductId, CachedProduct>) -> Self {
        Self {
            enabled,
            total_entries: entries.len(),
            entries,
        }
    }
}

/// Response body for the cache clear operation (DELETE /cache)
#[derive(Debug, Clone, Serialize)]
pub struct CacheClearResponse {
    /// Number of entries that were removed
    pub cleared: usize,
    /// Confirmation message
    pub message: String,
}

impl CacheClearResponse {
    /// Creates a new CacheClearResponse
    pub fn new(cleared: usize) -> Self {
        Self {
            cleared,
            message: format!("Cleared {} cache entries", cleared),
        }
    }
}

/// Response body for the single-entry removal (DELETE /cache/:id)
#[derive(Debug, Clone, Serialize)]
pub struct CacheRemoveResponse {
    /// The product whose entry was removed
    pub id: ProductId,
    /// Confirmation message
    pub message: String,
}

impl CacheRemoveResponse {
    /// Creates a new CacheRemoveResponse
    pub fn new(id: ProductId) -> Self {
        Self {
            id,
            message: format!("Product {} removed from cache", id),
        }
    }
}

/// Response body for the stats endpoint (GET /cache/stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Whether caching is currently on
    pub enabled: bool,
}

impl StatsResponse {
    /// Creates a new StatsResponse from cache statistics
    pub fn new(hits: u64, misses: u64, total_entries: usize, enabled: bool) -> Self {
        let total_requests = hits + misses;
        let hit_rate = if total_requests > 0 {
            hits as f64 / total_requests as f64
        } else {
            0.0
        };
        Self {
            hits,
            misses,
            hit_rate,
            total_entries,
            enabled,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
