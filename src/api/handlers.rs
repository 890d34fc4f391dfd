//! API Handlers
//!
//! HTTP request handlers for each catalog service endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

use crate::cache::ProductCache;
use crate::catalog::{CatalogIndex, CatalogSource};
use crate::error::{CatalogError, Result};
use crate::lookup::ProductLookup;
use crate::models::{
    CacheClearResponse, CacheRemoveResponse, CacheSnapshotResponse, CacheToggleRequest,
    CacheToggleResponse, HealthResponse, ProductDetail, ProductId, ProductListResponse,
    SearchResponse, StatsResponse,
};
use crate::search::SearchEngine;

/// Application state shared across all handlers.
///
/// The cache is wrapped in Arc<RwLock<>> for thread-safe access; the
/// lookup and search components hold their own handles to it and to
/// the catalog source.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe product cache
    pub cache: Arc<RwLock<ProductCache>>,
    /// In-memory catalog listing
    pub index: Arc<CatalogIndex>,
    /// Cache-aside detail lookup
    pub lookup: Arc<ProductLookup>,
    /// Free-text search over the listing
    pub search: Arc<SearchEngine>,
}

impl AppState {
    /// Creates a new AppState wired to the given catalog source.
    pub fn new(source: Arc<dyn CatalogSource>, cache_enabled: bool) -> Self {
        let cache = Arc::new(RwLock::new(ProductCache::new(cache_enabled)));
        let index = Arc::new(CatalogIndex::new(Arc::clone(&source)));
        let lookup = Arc::new(ProductLookup::new(Arc::clone(&cache), source));
        let search = Arc::new(SearchEngine::new(Arc::clone(&index)));
        Self {
            cache,
            index,
            lookup,
            search,
        }
    }
}

/// Parses a path segment into a product id.
///
/// Non-numeric input is a client error, not a missing product.
fn parse_product_id(raw: &str) -> Result<ProductId> {
    raw.parse::<u64>()
        .map(ProductId::new)
        .map_err(|_| CatalogError::InvalidInput(format!("Invalid product id '{}'", raw)))
}

/// Handler for GET /search/:query
///
/// Matches the query against the catalog listing and returns the
/// matching product codes.
pub async fn search_handler(
    State(state): State<AppState>,
    Path(query): Path<String>,
) -> Result<Json<SearchResponse>> {
    let matches = state.search.search(&query).await?;
    Ok(Json(SearchResponse::new(query, matches)))
}

/// Handler for GET /products
///
/// Returns the full catalog listing, fetching it on first use.
pub async fn all_products_handler(
    State(state): State<AppState>,
) -> Result<Json<ProductListResponse>> {
    let products = state.index.all_products().await?;
    Ok(Json(ProductListResponse::new(products.as_ref().clone())))
}

/// Handler for POST /products/refresh
///
/// Discards the stored listing and fetches a fresh copy.
pub async fn refresh_products_handler(
    State(state): State<AppState>,
) -> Result<Json<ProductListResponse>> {
    let products = state.index.refresh().await?;
    Ok(Json(ProductListResponse::new(products.as_ref().clone())))
}

/// Handler for GET /products/:id
///
/// Resolves product detail through the cache and returns the payload
/// exactly as the catalog provided it.
pub async fn product_detail_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<ProductDetail>> {
    let id = parse_product_id(&raw_id)?;
    let detail = state.lookup.get_product_detail(id).await?;
    Ok(Json(detail))
}

/// Handler for PUT /cache/enabled
///
/// Turns caching on or off. Stored entries survive a disable.
pub async fn cache_toggle_handler(
    State(state): State<AppState>,
    Json(req): Json<CacheToggleRequest>,
) -> Json<CacheToggleResponse> {
    let mut cache = state.cache.write().await;
    cache.set_enabled(req.enabled);
    info!(enabled = req.enabled, "caching toggled");

    Json(CacheToggleResponse::new(req.enabled))
}

/// Handler for GET /cache/all
///
/// Returns a point-in-time copy of every cached entry.
pub async fn cache_snapshot_handler(State(state): State<AppState>) -> Json<CacheSnapshotResponse> {
    let cache = state.cache.read().await;
    Json(CacheSnapshotResponse::new(
        cache.is_enabled(),
        cache.snapshot(),
    ))
}

/// Handler for DELETE /cache
///
/// Empties the cache and reports how many entries were removed. The
/// caching flag is left as it was.
pub async fn cache_clear_handler(State(state): State<AppState>) -> Json<CacheClearResponse> {
    let mut cache = state.cache.write().await;
    let cleared = cache.clear();
    info!(cleared, "cache cleared");

    Json(CacheClearResponse::new(cleared))
}

/// Handler for DELETE /cache/:id
///
/// Removes a single cached entry.
pub async fn cache_remove_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<CacheRemoveResponse>> {
    let id = parse_product_id(&raw_id)?;

    let mut cache = state.cache.write().await;
    if cache.remove(id) {
        Ok(Json(CacheRemoveResponse::new(id)))
    } else {
        Err(CatalogError::NotFound(id))
    }
}

/// Handler for GET /cache/stats
///
/// Returns current cache statistics.
pub async fn cache_stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache.read().await;
    let stats = cache.stats();

    Json(StatsResponse::new(
        stats.hits,
        stats.misses,
        stats.total_entries,
        cache.is_enabled(),
    ))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fake::FakeCatalog;
    use crate::models::ProductSummary;

    fn test_state() -> (AppState, Arc<FakeCatalog>) {
        let catalog = Arc::new(FakeCatalog::widgets());
        let state = AppState::new(catalog.clone() as Arc<dyn CatalogSource>, true);
        (state, catalog)
    }

    #[tokio::test]
    async fn test_search_handler_returns_matching_codes() {
        let (state, _) = test_state();

        let response = search_handler(State(state), Path("wid".to_string()))
            .await
            .unwrap();
        assert_eq!(response.total, 2);
        assert_eq!(response.matches, vec!["Widget-1", "Widget-3"]);
        assert_eq!(response.query, "wid");
    }

    #[tokio::test]
    async fn test_all_products_handler_serves_listing() {
        let (state, catalog) = test_state();

        let response = all_products_handler(State(state.clone())).await.unwrap();
        assert_eq!(response.total, 3);

        // A second request reuses the stored listing.
        all_products_handler(State(state)).await.unwrap();
        assert_eq!(catalog.all_calls(), 1);
    }

    #[tokio::test]
    async fn test_refresh_handler_replaces_listing() {
        let (state, catalog) = test_state();

        all_products_handler(State(state.clone())).await.unwrap();
        catalog.set_products(vec![ProductSummary::new(9, "Cog-9", "A cog")]);

        let response = refresh_products_handler(State(state.clone())).await.unwrap();
        assert_eq!(response.total, 1);
        assert_eq!(response.products[0].code, "Cog-9");

        let served = all_products_handler(State(state)).await.unwrap();
        assert_eq!(served.total, 1);
    }

    #[tokio::test]
    async fn test_product_detail_handler_returns_payload_verbatim() {
        let (state, catalog) = test_state();

        let response = product_detail_handler(State(state), Path("1".to_string()))
            .await
            .unwrap();
        assert_eq!(Some(response.0), catalog.detail_for(ProductId(1)));
    }

    #[tokio::test]
    async fn test_product_detail_handler_rejects_non_numeric_id() {
        let (state, catalog) = test_state();

        let result = product_detail_handler(State(state), Path("abc".to_string())).await;
        assert!(matches!(result, Err(CatalogError::InvalidInput(_))));
        assert_eq!(catalog.detail_calls(), 0);
    }

    #[tokio::test]
    async fn test_cache_toggle_handler_flips_flag() {
        let (state, _) = test_state();

        let response = cache_toggle_handler(
            State(state.clone()),
            Json(CacheToggleRequest { enabled: false }),
        )
        .await;
        assert!(!response.enabled);
        assert_eq!(response.message, "Caching disabled");
        assert!(!state.cache.read().await.is_enabled());
    }

    #[tokio::test]
    async fn test_cache_snapshot_handler_reflects_lookups() {
        let (state, _) = test_state();

        product_detail_handler(State(state.clone()), Path("1".to_string()))
            .await
            .unwrap();

        let response = cache_snapshot_handler(State(state)).await;
        assert!(response.enabled);
        assert_eq!(response.total_entries, 1);
        assert!(response.entries.contains_key(&ProductId(1)));
    }

    #[tokio::test]
    async fn test_cache_clear_handler_reports_count() {
        let (state, _) = test_state();

        product_detail_handler(State(state.clone()), Path("1".to_string()))
            .await
            .unwrap();
        product_detail_handler(State(state.clone()), Path("2".to_string()))
            .await
            .unwrap();

        let response = cache_clear_handler(State(state.clone())).await;
        assert_eq!(response.cleared, 2);
        assert!(state.cache.read().await.is_empty());
    }

    #[tokio::test]
    async fn test_cache_remove_handler() {
        let (state, _) = test_state();

        product_detail_handler(State(state.clone()), Path("1".to_string()))
            .await
            .unwrap();

        let response = cache_remove_handler(State(state.clone()), Path("1".to_string()))
            .await
            .unwrap();
        assert_eq!(response.id, ProductId(1));

        // Removing it again reports the entry as missing.
        let result = cache_remove_handler(State(state), Path("1".to_string())).await;
        assert!(matches!(result, Err(CatalogError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_cache_stats_handler_counts_hits_and_misses() {
        let (state, _) = test_state();

        product_detail_handler(State(state.clone()), Path("1".to_string()))
            .await
            .unwrap();
        product_detail_handler(State(state.clone()), Path("1".to_string()))
            .await
            .unwrap();

        let response = cache_stats_handler(State(state)).await;
        assert_eq!(response.hits, 1);
        assert_eq!(response.misses, 1);
        assert_eq!(response.total_entries, 1);
        assert!(response.enabled);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
