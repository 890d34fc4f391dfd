//! API Routes
//!
//! Configures the Axum router with all catalog service endpoints.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    all_products_handler, cache_clear_handler, cache_remove_handler, cache_snapshot_handler,
    cache_stats_handler, cache_toggle_handler, health_handler, product_detail_handler,
    refresh_products_handler, search_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /search/:query` - Search the catalog listing
/// - `GET /products` - Full catalog listing
/// - `POST /products/refresh` - Re-fetch the catalog listing
/// - `GET /products/:id` - Product detail (cache-aside)
/// - `PUT /cache/enabled` - Toggle caching
/// - `GET /cache/all` - Snapshot of cached entries
/// - `GET /cache/stats` - Cache statistics
/// - `DELETE /cache/:id` - Remove one cached entry
/// - `DELETE /cache` - Clear the cache
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route("/search/:query", get(search_handler))
        .route("/products", get(all_products_handler))
        .route("/products/refresh", post(refresh_products_handler))
        .route("/products/:id", get(product_detail_handler))
        .route("/cache/enabled", put(cache_toggle_handler))
        .route("/cache/all", get(cache_snapshot_handler))
        .route("/cache/stats", get(cache_stats_handler))
        .route("/cache/:id", delete(cache_remove_handler))
        .route("/cache", delete(cache_clear_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
