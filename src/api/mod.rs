//! API Module
//!
//! HTTP handlers and routing for the catalog service REST API.
//!
//! # Endpoints
//! - `GET /search/:query` - Search the catalog listing
//! - `GET /products` - Full catalog listing
//! - `POST /products/refresh` - Re-fetch the catalog listing
//! - `GET /products/:id` - Product detail (cache-aside)
//! - `PUT /cache/enabled` - Toggle caching
//! - `GET /cache/all` - Snapshot of cached entries
//! - `GET /cache/stats` - Cache statistics
//! - `DELETE /cache/:id` - Remove one cached entry
//! - `DELETE /cache` - Clear the cache
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
