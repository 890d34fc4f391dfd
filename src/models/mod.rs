//! Domain and API models for the catalog service
//!
//! This module defines the product domain types plus the DTOs (Data
//! Transfer Objects) used for serializing/deserializing HTTP request
//! and response bodies.

pub mod product;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use product::{ProductDetail, ProductId, ProductSummary};
pub use requests::CacheToggleRequest;
pub use responses::{
    CacheClearResponse, CacheRemoveResponse, CacheSnapshotResponse, CacheToggleResponse,
    ErrorResponse, HealthResponse, ProductListResponse, SearchResponse, StatsResponse,
};
