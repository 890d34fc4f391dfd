//! Error types for the catalog service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::{ErrorResponse, ProductId};

// == Catalog Error Enum ==
/// Unified error type for the catalog service.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Identifier absent in the remote catalog
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    /// Remote catalog unreachable, timed out or misbehaving
    #[error("Upstream catalog failure: {0}")]
    Upstream(String),

    /// Malformed identifier or query, rejected before any cache or
    /// network access
    #[error("Invalid request: {0}")]
    InvalidInput(String),
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        CatalogError::Upstream(err.to_string())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = match &self {
            CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
            CatalogError::Upstream(_) => StatusCode::BAD_GATEWAY,
            CatalogError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the catalog service.
pub type Result<T> = std::result::Result<T, CatalogError>;
