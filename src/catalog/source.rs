//! Catalog Source Module
//!
//! Access to the authoritative remote product catalog. `CatalogSource`
//! is the seam the lookup and index components depend on;
//! `HttpCatalogSource` is the production implementation over the
//! catalog's HTTP API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::warn;

use crate::error::{CatalogError, Result};
use crate::models::{ProductDetail, ProductId, ProductSummary};

// == Catalog Source Trait ==
/// The authoritative remote catalog the service reads from.
///
/// Implementations perform the only blocking I/O in the service. No
/// retry and no cache awareness here: `NotFound` and `Upstream`
/// failures surface to the caller unchanged, and a failed call leaves
/// no trace anywhere.
#[async_trait]
pub trait CatalogSource: Send + Sync + 'static {
    /// Fetches the detail record for a single product.
    async fn fetch_detail(&self, id: ProductId) -> Result<ProductDetail>;

    /// Fetches the complete catalog listing in upstream order.
    async fn fetch_all(&self) -> Result<Vec<ProductSummary>>;
}

// == HTTP Catalog Source ==
/// `CatalogSource` backed by the catalog's HTTP API.
///
/// Expects `GET {base_url}/products` to return the full listing as a
/// JSON array and `GET {base_url}/products/{id}` to return one detail
/// record. A 404 on a detail request maps to `NotFound`; every other
/// failure (timeout, transport error, non-2xx status, undecodable
/// body) maps to `Upstream`.
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    client: Client,
    base_url: String,
}

impl HttpCatalogSource {
    // == Constructor ==
    /// Creates a source for the given base URL with a per-request
    /// timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> reqwest::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Ok(Self { client, base_url })
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_detail(&self, id: ProductId) -> Result<ProductDetail> {
        let url = format!("{}/products/{}", self.base_url, id);
        let response = self.client.get(&url).send().await?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(CatalogError::NotFound(id)),
            status if status.is_success() => Ok(response.json::<ProductDetail>().await?),
            status => {
                warn!(%id, %status, "catalog detail request failed");
                let body = response.text().await.unwrap_or_default();
                Err(CatalogError::Upstream(format!(
                    "catalog returned {status} for product {id}: {body}"
                )))
            }
        }
    }

    async fn fetch_all(&self) -> Result<Vec<ProductSummary>> {
        let url = format!("{}/products", self.base_url);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if status.is_success() {
            Ok(response.json::<Vec<ProductSummary>>().await?)
        } else {
            warn!(%status, "catalog listing request failed");
            let body = response.text().await.unwrap_or_default();
            Err(CatalogError::Upstream(format!(
                "catalog returned {status} for product listing: {body}"
            )))
        }
    }
}
