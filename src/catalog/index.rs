//! Catalog Index Module
//!
//! Lazily populated in-memory copy of the full catalog listing. The
//! first request for the listing fetches it from the catalog source;
//! every later request serves the stored copy until an explicit
//! refresh replaces it.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use crate::catalog::CatalogSource;
use crate::error::Result;
use crate::models::ProductSummary;

/// Holds the catalog listing once fetched.
///
/// The listing moves through three states: unpopulated (no fetch has
/// succeeded yet), fetching, and populated. A failed fetch installs
/// nothing, so the next request simply tries again. Concurrent first
/// requests may each fetch; the first set installed wins and later
/// results are dropped.
pub struct CatalogIndex {
    source: Arc<dyn CatalogSource>,
    products: RwLock<Option<Arc<Vec<ProductSummary>>>>,
}

impl CatalogIndex {
    // == Constructor ==
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self {
            source,
            products: RwLock::new(None),
        }
    }

    // == Listing Access ==
    /// Returns the full product listing, fetching it from the catalog
    /// source if no copy is stored yet.
    ///
    /// The source is never called while the lock is held. If another
    /// request populated the index in the meantime, the freshly
    /// fetched set is discarded in favor of the installed one.
    pub async fn all_products(&self) -> Result<Arc<Vec<ProductSummary>>> {
        if let Some(products) = self.products.read().await.as_ref() {
            return Ok(Arc::clone(products));
        }

        let fetched = Arc::new(self.source.fetch_all().await?);

        let mut slot = self.products.write().await;
        match slot.as_ref() {
            Some(existing) => Ok(Arc::clone(existing)),
            None => {
                info!(total = fetched.len(), "catalog index populated");
                *slot = Some(Arc::clone(&fetched));
                Ok(fetched)
            }
        }
    }

    /// Discards the stored listing and fetches a fresh copy.
    ///
    /// On failure the previous listing stays in place and keeps
    /// serving requests.
    pub async fn refresh(&self) -> Result<Arc<Vec<ProductSummary>>> {
        let fetched = Arc::new(self.source.fetch_all().await?);

        let mut slot = self.products.write().await;
        info!(total = fetched.len(), "catalog index refreshed");
        *slot = Some(Arc::clone(&fetched));
        Ok(fetched)
    }

    /// Whether a listing has been stored.
    pub async fn is_populated(&self) -> bool {
        self.products.read().await.is_some()
    }
}
