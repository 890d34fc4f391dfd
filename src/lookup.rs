//! Product Lookup Module
//!
//! The cache-aside read path for product detail: consult the cache,
//! fall back to the catalog source on a miss, and store the fetched
//! detail back for the next request.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::ProductCache;
use crate::catalog::CatalogSource;
use crate::error::Result;
use crate::models::{ProductDetail, ProductId};

/// Resolves product detail through the cache.
///
/// When caching is enabled a hit returns the stored detail without
/// touching the catalog; a miss fetches from the source and stores the
/// result. When caching is disabled every request goes straight to the
/// source and the cache contents are left untouched. Failed fetches
/// never store anything.
pub struct ProductLookup {
    cache: Arc<RwLock<ProductCache>>,
    source: Arc<dyn CatalogSource>,
}

impl ProductLookup {
    // == Constructor ==
    pub fn new(cache: Arc<RwLock<ProductCache>>, source: Arc<dyn CatalogSource>) -> Self {
        Self { cache, source }
    }

    // == Lookup ==
    /// Returns the detail record for a product.
    ///
    /// The cache lock is never held across the catalog fetch. Because
    /// the flag can be flipped while a fetch is in flight, it is
    /// checked again under the same lock as the store: a detail is
    /// only written back if caching is still enabled at that moment.
    ///
    /// # Arguments
    /// * `id` - The product to resolve
    ///
    /// # Returns
    /// The detail payload, or `NotFound`/`Upstream` from the source.
    pub async fn get_product_detail(&self, id: ProductId) -> Result<ProductDetail> {
        let cached = {
            let mut cache = self.cache.write().await;
            if cache.is_enabled() {
                let hit = cache.get(id);
                match hit {
                    Some(_) => debug!(%id, "cache hit"),
                    None => debug!(%id, "cache miss"),
                }
                hit
            } else {
                debug!(%id, "cache disabled, bypassing");
                None
            }
        };

        if let Some(detail) = cached {
            return Ok(detail);
        }

        let detail = self.source.fetch_detail(id).await?;

        {
            let mut cache = self.cache.write().await;
            if cache.is_enabled() {
                cache.put(id, detail.clone());
            }
        }

        Ok(detail)
    }
}
