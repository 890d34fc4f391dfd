//! Search Module
//!
//! Case-insensitive free-text search over the catalog listing. Matches
//! come from the index, never from the detail cache, and are returned
//! as product codes in catalog order.

use std::sync::Arc;

use tracing::debug;

use crate::catalog::CatalogIndex;
use crate::error::{CatalogError, Result};
use crate::models::ProductSummary;

/// Matches free-text queries against the catalog listing.
pub struct SearchEngine {
    index: Arc<CatalogIndex>,
}

impl SearchEngine {
    // == Constructor ==
    pub fn new(index: Arc<CatalogIndex>) -> Self {
        Self { index }
    }

    // == Search ==
    /// Returns the codes of all products whose code or description
    /// contains the query, ignoring case.
    ///
    /// The query is used as-is apart from lowercasing: no trimming, no
    /// tokenization. An empty query is rejected rather than matching
    /// everything. No matches is an empty result, not an error.
    ///
    /// # Arguments
    /// * `query` - Free-text fragment to look for
    ///
    /// # Returns
    /// Matching product codes in catalog order.
    pub async fn search(&self, query: &str) -> Result<Vec<String>> {
        if query.is_empty() {
            return Err(CatalogError::InvalidInput(
                "search query must not be empty".to_string(),
            ));
        }

        let needle = query.to_lowercase();
        let products = self.index.all_products().await?;

        let matches: Vec<String> = products
            .iter()
            .filter(|product| matches_query(product, &needle))
            .map(|product| product.code.clone())
            .collect();

        debug!(query, total = matches.len(), "search completed");
        Ok(matches)
    }
}

fn matches_query(product: &ProductSummary, needle_lower: &str) -> bool {
    product.code.to_lowercase().contains(needle_lower)
        || product.description.to_lowercase().contains(needle_lower)
}
