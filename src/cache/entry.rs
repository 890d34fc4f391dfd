//! Cache Entry Module
//!
//! Defines the structure for individual cached product records.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::ProductDetail;

// == Cached Product ==
/// A single cached product record with population metadata.
///
/// Entries carry no expiry: they live until an explicit clear or
/// remove, or until the process exits. `cached_at` exists purely so
/// cache inspection can show when an entry was populated.
#[derive(Debug, Clone, Serialize)]
pub struct CachedProduct {
    /// The detail payload exactly as fetched from the catalog
    pub detail: ProductDetail,
    /// When this entry was populated
    pub cached_at: DateTime<Utc>,
}

impl CachedProduct {
    // == Constructor ==
    /// Creates a new entry stamped with the current time.
    pub fn new(detail: ProductDetail) -> Self {
        Self {
            detail,
            cached_at: Utc::now(),
        }
    }
}
