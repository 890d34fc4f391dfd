//! Cache Store Module
//!
//! Process-wide product cache: the id → detail mapping plus the runtime
//! enable/disable flag. The cache performs no I/O itself; it is
//! populated exclusively by lookup write-backs of successful catalog
//! fetches, so it never holds partial or error results.

use std::collections::HashMap;

use crate::cache::{CacheStats, CachedProduct};
use crate::models::{ProductDetail, ProductId};

// == Product Cache ==
/// In-memory product cache with a global enable flag.
///
/// All mutation goes through `&mut self`; concurrent access is
/// serialized by the `Arc<RwLock<ProductCache>>` the application state
/// owns. Disabling the cache retains the stored entries (they are
/// bypassed, not wiped), and clearing the cache does not change the
/// enabled flag.
#[derive(Debug)]
pub struct ProductCache {
    /// id → cached record storage
    entries: HashMap<ProductId, CachedProduct>,
    /// Whether lookups may consult and populate the cache
    enabled: bool,
    /// Consultation counters
    stats: CacheStats,
}

impl ProductCache {
    // == Constructor ==
    /// Creates an empty cache with the given initial enabled state.
    pub fn new(enabled: bool) -> Self {
        Self {
            entries: HashMap::new(),
            enabled,
            stats: CacheStats::new(),
        }
    }

    // == Get ==
    /// Looks up a cached detail record.
    ///
    /// O(1), never touches the network, and a missing key is an
    /// ordinary `None`, not an error. Each call records a hit or a
    /// miss. The enabled flag is not checked here: whether the cache
    /// may be consulted at all is the caller's decision.
    pub fn get(&mut self, id: ProductId) -> Option<ProductDetail> {
        match self.entries.get(&id) {
            Some(entry) => {
                self.stats.record_hit();
                Some(entry.detail.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Put ==
    /// Inserts or overwrites the entry for `id`.
    ///
    /// Total replacement: an existing entry is dropped whole, never
    /// merged field-by-field.
    pub fn put(&mut self, id: ProductId, detail: ProductDetail) {
        self.entries.insert(id, CachedProduct::new(detail));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Remove ==
    /// Removes a single entry, returning whether it existed.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let removed = self.entries.remove(&id).is_some();
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Clear ==
    /// Empties the entire mapping and returns how many entries were
    /// dropped.
    ///
    /// Clearing invalidates data only: the enabled flag and the
    /// hit/miss counters are left untouched.
    pub fn clear(&mut self) -> usize {
        let cleared = self.entries.len();
        self.entries.clear();
        self.stats.set_total_entries(0);
        cleared
    }

    // == Enable / Disable ==
    /// Toggles whether lookups may consult and populate the cache.
    ///
    /// Disabling retains existing entries; they become visible again
    /// the moment the cache is re-enabled.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether lookups may currently use the cache.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    // == Snapshot ==
    /// Copy-on-read view of the current contents for inspection.
    ///
    /// The returned map is detached from internal storage: mutating it
    /// has no effect on the cache.
    pub fn snapshot(&self) -> HashMap<ProductId, CachedProduct> {
        self.entries.clone()
    }

    // == Stats ==
    /// Returns current consultation statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
