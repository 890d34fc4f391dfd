//! Cache Module
//!
//! In-memory product cache with runtime enable/disable, inspection and
//! explicit invalidation. There is no TTL and no eviction: entries live
//! until they are cleared, removed or the process exits.

mod entry;
mod stats;
mod store;


// Re-export public types
pub use entry::CachedProduct;
pub use stats::CacheStats;
pub use store::ProductCache;
