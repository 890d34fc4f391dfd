//! Product domain types
//!
//! Identifiers and catalog payload shapes shared by the cache, lookup
//! and search components.

use std::fmt;

use serde::{Deserialize, Serialize};

// == Product Id ==
/// Numeric identifier a product carries in the remote catalog.
///
/// Assigned by the catalog and immutable; the cache keys its entries
/// with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl ProductId {
    /// Creates an identifier from its raw numeric value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

// == Product Summary ==
/// One entry of the full catalog listing.
///
/// Carries the identifier plus the human-readable code and description
/// that free-text search matches against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    /// Catalog identifier
    pub id: ProductId,
    /// Human-readable product code (e.g. "Widget-1")
    pub code: String,
    /// Free-text description; empty when the catalog omits it
    #[serde(default)]
    pub description: String,
}

impl ProductSummary {
    /// Creates a summary entry.
    pub fn new(id: u64, code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            code: code.into(),
            description: description.into(),
        }
    }
}

// == Product Detail ==
/// Full product record exactly as the remote catalog returned it.
///
/// The catalog, not this service, defines the fields, so the payload is
/// kept opaque: stored as fetched, served verbatim, replaced whole and
/// never field-mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductDetail(pub serde_json::Value);
