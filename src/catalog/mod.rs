//! Catalog Module
//!
//! The remote catalog seam and the in-memory listing built on top of
//! it.

mod index;
mod source;

pub use index::CatalogIndex;
pub use source::{CatalogSource, HttpCatalogSource};

#[cfg(test)]
pub(crate) use source::fake;
