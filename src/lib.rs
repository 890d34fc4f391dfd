//! Catalog Cache - A product search and lookup server
//!
//! Serves free-text product search and product detail from a remote
//! catalog, with a toggleable in-memory cache on the detail path.

pub mod api;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod lookup;
pub mod models;
pub mod search;

pub use api::AppState;
pub use config::Config;
pub use error::{CatalogError, Result};
