//! # Hangar Core
//!
//! Core library for Hangar - an aircraft characteristics catalog.
//!
//! This crate provides the repository layer independent of any user
//! interface: a persistent entity-attribute-value store for aircraft and
//! their named characteristics, a filter engine mixing numeric and textual
//! comparison, and JSON import/export with name-based reconciliation.
//!
//! ## Architecture
//!
//! - **storage**: Catalog store trait and the SQLite implementation
//! - **filter**: Characteristic value predicates for the filter engine
//! - **interchange**: Dump document, native merge, and foreign-record import
//! - **numeric**: Locale-tolerant numeric parsing of stored values
//! - **fs**: Atomic file write discipline for exported documents

pub mod error;
pub mod filter;
pub mod fs;
pub mod interchange;
pub mod numeric;
pub mod storage;

pub use error::{HangarError, Result};
pub use filter::FilterOp;
pub use storage::{CatalogStore, SqliteCatalog};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
