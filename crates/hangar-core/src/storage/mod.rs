//! Storage layer: catalog store trait and the SQLite implementation.

mod sqlite;
pub mod traits;
pub mod types;

pub use sqlite::SqliteCatalog;
pub use traits::CatalogStore;
pub use types::{validate_name, Aircraft, Characteristic, CharacteristicValue};
