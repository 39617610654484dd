//! Catalog store trait definition.
//!
//! The `CatalogStore` trait defines the operation surface that external
//! consumers (the CLI, scripts, tests) program against. The abstraction
//! keeps the filter engine and the import/export reconciler independent
//! of the backing engine.

use serde_json::Value;

use super::types::{Aircraft, Characteristic, CharacteristicValue};
use crate::error::Result;
use crate::filter::FilterOp;
use crate::interchange::{CatalogDump, ImportReport};

/// Repository interface for the aircraft characteristics catalog.
///
/// All implementations must ensure:
/// - Aircraft and characteristic names are unique ignoring case and
///   surrounding whitespace; colliding writes fail without mutating state
/// - Deleting an entity cascades to its attribute values
/// - Values are stored verbatim; numeric interpretation is read-time only
/// - Each mutating call commits durably before returning
pub trait CatalogStore {
    // --- Aircraft operations ---

    /// Create an aircraft, returning its surrogate id.
    ///
    /// # Errors
    ///
    /// Returns `HangarError::Validation` for a blank name and
    /// `HangarError::DuplicateName` for a case-insensitive collision.
    fn create_aircraft(&mut self, name: &str, notes: Option<&str>) -> Result<i64>;

    /// Rename an aircraft.
    ///
    /// # Errors
    ///
    /// Returns `HangarError::NotFound` if the id does not exist and
    /// `HangarError::DuplicateName` if the new name collides.
    fn rename_aircraft(&mut self, id: i64, new_name: &str) -> Result<()>;

    /// Replace an aircraft's notes.
    fn update_notes(&mut self, id: i64, notes: Option<&str>) -> Result<()>;

    /// Delete an aircraft and, by cascade, all its values.
    ///
    /// Deleting a non-existent id is not an error.
    fn delete_aircraft(&mut self, id: i64) -> Result<()>;

    /// Get an aircraft by id.
    fn get_aircraft(&self, id: i64) -> Result<Aircraft>;

    /// Case-insensitive lookup by exact name.
    fn find_aircraft_by_name(&self, name: &str) -> Result<Option<Aircraft>>;

    /// List aircraft ordered by name, optionally restricted to names
    /// containing `filter` (case-insensitive substring).
    fn list_aircraft(&self, filter: Option<&str>) -> Result<Vec<Aircraft>>;

    // --- Characteristic operations ---

    /// Create a characteristic, returning its surrogate id.
    fn create_characteristic(&mut self, name: &str, unit: Option<&str>) -> Result<i64>;

    /// Rename a characteristic.
    fn rename_characteristic(&mut self, id: i64, new_name: &str) -> Result<()>;

    /// Replace a characteristic's unit label.
    fn update_unit(&mut self, id: i64, unit: Option<&str>) -> Result<()>;

    /// Delete a characteristic and, by cascade, all values keyed to it.
    ///
    /// Deleting a non-existent id is not an error.
    fn delete_characteristic(&mut self, id: i64) -> Result<()>;

    /// Get a characteristic by id.
    fn get_characteristic(&self, id: i64) -> Result<Characteristic>;

    /// Case-insensitive lookup by exact name.
    fn find_characteristic_by_name(&self, name: &str) -> Result<Option<Characteristic>>;

    /// List characteristics ordered by name, optionally filtered.
    fn list_characteristics(&self, filter: Option<&str>) -> Result<Vec<Characteristic>>;

    // --- Attribute values ---

    /// Upsert the value for one (aircraft, characteristic) pair.
    ///
    /// # Errors
    ///
    /// Returns `HangarError::NotFound` if either endpoint does not exist.
    fn set_value(&mut self, aircraft_id: i64, characteristic_id: i64, value: &str) -> Result<()>;

    /// Remove the value for one pair. Idempotent.
    fn remove_value(&mut self, aircraft_id: i64, characteristic_id: i64) -> Result<()>;

    /// All values held by one aircraft, ordered by characteristic name.
    fn values_for(&self, aircraft_id: i64) -> Result<Vec<CharacteristicValue>>;

    // --- Filter engine ---

    /// Evaluate a single-characteristic predicate over all aircraft.
    ///
    /// An unknown characteristic name yields an empty result. Only
    /// aircraft currently holding a value for the characteristic
    /// participate. Results are ordered by aircraft name, ties by id.
    ///
    /// # Errors
    ///
    /// Returns `HangarError::Validation` if a numeric operator is given a
    /// non-numeric query operand.
    fn filter_by_characteristic(
        &self,
        characteristic: &str,
        op: FilterOp,
        operand: &str,
        upper: Option<&str>,
    ) -> Result<Vec<Aircraft>>;

    // --- Import/export ---

    /// Serialize the whole store into a portable dump document.
    fn export_dump(&self) -> Result<CatalogDump>;

    /// Import a JSON document, dispatching on its top-level shape.
    ///
    /// A document carrying any native dump key is merged additively;
    /// anything else that is an object is treated as a single foreign
    /// aircraft record. The whole import runs in one transaction and is
    /// rolled back on failure.
    ///
    /// # Errors
    ///
    /// Returns `HangarError::Validation` for a non-object document.
    fn import_document(&mut self, doc: &Value) -> Result<ImportReport>;
}
