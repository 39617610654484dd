//! SQLite catalog storage backend.
//!
//! The catalog owns the connection for its whole lifetime. Schema and
//! indexes are created idempotently on open; referential integrity is
//! enforced by the engine with cascading deletes, and case-insensitive
//! name uniqueness is a storage-level constraint on `lower(name)` rather
//! than a re-check in business logic.

use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};
use serde_json::Value;

use crate::error::{HangarError, Result};
use crate::filter::{FilterOp, ValuePredicate};
use crate::interchange::{
    self, CatalogDump, ImportReport, ValueRecord,
};
use crate::storage::traits::CatalogStore;
use crate::storage::types::{validate_name, Aircraft, Characteristic, CharacteristicValue};

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS characteristic (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    unit TEXT
);

CREATE TABLE IF NOT EXISTS aircraft (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    notes TEXT
);

CREATE TABLE IF NOT EXISTS aircraft_characteristic (
    aircraft_id INTEGER NOT NULL,
    characteristic_id INTEGER NOT NULL,
    value TEXT NOT NULL,

    PRIMARY KEY (aircraft_id, characteristic_id),
    FOREIGN KEY (aircraft_id) REFERENCES aircraft(id) ON DELETE CASCADE,
    FOREIGN KEY (characteristic_id) REFERENCES characteristic(id) ON DELETE CASCADE
);

CREATE UNIQUE INDEX IF NOT EXISTS idx_aircraft_name_ci
    ON aircraft (lower(name));
CREATE UNIQUE INDEX IF NOT EXISTS idx_characteristic_name_ci
    ON characteristic (lower(name));
"#;

/// SQLite-backed catalog store.
pub struct SqliteCatalog {
    conn: Connection,
}

impl SqliteCatalog {
    /// Open (or create) a catalog at `path`, creating parent directories
    /// and the schema as needed.
    ///
    /// # Errors
    ///
    /// Returns `HangarError::Storage` if the database cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path).map_err(|e| {
            HangarError::Storage(format!("cannot open catalog at {}: {}", path.display(), e))
        })?;
        log::info!("opened catalog at {}", path.display());
        Self::init(conn)
    }

    /// Open a throwaway in-memory catalog.
    pub fn open_in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }
}

/// `DuplicateName` when the engine reports a unique-index violation,
/// otherwise a generic storage error.
fn map_name_conflict(err: rusqlite::Error, name: &str) -> HangarError {
    match &err {
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
        {
            HangarError::DuplicateName(name.to_string())
        }
        _ => err.into(),
    }
}

/// `NotFound` when the engine reports a foreign-key violation, otherwise
/// a generic storage error.
fn map_missing_reference(err: rusqlite::Error, aircraft_id: i64, characteristic_id: i64) -> HangarError {
    match &err {
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY =>
        {
            HangarError::NotFound(format!(
                "aircraft {} or characteristic {}",
                aircraft_id, characteristic_id
            ))
        }
        _ => err.into(),
    }
}

// Row-level operations take a plain `&Connection` so the import path can
// run them inside one transaction while the public methods stay
// single-statement commits.

fn insert_aircraft(conn: &Connection, name: &str, notes: Option<&str>) -> Result<i64> {
    let name = validate_name(name)?;
    conn.execute(
        "INSERT INTO aircraft (name, notes) VALUES (?1, ?2)",
        params![name, notes],
    )
    .map_err(|e| map_name_conflict(e, &name))?;
    log::info!("created aircraft '{}'", name);
    Ok(conn.last_insert_rowid())
}

fn insert_characteristic(conn: &Connection, name: &str, unit: Option<&str>) -> Result<i64> {
    let name = validate_name(name)?;
    conn.execute(
        "INSERT INTO characteristic (name, unit) VALUES (?1, ?2)",
        params![name, unit],
    )
    .map_err(|e| map_name_conflict(e, &name))?;
    log::info!("created characteristic '{}'", name);
    Ok(conn.last_insert_rowid())
}

fn aircraft_by_name(conn: &Connection, name: &str) -> Result<Option<Aircraft>> {
    let found = conn
        .query_row(
            "SELECT id, name, notes FROM aircraft WHERE lower(name) = lower(?1)",
            [name.trim()],
            aircraft_from_row,
        )
        .optional()?;
    Ok(found)
}

fn characteristic_by_name(conn: &Connection, name: &str) -> Result<Option<Characteristic>> {
    let found = conn
        .query_row(
            "SELECT id, name, unit FROM characteristic WHERE lower(name) = lower(?1)",
            [name.trim()],
            characteristic_from_row,
        )
        .optional()?;
    Ok(found)
}

fn set_value_row(conn: &Connection, aircraft_id: i64, characteristic_id: i64, value: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO aircraft_characteristic (aircraft_id, characteristic_id, value)
         VALUES (?1, ?2, ?3)
         ON CONFLICT (aircraft_id, characteristic_id) DO UPDATE SET value = excluded.value",
        params![aircraft_id, characteristic_id, value],
    )
    .map_err(|e| map_missing_reference(e, aircraft_id, characteristic_id))?;
    log::debug!("set value for {}/{}", aircraft_id, characteristic_id);
    Ok(())
}

fn update_unit_row(conn: &Connection, id: i64, unit: Option<&str>) -> Result<()> {
    let affected = conn.execute(
        "UPDATE characteristic SET unit = ?1 WHERE id = ?2",
        params![unit, id],
    )?;
    if affected == 0 {
        return Err(HangarError::NotFound(format!("characteristic {}", id)));
    }
    log::debug!("updated unit for characteristic {}", id);
    Ok(())
}

fn aircraft_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Aircraft> {
    Ok(Aircraft {
        id: row.get(0)?,
        name: row.get(1)?,
        notes: row.get(2)?,
    })
}

fn characteristic_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Characteristic> {
    Ok(Characteristic {
        id: row.get(0)?,
        name: row.get(1)?,
        unit: row.get(2)?,
    })
}

impl CatalogStore for SqliteCatalog {
    fn create_aircraft(&mut self, name: &str, notes: Option<&str>) -> Result<i64> {
        insert_aircraft(&self.conn, name, notes)
    }

    fn rename_aircraft(&mut self, id: i64, new_name: &str) -> Result<()> {
        let new_name = validate_name(new_name)?;
        let affected = self
            .conn
            .execute(
                "UPDATE aircraft SET name = ?1 WHERE id = ?2",
                params![new_name, id],
            )
            .map_err(|e| map_name_conflict(e, &new_name))?;
        if affected == 0 {
            return Err(HangarError::NotFound(format!("aircraft {}", id)));
        }
        log::info!("renamed aircraft {} to '{}'", id, new_name);
        Ok(())
    }

    fn update_notes(&mut self, id: i64, notes: Option<&str>) -> Result<()> {
        let affected = self.conn.execute(
            "UPDATE aircraft SET notes = ?1 WHERE id = ?2",
            params![notes, id],
        )?;
        if affected == 0 {
            return Err(HangarError::NotFound(format!("aircraft {}", id)));
        }
        log::debug!("updated notes for aircraft {}", id);
        Ok(())
    }

    fn delete_aircraft(&mut self, id: i64) -> Result<()> {
        // Idempotent: no rowcount check.
        self.conn
            .execute("DELETE FROM aircraft WHERE id = ?1", [id])?;
        log::info!("deleted aircraft {}", id);
        Ok(())
    }

    fn get_aircraft(&self, id: i64) -> Result<Aircraft> {
        self.conn
            .query_row(
                "SELECT id, name, notes FROM aircraft WHERE id = ?1",
                [id],
                aircraft_from_row,
            )
            .optional()?
            .ok_or_else(|| HangarError::NotFound(format!("aircraft {}", id)))
    }

    fn find_aircraft_by_name(&self, name: &str) -> Result<Option<Aircraft>> {
        aircraft_by_name(&self.conn, name)
    }

    fn list_aircraft(&self, filter: Option<&str>) -> Result<Vec<Aircraft>> {
        let mut sql = String::from("SELECT id, name, notes FROM aircraft");
        if filter.is_some() {
            sql.push_str(" WHERE lower(name) LIKE '%' || lower(?1) || '%'");
        }
        sql.push_str(" ORDER BY name COLLATE NOCASE, id");

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = match filter {
            Some(text) => stmt.query_map([text], aircraft_from_row)?,
            None => stmt.query_map([], aircraft_from_row)?,
        };
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    fn create_characteristic(&mut self, name: &str, unit: Option<&str>) -> Result<i64> {
        insert_characteristic(&self.conn, name, unit)
    }

    fn rename_characteristic(&mut self, id: i64, new_name: &str) -> Result<()> {
        let new_name = validate_name(new_name)?;
        let affected = self
            .conn
            .execute(
                "UPDATE characteristic SET name = ?1 WHERE id = ?2",
                params![new_name, id],
            )
            .map_err(|e| map_name_conflict(e, &new_name))?;
        if affected == 0 {
            return Err(HangarError::NotFound(format!("characteristic {}", id)));
        }
        log::info!("renamed characteristic {} to '{}'", id, new_name);
        Ok(())
    }

    fn update_unit(&mut self, id: i64, unit: Option<&str>) -> Result<()> {
        update_unit_row(&self.conn, id, unit)
    }

    fn delete_characteristic(&mut self, id: i64) -> Result<()> {
        self.conn
            .execute("DELETE FROM characteristic WHERE id = ?1", [id])?;
        log::info!("deleted characteristic {}", id);
        Ok(())
    }

    fn get_characteristic(&self, id: i64) -> Result<Characteristic> {
        self.conn
            .query_row(
                "SELECT id, name, unit FROM characteristic WHERE id = ?1",
                [id],
                characteristic_from_row,
            )
            .optional()?
            .ok_or_else(|| HangarError::NotFound(format!("characteristic {}", id)))
    }

    fn find_characteristic_by_name(&self, name: &str) -> Result<Option<Characteristic>> {
        characteristic_by_name(&self.conn, name)
    }

    fn list_characteristics(&self, filter: Option<&str>) -> Result<Vec<Characteristic>> {
        let mut sql = String::from("SELECT id, name, unit FROM characteristic");
        if filter.is_some() {
            sql.push_str(" WHERE lower(name) LIKE '%' || lower(?1) || '%'");
        }
        sql.push_str(" ORDER BY name COLLATE NOCASE, id");

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = match filter {
            Some(text) => stmt.query_map([text], characteristic_from_row)?,
            None => stmt.query_map([], characteristic_from_row)?,
        };
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    fn set_value(&mut self, aircraft_id: i64, characteristic_id: i64, value: &str) -> Result<()> {
        set_value_row(&self.conn, aircraft_id, characteristic_id, value)
    }

    fn remove_value(&mut self, aircraft_id: i64, characteristic_id: i64) -> Result<()> {
        // Idempotent, like entity deletes.
        self.conn.execute(
            "DELETE FROM aircraft_characteristic
             WHERE aircraft_id = ?1 AND characteristic_id = ?2",
            params![aircraft_id, characteristic_id],
        )?;
        log::debug!("removed value for {}/{}", aircraft_id, characteristic_id);
        Ok(())
    }

    fn values_for(&self, aircraft_id: i64) -> Result<Vec<CharacteristicValue>> {
        let mut stmt = self.conn.prepare(
            "SELECT ac.characteristic_id, c.name, c.unit, ac.value
             FROM aircraft_characteristic ac
             JOIN characteristic c ON c.id = ac.characteristic_id
             WHERE ac.aircraft_id = ?1
             ORDER BY c.name COLLATE NOCASE, c.id",
        )?;
        let rows = stmt.query_map([aircraft_id], |row| {
            Ok(CharacteristicValue {
                characteristic_id: row.get(0)?,
                name: row.get(1)?,
                unit: row.get(2)?,
                value: row.get(3)?,
            })
        })?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    fn filter_by_characteristic(
        &self,
        characteristic: &str,
        op: FilterOp,
        operand: &str,
        upper: Option<&str>,
    ) -> Result<Vec<Aircraft>> {
        let predicate = ValuePredicate::new(op, operand, upper)?;
        let Some(found) = characteristic_by_name(&self.conn, characteristic)? else {
            // Unknown characteristic is an empty result, not an error.
            return Ok(Vec::new());
        };

        let mut stmt = self.conn.prepare(
            "SELECT a.id, a.name, a.notes, ac.value
             FROM aircraft_characteristic ac
             JOIN aircraft a ON a.id = ac.aircraft_id
             WHERE ac.characteristic_id = ?1
             ORDER BY a.name COLLATE NOCASE, a.id",
        )?;
        let rows = stmt.query_map([found.id], |row| {
            let aircraft = aircraft_from_row(row)?;
            let value: String = row.get(3)?;
            Ok((aircraft, value))
        })?;

        let mut matches = Vec::new();
        for row in rows {
            let (aircraft, value) = row?;
            if predicate.matches(&value) {
                matches.push(aircraft);
            }
        }
        Ok(matches)
    }

    fn export_dump(&self) -> Result<CatalogDump> {
        let aircraft = self.list_aircraft(None)?;
        let characteristic = self.list_characteristics(None)?;

        let mut values = Vec::new();
        for entry in &aircraft {
            for value in self.values_for(entry.id)? {
                values.push(ValueRecord {
                    aircraft: entry.name.clone(),
                    characteristic: value.name,
                    value: Some(value.value),
                });
            }
        }

        Ok(CatalogDump {
            aircraft,
            characteristic,
            values,
        })
    }

    fn import_document(&mut self, doc: &Value) -> Result<ImportReport> {
        let Some(object) = doc.as_object() else {
            return Err(HangarError::Validation(
                "import document must be a JSON object".to_string(),
            ));
        };

        // One transaction for the whole import: a failure rolls back every
        // row instead of leaving a partially merged catalog.
        let tx = self.conn.transaction()?;
        let report = if interchange::is_native_dump(object) {
            let dump: CatalogDump = serde_json::from_value(doc.clone())
                .map_err(|e| HangarError::Validation(format!("malformed dump document: {}", e)))?;
            merge_dump(&tx, &dump)?
        } else {
            import_foreign(&tx, object)?
        };
        tx.commit()?;

        log::info!(
            "import complete: {} aircraft, {} characteristics, {} values, {} skipped",
            report.aircraft_created,
            report.characteristics_created,
            report.values_set,
            report.skipped
        );
        Ok(report)
    }
}

/// Additive merge of a native dump: entities are matched case-insensitively
/// by name, missing ones are created, and a characteristic's unit is
/// back-filled only when the existing record has none. Value rows that
/// reference an unresolvable pair are skipped, not fatal.
fn merge_dump(conn: &Connection, dump: &CatalogDump) -> Result<ImportReport> {
    let mut report = ImportReport::default();

    for entry in &dump.aircraft {
        if entry.name.trim().is_empty() {
            log::warn!("skipping aircraft with blank name");
            report.skipped += 1;
            continue;
        }
        if aircraft_by_name(conn, &entry.name)?.is_none() {
            insert_aircraft(conn, &entry.name, entry.notes.as_deref())?;
            report.aircraft_created += 1;
        }
    }

    for entry in &dump.characteristic {
        if entry.name.trim().is_empty() {
            log::warn!("skipping characteristic with blank name");
            report.skipped += 1;
            continue;
        }
        match characteristic_by_name(conn, &entry.name)? {
            None => {
                insert_characteristic(conn, &entry.name, entry.unit.as_deref())?;
                report.characteristics_created += 1;
            }
            Some(existing) => {
                if existing.unit.is_none() {
                    if let Some(unit) = entry.unit.as_deref() {
                        update_unit_row(conn, existing.id, Some(unit))?;
                    }
                }
            }
        }
    }

    for record in &dump.values {
        let aircraft = aircraft_by_name(conn, &record.aircraft)?;
        let characteristic = characteristic_by_name(conn, &record.characteristic)?;
        match (aircraft, characteristic, record.value.as_deref()) {
            (Some(aircraft), Some(characteristic), Some(value)) => {
                set_value_row(conn, aircraft.id, characteristic.id, value)?;
                report.values_set += 1;
            }
            _ => {
                log::warn!(
                    "skipping value for unresolved pair '{}'/'{}'",
                    record.aircraft,
                    record.characteristic
                );
                report.skipped += 1;
            }
        }
    }

    Ok(report)
}

/// Import an arbitrary JSON object as one foreign aircraft record.
fn import_foreign(conn: &Connection, object: &serde_json::Map<String, Value>) -> Result<ImportReport> {
    let mut report = ImportReport::default();

    let (base_name, name_key) = interchange::probe_name(object);

    // Collision gets a numeric suffix rather than failing the import.
    let mut name = base_name.clone();
    let mut attempt = 2;
    while aircraft_by_name(conn, &name)?.is_some() {
        name = format!("{} ({})", base_name, attempt);
        attempt += 1;
    }

    let aircraft_id = insert_aircraft(conn, &name, None)?;
    report.aircraft_created += 1;

    for (key, value) in interchange::flatten_record(object, name_key.as_deref()) {
        let (label, unit) = interchange::infer_label_unit(&key);
        let characteristic_id = match characteristic_by_name(conn, &label)? {
            Some(existing) => existing.id,
            None => {
                let id = insert_characteristic(conn, &label, unit.as_deref())?;
                report.characteristics_created += 1;
                id
            }
        };
        set_value_row(conn, aircraft_id, characteristic_id, &value)?;
        report.values_set += 1;
    }

    Ok(report)
}
