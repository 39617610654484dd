//! Import/export document model and foreign-record heuristics.
//!
//! The native dump is a self-describing JSON document with three top-level
//! sequences. Values reference aircraft and characteristics by name rather
//! than surrogate id, so a dump is portable across store instances.
//!
//! Anything that is a JSON object but carries none of the native keys is
//! treated as a single foreign aircraft record: nested objects are
//! flattened into dotted keys and each scalar leaf becomes a
//! characteristic, with the label and unit inferred from the field name.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{HangarError, Result};
use crate::fs::write_atomic;
use crate::storage::traits::CatalogStore;
use crate::storage::types::{Aircraft, Characteristic};

/// One value row in a dump, keyed by names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValueRecord {
    #[serde(default)]
    pub aircraft: String,
    #[serde(default)]
    pub characteristic: String,
    #[serde(default)]
    pub value: Option<String>,
}

/// The native dump document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDump {
    #[serde(default)]
    pub aircraft: Vec<Aircraft>,
    #[serde(default)]
    pub characteristic: Vec<Characteristic>,
    #[serde(default)]
    pub values: Vec<ValueRecord>,
}

/// Outcome counters for an import, so callers can report what a
/// skip-and-continue merge actually did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub aircraft_created: usize,
    pub characteristics_created: usize,
    pub values_set: usize,
    pub skipped: usize,
}

/// Keys whose presence marks a document as a native dump.
const NATIVE_KEYS: &[&str] = &["aircraft", "characteristic", "values"];

/// Top-level fields probed, in order, for a foreign record's display name.
const NAME_FIELDS: &[&str] = &["name", "aircraft", "aircraft_name", "model", "designation"];

/// Placeholder when no name field is present.
pub const FALLBACK_NAME: &str = "Imported aircraft";

/// Exact field-name table: flattened key (lowercased) to label and unit.
/// New patterns are additions to this table, not new code paths.
const KNOWN_FIELDS: &[(&str, &str, Option<&str>)] = &[
    ("wingspan", "Wingspan", Some("m")),
    ("length", "Length", Some("m")),
    ("height", "Height", Some("m")),
    ("wing_area", "Wing area", Some("m2")),
    ("mtow", "MTOW", Some("kg")),
    ("max_takeoff_weight", "MTOW", Some("kg")),
    ("empty_weight", "Empty weight", Some("kg")),
    ("max_speed", "Max speed", Some("km/h")),
    ("cruise_speed", "Cruise speed", Some("km/h")),
    ("stall_speed", "Stall speed", Some("km/h")),
    ("range", "Range", Some("km")),
    ("ceiling", "Service ceiling", Some("m")),
    ("service_ceiling", "Service ceiling", Some("m")),
    ("fuel_capacity", "Fuel capacity", Some("L")),
    ("crew", "Crew", None),
    ("seats", "Seats", None),
    ("engine", "Engine", None),
    ("engines", "Engines", None),
    ("manufacturer", "Manufacturer", None),
    ("first_flight", "First flight", None),
];

/// Ordered unit-suffix rules; longer suffixes are listed before shorter
/// ones so `_kts` wins over `_kt` and `_kmh` over `_m`.
const UNIT_SUFFIXES: &[(&str, &str)] = &[
    ("_kmh", "km/h"),
    ("_kph", "km/h"),
    ("_mph", "mph"),
    ("_kts", "kt"),
    ("_kt", "kt"),
    ("_km", "km"),
    ("_ft", "ft"),
    ("_lbs", "lb"),
    ("_lb", "lb"),
    ("_kg", "kg"),
    ("_hp", "hp"),
    ("_kw", "kW"),
    ("_min", "min"),
    ("_l", "L"),
    ("_m", "m"),
];

/// True when the top-level object carries any of the native dump keys.
pub fn is_native_dump(doc: &serde_json::Map<String, Value>) -> bool {
    NATIVE_KEYS.iter().any(|key| doc.contains_key(*key))
}

/// Resolve a foreign record's display name by probing candidate fields.
///
/// Returns the matched top-level key alongside the name so the caller can
/// exclude that field from the flattened characteristics.
pub fn probe_name(doc: &serde_json::Map<String, Value>) -> (String, Option<String>) {
    for field in NAME_FIELDS {
        if let Some(Value::String(text)) = doc.get(*field) {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                return (trimmed.to_string(), Some((*field).to_string()));
            }
        }
    }
    (FALLBACK_NAME.to_string(), None)
}

/// Flatten a foreign record into `(dotted key, scalar value)` pairs.
///
/// Nested objects contribute dotted keys; arrays and nulls are skipped.
pub fn flatten_record(doc: &serde_json::Map<String, Value>, skip_key: Option<&str>) -> Vec<(String, String)> {
    let mut leaves = Vec::new();
    for (key, value) in doc {
        if Some(key.as_str()) == skip_key {
            continue;
        }
        flatten_into(key, value, &mut leaves);
    }
    leaves
}

fn flatten_into(prefix: &str, value: &Value, out: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (key, nested) in map {
                flatten_into(&format!("{}.{}", prefix, key), nested, out);
            }
        }
        Value::String(text) => out.push((prefix.to_string(), text.clone())),
        Value::Number(number) => out.push((prefix.to_string(), number.to_string())),
        Value::Bool(flag) => out.push((prefix.to_string(), flag.to_string())),
        Value::Null | Value::Array(_) => {}
    }
}

/// Infer a human-readable label and optional unit from a flattened key.
///
/// The exact table is consulted first (whole key, then final dotted
/// segment), then the suffix rules; otherwise the key is humanized as-is.
pub fn infer_label_unit(key: &str) -> (String, Option<String>) {
    let lowered = key.to_lowercase();

    if let Some(hit) = lookup_known(&lowered) {
        return hit;
    }
    if let Some(segment) = lowered.rsplit('.').next() {
        if segment != lowered {
            if let Some((label, unit)) = lookup_known(segment) {
                return (label, unit);
            }
        }
    }

    for (suffix, unit) in UNIT_SUFFIXES {
        if let Some(stem) = lowered.strip_suffix(suffix) {
            if !stem.is_empty() {
                return (humanize(stem), Some((*unit).to_string()));
            }
        }
    }

    (humanize(&lowered), None)
}

fn lookup_known(key: &str) -> Option<(String, Option<String>)> {
    KNOWN_FIELDS
        .iter()
        .find(|(pattern, _, _)| *pattern == key)
        .map(|(_, label, unit)| ((*label).to_string(), unit.map(String::from)))
}

/// Turn a dotted, underscored key into a display label.
fn humanize(key: &str) -> String {
    let joined = key
        .split(['.', '_'])
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    let mut chars = joined.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => joined,
    }
}

/// Export the whole store to `path` as pretty-printed JSON, atomically.
pub fn export_file<S: CatalogStore + ?Sized>(store: &S, path: &Path) -> Result<()> {
    let dump = store.export_dump()?;
    let mut body = serde_json::to_vec_pretty(&dump)?;
    body.push(b'\n');
    write_atomic(path, &body)?;
    log::info!("exported catalog to {}", path.display());
    Ok(())
}

/// Import `path`, dispatching on the document shape.
///
/// # Errors
///
/// Returns `HangarError::Validation` for malformed JSON or a non-object
/// top-level document; `HangarError::Storage` if the file cannot be read.
pub fn import_file<S: CatalogStore + ?Sized>(store: &mut S, path: &Path) -> Result<ImportReport> {
    let body = std::fs::read_to_string(path)?;
    let doc: Value = serde_json::from_str(&body)
        .map_err(|e| HangarError::Validation(format!("malformed JSON document: {}", e)))?;
    store.import_document(&doc)
}
