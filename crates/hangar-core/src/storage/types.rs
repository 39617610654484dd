//! Core data types for the storage layer.

use serde::{Deserialize, Serialize};

use crate::error::{HangarError, Result};

/// An aircraft record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Aircraft {
    /// Surrogate id assigned by storage
    #[serde(default)]
    pub id: i64,

    /// Display name, unique ignoring case
    #[serde(default)]
    pub name: String,

    /// Optional free-text notes
    #[serde(default)]
    pub notes: Option<String>,
}

/// A named characteristic (attribute) that aircraft may carry a value for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Characteristic {
    /// Surrogate id assigned by storage
    #[serde(default)]
    pub id: i64,

    /// Display name, unique ignoring case
    #[serde(default)]
    pub name: String,

    /// Optional unit label (free text, no enforced vocabulary)
    #[serde(default)]
    pub unit: Option<String>,
}

/// A characteristic value attached to one aircraft, joined with the
/// characteristic's name and unit for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacteristicValue {
    pub characteristic_id: i64,
    pub name: String,
    pub unit: Option<String>,
    pub value: String,
}

/// Trim and validate a non-empty entity name.
pub fn validate_name(name: &str) -> Result<String> {
    let cleaned = name.trim();
    if cleaned.is_empty() {
        return Err(HangarError::Validation("name must not be empty".to_string()));
    }
    Ok(cleaned.to_string())
}
