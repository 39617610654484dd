//! Resolve user-supplied entity references (name or numeric id).

use anyhow::Context;

use hangar_core::storage::{Aircraft, Characteristic};
use hangar_core::CatalogStore;

/// Resolve an aircraft by numeric id first, then by case-insensitive name.
pub fn resolve_aircraft<S: CatalogStore + ?Sized>(store: &S, reference: &str) -> anyhow::Result<Aircraft> {
    if let Ok(id) = reference.parse::<i64>() {
        return store
            .get_aircraft(id)
            .with_context(|| format!("aircraft {} not found", id));
    }
    store
        .find_aircraft_by_name(reference)?
        .ok_or_else(|| anyhow::anyhow!("aircraft '{}' not found", reference))
}

/// Resolve a characteristic by numeric id first, then by name.
pub fn resolve_characteristic<S: CatalogStore + ?Sized>(
    store: &S,
    reference: &str,
) -> anyhow::Result<Characteristic> {
    if let Ok(id) = reference.parse::<i64>() {
        return store
            .get_characteristic(id)
            .with_context(|| format!("characteristic {} not found", id));
    }
    store
        .find_characteristic_by_name(reference)?
        .ok_or_else(|| anyhow::anyhow!("characteristic '{}' not found", reference))
}
