//! Output formatting helpers for the CLI.

use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;

use hangar_core::storage::{Aircraft, Characteristic, CharacteristicValue};

fn base_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(headers.to_vec());
    table
}

pub fn aircraft_table(aircraft: &[Aircraft]) -> Table {
    let mut table = base_table(&["ID", "Name", "Notes"]);
    for entry in aircraft {
        table.add_row(vec![
            entry.id.to_string(),
            entry.name.clone(),
            entry.notes.clone().unwrap_or_default(),
        ]);
    }
    table
}

pub fn characteristics_table(characteristics: &[Characteristic]) -> Table {
    let mut table = base_table(&["ID", "Name", "Unit"]);
    for entry in characteristics {
        table.add_row(vec![
            entry.id.to_string(),
            entry.name.clone(),
            entry.unit.clone().unwrap_or_default(),
        ]);
    }
    table
}

pub fn values_table(values: &[CharacteristicValue]) -> Table {
    let mut table = base_table(&["Characteristic", "Value", "Unit"]);
    for entry in values {
        table.add_row(vec![
            entry.name.clone(),
            entry.value.clone(),
            entry.unit.clone().unwrap_or_default(),
        ]);
    }
    table
}

pub fn aircraft_json(aircraft: &[Aircraft]) -> serde_json::Value {
    serde_json::json!(aircraft)
}

pub fn values_json(values: &[CharacteristicValue]) -> serde_json::Value {
    serde_json::json!(values)
}
