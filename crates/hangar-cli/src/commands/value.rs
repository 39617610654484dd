use hangar_core::{CatalogStore, SqliteCatalog};

use crate::cli::ValueCommand;
use crate::output::{values_json, values_table};
use crate::resolve::{resolve_aircraft, resolve_characteristic};

pub fn handle(catalog: &mut SqliteCatalog, command: &ValueCommand, quiet: bool) -> anyhow::Result<()> {
    match command {
        ValueCommand::Set(args) => {
            let aircraft = resolve_aircraft(catalog, &args.aircraft)?;
            let characteristic = resolve_characteristic(catalog, &args.characteristic)?;
            catalog.set_value(aircraft.id, characteristic.id, &args.value)?;
            if !quiet {
                println!(
                    "Set {} = {} on '{}'",
                    characteristic.name, args.value, aircraft.name
                );
            }
        }
        ValueCommand::Remove(args) => {
            let aircraft = resolve_aircraft(catalog, &args.aircraft)?;
            let characteristic = resolve_characteristic(catalog, &args.characteristic)?;
            catalog.remove_value(aircraft.id, characteristic.id)?;
            if !quiet {
                println!("Removed {} from '{}'", characteristic.name, aircraft.name);
            }
        }
        ValueCommand::List(args) => {
            let aircraft = resolve_aircraft(catalog, &args.aircraft)?;
            let values = catalog.values_for(aircraft.id)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&values_json(&values))?);
            } else if values.is_empty() {
                println!("No values for '{}'", aircraft.name);
            } else {
                println!("{}", values_table(&values));
            }
        }
    }
    Ok(())
}
