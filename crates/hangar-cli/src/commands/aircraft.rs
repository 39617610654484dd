use hangar_core::{CatalogStore, SqliteCatalog};

use crate::cli::AircraftCommand;
use crate::output::{aircraft_json, aircraft_table, values_json, values_table};
use crate::resolve::resolve_aircraft;

pub fn handle(catalog: &mut SqliteCatalog, command: &AircraftCommand, quiet: bool) -> anyhow::Result<()> {
    match command {
        AircraftCommand::Add(args) => {
            let id = catalog.create_aircraft(&args.name, args.notes.as_deref())?;
            if !quiet {
                println!("Created aircraft '{}' (id {})", args.name.trim(), id);
            }
        }
        AircraftCommand::Rename(args) => {
            catalog.rename_aircraft(args.id, &args.new_name)?;
            if !quiet {
                println!("Renamed aircraft {} to '{}'", args.id, args.new_name.trim());
            }
        }
        AircraftCommand::Notes(args) => {
            catalog.update_notes(args.id, args.notes.as_deref())?;
            if !quiet {
                println!("Updated notes for aircraft {}", args.id);
            }
        }
        AircraftCommand::Delete(args) => {
            catalog.delete_aircraft(args.id)?;
            if !quiet {
                println!("Deleted aircraft {}", args.id);
            }
        }
        AircraftCommand::List(args) => {
            let aircraft = catalog.list_aircraft(args.filter.as_deref())?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&aircraft_json(&aircraft))?);
            } else if aircraft.is_empty() {
                println!("No aircraft");
            } else {
                println!("{}", aircraft_table(&aircraft));
            }
        }
        AircraftCommand::Show(args) => {
            let aircraft = resolve_aircraft(catalog, &args.name_or_id)?;
            let values = catalog.values_for(aircraft.id)?;
            if args.json {
                let doc = serde_json::json!({
                    "id": aircraft.id,
                    "name": aircraft.name,
                    "notes": aircraft.notes,
                    "values": values_json(&values),
                });
                println!("{}", serde_json::to_string_pretty(&doc)?);
            } else {
                println!("{} (id {})", aircraft.name, aircraft.id);
                if let Some(notes) = &aircraft.notes {
                    println!("Notes: {}", notes);
                }
                if values.is_empty() {
                    println!("No values");
                } else {
                    println!("{}", values_table(&values));
                }
            }
        }
    }
    Ok(())
}
