use hangar_core::{CatalogStore, SqliteCatalog};

use crate::cli::CharacteristicCommand;
use crate::output::characteristics_table;

pub fn handle(
    catalog: &mut SqliteCatalog,
    command: &CharacteristicCommand,
    quiet: bool,
) -> anyhow::Result<()> {
    match command {
        CharacteristicCommand::Add(args) => {
            let id = catalog.create_characteristic(&args.name, args.unit.as_deref())?;
            if !quiet {
                println!("Created characteristic '{}' (id {})", args.name.trim(), id);
            }
        }
        CharacteristicCommand::Rename(args) => {
            catalog.rename_characteristic(args.id, &args.new_name)?;
            if !quiet {
                println!("Renamed characteristic {} to '{}'", args.id, args.new_name.trim());
            }
        }
        CharacteristicCommand::Unit(args) => {
            catalog.update_unit(args.id, args.unit.as_deref())?;
            if !quiet {
                println!("Updated unit for characteristic {}", args.id);
            }
        }
        CharacteristicCommand::Delete(args) => {
            catalog.delete_characteristic(args.id)?;
            if !quiet {
                println!("Deleted characteristic {}", args.id);
            }
        }
        CharacteristicCommand::List(args) => {
            let characteristics = catalog.list_characteristics(args.filter.as_deref())?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&characteristics)?);
            } else if characteristics.is_empty() {
                println!("No characteristics");
            } else {
                println!("{}", characteristics_table(&characteristics));
            }
        }
    }
    Ok(())
}
