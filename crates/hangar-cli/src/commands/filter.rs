use hangar_core::{CatalogStore, FilterOp, SqliteCatalog};

use crate::cli::FilterArgs;
use crate::output::{aircraft_json, aircraft_table};

pub fn handle(catalog: &mut SqliteCatalog, args: &FilterArgs, quiet: bool) -> anyhow::Result<()> {
    let op: FilterOp = args.op.parse()?;
    let matches = catalog.filter_by_characteristic(
        &args.characteristic,
        op,
        &args.value,
        args.upper.as_deref(),
    )?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&aircraft_json(&matches))?);
    } else if matches.is_empty() {
        if !quiet {
            println!("No matching aircraft");
        }
    } else {
        println!("{}", aircraft_table(&matches));
    }
    Ok(())
}
