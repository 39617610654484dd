use std::path::Path;

use hangar_core::interchange::{export_file, import_file};
use hangar_core::SqliteCatalog;

use crate::cli::{ExportArgs, ImportArgs};

pub fn handle_export(catalog: &mut SqliteCatalog, args: &ExportArgs, quiet: bool) -> anyhow::Result<()> {
    export_file(catalog, Path::new(&args.path))?;
    if !quiet {
        println!("Exported catalog to {}", args.path);
    }
    Ok(())
}

pub fn handle_import(catalog: &mut SqliteCatalog, args: &ImportArgs, quiet: bool) -> anyhow::Result<()> {
    let report = import_file(catalog, Path::new(&args.path))?;
    if !quiet {
        println!(
            "Imported: {} aircraft, {} characteristics, {} values ({} skipped)",
            report.aircraft_created,
            report.characteristics_created,
            report.values_set,
            report.skipped
        );
    }
    Ok(())
}
