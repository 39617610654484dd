use hangar_core::{CatalogStore, SqliteCatalog};

/// Fill the catalog with a small demo dataset.
pub fn handle(catalog: &mut SqliteCatalog, quiet: bool) -> anyhow::Result<()> {
    let demo_1 = catalog.create_aircraft("Demo 1", None)?;
    let demo_2 = catalog.create_aircraft("Demo 2", None)?;
    let wingspan = catalog.create_characteristic("Wingspan", Some("m"))?;
    let length = catalog.create_characteristic("Length", Some("m"))?;

    catalog.set_value(demo_1, wingspan, "30")?;
    catalog.set_value(demo_1, length, "20")?;
    catalog.set_value(demo_2, wingspan, "28")?;

    if !quiet {
        println!("Seeded 2 aircraft and 2 characteristics");
    }
    Ok(())
}
