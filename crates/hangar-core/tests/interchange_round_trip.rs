use serde_json::json;

use hangar_core::error::HangarError;
use hangar_core::interchange::{export_file, import_file, FALLBACK_NAME};
use hangar_core::{CatalogStore, SqliteCatalog};

fn catalog() -> SqliteCatalog {
    SqliteCatalog::open_in_memory().expect("in-memory catalog")
}

/// All (aircraft, characteristic, value) triples currently in a store.
fn triples(catalog: &SqliteCatalog) -> Vec<(String, String, String)> {
    let mut result = Vec::new();
    for aircraft in catalog.list_aircraft(None).expect("list") {
        for value in catalog.values_for(aircraft.id).expect("values") {
            result.push((aircraft.name.clone(), value.name, value.value));
        }
    }
    result
}

fn seeded_catalog() -> SqliteCatalog {
    let mut catalog = catalog();
    let rafale = catalog
        .create_aircraft("Rafale", Some("delta wing"))
        .expect("aircraft");
    let mirage = catalog.create_aircraft("Mirage 2000", None).expect("aircraft");
    let wingspan = catalog
        .create_characteristic("Wingspan", Some("m"))
        .expect("characteristic");
    let speed = catalog
        .create_characteristic("Top speed", None)
        .expect("characteristic");

    catalog.set_value(rafale, wingspan, "10.9").expect("value");
    catalog.set_value(rafale, speed, "1912").expect("value");
    catalog.set_value(mirage, wingspan, "9.13").expect("value");
    catalog
}

#[test]
fn test_export_import_reproduces_triples_in_fresh_store() {
    let source = seeded_catalog();
    let dump = source.export_dump().expect("export");
    let doc = serde_json::to_value(&dump).expect("serialize");

    let mut target = catalog();
    let report = target.import_document(&doc).expect("import");

    assert_eq!(report.aircraft_created, 2);
    assert_eq!(report.characteristics_created, 2);
    assert_eq!(report.values_set, 3);
    assert_eq!(report.skipped, 0);
    assert_eq!(triples(&source), triples(&target));

    // Ids are fresh in the target; the match is by name, not surrogate id.
    let rafale = target
        .find_aircraft_by_name("Rafale")
        .expect("lookup")
        .expect("imported");
    assert_eq!(rafale.notes.as_deref(), Some("delta wing"));
}

#[test]
fn test_file_round_trip_through_tempdir() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("exports").join("database_export.json");

    let source = seeded_catalog();
    export_file(&source, &path).expect("export");

    let body = std::fs::read_to_string(&path).expect("read export");
    assert!(body.contains("\"aircraft\""));
    assert!(body.contains("\"values\""));

    let mut target = catalog();
    import_file(&mut target, &path).expect("import");
    assert_eq!(triples(&source), triples(&target));
}

#[test]
fn test_reimport_into_same_store_is_a_no_op_merge() {
    let mut catalog = seeded_catalog();
    let before = triples(&catalog);

    let doc = serde_json::to_value(catalog.export_dump().expect("export")).expect("serialize");
    let report = catalog.import_document(&doc).expect("import");

    assert_eq!(report.aircraft_created, 0);
    assert_eq!(report.characteristics_created, 0);
    assert_eq!(report.values_set, 3);
    assert_eq!(triples(&catalog), before);
}

#[test]
fn test_merge_backfills_unit_only_when_missing() {
    let mut catalog = catalog();
    let speed = catalog
        .create_characteristic("Top speed", None)
        .expect("characteristic");
    let wingspan = catalog
        .create_characteristic("Wingspan", Some("m"))
        .expect("characteristic");

    let doc = json!({
        "characteristic": [
            {"name": "TOP SPEED", "unit": "km/h"},
            {"name": "wingspan", "unit": "ft"}
        ]
    });
    catalog.import_document(&doc).expect("import");

    assert_eq!(
        catalog.get_characteristic(speed).expect("get").unit.as_deref(),
        Some("km/h")
    );
    // Existing unit wins over the incoming one.
    assert_eq!(
        catalog.get_characteristic(wingspan).expect("get").unit.as_deref(),
        Some("m")
    );
}

#[test]
fn test_merge_skips_unresolved_value_rows() {
    let mut catalog = catalog();
    catalog.create_aircraft("Rafale", None).expect("aircraft");
    catalog.create_characteristic("Wingspan", None).expect("characteristic");

    let doc = json!({
        "values": [
            {"aircraft": "Rafale", "characteristic": "Wingspan", "value": "10.9"},
            {"aircraft": "Ghost", "characteristic": "Wingspan", "value": "1"},
            {"aircraft": "Rafale", "characteristic": "Unknown", "value": "2"}
        ]
    });
    let report = catalog.import_document(&doc).expect("import");

    assert_eq!(report.values_set, 1);
    assert_eq!(report.skipped, 2);
    assert_eq!(triples(&catalog).len(), 1);
}

#[test]
fn test_foreign_import_infers_labels_and_units() {
    let mut catalog = catalog();

    let doc = json!({
        "model": "Cessna 172",
        "wingspan_m": 11.0,
        "engine": {"type": "Lycoming IO-360", "power_hp": 180},
        "liveries": ["white", "red"],
        "retired": null
    });
    let report = catalog.import_document(&doc).expect("import");

    assert_eq!(report.aircraft_created, 1);
    assert_eq!(report.values_set, 3);

    let cessna = catalog
        .find_aircraft_by_name("Cessna 172")
        .expect("lookup")
        .expect("created");
    let values = catalog.values_for(cessna.id).expect("values");
    let summary: Vec<_> = values
        .iter()
        .map(|v| (v.name.as_str(), v.unit.as_deref(), v.value.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("Engine power", Some("hp"), "180"),
            ("Engine type", None, "Lycoming IO-360"),
            ("Wingspan", Some("m"), "11.0"),
        ]
    );
}

#[test]
fn test_foreign_import_reuses_characteristics_and_disambiguates_name() {
    let mut catalog = catalog();
    let doc = json!({"model": "Cessna 172", "wingspan_m": 11.0});

    let first = catalog.import_document(&doc).expect("first import");
    assert_eq!(first.characteristics_created, 1);

    let second = catalog.import_document(&doc).expect("second import");
    assert_eq!(second.characteristics_created, 0);
    assert_eq!(second.aircraft_created, 1);

    let names: Vec<_> = catalog
        .list_aircraft(None)
        .expect("list")
        .into_iter()
        .map(|a| a.name)
        .collect();
    assert_eq!(names, vec!["Cessna 172", "Cessna 172 (2)"]);
    assert_eq!(catalog.list_characteristics(None).expect("list").len(), 1);
}

#[test]
fn test_foreign_import_without_name_field_uses_placeholder() {
    let mut catalog = catalog();
    let doc = json!({"wingspan_m": 11.0});

    catalog.import_document(&doc).expect("import");
    assert!(catalog
        .find_aircraft_by_name(FALLBACK_NAME)
        .expect("lookup")
        .is_some());
}

#[test]
fn test_failed_import_rolls_back_whole_document() {
    let mut catalog = catalog();

    // The empty key yields a blank characteristic label, which fails
    // validation after the aircraft row has already been inserted.
    let doc = json!({"model": "Cessna 172", "wingspan_m": 11.0, "": 5});
    let err = catalog.import_document(&doc).unwrap_err();
    assert!(matches!(err, HangarError::Validation(_)));

    // Nothing from the failed document survives, not even the aircraft.
    assert!(catalog.list_aircraft(None).expect("list").is_empty());
    assert!(catalog.list_characteristics(None).expect("list").is_empty());
}

#[test]
fn test_non_object_document_is_validation_error() {
    let mut catalog = catalog();

    for doc in [json!([1, 2, 3]), json!("text"), json!(42), json!(null)] {
        let err = catalog.import_document(&doc).unwrap_err();
        assert!(matches!(err, HangarError::Validation(_)));
    }
}

#[test]
fn test_malformed_json_file_is_validation_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{not json").expect("write");

    let mut catalog = catalog();
    let err = import_file(&mut catalog, &path).unwrap_err();
    assert!(matches!(err, HangarError::Validation(_)));
}
