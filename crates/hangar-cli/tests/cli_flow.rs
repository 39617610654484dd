use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_hangar"))
}

fn hangar(db: &Path, args: &[&str]) -> Output {
    Command::new(bin())
        .arg("--db")
        .arg(db)
        .args(args)
        .output()
        .expect("binary should run")
}

fn hangar_ok(db: &Path, args: &[&str]) -> String {
    let output = hangar(db, args);
    assert!(
        output.status.success(),
        "command {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_crud_filter_and_interchange_flow() {
    let dir = tempfile::tempdir().expect("tempdir");
    let db = dir.path().join("catalog.db");

    hangar_ok(&db, &["aircraft", "add", "Rafale", "--notes", "delta wing"]);
    hangar_ok(&db, &["aircraft", "add", "Mirage 2000"]);
    hangar_ok(&db, &["characteristic", "add", "Top speed", "--unit", "km/h"]);

    hangar_ok(&db, &["value", "set", "Rafale", "Top speed", "1912"]);
    hangar_ok(&db, &["value", "set", "Mirage 2000", "Top speed", "2336"]);

    let listing = hangar_ok(&db, &["aircraft", "list"]);
    assert!(listing.contains("Rafale"));
    assert!(listing.contains("Mirage 2000"));

    // Numeric filter, JSON output
    let filtered = hangar_ok(&db, &["filter", "Top speed", ">", "2000", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&filtered).expect("valid JSON");
    let names: Vec<_> = parsed
        .as_array()
        .expect("array")
        .iter()
        .map(|a| a["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Mirage 2000"]);

    // Export, wipe into a fresh db, import back
    let export = dir.path().join("dump.json");
    hangar_ok(&db, &["export", export.to_str().unwrap()]);
    assert!(export.exists());

    let fresh = dir.path().join("fresh.db");
    let report = hangar_ok(&fresh, &["import", export.to_str().unwrap()]);
    assert!(report.contains("2 aircraft"));

    let values = hangar_ok(&fresh, &["value", "list", "Rafale", "--json"]);
    assert!(values.contains("1912"));
}

#[test]
fn test_duplicate_name_fails_with_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let db = dir.path().join("catalog.db");

    hangar_ok(&db, &["aircraft", "add", "Rafale"]);
    let output = hangar(&db, &["aircraft", "add", "RAFALE"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Duplicate name"));
}

#[test]
fn test_non_numeric_operand_fails_with_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let db = dir.path().join("catalog.db");

    hangar_ok(&db, &["characteristic", "add", "Top speed"]);
    let output = hangar(&db, &["filter", "Top speed", ">", "fast"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Validation"));
}

#[test]
fn test_seed_populates_demo_data() {
    let dir = tempfile::tempdir().expect("tempdir");
    let db = dir.path().join("catalog.db");

    hangar_ok(&db, &["seed"]);
    let listing = hangar_ok(&db, &["aircraft", "list"]);
    assert!(listing.contains("Demo 1"));
    assert!(listing.contains("Demo 2"));
}
