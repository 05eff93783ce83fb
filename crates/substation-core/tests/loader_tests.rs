//! Loader behaviour against real files

use std::fs;
use substation_core::{
    load_all, load_equipment, load_maintenance, DataSource, DataSources, LoadError,
    RecordStore,
};
use tempfile::TempDir;

const EQUIPMENT_CSV: &str = "\
equipment_id,equipment_type,location,manufacturer,model,status,install_date
TR-001,Transformer,North Substation,Siemens,TX-500,Active,2015-03-12
GN-002,Generator,East Plant,GE,G-7,Maintenance,2018-07-01
SW-003,Switchgear,North Substation,ABB,SG-2,Active,2020-01-20
";

const MAINTENANCE_JSON: &str = r#"[
  {
    "log_id": "LOG-1",
    "equipment_id": "TR-001",
    "maintenance_type": "Routine Inspection",
    "technician": "John Doe",
    "description": "Checked oil level",
    "status": "Completed",
    "cost": 450.0,
    "date": "2024-02-01"
  },
  {
    "log_id": "LOG-2",
    "equipment_id": "GN-002",
    "maintenance_type": "Emergency Repair",
    "technician": "Jane Smith",
    "description": "Replaced bearing",
    "status": "In Progress",
    "cost": 1200
  }
]"#;

fn write(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_both_sources() {
    let dir = TempDir::new().unwrap();
    let sources = DataSources::new(
        write(&dir, "equipment.csv", EQUIPMENT_CSV),
        write(&dir, "maintenance.json", MAINTENANCE_JSON),
    );
    let store = RecordStore::new();

    let report = load_all(&store, &sources);
    assert!(report.all_loaded());
    assert_eq!(report.equipment.as_ref().ok(), Some(&3));
    assert_eq!(report.maintenance.as_ref().ok(), Some(&2));
    assert_eq!(report.errors().count(), 0);

    let equipment = store.current_equipment();
    let ids: Vec<_> = equipment
        .iter()
        .filter_map(|eq| eq.equipment_id.as_deref())
        .collect();
    assert_eq!(ids, vec!["TR-001", "GN-002", "SW-003"]);
    assert_eq!(
        equipment[0].extra["install_date"],
        serde_json::json!("2015-03-12")
    );

    let maintenance = store.current_maintenance();
    assert_eq!(maintenance[1].cost_amount(), 1200.0);
    assert_eq!(maintenance[0].extra["date"], serde_json::json!("2024-02-01"));
    assert!(store.snapshot().validate().is_empty());
}

#[test]
fn test_missing_source_resets_collection() {
    let dir = TempDir::new().unwrap();
    let csv = write(&dir, "equipment.csv", EQUIPMENT_CSV);
    let store = RecordStore::new();
    load_equipment(&store, &DataSource::csv(&csv)).unwrap();
    assert_eq!(store.current_equipment().len(), 3);

    let missing = dir.path().join("gone.csv");
    let err = load_equipment(&store, &DataSource::csv(&missing)).unwrap_err();

    assert!(err.is_source_unavailable());
    assert_eq!(err.path(), &missing);
    assert!(store.current_equipment().is_empty());
}

#[test]
fn test_malformed_document_resets_collection() {
    let dir = TempDir::new().unwrap();
    let good = write(&dir, "good.json", MAINTENANCE_JSON);
    let bad = write(&dir, "bad.json", r#"[{"log_id": "L1"}, {"log_id": "#);
    let store = RecordStore::new();

    load_maintenance(&store, &DataSource::json(&good)).unwrap();
    let err = load_maintenance(&store, &DataSource::json(&bad)).unwrap_err();

    assert!(matches!(err, LoadError::Decode { kind: "maintenance", .. }));
    assert!(store.current_maintenance().is_empty());
}

#[test]
fn test_document_must_be_an_array() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "object.json", r#"{"log_id": "L1"}"#);
    let store = RecordStore::new();

    let err = load_maintenance(&store, &DataSource::json(&path)).unwrap_err();
    assert!(!err.is_source_unavailable());
}

#[test]
fn test_one_failed_source_leaves_the_other_loaded() {
    let dir = TempDir::new().unwrap();
    let sources = DataSources::new(
        write(&dir, "equipment.csv", EQUIPMENT_CSV),
        dir.path().join("absent.json"),
    );
    let store = RecordStore::new();

    let report = load_all(&store, &sources);
    assert!(report.equipment_loaded());
    assert!(!report.maintenance_loaded());
    assert_eq!(report.errors().count(), 1);

    let summary = store.summary();
    assert_eq!(summary.equipment_count, 3);
    assert_eq!(summary.maintenance_count, 0);
    assert_eq!(summary.validation_issues, 1);
}

#[test]
fn test_formats_are_interchangeable() {
    let dir = TempDir::new().unwrap();
    let equipment_json = write(
        &dir,
        "equipment.json",
        r#"[{"equipment_id": "TR-001", "equipment_type": "Transformer"}]"#,
    );
    let maintenance_csv = write(
        &dir,
        "maintenance.csv",
        "log_id,equipment_id,technician,cost\nL1,TR-001,Ana,99.5\n",
    );
    let store = RecordStore::new();

    let report = load_all(&store, &DataSources::new(&equipment_json, &maintenance_csv));
    assert!(report.all_loaded());

    let snapshot = store.snapshot();
    let rel = snapshot.relationships("TR-001").unwrap();
    assert_eq!(rel.summary.total_cost, 99.5);
    assert_eq!(rel.summary.technicians_involved, vec!["Ana"]);
}

#[test]
fn test_header_only_csv_loads_empty_collection() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "equipment.csv", "equipment_id,equipment_type\n");
    let store = RecordStore::new();

    assert_eq!(load_equipment(&store, &DataSource::csv(&path)).unwrap(), 0);
    assert!(store.current_equipment().is_empty());
}

#[test]
fn test_short_csv_row_keeps_every_record() {
    let dir = TempDir::new().unwrap();
    let csv = write(
        &dir,
        "equipment.csv",
        "equipment_id,equipment_type,status\n\
         T1,Transformer,Active\n\
         T2,Generator\n\
         T3,Breaker,Active\n",
    );
    let store = RecordStore::new();

    assert_eq!(load_equipment(&store, &DataSource::csv(&csv)).unwrap(), 3);
    let equipment = store.current_equipment();
    assert_eq!(equipment[1].equipment_type.as_deref(), Some("Generator"));
    assert!(equipment[1].status.is_none());
}
