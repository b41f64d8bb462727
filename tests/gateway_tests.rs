//! Gateway Tests
//!
//! Tests for CSV file load/append/rewrite I/O.

use std::fs;
use std::path::Path;

use neocat::csv::HEADER;
use neocat::storage::CsvGateway;
use neocat::Asteroid;
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn record(name: &str, id: i64) -> Asteroid {
    Asteroid {
        date: "2025-12-05".to_string(),
        name: name.to_string(),
        id,
        is_hazardous: false,
        absolute_magnitude_h: 19.8,
        diameter_min_m: 291.44,
        diameter_max_m: 651.68,
        miss_distance_km: 12024984.01,
        velocity_km_s: 19.84,
    }
}

fn setup_gateway() -> (TempDir, CsvGateway) {
    let temp_dir = TempDir::new().unwrap();
    let gateway = CsvGateway::new(temp_dir.path());
    (temp_dir, gateway)
}

// =============================================================================
// Load Tests
// =============================================================================

#[test]
fn test_load_missing_file_is_io_error() {
    let (_temp, gateway) = setup_gateway();
    assert!(gateway.load(Path::new("absent.csv")).is_err());
}

#[test]
fn test_load_skips_header_and_malformed_rows() {
    let (temp, gateway) = setup_gateway();

    let contents = format!(
        "{}\n2025-12-05,67381 (2000 OL8),2067381,True,19.8,291.44,651.68,12024984.01,19.84\nbroken,row,3\n",
        HEADER
    );
    fs::write(temp.path().join("data.csv"), contents).unwrap();

    let (records, stats) = gateway.load(Path::new("data.csv")).unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "67381 (2000 OL8)");
    assert_eq!(stats.loaded, 1);
    assert_eq!(stats.skipped, 2); // header + short row
}

#[test]
fn test_load_empty_file_yields_empty_catalog() {
    let (temp, gateway) = setup_gateway();
    fs::write(temp.path().join("empty.csv"), "").unwrap();

    let (records, stats) = gateway.load(Path::new("empty.csv")).unwrap();
    assert!(records.is_empty());
    assert_eq!(stats.loaded, 0);
}

// =============================================================================
// Append Tests
// =============================================================================

#[test]
fn test_append_one_creates_file_when_absent() {
    let (temp, gateway) = setup_gateway();
    let file = Path::new("fresh.csv");

    gateway.append_one(file, &record("Apophis", 2099942)).unwrap();

    assert!(temp.path().join(file).exists());
    let (records, _) = gateway.load(file).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, 2099942);
}

#[test]
fn test_append_one_adds_exactly_one_line() {
    let (temp, gateway) = setup_gateway();
    let file = Path::new("grow.csv");

    gateway.append_one(file, &record("first", 1)).unwrap();
    gateway.append_one(file, &record("second", 2)).unwrap();

    let text = fs::read_to_string(temp.path().join(file)).unwrap();
    assert_eq!(text.lines().count(), 2);

    let (records, _) = gateway.load(file).unwrap();
    let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["first", "second"]);
}

#[test]
fn test_append_then_load_round_trips_values() {
    let (_temp, gateway) = setup_gateway();
    let file = Path::new("rt.csv");
    let original = record("67381 (2000 OL8)", 2067381);

    gateway.append_one(file, &original).unwrap();
    let (records, _) = gateway.load(file).unwrap();

    let loaded = &records[0];
    assert_eq!(loaded.date, original.date);
    assert_eq!(loaded.name, original.name);
    assert_eq!(loaded.id, original.id);
    assert!((loaded.miss_distance_km - original.miss_distance_km).abs() < 1e-6);
}

// =============================================================================
// Rewrite Tests
// =============================================================================

#[test]
fn test_rewrite_writes_header_then_records() {
    let (temp, gateway) = setup_gateway();
    let file = Path::new("full.csv");
    let records = vec![record("one", 1), record("two", 2)];

    let written = gateway.rewrite(file, &records).unwrap();
    assert_eq!(written, 2);

    let text = fs::read_to_string(temp.path().join(file)).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next().unwrap(), HEADER);
    assert_eq!(lines.count(), 2);
}

#[test]
fn test_rewrite_truncates_previous_contents() {
    let (_temp, gateway) = setup_gateway();
    let file = Path::new("resync.csv");

    gateway.rewrite(file, &[record("old-a", 1), record("old-b", 2)]).unwrap();
    gateway.rewrite(file, &[record("new", 3)]).unwrap();

    let (records, stats) = gateway.load(file).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "new");
    assert_eq!(stats.skipped, 1); // the header
}
