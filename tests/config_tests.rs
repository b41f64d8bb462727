//! Config Tests
//!
//! Tests for the builder and external range-map loading.

use std::fs;
use std::path::{Path, PathBuf};

use neocat::{Config, RangeEntry};
use tempfile::TempDir;

// =============================================================================
// Builder Tests
// =============================================================================

#[test]
fn test_default_carries_builtin_range_table() {
    let config = Config::default();

    assert_eq!(config.ranges.len(), 4);
    assert_eq!(config.ranges[0].file, PathBuf::from("dez01.csv"));
    assert_eq!(config.ranges[3].start, 20260101);
}

#[test]
fn test_builder_overrides() {
    let config = Config::builder()
        .data_dir("/tmp/neos")
        .clear_ranges()
        .range(20250101, 20250131, "jan.csv")
        .build();

    assert_eq!(config.data_dir, PathBuf::from("/tmp/neos"));
    assert_eq!(config.ranges, vec![RangeEntry::new(20250101, 20250131, "jan.csv")]);
}

// =============================================================================
// Range-map File Tests
// =============================================================================

#[test]
fn test_load_ranges_from_json() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("ranges.json");
    fs::write(
        &path,
        r#"[
            { "start": 20251201, "end": 20251208, "file": "dez01.csv" },
            { "start": 20260101, "end": 20260105, "file": "jan01.csv" }
        ]"#,
    )
    .unwrap();

    let mut config = Config::default();
    config.load_ranges(&path).unwrap();

    assert_eq!(config.ranges.len(), 2);
    assert_eq!(config.ranges[1].file, Path::new("jan01.csv"));
}

#[test]
fn test_load_ranges_rejects_invalid_json() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("bad.json");
    fs::write(&path, "{ not json }").unwrap();

    let mut config = Config::default();
    assert!(config.load_ranges(&path).is_err());
    assert_eq!(config.ranges.len(), 4); // untouched on failure
}

#[test]
fn test_load_ranges_rejects_empty_map() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("empty.json");
    fs::write(&path, "[]").unwrap();

    let mut config = Config::default();
    assert!(config.load_ranges(&path).is_err());
}

#[test]
fn test_load_ranges_missing_file_is_error() {
    let mut config = Config::default();
    assert!(config.load_ranges(Path::new("/no/such/ranges.json")).is_err());
}
