//! Tests for the year-partitioned store
//!
//! These tests verify:
//! - The `{tag}_{year}.bloom` naming convention
//! - Save/load round trips preserving membership
//! - Missing and undecodable files both reading as absent
//! - Directory creation and overwrite semantics

use prefixtrail::{BloomFilter, Config, YearStore};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_store() -> (TempDir, YearStore) {
    let temp_dir = TempDir::new().unwrap();
    let store = YearStore::new(temp_dir.path(), "rrc00");
    (temp_dir, store)
}

/// A filter holding `count` keys tagged with `year`
fn filter_with_keys(year: i32, count: usize) -> (BloomFilter, Vec<String>) {
    let mut filter = BloomFilter::with_capacity(1000);
    let keys: Vec<String> = (0..count)
        .map(|i| format!("10.{}.0.0/16{}{:04}", i % 256, year, i))
        .collect();
    for key in &keys {
        filter.insert(key);
    }
    (filter, keys)
}

// =============================================================================
// Path Convention Tests
// =============================================================================

#[test]
fn test_path_convention() {
    let (temp, store) = setup_store();

    assert_eq!(
        store.path_for(2015),
        temp.path().join("rrc00_2015.bloom")
    );
}

#[test]
fn test_path_uses_tag() {
    let temp = TempDir::new().unwrap();
    let store = YearStore::new(temp.path(), "rrc21");

    assert_eq!(
        store.path_for(2020),
        temp.path().join("rrc21_2020.bloom")
    );
}

#[test]
fn test_save_writes_conventional_path() {
    let (_temp, store) = setup_store();
    let (filter, _) = filter_with_keys(2015, 10);

    store.save(&filter, 2015).unwrap();

    assert!(store.path_for(2015).exists());
}

// =============================================================================
// Save/Load Tests
// =============================================================================

#[test]
fn test_save_then_load_preserves_membership() {
    let (_temp, store) = setup_store();
    let (filter, keys) = filter_with_keys(2015, 100);

    store.save(&filter, 2015).unwrap();
    let loaded = store.load(2015).unwrap();

    for key in &keys {
        assert!(loaded.might_contain(key), "false negative for {}", key);
    }
    assert_eq!(loaded.capacity(), filter.capacity());
}

#[test]
fn test_save_creates_base_dir() {
    let temp = TempDir::new().unwrap();
    let nested = temp.path().join("bloom").join("rrc00");
    let store = YearStore::new(&nested, "rrc00");
    let (filter, keys) = filter_with_keys(2015, 10);

    store.save(&filter, 2015).unwrap();

    assert!(nested.is_dir());
    let loaded = store.load(2015).unwrap();
    assert!(loaded.might_contain(&keys[0]));
}

#[test]
fn test_save_overwrites_existing_file() {
    let (_temp, store) = setup_store();
    let (populated, keys) = filter_with_keys(2015, 100);

    store.save(&populated, 2015).unwrap();
    // Last write wins: replace with an empty filter
    store.save(&BloomFilter::with_capacity(1000), 2015).unwrap();

    let loaded = store.load(2015).unwrap();
    for key in &keys {
        assert!(!loaded.might_contain(key));
    }
}

#[test]
fn test_distinct_years_live_in_distinct_files() {
    let (_temp, store) = setup_store();
    let (filter_2014, keys_2014) = filter_with_keys(2014, 50);
    let (filter_2015, keys_2015) = filter_with_keys(2015, 50);

    store.save(&filter_2014, 2014).unwrap();
    store.save(&filter_2015, 2015).unwrap();

    assert!(store.path_for(2014).exists());
    assert!(store.path_for(2015).exists());

    let loaded_2014 = store.load(2014).unwrap();
    let loaded_2015 = store.load(2015).unwrap();
    assert!(loaded_2014.might_contain(&keys_2014[0]));
    assert!(loaded_2015.might_contain(&keys_2015[0]));
}

// =============================================================================
// Config Tests
// =============================================================================

#[test]
fn test_store_from_config() {
    let temp = TempDir::new().unwrap();
    let config = Config::builder()
        .base_dir(temp.path())
        .tag("rrc21")
        .filter_capacity(500)
        .build();
    let store = YearStore::from_config(&config);

    let mut filter = BloomFilter::with_capacity(config.filter_capacity);
    filter.insert("10.0.0.0/820150126");
    store.save(&filter, 2015).unwrap();

    assert!(temp.path().join("rrc21_2015.bloom").exists());
    let loaded = store.load(2015).unwrap();
    assert_eq!(loaded.capacity(), 500);
    assert!(loaded.might_contain("10.0.0.0/820150126"));
}

// =============================================================================
// Absence and Corruption Tests
// =============================================================================

#[test]
fn test_load_missing_year_is_absent() {
    let (_temp, store) = setup_store();

    assert!(store.load(1999).is_none());
}

#[test]
fn test_load_garbage_file_is_absent() {
    let (_temp, store) = setup_store();

    std::fs::create_dir_all(store.base_dir()).unwrap();
    std::fs::write(store.path_for(2020), b"GARBAGE_DATA_NOT_A_FILTER").unwrap();

    assert!(store.load(2020).is_none());
}

#[test]
fn test_load_truncated_file_is_absent() {
    let (_temp, store) = setup_store();
    let (filter, _) = filter_with_keys(2015, 10);

    store.save(&filter, 2015).unwrap();

    // Truncate the valid file to a partial write
    let bytes = std::fs::read(store.path_for(2015)).unwrap();
    std::fs::write(store.path_for(2015), &bytes[..bytes.len() / 2]).unwrap();

    assert!(store.load(2015).is_none());
}
