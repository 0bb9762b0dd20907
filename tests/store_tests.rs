//! Store Facade Tests
//!
//! Tests verify:
//! - Insert/search/delete round trips over opaque byte blobs
//! - Duplicate and not-found reporting
//! - Arena growth and index resize observed through the facade
//! - Configuration validation

use arenakv::{Config, Store, StoreError};

fn store(arena_size: u32, index_capacity: usize) -> Store {
    let config = Config::builder()
        .initial_arena_size(arena_size)
        .initial_index_capacity(index_capacity)
        .build();
    Store::new(&config).unwrap()
}

// =============================================================================
// Round-Trip Tests
// =============================================================================

#[test]
fn test_insert_then_search_returns_the_bytes() {
    let mut store = store(64, 8);

    for key in 0..4 {
        let value = format!("value-{key}").into_bytes();
        store.insert(key, &value).unwrap();
    }

    for key in 0..4 {
        let value = format!("value-{key}").into_bytes();
        assert_eq!(store.search(key).unwrap(), value);
    }
}

#[test]
fn test_duplicate_insert_leaves_first_value() {
    let mut store = store(64, 8);

    store.insert(1, b"original").unwrap();
    let err = store.insert(1, b"replacement").unwrap_err();

    assert!(matches!(err, StoreError::DuplicateKey(1)));
    assert_eq!(store.search(1).unwrap(), b"original");
}

#[test]
fn test_delete_then_search_is_not_found() {
    let mut store = store(64, 8);

    store.insert(1, b"value").unwrap();
    store.delete(1).unwrap();

    assert!(matches!(store.search(1), Err(StoreError::NotFound(1))));
}

#[test]
fn test_delete_missing_key_mutates_nothing() {
    let mut store = store(64, 8);

    store.insert(1, b"value").unwrap();
    let cursor_before = store.arena().cursor();

    let err = store.delete(2).unwrap_err();
    assert!(matches!(err, StoreError::NotFound(2)));
    assert_eq!(store.index().len(), 1);
    assert_eq!(store.arena().cursor(), cursor_before);
    assert_eq!(store.search(1).unwrap(), b"value");
}

#[test]
fn test_reinsert_after_delete_returns_new_value() {
    let mut store = store(64, 8);

    store.insert(1, b"old").unwrap();
    store.delete(1).unwrap();
    store.insert(1, b"new").unwrap();

    assert_eq!(store.search(1).unwrap(), b"new");
}

// =============================================================================
// Growth Tests
// =============================================================================

#[test]
fn test_arena_growth_preserves_stored_records() {
    let mut store = store(64, 8);

    store.insert(1, &[1u8; 30]).unwrap();
    store.insert(2, &[2u8; 30]).unwrap();
    assert_eq!(store.arena().capacity(), 64);

    // 30 bytes no longer fit; capacity must double
    store.insert(3, &[3u8; 30]).unwrap();
    assert_eq!(store.arena().capacity(), 128);

    assert_eq!(store.search(1).unwrap(), vec![1u8; 30]);
    assert_eq!(store.search(2).unwrap(), vec![2u8; 30]);
    assert_eq!(store.search(3).unwrap(), vec![3u8; 30]);
}

#[test]
fn test_index_resize_keeps_handles_valid() {
    let mut store = store(1024, 4);

    for key in 0..20 {
        store.insert(key, format!("v{key}").as_bytes()).unwrap();
    }

    assert!(store.index().capacity() >= 40);
    for key in 0..20 {
        assert_eq!(store.search(key).unwrap(), format!("v{key}").into_bytes());
    }
}

// =============================================================================
// Concrete Scenario (initial arena = 64, initial index = 4)
// =============================================================================

#[test]
fn test_small_store_scenario() {
    let mut store = store(64, 4);

    let payload = [9u8; 10];
    store.insert(1, &payload).unwrap();
    assert_eq!(store.search(1).unwrap(), payload);

    store.delete(1).unwrap();
    assert!(matches!(store.search(1), Err(StoreError::NotFound(1))));

    // 2, 6 and 10 all hash to slot 2 of a 4-slot table
    store.insert(2, b"two").unwrap();
    store.insert(6, b"six").unwrap();
    store.insert(10, b"ten").unwrap();

    assert_eq!(store.search(2).unwrap(), b"two");
    assert_eq!(store.search(6).unwrap(), b"six");
    assert_eq!(store.search(10).unwrap(), b"ten");
}

// =============================================================================
// Diagnostics Tests
// =============================================================================

#[test]
fn test_dump_index_lists_live_and_tombstoned_slots() {
    let mut store = store(64, 8);

    store.insert(1, b"a").unwrap();
    store.insert(2, b"b").unwrap();
    store.delete(2).unwrap();

    let dump = store.dump_index();
    assert!(dump.starts_with("Hashtable:"));
    assert!(dump.contains("1: 1"));
    assert!(dump.contains("2: TOMBSTONE"));
    assert!(dump.ends_with("total records: 1"));
}

// =============================================================================
// Configuration Tests
// =============================================================================

#[test]
fn test_index_capacity_must_be_power_of_two() {
    let config = Config::builder()
        .initial_arena_size(64)
        .initial_index_capacity(6)
        .build();

    assert!(matches!(Store::new(&config), Err(StoreError::Config(_))));
}

#[test]
fn test_index_capacity_of_one_is_rejected() {
    let config = Config::builder()
        .initial_arena_size(64)
        .initial_index_capacity(1)
        .build();

    assert!(matches!(Store::new(&config), Err(StoreError::Config(_))));
}

#[test]
fn test_zero_arena_size_is_rejected() {
    let config = Config::builder()
        .initial_arena_size(0)
        .initial_index_capacity(8)
        .build();

    assert!(matches!(Store::new(&config), Err(StoreError::Config(_))));
}
