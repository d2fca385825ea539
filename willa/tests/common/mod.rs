//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixture builders for testing
//! the willa library.

use std::path::PathBuf;

use chrono::NaiveDate;
use willa::database::{Database, DatabaseConfig};
use willa::{CatalogEntry, ItemId, ItemKind, ItemRef};

/// Creates a test database in a temporary location.
///
/// The temporary directory is leaked so the database file outlives this
/// function; the OS cleans it up.
#[allow(dead_code)]
pub fn create_test_database() -> Database {
    Database::open(DatabaseConfig::new(test_database_path())).unwrap()
}

/// Returns a fresh database path in a temporary directory.
#[allow(dead_code)]
pub fn test_database_path() -> PathBuf {
    let temp_dir = tempfile::tempdir().unwrap();
    let db_path = temp_dir.path().join("willa.db");
    // Keep the temp_dir alive by forgetting it - this is a test helper
    std::mem::forget(temp_dir);
    db_path
}

/// A date in the fixed test month.
#[allow(dead_code)]
pub fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 9, day).unwrap()
}

/// A room reference with the given id.
#[allow(dead_code)]
pub fn room(id: u32) -> ItemRef {
    ItemRef::new(ItemKind::Room, ItemId::try_from(id).unwrap())
}

/// Seeds numbered rooms into the database's catalog.
#[allow(dead_code)]
pub fn seed_rooms(db: &mut Database, count: u32) {
    for n in 1..=count {
        let entry = CatalogEntry::named(room(n), format!("{}", 100 + n));
        db.insert_catalog_entry(&entry).unwrap();
    }
}
