//! Shared helpers for database unit tests.

use chrono::NaiveDate;
use tempfile::tempdir;

use crate::database::{Database, DatabaseConfig};
use crate::{ItemId, ItemKind, ItemRef};

/// Creates a temporary test database.
///
/// # Panics
///
/// Panics if the temporary directory or database cannot be created.
#[must_use]
pub fn create_test_database() -> Database {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.db");
    let db = Database::open(DatabaseConfig::new(path)).unwrap();

    // Keep the temp directory alive for the lifetime of the test process.
    std::mem::forget(dir);

    db
}

/// A date in September 2026, the month the fixtures live in.
///
/// # Panics
///
/// Panics on an invalid day of month.
#[must_use]
pub fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 9, day).unwrap()
}

/// A room item reference with the given id.
///
/// # Panics
///
/// Panics if `id` is zero.
#[must_use]
pub fn room(id: u32) -> ItemRef {
    ItemRef::new(ItemKind::Room, ItemId::try_from(id).unwrap())
}
