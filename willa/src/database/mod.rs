//! `SQLite` storage layer for the reservation system.
//!
//! Owns the persistent shape of bookings and catalog items, connection
//! management with WAL and busy-timeout settings, schema versioning, and
//! the atomic check-then-insert that enforces the non-overlap invariant.
//!
//! # Examples
//!
//! ```no_run
//! use willa::database::{Database, DatabaseConfig};
//! use willa::ItemKind;
//!
//! let mut db = Database::open(DatabaseConfig::new("/tmp/willa.db")).unwrap();
//! let room = db.add_catalog_item(ItemKind::Room, "101").unwrap();
//! println!("added {}", room.item);
//! ```

mod config;
mod connection;
pub mod migrations;
mod operations;
mod schema;

#[cfg(test)]
pub(crate) mod test_util;

// Re-export public API
pub use config::{default_data_dir, resolve_database_path, DatabaseConfig, DATABASE_FILE_NAME};
pub use connection::Database;

// Re-export migration functions for advanced use cases
pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};
