//! Database schema management.
//!
//! Handles schema initialization for fresh databases and version checking
//! for existing ones.

use rusqlite::Connection;

use crate::error::{Error, Result};

use super::schema::{
    CREATE_BOOKINGS_TABLE, CREATE_BOOKING_CREATED_INDEX, CREATE_BOOKING_ITEM_INDEX,
    CREATE_CATALOG_TABLE, CREATE_METADATA_TABLE, CURRENT_SCHEMA_VERSION, INSERT_SCHEMA_VERSION,
    SELECT_SCHEMA_VERSION,
};

/// Initializes the schema of a fresh database.
///
/// # Errors
///
/// Returns an error if any SQL statement fails.
pub fn initialize_schema(conn: &Connection) -> Result<()> {
    conn.execute(CREATE_METADATA_TABLE, [])?;
    conn.execute(CREATE_CATALOG_TABLE, [])?;
    conn.execute(CREATE_BOOKINGS_TABLE, [])?;

    conn.execute(CREATE_BOOKING_ITEM_INDEX, [])?;
    conn.execute(CREATE_BOOKING_CREATED_INDEX, [])?;

    conn.execute(INSERT_SCHEMA_VERSION, [CURRENT_SCHEMA_VERSION])?;

    log::debug!("initialized reservation schema at version {CURRENT_SCHEMA_VERSION}");
    Ok(())
}

/// Reads the schema version stored in the database.
///
/// Returns 0 for a database with no metadata table or no version row,
/// meaning the schema has not been initialized yet.
///
/// # Errors
///
/// Returns an error on database failures other than "no rows".
pub fn get_schema_version(conn: &Connection) -> Result<i32> {
    match conn.query_row(SELECT_SCHEMA_VERSION, [], |row| {
        let value: String = row.get(0)?;
        value
            .parse::<i32>()
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
    }) {
        Ok(version) => Ok(version),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(0),
        Err(e) => {
            if let rusqlite::Error::SqliteFailure(ref sqlite_err, _) = e {
                if sqlite_err.code == rusqlite::ErrorCode::Unknown {
                    // Metadata table does not exist yet.
                    return Ok(0);
                }
            }
            Err(e.into())
        }
    }
}

/// Checks schema compatibility, initializing a fresh database.
///
/// # Errors
///
/// Returns `UnsupportedSchemaVersion` if the database was written by a
/// different schema version than this client supports.
pub fn check_schema_compatibility(conn: &Connection) -> Result<()> {
    let version = get_schema_version(conn)?;

    if version == 0 {
        initialize_schema(conn)?;
    } else if version != CURRENT_SCHEMA_VERSION {
        return Err(Error::UnsupportedSchemaVersion {
            expected: CURRENT_SCHEMA_VERSION,
            found: version,
        });
    }

    Ok(())
}
