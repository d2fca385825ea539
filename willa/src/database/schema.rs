//! Database schema definitions and SQL constants.
//!
//! All table definitions, indices, and shared SQL statements for the
//! reservation database live here.

/// Current schema version for the database.
///
/// Stored in the metadata table and checked on open to ensure the client
/// and the database agree on the layout.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// SQL statement to create the metadata table.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// SQL statement to create the catalog items table.
///
/// One row per bookable inventory item. The id namespace is per kind, so
/// the primary key is `(kind, id)`. The four nullable columns carry the
/// kind-specific name-like attributes used for display-name resolution.
pub const CREATE_CATALOG_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS catalog_items (
        kind TEXT NOT NULL,
        id INTEGER NOT NULL,
        title TEXT,
        name TEXT,
        class_name TEXT,
        room_number TEXT,
        created_at INTEGER NOT NULL,
        PRIMARY KEY (kind, id)
    )";

/// SQL statement to create the bookings table.
///
/// Dates are stored as ISO-8601 TEXT so lexicographic comparison matches
/// date comparison; timestamps are Unix epoch milliseconds.
pub const CREATE_BOOKINGS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS bookings (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        owner TEXT NOT NULL,
        item_type TEXT NOT NULL,
        item_id INTEGER NOT NULL,
        start_date TEXT NOT NULL,
        end_date TEXT NOT NULL,
        guests INTEGER NOT NULL,
        status TEXT NOT NULL,
        notes TEXT NOT NULL DEFAULT '',
        created_at INTEGER NOT NULL,
        updated_at INTEGER NOT NULL
    )";

/// SQL statement to create an index over `(item_type, item_id)`.
///
/// This index backs the overlap check run on every admission.
pub const CREATE_BOOKING_ITEM_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_bookings_item ON bookings(item_type, item_id)";

/// SQL statement to create an index on `created_at`.
///
/// Listing and the recent-bookings report both order by creation time.
pub const CREATE_BOOKING_CREATED_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_bookings_created ON bookings(created_at)";

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";

/// SQL statement to insert a booking row.
pub const INSERT_BOOKING: &str = r"
    INSERT INTO bookings
    (owner, item_type, item_id, start_date, end_date, guests, status, notes, created_at, updated_at)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
";

/// SQL statement counting occupying bookings that overlap a half-open
/// range for one item.
///
/// Overlap test for half-open ranges: `s1 < e2 AND s2 < e1`. Cancelled
/// bookings are excluded.
pub const COUNT_OVERLAPPING_BOOKINGS: &str = r"
    SELECT COUNT(*) FROM bookings
    WHERE item_type = ? AND item_id = ?
      AND status IN ('pending', 'confirmed')
      AND start_date < ? AND end_date > ?
";

/// SQL statement to insert a catalog item row.
pub const INSERT_CATALOG_ITEM: &str = r"
    INSERT INTO catalog_items
    (kind, id, title, name, class_name, room_number, created_at)
    VALUES (?, ?, ?, ?, ?, ?, ?)
";
