//! Database operations for bookings and catalog items.
//!
//! The single write path that matters is [`Database::insert_booking`]: the
//! overlap check and the insert run inside one IMMEDIATE transaction, so
//! concurrent submissions for the same item are serialized and can never
//! both observe "no overlap".

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{params, OptionalExtension, TransactionBehavior};

use crate::catalog::{CatalogEntry, InMemoryCatalog};
use crate::error::{Error, Result};
use crate::{Booking, BookingStatus, DateRange, ItemId, ItemKind, ItemRef};

use super::connection::Database;
use super::schema::{COUNT_OVERLAPPING_BOOKINGS, INSERT_BOOKING, INSERT_CATALOG_ITEM};

const BOOKING_COLUMNS: &str =
    "id, owner, item_type, item_id, start_date, end_date, guests, status, notes, created_at, updated_at";

const SELECT_BOOKING_BY_ID: &str = r"
    SELECT id, owner, item_type, item_id, start_date, end_date, guests, status, notes, created_at, updated_at
    FROM bookings WHERE id = ?
";

const UPDATE_BOOKING_STATUS: &str = r"
    UPDATE bookings SET status = ?, updated_at = ? WHERE id = ?
";

const SELECT_ROOM_BOOKINGS_FOR_WINDOW: &str = r"
    SELECT id, owner, item_type, item_id, start_date, end_date, guests, status, notes, created_at, updated_at
    FROM bookings
    WHERE item_type = 'room'
      AND status IN ('pending', 'confirmed')
      AND end_date >= ?
";

const SELECT_CATALOG_ITEMS: &str = r"
    SELECT kind, id, title, name, class_name, room_number FROM catalog_items
";

const SELECT_NEXT_CATALOG_ID: &str = r"
    SELECT COALESCE(MAX(id), 0) + 1 FROM catalog_items WHERE kind = ?
";

/// Converts a `DateTime<Utc>` to epoch milliseconds for storage.
fn datetime_to_millis(dt: DateTime<Utc>) -> i64 {
    dt.timestamp_millis()
}

/// Converts epoch milliseconds from storage back to a `DateTime<Utc>`.
fn millis_to_datetime(millis: i64) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis).ok_or_else(|| {
        rusqlite::Error::IntegralValueOutOfRange(0, millis)
    })
}

fn parse_date(text: &str) -> rusqlite::Result<NaiveDate> {
    text.parse::<NaiveDate>()
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
}

/// Deserializes a booking from a row with the column order of
/// `BOOKING_COLUMNS`.
fn row_to_booking(row: &rusqlite::Row<'_>) -> rusqlite::Result<Booking> {
    let id: i64 = row.get(0)?;
    let owner: String = row.get(1)?;
    let kind: String = row.get(2)?;
    let item_id: i64 = row.get(3)?;
    let start: String = row.get(4)?;
    let end: String = row.get(5)?;
    let guests: i64 = row.get(6)?;
    let status: String = row.get(7)?;
    let notes: String = row.get(8)?;
    let created_millis: i64 = row.get(9)?;
    let updated_millis: i64 = row.get(10)?;

    let kind = kind
        .parse::<ItemKind>()
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
    let item_id = ItemId::try_from(item_id)
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
    let range = DateRange::new(parse_date(&start)?, parse_date(&end)?)
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
    let status = status
        .parse::<BookingStatus>()
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
    let guests = u32::try_from(guests)
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

    Booking::builder(id, owner, ItemRef::new(kind, item_id), range)
        .guests(guests)
        .status(status)
        .notes(notes)
        .created_at(millis_to_datetime(created_millis)?)
        .updated_at(millis_to_datetime(updated_millis)?)
        .build()
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
}

fn row_to_catalog_entry(row: &rusqlite::Row<'_>) -> rusqlite::Result<CatalogEntry> {
    let kind: String = row.get(0)?;
    let id: i64 = row.get(1)?;

    let kind = kind
        .parse::<ItemKind>()
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
    let id = ItemId::try_from(id)
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

    Ok(CatalogEntry {
        item: ItemRef::new(kind, id),
        title: row.get(2)?,
        name: row.get(3)?,
        class_name: row.get(4)?,
        room_number: row.get(5)?,
    })
}

impl Database {
    /// Admits a booking: checks the half-open overlap invariant for the
    /// item and inserts the row, atomically.
    ///
    /// The check and the insert run in one IMMEDIATE transaction. SQLite
    /// allows a single writer at a time, so two concurrent submissions for
    /// the same item are serialized; the loser re-reads after the winner
    /// commits and sees the conflict.
    ///
    /// The caller is responsible for the earlier admission checks (the
    /// principal and catalog existence); this method enforces only the
    /// non-overlap invariant.
    ///
    /// # Errors
    ///
    /// Returns `DateRangeUnavailable` when an occupying booking for the
    /// same item overlaps `range`, or a `Database` error on storage
    /// failures (including busy-timeout expiry under contention).
    pub fn insert_booking(
        &mut self,
        owner: &str,
        item: ItemRef,
        range: DateRange,
        guests: u32,
        notes: &str,
    ) -> Result<Booking> {
        let now = Utc::now();
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let overlapping: i64 = tx.query_row(
            COUNT_OVERLAPPING_BOOKINGS,
            params![
                item.kind.as_str(),
                item.id.value(),
                range.end().to_string(),
                range.start().to_string(),
            ],
            |row| row.get(0),
        )?;

        if overlapping > 0 {
            return Err(Error::DateRangeUnavailable {
                item,
                start: range.start(),
                end: range.end(),
            });
        }

        tx.execute(
            INSERT_BOOKING,
            params![
                owner,
                item.kind.as_str(),
                item.id.value(),
                range.start().to_string(),
                range.end().to_string(),
                guests,
                BookingStatus::Pending.as_str(),
                notes,
                datetime_to_millis(now),
                datetime_to_millis(now),
            ],
        )?;

        let id = tx.last_insert_rowid();
        tx.commit()?;

        Booking::builder(id, owner, item, range)
            .guests(guests)
            .notes(notes)
            .created_at(now)
            .updated_at(now)
            .build()
            .map_err(Error::from)
    }

    /// Retrieves a booking by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_booking(&self, id: i64) -> Result<Option<Booking>> {
        self.conn
            .query_row(SELECT_BOOKING_BY_ID, [id], row_to_booking)
            .optional()
            .map_err(Error::from)
    }

    /// Lists every booking, most recently created first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_all_bookings(&self) -> Result<Vec<Booking>> {
        let sql = format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings ORDER BY created_at DESC, id DESC"
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let bookings = stmt
            .query_map([], row_to_booking)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(bookings)
    }

    /// Lists bookings owned by one principal, most recently created first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_bookings_for_owner(&self, owner: &str) -> Result<Vec<Booking>> {
        let sql = format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings WHERE owner = ? ORDER BY created_at DESC, id DESC"
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let bookings = stmt
            .query_map([owner], row_to_booking)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(bookings)
    }

    /// Returns the `limit` most recently created bookings.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn recent_bookings(&self, limit: u32) -> Result<Vec<Booking>> {
        let sql = format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings ORDER BY created_at DESC, id DESC LIMIT ?"
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let bookings = stmt
            .query_map([limit], row_to_booking)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(bookings)
    }

    /// Counts all bookings regardless of status.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_bookings(&self) -> Result<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM bookings", [], |row| row.get(0))?;
        Ok(u64::try_from(count).unwrap_or(0))
    }

    /// Returns occupying room bookings whose end date falls on or after
    /// `cutoff`. Used by the occupancy reporter's trailing window.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn room_bookings_ending_on_or_after(&self, cutoff: NaiveDate) -> Result<Vec<Booking>> {
        let mut stmt = self.conn.prepare(SELECT_ROOM_BOOKINGS_FOR_WINDOW)?;
        let bookings = stmt
            .query_map([cutoff.to_string()], row_to_booking)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(bookings)
    }

    /// Administrative status transition for an existing booking.
    ///
    /// Only the status and `updated_at` change; the item and date range
    /// are immutable here, so this path cannot violate the non-overlap
    /// invariant. Any future mutation path that edits the item or dates
    /// must re-run the same overlap check as admission.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no booking has the given id.
    pub fn set_booking_status(&mut self, id: i64, status: BookingStatus) -> Result<Booking> {
        let now = Utc::now();
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let updated = tx.execute(
            UPDATE_BOOKING_STATUS,
            params![status.as_str(), datetime_to_millis(now), id],
        )?;
        if updated == 0 {
            return Err(Error::NotFound {
                resource: format!("booking {id}"),
            });
        }

        let booking = tx.query_row(SELECT_BOOKING_BY_ID, [id], row_to_booking)?;
        tx.commit()?;
        Ok(booking)
    }

    /// Adds a catalog item with an auto-assigned per-kind id.
    ///
    /// The display string lands in the attribute natural to the kind (see
    /// [`CatalogEntry::named`]).
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn add_catalog_item(&mut self, kind: ItemKind, display: &str) -> Result<CatalogEntry> {
        let now = Utc::now();
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let next_id: i64 =
            tx.query_row(SELECT_NEXT_CATALOG_ID, [kind.as_str()], |row| row.get(0))?;
        let id = ItemId::try_from(next_id)?;
        let entry = CatalogEntry::named(ItemRef::new(kind, id), display);

        tx.execute(
            INSERT_CATALOG_ITEM,
            params![
                kind.as_str(),
                id.value(),
                entry.title,
                entry.name,
                entry.class_name,
                entry.room_number,
                datetime_to_millis(now),
            ],
        )?;

        tx.commit()?;
        Ok(entry)
    }

    /// Inserts a catalog entry with an explicit id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails (including id collisions).
    pub fn insert_catalog_entry(&mut self, entry: &CatalogEntry) -> Result<()> {
        self.conn.execute(
            INSERT_CATALOG_ITEM,
            params![
                entry.item.kind.as_str(),
                entry.item.id.value(),
                entry.title,
                entry.name,
                entry.class_name,
                entry.room_number,
                datetime_to_millis(Utc::now()),
            ],
        )?;
        Ok(())
    }

    /// Loads a point-in-time catalog snapshot.
    ///
    /// The snapshot backs the `Catalog` trait for admission and reporting;
    /// catalog changes made after loading are not visible to it.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn load_catalog(&self) -> Result<InMemoryCatalog> {
        let mut stmt = self.conn.prepare(SELECT_CATALOG_ITEMS)?;
        let mut catalog = InMemoryCatalog::new();
        for entry in stmt.query_map([], row_to_catalog_entry)? {
            catalog.insert(entry?);
        }
        Ok(catalog)
    }
}
