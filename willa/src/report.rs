//! The occupancy reporter: read-only dashboard aggregation.
//!
//! Computes a point-in-time summary over the ledger's current state for a
//! trailing window of exactly [`OCCUPANCY_WINDOW_DAYS`] days ending today.
//! Purely derived; a slightly stale snapshot is acceptable.

use chrono::{Duration, NaiveDate, Utc};
use serde::Serialize;

use crate::catalog::Catalog;
use crate::database::Database;
use crate::error::Result;
use crate::{Booking, ItemKind};

/// Length of the trailing occupancy window, in days.
pub const OCCUPANCY_WINDOW_DAYS: i64 = 30;

/// Number of bookings shown in the recent-bookings section.
pub const RECENT_BOOKINGS_LIMIT: u32 = 5;

/// A recently created booking with its catalog display name resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentBooking {
    /// The booking record.
    #[serde(flatten)]
    pub booking: Booking,
    /// Display name of the booked item, when the catalog can resolve one.
    pub item_name: Option<String>,
}

/// The dashboard summary.
///
/// `occupancy_rate` is a capacity-utilization estimate: occupied room
/// nights inside the window divided by `total_rooms * 30`, as a
/// percentage rounded to two decimals. Bookings across different rooms
/// sum linearly against the shared denominator, so the rate can exceed
/// 100% — that simplification is intended.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    /// Number of room items in the catalog.
    pub total_rooms: u64,
    /// Number of resort packages in the catalog.
    pub total_resorts: u64,
    /// Number of bookings, regardless of status.
    pub total_bookings: u64,
    /// Trailing-window room utilization percentage.
    pub occupancy_rate: f64,
    /// The five most recently created bookings.
    pub recent_bookings: Vec<RecentBooking>,
}

/// Read-only aggregator over the ledger's booking set.
///
/// # Examples
///
/// ```no_run
/// use willa::database::{Database, DatabaseConfig};
/// use willa::Reporter;
///
/// let db = Database::open(DatabaseConfig::new("/tmp/willa.db")).unwrap();
/// let catalog = db.load_catalog().unwrap();
/// let summary = Reporter::new(&db, &catalog).summarize().unwrap();
/// println!("occupancy {}%", summary.occupancy_rate);
/// ```
pub struct Reporter<'a, C: Catalog> {
    db: &'a Database,
    catalog: &'a C,
}

impl<'a, C: Catalog> Reporter<'a, C> {
    /// Creates a reporter over a database and a catalog collaborator.
    #[must_use]
    pub fn new(db: &'a Database, catalog: &'a C) -> Self {
        Self { db, catalog }
    }

    /// Summarizes as of the current date.
    ///
    /// # Errors
    ///
    /// Returns an error if a storage query fails.
    pub fn summarize(&self) -> Result<DashboardSummary> {
        self.summarize_as_of(Utc::now().date_naive())
    }

    /// Summarizes for the trailing window ending on `today`.
    ///
    /// Taking the reference date as a parameter keeps the arithmetic
    /// deterministic under test.
    ///
    /// # Errors
    ///
    /// Returns an error if a storage query fails.
    pub fn summarize_as_of(&self, today: NaiveDate) -> Result<DashboardSummary> {
        let total_rooms = self.catalog.count(ItemKind::Room);
        let total_resorts = self.catalog.count(ItemKind::Resort);
        let total_bookings = self.db.count_bookings()?;

        let recent_bookings = self
            .db
            .recent_bookings(RECENT_BOOKINGS_LIMIT)?
            .into_iter()
            .map(|booking| {
                let item_name = self.catalog.display_name(booking.item());
                RecentBooking { booking, item_name }
            })
            .collect();

        let occupancy_rate = if total_rooms > 0 {
            let window_start = today - Duration::days(OCCUPANCY_WINDOW_DAYS);
            let occupied_nights: i64 = self
                .db
                .room_bookings_ending_on_or_after(window_start)?
                .iter()
                .map(|b| occupied_nights_in_window(b, window_start, today))
                .sum();

            let denominator = total_rooms as f64 * OCCUPANCY_WINDOW_DAYS as f64;
            round2(occupied_nights as f64 / denominator * 100.0)
        } else {
            0.0
        };

        Ok(DashboardSummary {
            total_rooms,
            total_resorts,
            total_bookings,
            occupancy_rate,
            recent_bookings,
        })
    }
}

/// Nights a booking occupies inside `[window_start, today]`, clipped to
/// non-negative.
fn occupied_nights_in_window(booking: &Booking, window_start: NaiveDate, today: NaiveDate) -> i64 {
    let range = booking.range();
    let span_start = range.start().max(window_start);
    let span_end = range.end().min(today);
    (span_end - span_start).num_days().max(0)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogEntry, InMemoryCatalog};
    use crate::database::test_util::{create_test_database, date, room};
    use crate::{BookingStatus, DateRange, ItemId, ItemRef};

    fn catalog_with_rooms(count: u32) -> InMemoryCatalog {
        let mut catalog = InMemoryCatalog::new();
        for id in 1..=count {
            catalog.insert(CatalogEntry::named(room(id), format!("10{id}")));
        }
        catalog
    }

    #[test]
    fn test_zero_rooms_means_zero_rate() {
        let mut db = create_test_database();
        let catalog = InMemoryCatalog::new();
        let range = DateRange::new(date(1), date(4)).unwrap();
        db.insert_booking("guest", room(1), range, 1, "").unwrap();

        let summary = Reporter::new(&db, &catalog)
            .summarize_as_of(date(30))
            .unwrap();
        assert_eq!(summary.occupancy_rate, 0.0);
        assert_eq!(summary.total_rooms, 0);
        assert_eq!(summary.total_bookings, 1);
    }

    #[test]
    fn test_two_rooms_three_nights_each() {
        let mut db = create_test_database();
        let catalog = catalog_with_rooms(2);

        // Two different rooms, each a 3-night stay inside the window.
        let range = DateRange::new(date(10), date(13)).unwrap();
        db.insert_booking("guest", room(1), range, 1, "").unwrap();
        let range = DateRange::new(date(15), date(18)).unwrap();
        db.insert_booking("guest", room(2), range, 1, "").unwrap();

        let summary = Reporter::new(&db, &catalog)
            .summarize_as_of(date(30))
            .unwrap();
        // round(6 / (2 * 30) * 100, 2)
        assert_eq!(summary.occupancy_rate, 10.0);
        assert_eq!(summary.total_rooms, 2);
    }

    #[test]
    fn test_window_clips_booking_span() {
        let mut db = create_test_database();
        let catalog = catalog_with_rooms(1);

        // Ten nights booked, but only the last five fall inside the window
        // ending on the 10th with help of clipping at "today".
        let range = DateRange::new(date(5), date(15)).unwrap();
        db.insert_booking("guest", room(1), range, 1, "").unwrap();

        let summary = Reporter::new(&db, &catalog)
            .summarize_as_of(date(10))
            .unwrap();
        // 5 nights / 30 room-nights.
        assert_eq!(summary.occupancy_rate, 16.67);
    }

    #[test]
    fn test_cancelled_bookings_do_not_count() {
        let mut db = create_test_database();
        let catalog = catalog_with_rooms(1);
        let range = DateRange::new(date(10), date(13)).unwrap();
        let booking = db.insert_booking("guest", room(1), range, 1, "").unwrap();
        db.set_booking_status(booking.id(), BookingStatus::Cancelled)
            .unwrap();

        let summary = Reporter::new(&db, &catalog)
            .summarize_as_of(date(30))
            .unwrap();
        assert_eq!(summary.occupancy_rate, 0.0);
        // Cancelled bookings still count toward the total.
        assert_eq!(summary.total_bookings, 1);
    }

    #[test]
    fn test_non_room_bookings_excluded_from_rate() {
        let mut db = create_test_database();
        let mut catalog = catalog_with_rooms(1);
        let table = ItemRef::new(crate::ItemKind::Table, ItemId::try_from(1u32).unwrap());
        catalog.insert(CatalogEntry::named(table, "Bay window"));

        let range = DateRange::new(date(10), date(13)).unwrap();
        db.insert_booking("guest", table, range, 2, "").unwrap();

        let summary = Reporter::new(&db, &catalog)
            .summarize_as_of(date(30))
            .unwrap();
        assert_eq!(summary.occupancy_rate, 0.0);
        assert_eq!(summary.total_bookings, 1);
    }

    #[test]
    fn test_recent_bookings_resolve_names() {
        let mut db = create_test_database();
        let catalog = catalog_with_rooms(1);

        for day in 1..=7u32 {
            let range = DateRange::new(date(day), date(day + 1)).unwrap();
            db.insert_booking("guest", room(1), range, 1, "").unwrap();
        }

        let summary = Reporter::new(&db, &catalog)
            .summarize_as_of(date(30))
            .unwrap();
        assert_eq!(summary.recent_bookings.len(), 5);
        // Newest first; every entry resolves to the room number.
        let first = &summary.recent_bookings[0];
        assert!(first.booking.id() > summary.recent_bookings[4].booking.id());
        assert_eq!(first.item_name.as_deref(), Some("101"));
    }

    #[test]
    fn test_unresolvable_item_name_is_absent() {
        let mut db = create_test_database();
        let catalog = InMemoryCatalog::new();
        let range = DateRange::new(date(1), date(2)).unwrap();
        db.insert_booking("guest", room(1), range, 1, "").unwrap();

        let summary = Reporter::new(&db, &catalog)
            .summarize_as_of(date(30))
            .unwrap();
        assert_eq!(summary.recent_bookings[0].item_name, None);
    }

    #[test]
    fn test_summary_serializes_to_json() {
        let db = create_test_database();
        let catalog = InMemoryCatalog::new();
        let summary = Reporter::new(&db, &catalog)
            .summarize_as_of(date(30))
            .unwrap();

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["total_bookings"], 0);
        assert_eq!(json["occupancy_rate"], 0.0);
    }
}
