//! The booking ledger: admission and listing.
//!
//! `submit` is the only way a booking comes into existence. The four
//! admission checks run in a fixed order and the first failing check wins:
//!
//! 1. an authenticated principal must be present,
//! 2. the referenced item must exist in the catalog,
//! 3. the start date must be strictly before the end date,
//! 4. the dates must not overlap an occupying booking for the same item.
//!
//! The fourth check and the insert are atomic (see
//! [`Database::insert_booking`]); storage failures propagate as
//! [`Error::Database`](crate::Error::Database), never disguised as one of
//! the four rejections.

use crate::catalog::Catalog;
use crate::database::Database;
use crate::error::{Error, Result};
use crate::{Booking, BookingProposal, DateRange, Principal};

/// The booking admission and listing surface.
///
/// Borrows the storage layer mutably and a catalog collaborator; both the
/// principal and the catalog are passed in explicitly rather than read
/// from ambient state.
///
/// # Examples
///
/// ```no_run
/// use chrono::NaiveDate;
/// use willa::database::{Database, DatabaseConfig};
/// use willa::{BookingProposal, ItemKind, Ledger, Principal};
///
/// let mut db = Database::open(DatabaseConfig::new("/tmp/willa.db")).unwrap();
/// let room = db.add_catalog_item(ItemKind::Room, "101").unwrap();
/// let catalog = db.load_catalog().unwrap();
///
/// let guest = Principal::new("guest").unwrap();
/// let proposal = BookingProposal::new(
///     room.item,
///     NaiveDate::from_ymd_opt(2026, 9, 5).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 9, 8).unwrap(),
/// );
///
/// let mut ledger = Ledger::new(&mut db, &catalog);
/// let booking = ledger.submit(Some(&guest), &proposal).unwrap();
/// println!("booked #{}", booking.id());
/// ```
pub struct Ledger<'a, C: Catalog> {
    db: &'a mut Database,
    catalog: &'a C,
}

impl<'a, C: Catalog> Ledger<'a, C> {
    /// Creates a ledger over a database and a catalog collaborator.
    #[must_use]
    pub fn new(db: &'a mut Database, catalog: &'a C) -> Self {
        Self { db, catalog }
    }

    /// Runs the admission check and persists the booking on acceptance.
    ///
    /// Accepted bookings are created with status pending and a guest count
    /// defaulting to 1 when the proposal leaves it unspecified. The
    /// returned record carries the assigned id and timestamps.
    ///
    /// # Errors
    ///
    /// Returns the first failing admission check:
    /// `AuthenticationRequired`, `ItemNotFound`, `InvalidDateRange`, or
    /// `DateRangeUnavailable`; `Validation` for a zero guest count; or a
    /// `Database` error on storage failure.
    pub fn submit(
        &mut self,
        principal: Option<&Principal>,
        proposal: &BookingProposal,
    ) -> Result<Booking> {
        let Some(principal) = principal else {
            return Err(Error::AuthenticationRequired);
        };

        if !self.catalog.exists(proposal.item) {
            return Err(Error::ItemNotFound {
                item: proposal.item,
            });
        }

        let range = DateRange::new(proposal.start, proposal.end)?;

        let guests = proposal.guests.unwrap_or(1);
        if guests == 0 {
            return Err(Error::Validation {
                field: "guests".into(),
                message: "guest count must be a positive integer".into(),
            });
        }

        let booking = self.db.insert_booking(
            principal.id(),
            proposal.item,
            range,
            guests,
            &proposal.notes,
        )?;

        log::debug!(
            "admitted booking {} for {} on {}",
            booking.id(),
            principal.id(),
            booking.item()
        );
        Ok(booking)
    }

    /// Lists bookings visible to the principal, newest first.
    ///
    /// A privileged principal sees every booking; anyone else sees only
    /// their own. Ordering is by creation time descending. Paging is a
    /// presentation concern and not offered here.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list(&self, principal: &Principal) -> Result<Vec<Booking>> {
        if principal.is_privileged() {
            self.db.list_all_bookings()
        } else {
            self.db.list_bookings_for_owner(principal.id())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogEntry, InMemoryCatalog};
    use crate::database::test_util::{create_test_database, date, room};
    use crate::{BookingStatus, ItemId, ItemKind, ItemRef};

    fn test_catalog() -> InMemoryCatalog {
        let mut catalog = InMemoryCatalog::new();
        catalog.insert(CatalogEntry::named(room(1), "101"));
        catalog.insert(CatalogEntry::named(room(2), "102"));
        catalog.insert(CatalogEntry::named(
            ItemRef::new(ItemKind::Table, ItemId::try_from(1u32).unwrap()),
            "Bay window",
        ));
        catalog
    }

    fn guest() -> Principal {
        Principal::new("guest").unwrap()
    }

    #[test]
    fn test_submit_requires_principal() {
        let mut db = create_test_database();
        let catalog = test_catalog();
        let proposal = BookingProposal::new(room(1), date(5), date(8));

        let err = Ledger::new(&mut db, &catalog)
            .submit(None, &proposal)
            .unwrap_err();
        assert!(matches!(err, Error::AuthenticationRequired));
    }

    #[test]
    fn test_submit_unknown_item() {
        let mut db = create_test_database();
        let catalog = test_catalog();
        let proposal = BookingProposal::new(room(9), date(5), date(8));

        let err = Ledger::new(&mut db, &catalog)
            .submit(Some(&guest()), &proposal)
            .unwrap_err();
        assert!(matches!(err, Error::ItemNotFound { .. }));
    }

    #[test]
    fn test_item_check_precedes_date_check() {
        let mut db = create_test_database();
        let catalog = test_catalog();
        // Both the item and the dates are bad; the item check wins.
        let proposal = BookingProposal::new(room(9), date(8), date(5));

        let err = Ledger::new(&mut db, &catalog)
            .submit(Some(&guest()), &proposal)
            .unwrap_err();
        assert!(matches!(err, Error::ItemNotFound { .. }));
    }

    #[test]
    fn test_submit_empty_range_rejected() {
        let mut db = create_test_database();
        let catalog = test_catalog();
        let proposal = BookingProposal::new(room(1), date(5), date(5));

        let err = Ledger::new(&mut db, &catalog)
            .submit(Some(&guest()), &proposal)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidDateRange { .. }));
    }

    #[test]
    fn test_submit_defaults_guests_to_one() {
        let mut db = create_test_database();
        let catalog = test_catalog();
        let proposal = BookingProposal::new(room(1), date(5), date(8));

        let booking = Ledger::new(&mut db, &catalog)
            .submit(Some(&guest()), &proposal)
            .unwrap();
        assert_eq!(booking.guests(), 1);
        assert_eq!(booking.status(), BookingStatus::Pending);
        assert_eq!(booking.owner(), "guest");
    }

    #[test]
    fn test_submit_rejects_zero_guests() {
        let mut db = create_test_database();
        let catalog = test_catalog();
        let proposal = BookingProposal::new(room(1), date(5), date(8)).with_guests(Some(0));

        let err = Ledger::new(&mut db, &catalog)
            .submit(Some(&guest()), &proposal)
            .unwrap_err();
        assert!(matches!(err, Error::Validation { ref field, .. } if field == "guests"));
    }

    #[test]
    fn test_duplicate_submission_rejected() {
        let mut db = create_test_database();
        let catalog = test_catalog();
        let proposal = BookingProposal::new(room(1), date(5), date(8));
        let mut ledger = Ledger::new(&mut db, &catalog);

        ledger.submit(Some(&guest()), &proposal).unwrap();
        let err = ledger.submit(Some(&guest()), &proposal).unwrap_err();
        assert!(matches!(err, Error::DateRangeUnavailable { .. }));
    }

    #[test]
    fn test_adjacent_ranges_accepted() {
        let mut db = create_test_database();
        let catalog = test_catalog();
        let mut ledger = Ledger::new(&mut db, &catalog);

        ledger
            .submit(Some(&guest()), &BookingProposal::new(room(1), date(5), date(8)))
            .unwrap();

        // Contained range collides.
        let err = ledger
            .submit(Some(&guest()), &BookingProposal::new(room(1), date(6), date(7)))
            .unwrap_err();
        assert!(matches!(err, Error::DateRangeUnavailable { .. }));

        // Checkout day is free for the next arrival.
        ledger
            .submit(Some(&guest()), &BookingProposal::new(room(1), date(8), date(10)))
            .unwrap();
    }

    #[test]
    fn test_same_dates_different_items_accepted() {
        let mut db = create_test_database();
        let catalog = test_catalog();
        let mut ledger = Ledger::new(&mut db, &catalog);

        ledger
            .submit(Some(&guest()), &BookingProposal::new(room(1), date(5), date(8)))
            .unwrap();
        ledger
            .submit(Some(&guest()), &BookingProposal::new(room(2), date(5), date(8)))
            .unwrap();
        let table = ItemRef::new(ItemKind::Table, ItemId::try_from(1u32).unwrap());
        ledger
            .submit(Some(&guest()), &BookingProposal::new(table, date(5), date(8)))
            .unwrap();
    }

    #[test]
    fn test_list_scopes_to_owner() {
        let mut db = create_test_database();
        let catalog = test_catalog();
        let alice = Principal::new("alice").unwrap();
        let bob = Principal::new("bob").unwrap();
        let admin = Principal::new("admin").unwrap().privileged();

        {
            let mut ledger = Ledger::new(&mut db, &catalog);
            ledger
                .submit(Some(&alice), &BookingProposal::new(room(1), date(1), date(2)))
                .unwrap();
            ledger
                .submit(Some(&bob), &BookingProposal::new(room(1), date(2), date(3)))
                .unwrap();
        }

        let ledger = Ledger::new(&mut db, &catalog);
        assert_eq!(ledger.list(&alice).unwrap().len(), 1);
        assert_eq!(ledger.list(&bob).unwrap().len(), 1);

        let all = ledger.list(&admin).unwrap();
        assert_eq!(all.len(), 2);
        // Newest first.
        assert!(all[0].id() > all[1].id());
    }
}
