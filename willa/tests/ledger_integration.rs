//! Integration tests for the booking ledger.
//!
//! These tests exercise the full stack from ledger admission down to the
//! on-disk database: conflict detection, status interaction, visibility
//! scoping, and persistence across reopens.

mod common;

use common::{create_test_database, date, room, seed_rooms, test_database_path};
use willa::database::{Database, DatabaseConfig};
use willa::{BookingProposal, BookingStatus, Error, ItemId, ItemKind, ItemRef, Ledger, Principal};

#[test]
fn test_submit_and_list_round_trip() {
    let mut db = create_test_database();
    seed_rooms(&mut db, 2);
    let catalog = db.load_catalog().unwrap();

    let guest = Principal::new("alice").unwrap();
    let mut ledger = Ledger::new(&mut db, &catalog);

    let booking = ledger
        .submit(
            Some(&guest),
            &BookingProposal::new(room(1), date(1), date(4)).with_guests(Some(2)),
        )
        .unwrap();

    assert_eq!(booking.owner(), "alice");
    assert_eq!(booking.status(), BookingStatus::Pending);
    assert_eq!(booking.range().nights(), 3);

    let visible = ledger.list(&guest).unwrap();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id(), booking.id());
}

#[test]
fn test_conflicting_submission_rejected() {
    let mut db = create_test_database();
    seed_rooms(&mut db, 1);
    let catalog = db.load_catalog().unwrap();

    let guest = Principal::new("alice").unwrap();
    let mut ledger = Ledger::new(&mut db, &catalog);

    ledger
        .submit(Some(&guest), &BookingProposal::new(room(1), date(5), date(8)))
        .unwrap();

    let err = ledger
        .submit(Some(&guest), &BookingProposal::new(room(1), date(7), date(9)))
        .unwrap_err();
    assert!(matches!(err, Error::DateRangeUnavailable { .. }));
    assert!(err.is_rejection());
}

#[test]
fn test_back_to_back_stays_available() {
    let mut db = create_test_database();
    seed_rooms(&mut db, 1);
    let catalog = db.load_catalog().unwrap();

    let guest = Principal::new("alice").unwrap();
    let mut ledger = Ledger::new(&mut db, &catalog);

    ledger
        .submit(Some(&guest), &BookingProposal::new(room(1), date(5), date(8)))
        .unwrap();

    // Checkout day is free for the next check-in
    ledger
        .submit(Some(&guest), &BookingProposal::new(room(1), date(8), date(10)))
        .unwrap();
}

#[test]
fn test_cancellation_frees_the_range() {
    let mut db = create_test_database();
    seed_rooms(&mut db, 1);
    let catalog = db.load_catalog().unwrap();

    let guest = Principal::new("alice").unwrap();
    let first = {
        let mut ledger = Ledger::new(&mut db, &catalog);
        ledger
            .submit(Some(&guest), &BookingProposal::new(room(1), date(5), date(8)))
            .unwrap()
    };

    db.set_booking_status(first.id(), BookingStatus::Cancelled)
        .unwrap();

    let mut ledger = Ledger::new(&mut db, &catalog);
    ledger
        .submit(Some(&guest), &BookingProposal::new(room(1), date(5), date(8)))
        .unwrap();
}

#[test]
fn test_visibility_scoping() {
    let mut db = create_test_database();
    seed_rooms(&mut db, 2);
    let catalog = db.load_catalog().unwrap();

    let alice = Principal::new("alice").unwrap();
    let bob = Principal::new("bob").unwrap();
    let staff = Principal::new("staff").unwrap().privileged();

    let mut ledger = Ledger::new(&mut db, &catalog);
    ledger
        .submit(Some(&alice), &BookingProposal::new(room(1), date(1), date(3)))
        .unwrap();
    ledger
        .submit(Some(&bob), &BookingProposal::new(room(2), date(1), date(3)))
        .unwrap();

    assert_eq!(ledger.list(&alice).unwrap().len(), 1);
    assert_eq!(ledger.list(&bob).unwrap().len(), 1);
    assert_eq!(ledger.list(&staff).unwrap().len(), 2);
}

#[test]
fn test_bookings_survive_reopen() {
    let db_path = test_database_path();

    {
        let mut db = Database::open(DatabaseConfig::new(&db_path)).unwrap();
        seed_rooms(&mut db, 1);
        let catalog = db.load_catalog().unwrap();
        let guest = Principal::new("alice").unwrap();
        let mut ledger = Ledger::new(&mut db, &catalog);
        ledger
            .submit(Some(&guest), &BookingProposal::new(room(1), date(1), date(4)))
            .unwrap();
    }

    let db = Database::open(DatabaseConfig::new(&db_path)).unwrap();
    let bookings = db.list_all_bookings().unwrap();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].owner(), "alice");
    assert_eq!(bookings[0].range().start(), date(1));
}

#[test]
fn test_unknown_item_kinds_are_independent() {
    let mut db = create_test_database();
    seed_rooms(&mut db, 1);
    let table = ItemRef::new(ItemKind::Table, ItemId::try_from(1u32).unwrap());
    db.insert_catalog_entry(&willa::CatalogEntry::named(table, "window"))
        .unwrap();
    let catalog = db.load_catalog().unwrap();

    let guest = Principal::new("alice").unwrap();
    let mut ledger = Ledger::new(&mut db, &catalog);

    // Same numeric id, different kind: no conflict
    ledger
        .submit(Some(&guest), &BookingProposal::new(room(1), date(5), date(8)))
        .unwrap();
    ledger
        .submit(Some(&guest), &BookingProposal::new(table, date(5), date(8)))
        .unwrap();
}
