#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # willa
//!
//! A library for managing hospitality reservations.
//!
//! This library provides core types and functionality for submitting,
//! tracking, and reporting on bookings of rooms, tables, resorts, and
//! plane seats, with half-open date-range conflict detection and a
//! trailing-window occupancy dashboard.
//!
//! ## Core Types
//!
//! - [`ItemKind`], [`ItemId`], and [`ItemRef`]: Bookable inventory references
//! - [`Booking`], [`BookingProposal`], and [`DateRange`]: Reservation tracking
//! - [`Ledger`]: Submission and listing with conflict detection
//! - [`Reporter`] and [`DashboardSummary`]: Occupancy reporting
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use willa::{DateRange, ItemId, ItemKind, ItemRef};
//!
//! // Reference a bookable item
//! let room = ItemRef::new(ItemKind::Room, ItemId::try_from(7_u32).unwrap());
//! assert_eq!(room.to_string(), "room#7");
//!
//! // Date ranges are half-open: [start, end)
//! let start = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();
//! let end = NaiveDate::from_ymd_opt(2026, 9, 4).unwrap();
//! let range = DateRange::new(start, end).unwrap();
//! assert_eq!(range.nights(), 3);
//! ```

pub mod booking;
pub mod catalog;
pub mod config;
pub mod database;
pub mod error;
pub mod item;
pub mod ledger;
pub mod logging;
pub mod principal;
pub mod report;

// Re-export key types at crate root for convenience
pub use booking::{Booking, BookingProposal, BookingStatus, DateRange};
pub use catalog::{Catalog, CatalogEntry, InMemoryCatalog};
pub use config::{Config, ConfigBuilder};
pub use database::{Database, DatabaseConfig};
pub use error::{Error, Result};
pub use item::{ItemId, ItemKind, ItemRef};
pub use ledger::Ledger;
pub use logging::{init_logger, LogLevel, Logger};
pub use principal::Principal;
pub use report::{DashboardSummary, RecentBooking, Reporter};
