//! Booking types: statuses, half-open date ranges, and the booking record.
//!
//! A [`Booking`] is only ever created through the ledger's admission check;
//! this module provides the data types and their invariants (strict date
//! ordering, positive guest counts) but no admission logic.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::ItemRef;

/// Lifecycle status of a booking.
///
/// New bookings start as `Pending`. Transitions are an administrative
/// concern outside the admission core; the core only reads the status to
/// decide whether a booking occupies its date range.
///
/// # Examples
///
/// ```
/// use willa::BookingStatus;
///
/// assert!(BookingStatus::Pending.occupies());
/// assert!(BookingStatus::Confirmed.occupies());
/// assert!(!BookingStatus::Cancelled.occupies());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    /// Accepted but not yet confirmed.
    Pending,
    /// Confirmed by an administrator.
    Confirmed,
    /// Cancelled; releases the date range.
    Cancelled,
}

impl BookingStatus {
    /// Returns the fixed storage string for this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Whether a booking in this status occupies its date range.
    ///
    /// Only occupying bookings participate in the non-overlap invariant
    /// and in occupancy accounting.
    #[must_use]
    pub const fn occupies(self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed)
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(ValidationError {
                field: "status".into(),
                message: format!("unknown status '{other}'"),
            }),
        }
    }
}

/// A half-open calendar date range `[start, end)`.
///
/// The start date is included, the end date is not; a one-night stay from
/// the 5th to the 6th is `[5th, 6th)`. Construction enforces the strict
/// ordering invariant `start < end`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use willa::DateRange;
///
/// let d = |day| NaiveDate::from_ymd_opt(2026, 9, day).unwrap();
///
/// let stay = DateRange::new(d(5), d(8)).unwrap();
/// assert_eq!(stay.nights(), 3);
///
/// // Back-to-back ranges do not overlap.
/// let next = DateRange::new(d(8), d(10)).unwrap();
/// assert!(!stay.overlaps(&next));
///
/// // Empty ranges are invalid.
/// assert!(DateRange::new(d(5), d(5)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a range, enforcing `start < end` strictly.
    ///
    /// # Errors
    ///
    /// Returns an error if `start >= end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, InvalidDateRangeError> {
        if start < end {
            Ok(Self { start, end })
        } else {
            Err(InvalidDateRangeError { start, end })
        }
    }

    /// Returns the first occupied date.
    #[must_use]
    pub const fn start(self) -> NaiveDate {
        self.start
    }

    /// Returns the first date after the range.
    #[must_use]
    pub const fn end(self) -> NaiveDate {
        self.end
    }

    /// Number of nights covered by the range.
    #[must_use]
    pub fn nights(self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Half-open overlap test: two ranges overlap iff each one's start is
    /// strictly before the other's end.
    #[must_use]
    pub fn overlaps(self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// Error type for date ranges that are empty or reversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidDateRangeError {
    /// The proposed start date.
    pub start: NaiveDate,
    /// The proposed end date.
    pub end: NaiveDate,
}

impl fmt::Display for InvalidDateRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid date range {} to {}: end date must be after start date",
            self.start, self.end
        )
    }
}

impl std::error::Error for InvalidDateRangeError {}

/// A persisted booking record.
///
/// Instances are produced by the storage layer; the id and timestamps are
/// system-assigned and the item reference and date range are immutable
/// after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    id: i64,
    owner: String,
    item: ItemRef,
    range: DateRange,
    guests: u32,
    status: BookingStatus,
    notes: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Booking {
    /// Creates a booking builder.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use willa::{Booking, DateRange, ItemId, ItemKind, ItemRef};
    ///
    /// let item = ItemRef::new(ItemKind::Room, ItemId::try_from(1u32).unwrap());
    /// let range = DateRange::new(
    ///     NaiveDate::from_ymd_opt(2026, 9, 5).unwrap(),
    ///     NaiveDate::from_ymd_opt(2026, 9, 8).unwrap(),
    /// )
    /// .unwrap();
    ///
    /// let booking = Booking::builder(1, "guest", item, range).build().unwrap();
    /// assert_eq!(booking.guests(), 1);
    /// ```
    #[must_use]
    pub fn builder(
        id: i64,
        owner: impl Into<String>,
        item: ItemRef,
        range: DateRange,
    ) -> BookingBuilder {
        BookingBuilder {
            id,
            owner: owner.into(),
            item,
            range,
            guests: 1,
            status: BookingStatus::Pending,
            notes: String::new(),
            created_at: None,
            updated_at: None,
        }
    }

    /// Returns the system-assigned booking id.
    #[must_use]
    pub const fn id(&self) -> i64 {
        self.id
    }

    /// Returns the id of the principal that created the booking.
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Returns the booked inventory item.
    #[must_use]
    pub const fn item(&self) -> ItemRef {
        self.item
    }

    /// Returns the booked date range.
    #[must_use]
    pub const fn range(&self) -> DateRange {
        self.range
    }

    /// Returns the guest count (informational only).
    #[must_use]
    pub const fn guests(&self) -> u32 {
        self.guests
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> BookingStatus {
        self.status
    }

    /// Returns the free-text notes.
    #[must_use]
    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last-modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Whether this booking currently occupies its date range.
    #[must_use]
    pub const fn occupies(&self) -> bool {
        self.status.occupies()
    }
}

/// Builder for [`Booking`] instances.
///
/// Used by the storage layer when materializing rows and when returning a
/// freshly admitted booking.
#[derive(Debug)]
pub struct BookingBuilder {
    id: i64,
    owner: String,
    item: ItemRef,
    range: DateRange,
    guests: u32,
    status: BookingStatus,
    notes: String,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
}

impl BookingBuilder {
    /// Sets the guest count.
    #[must_use]
    pub const fn guests(mut self, guests: u32) -> Self {
        self.guests = guests;
        self
    }

    /// Sets the lifecycle status.
    #[must_use]
    pub const fn status(mut self, status: BookingStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the free-text notes.
    #[must_use]
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Sets the creation timestamp.
    #[must_use]
    pub const fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Sets the last-modification timestamp.
    #[must_use]
    pub const fn updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = Some(updated_at);
        self
    }

    /// Builds the booking.
    ///
    /// # Errors
    ///
    /// Returns an error if the owner is empty after trimming or the guest
    /// count is zero.
    pub fn build(self) -> Result<Booking, ValidationError> {
        let owner = self.owner.trim().to_string();
        if owner.is_empty() {
            return Err(ValidationError {
                field: "owner".into(),
                message: "owner must be non-empty".into(),
            });
        }
        if self.guests == 0 {
            return Err(ValidationError {
                field: "guests".into(),
                message: "guest count must be a positive integer".into(),
            });
        }

        let now = Utc::now();
        Ok(Booking {
            id: self.id,
            owner,
            item: self.item,
            range: self.range,
            guests: self.guests,
            status: self.status,
            notes: self.notes,
            created_at: self.created_at.unwrap_or(now),
            updated_at: self.updated_at.unwrap_or(now),
        })
    }
}

/// A reservation request as submitted by a caller.
///
/// The proposal carries raw start and end dates; the strict ordering check
/// happens during admission so that rejection ordering matches the ledger
/// contract (item existence is verified first).
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use willa::{BookingProposal, ItemId, ItemKind, ItemRef};
///
/// let item = ItemRef::new(ItemKind::Room, ItemId::try_from(1u32).unwrap());
/// let proposal = BookingProposal::new(
///     item,
///     NaiveDate::from_ymd_opt(2026, 9, 5).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 9, 8).unwrap(),
/// )
/// .with_guests(Some(2))
/// .with_notes("late arrival");
///
/// assert_eq!(proposal.guests, Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingProposal {
    /// The requested inventory item.
    pub item: ItemRef,
    /// Requested first night.
    pub start: NaiveDate,
    /// Requested checkout date (exclusive).
    pub end: NaiveDate,
    /// Requested guest count; defaults to 1 when unspecified.
    pub guests: Option<u32>,
    /// Free-text notes.
    pub notes: String,
}

impl BookingProposal {
    /// Creates a proposal for the given item and dates.
    #[must_use]
    pub fn new(item: ItemRef, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            item,
            start,
            end,
            guests: None,
            notes: String::new(),
        }
    }

    /// Sets the requested guest count.
    #[must_use]
    pub const fn with_guests(mut self, guests: Option<u32>) -> Self {
        self.guests = guests;
        self
    }

    /// Sets the free-text notes.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}

/// Error type for field-level validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the failure.
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}
