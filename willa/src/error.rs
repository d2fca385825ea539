//! Error types for the willa library.
//!
//! The four admission rejections (`AuthenticationRequired`, `ItemNotFound`,
//! `InvalidDateRange`, `DateRangeUnavailable`) are surfaced to callers as
//! distinct variants; storage and configuration failures are carried as
//! separate infrastructure variants and are never mapped onto the domain
//! rejections.

use chrono::NaiveDate;
use thiserror::Error;

use crate::ItemRef;

/// Result type alias for operations that may fail with a willa error.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the willa library.
#[derive(Debug, Error)]
pub enum Error {
    /// No authenticated principal was supplied.
    #[error("authentication required to create a booking")]
    AuthenticationRequired,

    /// The referenced inventory item does not exist in the catalog.
    #[error("item {item} not found in catalog")]
    ItemNotFound {
        /// The missing item reference.
        item: ItemRef,
    },

    /// The proposed start date is not strictly before the end date.
    #[error("invalid date range {start} to {end}: end date must be after start date")]
    InvalidDateRange {
        /// The proposed start date.
        start: NaiveDate,
        /// The proposed end date.
        end: NaiveDate,
    },

    /// The proposed dates overlap an existing non-cancelled booking for
    /// the same item.
    #[error("dates {start} to {end} are not available for {item}")]
    DateRangeUnavailable {
        /// The requested item.
        item: ItemRef,
        /// The requested start date.
        start: NaiveDate,
        /// The requested end date.
        end: NaiveDate,
    },

    /// The requested resource was not found.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// A field-level validation failure.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the failure.
        message: String,
    },

    /// An unsupported schema version was encountered.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The schema version this client supports.
        expected: i32,
        /// The schema version found in the database.
        found: i32,
    },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error is one of the four admission rejections.
    ///
    /// Admission rejections are caller mistakes; everything else is an
    /// infrastructure failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use willa::Error;
    ///
    /// assert!(Error::AuthenticationRequired.is_rejection());
    /// ```
    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::AuthenticationRequired
                | Self::ItemNotFound { .. }
                | Self::InvalidDateRange { .. }
                | Self::DateRangeUnavailable { .. }
        )
    }

    /// Whether this error is lock contention that outlasted the busy
    /// timeout.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        matches!(
            self,
            Self::Database(e) if e.sqlite_error_code() == Some(rusqlite::ErrorCode::DatabaseBusy)
        )
    }
}

// Conversions from the fine-grained validation errors defined next to
// their types.

impl From<crate::item::InvalidItemKindError> for Error {
    fn from(err: crate::item::InvalidItemKindError) -> Self {
        Self::Validation {
            field: "item_type".into(),
            message: err.to_string(),
        }
    }
}

impl From<crate::item::InvalidItemIdError> for Error {
    fn from(err: crate::item::InvalidItemIdError) -> Self {
        Self::Validation {
            field: "item_id".into(),
            message: err.to_string(),
        }
    }
}

impl From<crate::booking::InvalidDateRangeError> for Error {
    fn from(err: crate::booking::InvalidDateRangeError) -> Self {
        Self::InvalidDateRange {
            start: err.start,
            end: err.end,
        }
    }
}

impl From<crate::booking::ValidationError> for Error {
    fn from(err: crate::booking::ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}
