//! The authenticated principal making a request.
//!
//! Authentication and token issuance live outside this crate; the embedding
//! application constructs a [`Principal`] from whatever auth layer it uses
//! and passes it explicitly into every ledger and reporter call. There is
//! no ambient "current user" state.

use serde::{Deserialize, Serialize};

use crate::booking::ValidationError;

/// An authenticated caller identity.
///
/// # Examples
///
/// ```
/// use willa::Principal;
///
/// let guest = Principal::new("guest").unwrap();
/// assert!(!guest.is_privileged());
///
/// let admin = Principal::new("admin").unwrap().privileged();
/// assert!(admin.is_privileged());
///
/// assert!(Principal::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    id: String,
    privileged: bool,
}

impl Principal {
    /// Creates an unprivileged principal with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is empty after trimming.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into().trim().to_string();
        if id.is_empty() {
            return Err(ValidationError {
                field: "principal".into(),
                message: "principal id must be non-empty".into(),
            });
        }
        Ok(Self {
            id,
            privileged: false,
        })
    }

    /// Marks the principal as privileged (administrative).
    #[must_use]
    pub fn privileged(mut self) -> Self {
        self.privileged = true;
        self
    }

    /// Returns the principal's identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether this principal may see all bookings, not only its own.
    #[must_use]
    pub const fn is_privileged(&self) -> bool {
        self.privileged
    }
}

impl std::fmt::Display for Principal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.id)
    }
}
