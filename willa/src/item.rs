//! Inventory item references.
//!
//! Bookable inventory is identified by a `(kind, id)` pair. The catalog
//! itself (rooms, tables, resort packages, plane classes) is owned by an
//! external collaborator; this module only provides the reference types
//! the ledger and reporter work with.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The closed set of bookable inventory kinds.
///
/// Kinds are stored as fixed lowercase strings and id namespaces are
/// per-kind: room #3 and table #3 are distinct items.
///
/// # Examples
///
/// ```
/// use willa::ItemKind;
///
/// assert_eq!(ItemKind::Room.as_str(), "room");
/// assert_eq!("plane".parse::<ItemKind>().unwrap(), ItemKind::Plane);
/// assert!("cabana".parse::<ItemKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// A hotel room.
    Room,
    /// A restaurant table.
    Table,
    /// A resort package.
    Resort,
    /// A flight cabin class.
    Plane,
}

impl ItemKind {
    /// All inventory kinds, in storage order.
    pub const ALL: [Self; 4] = [Self::Room, Self::Table, Self::Resort, Self::Plane];

    /// Returns the fixed storage string for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Room => "room",
            Self::Table => "table",
            Self::Resort => "resort",
            Self::Plane => "plane",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemKind {
    type Err = InvalidItemKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "room" => Ok(Self::Room),
            "table" => Ok(Self::Table),
            "resort" => Ok(Self::Resort),
            "plane" => Ok(Self::Plane),
            other => Err(InvalidItemKindError {
                value: other.to_string(),
            }),
        }
    }
}

/// Error type for unrecognized inventory kind strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidItemKindError {
    /// The unrecognized value.
    pub value: String,
}

impl fmt::Display for InvalidItemKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown item kind '{}' (expected room, table, resort, or plane)",
            self.value
        )
    }
}

impl std::error::Error for InvalidItemKindError {}

/// A valid inventory item id (a positive integer).
///
/// # Examples
///
/// ```
/// use willa::ItemId;
///
/// let id = ItemId::try_from(101u32).unwrap();
/// assert_eq!(id.value(), 101);
///
/// assert!(ItemId::try_from(0u32).is_err());
/// assert!(ItemId::try_from(-5i64).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u32);

impl ItemId {
    /// Returns the underlying numeric id.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for ItemId {
    type Error = InvalidItemIdError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if value == 0 {
            Err(InvalidItemIdError {
                value: i64::from(value),
            })
        } else {
            Ok(Self(value))
        }
    }
}

impl TryFrom<i64> for ItemId {
    type Error = InvalidItemIdError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match u32::try_from(value) {
            Ok(v) if v > 0 => Ok(Self(v)),
            _ => Err(InvalidItemIdError { value }),
        }
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for invalid item ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidItemIdError {
    /// The invalid id value.
    pub value: i64,
}

impl fmt::Display for InvalidItemIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid item id {}: ids are positive integers", self.value)
    }
}

impl std::error::Error for InvalidItemIdError {}

/// A reference to one bookable inventory item.
///
/// # Examples
///
/// ```
/// use willa::{ItemId, ItemKind, ItemRef};
///
/// let item = ItemRef::new(ItemKind::Room, ItemId::try_from(7u32).unwrap());
/// assert_eq!(format!("{item}"), "room#7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemRef {
    /// The inventory kind.
    pub kind: ItemKind,
    /// The per-kind numeric id.
    pub id: ItemId,
}

impl ItemRef {
    /// Creates a reference from a kind and id.
    #[must_use]
    pub const fn new(kind: ItemKind, id: ItemId) -> Self {
        Self { kind, id }
    }
}

impl fmt::Display for ItemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.kind, self.id)
    }
}
