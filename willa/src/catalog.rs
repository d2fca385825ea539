//! The catalog collaborator seam.
//!
//! Inventory catalog management (CRUD, images, pricing) is an external
//! concern; the admission and reporting core only needs three questions
//! answered: does an item exist, how many items of a kind are there, and
//! what should an item be called in a report. The [`Catalog`] trait is
//! that boundary, and [`InMemoryCatalog`] is the standard in-process
//! implementation (loadable as a snapshot from the storage layer).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{ItemKind, ItemRef};

/// Read-only view of the inventory catalog.
pub trait Catalog {
    /// Whether the referenced item exists.
    fn exists(&self, item: ItemRef) -> bool;

    /// Number of catalog items of the given kind.
    fn count(&self, kind: ItemKind) -> u64;

    /// A human-readable name for the item, if one can be resolved.
    fn display_name(&self, item: ItemRef) -> Option<String>;
}

/// One inventory item with its name-like attributes.
///
/// Each kind historically names itself through a different attribute
/// (rooms have room numbers, resorts have titles, and so on); all four are
/// carried as optional fields and [`CatalogEntry::display_name`] resolves
/// through a fixed preference order.
///
/// # Examples
///
/// ```
/// use willa::{CatalogEntry, ItemId, ItemKind, ItemRef};
///
/// let item = ItemRef::new(ItemKind::Room, ItemId::try_from(1u32).unwrap());
/// let entry = CatalogEntry::named(item, "101");
/// assert_eq!(entry.display_name(), Some("101".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// The item this entry describes.
    pub item: ItemRef,
    /// Title (resort packages, occasions).
    pub title: Option<String>,
    /// Name (restaurant tables).
    pub name: Option<String>,
    /// Cabin class name (plane classes).
    pub class_name: Option<String>,
    /// Room number (hotel rooms).
    pub room_number: Option<String>,
}

impl CatalogEntry {
    /// Creates an entry with no name-like attributes set.
    #[must_use]
    pub const fn new(item: ItemRef) -> Self {
        Self {
            item,
            title: None,
            name: None,
            class_name: None,
            room_number: None,
        }
    }

    /// Creates an entry whose name lands in the attribute natural to the
    /// item's kind: rooms use `room_number`, tables `name`, resorts
    /// `title`, and plane classes `class_name`.
    #[must_use]
    pub fn named(item: ItemRef, display: impl Into<String>) -> Self {
        let display = display.into();
        let mut entry = Self::new(item);
        match item.kind {
            ItemKind::Room => entry.room_number = Some(display),
            ItemKind::Table => entry.name = Some(display),
            ItemKind::Resort => entry.title = Some(display),
            ItemKind::Plane => entry.class_name = Some(display),
        }
        entry
    }

    /// Resolves the display name through the fixed preference order:
    /// title, then name, then class name, then room number.
    #[must_use]
    pub fn display_name(&self) -> Option<String> {
        self.title
            .clone()
            .or_else(|| self.name.clone())
            .or_else(|| self.class_name.clone())
            .or_else(|| self.room_number.clone())
    }
}

/// A map-backed catalog snapshot.
///
/// # Examples
///
/// ```
/// use willa::{Catalog, CatalogEntry, InMemoryCatalog, ItemId, ItemKind, ItemRef};
///
/// let room = ItemRef::new(ItemKind::Room, ItemId::try_from(1u32).unwrap());
/// let mut catalog = InMemoryCatalog::new();
/// catalog.insert(CatalogEntry::named(room, "101"));
///
/// assert!(catalog.exists(room));
/// assert_eq!(catalog.count(ItemKind::Room), 1);
/// assert_eq!(catalog.count(ItemKind::Table), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    entries: HashMap<ItemRef, CatalogEntry>,
}

impl InMemoryCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces an entry.
    pub fn insert(&mut self, entry: CatalogEntry) {
        self.entries.insert(entry.item, entry);
    }

    /// Returns the number of entries across all kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over all entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.values()
    }
}

impl Catalog for InMemoryCatalog {
    fn exists(&self, item: ItemRef) -> bool {
        self.entries.contains_key(&item)
    }

    fn count(&self, kind: ItemKind) -> u64 {
        self.entries.keys().filter(|i| i.kind == kind).count() as u64
    }

    fn display_name(&self, item: ItemRef) -> Option<String> {
        self.entries.get(&item).and_then(CatalogEntry::display_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ItemId;

    fn item(kind: ItemKind, id: u32) -> ItemRef {
        ItemRef::new(kind, ItemId::try_from(id).unwrap())
    }

    #[test]
    fn test_display_name_preference_order() {
        let mut entry = CatalogEntry::new(item(ItemKind::Room, 1));
        entry.room_number = Some("101".into());
        entry.class_name = Some("First".into());
        assert_eq!(entry.display_name(), Some("First".into()));

        entry.name = Some("Corner table".into());
        assert_eq!(entry.display_name(), Some("Corner table".into()));

        entry.title = Some("Lakeside Escape".into());
        assert_eq!(entry.display_name(), Some("Lakeside Escape".into()));
    }

    #[test]
    fn test_display_name_absent_when_unnamed() {
        let entry = CatalogEntry::new(item(ItemKind::Plane, 1));
        assert_eq!(entry.display_name(), None);
    }

    #[test]
    fn test_named_routes_by_kind() {
        assert_eq!(
            CatalogEntry::named(item(ItemKind::Room, 1), "101").room_number,
            Some("101".into())
        );
        assert_eq!(
            CatalogEntry::named(item(ItemKind::Table, 1), "Bay").name,
            Some("Bay".into())
        );
        assert_eq!(
            CatalogEntry::named(item(ItemKind::Resort, 1), "Spa").title,
            Some("Spa".into())
        );
        assert_eq!(
            CatalogEntry::named(item(ItemKind::Plane, 1), "Business").class_name,
            Some("Business".into())
        );
    }

    #[test]
    fn test_in_memory_catalog_counts_per_kind() {
        let mut catalog = InMemoryCatalog::new();
        catalog.insert(CatalogEntry::named(item(ItemKind::Room, 1), "101"));
        catalog.insert(CatalogEntry::named(item(ItemKind::Room, 2), "102"));
        catalog.insert(CatalogEntry::named(item(ItemKind::Resort, 1), "Spa"));

        assert_eq!(catalog.count(ItemKind::Room), 2);
        assert_eq!(catalog.count(ItemKind::Resort), 1);
        assert_eq!(catalog.count(ItemKind::Plane), 0);
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_in_memory_catalog_insert_replaces() {
        let mut catalog = InMemoryCatalog::new();
        let room = item(ItemKind::Room, 1);
        catalog.insert(CatalogEntry::named(room, "101"));
        catalog.insert(CatalogEntry::named(room, "101 deluxe"));

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.display_name(room), Some("101 deluxe".into()));
    }

    #[test]
    fn test_same_id_different_kind_are_distinct() {
        let mut catalog = InMemoryCatalog::new();
        catalog.insert(CatalogEntry::named(item(ItemKind::Room, 3), "103"));

        assert!(catalog.exists(item(ItemKind::Room, 3)));
        assert!(!catalog.exists(item(ItemKind::Table, 3)));
    }
}
