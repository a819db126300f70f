//! Items and the immutable dataset they live in.

use std::fmt;
use std::sync::Arc;

/// Stable identifier of an item, equal to its position in the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(pub u32);

impl ItemId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A selectable entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub label: String,
    /// Lowercased label, computed once for filtering
    search_key: String,
}

impl Item {
    pub fn new(id: u32, label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            id: ItemId(id),
            search_key: label.to_lowercase(),
            label,
        }
    }

    /// Case-insensitive substring match against an already lowercased needle.
    pub fn matches(&self, lowercase_needle: &str) -> bool {
        self.search_key.contains(lowercase_needle)
    }
}

/// The full item list, shared immutably between the app and derived views.
#[derive(Debug, Clone)]
pub struct Dataset {
    items: Arc<[Item]>,
}

impl Dataset {
    /// Generate `count` items labelled `"Item {i}"`.
    ///
    /// Ids are `u32`, so at most `u32::MAX + 1` items are generated.
    pub fn generate(count: usize) -> Self {
        let items: Vec<Item> = (0..count)
            .map_while(|i| u32::try_from(i).ok())
            .map(|id| Item::new(id, format!("Item {}", id)))
            .collect();
        log::debug!("Generated dataset of {} items", items.len());
        Self {
            items: items.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }
}
