//! Query filtering over the dataset.

use std::ops::Range;

use super::item::{Dataset, Item, ItemId};

/// The items whose label contains the query, in dataset order.
///
/// Holds positions into the shared dataset rather than item copies.
#[derive(Debug, Clone)]
pub struct FilteredView {
    dataset: Dataset,
    query: String,
    indices: Vec<usize>,
}

impl FilteredView {
    /// Filter `dataset` by a case-insensitive substring `query`.
    ///
    /// An empty query matches every item.
    pub fn new(dataset: &Dataset, query: &str) -> Self {
        let indices: Vec<usize> = if query.is_empty() {
            (0..dataset.len()).collect()
        } else {
            let needle = query.to_lowercase();
            dataset
                .iter()
                .enumerate()
                .filter(|(_, item)| item.matches(&needle))
                .map(|(i, _)| i)
                .collect()
        };
        log::debug!(
            "Filtered {} items by {:?}: {} match",
            dataset.len(),
            query,
            indices.len()
        );
        Self {
            dataset: dataset.clone(),
            query: query.to_string(),
            indices,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Item at a position in the view.
    pub fn get(&self, position: usize) -> Option<&Item> {
        self.indices
            .get(position)
            .and_then(|&i| self.dataset.get(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.indices.iter().filter_map(|&i| self.dataset.get(i))
    }

    pub fn ids(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.iter().map(|item| item.id)
    }

    pub fn contains_id(&self, id: ItemId) -> bool {
        // Dataset ids ascend with position, so the view's ids ascend too
        self.indices
            .binary_search_by_key(&id, |&i| self.dataset.items()[i].id)
            .is_ok()
    }

    /// Items at view positions in `range`, paired with their position.
    pub fn items_in(&self, range: Range<usize>) -> impl Iterator<Item = (usize, &Item)> {
        let end = range.end.min(self.len());
        let start = range.start.min(end);
        (start..end).filter_map(move |pos| self.get(pos).map(|item| (pos, item)))
    }
}
