//! The set of selected items.

use std::collections::BTreeSet;

use super::filter::FilteredView;
use super::item::ItemId;

/// Selected item ids.
///
/// Membership is independent of the current filter: narrowing the query
/// never deselects anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: BTreeSet<ItemId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.ids.contains(&id)
    }

    /// Ids in ascending order
    pub fn iter(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.ids.iter().copied()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Flip membership of one item. Returns whether it is now selected.
    pub fn toggle(&mut self, id: ItemId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    /// True iff the selection is exactly the set of ids in `view`.
    pub fn equals_view(&self, view: &FilteredView) -> bool {
        self.ids.len() == view.len() && view.ids().all(|id| self.ids.contains(&id))
    }

    /// Clear when everything in `view` (and nothing else) is selected,
    /// otherwise replace the selection with the view.
    pub fn toggle_all(&mut self, view: &FilteredView) {
        if self.equals_view(view) {
            self.ids.clear();
        } else {
            self.ids = view.ids().collect();
        }
    }

    /// Trigger label: the selected count, or `placeholder` when empty.
    pub fn label(&self, placeholder: &str) -> String {
        if self.ids.is_empty() {
            placeholder.to_string()
        } else {
            format!("{} selected", self.ids.len())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::item::Dataset;

    #[test]
    fn test_toggle_flips_membership() {
        let mut selection = Selection::new();
        assert!(selection.toggle(ItemId(3)));
        assert!(selection.contains(ItemId(3)));
        assert!(!selection.toggle(ItemId(3)));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_equals_view_is_exact() {
        let dataset = Dataset::generate(20);
        let view = FilteredView::new(&dataset, "1");
        let mut selection = Selection::new();
        for id in view.ids() {
            selection.toggle(id);
        }
        assert!(selection.equals_view(&view));

        // One extra id outside the view breaks equality
        selection.toggle(ItemId(2));
        assert!(!selection.equals_view(&view));
    }

    #[test]
    fn test_empty_selection_equals_empty_view() {
        let dataset = Dataset::generate(20);
        let view = FilteredView::new(&dataset, "nothing");
        let mut selection = Selection::new();
        assert!(selection.equals_view(&view));
        selection.toggle_all(&view);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_toggle_all_pairs_restore_empty_or_full() {
        let dataset = Dataset::generate(100);
        let view = FilteredView::new(&dataset, "");

        let mut selection = Selection::new();
        selection.toggle_all(&view);
        assert_eq!(selection.len(), 100);
        selection.toggle_all(&view);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_toggle_all_replaces_partial_selection() {
        let dataset = Dataset::generate(100);
        let view = FilteredView::new(&dataset, "9");
        let mut selection = Selection::new();
        selection.toggle(ItemId(1));
        selection.toggle(ItemId(9));

        selection.toggle_all(&view);
        assert!(selection.equals_view(&view));
        assert!(!selection.contains(ItemId(1)));

        selection.toggle_all(&view);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_label() {
        let mut selection = Selection::new();
        assert_eq!(selection.label("Select items"), "Select items");
        selection.toggle(ItemId(0));
        selection.toggle(ItemId(5));
        assert_eq!(selection.label("Select items"), "2 selected");
    }

    #[test]
    fn test_iter_ascending() {
        let mut selection = Selection::new();
        for id in [9, 2, 5] {
            selection.toggle(ItemId(id));
        }
        let ids: Vec<u32> = selection.iter().map(|id| id.0).collect();
        assert_eq!(ids, vec![2, 5, 9]);
    }
}
