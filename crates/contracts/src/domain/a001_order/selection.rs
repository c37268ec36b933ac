use std::collections::HashSet;

use super::aggregate::OrderRecord;
use crate::shared::list::CheckboxState;

/// Ids of the orders ticked in the list.
///
/// The set is not pruned when the filter changes: ids hidden by a new filter
/// stay selected, and the "select all" predicates compare raw set sizes with
/// the size of the filtered list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: HashSet<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Adds the id when absent, removes it when present.
    pub fn toggle(&mut self, id: &str) {
        if !self.ids.remove(id) {
            self.ids.insert(id.to_string());
        }
    }

    /// Clears the selection when it is as large as `filtered`, otherwise
    /// replaces it with every id in `filtered`.
    pub fn select_all(&mut self, filtered: &[OrderRecord]) {
        if self.ids.len() == filtered.len() {
            self.ids.clear();
        } else {
            self.ids = filtered.iter().map(|order| order.id.clone()).collect();
        }
    }

    pub fn is_all_selected(&self, filtered_len: usize) -> bool {
        filtered_len > 0 && self.ids.len() == filtered_len
    }

    pub fn is_indeterminate(&self, filtered_len: usize) -> bool {
        !self.ids.is_empty() && self.ids.len() < filtered_len
    }

    pub fn checkbox_state(&self, filtered_len: usize) -> CheckboxState {
        if self.is_all_selected(filtered_len) {
            CheckboxState::Checked
        } else if self.is_indeterminate(filtered_len) {
            CheckboxState::Indeterminate
        } else {
            CheckboxState::Unchecked
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_order::aggregate::OrderStatus;
    use crate::domain::a001_order::mock;
    use crate::domain::a001_order::query::{OrdersQuery, StatusFilter};

    #[test]
    fn test_toggle_adds_and_removes() {
        let mut selection = SelectionSet::new();
        selection.toggle("CM9801");
        assert!(selection.contains("CM9801"));
        selection.toggle("CM9801");
        assert!(selection.is_empty());
    }

    #[test]
    fn test_select_all_twice_clears() {
        let orders = mock::orders().unwrap();
        let filtered = OrdersQuery::default().apply(&orders);
        let mut selection = SelectionSet::new();

        selection.select_all(&filtered);
        assert_eq!(selection.len(), filtered.len());
        assert!(filtered.iter().all(|o| selection.contains(&o.id)));

        selection.select_all(&filtered);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_select_all_then_deselect_one() {
        let orders = mock::orders().unwrap();
        let filtered = OrdersQuery::default().apply(&orders);
        let mut selection = SelectionSet::new();

        selection.select_all(&filtered);
        assert!(selection.is_all_selected(filtered.len()));
        assert_eq!(selection.checkbox_state(filtered.len()), CheckboxState::Checked);

        selection.toggle("CM9804");
        assert_eq!(selection.len(), 9);
        assert!(!selection.is_all_selected(filtered.len()));
        assert!(selection.is_indeterminate(filtered.len()));
        assert_eq!(
            selection.checkbox_state(filtered.len()),
            CheckboxState::Indeterminate
        );
    }

    #[test]
    fn test_indeterminate_iff_partial() {
        let mut selection = SelectionSet::new();
        for filtered_len in 0..4 {
            assert!(!selection.is_indeterminate(filtered_len));
        }
        selection.toggle("a");
        assert!(!selection.is_indeterminate(0));
        assert!(!selection.is_indeterminate(1));
        assert!(selection.is_indeterminate(2));
        selection.toggle("b");
        assert!(!selection.is_indeterminate(2));
        assert!(selection.is_indeterminate(3));
    }

    #[test]
    fn test_empty_list_is_never_all_selected() {
        let selection = SelectionSet::new();
        assert!(!selection.is_all_selected(0));
        assert_eq!(selection.checkbox_state(0), CheckboxState::Unchecked);
    }

    #[test]
    fn test_selection_survives_filter_change() {
        let orders = mock::orders().unwrap();
        let mut selection = SelectionSet::new();
        selection.toggle("CM9801");

        let rejected = OrdersQuery {
            status_filter: StatusFilter::Only(OrderStatus::Rejected),
            ..OrdersQuery::default()
        }
        .apply(&orders);
        assert_eq!(rejected.len(), 2);

        // CM9801 is hidden but still selected; sizes are compared raw.
        assert!(selection.contains("CM9801"));
        assert!(selection.is_indeterminate(rejected.len()));

        // One more hidden-id selection makes the sizes equal.
        selection.toggle("CM9802");
        assert!(selection.is_all_selected(rejected.len()));
        selection.select_all(&rejected);
        assert!(selection.is_empty());
    }
}
