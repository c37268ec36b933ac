use contracts::domain::a001_order::{DetailOverlay, OrderRecord, OrdersQuery, SelectionSet};
use contracts::shared::list::CheckboxState;
use contracts::shared::loading::LoadPhase;
use leptos::prelude::*;

/// Everything the orders view owns. The filtered list is derived, never stored.
#[derive(Clone, Debug, Default)]
pub struct OrdersListState {
    pub orders: Vec<OrderRecord>,
    pub query: OrdersQuery,
    pub selection: SelectionSet,
    pub overlay: DetailOverlay,
    pub phase: LoadPhase,
    pub error: Option<String>,
}

impl OrdersListState {
    pub fn filtered(&self) -> Vec<OrderRecord> {
        self.query.apply(&self.orders)
    }

    /// Stores the loaded orders. Ignored when the load already finished.
    pub fn finish_loading(&mut self, orders: Vec<OrderRecord>) -> bool {
        if !self.phase.finish() {
            return false;
        }
        self.orders = orders;
        true
    }

    /// Ends loading with no orders and an error message for the banner.
    pub fn fail_loading(&mut self, message: String) {
        if self.phase.finish() {
            self.error = Some(message);
        }
    }

    pub fn select_all(&mut self) {
        let filtered = self.filtered();
        self.selection.select_all(&filtered);
    }

    pub fn header_checkbox(&self) -> CheckboxState {
        self.selection.checkbox_state(self.filtered().len())
    }
}

pub fn create_state() -> RwSignal<OrdersListState> {
    RwSignal::new(OrdersListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_order::{mock, OrderStatus, StatusFilter};

    fn loaded() -> OrdersListState {
        let mut state = OrdersListState::default();
        assert!(state.finish_loading(mock::orders().unwrap()));
        state
    }

    #[test]
    fn test_load_happens_once() {
        let mut state = loaded();
        assert!(!state.phase.is_loading());
        assert!(!state.finish_loading(Vec::new()));
        assert_eq!(state.orders.len(), 10);

        state.fail_loading("late".to_string());
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_header_checkbox_follows_filter() {
        let mut state = loaded();
        assert_eq!(state.header_checkbox(), CheckboxState::Unchecked);

        state.select_all();
        assert_eq!(state.header_checkbox(), CheckboxState::Checked);

        state.query.status_filter = StatusFilter::Only(OrderStatus::Rejected);
        assert_eq!(state.filtered().len(), 2);
        // Ten stale ids against two visible rows: neither all nor partial.
        assert_eq!(state.header_checkbox(), CheckboxState::Unchecked);

        state.select_all();
        assert_eq!(state.selection.len(), 2);
        assert_eq!(state.header_checkbox(), CheckboxState::Checked);
    }

    #[test]
    fn test_empty_while_loading() {
        let state = OrdersListState::default();
        assert!(state.phase.is_loading());
        assert!(state.filtered().is_empty());
        assert_eq!(state.header_checkbox(), CheckboxState::Unchecked);
    }
}
