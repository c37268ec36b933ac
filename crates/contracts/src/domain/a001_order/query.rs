use serde::{Deserialize, Serialize};

use super::aggregate::{OrderRecord, OrderSortKey, OrderStatus};
use crate::shared::list::{filter_list, sort_list, Searchable, SortOrder};

/// Status restriction of the order list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    Only(OrderStatus),
}

impl StatusFilter {
    pub fn accepts(&self, status: OrderStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }

    /// Value used by the `<select>` in the action bar.
    pub fn code(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(status) => status.code(),
        }
    }

    /// Unknown codes fall back to `All`.
    pub fn from_code(code: &str) -> Self {
        OrderStatus::from_code(code)
            .map(StatusFilter::Only)
            .unwrap_or(StatusFilter::All)
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All statuses",
            StatusFilter::Only(status) => status.display_name(),
        }
    }

    pub fn options() -> Vec<StatusFilter> {
        std::iter::once(StatusFilter::All)
            .chain(OrderStatus::all().into_iter().map(StatusFilter::Only))
            .collect()
    }
}

/// Search, status and sort criteria of the order list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OrdersQuery {
    pub search_term: String,
    pub status_filter: StatusFilter,
    pub sort_by: OrderSortKey,
    pub sort_order: SortOrder,
}

impl OrdersQuery {
    /// Search (on `user`, `project`, `id`) AND status.
    pub fn matches(&self, order: &OrderRecord) -> bool {
        (self.search_term.is_empty() || order.matches_filter(&self.search_term))
            && self.status_filter.accepts(order.status)
    }

    /// Filters, then sorts. The result is always a subset of `orders`.
    pub fn apply(&self, orders: &[OrderRecord]) -> Vec<OrderRecord> {
        let mut filtered: Vec<OrderRecord> = filter_list(orders, &self.search_term)
            .into_iter()
            .filter(|order| self.status_filter.accepts(order.status))
            .cloned()
            .collect();
        sort_list(&mut filtered, self.sort_by, self.sort_order);
        filtered
    }

    /// Header click: the active column flips direction, another column starts ascending.
    pub fn toggle_sort(&mut self, key: OrderSortKey) {
        if self.sort_by == key {
            self.sort_order = self.sort_order.reversed();
        } else {
            self.sort_by = key;
            self.sort_order = SortOrder::Asc;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_order::mock;

    fn ids(orders: &[OrderRecord]) -> Vec<&str> {
        orders.iter().map(|o| o.id.as_str()).collect()
    }

    fn query(search: &str) -> OrdersQuery {
        OrdersQuery {
            search_term: search.to_string(),
            ..OrdersQuery::default()
        }
    }

    #[test]
    fn test_empty_search_returns_everything() {
        let orders = mock::orders().unwrap();
        assert_eq!(query("").apply(&orders).len(), orders.len());
    }

    #[test]
    fn test_search_matches_user_project_or_id_ignoring_case() {
        let orders = mock::orders().unwrap();
        for term in ["kate", "LANDING", "cm98", "9805", "crm", "x"] {
            let found = query(term).apply(&orders);
            let needle = term.to_lowercase();
            for order in &found {
                assert!(
                    order.user.to_lowercase().contains(&needle)
                        || order.project.to_lowercase().contains(&needle)
                        || order.id.to_lowercase().contains(&needle),
                    "{} should not match {}",
                    order.id,
                    term
                );
            }
            let expected = orders.iter().filter(|o| query(term).matches(o)).count();
            assert_eq!(found.len(), expected);
        }
    }

    #[test]
    fn test_search_kate() {
        let orders = mock::orders().unwrap();
        let found = query("Kate").apply(&orders);
        let mut found_ids = ids(&found);
        found_ids.sort();
        assert_eq!(found_ids, vec!["CM9802", "CM9807"]);
        assert!(found.iter().all(|o| o.user == "Kate Morrison"));
    }

    #[test]
    fn test_address_is_not_searched() {
        let orders = mock::orders().unwrap();
        assert!(query("Oakland").apply(&orders).is_empty());
    }

    #[test]
    fn test_status_filter_rejected() {
        let orders = mock::orders().unwrap();
        let q = OrdersQuery {
            status_filter: StatusFilter::Only(OrderStatus::Rejected),
            sort_by: OrderSortKey::Id,
            sort_order: SortOrder::Asc,
            ..OrdersQuery::default()
        };
        assert_eq!(ids(&q.apply(&orders)), vec!["CM9805", "CM9810"]);
    }

    #[test]
    fn test_search_and_status_combine() {
        let orders = mock::orders().unwrap();
        let q = OrdersQuery {
            search_term: "landing".to_string(),
            status_filter: StatusFilter::Only(OrderStatus::InProgress),
            sort_by: OrderSortKey::Id,
            sort_order: SortOrder::Asc,
        };
        assert_eq!(ids(&q.apply(&orders)), vec!["CM9801", "CM9806"]);
    }

    #[test]
    fn test_default_sort_is_date_descending() {
        let orders = mock::orders().unwrap();
        let sorted = OrdersQuery::default().apply(&orders);
        // Relative dates do not parse: they keep their original order ahead of
        // the calendar-dated records.
        assert_eq!(
            ids(&sorted),
            vec![
                "CM9801", "CM9802", "CM9803", "CM9804", "CM9806", "CM9807", "CM9808", "CM9809",
                "CM9805", "CM9810"
            ]
        );
    }

    #[test]
    fn test_sort_by_user_is_case_insensitive_and_stable() {
        let mut orders = mock::orders().unwrap();
        orders[0].user = "andi lane".to_string();
        let q = OrdersQuery {
            sort_by: OrderSortKey::User,
            sort_order: SortOrder::Asc,
            ..OrdersQuery::default()
        };
        let sorted = q.apply(&orders);
        assert_eq!(&ids(&sorted)[..3], &["CM9801", "CM9805", "CM9810"]);
    }

    #[test]
    fn test_sort_by_status_uses_codes() {
        let orders = mock::orders().unwrap();
        let q = OrdersQuery {
            sort_by: OrderSortKey::Status,
            sort_order: SortOrder::Desc,
            ..OrdersQuery::default()
        };
        let statuses: Vec<_> = q.apply(&orders).iter().map(|o| o.status).collect();
        assert_eq!(statuses[0], OrderStatus::Rejected);
        assert_eq!(statuses[9], OrderStatus::Approved);
    }

    #[test]
    fn test_toggle_sort() {
        let mut q = OrdersQuery::default();
        q.toggle_sort(OrderSortKey::Date);
        assert_eq!(q.sort_order, SortOrder::Asc);
        q.toggle_sort(OrderSortKey::User);
        assert_eq!((q.sort_by, q.sort_order), (OrderSortKey::User, SortOrder::Asc));
        q.toggle_sort(OrderSortKey::User);
        assert_eq!(q.sort_order, SortOrder::Desc);
    }

    #[test]
    fn test_status_filter_codes() {
        assert_eq!(StatusFilter::from_code("all"), StatusFilter::All);
        assert_eq!(
            StatusFilter::from_code("approved"),
            StatusFilter::Only(OrderStatus::Approved)
        );
        assert_eq!(StatusFilter::from_code("bogus"), StatusFilter::All);
        assert_eq!(StatusFilter::options().len(), 6);
    }
}
