//! Generic list helpers: search, sort and three-state "select all".

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Types that can be matched against a free-text search query.
pub trait Searchable {
    /// Returns `true` when the item matches the query.
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Types that can be ordered by one of several keys.
pub trait Sortable {
    type Key: Copy;

    fn compare_by_field(&self, other: &Self, key: Self::Key) -> Ordering;
}

/// Sort direction of a list column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn is_ascending(self) -> bool {
        matches!(self, SortOrder::Asc)
    }

    pub fn reversed(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// Stable sort by `key`; equal items keep their original order in both directions.
pub fn sort_list<T: Sortable>(items: &mut [T], key: T::Key, order: SortOrder) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, key);
        if order.is_ascending() {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Keeps the items matching `filter`; an empty query keeps everything.
pub fn filter_list<'a, T: Searchable + 'a>(
    items: impl IntoIterator<Item = &'a T>,
    filter: &str,
) -> Vec<&'a T> {
    items
        .into_iter()
        .filter(|item| filter.is_empty() || item.matches_filter(filter))
        .collect()
}

/// Case-insensitive substring test used by every `Searchable` impl.
pub fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Visual state of a "select all" header checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckboxState {
    Unchecked,
    Checked,
    Indeterminate,
}

/// Sort indicator shown next to a column header.
pub fn get_sort_indicator(is_current: bool, order: SortOrder) -> &'static str {
    if !is_current {
        return " ⇅";
    }
    match order {
        SortOrder::Asc => " ▲",
        SortOrder::Desc => " ▼",
    }
}

/// CSS class of the sort indicator.
pub fn get_sort_class(is_current: bool) -> &'static str {
    if is_current {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: &'static str,
        rank: u8,
    }

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            contains_ignore_case(self.name, &filter.to_lowercase())
        }
    }

    impl Sortable for Row {
        type Key = ();

        fn compare_by_field(&self, other: &Self, _key: ()) -> Ordering {
            self.rank.cmp(&other.rank)
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "alpha", rank: 2 },
            Row { name: "Beta", rank: 1 },
            Row { name: "gamma", rank: 2 },
            Row { name: "delta", rank: 1 },
        ]
    }

    #[test]
    fn test_sort_list_is_stable_in_both_directions() {
        let mut items = rows();
        sort_list(&mut items, (), SortOrder::Asc);
        let names: Vec<_> = items.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Beta", "delta", "alpha", "gamma"]);

        let mut items = rows();
        sort_list(&mut items, (), SortOrder::Desc);
        let names: Vec<_> = items.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["alpha", "gamma", "Beta", "delta"]);
    }

    #[test]
    fn test_filter_list() {
        let items = rows();
        assert_eq!(filter_list(&items, "").len(), 4);
        let found = filter_list(&items, "BET");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Beta");
        assert!(filter_list(&items, "zeta").is_empty());
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator(false, SortOrder::Asc), " ⇅");
        assert_eq!(get_sort_indicator(true, SortOrder::Asc), " ▲");
        assert_eq!(get_sort_indicator(true, SortOrder::Desc), " ▼");
        assert_eq!(SortOrder::Asc.reversed(), SortOrder::Desc);
    }
}
