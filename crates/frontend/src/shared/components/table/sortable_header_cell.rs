//! Sortable header cell.
//!
//! ```ignore
//! <SortableHeaderCell
//!     label="Date"
//!     sort_key=OrderSortKey::Date
//!     current_key=Signal::derive(move || query.with(|q| q.sort_by))
//!     sort_order=Signal::derive(move || query.with(|q| q.sort_order))
//!     on_sort=Callback::new(move |key| toggle_sort(key))
//! />
//! ```

use contracts::shared::list::{get_sort_class, get_sort_indicator, SortOrder};
use leptos::prelude::*;
use thaw::*;

/// Header cell that shows the sort indicator (▲▼) and reports clicks.
#[component]
pub fn SortableHeaderCell<K>(
    #[prop(into)]
    label: String,

    /// Column this cell sorts by
    sort_key: K,

    /// Column the list is currently sorted by
    #[prop(into)]
    current_key: Signal<K>,

    #[prop(into)]
    sort_order: Signal<SortOrder>,

    on_sort: Callback<K>,

    #[prop(optional, default = 100.0)]
    min_width: f64,
) -> impl IntoView
where
    K: Copy + PartialEq + Send + Sync + 'static,
{
    let is_current = move || current_key.get() == sort_key;

    view! {
        <TableHeaderCell resizable=false min_width=min_width>
            <div
                class="table__sortable-header"
                style="cursor: pointer;"
                on:click=move |_| on_sort.run(sort_key)
            >
                {label}
                <span class=move || get_sort_class(is_current())>
                    {move || get_sort_indicator(is_current(), sort_order.get())}
                </span>
            </div>
        </TableHeaderCell>
    }
}
