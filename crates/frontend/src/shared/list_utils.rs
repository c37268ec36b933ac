//! List helpers shared by table views.

use contracts::shared::text::split_matches;
use leptos::prelude::*;

/// Renders `text` with every case-insensitive occurrence of `filter` wrapped
/// in a highlight span. `filter` is used as typed, like the list search.
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    if filter.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let parts = split_matches(text, filter)
        .into_iter()
        .map(|segment| {
            if segment.is_match {
                view! { <mark class="table__highlight">{segment.text}</mark> }.into_any()
            } else {
                view! { <span>{segment.text}</span> }.into_any()
            }
        })
        .collect_view();

    view! { <>{parts}</> }.into_any()
}
