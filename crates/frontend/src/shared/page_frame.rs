//! PageFrame: standard root wrapper for every routed page.
//!
//! Sets `id` (`"{entity}--{category}"`) and `data-page-category` on the root
//! element and picks the BEM modifier from the category.

use super::page_standard::*;
use leptos::prelude::*;

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`, e.g. `"a001_order--list"`.
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(page_id), "bad page id: {page_id}");

    view! {
        <div
            id=page_id
            class=page_class(category)
            data-page-category=category
        >
            {children()}
        </div>
    }
}

/// Root classes for a page category.
fn page_class(category: &str) -> &'static str {
    match category {
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        _ => "page",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_class_by_category() {
        assert_eq!(page_class(PAGE_CAT_DASHBOARD), "page page--dashboard");
        assert_eq!(page_class(PAGE_CAT_LIST), "page");
    }
}
