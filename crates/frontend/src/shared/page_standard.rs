//! Page category constants.
//!
//! Every routed page declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a001_order--list"`)
//!   - `data-page-category` with one of the constants below
//!
//! The entity part matches the module directory (`domain/a001_order/`,
//! `dashboards/d001_ecommerce/`).

/// List of records: table with filters.
pub const PAGE_CAT_LIST: &str = "list";

/// Analytical dashboard / chart view.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}
