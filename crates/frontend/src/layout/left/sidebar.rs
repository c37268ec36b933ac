//! Sidebar with the brand and the static navigation sections.

use crate::shared::icons::icon;
use contracts::shared::config::DashboardConfig;
use contracts::shared::navigation::{AppRoute, SidebarItem};
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuItem {
    label: &'static str,
    icon: &'static str,
    /// `None` for entries without a view of their own
    target: Option<AppRoute>,
}

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    items: Vec<MenuItem>,
}

fn item(label: &'static str, icon: &'static str, target: Option<AppRoute>) -> MenuItem {
    MenuItem { label, icon, target }
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "dashboards",
            label: "Dashboards",
            items: vec![
                item("Default", "pie-chart", Some(AppRoute::Home)),
                item("eCommerce", "shopping-bag", Some(AppRoute::Orders)),
                item("Projects", "folder", None),
                item("Online Courses", "book-open", None),
            ],
        },
        MenuGroup {
            id: "pages",
            label: "Pages",
            items: vec![
                item("User Profile", "user", None),
                item("Account", "id-card", None),
                item("Corporate", "users", None),
                item("Blog", "file-text", None),
                item("Social", "message-square", None),
            ],
        },
    ]
}

#[component]
pub fn Sidebar(
    /// Entry highlighted for the current route
    #[prop(into)]
    active: Signal<SidebarItem>,
) -> impl IntoView {
    let brand = use_context::<DashboardConfig>()
        .map(|config| config.app.brand)
        .unwrap_or_else(|| "ByeWind".to_string());

    view! {
        <div class="app-sidebar__content">
            <div class="app-sidebar__brand">
                <span class="app-sidebar__logo">{brand.chars().next().unwrap_or('B').to_string()}</span>
                <span class="app-sidebar__brand-name">{brand}</span>
            </div>

            <div class="app-sidebar__tabs">
                <span class="app-sidebar__tab app-sidebar__tab--active">"Favorites"</span>
                <span class="app-sidebar__tab">"Recently"</span>
            </div>

            {get_menu_groups().into_iter().map(|group| {
                view! {
                    <div class="app-sidebar__group" data-group=group.id>
                        <div class="app-sidebar__group-label">{group.label}</div>
                        {group.items.into_iter().map(|entry| {
                            let is_active = move || {
                                entry.target.map(|r| r.sidebar_item()) == Some(active.get())
                            };
                            match entry.target {
                                Some(route) => view! {
                                    <a
                                        href=route.path()
                                        class="app-sidebar__item"
                                        class:app-sidebar__item--active=is_active
                                    >
                                        <div class="app-sidebar__item-content">
                                            {icon(entry.icon)}
                                            <span>{entry.label}</span>
                                        </div>
                                    </a>
                                }.into_any(),
                                None => view! {
                                    <div class="app-sidebar__item app-sidebar__item--inert">
                                        <div class="app-sidebar__item-content">
                                            {icon("chevron-right")}
                                            {icon(entry.icon)}
                                            <span>{entry.label}</span>
                                        </div>
                                    </div>
                                }.into_any(),
                            }
                        }).collect_view()}
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_dashboard_entries_are_linked() {
        let groups = get_menu_groups();
        let linked: Vec<_> = groups
            .iter()
            .flat_map(|g| g.items.iter())
            .filter_map(|i| i.target.map(|r| (i.label, r.path())))
            .collect();
        assert_eq!(linked, vec![("Default", "/"), ("eCommerce", "/orders")]);
    }

    #[test]
    fn test_sections() {
        let labels: Vec<_> = get_menu_groups().iter().map(|g| g.label).collect();
        assert_eq!(labels, vec!["Dashboards", "Pages"]);
    }
}
