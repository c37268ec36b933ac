//! Route table of the dashboard and what the layout shows for each route.

/// Top-level views reachable by URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Home,
    Orders,
}

/// Sidebar entries that can be highlighted as active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SidebarItem {
    Default,
    Ecommerce,
}

impl AppRoute {
    pub fn path(&self) -> &'static str {
        match self {
            AppRoute::Home => "/",
            AppRoute::Orders => "/orders",
        }
    }

    /// Resolves a location pathname; a trailing slash is ignored.
    ///
    /// `/orders/` resolves to `Orders`, unlike an exact
    /// `pathname == "/orders"` check, which would give it the home layout.
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Some(AppRoute::Home),
            "/orders" => Some(AppRoute::Orders),
            _ => None,
        }
    }

    /// Breadcrumb shown in the top bar.
    pub fn page_title(&self) -> &'static str {
        match self {
            AppRoute::Home => "Dashboards / Default",
            AppRoute::Orders => "Dashboards / eCommerce",
        }
    }

    pub fn sidebar_item(&self) -> SidebarItem {
        match self {
            AppRoute::Home => SidebarItem::Default,
            AppRoute::Orders => SidebarItem::Ecommerce,
        }
    }

    /// The notification panel is part of the home layout only.
    pub fn shows_notification_panel(&self) -> bool {
        matches!(self, AppRoute::Home)
    }

    pub fn all() -> [AppRoute; 2] {
        [AppRoute::Home, AppRoute::Orders]
    }
}

/// Layout decisions for an arbitrary pathname. Unknown paths use the home
/// layout, which is what the shell falls back to around the "not found" view.
pub fn layout_for_path(path: &str) -> AppRoute {
    AppRoute::from_path(path).unwrap_or(AppRoute::Home)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(AppRoute::from_path("/"), Some(AppRoute::Home));
        assert_eq!(AppRoute::from_path(""), Some(AppRoute::Home));
        assert_eq!(AppRoute::from_path("/orders"), Some(AppRoute::Orders));
        assert_eq!(AppRoute::from_path("/orders/"), Some(AppRoute::Orders));
        assert_eq!(AppRoute::from_path("/customers"), None);
    }

    #[test]
    fn test_trailing_slash_keeps_orders_layout() {
        let route = layout_for_path("/orders/");
        assert_eq!(route.page_title(), "Dashboards / eCommerce");
        assert!(!route.shows_notification_panel());
        assert_eq!(layout_for_path("//"), AppRoute::Home);
    }

    #[test]
    fn test_path_round_trips_for_every_route() {
        for route in AppRoute::all() {
            assert_eq!(AppRoute::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn test_orders_layout() {
        let route = layout_for_path("/orders");
        assert_eq!(route.page_title(), "Dashboards / eCommerce");
        assert_eq!(route.sidebar_item(), SidebarItem::Ecommerce);
        assert!(!route.shows_notification_panel());
    }

    #[test]
    fn test_home_layout() {
        let route = layout_for_path("/");
        assert_eq!(route.page_title(), "Dashboards / Default");
        assert_eq!(route.sidebar_item(), SidebarItem::Default);
        assert!(route.shows_notification_panel());

        assert_eq!(layout_for_path("/unknown"), AppRoute::Home);
    }
}
