pub mod global_context;
pub mod left;
pub mod right;
pub mod top_header;

use crate::shared::theme::use_theme;
use contracts::shared::navigation::layout_for_path;
use leptos::prelude::*;
use leptos_router::hooks::use_location;
use right::NotificationPanel;
use top_header::TopHeader;

/// Application shell shared by every route.
///
/// ```text
/// +---------+------------------------------+---------------+
/// |         |          TopHeader           |               |
/// | Sidebar +------------------------------+ Notifications |
/// | (Left)  |        routed content        |   (home only) |
/// +---------+------------------------------+---------------+
/// ```
///
/// The root carries the `dark`/`light` class of the theme store; sidebar
/// highlight, breadcrumb and the notification panel follow the current path.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let theme = use_theme();
    let location = use_location();

    let route = Memo::new(move |_| layout_for_path(&location.pathname.get()));

    Effect::new(move |_| {
        let route = route.get();
        log::debug!("navigated to {}", route.path());
    });

    view! {
        <div class=move || format!("app-layout {}", theme.state.get().as_class())>
            <left::Left>
                <left::Sidebar active=Signal::derive(move || route.get().sidebar_item()) />
            </left::Left>

            <div class="app-main">
                <TopHeader page_title=Signal::derive(move || route.get().page_title()) />

                <div class="app-body">
                    <main class="app-content">
                        {children()}
                    </main>

                    <Show when=move || route.get().shows_notification_panel()>
                        <right::Right>
                            <NotificationPanel />
                        </right::Right>
                    </Show>
                </div>
            </div>
        </div>
    }
}

