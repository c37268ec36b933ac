//! TopHeader component - application top navigation bar.
//!
//! Contains the sidebar toggle, the breadcrumb of the current route, a search
//! box, the theme toggle and the notification and user buttons.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::theme::ThemeToggle;
use leptos::prelude::*;

#[component]
pub fn TopHeader(
    /// Breadcrumb, e.g. "Dashboards / Default"
    #[prop(into)]
    page_title: Signal<&'static str>,
) -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let is_sidebar_visible = move || ctx.left_open.get();

    // The search box is decorative; typing does not filter anything.
    let search = RwSignal::new(String::new());

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <button class="top-header__icon-btn" title="Favorites">
                    {icon("star")}
                </button>
                <span class="top-header__title">{move || page_title.get()}</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__search">
                    {icon("search")}
                    <input
                        type="text"
                        placeholder="Search"
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                    <span class="top-header__kbd">"⌘/"</span>
                </div>

                <ThemeToggle />

                <button class="top-header__icon-btn" title="History">
                    {icon("refresh")}
                </button>

                <button class="top-header__icon-btn" title="Notifications">
                    {icon("bell")}
                </button>

                <div class="top-header__user">
                    {icon("user")}
                </div>
            </div>
        </div>
    }
}
