use leptos::prelude::*;

#[component]
pub fn Right(children: Children) -> impl IntoView {
    view! {
        <aside data-zone="right" class="app-panel">
            {children()}
        </aside>
    }
}
