use crate::dashboards::d001_ecommerce::ui::EcommerceDashboard;
use crate::domain::a001_order::ui::list::OrdersList;
use crate::layout::Shell;
use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page page--custom">
            <div class="page__header">
                <h1 class="page__title">"Page not found"</h1>
            </div>
            <div class="page__content">
                <a href="/" class="table__link">"Back to the dashboard"</a>
            </div>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=EcommerceDashboard />
                    <Route path=path!("/orders") view=OrdersList />
                </Routes>
            </Shell>
        </Router>
    }
}
