use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::theme::ThemeProvider;
use contracts::shared::config::DashboardConfig;
use leptos::prelude::*;

#[component]
pub fn App(config: DashboardConfig) -> impl IntoView {
    let dark_mode = config.theme.dark_mode;

    // Read-only settings for every view (brand, load delay).
    provide_context(config);
    provide_context(AppGlobalContext::new());

    view! {
        <ThemeProvider dark_mode=dark_mode>
            <AppRoutes />
        </ThemeProvider>
    }
}
