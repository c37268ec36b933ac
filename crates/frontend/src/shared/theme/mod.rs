//! Theme store for the whole dashboard.
//!
//! One boolean, `is_dark_mode`, shared through context. The shell root reads
//! it for its `dark`/`light` class and the top bar toggle flips it. The value
//! starts from `[theme] dark_mode` in the config and is not persisted.

use crate::shared::icons::icon;
use contracts::shared::theme::ThemeState;
use leptos::prelude::*;
use web_sys::window;

/// Mirror the mode on `<body data-theme>` so page-level CSS (scrollbars,
/// overlay backdrop) follows the shell.
fn apply_body_theme(state: ThemeState) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.set_attribute("data-theme", state.as_class());
    }
}

/// Theme context type.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub state: RwSignal<ThemeState>,
}

impl ThemeContext {
    pub fn is_dark_mode(&self) -> bool {
        self.state.get().is_dark_mode
    }

    /// Flips the mode; every subscriber re-renders.
    pub fn toggle(&self) {
        self.state.update(|s| s.toggle());
        let state = self.state.get_untracked();
        log::debug!("theme switched to {}", state.as_class());
        apply_body_theme(state);
    }
}

/// Provides theme context to children components.
#[component]
pub fn ThemeProvider(
    /// Initial mode, from configuration
    #[prop(optional)]
    dark_mode: bool,
    children: Children,
) -> impl IntoView {
    let initial = ThemeState::new(dark_mode);
    apply_body_theme(initial);

    provide_context(ThemeContext {
        state: RwSignal::new(initial),
    });

    children()
}

/// Hook to use the theme context.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

/// Sun/moon button in the top bar.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();

    view! {
        <button
            class="top-header__icon-btn"
            title=move || ctx.state.get().toggle_title()
            on:click=move |_| ctx.toggle()
        >
            {move || if ctx.is_dark_mode() { icon("sun") } else { icon("moon") }}
        </button>
    }
}
