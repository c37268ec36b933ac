use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Centered dialog over a dimmed backdrop.
///
/// Closes through `on_close` on the close button, a click on the backdrop
/// or Escape. Clicks inside the dialog do not reach the backdrop.
#[component]
pub fn Modal(
    /// Title of the modal
    #[prop(into)]
    title: String,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Modal content
    children: Children,
) -> impl IntoView {
    // The overlay takes focus so Escape reaches its keydown handler.
    let overlay_ref = NodeRef::<leptos::html::Div>::new();
    Effect::new(move |_| {
        if let Some(overlay) = overlay_ref.get() {
            let _ = overlay.focus();
        }
    });

    let handle_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            on_close.run(());
        }
    };

    let handle_overlay_click = move |_| {
        on_close.run(());
    };

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    let handle_close = move |_| {
        on_close.run(());
    };

    view! {
        <div
            class="modal-overlay"
            tabindex="-1"
            node_ref=overlay_ref
            on:click=handle_overlay_click
            on:keydown=handle_keydown
        >
            <div class="modal" role="dialog" aria-modal="true" on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <div class="modal-header-actions">
                        <button class="button button--icon modal__close" title="Close" on:click=handle_close>
                            {icon("x")}
                        </button>
                    </div>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}
