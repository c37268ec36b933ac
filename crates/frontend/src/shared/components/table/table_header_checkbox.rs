//! "Select all" checkbox in the table header.
//!
//! ```ignore
//! <TableHeaderCheckbox
//!     state=Signal::derive(move || selection.with(|s| s.checkbox_state(filtered_len.get())))
//!     on_toggle=Callback::new(move |_| select_all())
//! />
//! ```

use contracts::shared::list::CheckboxState;
use leptos::prelude::*;
use thaw::*;

/// Header checkbox with three states: unchecked, checked, indeterminate.
///
/// The state is computed by the caller; a click only reports the toggle.
#[component]
pub fn TableHeaderCheckbox(
    #[prop(into)]
    state: Signal<CheckboxState>,

    /// Called on every click, whatever the current state
    on_toggle: Callback<()>,
) -> impl IntoView {
    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // `indeterminate` is a DOM property only, there is no attribute for it.
    Effect::new(move |_| {
        let is_indeterminate = matches!(state.get(), CheckboxState::Indeterminate);
        if let Some(input) = checkbox_ref.get() {
            input.set_indeterminate(is_indeterminate);
        }
    });

    view! {
        <TableHeaderCell resizable=false class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                title="Select all"
                prop:checked=move || matches!(state.get(), CheckboxState::Checked)
                on:change=move |_| on_toggle.run(())
            />
        </TableHeaderCell>
    }
}
