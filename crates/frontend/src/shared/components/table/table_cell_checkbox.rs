//! Row checkbox.
//!
//! ```ignore
//! <TableCellCheckbox
//!     checked=Signal::derive(move || selection.with(|s| s.contains(&id)))
//!     on_toggle=Callback::new(move |_| toggle(&id))
//! />
//! ```

use leptos::prelude::*;
use thaw::*;

/// Checkbox cell of one row.
///
/// Stops click propagation so ticking a row does not activate the row itself.
#[component]
pub fn TableCellCheckbox(
    #[prop(into)]
    checked: Signal<bool>,

    on_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        <TableCell class="fixed-checkbox-column" on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || checked.get()
                on:change=move |_| on_toggle.run(())
            />
        </TableCell>
    }
}
