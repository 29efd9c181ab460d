//! Confirmation overlay for the two-phase delete flow.

use leptos::prelude::*;

/// Modal asking the user to confirm a pending delete. Backdrop clicks and
/// Cancel both abandon the delete; only the Delete button confirms it.
#[component]
pub fn DeleteModal(on_cancel: Callback<()>, on_confirm: Callback<()>) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Delete Blog"</h2>
                <p class="dialog__danger">
                    "This will permanently delete this blog post."
                </p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| on_confirm.run(())>
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}
