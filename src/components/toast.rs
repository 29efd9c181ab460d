//! Transient status toast with a fixed three-second display.

use leptos::prelude::*;

use crate::state::ui::{ToastKind, UiState};

/// How long a toast stays visible.
#[cfg(feature = "hydrate")]
const TOAST_MILLIS: u64 = 3000;

/// Host that renders the current toast and schedules its dismissal.
///
/// Each toast bumps `toast_seq`; the sleep that dismisses it re-checks the
/// sequence so a newer toast is never cleared by an older timer.
#[component]
pub fn ToastHost() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let state = ui.get();
        if state.toast.is_none() {
            return;
        }
        let seq = state.toast_seq;
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(TOAST_MILLIS)).await;
            ui.update(|u| u.clear_toast(seq));
        });
    });

    view! {
        <Show when=move || ui.get().toast.is_some()>
            <div
                class="toast"
                class:toast--success=move || {
                    ui.get().toast.is_some_and(|t| t.kind == ToastKind::Success)
                }
                class:toast--error=move || {
                    ui.get().toast.is_some_and(|t| t.kind == ToastKind::Error)
                }
            >
                {move || ui.get().toast.map(|t| t.message).unwrap_or_default()}
            </div>
        </Show>
    }
}
