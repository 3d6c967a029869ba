//! Auto-dismissing toast used for cart and product feedback.
//!
//! Pages own an `AlertState` signal and a `TimerSet`; `show_alert` sets the
//! toast and schedules its dismissal with reset semantics, so back-to-back
//! alerts replace each other instead of stacking close timers.

use leptos::prelude::*;

use crate::util::timer::TimerSet;

/// What the toast currently shows, if anything.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AlertState {
    pub text: String,
    pub is_error: bool,
    pub visible: bool,
}

/// Show a toast and schedule its auto-dismiss after `duration_ms`.
pub fn show_alert(
    state: RwSignal<AlertState>,
    timers: &TimerSet,
    text: String,
    is_error: bool,
    duration_ms: u32,
) {
    state.set(AlertState { text, is_error, visible: true });
    timers.schedule("alert", duration_ms, move || {
        state.update(|a| a.visible = false);
    });
}

/// Toast renderer with a manual close button.
#[component]
pub fn AlertToast(state: RwSignal<AlertState>) -> impl IntoView {
    view! {
        <Show when=move || state.get().visible>
            <div
                class="alert-toast"
                class:alert-toast--error=move || state.get().is_error
                role="status"
            >
                <span class="alert-toast__text">{move || state.get().text}</span>
                <button
                    class="alert-toast__close"
                    aria-label="Dismiss"
                    on:click=move |_| state.update(|a| a.visible = false)
                >
                    "✕"
                </button>
            </div>
        </Show>
    }
}
