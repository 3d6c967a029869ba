//! One unit block (days/hours/minutes/seconds) of the launch countdown.

use leptos::prelude::*;

/// A single countdown cell with its unit label.
#[component]
pub fn CountdownBlock(value: Signal<i64>, label: &'static str) -> impl IntoView {
    view! {
        <div class="countdown-block">
            <span class="countdown-block__value">{move || value.get()}</span>
            <span class="countdown-block__label">{label}</span>
        </div>
    }
}
