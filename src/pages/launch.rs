//! Coming-soon landing page: launch countdown and notify-me signup.

#[cfg(test)]
#[path = "launch_test.rs"]
mod launch_test;

use leptos::prelude::*;

use crate::components::countdown_block::CountdownBlock;
use crate::util::countdown::{CountdownParts, countdown_parts};

/// Launch instant: 2025-04-04T00:00:00Z in milliseconds since the Unix epoch.
pub const LAUNCH_MS: i64 = 1_743_724_800_000;

/// Landing page shown before the store goes live.
#[component]
pub fn LaunchPage() -> impl IntoView {
    let countdown = RwSignal::new(CountdownParts::default());
    let email = RwSignal::new(String::new());
    let subscribed = RwSignal::new(false);

    // Per-second tick, self-cancelling once the launch instant passes and
    // cleared on teardown either way.
    #[cfg(feature = "hydrate")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        let tick = Rc::new(RefCell::new(None::<gloo_timers::callback::Interval>));
        let interval = gloo_timers::callback::Interval::new(1_000, {
            let tick = Rc::clone(&tick);
            move || {
                #[allow(clippy::cast_possible_truncation)]
                let now_ms = js_sys::Date::now() as i64;
                countdown.set(countdown_parts(now_ms, LAUNCH_MS));
                if now_ms >= LAUNCH_MS {
                    tick.borrow_mut().take();
                }
            }
        });
        *tick.borrow_mut() = Some(interval);
        on_cleanup(move || {
            tick.borrow_mut().take();
        });
    }

    let on_subscribe = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let address = email.get().trim().to_owned();
        if !is_valid_email(&address) {
            return;
        }
        #[cfg(feature = "hydrate")]
        log::info!("launch-list signup: {address}");
        subscribed.set(true);
    };

    let days = Signal::derive(move || countdown.get().days);
    let hours = Signal::derive(move || countdown.get().hours);
    let minutes = Signal::derive(move || countdown.get().minutes);
    let seconds = Signal::derive(move || countdown.get().seconds);

    view! {
        <div class="launch-page">
            <div class="launch-page__content">
                <span class="launch-page__gift" aria-hidden="true">"🎁"</span>
                <h1 class="launch-page__title">"Something Incredible is Coming"</h1>
                <p class="launch-page__subtitle">
                    "Get ready for a groundbreaking experience. We're working hard to bring you something truly special."
                </p>

                <div class="launch-page__countdown">
                    <CountdownBlock value=days label="Days"/>
                    <CountdownBlock value=hours label="Hours"/>
                    <CountdownBlock value=minutes label="Minutes"/>
                    <CountdownBlock value=seconds label="Seconds"/>
                </div>

                <Show
                    when=move || subscribed.get()
                    fallback=move || {
                        view! {
                            <form class="launch-page__signup" on:submit=on_subscribe>
                                <input
                                    class="launch-page__email"
                                    type="email"
                                    placeholder="you@example.com"
                                    prop:value=move || email.get()
                                    on:input=move |ev| email.set(event_target_value(&ev))
                                />
                                <button class="btn btn--primary" type="submit">
                                    "Notify Me"
                                </button>
                            </form>
                        }
                    }
                >
                    <p class="launch-page__thanks">"Thanks! We'll let you know the moment we launch."</p>
                </Show>

                <p class="launch-page__footer">"Launching on 4-4-2025 • Stay Excited!"</p>
            </div>
        </div>
    }
}

/// Minimal signup validation: something before the `@`, and a dot-bearing
/// domain after it, with no whitespace anywhere.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    let no_ws = |s: &str| !s.is_empty() && !s.chars().any(char::is_whitespace);
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    no_ws(local) && no_ws(host) && no_ws(tld)
}
