//! Cancellable keyed timeouts for transient UI feedback.
//!
//! DESIGN
//! ======
//! Components that show auto-expiring messages (order-row status feedback,
//! cart toasts) share one `TimerSet` per component instance instead of ad hoc
//! `setTimeout` bookkeeping. Scheduling on an existing key cancels the
//! pending timeout first, so a second attempt on the same row resets the
//! clock rather than stacking callbacks. `cancel_all` is wired to component
//! cleanup so nothing fires against unmounted state.

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::collections::HashMap;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

/// A set of pending timeouts keyed by string (typically a row/order id).
///
/// Clones share the same underlying set. Browser-only; on the server every
/// method is a no-op and callbacks are never invoked.
#[derive(Clone, Default)]
pub struct TimerSet {
    #[cfg(feature = "hydrate")]
    pending: Rc<RefCell<HashMap<String, gloo_timers::callback::Timeout>>>,
}

impl TimerSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `callback` to run after `delay_ms`, replacing (and thereby
    /// cancelling) any pending timeout for the same key.
    pub fn schedule(&self, key: &str, delay_ms: u32, callback: impl FnOnce() + 'static) {
        #[cfg(feature = "hydrate")]
        {
            let pending = Rc::clone(&self.pending);
            let owned_key = key.to_owned();
            let timeout = gloo_timers::callback::Timeout::new(delay_ms, {
                let pending = Rc::clone(&pending);
                let owned_key = owned_key.clone();
                move || {
                    pending.borrow_mut().remove(&owned_key);
                    callback();
                }
            });
            // Dropping a replaced Timeout cancels it.
            pending.borrow_mut().insert(owned_key, timeout);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, delay_ms);
            drop(callback);
        }
    }

    /// Cancel the pending timeout for `key`, if any.
    pub fn cancel(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            self.pending.borrow_mut().remove(key);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }

    /// Cancel every pending timeout. Called on component teardown.
    pub fn cancel_all(&self) {
        #[cfg(feature = "hydrate")]
        self.pending.borrow_mut().clear();
    }
}
