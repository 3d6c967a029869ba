//! Read-only access to the browser-storage session user.
//!
//! The login flow (owned elsewhere) writes a `user` object into
//! `localStorage`; this frontend only ever reads it to attach a user id to
//! cart requests. Hydrate-only; SSR paths return `None`.

use serde::Deserialize;

/// The slice of the stored user this frontend cares about.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct StoredUser {
    pub id: String,
}

/// Load the stored user from `localStorage`, if present and well-formed.
pub fn stored_user() -> Option<StoredUser> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item("user").ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
