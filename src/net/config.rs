//! Backend endpoint configuration.
//!
//! The base URL is passed to [`crate::app::App`] at construction and provided
//! through Leptos context, so no module reads an ambient global to find the
//! backend.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Where the storefront backend lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Create a config for a backend base URL. Trailing slashes are stripped
    /// so endpoint paths can always be joined with a single `/`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Build a full endpoint URL from a path starting with `/`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}
