//! Client-side state models.
//!
//! DESIGN
//! ======
//! State is split by domain (`orders`, `catalog`) so pages can depend on
//! small focused models, and the interesting behavior stays in plain structs
//! and pure functions that unit tests can drive without a browser.

pub mod catalog;
pub mod orders;
