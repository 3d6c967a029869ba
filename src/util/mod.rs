//! Shared browser glue and pure display helpers.

pub mod countdown;
pub mod format;
pub mod session;
pub mod timer;
