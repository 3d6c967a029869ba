//! Routed pages.

pub mod admin_orders;
pub mod category;
pub mod explore;
pub mod launch;
pub mod product;
