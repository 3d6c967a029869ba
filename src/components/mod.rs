//! Reusable view components shared across pages.

pub mod alert;
pub mod countdown_block;
pub mod product_card;
