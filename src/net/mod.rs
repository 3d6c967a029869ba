//! Backend API surface: endpoint configuration, HTTP helpers, and wire DTOs.

pub mod api;
pub mod config;
pub mod types;
