//! API layer: HTTP handlers and DTOs.

pub mod dto;
pub mod handlers;
