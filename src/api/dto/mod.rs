//! Request and response DTOs.

pub mod health;
pub mod link;
pub mod shorten;
pub mod urls;
