//! Core business entities.

mod link;

pub use link::{CodeMode, Link, NewLink};
