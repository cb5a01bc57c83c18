//! Shared utilities: code generation, bounded retry, URL validation.

pub mod code_generator;
pub mod retry;
pub mod url_validator;
