//! Error handling for the Chkobba engine.

pub mod domain;
pub mod error_code;

#[cfg(test)]
mod tests_error_mapping;

pub use domain::{DomainError, IntegrityKind, ValidationKind};
pub use error_code::ErrorCode;
