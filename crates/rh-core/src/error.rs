//! Base error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` (or each
//! other's errors) via `#[from]` where an error crosses a crate boundary.

use thiserror::Error;

/// Errors produced by `rh-core`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `rh-core`.
pub type CoreResult<T> = Result<T, CoreError>;
