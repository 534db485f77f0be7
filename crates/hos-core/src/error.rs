//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `HosError` as one variant
//! via `From`.

use thiserror::Error;

/// The top-level error type for `hos-core`.
#[derive(Debug, Error)]
pub enum HosError {
    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for `hos-core`.
pub type HosResult<T> = Result<T, HosError>;
