//! Render Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};

/// A render error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for render operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A builtin template failed to compile or render.
    #[display("issue rendering template: {_0}")]
    Template(#[error(not(source))] &'static str),
    /// Asset was not loadable.
    #[display("asset not found: {_0}")]
    AssetNotFound(#[error(not(source))] String),
    /// The theme name is neither `day` nor `night`.
    #[display("unknown theme: {_0}")]
    UnknownTheme(#[error(not(source))] String),
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        false
    }
}
