//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `TsError` as one variant
//! via `#[from]`.

use thiserror::Error;

/// Errors raised by `ts-core`, all of them configuration problems detected
/// before the simulation starts.
#[derive(Debug, Error)]
pub enum TsError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `ts-core`.
pub type TsResult<T> = Result<T, TsError>;
