//! Route-network error type.

use thiserror::Error;

use ts_core::RouteId;

/// Errors produced while building or loading a `RouteNetwork`.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("route {code:?} has {got} path point(s); at least 2 are required")]
    TooFewPoints { code: String, got: usize },

    #[error("route {code:?} has a non-finite coordinate in its path")]
    InvalidCoordinate { code: String },

    #[error("duplicate route code {0:?}")]
    DuplicateRoute(String),

    #[error("stop {0:?} is declared at two different positions")]
    ConflictingStop(String),

    #[error("route {0} not found")]
    RouteNotFound(RouteId),

    #[error("route parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type NetworkResult<T> = Result<T, NetworkError>;
