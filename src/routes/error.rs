//! Route table errors

use thiserror::Error;

/// Errors found while compiling a route table
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("Invalid route pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Catch-all route {0:?} must be the last entry at its level")]
    CatchAllNotLast(String),

    #[error("Duplicate route path {0:?}")]
    DuplicatePath(String),
}

pub type RouteResult<T> = Result<T, RouteError>;
