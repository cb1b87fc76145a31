use thiserror::Error;

use crate::cursor::CursorError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConnectionError {
    #[error("ConnectionError - InvalidCursor: {0}")]
    InvalidCursor(#[from] CursorError),
    #[error("ConnectionError - InvalidArgument: '{0}' must be non-negative, got {1}")]
    InvalidArgument(&'static str, i32),
}

/// Failure of a connection resolution that had to fetch its rows.
#[derive(Error, Debug)]
pub enum ResolveError<E> {
    #[error("{0}")]
    Connection(#[from] ConnectionError),
    #[error("{0}")]
    Source(E),
}
