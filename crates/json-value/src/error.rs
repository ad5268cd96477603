//! Error type shared by every module of the crate.

use thiserror::Error;

use crate::types::Type;

/// Errors reported by [`Value`](crate::Value), [`Number`](crate::Number) and
/// [`Path`](crate::Path) operations.
///
/// Everything except [`Error::Parse`] and [`Error::Encode`] is a contract
/// violation: the panicking accessors abort with the error's message, the
/// `try_` forms hand it back.
#[derive(Debug, Error)]
pub enum Error {
    #[error("value must be JSON {expected}, found {actual}")]
    TypeMismatch { expected: Type, actual: Type },
    #[error("object must have key: {0:?}")]
    KeyNotFound(String),
    #[error("index {index} must be in [0, {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("invalid JSON number literal: {0:?}")]
    InvalidNumber(String),
    #[error("key {0:?} cannot be parsed to an array index")]
    InvalidIndexKey(String),
    /// The input text is not well-formed JSON.
    #[error("fail to unmarshal value: {0}")]
    Parse(#[source] serde_json::Error),
    /// The encoder rejected the value.
    #[error("fail to marshal value: {0}")]
    Encode(#[source] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Unwraps the result of a contract check, panicking with the error message.
#[track_caller]
pub(crate) fn contract<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{err}"),
    }
}

/// Checks `begin <= end <= len` for half-open slicing.
pub(crate) fn check_range(begin: usize, end: usize, len: usize) -> Result<()> {
    if begin > len {
        return Err(Error::InvalidArgument(format!(
            "begin {begin} must be in [0, {len}]"
        )));
    }
    if end > len {
        return Err(Error::InvalidArgument(format!(
            "endExclusive {end} must be in [0, {len}]"
        )));
    }
    if begin > end {
        return Err(Error::InvalidArgument(format!(
            "begin {begin} and endExclusive {end} must be begin <= endExclusive"
        )));
    }
    Ok(())
}
