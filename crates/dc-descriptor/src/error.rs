//! Error and status types for catalog enumeration

use std::fmt;

use thiserror::Error;

/// Errors that can occur while creating or advancing a cursor
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DcError {
    /// A required argument (such as the output slot) was absent
    #[error("invalid arguments")]
    InvalidArgs,

    /// Cursor storage could not be allocated
    #[error("out of memory")]
    NoMemory,
}

/// Status vocabulary shared by every enumerable resource
///
/// `Done` is the terminal enumeration signal and not a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    Success,
    Done,
    InvalidArgs,
    NoMemory,
}

impl Status {
    /// Status reported by a single `advance` call
    pub fn of<T>(result: &Result<Option<T>, DcError>) -> Self {
        match result {
            Ok(Some(_)) => Status::Success,
            Ok(None) => Status::Done,
            Err(e) => e.into(),
        }
    }

    /// Returns true for `Success` and `Done`
    pub fn is_ok(&self) -> bool {
        matches!(self, Status::Success | Status::Done)
    }
}

impl From<&DcError> for Status {
    fn from(e: &DcError) -> Self {
        match e {
            DcError::InvalidArgs => Status::InvalidArgs,
            DcError::NoMemory => Status::NoMemory,
        }
    }
}

impl From<DcError> for Status {
    fn from(e: DcError) -> Self {
        (&e).into()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Status::Success => "success",
            Status::Done => "done",
            Status::InvalidArgs => "invalid arguments",
            Status::NoMemory => "out of memory",
        };
        f.write_str(s)
    }
}
