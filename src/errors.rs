use std::{fmt, io};

use thiserror::Error;

// Raw status code returned by a vendor call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Status(pub u32);

impl Status {
    pub const OK: Status = Status(0);
    pub const UNKNOWN: Status = Status(999);

    pub fn is_ok(self) -> bool {
        self == Self::OK
    }

    pub fn code(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error 0x{:08X}", self.0)
    }
}

/// A failed vendor call: the name of the call and the status it returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{call} failed: {status}")]
pub struct ApiError {
    pub call: &'static str,
    pub status: Status,
}

impl ApiError {
    pub fn new(call: &'static str, status: Status) -> Self {
        Self { call, status }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

// Write a vendor failure on the error stream, one line per failure
pub fn report_error(err: &mut impl io::Write, error: &ApiError) -> io::Result<()> {
    writeln!(err, "{error}")
}

#[derive(Debug, Error)]
pub enum MonitorError {
    #[error("failed to initialize the vendor runtime")]
    Init(#[source] ApiError),
    #[error("No GPUs found.")]
    NoAdapters,
    #[error(transparent)]
    Io(#[from] io::Error),
}
