use thiserror::Error;

/// Errors reported by [`Vector`](crate::vector::Vector) operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VectorError {
    #[error("index {index} is out of range for a vector of length {len}")]
    OutOfRange { index: usize, len: usize },

    #[error("range {start}..{end} is invalid for a vector of length {len}")]
    InvalidRange { start: usize, end: usize, len: usize },

    #[error("the vector is empty")]
    Empty,

    #[error("requested capacity exceeds the maximum allocation size")]
    CapacityOverflow,

    #[error("allocation of {size} bytes with alignment {align} failed")]
    AllocFailed { size: usize, align: usize },
}

pub type Result<T> = std::result::Result<T, VectorError>;
