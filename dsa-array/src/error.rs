use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("capacity of the array can't be negative: {0}")]
    InvalidCapacity(isize),
    #[error("index cannot be negative: {0}")]
    NegativeIndex(isize),
    #[error("index {index} exceeds array size {size}")]
    IndexOutOfRange { index: isize, size: usize },
    #[error("array is empty")]
    EmptyArray,
}

impl Error {
    /// Returns whether the error is caused by a malformed argument
    /// supplied by caller, e.g. negative capacity or invalid index.
    #[inline]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Error::InvalidCapacity(_) | Error::NegativeIndex(_) | Error::IndexOutOfRange { .. }
        )
    }
}
