//! Error types for vector operations.
//!
//! Every failing operation returns a [`VectorError`]. Callers that only care
//! about the broad category can match on [`VectorError::kind`].

use intvec_int_buf::AllocError;
use thiserror::Error;

/// Result type used across the crate.
pub type Result<T, E = VectorError> = core::result::Result<T, E>;

/// Broad category of a [`VectorError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An index or range fell outside the valid elements.
    Index,
    /// The operation needs at least one element.
    Empty,
    /// Storage could not be obtained or grown.
    Allocation,
    /// A [`VectorOptions`](crate::VectorOptions) value was rejected.
    Options,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VectorError {
    #[error("index {index} is out of range for length {len}")]
    Index { index: usize, len: usize },

    #[error("invalid range (start {start}, end {end}) for length {len}")]
    Range { start: usize, end: usize, len: usize },

    #[error("cannot take the {op} of an empty vector")]
    Empty { op: &'static str },

    #[error("allocation failed: {0}")]
    Allocation(#[from] AllocError),

    #[error("invalid options: {0}")]
    InvalidOptions(&'static str),
}

impl VectorError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            VectorError::Index { .. } | VectorError::Range { .. } => ErrorKind::Index,
            VectorError::Empty { .. } => ErrorKind::Empty,
            VectorError::Allocation(_) => ErrorKind::Allocation,
            VectorError::InvalidOptions(_) => ErrorKind::Options,
        }
    }

    pub(crate) fn index(index: usize, len: usize) -> Self {
        Self::Index { index, len }
    }

    pub(crate) fn empty(op: &'static str) -> Self {
        Self::Empty { op }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(VectorError::index(3, 2).kind(), ErrorKind::Index);
        assert_eq!(
            VectorError::Range { start: 2, end: 1, len: 5 }.kind(),
            ErrorKind::Index
        );
        assert_eq!(VectorError::empty("min").kind(), ErrorKind::Empty);
        assert_eq!(
            VectorError::from(AllocError::OutOfMemory(8)).kind(),
            ErrorKind::Allocation
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            VectorError::index(3, 2).to_string(),
            "index 3 is out of range for length 2"
        );
        assert_eq!(
            VectorError::Range { start: 4, end: 1, len: 5 }.to_string(),
            "invalid range (start 4, end 1) for length 5"
        );
        assert_eq!(
            VectorError::empty("maximum").to_string(),
            "cannot take the maximum of an empty vector"
        );
        assert_eq!(
            VectorError::from(AllocError::CapacityOverflow(7)).to_string(),
            "allocation failed: capacity overflow while requesting 7 slots"
        );
    }
}
