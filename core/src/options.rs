//! Growth configuration.

use crate::error::{Result, VectorError};

/// Capacity of a vector built with [`IntVector::create`](crate::IntVector::create),
/// and the first capacity an unallocated vector grows to.
pub const DEFAULT_CAPACITY: usize = 10;

/// Factor by which a full vector multiplies its capacity.
pub const GROW_FACTOR: usize = 2;

/// Options controlling how an [`IntVector`](crate::IntVector) allocates.
///
/// Vectors derived from another vector (`map`, `filter`, `subvec`, ...)
/// inherit its options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VectorOptions {
    /// Capacity used by `create` and by the first growth of an empty buffer.
    pub default_capacity: usize,
    /// Multiplier applied on each growth. Must be at least 2, otherwise
    /// appends stop being amortized O(1).
    pub grow_factor: usize,
}

impl Default for VectorOptions {
    fn default() -> Self {
        Self {
            default_capacity: DEFAULT_CAPACITY,
            grow_factor: GROW_FACTOR,
        }
    }
}

impl VectorOptions {
    pub fn validate(&self) -> Result<()> {
        if self.default_capacity == 0 {
            return Err(VectorError::InvalidOptions(
                "default capacity must be at least 1",
            ));
        }
        if self.grow_factor < 2 {
            return Err(VectorError::InvalidOptions("grow factor must be at least 2"));
        }
        Ok(())
    }

    /// Capacity reached by growing from `current` until it holds `min`.
    ///
    /// Returns `None` if the arithmetic overflows.
    pub(crate) fn grown_capacity(&self, current: usize, min: usize) -> Option<usize> {
        let mut cap = if current > 0 {
            current
        } else {
            self.default_capacity
        };
        while cap < min {
            cap = cap.checked_mul(self.grow_factor)?;
        }
        Some(cap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_default() {
        let options = VectorOptions::default();
        assert_eq!(options.default_capacity, 10);
        assert_eq!(options.grow_factor, 2);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_degenerate_values() {
        let no_default = VectorOptions {
            default_capacity: 0,
            ..Default::default()
        };
        assert_eq!(no_default.validate().unwrap_err().kind(), ErrorKind::Options);

        let linear = VectorOptions {
            grow_factor: 1,
            ..Default::default()
        };
        assert_eq!(linear.validate().unwrap_err().kind(), ErrorKind::Options);
    }

    #[test]
    fn test_grown_capacity() {
        let options = VectorOptions::default();
        assert_eq!(options.grown_capacity(0, 1), Some(10));
        assert_eq!(options.grown_capacity(0, 11), Some(20));
        assert_eq!(options.grown_capacity(10, 11), Some(20));
        assert_eq!(options.grown_capacity(10, 81), Some(160));
        assert_eq!(options.grown_capacity(3, 3), Some(3));
        assert_eq!(options.grown_capacity(usize::MAX / 2 + 1, usize::MAX), None);

        let triple = VectorOptions {
            default_capacity: 4,
            grow_factor: 3,
        };
        assert_eq!(triple.grown_capacity(0, 5), Some(12));
    }
}
