//! Derived vectors and in-place transformations.
//!
//! Every operation that returns an [`IntVector`] allocates a fresh buffer
//! sized to the result, inherits the source's options, and leaves the
//! source untouched.

use intvec_int_buf::AllocError;

use super::IntVector;
use crate::error::{Result, VectorError};

impl IntVector {
    /// Applies `f` to every element, in order.
    pub fn map(&self, mut f: impl FnMut(i32) -> i32) -> Result<IntVector> {
        let mut result = self.derived(self.len())?;
        for x in self.iter() {
            result.add(f(x))?;
        }
        Ok(result)
    }

    /// In-place [`map`](Self::map).
    pub fn replace_all(&mut self, mut f: impl FnMut(i32) -> i32) {
        for slot in self.as_mut_slice() {
            *slot = f(*slot);
        }
    }

    /// Elements satisfying `predicate`, in their original order.
    pub fn filter(&self, mut predicate: impl FnMut(i32) -> bool) -> Result<IntVector> {
        let mut result = self.derived(self.len())?;
        for x in self.iter() {
            if predicate(x) {
                result.add(x)?;
            }
        }
        result.trim_to_size()?;
        Ok(result)
    }

    /// Copy of the half-open range `from..to`.
    ///
    /// # Errors
    ///
    /// [`VectorError::Range`] if `to > len` or `from > to`.
    pub fn subvec(&self, from: usize, to: usize) -> Result<IntVector> {
        let len = self.len();
        if to > len || from > to {
            return Err(VectorError::Range {
                start: from,
                end: to,
                len,
            });
        }
        self.copy_of(&self.as_slice()[from..to])
    }

    /// The first `min(n, len)` elements.
    pub fn limit(&self, n: usize) -> Result<IntVector> {
        let n = n.min(self.len());
        self.copy_of(&self.as_slice()[..n])
    }

    /// Everything from index `n` on; empty if `n >= len`.
    pub fn skip(&self, n: usize) -> Result<IntVector> {
        let n = n.min(self.len());
        self.copy_of(&self.as_slice()[n..])
    }

    /// All of `self` followed by all of `other`.
    pub fn concat(&self, other: &IntVector) -> Result<IntVector> {
        let len = self
            .len()
            .checked_add(other.len())
            .ok_or(AllocError::CapacityOverflow(usize::MAX))?;
        let mut result = self.derived(len)?;
        result.extend_from_slice(self.as_slice())?;
        result.extend_from_slice(other.as_slice())?;
        Ok(result)
    }

    /// Reverses the elements in place.
    pub fn reverse(&mut self) {
        self.as_mut_slice().reverse();
    }

    /// Detached copy of the elements.
    pub fn to_array(&self) -> Vec<i32> {
        self.as_slice().to_vec()
    }

    fn copy_of(&self, values: &[i32]) -> Result<IntVector> {
        let mut result = self.derived(values.len())?;
        result.extend_from_slice(values)?;
        Ok(result)
    }
}

#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;
