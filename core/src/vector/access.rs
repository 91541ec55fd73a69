//! Element access and search.

use super::IntVector;
use crate::error::{Result, VectorError};

impl IntVector {
    /// Returns the element at `index`.
    pub fn get(&self, index: usize) -> Result<i32> {
        self.as_slice()
            .get(index)
            .copied()
            .ok_or(VectorError::index(index, self.len()))
    }

    pub fn get_first(&self) -> Result<i32> {
        self.as_slice()
            .first()
            .copied()
            .ok_or(VectorError::empty("first element"))
    }

    pub fn get_last(&self) -> Result<i32> {
        self.as_slice()
            .last()
            .copied()
            .ok_or(VectorError::empty("last element"))
    }

    pub fn contains(&self, x: i32) -> bool {
        self.as_slice().contains(&x)
    }

    /// Whether every element of `other` occurs somewhere in `self`.
    ///
    /// Multiplicity is ignored, so `[1]` contains all of `[1, 1]`.
    pub fn contains_all(&self, other: &IntVector) -> bool {
        other.iter().all(|x| self.contains(x))
    }

    /// Index of the first element equal to `x`.
    pub fn index_of(&self, x: i32) -> Option<usize> {
        self.as_slice().iter().position(|&y| y == x)
    }

    /// Index of the last element equal to `x`.
    pub fn last_index_of(&self, x: i32) -> Option<usize> {
        self.as_slice().iter().rposition(|&y| y == x)
    }

    /// Like [`index_of`](Self::index_of), restricted to the inclusive range
    /// `start..=end`.
    ///
    /// # Errors
    ///
    /// [`VectorError::Range`] if either bound is not a valid index or
    /// `start > end`.
    pub fn index_of_range(&self, x: i32, start: usize, end: usize) -> Result<Option<usize>> {
        let window = self.inclusive_window(start, end)?;
        Ok(window.iter().position(|&y| y == x).map(|i| start + i))
    }

    /// Like [`last_index_of`](Self::last_index_of), restricted to the
    /// inclusive range `start..=end`.
    pub fn last_index_of_range(&self, x: i32, start: usize, end: usize) -> Result<Option<usize>> {
        let window = self.inclusive_window(start, end)?;
        Ok(window.iter().rposition(|&y| y == x).map(|i| start + i))
    }

    fn inclusive_window(&self, start: usize, end: usize) -> Result<&[i32]> {
        let len = self.len();
        if start >= len || end >= len || start > end {
            return Err(VectorError::Range { start, end, len });
        }
        Ok(&self.as_slice()[start..=end])
    }

    /// Bisects for `x`, returning the index of a matching element.
    ///
    /// The vector must be sorted in ascending order. This is not checked;
    /// on unsorted input the result is unspecified but memory-safe.
    pub fn binary_search(&self, x: i32) -> Option<usize> {
        let values = self.as_slice();
        // Half-open window [left, right).
        let mut left = 0;
        let mut right = values.len();
        while left < right {
            let mid = left + (right - left) / 2;
            match values[mid].cmp(&x) {
                core::cmp::Ordering::Equal => return Some(mid),
                core::cmp::Ordering::Less => left = mid + 1,
                core::cmp::Ordering::Greater => right = mid,
            }
        }
        None
    }

    /// Number of elements equal to `x`.
    pub fn count(&self, x: i32) -> usize {
        self.iter().filter(|&y| y == x).count()
    }
}

#[cfg(test)]
#[path = "access_test.rs"]
mod access_test;
