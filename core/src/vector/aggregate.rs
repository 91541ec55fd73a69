//! Aggregates, predicate checks, and traversal.
//!
//! `sum`, `product`, and `range` use wrapping `i32` arithmetic. Queries that
//! need at least one element fail with [`VectorError::Empty`] rather than
//! returning a made-up value.

use super::IntVector;
use crate::error::{Result, VectorError};

impl IntVector {
    pub fn sum(&self) -> i32 {
        self.iter().fold(0i32, i32::wrapping_add)
    }

    pub fn product(&self) -> i32 {
        self.iter().fold(1i32, i32::wrapping_mul)
    }

    pub fn min(&self) -> Result<i32> {
        self.iter().min().ok_or(VectorError::empty("minimum"))
    }

    pub fn max(&self) -> Result<i32> {
        self.iter().max().ok_or(VectorError::empty("maximum"))
    }

    /// Arithmetic mean.
    ///
    /// The total is accumulated in `i64`, so unlike [`sum`](Self::sum) it
    /// does not wrap.
    pub fn average(&self) -> Result<f64> {
        if self.is_empty() {
            return Err(VectorError::empty("average"));
        }
        let total: i64 = self.iter().map(i64::from).sum();
        Ok(total as f64 / self.len() as f64)
    }

    /// `max - min`, wrapping on overflow.
    pub fn range(&self) -> Result<i32> {
        let (first, rest) = self
            .as_slice()
            .split_first()
            .ok_or(VectorError::empty("range"))?;
        let (lo, hi) = rest
            .iter()
            .fold((*first, *first), |(lo, hi), &x| (lo.min(x), hi.max(x)));
        Ok(hi.wrapping_sub(lo))
    }

    /// Whether every element satisfies `predicate`. True when empty.
    pub fn all(&self, predicate: impl FnMut(i32) -> bool) -> bool {
        self.iter().all(predicate)
    }

    /// Whether some element satisfies `predicate`. False when empty.
    pub fn any(&self, predicate: impl FnMut(i32) -> bool) -> bool {
        self.iter().any(predicate)
    }

    /// Whether no element satisfies `predicate`. True when empty.
    pub fn none(&self, predicate: impl FnMut(i32) -> bool) -> bool {
        !self.any(predicate)
    }

    /// First element satisfying `predicate`.
    pub fn find_first(&self, mut predicate: impl FnMut(i32) -> bool) -> Option<i32> {
        self.iter().find(|&x| predicate(x))
    }

    /// Last element satisfying `predicate`.
    pub fn find_last(&self, mut predicate: impl FnMut(i32) -> bool) -> Option<i32> {
        self.iter().rev().find(|&x| predicate(x))
    }

    /// Calls `consumer` on each element, in order.
    pub fn foreach(&self, consumer: impl FnMut(i32)) {
        self.iter().for_each(consumer);
    }

    /// Same length and the same elements in the same order.
    ///
    /// Capacity and options are not compared. Equivalent to `==`.
    pub fn equals(&self, other: &IntVector) -> bool {
        self == other
    }
}

#[cfg(test)]
#[path = "aggregate_test.rs"]
mod aggregate_test;
