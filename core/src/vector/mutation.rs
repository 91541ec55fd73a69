//! Structural mutation: appends, inserts, removals, overwrites.

use intvec_int_buf::{AllocError, IntBuf};

use super::IntVector;
use crate::error::{Result, VectorError};

impl IntVector {
    /// Appends `x`, growing the buffer first if it is full.
    ///
    /// # Time Complexity
    ///
    /// Amortized *O*(1): a full buffer is multiplied in size, so the cost of
    /// copying is spread over the appends that fill the new slots.
    pub fn add(&mut self, x: i32) -> Result<()> {
        let len = self.len();
        if len == self.capacity() {
            self.ensure_capacity(len + 1)?;
        }
        self.slots_mut()[len] = x;
        self.set_len(len + 1);
        Ok(())
    }

    /// Appends every element of `other`, growing at most once.
    pub fn add_all(&mut self, other: &IntVector) -> Result<()> {
        self.extend_from_slice(other.as_slice())
    }

    pub fn extend_from_slice(&mut self, values: &[i32]) -> Result<()> {
        let len = self.len();
        let new_len = len
            .checked_add(values.len())
            .ok_or(AllocError::CapacityOverflow(usize::MAX))?;
        self.ensure_capacity(new_len)?;
        self.slots_mut()[len..new_len].copy_from_slice(values);
        self.set_len(new_len);
        Ok(())
    }

    /// Inserts `x` at `index`, shifting later elements one slot right.
    ///
    /// `index == len` appends.
    pub fn insert(&mut self, index: usize, x: i32) -> Result<()> {
        let len = self.len();
        if index > len {
            return Err(VectorError::index(index, len));
        }
        if len == self.capacity() {
            self.ensure_capacity(len + 1)?;
        }
        let slots = self.slots_mut();
        slots.copy_within(index..len, index + 1);
        slots[index] = x;
        self.set_len(len + 1);
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting later elements
    /// one slot left.
    pub fn remove(&mut self, index: usize) -> Result<i32> {
        let len = self.len();
        if index >= len {
            return Err(VectorError::index(index, len));
        }
        let slots = self.slots_mut();
        let removed = slots[index];
        slots.copy_within(index + 1..len, index);
        self.set_len(len - 1);
        Ok(removed)
    }

    /// Removes every element for which `predicate` holds, keeping the
    /// relative order of the rest. Returns how many were removed.
    pub fn remove_if(&mut self, mut predicate: impl FnMut(i32) -> bool) -> usize {
        let len = self.len();
        let slots = self.slots_mut();
        let mut write = 0;
        for read in 0..len {
            let x = slots[read];
            if !predicate(x) {
                slots[write] = x;
                write += 1;
            }
        }
        self.set_len(write);
        len - write
    }

    /// Overwrites the element at `index`, returning the previous value.
    pub fn set(&mut self, index: usize, x: i32) -> Result<i32> {
        let len = self.len();
        let slot = self
            .as_mut_slice()
            .get_mut(index)
            .ok_or(VectorError::index(index, len))?;
        Ok(core::mem::replace(slot, x))
    }

    pub fn add_first(&mut self, x: i32) -> Result<()> {
        self.insert(0, x)
    }

    pub fn add_last(&mut self, x: i32) -> Result<()> {
        self.add(x)
    }

    pub fn remove_first(&mut self) -> Result<i32> {
        self.remove(0)
    }

    /// Removes the last element. Fails with [`VectorError::Index`] when empty.
    pub fn remove_last(&mut self) -> Result<i32> {
        match self.len().checked_sub(1) {
            Some(last) => self.remove(last),
            None => Err(VectorError::index(0, 0)),
        }
    }

    /// Exchanges the elements at `i` and `j`.
    pub fn swap(&mut self, i: usize, j: usize) -> Result<()> {
        let len = self.len();
        for index in [i, j] {
            if index >= len {
                return Err(VectorError::index(index, len));
            }
        }
        self.as_mut_slice().swap(i, j);
        Ok(())
    }

    /// Replaces the contents with `count` copies of `value`.
    ///
    /// The capacity becomes exactly `count`; zero releases the buffer. If
    /// the new buffer cannot be allocated the vector is left as it was.
    pub fn fill(&mut self, value: i32, count: usize) -> Result<()> {
        let mut buf = IntBuf::with_capacity(count)?;
        buf.as_mut_slice().fill(value);
        tracing::debug!(count, "filling int vector");
        self.replace_buf(buf, count);
        Ok(())
    }
}

#[cfg(test)]
#[path = "mutation_test.rs"]
mod mutation_test;
