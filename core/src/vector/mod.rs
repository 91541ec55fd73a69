//! The [`IntVector`] container.
//!
//! Operations are grouped by concern:
//!
//! - lifecycle and growth (this module)
//! - [`mutation`]: add, insert, remove, set, fill
//! - [`access`]: get, search, count
//! - [`transform`]: map, filter, slices, concat, reverse
//! - [`aggregate`]: statistics and predicate checks

use core::fmt;
use core::ops::Index;

use intvec_int_buf::{AllocError, IntBuf};

use crate::error::{Result, VectorError};
use crate::options::VectorOptions;

pub mod access;
pub mod aggregate;
pub mod mutation;
pub mod transform;

/// A growable, contiguous vector of `i32`.
///
/// Only the first [`len`](Self::len) of the [`capacity`](Self::capacity)
/// slots hold elements. Growth multiplies the capacity by the configured
/// factor, so a sequence of appends costs amortized O(1) each.
///
/// Every vector owns its buffer exclusively; vectors returned by
/// transformations never share storage with their source, and [`Clone`]
/// copies the elements.
pub struct IntVector {
    buf: IntBuf,
    len: usize,
    options: VectorOptions,
}

impl IntVector {
    /// Creates an empty vector with no allocation.
    ///
    /// The first append grows it to the default capacity.
    pub const fn new() -> Self {
        Self {
            buf: IntBuf::new(),
            len: 0,
            options: VectorOptions {
                default_capacity: crate::DEFAULT_CAPACITY,
                grow_factor: crate::GROW_FACTOR,
            },
        }
    }

    /// Creates an empty vector with [`DEFAULT_CAPACITY`](crate::DEFAULT_CAPACITY) slots.
    pub fn create() -> Result<Self> {
        Self::with_options(VectorOptions::default())
    }

    /// Creates an empty vector with exactly `capacity` slots.
    ///
    /// A capacity of zero allocates nothing.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::with_capacity_and_options(capacity, VectorOptions::default())
    }

    /// Creates an empty vector with `options.default_capacity` slots.
    pub fn with_options(options: VectorOptions) -> Result<Self> {
        Self::with_capacity_and_options(options.default_capacity, options)
    }

    pub fn with_capacity_and_options(capacity: usize, options: VectorOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            buf: IntBuf::with_capacity(capacity)?,
            len: 0,
            options,
        })
    }

    /// Creates a vector holding a copy of `values`, with capacity equal to
    /// their count.
    pub fn from_slice(values: &[i32]) -> Result<Self> {
        let mut v = Self::with_capacity(values.len())?;
        v.extend_from_slice(values)?;
        Ok(v)
    }

    /// An empty vector with room for `capacity` elements and the same
    /// options as `self`.
    pub(crate) fn derived(&self, capacity: usize) -> Result<Self> {
        Ok(Self {
            buf: IntBuf::with_capacity(capacity)?,
            len: 0,
            options: self.options,
        })
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn options(&self) -> &VectorOptions {
        &self.options
    }

    /// Makes room for at least `min_capacity` elements.
    ///
    /// Does nothing if the capacity already suffices. Otherwise the
    /// capacity (or the default capacity, when nothing is allocated) is
    /// multiplied by the grow factor until it is large enough. Existing
    /// elements keep their order.
    ///
    /// # Errors
    ///
    /// [`VectorError::Allocation`] if the new capacity overflows or the
    /// allocator fails. The vector is unchanged in that case.
    pub fn ensure_capacity(&mut self, min_capacity: usize) -> Result<()> {
        let current = self.capacity();
        if current >= min_capacity {
            return Ok(());
        }
        let new_cap = self
            .options
            .grown_capacity(current, min_capacity)
            .ok_or(AllocError::CapacityOverflow(min_capacity))?;

        tracing::debug!(from = current, to = new_cap, len = self.len, "growing int vector");
        self.buf.resize(new_cap)?;
        Ok(())
    }

    /// Shrinks the capacity to exactly the length, releasing the buffer
    /// when the vector is empty.
    pub fn trim_to_size(&mut self) -> Result<()> {
        if self.capacity() == self.len {
            return Ok(());
        }
        tracing::debug!(from = self.capacity(), to = self.len, "trimming int vector");
        self.buf.resize(self.len)?;
        Ok(())
    }

    /// Sets the length to zero. The capacity is kept.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Releases the buffer and resets length and capacity to zero.
    ///
    /// Destroying twice is harmless, and a destroyed vector can be reused:
    /// it behaves like [`IntVector::new`] with its original options.
    pub fn destroy(&mut self) {
        if self.buf.is_allocated() {
            tracing::debug!(capacity = self.capacity(), "destroying int vector");
        }
        self.buf.release();
        self.len = 0;
    }

    /// The valid elements.
    pub fn as_slice(&self) -> &[i32] {
        &self.buf.as_slice()[..self.len]
    }

    /// The valid elements, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [i32] {
        let len = self.len;
        &mut self.buf.as_mut_slice()[..len]
    }

    pub fn iter(&self) -> core::iter::Copied<core::slice::Iter<'_, i32>> {
        self.as_slice().iter().copied()
    }

    /// Deep copy that reports allocation failure instead of panicking.
    ///
    /// The copy keeps the source's options and gets a capacity equal to
    /// its length.
    pub fn try_clone(&self) -> Result<Self> {
        let mut copy = self.derived(self.len)?;
        copy.extend_from_slice(self.as_slice())?;
        Ok(copy)
    }

    /// Slot access for the mutation module, which maintains `len` itself.
    pub(crate) fn slots_mut(&mut self) -> &mut [i32] {
        self.buf.as_mut_slice()
    }

    pub(crate) fn set_len(&mut self, len: usize) {
        debug_assert!(len <= self.capacity());
        self.len = len;
    }

    pub(crate) fn replace_buf(&mut self, buf: IntBuf, len: usize) {
        debug_assert!(len <= buf.capacity());
        self.buf = buf;
        self.len = len;
    }
}

impl Default for IntVector {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for IntVector {
    fn clone(&self) -> Self {
        self.try_clone().expect("allocation failed while cloning IntVector")
    }
}

impl PartialEq for IntVector {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for IntVector {}

impl PartialEq<[i32]> for IntVector {
    fn eq(&self, other: &[i32]) -> bool {
        self.as_slice() == other
    }
}

impl<const N: usize> PartialEq<[i32; N]> for IntVector {
    fn eq(&self, other: &[i32; N]) -> bool {
        self.as_slice() == other
    }
}

impl Index<usize> for IntVector {
    type Output = i32;

    /// # Panics
    ///
    /// Panics if `index >= len`. Use [`IntVector::get`] for a checked read.
    fn index(&self, index: usize) -> &i32 {
        &self.as_slice()[index]
    }
}

impl<'a> IntoIterator for &'a IntVector {
    type Item = &'a i32;
    type IntoIter = core::slice::Iter<'a, i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl TryFrom<&[i32]> for IntVector {
    type Error = VectorError;

    fn try_from(values: &[i32]) -> Result<Self> {
        Self::from_slice(values)
    }
}

/// Renders `[1, 2, 3]`, or `[]` when empty.
impl fmt::Display for IntVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, x) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{x}")?;
        }
        f.write_str("]")
    }
}

impl fmt::Debug for IntVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntVector")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("values", &self.as_slice())
            .finish()
    }
}
