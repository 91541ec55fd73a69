#![allow(unsafe_code)]

//! IntBuf: an exclusively owned heap buffer of `i32` slots.
//!
//! IntBuf is the storage underneath `IntVector`:
//! - Is exactly 16 bytes (pointer + capacity) on 64-bit targets
//! - Knows its capacity but not how many slots are logically in use
//! - Keeps every slot initialized (new slots are zeroed), so the whole
//!   capacity can be viewed as a slice
//! - Holds no allocation at all when the capacity is zero

extern crate alloc;

use alloc::alloc::{Layout, alloc_zeroed, dealloc, realloc};
use core::{
    fmt,
    ptr::{self, NonNull},
    slice,
};

use thiserror::Error;

/// Failure to obtain or resize the backing storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AllocError {
    /// The requested number of slots does not fit in a valid layout.
    #[error("capacity overflow while requesting {0} slots")]
    CapacityOverflow(usize),

    /// The allocator returned null.
    #[error("out of memory while requesting {0} slots")]
    OutOfMemory(usize),
}

pub struct IntBuf {
    ptr: NonNull<i32>, // dangling iff cap == 0
    cap: usize,
}

#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
static_assertions::assert_eq_size!(IntBuf, [usize; 2]);

// IntBuf uniquely owns its allocation and has no interior mutability.
unsafe impl Send for IntBuf {}
unsafe impl Sync for IntBuf {}

impl IntBuf {
    /// Creates a buffer with no allocation.
    pub const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
        }
    }

    /// Allocates `cap` zeroed slots. `cap == 0` does not allocate.
    pub fn with_capacity(cap: usize) -> Result<Self, AllocError> {
        if cap == 0 {
            return Ok(Self::new());
        }
        let layout = layout_for(cap)?;
        // SAFETY: `cap > 0`, so the layout has a non-zero size.
        let raw = unsafe { alloc_zeroed(layout) }.cast::<i32>();
        let ptr = NonNull::new(raw).ok_or(AllocError::OutOfMemory(cap))?;
        Ok(Self { ptr, cap })
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    #[inline(always)]
    pub fn is_allocated(&self) -> bool {
        self.cap != 0
    }

    /// Changes the capacity to exactly `new_cap`, preserving the first
    /// `min(cap, new_cap)` slots. New slots are zeroed.
    ///
    /// On failure the buffer is left untouched.
    pub fn resize(&mut self, new_cap: usize) -> Result<(), AllocError> {
        if new_cap == self.cap {
            return Ok(());
        }
        if new_cap == 0 {
            self.release();
            return Ok(());
        }
        if self.cap == 0 {
            *self = Self::with_capacity(new_cap)?;
            return Ok(());
        }

        let old_layout = layout_for(self.cap)?;
        let new_layout = layout_for(new_cap)?;
        // SAFETY: `ptr` was allocated by the global allocator with
        // `old_layout`, and `new_layout.size()` is non-zero.
        let raw = unsafe { realloc(self.ptr.as_ptr().cast(), old_layout, new_layout.size()) };
        let ptr = NonNull::new(raw.cast::<i32>()).ok_or(AllocError::OutOfMemory(new_cap))?;

        if new_cap > self.cap {
            // SAFETY: `[cap, new_cap)` lies inside the new allocation.
            unsafe { ptr::write_bytes(ptr.as_ptr().add(self.cap), 0, new_cap - self.cap) };
        }

        tracing::trace!(from = self.cap, to = new_cap, "reallocated int buffer");
        self.ptr = ptr;
        self.cap = new_cap;
        Ok(())
    }

    /// Frees the allocation and returns to the unallocated state.
    ///
    /// Calling this on an unallocated buffer does nothing.
    pub fn release(&mut self) {
        if self.cap == 0 {
            return;
        }
        if let Ok(layout) = layout_for(self.cap) {
            // SAFETY: a non-zero capacity means `ptr` came from the global
            // allocator with exactly this layout.
            unsafe { dealloc(self.ptr.as_ptr().cast(), layout) };
        }
        self.ptr = NonNull::dangling();
        self.cap = 0;
    }

    /// All `capacity()` slots.
    pub fn as_slice(&self) -> &[i32] {
        // SAFETY: `ptr` is non-null and aligned (dangling when `cap == 0`),
        // and every slot in `[0, cap)` is initialized.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.cap) }
    }

    /// All `capacity()` slots, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [i32] {
        // SAFETY: as in `as_slice`, and `&mut self` guarantees uniqueness.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.cap) }
    }
}

fn layout_for(cap: usize) -> Result<Layout, AllocError> {
    Layout::array::<i32>(cap).map_err(|_| AllocError::CapacityOverflow(cap))
}

impl Default for IntBuf {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for IntBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntBuf").field("cap", &self.cap).finish()
    }
}

impl Drop for IntBuf {
    fn drop(&mut self) {
        self.release();
    }
}
