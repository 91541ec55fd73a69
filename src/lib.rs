//! IntVec - a growable vector of `i32` with checked, recoverable errors
//!
//! # Overview
//!
//! [`IntVector`] stores 32-bit integers contiguously, grows geometrically,
//! and offers the usual list toolkit on top:
//!
//! - Appends, inserts, removals, and in-place overwrites
//! - Linear and binary search, counting, membership
//! - Derived vectors: `map`, `filter`, `subvec`, `limit`, `skip`, `concat`
//! - Aggregates: `sum`, `product`, `min`, `max`, `average`, `range`
//!
//! Every operation that can fail returns a [`VectorError`]; nothing aborts
//! the process.
//!
//! # Quick Start
//!
//! ```
//! use intvec::IntVector;
//! use intvec::functional::{is_even, square};
//!
//! let mut v = IntVector::create().unwrap();
//! for i in 0..10 {
//!     v.add(i).unwrap();
//! }
//!
//! assert_eq!(v.filter(is_even).unwrap().to_string(), "[0, 2, 4, 6, 8]");
//! assert_eq!(v.map(square).unwrap().get_last().unwrap(), 81);
//! assert_eq!(v.sum(), 45);
//! ```
//!
//! # Tuning growth
//!
//! ```
//! use intvec::{IntVector, VectorOptions};
//!
//! let options = VectorOptions { default_capacity: 4, grow_factor: 3 };
//! let mut v = IntVector::with_options(options).unwrap();
//! for i in 0..5 {
//!     v.add(i).unwrap();
//! }
//! assert_eq!(v.capacity(), 12);
//! ```

// Error rendering utilities
pub mod error_renderer;
pub use error_renderer::{RenderConfig, render_error, render_error_to};

// Re-export public API from intvec_core
pub use intvec_core::{
    AllocError, DEFAULT_CAPACITY, ErrorKind, GROW_FACTOR, IntVector, Result, VectorError,
    VectorOptions, functional,
};
