//! Core of IntVec: a growable, contiguous vector of `i32`.
//!
//! [`IntVector`] owns its storage exclusively, grows geometrically, and
//! reports every contract violation (bad index, empty vector, failed
//! allocation) as a [`VectorError`] instead of aborting.
//!
//! ```
//! use intvec_core::{IntVector, functional::is_even};
//!
//! # fn main() -> intvec_core::Result<()> {
//! let mut v = IntVector::create()?;
//! for i in 0..10 {
//!     v.add(i)?;
//! }
//!
//! assert!(!v.all(is_even));
//! assert_eq!(v.filter(is_even)?.to_string(), "[0, 2, 4, 6, 8]");
//! assert_eq!(v.sum(), 45);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod functional;
pub mod options;
pub mod vector;

pub use error::{ErrorKind, Result, VectorError};
pub use intvec_int_buf::AllocError;
pub use options::{DEFAULT_CAPACITY, GROW_FACTOR, VectorOptions};
pub use vector::IntVector;

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub mod test_utils {
    /// Initialize tracing subscriber for tests with DEBUG level
    /// Call this at the start of tests where you want to see logging output
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    }
}
