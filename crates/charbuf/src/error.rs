use alloc::alloc::{Layout, handle_alloc_error};

use thiserror::Error;

/// Errors reported by [`GrowableCharBuffer`](crate::GrowableCharBuffer).
///
/// The infallible API (`append`, `push`, ...) treats resource exhaustion as
/// fatal; the `try_*` API returns it as one of these values instead. In both
/// cases a failed call leaves the buffer exactly as it was before the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// The configured initial capacity was zero.
    #[error("initial capacity must be at least 1")]
    ZeroCapacity,
    /// `size + additional` characters cannot be represented as an allocation.
    #[error("capacity overflow: cannot hold {size} + {additional} characters")]
    CapacityOverflow {
        /// Characters held when the request was made.
        size: usize,
        /// Characters requested on top of `size`.
        additional: usize,
    },
    /// The allocator refused a storage block of `capacity` characters.
    #[error("failed to allocate storage for {capacity} characters")]
    AllocationFailed {
        /// Length of the block that could not be allocated.
        capacity: usize,
    },
}

impl BufferError {
    /// Escalates the error the same way `Vec` does: allocator failures go
    /// through the global allocation error handler, everything else panics.
    pub(crate) fn raise(self) -> ! {
        if let BufferError::AllocationFailed { capacity } = self {
            if let Ok(layout) = Layout::array::<char>(capacity) {
                handle_alloc_error(layout);
            }
        }
        panic!("{self}")
    }
}
