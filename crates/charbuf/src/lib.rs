//! An amortized, append-only character buffer.
//!
//! [`GrowableCharBuffer`] keeps characters in one contiguous block that it
//! replaces with a block twice as large whenever an append would overflow it,
//! so appending `N` characters costs O(N) in total no matter how the input is
//! split across calls. [`GrowableCharBuffer::materialize`] hands out
//! independent copies of the content.
//!
//! ```rust
//! use charbuf::{BufferOptions, GrowableCharBuffer};
//!
//! let mut buffer = GrowableCharBuffer::with_options(BufferOptions {
//!     initial_capacity: 8,
//! })
//! .unwrap();
//!
//! buffer.append("Hello");
//! let greeting = buffer.materialize();
//! buffer.append(" World!");
//!
//! assert_eq!(greeting, "Hello");
//! assert_eq!(buffer.materialize(), "Hello World!");
//! assert_eq!(buffer.capacity(), 16);
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod buffer;
mod error;
mod growth;
mod options;

#[cfg(test)]
mod tests;

pub use buffer::GrowableCharBuffer;
pub use error::BufferError;
pub use options::{BufferOptions, DEFAULT_INITIAL_CAPACITY};
