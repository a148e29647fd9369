/// Initial capacity used by [`GrowableCharBuffer::new`](crate::GrowableCharBuffer::new).
pub const DEFAULT_INITIAL_CAPACITY: usize = 8;

/// Configuration options for a [`GrowableCharBuffer`](crate::GrowableCharBuffer).
///
/// # Examples
///
/// ```rust
/// use charbuf::{BufferOptions, GrowableCharBuffer};
///
/// let options = BufferOptions {
///     initial_capacity: 100,
///     ..Default::default()
/// };
/// let buffer = GrowableCharBuffer::with_options(options).unwrap();
/// assert_eq!(buffer.capacity(), 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
#[cfg_attr(any(test, feature = "serde"), serde(default, deny_unknown_fields))]
pub struct BufferOptions {
    /// Number of characters the first storage block holds.
    ///
    /// Must be at least 1; every later capacity is this value times a power of
    /// two. Only the timing of reallocations depends on it.
    ///
    /// # Default
    ///
    /// `8`
    pub initial_capacity: usize,
}

impl Default for BufferOptions {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
        }
    }
}
