//! The growable character buffer.
//!
//! [`GrowableCharBuffer`] owns a single block of `char` storage and a count of
//! how many characters at the front of that block are valid. Appends write
//! past the valid prefix; when the block is too small it is replaced by a
//! larger one, sized by doubling (see [`crate::growth`]), and the valid prefix
//! is copied over. Snapshots are always copies, so a snapshot taken earlier is
//! never affected by later appends.
//!
//! ```text
//!   storage ┌───┬───┬───┬───┬───┬───┬───┬───┐
//!           │ H │ e │ l │ l │ o │ · │ · │ · │   capacity = 8
//!           └───┴───┴───┴───┴───┴───┴───┴───┘
//!                               ▲
//!                              size = 5
//! ```

use alloc::{boxed::Box, string::String, vec::Vec};
use core::fmt::{self, Write as _};

use crate::{BufferError, BufferOptions, growth, options::DEFAULT_INITIAL_CAPACITY};

/// Value held by storage slots past the valid prefix.
const FILLER: char = '\0';

/// An append-only character buffer with amortized O(1) appends.
///
/// # Examples
///
/// ```rust
/// use charbuf::GrowableCharBuffer;
///
/// let mut buffer = GrowableCharBuffer::new();
/// buffer.append("Hello").append(" World!");
/// assert_eq!(buffer.materialize(), "Hello World!");
/// assert_eq!(buffer.capacity(), 16);
/// ```
#[derive(Clone)]
pub struct GrowableCharBuffer {
    storage: Box<[char]>,
    size: usize,
}

impl GrowableCharBuffer {
    /// Creates an empty buffer with room for
    /// [`DEFAULT_INITIAL_CAPACITY`](crate::DEFAULT_INITIAL_CAPACITY)
    /// characters.
    #[must_use]
    pub fn new() -> Self {
        Self {
            storage: alloc::vec![FILLER; DEFAULT_INITIAL_CAPACITY].into_boxed_slice(),
            size: 0,
        }
    }

    /// Creates an empty buffer configured by `options`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::ZeroCapacity`] if `options.initial_capacity` is
    /// zero, and [`BufferError::AllocationFailed`] if the first block cannot be
    /// allocated.
    pub fn with_options(options: BufferOptions) -> Result<Self, BufferError> {
        let BufferOptions { initial_capacity } = options;
        if initial_capacity == 0 {
            return Err(BufferError::ZeroCapacity);
        }
        if initial_capacity != DEFAULT_INITIAL_CAPACITY {
            log::debug!("char buffer configured with initial capacity {initial_capacity}");
        }

        Ok(Self {
            storage: allocate_block(initial_capacity, &[])?,
            size: 0,
        })
    }

    /// Number of valid characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether nothing has been appended yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Length of the current storage block. Always at least [`len`](Self::len).
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Borrows the valid characters.
    #[must_use]
    pub fn as_chars(&self) -> &[char] {
        &self.storage[..self.size]
    }

    /// Appends `text`, growing the storage if needed, and returns `self` so
    /// calls can be chained.
    ///
    /// # Panics
    ///
    /// Panics if the required capacity overflows. Allocation failure aborts
    /// through [`alloc::alloc::handle_alloc_error`].
    pub fn append(&mut self, text: &str) -> &mut Self {
        self.try_append(text).unwrap_or_else(|err| err.raise())
    }

    /// Fallible version of [`append`](Self::append).
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::CapacityOverflow`] or
    /// [`BufferError::AllocationFailed`] if the storage cannot grow. The
    /// buffer is left unchanged.
    pub fn try_append(&mut self, text: &str) -> Result<&mut Self, BufferError> {
        let additional = text.chars().count();
        self.try_reserve(additional)?;
        self.write_reserved(additional, text.chars());
        Ok(self)
    }

    /// Appends a slice of characters.
    ///
    /// # Panics
    ///
    /// See [`append`](Self::append).
    pub fn append_chars(&mut self, chars: &[char]) -> &mut Self {
        self.try_append_chars(chars).unwrap_or_else(|err| err.raise())
    }

    /// Fallible version of [`append_chars`](Self::append_chars).
    ///
    /// # Errors
    ///
    /// See [`try_append`](Self::try_append).
    pub fn try_append_chars(&mut self, chars: &[char]) -> Result<&mut Self, BufferError> {
        self.try_reserve(chars.len())?;
        let end = self.size + chars.len();
        self.storage[self.size..end].copy_from_slice(chars);
        self.size = end;
        Ok(self)
    }

    /// Appends a single character.
    ///
    /// # Panics
    ///
    /// See [`append`](Self::append).
    pub fn push(&mut self, ch: char) -> &mut Self {
        self.reserve(1);
        self.storage[self.size] = ch;
        self.size += 1;
        self
    }

    /// Makes room for at least `additional` more characters.
    ///
    /// # Panics
    ///
    /// See [`append`](Self::append).
    pub fn reserve(&mut self, additional: usize) {
        if let Err(err) = self.try_reserve(additional) {
            err.raise();
        }
    }

    /// Makes room for at least `additional` more characters, doubling the
    /// capacity until it suffices.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::CapacityOverflow`] if no addressable capacity is
    /// large enough and [`BufferError::AllocationFailed`] if the allocator
    /// refuses the new block. The buffer is left unchanged either way.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), BufferError> {
        let overflow = || BufferError::CapacityOverflow {
            size: self.size,
            additional,
        };

        let required = self.size.checked_add(additional).ok_or_else(overflow)?;
        if required <= self.storage.len() {
            return Ok(());
        }

        let capacity = growth::grown_capacity(self.storage.len(), required).ok_or_else(overflow)?;
        let storage = allocate_block(capacity, self.as_chars())?;
        log::trace!(
            "growing char buffer from {} to {capacity} characters ({} in use, {additional} requested)",
            self.storage.len(),
            self.size,
        );
        self.storage = storage;
        Ok(())
    }

    /// Returns an independent copy of the valid characters as a `String`.
    #[must_use]
    pub fn materialize(&self) -> String {
        self.as_chars().iter().collect()
    }

    /// Returns an independent copy of the valid characters.
    #[must_use]
    pub fn materialize_chars(&self) -> Box<[char]> {
        Box::from(self.as_chars())
    }

    /// Checks the structural invariants.
    ///
    /// # Panics
    ///
    /// Panics if the valid prefix overruns the storage or if a slot past it
    /// was written.
    #[cfg(any(test, feature = "fuzzing"))]
    pub fn check_invariants(&self) {
        assert!(!self.storage.is_empty(), "storage is never empty");
        assert!(
            self.size <= self.storage.len(),
            "size {} exceeds capacity {}",
            self.size,
            self.storage.len()
        );
        assert!(
            self.storage[self.size..].iter().all(|&ch| ch == FILLER),
            "slots past the valid prefix were written"
        );
    }

    /// Writes `chars` after the valid prefix. The caller must already have
    /// reserved room for exactly `additional` characters.
    fn write_reserved<I>(&mut self, additional: usize, chars: I)
    where
        I: IntoIterator<Item = char>,
    {
        let end = self.size + additional;
        let mut written = 0;
        for (slot, ch) in self.storage[self.size..end].iter_mut().zip(chars) {
            *slot = ch;
            written += 1;
        }
        debug_assert_eq!(written, additional, "character count changed between passes");
        self.size = end;
    }
}

/// Allocates a block of exactly `capacity` characters starting with `prefix`.
fn allocate_block(capacity: usize, prefix: &[char]) -> Result<Box<[char]>, BufferError> {
    debug_assert!(prefix.len() <= capacity);

    let mut block = Vec::new();
    block
        .try_reserve_exact(capacity)
        .map_err(|_| BufferError::AllocationFailed { capacity })?;
    block.extend_from_slice(prefix);
    block.resize(capacity, FILLER);
    Ok(block.into_boxed_slice())
}

impl Default for GrowableCharBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for GrowableCharBuffer {
    fn from(text: &str) -> Self {
        let mut buffer = Self::new();
        buffer.append(text);
        buffer
    }
}

impl PartialEq for GrowableCharBuffer {
    /// Buffers are equal when their valid characters are; capacity is ignored.
    fn eq(&self, other: &Self) -> bool {
        self.as_chars() == other.as_chars()
    }
}

impl Eq for GrowableCharBuffer {}

impl fmt::Debug for GrowableCharBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowableCharBuffer")
            .field("content", &self.materialize())
            .field("size", &self.size)
            .field("capacity", &self.capacity())
            .finish()
    }
}

impl fmt::Display for GrowableCharBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.width().is_some() || f.precision().is_some() {
            return f.pad(&self.materialize());
        }
        for &ch in self.as_chars() {
            f.write_char(ch)?;
        }
        Ok(())
    }
}

/// Growth failures surface as [`fmt::Error`] instead of panicking.
fn write_result(result: Result<&mut GrowableCharBuffer, BufferError>) -> fmt::Result {
    result.map(|_| ()).map_err(|_| fmt::Error)
}

impl fmt::Write for GrowableCharBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        write_result(self.try_append(s))
    }

    fn write_char(&mut self, c: char) -> fmt::Result {
        write_result(self.try_append_chars(&[c]))
    }
}

impl Extend<char> for GrowableCharBuffer {
    fn extend<T: IntoIterator<Item = char>>(&mut self, iter: T) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for ch in iter {
            self.push(ch);
        }
    }
}

impl<'a> Extend<&'a str> for GrowableCharBuffer {
    fn extend<T: IntoIterator<Item = &'a str>>(&mut self, iter: T) {
        for text in iter {
            self.append(text);
        }
    }
}

// A buffer (de)serializes as the string it holds.
#[cfg(any(test, feature = "serde"))]
mod serde_impls {
    use core::fmt::{self, Write as _};

    use serde::{
        Deserialize, Deserializer, Serialize, Serializer,
        de::{Error, Visitor},
    };

    use super::GrowableCharBuffer;

    impl Serialize for GrowableCharBuffer {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.collect_str(self)
        }
    }

    struct GrowableCharBufferVisitor;

    impl Visitor<'_> for GrowableCharBufferVisitor {
        type Value = GrowableCharBuffer;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: Error,
        {
            let mut buffer = GrowableCharBuffer::new();
            buffer.try_append(value).map_err(E::custom)?;
            Ok(buffer)
        }
    }

    impl<'de> Deserialize<'de> for GrowableCharBuffer {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_str(GrowableCharBufferVisitor)
        }
    }
}
