//! Doubling growth policy.
//!
//! A buffer that runs out of room doubles its capacity, repeatedly if one
//! append needs more than twice the current block, until the request fits.
//! Every capacity a buffer ever has is therefore `initial * 2^k`, and the total
//! number of characters copied across all reallocations stays within a
//! constant factor of the number of characters appended.

use alloc::alloc::Layout;

/// Returns the capacity a block of `current` characters must grow to in order
/// to hold `required` characters, or `None` if no addressable `char`
/// allocation is large enough.
///
/// When `required <= current` no growth is needed and `current` is returned.
pub(crate) fn grown_capacity(current: usize, required: usize) -> Option<usize> {
    debug_assert!(current > 0, "storage capacity is never zero");

    let mut capacity = current;
    while capacity < required {
        capacity = capacity.checked_mul(2)?;
    }

    // `Layout::array` rejects sizes past `isize::MAX` bytes.
    Layout::array::<char>(capacity).ok()?;
    Some(capacity)
}
