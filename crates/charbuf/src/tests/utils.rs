use alloc::{string::String, vec::Vec};

use crate::{BufferOptions, GrowableCharBuffer, tests::arbitrary::InitialCapacity};

/// Number of quickcheck cases: more under CI, far fewer under miri.
pub(crate) fn test_count() -> u64 {
    #[cfg(not(any(miri, feature = "test-fast")))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(any(miri, feature = "test-fast"))]
    let tests = 10;

    tests
}

pub(crate) fn buffer_with(capacity: InitialCapacity) -> GrowableCharBuffer {
    GrowableCharBuffer::with_options(BufferOptions {
        initial_capacity: capacity.0,
    })
    .unwrap()
}

/// Splits `text` into chunks at char boundaries, sized by `splits`, so that
/// the chunks concatenate back to `text`.
pub(crate) fn split_chunks(text: &str, splits: &[usize]) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut chunks = Vec::new();
    let mut idx = 0;

    for &split in splits {
        let remaining = chars.len() - idx;
        if remaining == 0 {
            break;
        }
        let size = 1 + split % remaining;
        chunks.push(chars[idx..idx + size].iter().collect());
        idx += size;
    }
    if idx < chars.len() {
        chunks.push(chars[idx..].iter().collect());
    }
    chunks
}

#[test]
fn split_chunks_concatenates_back() {
    let chunks = split_chunks("héllo wörld", &[0, 3, 100]);
    assert_eq!(chunks, ["h", "éllo", " wörl", "d"]);
    assert_eq!(chunks.concat(), "héllo wörld");
    assert!(split_chunks("", &[1, 2]).is_empty());
}
