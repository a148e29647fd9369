use alloc::{string::String, vec::Vec};

use quickcheck::QuickCheck;

use crate::{
    GrowableCharBuffer,
    tests::{
        arbitrary::{AppendOp, InitialCapacity},
        utils::{buffer_with, split_chunks, test_count},
    },
};

/// Property: any mix of append calls leaves the buffer holding exactly the
/// concatenation of what each call appended.
#[test]
fn appends_match_string_model() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(capacity: InitialCapacity, ops: Vec<AppendOp>) -> bool {
        let mut buffer = buffer_with(capacity);
        let mut model = String::new();

        for op in &ops {
            model.push_str(&op.apply(&mut buffer));
            buffer.check_invariants();
            if buffer.materialize() != model {
                return false;
            }
        }

        buffer.len() == model.chars().count()
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(InitialCapacity, Vec<AppendOp>) -> bool);
}

/// Property: appending `a` then `b` is indistinguishable from appending
/// `a + b` in one call.
#[test]
fn concatenation_law() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(capacity: InitialCapacity, a: String, b: String) -> bool {
        let mut split = buffer_with(capacity);
        split.append(&a).append(&b);

        let mut joined = buffer_with(capacity);
        let mut ab = a.clone();
        ab.push_str(&b);
        joined.append(&ab);

        split.materialize() == joined.materialize() && split.capacity() == joined.capacity()
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(InitialCapacity, String, String) -> bool);
}

/// Property: feeding a string in arbitrary chunks yields the same content as
/// feeding it whole.
#[test]
fn partition_roundtrip() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(capacity: InitialCapacity, text: String, splits: Vec<usize>) -> bool {
        let mut buffer = buffer_with(capacity);
        for chunk in split_chunks(&text, &splits) {
            buffer.append(&chunk);
        }
        buffer.materialize() == text
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(InitialCapacity, String, Vec<usize>) -> bool);
}

/// Property: reading twice without appending in between yields equal
/// snapshots, and reading never changes the buffer.
#[test]
fn materialize_is_idempotent() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(ops: Vec<AppendOp>) -> bool {
        let mut buffer = GrowableCharBuffer::new();
        for op in &ops {
            op.apply(&mut buffer);
        }

        let (len, capacity) = (buffer.len(), buffer.capacity());
        let first = buffer.materialize();
        let second = buffer.materialize();
        let chars = buffer.materialize_chars();

        first == second
            && first.chars().eq(chars.iter().copied())
            && buffer.len() == len
            && buffer.capacity() == capacity
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Vec<AppendOp>) -> bool);
}

/// Property: a snapshot taken before further appends keeps its content.
#[test]
fn snapshots_are_detached() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(before: Vec<AppendOp>, after: Vec<AppendOp>) -> bool {
        let mut buffer = GrowableCharBuffer::new();
        for op in &before {
            op.apply(&mut buffer);
        }
        let snapshot = buffer.materialize();
        let expected = snapshot.clone();

        for op in &after {
            op.apply(&mut buffer);
        }

        snapshot == expected && buffer.materialize().starts_with(&snapshot)
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Vec<AppendOp>, Vec<AppendOp>) -> bool);
}
