#![no_main]

use arbitrary::Arbitrary;
use charbuf::{BufferOptions, GrowableCharBuffer};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Op {
    Append(String),
    AppendChars(Vec<char>),
    Push(char),
    Reserve(u16),
    Materialize,
}

#[derive(Debug, Arbitrary)]
struct Input {
    initial_capacity: u8,
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    let initial_capacity = usize::from(input.initial_capacity);
    let Ok(mut buffer) = GrowableCharBuffer::with_options(BufferOptions { initial_capacity }) else {
        assert_eq!(initial_capacity, 0);
        return;
    };

    let mut model = String::new();
    let mut snapshots = Vec::new();

    for op in input.ops {
        let before = buffer.capacity();
        match op {
            Op::Append(text) => {
                buffer.append(&text);
                model.push_str(&text);
            }
            Op::AppendChars(chars) => {
                buffer.append_chars(&chars);
                model.extend(chars);
            }
            Op::Push(ch) => {
                buffer.push(ch);
                model.push(ch);
            }
            Op::Reserve(additional) => {
                let additional = usize::from(additional);
                buffer.reserve(additional);
                assert!(buffer.capacity() >= buffer.len() + additional);
            }
            Op::Materialize => snapshots.push((model.clone(), buffer.materialize())),
        }

        buffer.check_invariants();
        let capacity = buffer.capacity();
        assert!(capacity >= before);
        assert_eq!(capacity % initial_capacity, 0);
        assert!((capacity / initial_capacity).is_power_of_two());
        assert_eq!(buffer.len(), model.chars().count());
    }

    assert_eq!(buffer.materialize(), model);
    for (expected, snapshot) in snapshots {
        assert_eq!(expected, snapshot);
    }
});
