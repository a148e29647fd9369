#![allow(missing_docs)]

use core::fmt::Write;

use charbuf::{BufferOptions, GrowableCharBuffer};

pub fn buffer_with_capacity(initial_capacity: usize) -> GrowableCharBuffer {
    GrowableCharBuffer::with_options(BufferOptions { initial_capacity })
        .expect("non-zero initial capacity")
}

/// Appends each part in turn and renders one line per append with the size,
/// capacity and content observed afterwards.
pub fn render_growth(initial_capacity: usize, parts: &[&str]) -> String {
    let mut buffer = buffer_with_capacity(initial_capacity);
    let mut out = String::new();
    for part in parts {
        buffer.append(part);
        writeln!(
            out,
            "size={} capacity={} {:?}",
            buffer.len(),
            buffer.capacity(),
            buffer.materialize()
        )
        .unwrap();
    }
    out
}
