#![no_main]

use bcur_stream::{ReadLimits, StreamCursor};
use bcur_wire::BitWidth;
use libfuzzer_sys::fuzz_target;

// Fuzz target: StreamCursor over arbitrary bytes.
//
// The first byte picks a field layout; the rest is the stream. Reads
// continue until the first error. Catches bugs in:
// - Position accounting (never beyond the input length)
// - Vector length prefixes larger than the limit or the input
// - Partial-field handling at end of stream
fuzz_target!(|data: &[u8]| {
    let Some((&layout, rest)) = data.split_first() else {
        return;
    };
    let width = BitWidth::ALL[usize::from(layout & 0b11)];
    let mut stream = StreamCursor::with_limits(rest, ReadLimits::with_max_read_len(4096));

    loop {
        let before = stream.position();
        let ok = match layout >> 2 & 0b11 {
            0 => stream.read_int(width).is_ok(),
            1 => stream.read_vector(width).is_ok(),
            2 => stream.read_timestamp32().is_ok(),
            _ => stream.skip(usize::from(layout >> 4)).is_ok(),
        };
        assert!(stream.position() >= before);
        assert!(stream.position() <= rest.len() as u64);
        if !ok || stream.position() == before {
            break;
        }
    }
});
