#![no_main]

use arbitrary::Arbitrary;
use bcur_wire::{BitWidth, ByteCursor, Span, WireError};
use libfuzzer_sys::fuzz_target;

// Fuzz target: arbitrary read sequences over arbitrary bytes.
//
// Runs the same operations against a borrowed `&[u8]` span and an owned
// `ByteCursor` and asserts they agree on every result and on how much
// input is left. Catches bugs in:
// - Bounds checks (reads past the end must fail, never panic)
// - Failed reads that still consume input
// - Vector prefix handling on short payloads

#[derive(Arbitrary, Debug)]
enum Op {
    Bytes(u16),
    Skip(u16),
    U8,
    U16,
    U24,
    U32,
    Int(u8),
    Vector(u8),
    Timestamp,
}

#[derive(Arbitrary, Debug)]
struct Input {
    data: Vec<u8>,
    ops: Vec<Op>,
}

fn step(span: &mut &[u8], cursor: &mut ByteCursor, op: &Op) -> Result<(), WireError> {
    match *op {
        Op::Bytes(n) => {
            let a = span.read_bytes(usize::from(n));
            let b = cursor.read_bytes(usize::from(n));
            assert_eq!(a.map(<[u8]>::to_vec), b.map(|v| v.to_vec()));
        }
        Op::Skip(n) => assert_eq!(span.skip(usize::from(n)), cursor.skip(usize::from(n))),
        Op::U8 => assert_eq!(span.read_u8(), cursor.read_u8()),
        Op::U16 => assert_eq!(span.read_u16(), cursor.read_u16()),
        Op::U24 => assert_eq!(span.read_u24(), cursor.read_u24()),
        Op::U32 => assert_eq!(span.read_u32(), cursor.read_u32()),
        Op::Int(bits) => {
            let width = BitWidth::from_bits(u32::from(bits))?;
            assert_eq!(span.read_int(width), cursor.read_int(width));
        }
        Op::Vector(bits) => {
            let width = BitWidth::from_bits(u32::from(bits))?;
            let a = span.read_vector(width);
            let b = cursor.read_vector(width);
            assert_eq!(a.map(<[u8]>::to_vec), b.map(|v| v.to_vec()));
        }
        Op::Timestamp => assert_eq!(span.read_timestamp32(), cursor.read_timestamp32()),
    }
    Ok(())
}

fuzz_target!(|input: Input| {
    let mut span: &[u8] = &input.data;
    let mut cursor = ByteCursor::new(input.data.clone());

    for op in &input.ops {
        let before = span.len();
        if let Err(e) = step(&mut span, &mut cursor, op) {
            // Only an unsupported width escapes `step`, and it consumes nothing.
            assert!(!e.is_eof());
            assert_eq!(span.len(), before);
        }
        assert!(span.len() <= before);
        assert_eq!(span, cursor.remaining_bytes());
        assert_eq!(cursor.position(), input.data.len() - span.len());
    }
});
