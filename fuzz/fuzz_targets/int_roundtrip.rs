#![no_main]

use bcur_wire::{BitWidth, Span};
use libfuzzer_sys::fuzz_target;

// Fuzz target: big-endian integer encode->decode roundtrip.
//
// Takes 4 bytes of fuzz input as a u32, masks it to each width, keeps
// the low `byte_len` bytes of its big-endian form, and asserts the
// width-specific reader returns the masked value and consumes exactly
// that many bytes.
fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    let value = u32::from_be_bytes(data[..4].try_into().unwrap());

    for width in BitWidth::ALL {
        let masked = value & width.max_value();
        let full = masked.to_be_bytes();
        let mut span: &[u8] = &full[4 - width.byte_len()..];

        assert_eq!(span.read_int(width).unwrap(), masked);
        assert!(span.is_empty());
    }
});
