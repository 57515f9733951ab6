//! Behavioural properties of the span readers, checked over every split
//! point of a few small buffers rather than a handful of hand-picked
//! cases.

use bcur_stream::StreamCursor;
use bcur_tests::{encode_int, encode_vector, from_hex};
use bcur_wire::{BitWidth, ByteCursor, Span, WireError};

fn samples() -> Vec<Vec<u8>> {
    vec![
        Vec::new(),
        vec![0x00],
        from_hex("0102030405"),
        from_hex("ffffffffffffffff"),
        (0u8..=40).collect(),
    ]
}

#[test]
fn read_bytes_within_bounds_splits_the_span() {
    for s in samples() {
        for n in 0..=s.len() {
            let mut span: &[u8] = &s;
            assert_eq!(span.read_bytes(n).unwrap(), &s[..n]);
            assert_eq!(span, &s[n..]);

            let mut cursor = ByteCursor::new(s.clone());
            assert_eq!(&cursor.read_bytes(n).unwrap()[..], &s[..n]);
            assert_eq!(cursor.remaining_bytes(), &s[n..]);
            assert_eq!(cursor.position(), n);
        }
    }
}

#[test]
fn read_bytes_out_of_bounds_changes_nothing() {
    for s in samples() {
        for extra in [1, 2, 1000] {
            let n = s.len() + extra;

            let mut span: &[u8] = &s;
            assert_eq!(
                span.read_bytes(n).unwrap_err(),
                WireError::UnexpectedEof {
                    needed: n,
                    available: s.len()
                }
            );
            assert_eq!(span, &s[..]);

            let mut cursor = ByteCursor::new(s.clone());
            assert!(cursor.skip(n).unwrap_err().is_eof());
            assert_eq!(cursor.position(), 0);
        }
    }
}

#[test]
fn integers_roundtrip_at_every_width() {
    for width in BitWidth::ALL {
        let max = width.max_value();
        for value in [0, 1, 0xFF & max, max >> 1, max - 1, max] {
            let encoded = encode_int(value, width);
            assert_eq!(encoded.len(), width.byte_len());

            let mut span: &[u8] = &encoded;
            assert_eq!(span.read_int(width).unwrap(), value, "{width:?}");

            let mut stream = StreamCursor::new(encoded.as_slice());
            assert_eq!(stream.read_int(width).unwrap(), value, "{width:?}");
        }
    }
}

#[test]
fn width_specific_readers_agree_with_read_int() {
    let data = from_hex("a1b2c3d4");
    for width in BitWidth::ALL {
        let mut generic: &[u8] = &data;
        let mut specific: &[u8] = &data;
        let expected = match width {
            BitWidth::U8 => u32::from(specific.read_u8().unwrap()),
            BitWidth::U16 => u32::from(specific.read_u16().unwrap()),
            BitWidth::U24 => specific.read_u24().unwrap(),
            BitWidth::U32 => specific.read_u32().unwrap(),
        };
        assert_eq!(generic.read_int(width).unwrap(), expected);
        assert_eq!(generic, specific);
    }
}

#[test]
fn vectors_roundtrip_and_leave_the_tail() {
    let payloads: [&[u8]; 3] = [b"", b"x", &[0x5A; 300]];
    for width in BitWidth::ALL {
        for payload in payloads {
            if payload.len() as u32 > width.max_value() {
                continue;
            }
            let mut wire = encode_vector(payload, width);
            wire.extend_from_slice(b"tail");

            let mut span: &[u8] = &wire;
            assert_eq!(span.read_vector(width).unwrap(), payload);
            assert_eq!(span, b"tail");
        }
    }
}

#[test]
fn short_vector_payload_never_restores_the_prefix() {
    for width in BitWidth::ALL {
        let mut wire = encode_int(10, width);
        wire.extend_from_slice(&[0xEE; 4]);

        let mut span: &[u8] = &wire;
        assert_eq!(
            span.read_vector(width).unwrap_err(),
            WireError::UnexpectedEof {
                needed: 10,
                available: 4
            }
        );
        assert_eq!(span, &[0xEE; 4], "{width:?}");
    }
}

#[test]
fn timestamp_one_is_one_second_after_epoch() {
    let mut span: &[u8] = &[0x00, 0x00, 0x00, 0x01];
    let ts = span.read_timestamp32().unwrap();
    assert_eq!(ts.secs(), 1);
    assert_eq!(
        ts.to_system_time()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_secs(),
        1
    );
}
