//! Shared fixtures for the integration tests and benches.
//!
//! The main fixture is a TLS 1.2-style `ServerHello` handshake message,
//! which exercises every field kind the cursors support:
//!
//! ```text
//!   02                      handshake type        u8
//!   00 00 31                body length           u24
//!   03 03                   server version        u16
//!   5f 5e 10 00             gmt_unix_time         u32 (1_600_000_000)
//!   a1 × 28                 random bytes          fixed 28
//!   04 de ad be ef          session id            u8-prefixed vector
//!   c0 2f                   cipher suite          u16
//!   00                      compression method    u8
//!   00 05 ff 01 00 01 00    extensions            u16-prefixed vector
//! ```

use bcur_wire::BitWidth;

/// Hex of the `ServerHello` fixture described in the module docs.
pub const SERVER_HELLO_HEX: &str = concat!(
    "02",
    "000031",
    "0303",
    "5f5e1000",
    "a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1",
    "04deadbeef",
    "c02f",
    "00",
    "0005ff01000100",
);

/// Decoded form of the fixture, independent of the cursor that read it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerHello {
    pub handshake_type: u8,
    pub body_len: u32,
    pub version: u16,
    pub gmt_unix_time: u32,
    pub random: Vec<u8>,
    pub session_id: Vec<u8>,
    pub cipher_suite: u16,
    pub compression: u8,
    pub extensions: Vec<u8>,
}

impl ServerHello {
    /// The value every cursor must produce for [`SERVER_HELLO_HEX`].
    #[must_use]
    pub fn expected() -> Self {
        Self {
            handshake_type: 0x02,
            body_len: 0x31,
            version: 0x0303,
            gmt_unix_time: 1_600_000_000,
            random: vec![0xA1; 28],
            session_id: vec![0xDE, 0xAD, 0xBE, 0xEF],
            cipher_suite: 0xC02F,
            compression: 0,
            extensions: vec![0xFF, 0x01, 0x00, 0x01, 0x00],
        }
    }
}

/// Decode a hex fixture.
///
/// # Panics
///
/// Panics if `s` is not valid hex; fixtures are compile-time constants.
#[must_use]
pub fn from_hex(s: &str) -> Vec<u8> {
    hex::decode(s).unwrap_or_else(|e| panic!("bad hex fixture {s:?}: {e}"))
}

#[must_use]
pub fn server_hello_bytes() -> Vec<u8> {
    from_hex(SERVER_HELLO_HEX)
}

/// Encode `value` as a big-endian integer of `width`.
///
/// # Panics
///
/// Panics if `value` does not fit the width.
#[must_use]
pub fn encode_int(value: u32, width: BitWidth) -> Vec<u8> {
    assert!(value <= width.max_value(), "{value:#X} does not fit {width:?}");
    value.to_be_bytes()[4 - width.byte_len()..].to_vec()
}

/// Encode a `width`-prefixed vector.
///
/// # Panics
///
/// Panics if the payload length does not fit the width.
#[must_use]
pub fn encode_vector(payload: &[u8], width: BitWidth) -> Vec<u8> {
    let len = u32::try_from(payload.len()).unwrap_or(u32::MAX);
    let mut out = encode_int(len, width);
    out.extend_from_slice(payload);
    out
}
