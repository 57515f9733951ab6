// Free-function readers over a caller-owned `&[u8]`.
//
// Each function takes `&mut &[u8]` and rewrites the caller's slice to
// the unconsumed suffix on success. They are thin wrappers around the
// `Span` impl for `&[u8]`, for call sites that thread one slice through
// many helpers and would rather not import the trait or build a cursor:
//
//   let mut body: &[u8] = &record[5..];
//   let version = slice::read_u16(&mut body)?;
//   let random = slice::read_bytes(&mut body, 32)?;

use crate::error::WireError;
use crate::int::BitWidth;
use crate::span::Span;
use crate::timestamp::UnixTime32;

/// Remove the first `n` bytes of `input` and return them.
///
/// # Errors
///
/// [`WireError::UnexpectedEof`] if `input` is shorter than `n`; `input`
/// is left as it was.
pub fn read_bytes<'a>(input: &mut &'a [u8], n: usize) -> Result<&'a [u8], WireError> {
    Span::read_bytes(input, n)
}

/// # Errors
///
/// [`WireError::UnexpectedEof`] if `input` is shorter than `n`.
pub fn skip(input: &mut &[u8], n: usize) -> Result<(), WireError> {
    Span::skip(input, n)
}

/// # Errors
///
/// [`WireError::UnexpectedEof`] if `input` is empty.
pub fn read_u8(input: &mut &[u8]) -> Result<u8, WireError> {
    Span::read_u8(input)
}

/// # Errors
///
/// [`WireError::UnexpectedEof`] if `input` holds fewer than 2 bytes.
pub fn read_u16(input: &mut &[u8]) -> Result<u16, WireError> {
    Span::read_u16(input)
}

/// # Errors
///
/// [`WireError::UnexpectedEof`] if `input` holds fewer than 3 bytes.
pub fn read_u24(input: &mut &[u8]) -> Result<u32, WireError> {
    Span::read_u24(input)
}

/// # Errors
///
/// [`WireError::UnexpectedEof`] if `input` holds fewer than 4 bytes.
pub fn read_u32(input: &mut &[u8]) -> Result<u32, WireError> {
    Span::read_u32(input)
}

/// # Errors
///
/// [`WireError::UnexpectedEof`] if `input` is shorter than the width.
pub fn read_int(input: &mut &[u8], width: BitWidth) -> Result<u32, WireError> {
    Span::read_int(input, width)
}

/// # Errors
///
/// [`WireError::UnexpectedEof`] if `input` holds fewer than 4 bytes.
pub fn read_timestamp32(input: &mut &[u8]) -> Result<UnixTime32, WireError> {
    Span::read_timestamp32(input)
}

/// Read a `width`-prefixed vector. A short payload fails with the
/// prefix already consumed from `input`.
///
/// # Errors
///
/// [`WireError::UnexpectedEof`] if the prefix or the payload is short.
pub fn read_vector<'a>(input: &mut &'a [u8], width: BitWidth) -> Result<&'a [u8], WireError> {
    Span::read_vector(input, width)
}
