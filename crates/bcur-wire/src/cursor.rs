use bytes::Bytes;

use crate::error::WireError;
use crate::int::BitWidth;
use crate::span::Span;
use crate::timestamp::UnixTime32;

/// Owned-buffer cursor over a complete message.
///
/// `ByteCursor` holds a [`Bytes`] buffer and consumes it from the front.
/// Byte and vector reads hand back `Bytes` views into that same buffer,
/// so decoding a message never copies its payloads. All reads delegate
/// to [`Span`]; the cursor only adds position bookkeeping.
///
/// ```text
///   ┌──────────── original buffer ────────────┐
///   │ consumed        │ remaining              │
///   └─────────────────┴────────────────────────┘
///                     ^ position()
/// ```
///
/// A failed read leaves the cursor exactly where it was, except for
/// [`read_vector`](Self::read_vector), which keeps a decoded length
/// prefix consumed when the payload turns out to be short.
///
/// # Example
///
/// ```rust
/// use bcur_wire::{BitWidth, ByteCursor};
///
/// let mut cursor = ByteCursor::new(&b"\x03\x00\x02hi"[..]);
/// assert_eq!(cursor.read_u8().unwrap(), 3);
/// assert_eq!(&cursor.read_vector(BitWidth::U16).unwrap()[..], b"hi");
/// assert!(cursor.is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct ByteCursor {
    buf: Bytes,
    initial_len: usize,
}

impl ByteCursor {
    /// Wrap a buffer. Accepts anything convertible to [`Bytes`]:
    /// `Vec<u8>`, `&'static [u8]`, `Bytes` itself.
    pub fn new(buf: impl Into<Bytes>) -> Self {
        let buf = buf.into();
        let initial_len = buf.len();
        Self { buf, initial_len }
    }

    /// Bytes consumed since the cursor was created.
    #[must_use]
    pub fn position(&self) -> usize {
        self.initial_len - self.buf.len()
    }

    /// Bytes not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.buf.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Peek at the unconsumed bytes without advancing.
    #[must_use]
    pub fn remaining_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Give up the cursor and keep whatever was not consumed.
    #[must_use]
    pub fn into_remaining(self) -> Bytes {
        self.buf
    }

    /// # Errors
    ///
    /// [`WireError::UnexpectedEof`] if fewer than `n` bytes remain.
    pub fn read_bytes(&mut self, n: usize) -> Result<Bytes, WireError> {
        self.buf.read_bytes(n)
    }

    /// # Errors
    ///
    /// [`WireError::UnexpectedEof`] if fewer than `n` bytes remain.
    pub fn skip(&mut self, n: usize) -> Result<(), WireError> {
        self.buf.skip(n)
    }

    /// # Errors
    ///
    /// [`WireError::UnexpectedEof`] if the cursor is empty.
    pub fn read_u8(&mut self) -> Result<u8, WireError> {
        self.buf.read_u8()
    }

    /// # Errors
    ///
    /// [`WireError::UnexpectedEof`] if fewer than 2 bytes remain.
    pub fn read_u16(&mut self) -> Result<u16, WireError> {
        self.buf.read_u16()
    }

    /// # Errors
    ///
    /// [`WireError::UnexpectedEof`] if fewer than 3 bytes remain.
    pub fn read_u24(&mut self) -> Result<u32, WireError> {
        self.buf.read_u24()
    }

    /// # Errors
    ///
    /// [`WireError::UnexpectedEof`] if fewer than 4 bytes remain.
    pub fn read_u32(&mut self) -> Result<u32, WireError> {
        self.buf.read_u32()
    }

    /// # Errors
    ///
    /// [`WireError::UnexpectedEof`] if fewer than `width.byte_len()`
    /// bytes remain.
    pub fn read_int(&mut self, width: BitWidth) -> Result<u32, WireError> {
        self.buf.read_int(width)
    }

    /// # Errors
    ///
    /// [`WireError::UnexpectedEof`] if fewer than 4 bytes remain.
    pub fn read_timestamp32(&mut self) -> Result<UnixTime32, WireError> {
        self.buf.read_timestamp32()
    }

    /// Read a `width`-prefixed vector. See [`Span::read_vector`].
    ///
    /// # Errors
    ///
    /// [`WireError::UnexpectedEof`] if the prefix or the payload is short.
    pub fn read_vector(&mut self, width: BitWidth) -> Result<Bytes, WireError> {
        self.buf.read_vector(width)
    }
}

impl From<Bytes> for ByteCursor {
    fn from(buf: Bytes) -> Self {
        Self::new(buf)
    }
}

impl From<Vec<u8>> for ByteCursor {
    fn from(buf: Vec<u8>) -> Self {
        Self::new(buf)
    }
}
