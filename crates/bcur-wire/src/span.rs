use bytes::Bytes;

use crate::error::WireError;
use crate::int::{BitWidth, decode_be};
use crate::timestamp::UnixTime32;

/// A byte span that can be consumed from the front.
///
/// This is the one place the read algorithms live. Implementors only
/// say how to split and drop a prefix; every read operation is a
/// provided method built on [`read_bytes`](Span::read_bytes) and the
/// fixed-size array read.
///
/// ```text
///   remaining: [ 00 03 61 62 63 ff ]
///   read_u16 → 3           remaining: [ 61 62 63 ff ]
///   read_bytes(3) → "abc"  remaining: [ ff ]
///   read_u16 → Err(Eof)    remaining: [ ff ]   (unchanged)
/// ```
///
/// Two implementations ship with the crate:
///
///   - `&'a [u8]`: the caller owns the slice variable and every read
///     rewrites it in place. Returned views keep the original `'a`.
///   - [`Bytes`]: the span owns a reference-counted buffer. Returned
///     views share that buffer, nothing is copied.
///
/// The remaining span only ever shrinks.
pub trait Span: AsRef<[u8]> + Sized {
    /// Detach and return the first `n` bytes.
    ///
    /// The provided read methods check bounds first and only call this
    /// with `n <= self.as_ref().len()`. Prefer them over calling it
    /// directly.
    ///
    /// # Panics
    ///
    /// Implementations may panic if `n > self.as_ref().len()`; both
    /// shipped implementations do.
    fn split_front(&mut self, n: usize) -> Self;

    /// Drop the first `n` bytes.
    ///
    /// Same bounds contract as [`split_front`](Span::split_front).
    ///
    /// # Panics
    ///
    /// Implementations may panic if `n > self.as_ref().len()`; both
    /// shipped implementations do.
    fn consume_front(&mut self, n: usize);

    /// Remove the first `n` bytes and return them.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::UnexpectedEof`] if fewer than `n` bytes
    /// remain. The span is left untouched.
    fn read_bytes(&mut self, n: usize) -> Result<Self, WireError> {
        ensure_available(self.as_ref(), n)?;
        Ok(self.split_front(n))
    }

    /// Remove the first `n` bytes without returning them.
    ///
    /// # Errors
    ///
    /// Same as [`read_bytes`](Span::read_bytes).
    fn skip(&mut self, n: usize) -> Result<(), WireError> {
        ensure_available(self.as_ref(), n)?;
        self.consume_front(n);
        Ok(())
    }

    /// Remove the first `N` bytes and copy them into an array.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::UnexpectedEof`] if fewer than `N` bytes
    /// remain. The span is left untouched.
    fn read_array<const N: usize>(&mut self) -> Result<[u8; N], WireError> {
        let bytes: &[u8] = self.as_ref();
        ensure_available(bytes, N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(&bytes[..N]);
        self.consume_front(N);
        Ok(out)
    }

    /// # Errors
    ///
    /// [`WireError::UnexpectedEof`] on an empty span.
    fn read_u8(&mut self) -> Result<u8, WireError> {
        let [byte] = self.read_array::<1>()?;
        Ok(byte)
    }

    /// # Errors
    ///
    /// [`WireError::UnexpectedEof`] if fewer than 2 bytes remain.
    fn read_u16(&mut self) -> Result<u16, WireError> {
        Ok(u16::from_be_bytes(self.read_array::<2>()?))
    }

    /// Read a 3-byte big-endian integer, widened to `u32`.
    ///
    /// # Errors
    ///
    /// [`WireError::UnexpectedEof`] if fewer than 3 bytes remain.
    fn read_u24(&mut self) -> Result<u32, WireError> {
        Ok(decode_be(&self.read_array::<3>()?))
    }

    /// # Errors
    ///
    /// [`WireError::UnexpectedEof`] if fewer than 4 bytes remain.
    fn read_u32(&mut self) -> Result<u32, WireError> {
        Ok(u32::from_be_bytes(self.read_array::<4>()?))
    }

    /// Read an unsigned integer of the given width, widened to `u32`.
    ///
    /// # Errors
    ///
    /// [`WireError::UnexpectedEof`] if the span is shorter than the
    /// width's byte count.
    fn read_int(&mut self, width: BitWidth) -> Result<u32, WireError> {
        match width {
            BitWidth::U8 => self.read_u8().map(u32::from),
            BitWidth::U16 => self.read_u16().map(u32::from),
            BitWidth::U24 => self.read_u24(),
            BitWidth::U32 => self.read_u32(),
        }
    }

    /// Read a 32-bit count of seconds since the Unix epoch (GMT).
    ///
    /// # Errors
    ///
    /// [`WireError::UnexpectedEof`] if fewer than 4 bytes remain.
    fn read_timestamp32(&mut self) -> Result<UnixTime32, WireError> {
        self.read_u32().map(UnixTime32::from_secs)
    }

    /// Read a length-prefixed vector: a `width`-sized length `n`
    /// followed by `n` payload bytes.
    ///
    /// ```text
    ///   ┌──────────────────────┬─────────────────┐
    ///   │ n (width, BE)        │ payload [n]     │
    ///   └──────────────────────┴─────────────────┘
    /// ```
    ///
    /// This is a one-shot read, not a transaction. If the length decodes
    /// but the payload is short, the call fails and the length prefix
    /// stays consumed; the span then starts at the first payload byte.
    ///
    /// # Errors
    ///
    /// [`WireError::UnexpectedEof`] if either the prefix or the payload
    /// is short.
    fn read_vector(&mut self, width: BitWidth) -> Result<Self, WireError> {
        let len = self.read_int(width)?;
        self.read_bytes(len as usize)
    }
}

fn ensure_available(bytes: &[u8], needed: usize) -> Result<(), WireError> {
    if needed > bytes.len() {
        return Err(WireError::UnexpectedEof {
            needed,
            available: bytes.len(),
        });
    }
    Ok(())
}

impl<'a> Span for &'a [u8] {
    fn split_front(&mut self, n: usize) -> Self {
        // Copy the outer reference out so the halves keep `'a` rather
        // than the lifetime of `&mut self`.
        let whole: &'a [u8] = *self;
        let (head, tail) = whole.split_at(n);
        *self = tail;
        head
    }

    fn consume_front(&mut self, n: usize) {
        let whole: &'a [u8] = *self;
        *self = &whole[n..];
    }
}

impl Span for Bytes {
    fn split_front(&mut self, n: usize) -> Self {
        self.split_to(n)
    }

    fn consume_front(&mut self, n: usize) {
        bytes::Buf::advance(self, n);
    }
}
