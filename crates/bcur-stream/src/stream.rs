use std::io::{self, Read};

use bcur_wire::int::{BitWidth, decode_be};
use bcur_wire::UnixTime32;
use tracing::{debug, trace};

use crate::error::StreamError;
use crate::limits::{ReadLimits, SKIP_CHUNK};

/// Blocking cursor over any [`Read`] source.
///
/// Speaks the same field vocabulary as `ByteCursor` but pulls bytes on
/// demand. The important difference from a span is that one call to
/// [`Read::read`] may return fewer bytes than asked for without the
/// source being exhausted. Every read here keeps calling the source
/// until the field is complete, and only a `read` returning `Ok(0)`
/// counts as end-of-input:
///
/// ```text
///   read_u32()
///     source.read(4 wanted) → 1   trace: short read, continuing
///     source.read(3 wanted) → 2   trace: short read, continuing
///     source.read(1 wanted) → 1   done, decode [b0 b1 b2 b3]
///
///   read_u32() on a source holding 2 bytes
///     source.read(4 wanted) → 2
///     source.read(2 wanted) → 0   Err(UnexpectedEof { read: 2, .. })
/// ```
///
/// `ErrorKind::Interrupted` is retried; every other I/O error is
/// returned as [`StreamError::Io`]. Integer reads never decode a
/// partial field.
///
/// Byte and vector reads materialize a fresh `Vec<u8>`, bounded by
/// [`ReadLimits`]. The cursor itself does no buffering; wrap the source
/// in a `BufReader` if it is expensive to call.
pub struct StreamCursor<R> {
    reader: R,
    position: u64,
    limits: ReadLimits,
}

impl<R: Read> StreamCursor<R> {
    /// Create a cursor with [`ReadLimits::default`].
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self::with_limits(reader, ReadLimits::default())
    }

    #[must_use]
    pub fn with_limits(reader: R, limits: ReadLimits) -> Self {
        Self {
            reader,
            position: 0,
            limits,
        }
    }

    /// Bytes consumed from the source so far, including bytes of a
    /// field that failed with end-of-input.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.position
    }

    #[must_use]
    pub fn limits(&self) -> ReadLimits {
        self.limits
    }

    #[must_use]
    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    #[must_use]
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Read exactly `n` bytes into a new buffer.
    ///
    /// # Errors
    ///
    /// - [`StreamError::ReadTooLarge`] if `n` exceeds the limits.
    /// - [`StreamError::UnexpectedEof`] if the source ends first.
    /// - [`StreamError::Io`] on a transport error.
    pub fn read_bytes(&mut self, n: usize) -> Result<Vec<u8>, StreamError> {
        self.limits.check(n)?;
        let mut buf = vec![0u8; n];
        self.fill(&mut buf)?;
        Ok(buf)
    }

    /// Consume and discard exactly `n` bytes.
    ///
    /// # Errors
    ///
    /// [`StreamError::UnexpectedEof`] if the source ends first,
    /// [`StreamError::Io`] on a transport error.
    pub fn skip(&mut self, n: usize) -> Result<(), StreamError> {
        let start = self.position;
        let mut scratch = [0u8; SKIP_CHUNK];
        let mut read = 0;

        while read < n {
            let want = (n - read).min(SKIP_CHUNK);
            match self.reader.read(&mut scratch[..want]) {
                Ok(0) => {
                    debug!(offset = start, needed = n, read, "stream ended during skip");
                    return Err(StreamError::UnexpectedEof {
                        offset: start,
                        needed: n,
                        read,
                    });
                }
                Ok(got) => {
                    read += got;
                    self.position += got as u64;
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }

    /// # Errors
    ///
    /// See [`read_bytes`](Self::read_bytes).
    pub fn read_u8(&mut self) -> Result<u8, StreamError> {
        let [byte] = self.read_array::<1>()?;
        Ok(byte)
    }

    /// # Errors
    ///
    /// See [`read_bytes`](Self::read_bytes).
    pub fn read_u16(&mut self) -> Result<u16, StreamError> {
        Ok(u16::from_be_bytes(self.read_array::<2>()?))
    }

    /// # Errors
    ///
    /// See [`read_bytes`](Self::read_bytes).
    pub fn read_u24(&mut self) -> Result<u32, StreamError> {
        Ok(decode_be(&self.read_array::<3>()?))
    }

    /// # Errors
    ///
    /// See [`read_bytes`](Self::read_bytes).
    pub fn read_u32(&mut self) -> Result<u32, StreamError> {
        Ok(u32::from_be_bytes(self.read_array::<4>()?))
    }

    /// # Errors
    ///
    /// See [`read_bytes`](Self::read_bytes).
    pub fn read_int(&mut self, width: BitWidth) -> Result<u32, StreamError> {
        match width {
            BitWidth::U8 => self.read_u8().map(u32::from),
            BitWidth::U16 => self.read_u16().map(u32::from),
            BitWidth::U24 => self.read_u24(),
            BitWidth::U32 => self.read_u32(),
        }
    }

    /// # Errors
    ///
    /// See [`read_bytes`](Self::read_bytes).
    pub fn read_timestamp32(&mut self) -> Result<UnixTime32, StreamError> {
        self.read_u32().map(UnixTime32::from_secs)
    }

    /// Read a `width`-prefixed vector.
    ///
    /// The length prefix is consumed even when the payload read fails,
    /// whether from end-of-input or from exceeding the limits.
    ///
    /// # Errors
    ///
    /// See [`read_bytes`](Self::read_bytes).
    pub fn read_vector(&mut self, width: BitWidth) -> Result<Vec<u8>, StreamError> {
        let len = self.read_int(width)?;
        self.read_bytes(len as usize)
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N], StreamError> {
        let mut out = [0u8; N];
        self.fill(&mut out)?;
        Ok(out)
    }

    /// Keep reading until `buf` is full or the source gives up.
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), StreamError> {
        let start = self.position;
        let needed = buf.len();
        let mut read = 0;

        while read < needed {
            match self.reader.read(&mut buf[read..]) {
                Ok(0) => {
                    debug!(offset = start, needed, read, "stream ended mid-field");
                    return Err(StreamError::UnexpectedEof {
                        offset: start,
                        needed,
                        read,
                    });
                }
                Ok(got) => {
                    read += got;
                    self.position += got as u64;
                    if read < needed {
                        trace!(got, read, needed, "short read, continuing");
                    }
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    /// Hands out at most one byte per `read` call.
    struct Trickle<'a>(&'a [u8]);

    impl Read for Trickle<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match (self.0.split_first(), buf.first_mut()) {
                (Some((&byte, rest)), Some(slot)) => {
                    *slot = byte;
                    self.0 = rest;
                    Ok(1)
                }
                _ => Ok(0),
            }
        }
    }

    /// Fails every other call with `Interrupted`.
    struct Flaky<R> {
        inner: R,
        interrupt_next: bool,
    }

    impl<R: Read> Read for Flaky<R> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.interrupt_next = !self.interrupt_next;
            if self.interrupt_next {
                return Err(io::Error::from(io::ErrorKind::Interrupted));
            }
            self.inner.read(buf)
        }
    }

    /// Yields its bytes, then a hard transport error.
    struct Broken<'a>(&'a [u8]);

    impl Read for Broken<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.0.is_empty() {
                return Err(io::Error::new(io::ErrorKind::ConnectionReset, "peer reset"));
            }
            let n = self.0.read(buf)?;
            Ok(n)
        }
    }

    #[test]
    fn reads_fields_in_order() {
        let data = [0x07u8, 0x01, 0x02, 0x00, 0x00, 0x03, 0xDE, 0xAD, 0xBE, 0xEF];
        let mut stream = StreamCursor::new(Cursor::new(data));
        assert_eq!(stream.read_u8().unwrap(), 0x07);
        assert_eq!(stream.read_u16().unwrap(), 0x0102);
        assert_eq!(stream.read_u24().unwrap(), 0x03);
        assert_eq!(stream.read_u32().unwrap(), 0xDEAD_BEEF);
        assert_eq!(stream.position(), 10);
    }

    #[test]
    fn one_byte_per_call_still_fills_u32() {
        let mut stream = StreamCursor::new(Trickle(&[0x12, 0x34, 0x56, 0x78]));
        assert_eq!(stream.read_u32().unwrap(), 0x1234_5678);
        assert_eq!(stream.position(), 4);
    }

    #[test]
    fn one_byte_per_call_fills_vector() {
        let mut stream = StreamCursor::new(Trickle(&[0x00, 0x03, b'a', b'b', b'c']));
        assert_eq!(stream.read_vector(BitWidth::U16).unwrap(), b"abc");
    }

    #[test]
    fn exhausted_after_two_of_four_bytes_is_eof() {
        let mut stream = StreamCursor::new(Trickle(&[0xAA, 0xBB]));
        let err = stream.read_u32().unwrap_err();
        assert!(err.is_eof());
        assert!(matches!(
            err,
            StreamError::UnexpectedEof {
                offset: 0,
                needed: 4,
                read: 2
            }
        ));
        assert_eq!(stream.position(), 2);
    }

    #[test]
    fn eof_offset_is_field_start() {
        let mut stream = StreamCursor::new(Cursor::new([0x01u8, 0x02, 0x03]));
        stream.read_u16().unwrap();
        assert!(matches!(
            stream.read_u16(),
            Err(StreamError::UnexpectedEof {
                offset: 2,
                needed: 2,
                read: 1
            })
        ));
    }

    #[test]
    fn interrupted_reads_are_retried() {
        let flaky = Flaky {
            inner: Cursor::new([0x00u8, 0x00, 0x01, 0x00]),
            interrupt_next: false,
        };
        let mut stream = StreamCursor::new(flaky);
        assert_eq!(stream.read_u32().unwrap(), 0x100);
    }

    #[test]
    fn transport_error_is_not_eof() {
        let mut stream = StreamCursor::new(Broken(&[0x01]));
        let err = stream.read_u16().unwrap_err();
        assert!(!err.is_eof());
        match err {
            StreamError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::ConnectionReset),
            other => panic!("expected Io, got {other:?}"),
        }
    }

    #[test]
    fn transport_error_during_skip_keeps_consumed_bytes_counted() {
        let mut stream = StreamCursor::new(Broken(&[0x01, 0x02, 0x03]));
        let err = stream.skip(10).unwrap_err();
        assert!(matches!(err, StreamError::Io(ref e) if e.kind() == io::ErrorKind::ConnectionReset));
        assert_eq!(stream.position(), 3);

        // Same accounting as a materializing read over the same source.
        let mut stream = StreamCursor::new(Broken(&[0x01, 0x02, 0x03]));
        assert!(stream.read_bytes(10).is_err());
        assert_eq!(stream.position(), 3);
    }

    #[test]
    fn skip_longer_than_scratch_buffer() {
        let data = vec![0u8; SKIP_CHUNK * 2 + 5];
        let mut stream = StreamCursor::new(Cursor::new(data));
        stream.skip(SKIP_CHUNK * 2 + 1).unwrap();
        assert_eq!(stream.position(), (SKIP_CHUNK * 2 + 1) as u64);
        assert!(matches!(
            stream.skip(10),
            Err(StreamError::UnexpectedEof { needed: 10, read: 4, .. })
        ));
    }

    #[test]
    fn interrupted_skip_is_retried() {
        let flaky = Flaky {
            inner: Cursor::new([0xFFu8, 0xFF, 0x07]),
            interrupt_next: false,
        };
        let mut stream = StreamCursor::new(flaky);
        stream.skip(2).unwrap();
        assert_eq!(stream.read_u8().unwrap(), 0x07);
    }

    #[test]
    fn read_bytes_zero_touches_nothing() {
        let mut stream = StreamCursor::new(Cursor::new(Vec::<u8>::new()));
        assert_eq!(stream.read_bytes(0).unwrap(), Vec::<u8>::new());
        stream.skip(0).unwrap();
        assert_eq!(stream.position(), 0);
    }

    #[test]
    fn skip_discards_and_advances() {
        let mut stream = StreamCursor::new(Trickle(&[0xFF, 0xFF, 0xFF, 0x2A]));
        stream.skip(3).unwrap();
        assert_eq!(stream.position(), 3);
        assert_eq!(stream.read_u8().unwrap(), 0x2A);
    }

    #[test]
    fn skip_past_end_is_eof() {
        let mut stream = StreamCursor::new(Cursor::new([0x01u8, 0x02]));
        assert!(matches!(
            stream.skip(5),
            Err(StreamError::UnexpectedEof {
                offset: 0,
                needed: 5,
                read: 2
            })
        ));
        assert_eq!(stream.position(), 2);
    }

    #[test]
    fn oversized_vector_rejected_after_prefix() {
        let limits = ReadLimits::with_max_read_len(4);
        let data = [0x00u8, 0x00, 0x00, 0x10, 0xAA];
        let mut stream = StreamCursor::with_limits(Cursor::new(data), limits);
        assert!(matches!(
            stream.read_vector(BitWidth::U32),
            Err(StreamError::ReadTooLarge {
                requested: 16,
                limit: 4
            })
        ));
        // Prefix consumed, payload untouched.
        assert_eq!(stream.position(), 4);
        assert_eq!(stream.read_u8().unwrap(), 0xAA);
    }

    #[test]
    fn timestamp_from_stream() {
        let mut stream = StreamCursor::new(Cursor::new([0x00u8, 0x00, 0x00, 0x01]));
        assert_eq!(stream.read_timestamp32().unwrap().secs(), 1);
    }

    #[test]
    fn into_inner_returns_source_at_current_position() {
        let mut stream = StreamCursor::new(Cursor::new([0x01u8, 0x02, 0x03]));
        stream.read_u8().unwrap();
        let inner = stream.into_inner();
        assert_eq!(inner.position(), 1);
    }
}
