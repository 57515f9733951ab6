use std::io;

use bcur_wire::int::{BitWidth, decode_be};
use bcur_wire::UnixTime32;
use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::{debug, trace};

use crate::error::StreamError;
use crate::limits::{ReadLimits, SKIP_CHUNK};

/// Asynchronous counterpart of [`StreamCursor`](crate::StreamCursor)
/// over any tokio [`AsyncRead`].
///
/// Same vocabulary, same contract: partial reads are accumulated until
/// the field is complete, `Ok(0)` is end-of-input, `Interrupted` is
/// retried, and byte/vector reads are bounded by [`ReadLimits`].
/// Each `read_*` future borrows the cursor mutably, so a cursor drives
/// exactly one decode sequence at a time.
///
/// # Example
///
/// ```rust,no_run
/// use bcur_stream::AsyncStreamCursor;
/// use bcur_wire::BitWidth;
/// use tokio::io::AsyncRead;
///
/// async fn session_id(reader: impl AsyncRead + Unpin) -> Vec<u8> {
///     let mut cursor = AsyncStreamCursor::new(reader);
///     cursor.skip(2).await.unwrap();
///     cursor.read_vector(BitWidth::U8).await.unwrap()
/// }
/// ```
pub struct AsyncStreamCursor<R> {
    reader: R,
    position: u64,
    limits: ReadLimits,
}

impl<R: AsyncRead + Unpin> AsyncStreamCursor<R> {
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

    #[must_use]
    pub fn position(&self) -> u64 {
        self.position
    }

    #[must_use]
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// # Errors
    ///
    /// - [`StreamError::ReadTooLarge`] if `n` exceeds the limits.
    /// - [`StreamError::UnexpectedEof`] if the source ends first.
    /// - [`StreamError::Io`] on a transport error.
    pub async fn read_bytes(&mut self, n: usize) -> Result<Vec<u8>, StreamError> {
        self.limits.check(n)?;
        let mut buf = vec![0u8; n];
        self.fill(&mut buf).await?;
        Ok(buf)
    }

    /// # Errors
    ///
    /// [`StreamError::UnexpectedEof`] if the source ends first,
    /// [`StreamError::Io`] on a transport error.
    pub async fn skip(&mut self, n: usize) -> Result<(), StreamError> {
        let start = self.position;
        let mut scratch = [0u8; SKIP_CHUNK];
        let mut read = 0;

        while read < n {
            let want = (n - read).min(SKIP_CHUNK);
            match self.reader.read(&mut scratch[..want]).await {
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
    pub async fn read_u8(&mut self) -> Result<u8, StreamError> {
        let [byte] = self.read_array::<1>().await?;
        Ok(byte)
    }

    /// # Errors
    ///
    /// See [`read_bytes`](Self::read_bytes).
    pub async fn read_u16(&mut self) -> Result<u16, StreamError> {
        Ok(u16::from_be_bytes(self.read_array::<2>().await?))
    }

    /// # Errors
    ///
    /// See [`read_bytes`](Self::read_bytes).
    pub async fn read_u24(&mut self) -> Result<u32, StreamError> {
        Ok(decode_be(&self.read_array::<3>().await?))
    }

    /// # Errors
    ///
    /// See [`read_bytes`](Self::read_bytes).
    pub async fn read_u32(&mut self) -> Result<u32, StreamError> {
        Ok(u32::from_be_bytes(self.read_array::<4>().await?))
    }

    /// # Errors
    ///
    /// See [`read_bytes`](Self::read_bytes).
    pub async fn read_int(&mut self, width: BitWidth) -> Result<u32, StreamError> {
        match width {
            BitWidth::U8 => self.read_u8().await.map(u32::from),
            BitWidth::U16 => self.read_u16().await.map(u32::from),
            BitWidth::U24 => self.read_u24().await,
            BitWidth::U32 => self.read_u32().await,
        }
    }

    /// # Errors
    ///
    /// See [`read_bytes`](Self::read_bytes).
    pub async fn read_timestamp32(&mut self) -> Result<UnixTime32, StreamError> {
        self.read_u32().await.map(UnixTime32::from_secs)
    }

    /// Read a `width`-prefixed vector. The prefix stays consumed if the
    /// payload read fails.
    ///
    /// # Errors
    ///
    /// See [`read_bytes`](Self::read_bytes).
    pub async fn read_vector(&mut self, width: BitWidth) -> Result<Vec<u8>, StreamError> {
        let len = self.read_int(width).await?;
        self.read_bytes(len as usize).await
    }

    async fn read_array<const N: usize>(&mut self) -> Result<[u8; N], StreamError> {
        let mut out = [0u8; N];
        self.fill(&mut out).await?;
        Ok(out)
    }

    async fn fill(&mut self, buf: &mut [u8]) -> Result<(), StreamError> {
        let start = self.position;
        let needed = buf.len();
        let mut read = 0;

        while read < needed {
            match self.reader.read(&mut buf[read..]).await {
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
