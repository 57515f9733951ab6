use bcur_wire::WireError;

/// Errors from reading fixed-width fields off a byte stream.
///
/// Unlike a span, a stream can fail for reasons unrelated to running
/// out of data, so the three conditions stay apart:
///
/// ```text
///   StreamError
///   ├── UnexpectedEof   ← source ended before the field was complete
///   ├── ReadTooLarge    ← request exceeds the configured ReadLimits
///   ├── Wire(WireError) ← field description error (unsupported width)
///   └── Io(io::Error)   ← transport failure from the underlying reader
/// ```
///
/// None of these are retried by the cursor.
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    /// The source signalled end-of-input mid-field.
    ///
    /// `offset` is the stream position where the field started; `read`
    /// bytes of it were consumed before the source ran dry. Those bytes
    /// are gone from the stream but are never decoded.
    #[error("unexpected end of stream at offset {offset}: needed {needed} bytes, got {read}")]
    UnexpectedEof {
        offset: u64,
        needed: usize,
        read: usize,
    },

    /// A single read asked for more than `ReadLimits::max_read_len`.
    ///
    /// Rejected before any allocation or I/O.
    #[error("read of {requested} bytes exceeds limit of {limit} bytes")]
    ReadTooLarge { requested: usize, limit: usize },

    #[error(transparent)]
    Wire(#[from] WireError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl StreamError {
    /// Whether the source simply ran out of data.
    #[must_use]
    pub fn is_eof(&self) -> bool {
        match self {
            Self::UnexpectedEof { .. } => true,
            Self::Wire(inner) => inner.is_eof(),
            Self::ReadTooLarge { .. } | Self::Io(_) => false,
        }
    }
}
