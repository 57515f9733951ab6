/// Errors produced while consuming bytes from a span.
///
/// The two variants are separate conditions:
///
/// ```text
///   WireError
///   ├── UnexpectedEof        ← data shortage, an expected outcome
///   └── UnsupportedBitWidth  ← caller described the field wrongly
/// ```
///
/// A failed read never consumes anything, with one exception: a vector
/// whose length prefix decoded but whose payload is short keeps the
/// prefix consumed (see [`Span::read_vector`](crate::span::Span::read_vector)).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WireError {
    /// Fewer bytes remain than the read requires.
    #[error("unexpected end of input: needed {needed} bytes, {available} available")]
    UnexpectedEof { needed: usize, available: usize },

    /// A runtime bit width outside {8, 16, 24, 32}.
    #[error("unsupported bit width {bits}: expected 8, 16, 24 or 32")]
    UnsupportedBitWidth { bits: u32 },
}

impl WireError {
    /// Whether this error is a data shortage rather than a bad argument.
    #[must_use]
    pub fn is_eof(&self) -> bool {
        matches!(self, Self::UnexpectedEof { .. })
    }
}
