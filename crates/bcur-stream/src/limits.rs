use tracing::debug;

use crate::error::StreamError;

/// Default ceiling for a single materializing read: 16 MiB.
pub const DEFAULT_MAX_READ_LEN: usize = 16 * 1024 * 1024;

/// Scratch buffer size used by `skip`.
pub(crate) const SKIP_CHUNK: usize = 8 * 1024;

/// Bounds applied by the stream cursors.
///
/// A length prefix read off the wire is attacker-controlled. Stream
/// cursors allocate a fresh buffer for every byte or vector read, so a
/// hostile `u32` prefix could otherwise demand a 4 GiB allocation before
/// the source proves it has that much data.
///
/// ```text
/// ┌──────────────┬──────────────────────────────────────────────┐
/// │ Field        │ Purpose                                      │
/// ├──────────────┼──────────────────────────────────────────────┤
/// │ max_read_len │ Largest `read_bytes` / `read_vector` payload │
/// └──────────────┴──────────────────────────────────────────────┘
/// ```
///
/// `skip` streams through a small scratch buffer and is not bounded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReadLimits {
    pub max_read_len: usize,
}

impl Default for ReadLimits {
    fn default() -> Self {
        Self {
            max_read_len: DEFAULT_MAX_READ_LEN,
        }
    }
}

impl ReadLimits {
    #[must_use]
    pub fn with_max_read_len(max_read_len: usize) -> Self {
        Self { max_read_len }
    }

    pub(crate) fn check(self, requested: usize) -> Result<(), StreamError> {
        if requested > self.max_read_len {
            debug!(requested, limit = self.max_read_len, "rejecting oversized read");
            return Err(StreamError::ReadTooLarge {
                requested,
                limit: self.max_read_len,
            });
        }
        Ok(())
    }
}
