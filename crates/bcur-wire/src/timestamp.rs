use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// A 32-bit GMT Unix timestamp: whole seconds since 1970-01-01T00:00:00Z.
///
/// Handshake-style messages carry this as a plain big-endian `u32`. The
/// newtype keeps the raw wire value around and converts to
/// [`SystemTime`] on demand. The range ends in February 2106.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnixTime32(u32);

impl UnixTime32 {
    pub const EPOCH: Self = Self(0);

    #[must_use]
    pub const fn from_secs(secs: u32) -> Self {
        Self(secs)
    }

    /// Seconds since the epoch, exactly as they appeared on the wire.
    #[must_use]
    pub const fn secs(self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn to_system_time(self) -> SystemTime {
        UNIX_EPOCH + Duration::from_secs(u64::from(self.0))
    }
}

impl From<u32> for UnixTime32 {
    fn from(secs: u32) -> Self {
        Self(secs)
    }
}

impl From<UnixTime32> for SystemTime {
    fn from(ts: UnixTime32) -> Self {
        ts.to_system_time()
    }
}
