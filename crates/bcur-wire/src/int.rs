use crate::error::WireError;

/// Width of a fixed-size big-endian unsigned integer field.
///
/// Every width maps to a byte count and to the value range of the
/// decoded integer:
///
/// ```text
/// ┌───────┬───────┬────────────────────┐
/// │ Width │ Bytes │ Max value          │
/// ├───────┼───────┼────────────────────┤
/// │ U8    │ 1     │ 0xFF               │
/// │ U16   │ 2     │ 0xFFFF             │
/// │ U24   │ 3     │ 0xFF_FFFF          │
/// │ U32   │ 4     │ 0xFFFF_FFFF        │
/// └───────┴───────┴────────────────────┘
/// ```
///
/// When a field layout is known at compile time, pass the variant
/// directly. When the width arrives as data (e.g. from a message
/// description table), convert it with [`BitWidth::from_bits`], which is
/// the only place an unsupported width can be reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BitWidth {
    U8,
    U16,
    U24,
    U32,
}

impl BitWidth {
    /// All supported widths, narrowest first.
    pub const ALL: [Self; 4] = [Self::U8, Self::U16, Self::U24, Self::U32];

    /// Convert a bit count into a width.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::UnsupportedBitWidth`] for anything other
    /// than 8, 16, 24 or 32.
    pub fn from_bits(bits: u32) -> Result<Self, WireError> {
        match bits {
            8 => Ok(Self::U8),
            16 => Ok(Self::U16),
            24 => Ok(Self::U24),
            32 => Ok(Self::U32),
            other => Err(WireError::UnsupportedBitWidth { bits: other }),
        }
    }

    #[must_use]
    pub const fn bits(self) -> u32 {
        match self {
            Self::U8 => 8,
            Self::U16 => 16,
            Self::U24 => 24,
            Self::U32 => 32,
        }
    }

    /// Number of bytes the field occupies on the wire.
    #[must_use]
    pub const fn byte_len(self) -> usize {
        match self {
            Self::U8 => 1,
            Self::U16 => 2,
            Self::U24 => 3,
            Self::U32 => 4,
        }
    }

    /// Largest value representable at this width.
    #[must_use]
    pub const fn max_value(self) -> u32 {
        match self {
            Self::U8 => 0xFF,
            Self::U16 => 0xFFFF,
            Self::U24 => 0x00FF_FFFF,
            Self::U32 => u32::MAX,
        }
    }
}

impl TryFrom<u32> for BitWidth {
    type Error = WireError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        Self::from_bits(bits)
    }
}

/// Assemble an unsigned big-endian integer from 1 to 4 bytes.
///
/// The most significant byte comes first:
///
/// ```text
///   [0x01, 0x02, 0x03] → 0x01 << 16 | 0x02 << 8 | 0x03 = 0x010203
/// ```
///
/// Callers always pass exactly the field's byte count, so this never
/// fails. An empty slice decodes to 0.
#[must_use]
pub fn decode_be(bytes: &[u8]) -> u32 {
    debug_assert!(bytes.len() <= 4, "decode_be takes at most 4 bytes");
    bytes
        .iter()
        .fold(0u32, |acc, &byte| (acc << 8) | u32::from(byte))
}
