/// Errors that can occur while decoding a KISS frame.
///
/// Encoding is total and has no error type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The input is too short to hold both frame delimiters.
    #[error("truncated frame ({len} bytes, need at least 2)")]
    Truncated { len: usize },

    /// The first byte is not FEND (0xC0).
    #[error("missing start delimiter (found 0x{found:02X}, expected 0xC0)")]
    MissingStartDelimiter { found: u8 },

    /// The last byte is not FEND (0xC0).
    #[error("missing end delimiter (found 0x{found:02X}, expected 0xC0)")]
    MissingEndDelimiter { found: u8 },

    /// FESC was followed by a byte other than TFEND or TFESC.
    #[error("invalid escape target 0x{byte:02X} at offset {offset}")]
    InvalidEscape { byte: u8, offset: usize },

    /// The frame body ended right after FESC.
    #[error("dangling escape at end of frame")]
    DanglingEscape,

    /// The decoded payload exceeds the configured maximum size.
    ///
    /// Decoding stops at the first byte past the limit, so `at_least` is the
    /// payload length reached at that point, not the full decoded length.
    #[error("payload too large (at least {at_least} bytes, max {max})")]
    PayloadTooLarge { at_least: usize, max: usize },
}

impl DecodeError {
    /// Short machine-friendly name of the failure cause, used in log fields.
    pub fn reason(&self) -> &'static str {
        match self {
            DecodeError::Truncated { .. } => "truncated",
            DecodeError::MissingStartDelimiter { .. } => "missing_start_delimiter",
            DecodeError::MissingEndDelimiter { .. } => "missing_end_delimiter",
            DecodeError::InvalidEscape { .. } => "invalid_escape",
            DecodeError::DanglingEscape => "dangling_escape",
            DecodeError::PayloadTooLarge { .. } => "payload_too_large",
        }
    }

    /// The wire byte that caused the failure, when there is one.
    pub fn offending_byte(&self) -> Option<u8> {
        match self {
            DecodeError::MissingStartDelimiter { found }
            | DecodeError::MissingEndDelimiter { found } => Some(*found),
            DecodeError::InvalidEscape { byte, .. } => Some(*byte),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, DecodeError>;
