//! KISS control bytes.
//!
//! Two bytes are reserved on the wire: FEND delimits frames and FESC starts a
//! two-byte escape sequence. TFEND and TFESC only carry meaning right after
//! FESC.

/// Frame delimiter; marks frame start and end.
pub const FEND: u8 = 0xC0;

/// Escape marker; introduces a two-byte escape sequence.
pub const FESC: u8 = 0xDB;

/// Transposed FEND: `FESC TFEND` stands for a literal FEND in the payload.
pub const TFEND: u8 = 0xDC;

/// Transposed FESC: `FESC TFESC` stands for a literal FESC in the payload.
pub const TFESC: u8 = 0xDD;

/// Returns a human-readable name for a byte value.
pub fn control_name(byte: u8) -> &'static str {
    match byte {
        FEND => "FEND",
        FESC => "FESC",
        TFEND => "TFEND",
        TFESC => "TFESC",
        _ => "DATA",
    }
}

/// Returns true if the byte must be escaped inside a frame body.
pub fn needs_escape(byte: u8) -> bool {
    byte == FEND || byte == FESC
}

/// The byte that follows FESC when escaping `literal`, if it needs escaping.
pub fn escape_target(literal: u8) -> Option<u8> {
    match literal {
        FEND => Some(TFEND),
        FESC => Some(TFESC),
        _ => None,
    }
}

/// The literal byte an escape sequence `FESC transposed` stands for.
pub fn unescape_target(transposed: u8) -> Option<u8> {
    match transposed {
        TFEND => Some(FEND),
        TFESC => Some(FESC),
        _ => None,
    }
}
