use bytes::{BufMut, Bytes, BytesMut};
use tracing::trace;

use crate::control::{control_name, escape_target, needs_escape, unescape_target, FEND, FESC};
use crate::error::{DecodeError, Result};

/// Smallest valid frame: two FEND delimiters around an empty body.
pub const MIN_FRAME_SIZE: usize = 2;

/// Default maximum decoded payload size: unlimited.
pub const DEFAULT_MAX_PAYLOAD: usize = usize::MAX;

/// Configuration for frame decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeConfig {
    /// Maximum decoded payload size in bytes. Default: unlimited.
    pub max_payload_size: usize,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            max_payload_size: DEFAULT_MAX_PAYLOAD,
        }
    }
}

/// Exact number of bytes `encode` produces for `payload`.
pub fn encoded_len(payload: &[u8]) -> usize {
    let escapes = payload.iter().filter(|&&b| needs_escape(b)).count();
    MIN_FRAME_SIZE + payload.len() + escapes
}

/// Encode a payload into a new KISS frame.
///
/// Never fails; an empty payload yields `[FEND, FEND]`.
pub fn encode(payload: &[u8]) -> Bytes {
    let mut dst = BytesMut::new();
    encode_into(payload, &mut dst);
    dst.freeze()
}

/// Append a KISS frame for `payload` to `dst`.
///
/// Wire format:
/// ```text
/// ┌──────┬──────────────────────────────────────┬──────┐
/// │ FEND │ body                                 │ FEND │
/// │ 0xC0 │ 0xC0 -> 0xDB 0xDC, 0xDB -> 0xDB 0xDD │ 0xC0 │
/// └──────┴──────────────────────────────────────┴──────┘
/// ```
pub fn encode_into(payload: &[u8], dst: &mut BytesMut) {
    dst.reserve(encoded_len(payload));
    dst.put_u8(FEND);
    for &byte in payload {
        match escape_target(byte) {
            Some(transposed) => {
                dst.put_u8(FESC);
                dst.put_u8(transposed);
            }
            None => dst.put_u8(byte),
        }
    }
    dst.put_u8(FEND);
}

/// Decode a complete KISS frame back into its payload.
pub fn decode(frame: &[u8]) -> Result<Bytes> {
    decode_with_config(frame, &DecodeConfig::default())
}

/// Decode a complete KISS frame, enforcing the limits in `config`.
pub fn decode_with_config(frame: &[u8], config: &DecodeConfig) -> Result<Bytes> {
    let mut dst = BytesMut::new();
    decode_checked(frame, &mut dst, config)?;
    Ok(dst.freeze())
}

/// Decode a complete KISS frame, appending the payload to `dst`.
///
/// Returns the number of payload bytes appended. On error `dst` is left
/// exactly as it was.
pub fn decode_into(frame: &[u8], dst: &mut BytesMut) -> Result<usize> {
    decode_checked(frame, dst, &DecodeConfig::default())
}

fn decode_checked(frame: &[u8], dst: &mut BytesMut, config: &DecodeConfig) -> Result<usize> {
    let start = dst.len();
    match unstuff(frame, dst, config.max_payload_size) {
        Ok(written) => Ok(written),
        Err(err) => {
            dst.truncate(start);
            trace!(
                reason = err.reason(),
                found = err.offending_byte().map(control_name),
                len = frame.len(),
                %err,
                "rejected KISS frame"
            );
            Err(err)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Normal,
    EscapeSeen,
}

/// Strip the delimiters, leaving the still-escaped body.
fn body(frame: &[u8]) -> Result<&[u8]> {
    let (first, last) = match frame {
        [first, .., last] => (*first, *last),
        _ => return Err(DecodeError::Truncated { len: frame.len() }),
    };
    if first != FEND {
        return Err(DecodeError::MissingStartDelimiter { found: first });
    }
    if last != FEND {
        return Err(DecodeError::MissingEndDelimiter { found: last });
    }
    Ok(&frame[1..frame.len() - 1])
}

fn unstuff(frame: &[u8], dst: &mut BytesMut, max_payload: usize) -> Result<usize> {
    let body = body(frame)?;
    let start = dst.len();
    dst.reserve(body.len().min(max_payload));

    let mut state = State::Normal;
    for (index, &byte) in body.iter().enumerate() {
        let literal = match state {
            State::EscapeSeen => {
                state = State::Normal;
                unescape_target(byte).ok_or(DecodeError::InvalidEscape {
                    byte,
                    // +1 for the leading FEND
                    offset: index + 1,
                })?
            }
            State::Normal if byte == FESC => {
                state = State::EscapeSeen;
                continue;
            }
            State::Normal => byte,
        };

        let written = dst.len() - start;
        if written >= max_payload {
            return Err(DecodeError::PayloadTooLarge {
                at_least: written + 1,
                max: max_payload,
            });
        }
        dst.put_u8(literal);
    }

    if state == State::EscapeSeen {
        return Err(DecodeError::DanglingEscape);
    }

    Ok(dst.len() - start)
}
