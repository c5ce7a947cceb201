//! KISS byte-stuffing framing for serial and packet radio links.
//!
//! Every frame is delimited by FEND (0xC0). Inside a frame, literal FEND and
//! FESC (0xDB) bytes are replaced by two-byte escape sequences:
//! - FEND becomes FESC TFEND (0xDB 0xDC)
//! - FESC becomes FESC TFESC (0xDB 0xDD)
//!
//! Encoding is total. Decoding validates the delimiters and every escape
//! sequence, returning a [`DecodeError`] for malformed frames. Both work on
//! complete, already-segmented frames; reading them off a transport is left
//! to the caller.
//!
//! ```
//! let frame = kissframe::encode(&[0x01, 0xC0, 0x02]);
//! assert_eq!(frame.as_ref(), &[0xC0, 0x01, 0xDB, 0xDC, 0x02, 0xC0]);
//! assert_eq!(kissframe::decode(&frame).unwrap().as_ref(), &[0x01, 0xC0, 0x02]);
//! ```

pub mod codec;
pub mod control;
pub mod error;

pub use codec::{
    decode, decode_into, decode_with_config, encode, encode_into, encoded_len, DecodeConfig,
    DEFAULT_MAX_PAYLOAD, MIN_FRAME_SIZE,
};
pub use control::{FEND, FESC, TFEND, TFESC};
pub use error::{DecodeError, Result};
