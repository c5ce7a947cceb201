//! Encode a few payloads, decode them back, and show how malformed frames
//! are reported.
//!
//! Run with:
//! ```bash
//! RUST_LOG=trace cargo run --package kissframe --example roundtrip
//! ```

use kissframe::{decode, encode};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let payloads: [&[u8]; 3] = [b"", b"hello", &[0x01, 0xC0, 0xDB, 0x02]];
    for payload in payloads {
        let frame = encode(payload);
        tracing::info!(payload = ?payload, frame = ?frame.as_ref(), "encoded");
        match decode(&frame) {
            Ok(decoded) => tracing::info!(decoded = ?decoded.as_ref(), "decoded"),
            Err(err) => tracing::error!(error = %err, "roundtrip failed"),
        }
    }

    let malformed: [&[u8]; 3] = [&[0xC0], &[0xC0, 0xDB, 0x41, 0xC0], &[0xC0, 0xDB, 0xC0]];
    for frame in malformed {
        if let Err(err) = decode(frame) {
            tracing::warn!(frame = ?frame, reason = err.reason(), "rejected: {err}");
        }
    }
}
