//! Protocol codec
//!
//! Conversion between raw file bytes and the text-safe wire encoding.
//!
//! Standard base64 alphabet with `=` padding. Decoding skips `\r` and `\n`
//! so line-wrapped input is accepted; any other invalid symbol (including
//! spaces), missing or excess padding, and non-zero trailing bits all fail.

use std::borrow::Cow;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::Result;

/// Encode raw bytes for the wire
pub fn encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode wire text back into raw bytes
pub fn decode(text: &str) -> Result<Vec<u8>> {
    let text = if text.contains(is_line_break) {
        Cow::Owned(text.replace(is_line_break, ""))
    } else {
        Cow::Borrowed(text)
    };
    Ok(STANDARD.decode(text.as_bytes())?)
}

fn is_line_break(c: char) -> bool {
    c == '\r' || c == '\n'
}
