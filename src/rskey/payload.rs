//! Payload parsing and rendering: raw bytes, text, or `0x` hex

use crate::error::{CodecError, Result};

/// Interpret command-line style input: `0x`-prefixed hex, otherwise UTF-8 text
pub fn parse(text: &str) -> Result<Vec<u8>> {
    match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(digits) => hex::decode(digits)
            .map_err(|e| CodecError::malformed(format!("invalid hex payload {text:?}: {e}"))),
        None => Ok(text.as_bytes().to_vec()),
    }
}

/// NUL-pad a payload to exactly `raw_size` bytes
pub fn fit(bytes: &[u8], raw_size: usize) -> Result<Vec<u8>> {
    if bytes.len() > raw_size {
        return Err(CodecError::LengthMismatch {
            expected: raw_size,
            found: bytes.len(),
            unit: "bytes",
        });
    }
    let mut padded = bytes.to_vec();
    padded.resize(raw_size, 0);
    Ok(padded)
}

/// `0x` followed by upper case hex digits
pub fn to_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode_upper(bytes))
}

/// The payload as text, if it is valid UTF-8 once trailing NULs are dropped
pub fn to_utf8(bytes: &[u8]) -> Option<String> {
    let end = bytes.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    std::str::from_utf8(&bytes[..end]).ok().map(str::to_owned)
}
