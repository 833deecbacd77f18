//! Base-32 glyph alphabet and 8-bit/5-bit repacking
//!
//! The alphabet drops the glyphs most easily confused with digits (I, O, S, Z).
//! On input those look-alikes are accepted as the digit they resemble, and
//! lower case is accepted everywhere.

use crate::error::{CodecError, Result};

/// Glyph for each 5-bit symbol value
pub const ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKLMNPQRTUVWXY";

/// Bits carried by one symbol
pub const SYMBOL_BITS: usize = 5;

const INVALID: u8 = 0xFF;

const fn build_decode_table() -> [u8; 128] {
    let mut table = [INVALID; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        let upper = ALPHABET[i];
        table[upper as usize] = i as u8;
        table[upper.to_ascii_lowercase() as usize] = i as u8;
        i += 1;
    }

    // Look-alikes map onto the digit they resemble
    let synonyms: [(u8, u8); 4] = [(b'I', 1), (b'O', 0), (b'S', 5), (b'Z', 2)];
    let mut j = 0;
    while j < synonyms.len() {
        let (glyph, value) = synonyms[j];
        table[glyph as usize] = value;
        table[glyph.to_ascii_lowercase() as usize] = value;
        j += 1;
    }
    table
}

static DECODE: [u8; 128] = build_decode_table();

/// Symbol value for a glyph, if it belongs to the alphabet
pub fn symbol(glyph: char) -> Option<u8> {
    if !glyph.is_ascii() {
        return None;
    }
    match DECODE[glyph as usize] {
        INVALID => None,
        value => Some(value),
    }
}

/// Canonical (upper case) glyph for a symbol value
pub fn glyph(symbol: u8) -> Result<char> {
    ALPHABET
        .get(symbol as usize)
        .map(|&g| g as char)
        .ok_or_else(|| CodecError::malformed(format!("symbol {symbol} outside the base-32 alphabet")))
}

/// Number of symbols needed to carry `len` bytes
pub fn symbols_for(len: usize) -> usize {
    (len * 8).div_ceil(SYMBOL_BITS)
}

/// Scatter bytes MSB-first into 5-bit symbols; the last symbol is zero-padded
pub fn pack(bytes: &[u8]) -> Vec<u8> {
    let mut symbols = Vec::with_capacity(symbols_for(bytes.len()));
    let mut acc: u16 = 0;
    let mut bits = 0usize;

    for &byte in bytes {
        acc = (acc << 8) | byte as u16;
        bits += 8;
        while bits >= SYMBOL_BITS {
            bits -= SYMBOL_BITS;
            symbols.push(((acc >> bits) & 0x1F) as u8);
        }
        acc &= (1 << bits) - 1;
    }
    if bits > 0 {
        symbols.push(((acc << (SYMBOL_BITS - bits)) & 0x1F) as u8);
    }
    symbols
}

/// Gather `len` bytes MSB-first from 5-bit symbols; surplus pad bits are ignored
pub fn unpack(symbols: &[u8], len: usize) -> Result<Vec<u8>> {
    let needed = symbols_for(len);
    if symbols.len() < needed {
        return Err(CodecError::LengthMismatch {
            expected: needed,
            found: symbols.len(),
            unit: "symbols",
        });
    }

    let mut bytes = Vec::with_capacity(len);
    let mut acc: u16 = 0;
    let mut bits = 0usize;
    for &symbol in &symbols[..needed] {
        if symbol as usize >= ALPHABET.len() {
            return Err(CodecError::malformed(format!("symbol {symbol} is not 5 bits")));
        }
        acc = (acc << SYMBOL_BITS) | symbol as u16;
        bits += SYMBOL_BITS;
        if bits >= 8 && bytes.len() < len {
            bits -= 8;
            bytes.push((acc >> bits) as u8);
            acc &= (1 << bits) - 1;
        }
    }
    Ok(bytes)
}
