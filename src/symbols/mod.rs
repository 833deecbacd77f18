//! Base-32 symbol alphabet and text layout

pub mod alphabet;
pub mod layout;

pub use alphabet::{glyph, pack, symbol, symbols_for, unpack, ALPHABET, SYMBOL_BITS};
pub use layout::{parse, ChunkSpan, Layout, ParsedSymbols, ERASURE_GLYPHS, PARITY_GLYPHS};
