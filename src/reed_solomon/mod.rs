//! Reed-Solomon Error Correction Module
//!
//! Galois field arithmetic plus a systematic symbol codec. EZCOD and RSKEY
//! both run over GF(2^5), so every codeword symbol is one base-32 glyph and a
//! codeword holds at most 31 symbols.

pub mod codec;
pub mod galois;

pub use codec::*;
pub use galois::*;
