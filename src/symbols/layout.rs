//! Rendering symbol streams as text and parsing text back into symbols
//!
//! Rendered strings may carry cosmetic chunk separators (space or dash) and a
//! single parity separator (`.` or `!`) between data and parity. On input,
//! whitespace and dashes are ignored, `_` and `?` mark erasures, and the
//! parity separator records where the data ends.

use crate::error::{CodecError, Result};
use crate::symbols::alphabet;

/// Glyphs accepted as "this symbol is unknown"
pub const ERASURE_GLYPHS: [char; 2] = ['_', '?'];

/// Glyphs accepted between data and parity
pub const PARITY_GLYPHS: [char; 2] = ['.', '!'];

/// Which part of the symbol stream chunk separators are counted over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkSpan {
    /// Chunk the data symbols only, and only ahead of a complete chunk
    Data,
    /// Chunk the whole data+parity stream at a fixed stride
    Whole,
}

/// How a codeword is turned into display text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Symbols per chunk; 0 disables chunking
    pub chunk: usize,
    /// Separator between chunks, `None` for a continuous string
    pub chunk_glyph: Option<char>,
    /// Separator between data and parity
    pub parity_glyph: Option<char>,
    pub span: ChunkSpan,
}

impl Layout {
    /// `R3U 08M PVT.D`
    pub const fn ezcod() -> Self {
        Self {
            chunk: 3,
            chunk_glyph: Some(' '),
            parity_glyph: Some('.'),
            span: ChunkSpan::Data,
        }
    }

    /// `000G4-0YYYU-XYQWE`
    pub const fn rskey(stride: usize) -> Self {
        Self {
            chunk: stride,
            chunk_glyph: Some('-'),
            parity_glyph: None,
            span: ChunkSpan::Whole,
        }
    }

    pub fn with_chunk_glyph(mut self, glyph: Option<char>) -> Self {
        self.chunk_glyph = glyph;
        self
    }

    pub fn with_parity_glyph(mut self, glyph: Option<char>) -> Self {
        self.parity_glyph = glyph;
        self
    }

    /// Reject separators that `parse` would not read back as cosmetics
    pub fn validate(&self) -> Result<()> {
        if let Some(c) = self.chunk_glyph {
            if !(c.is_whitespace() || c == '-') {
                return Err(CodecError::config(format!(
                    "chunk separator '{c}' must be whitespace or '-'"
                )));
            }
        }
        if let Some(c) = self.parity_glyph {
            if !PARITY_GLYPHS.contains(&c) {
                return Err(CodecError::config(format!(
                    "parity separator '{c}' must be one of {PARITY_GLYPHS:?}"
                )));
            }
        }
        Ok(())
    }

    /// Render data and parity symbols as text
    pub fn render(&self, data: &[u8], parity: &[u8]) -> Result<String> {
        let mut out = String::with_capacity(2 * (data.len() + parity.len()));
        let chunk = match self.chunk_glyph {
            Some(_) => self.chunk,
            None => 0,
        };

        for (i, &symbol) in data.iter().enumerate() {
            let boundary = match self.span {
                ChunkSpan::Data => chunk > 0 && i > 0 && i % chunk == 0 && i + chunk <= data.len(),
                ChunkSpan::Whole => chunk > 0 && i > 0 && i % chunk == 0,
            };
            if let (true, Some(sep)) = (boundary, self.chunk_glyph) {
                out.push(sep);
            }
            out.push(alphabet::glyph(symbol)?);
        }

        if let Some(sep) = self.parity_glyph {
            out.push(sep);
        }

        for (j, &symbol) in parity.iter().enumerate() {
            let i = data.len() + j;
            if let (ChunkSpan::Whole, Some(sep)) = (self.span, self.chunk_glyph) {
                if chunk > 0 && i > 0 && i % chunk == 0 && self.parity_glyph.is_none() {
                    out.push(sep);
                }
            }
            out.push(alphabet::glyph(symbol)?);
        }
        Ok(out)
    }
}

/// Symbols recovered from a text string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedSymbols {
    /// Symbol values, zero at erased positions
    pub symbols: Vec<u8>,
    /// Positions marked with an erasure glyph
    pub erasures: Vec<usize>,
    /// Number of symbols before the parity separator, if one was present
    pub parity_at: Option<usize>,
}

impl ParsedSymbols {
    /// Extend with erasures up to `len` symbols
    pub fn pad_to(&mut self, len: usize) {
        while self.symbols.len() < len {
            self.erasures.push(self.symbols.len());
            self.symbols.push(0);
        }
    }
}

/// Parse display text into symbols, erasures and the parity split
pub fn parse(text: &str) -> Result<ParsedSymbols> {
    let mut parsed = ParsedSymbols::default();

    for (offset, c) in text.chars().enumerate() {
        if c.is_whitespace() || c == '-' {
            continue;
        }
        if ERASURE_GLYPHS.contains(&c) {
            parsed.erasures.push(parsed.symbols.len());
            parsed.symbols.push(0);
            continue;
        }
        if PARITY_GLYPHS.contains(&c) {
            if parsed.parity_at.is_some() {
                return Err(CodecError::malformed(format!(
                    "second parity separator '{c}' at offset {offset}"
                )));
            }
            parsed.parity_at = Some(parsed.symbols.len());
            continue;
        }
        match alphabet::symbol(c) {
            Some(value) => parsed.symbols.push(value),
            None => {
                return Err(CodecError::malformed(format!(
                    "invalid character '{c}' at offset {offset}"
                )))
            }
        }
    }
    Ok(parsed)
}
