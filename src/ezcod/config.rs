//! Configuration for EZCOD location codes

use crate::error::{CodecError, Result};
use crate::symbols::Layout;

/// Default number of data symbols, roughly 3 m resolution
pub const DEFAULT_PRECISION: usize = 9;

/// Finest supported precision
pub const MAX_PRECISION: usize = 12;

/// Strongest supported parity
pub const MAX_PARITY: usize = 5;

/// Named EZCOD variants: 9 position symbols with 1, 2 or 3 parity symbols
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EzcodFamily {
    /// 3:10, detects but cannot correct a single error
    Ez3_10,
    /// 3:11, corrects one error
    Ez3_11,
    /// 3:12, corrects one error plus one erasure
    Ez3_12,
}

impl EzcodFamily {
    pub fn parity(&self) -> usize {
        match self {
            EzcodFamily::Ez3_10 => 1,
            EzcodFamily::Ez3_11 => 2,
            EzcodFamily::Ez3_12 => 3,
        }
    }

    pub fn from_parity(parity: usize) -> Option<Self> {
        match parity {
            1 => Some(EzcodFamily::Ez3_10),
            2 => Some(EzcodFamily::Ez3_11),
            3 => Some(EzcodFamily::Ez3_12),
            _ => None,
        }
    }
}

impl std::fmt::Display for EzcodFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ezcod 3:{}", 9 + self.parity())
    }
}

/// Configuration for EZCOD encoding and decoding
#[derive(Debug, Clone, PartialEq)]
pub struct EzcodConfig {
    /// Parity symbols appended to each code
    pub parity: usize,
    /// Data symbols produced by encode, and expected by decode when the
    /// input carries no parity separator
    pub precision: usize,
    pub layout: Layout,
}

impl Default for EzcodConfig {
    fn default() -> Self {
        Self {
            parity: EzcodFamily::Ez3_10.parity(),
            precision: DEFAULT_PRECISION,
            layout: Layout::ezcod(),
        }
    }
}

impl From<EzcodFamily> for EzcodConfig {
    fn from(family: EzcodFamily) -> Self {
        Self {
            parity: family.parity(),
            ..Self::default()
        }
    }
}

impl EzcodConfig {
    pub fn new(parity: usize, precision: usize) -> Result<Self> {
        let config = Self {
            parity,
            precision,
            layout: Layout::ezcod(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_PARITY).contains(&self.parity) {
            return Err(CodecError::config(format!(
                "EZCOD parity must be 1 to {MAX_PARITY}, got {}",
                self.parity
            )));
        }
        validate_precision(self.precision)?;
        self.layout.validate()
    }

    pub fn from_args(matches: &clap::ArgMatches) -> Result<Self> {
        let parity = matches
            .get_one::<usize>("parity")
            .copied()
            .unwrap_or(EzcodFamily::Ez3_10.parity());
        let precision = matches
            .get_one::<usize>("precision")
            .copied()
            .unwrap_or(DEFAULT_PRECISION);

        // Layout flags only exist on the encode side
        let mut layout = Layout::ezcod();
        if let Ok(Some(sep)) = matches.try_get_one::<String>("chunk-separator") {
            layout = layout.with_chunk_glyph(separator_glyph(sep)?);
        }
        if let Ok(Some(sep)) = matches.try_get_one::<String>("parity-separator") {
            layout = layout.with_parity_glyph(separator_glyph(sep)?);
        }

        let config = Self::new(parity, precision)?.with_layout(layout);
        config.validate()?;
        Ok(config)
    }
}

pub(crate) fn validate_precision(precision: usize) -> Result<()> {
    if !(1..=MAX_PRECISION).contains(&precision) {
        return Err(CodecError::config(format!(
            "EZCOD precision must be 1 to {MAX_PRECISION}, got {precision}"
        )));
    }
    Ok(())
}

/// Map a separator name from the command line onto a glyph
pub fn separator_glyph(name: &str) -> Result<Option<char>> {
    match name {
        "none" => Ok(None),
        "space" => Ok(Some(' ')),
        "dash" => Ok(Some('-')),
        "dot" => Ok(Some('.')),
        "bang" => Ok(Some('!')),
        other => Err(CodecError::config(format!("unknown separator '{other}'"))),
    }
}
