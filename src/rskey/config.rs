//! Configuration for RSKEY byte keys

use crate::error::{CodecError, Result};
use crate::reed_solomon::ReedSolomon32;
use crate::symbols::symbols_for;

pub const MIN_PARITY: usize = 2;
pub const MAX_PARITY: usize = 5;
pub const DEFAULT_PARITY: usize = 3;

/// Symbols between dashes in a rendered key
pub const DEFAULT_STRIDE: usize = 5;

/// Configuration for RSKEY encoding and decoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsKeyConfig {
    /// Parity symbols appended to the key
    pub parity: usize,
    /// Payload length in bytes
    pub raw_size: usize,
    /// Dash every `stride` symbols; 0 for none
    pub stride: usize,
}

impl RsKeyConfig {
    pub fn new(parity: usize, raw_size: usize) -> Result<Self> {
        let config = Self {
            parity,
            raw_size,
            stride: DEFAULT_STRIDE,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_stride(mut self, stride: usize) -> Self {
        self.stride = stride;
        self
    }

    /// Symbols carrying the payload
    pub fn data_symbols(&self) -> usize {
        symbols_for(self.raw_size)
    }

    /// Symbols in a complete key
    pub fn total_symbols(&self) -> usize {
        self.data_symbols() + self.parity
    }

    pub fn validate(&self) -> Result<()> {
        if !(MIN_PARITY..=MAX_PARITY).contains(&self.parity) {
            return Err(CodecError::config(format!(
                "RSKEY parity must be {MIN_PARITY} to {MAX_PARITY}, got {}",
                self.parity
            )));
        }
        if self.raw_size == 0 {
            return Err(CodecError::config("RSKEY payload size must be at least 1 byte"));
        }
        if self.total_symbols() > ReedSolomon32::MAX_CODEWORD {
            return Err(CodecError::config(format!(
                "{} payload bytes need {} symbols plus {} parity, over the {}-symbol limit",
                self.raw_size,
                self.data_symbols(),
                self.parity,
                ReedSolomon32::MAX_CODEWORD
            )));
        }
        Ok(())
    }

    pub fn from_args(matches: &clap::ArgMatches) -> Result<Self> {
        let parity = matches
            .get_one::<usize>("parity")
            .copied()
            .unwrap_or(DEFAULT_PARITY);
        let raw_size = matches
            .get_one::<usize>("size")
            .copied()
            .ok_or_else(|| CodecError::config("payload size is required"))?;
        let stride = matches
            .try_get_one::<usize>("stride")
            .ok()
            .flatten()
            .copied()
            .unwrap_or(DEFAULT_STRIDE);

        Ok(Self::new(parity, raw_size)?.with_stride(stride))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_counts() {
        let config = RsKeyConfig::new(3, 8).unwrap();
        assert_eq!(config.data_symbols(), 13);
        assert_eq!(config.total_symbols(), 16);
    }

    #[test]
    fn test_codeword_limit() {
        // 18 bytes -> 29 symbols, room for exactly two parity
        assert!(RsKeyConfig::new(2, 18).is_ok());
        assert!(RsKeyConfig::new(3, 18).is_err());
        assert!(RsKeyConfig::new(2, 19).is_err());
    }

    #[test]
    fn test_parity_range() {
        assert!(RsKeyConfig::new(1, 8).is_err());
        assert!(RsKeyConfig::new(6, 8).is_err());
        assert!(RsKeyConfig::new(5, 12).is_ok());
        assert!(RsKeyConfig::new(5, 0).is_err());
    }
}
