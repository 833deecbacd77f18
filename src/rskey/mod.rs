//! RSKEY: fixed-size byte payloads as dashed base-32 keys with parity
//!
//! An 8-byte payload with two parity symbols renders as `000G4-0YYYU-XYQWE`.
//! A truncated key is decoded by treating the missing tail as erasures.

pub mod config;
pub mod payload;

pub use config::{RsKeyConfig, DEFAULT_PARITY, DEFAULT_STRIDE, MAX_PARITY, MIN_PARITY};

use log::debug;

use crate::confidence::Confidence;
use crate::error::{CodecError, Result};
use crate::reed_solomon::{Correction, ReedSolomon32};
use crate::symbols::{layout, pack, unpack, Layout};

/// A decoded key
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedKey {
    pub confidence: Confidence,
    /// Exactly `raw_size` bytes
    pub data: Vec<u8>,
    /// `0x` plus upper case hex of `data`
    pub hex: String,
    /// `data` as text with trailing NULs removed, when valid UTF-8
    pub utf8: Option<String>,
    pub correction: Correction,
}

/// RSKEY encoder/decoder for one payload size and parity
#[derive(Debug, Clone)]
pub struct RsKey {
    config: RsKeyConfig,
    rs: ReedSolomon32,
}

impl RsKey {
    pub fn new(config: RsKeyConfig) -> Result<Self> {
        config.validate()?;
        let rs = ReedSolomon32::new(config.parity)?;
        Ok(Self { config, rs })
    }

    pub fn config(&self) -> &RsKeyConfig {
        &self.config
    }

    /// Encode a payload of at most `raw_size` bytes; short payloads are NUL-padded
    pub fn encode(&self, data: &[u8]) -> Result<String> {
        let bytes = payload::fit(data, self.config.raw_size)?;
        let symbols = pack(&bytes);
        let parity = self.rs.parity_symbols(&symbols)?;
        let key = Layout::rskey(self.config.stride).render(&symbols, &parity)?;
        debug!("rskey {} -> {key}", payload::to_hex(&bytes));
        Ok(key)
    }

    /// Encode text, or `0x`-prefixed hex
    pub fn encode_text(&self, text: &str) -> Result<String> {
        self.encode(&payload::parse(text)?)
    }

    /// Decode a key, correcting what the parity allows
    pub fn decode(&self, key: &str) -> Result<DecodedKey> {
        let mut parsed = layout::parse(key)?;
        let data_symbols = self.config.data_symbols();
        let total = self.config.total_symbols();

        if let Some(at) = parsed.parity_at {
            if at != data_symbols {
                return Err(CodecError::LengthMismatch {
                    expected: data_symbols,
                    found: at,
                    unit: "data symbols",
                });
            }
        }
        if parsed.symbols.len() > total {
            return Err(CodecError::LengthMismatch {
                expected: total,
                found: parsed.symbols.len(),
                unit: "symbols",
            });
        }

        parsed.pad_to(total);
        let (codeword, correction) = self.rs.decode(&parsed.symbols, &parsed.erasures)?;
        let confidence = Confidence::from_correction(&correction, self.config.parity);

        let data = unpack(&codeword[..data_symbols], self.config.raw_size)?;
        debug!("rskey {key:?} -> {} ({confidence})", payload::to_hex(&data));
        Ok(DecodedKey {
            confidence,
            hex: payload::to_hex(&data),
            utf8: payload::to_utf8(&data),
            data,
            correction,
        })
    }
}

/// Encode `data` as a key of `raw_size` bytes with `parity` parity symbols
pub fn encode(parity: usize, raw_size: usize, data: &[u8], stride: Option<usize>) -> Result<String> {
    let config = RsKeyConfig::new(parity, raw_size)?.with_stride(stride.unwrap_or(DEFAULT_STRIDE));
    RsKey::new(config)?.encode(data)
}

/// Decode a key of `raw_size` bytes with `parity` parity symbols
pub fn decode(parity: usize, raw_size: usize, key: &str) -> Result<DecodedKey> {
    RsKey::new(RsKeyConfig::new(parity, raw_size)?)?.decode(key)
}
