//! EZCOD: geographic coordinates as short Reed-Solomon protected codes
//!
//! A code such as `R3U 08M PVT.D` carries nine position symbols (about 3 m
//! resolution) followed by parity. Decoding tolerates case changes, look-alike
//! glyphs, erasure markers and, within parity capacity, wrong symbols.

pub mod config;
pub mod quantize;

pub use config::{EzcodConfig, EzcodFamily, DEFAULT_PRECISION, MAX_PARITY, MAX_PRECISION};
pub use quantize::{cell_bits, dequantize, quantize, Cell};

use log::debug;

use crate::confidence::Confidence;
use crate::error::{CodecError, Result};
use crate::reed_solomon::{Correction, ReedSolomon32};
use crate::symbols::layout;

/// A decoded position
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub confidence: Confidence,
    /// Cell centre, degrees
    pub latitude: f64,
    /// Cell centre, degrees
    pub longitude: f64,
    /// Distance in meters from the centre to the cell corner
    pub accuracy: f64,
    /// Half cell height in meters
    pub latitude_error: f64,
    /// Half cell width in meters
    pub longitude_error: f64,
    /// Data symbols the code carried
    pub precision: usize,
    pub correction: Correction,
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:.6}, {:.6} +/- {:.1}m ({} confidence)",
            self.latitude, self.longitude, self.accuracy, self.confidence
        )
    }
}

/// EZCOD encoder/decoder for one configuration
#[derive(Debug, Clone)]
pub struct Ezcod {
    config: EzcodConfig,
    rs: ReedSolomon32,
}

impl Ezcod {
    pub fn new(config: EzcodConfig) -> Result<Self> {
        config.validate()?;
        let rs = ReedSolomon32::new(config.parity)?;
        Ok(Self { config, rs })
    }

    pub fn config(&self) -> &EzcodConfig {
        &self.config
    }

    /// Encode at the configured precision
    pub fn encode(&self, latitude: f64, longitude: f64) -> Result<String> {
        self.encode_with_precision(latitude, longitude, self.config.precision)
    }

    /// Encode with an explicit number of data symbols
    ///
    /// Without a parity separator the decoder can only find the data/parity
    /// split from the configured precision, so no other precision is allowed.
    pub fn encode_with_precision(
        &self,
        latitude: f64,
        longitude: f64,
        precision: usize,
    ) -> Result<String> {
        config::validate_precision(precision)?;
        if self.config.layout.parity_glyph.is_none() && precision != self.config.precision {
            return Err(CodecError::config(format!(
                "precision {precision} needs a parity separator, this layout only carries precision {}",
                self.config.precision
            )));
        }
        let data = quantize(latitude, longitude, precision)?;
        let parity = self.rs.parity_symbols(&data)?;
        let code = self.config.layout.render(&data, &parity)?;
        debug!("ezcod {latitude}, {longitude} at precision {precision} -> {code}");
        Ok(code)
    }

    /// Decode a code string, correcting what the parity allows
    pub fn decode(&self, code: &str) -> Result<Location> {
        let mut parsed = layout::parse(code)?;
        if parsed.symbols.is_empty() {
            return Err(CodecError::malformed("empty location code"));
        }
        let parity = self.config.parity;

        let precision = match parsed.parity_at {
            Some(at) => {
                let trailing = parsed.symbols.len() - at;
                if trailing > parity {
                    return Err(CodecError::malformed(format!(
                        "{trailing} symbols after the parity separator, expected at most {parity}"
                    )));
                }
                at
            }
            None => {
                let expected = self.config.precision + parity;
                if parsed.symbols.len() > expected {
                    return Err(CodecError::malformed(format!(
                        "{} symbols without a parity separator, expected at most {expected}",
                        parsed.symbols.len()
                    )));
                }
                self.config.precision
            }
        };
        if precision == 0 {
            return Err(CodecError::malformed("no position symbols before the parity separator"));
        }
        if precision > MAX_PRECISION {
            return Err(CodecError::malformed(format!(
                "{precision} position symbols exceed the maximum of {MAX_PRECISION}"
            )));
        }

        parsed.pad_to(precision + parity);
        let (codeword, correction) = self.rs.decode(&parsed.symbols, &parsed.erasures)?;
        let confidence = Confidence::from_correction(&correction, parity);

        let cell = dequantize(&codeword[..precision]);
        debug!(
            "ezcod {code:?} -> {:.6}, {:.6} ({confidence})",
            cell.latitude, cell.longitude
        );
        Ok(Location {
            confidence,
            latitude: cell.latitude,
            longitude: cell.longitude,
            accuracy: cell.accuracy(),
            latitude_error: cell.latitude_error(),
            longitude_error: cell.longitude_error(),
            precision,
            correction,
        })
    }
}

/// Encode a coordinate with one of the named families
pub fn encode(
    family: EzcodFamily,
    latitude: f64,
    longitude: f64,
    precision: Option<usize>,
) -> Result<String> {
    let ezcod = Ezcod::new(family.into())?;
    ezcod.encode_with_precision(latitude, longitude, precision.unwrap_or(DEFAULT_PRECISION))
}

/// Decode a code produced by one of the named families
pub fn decode(family: EzcodFamily, code: &str) -> Result<Location> {
    Ezcod::new(family.into())?.decode(code)
}
