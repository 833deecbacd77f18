//! Interleaved latitude/longitude quantization into 5-bit symbols
//!
//! Symbol `i` carries latitude bits in its high part and longitude bits in
//! its low part. The first symbol splits 2/3; after that the split alternates
//! 3/2 on even positions and 2/3 on odd ones, so nine symbols hold 22
//! latitude and 23 longitude bits.

use crate::error::{CodecError, Result};
use crate::symbols::SYMBOL_BITS;

/// Mean Earth radius in meters
pub const EARTH_RADIUS: f64 = 6_371_000.0;

/// Meters per degree of arc along a great circle
pub const METERS_PER_DEGREE: f64 = EARTH_RADIUS * std::f64::consts::PI / 180.0;

/// Latitude bits carried by symbol `i`
pub fn latitude_bits(i: usize) -> u32 {
    if i > 0 && i % 2 == 0 {
        3
    } else {
        2
    }
}

/// Total (latitude, longitude) bits carried by `precision` symbols
pub fn cell_bits(precision: usize) -> (u32, u32) {
    let lat: u32 = (0..precision).map(latitude_bits).sum();
    (lat, precision as u32 * SYMBOL_BITS as u32 - lat)
}

fn cell_index(value: f64, offset: f64, span: f64, bits: u32) -> u64 {
    let cells = (1u64 << bits) as f64;
    let index = ((value + offset) / span * cells).floor() as u64;
    index.min((1u64 << bits) - 1)
}

/// Quantize a coordinate into `precision` data symbols
pub fn quantize(latitude: f64, longitude: f64, precision: usize) -> Result<Vec<u8>> {
    if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
        return Err(CodecError::malformed(format!(
            "latitude {latitude} outside [-90, 90]"
        )));
    }
    if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
        return Err(CodecError::malformed(format!(
            "longitude {longitude} outside [-180, 180]"
        )));
    }

    let (lat_bits, lon_bits) = cell_bits(precision);
    let lat_index = cell_index(latitude, 90.0, 180.0, lat_bits);
    let lon_index = cell_index(longitude, 180.0, 360.0, lon_bits);

    let mut lat_remaining = lat_bits;
    let mut lon_remaining = lon_bits;
    let symbols = (0..precision)
        .map(|i| {
            let nlat = latitude_bits(i);
            let nlon = SYMBOL_BITS as u32 - nlat;
            lat_remaining -= nlat;
            lon_remaining -= nlon;
            let lat_part = (lat_index >> lat_remaining) & ((1 << nlat) - 1);
            let lon_part = (lon_index >> lon_remaining) & ((1 << nlon) - 1);
            ((lat_part << nlon) | lon_part) as u8
        })
        .collect();
    Ok(symbols)
}

/// A quantization cell, in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub latitude: f64,
    pub longitude: f64,
    /// Half the cell height
    pub latitude_span: f64,
    /// Half the cell width
    pub longitude_span: f64,
}

impl Cell {
    /// Half-height of the cell in meters
    pub fn latitude_error(&self) -> f64 {
        self.latitude_span * METERS_PER_DEGREE
    }

    /// Half-width of the cell in meters, measured at its widest parallel
    pub fn longitude_error(&self) -> f64 {
        let south = self.latitude - self.latitude_span;
        let north = self.latitude + self.latitude_span;
        let widest = if south <= 0.0 && north >= 0.0 {
            0.0
        } else {
            south.abs().min(north.abs())
        };
        self.longitude_span * METERS_PER_DEGREE * widest.to_radians().cos()
    }

    /// Distance from the centre to the farthest corner, in meters
    pub fn accuracy(&self) -> f64 {
        self.latitude_error().hypot(self.longitude_error())
    }
}

/// Recover the cell named by a run of data symbols
pub fn dequantize(symbols: &[u8]) -> Cell {
    let mut lat_index: u64 = 0;
    let mut lon_index: u64 = 0;
    for (i, &symbol) in symbols.iter().enumerate() {
        let nlat = latitude_bits(i);
        let nlon = SYMBOL_BITS as u32 - nlat;
        let symbol = symbol as u64;
        lat_index = (lat_index << nlat) | (symbol >> nlon);
        lon_index = (lon_index << nlon) | (symbol & ((1 << nlon) - 1));
    }

    let (lat_bits, lon_bits) = cell_bits(symbols.len());
    let lat_cell = 180.0 / (1u64 << lat_bits) as f64;
    let lon_cell = 360.0 / (1u64 << lon_bits) as f64;
    Cell {
        latitude: -90.0 + (lat_index as f64 + 0.5) * lat_cell,
        longitude: -180.0 + (lon_index as f64 + 0.5) * lon_cell,
        latitude_span: lat_cell / 2.0,
        longitude_span: lon_cell / 2.0,
    }
}
