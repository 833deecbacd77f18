//! Galois Field GF(2^5) arithmetic for the Reed-Solomon symbol codes
//!
//! ## Generator polynomial
//!
//! **GF(2^5)**: 0x25 (x⁵ + x² + 1), one field element per base-32 glyph.
//! The polynomial fixes every parity symbol that EZCOD and RSKEY
//! strings carry, so it cannot change without breaking existing codes.
//!
//! ## Tables
//!
//! Log/antilog tables are built on first use and shared process-wide behind a
//! [`OnceLock`]. Addition is XOR; multiplication and division are table lookups.

use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};
use std::sync::OnceLock;

use crate::error::{CodecError, Result};

/// GF(2^5) generator: 0x25 (x⁵ + x² + 1)
pub const GF32_GENERATOR: u32 = 0x25;

const fn is_supported(bits: usize, generator: u32) -> bool {
    bits == 5 && generator == GF32_GENERATOR
}

/// Galois Field lookup tables for fast arithmetic
#[derive(Debug)]
pub struct GaloisTable {
    pub log: Vec<u16>,
    pub antilog: Vec<u16>,
}

impl GaloisTable {
    pub fn new(bits: usize, generator: u32) -> Self {
        let count = 1usize << bits;
        let mut table = GaloisTable {
            log: vec![0; count],
            antilog: vec![0; count],
        };
        table.build_tables(count, generator);
        table
    }

    fn build_tables(&mut self, count: usize, generator: u32) {
        let limit = count - 1;
        let mut b = 1u32;

        for l in 0..limit {
            self.log[b as usize] = l as u16;
            self.antilog[l] = b as u16;

            b <<= 1;
            if b & count as u32 != 0 {
                b ^= generator;
            }
        }

        // log(0) is undefined; park it on the unused slot
        self.log[0] = limit as u16;
        self.antilog[limit] = 0;
    }
}

/// Galois Field element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Galois<const BITS: usize, const GENERATOR: u32> {
    value: u16,
}

impl<const BITS: usize, const GENERATOR: u32> Galois<BITS, GENERATOR> {
    /// Number of elements in the field
    pub const COUNT: usize = 1 << BITS;
    /// Multiplicative group order, also the longest codeword in symbols
    pub const LIMIT: usize = Self::COUNT - 1;

    pub const ZERO: Self = Self { value: 0 };
    pub const ONE: Self = Self { value: 1 };

    pub fn new(value: u16) -> Self {
        debug_assert!((value as usize) < Self::COUNT, "{value} outside GF(2^{BITS})");
        Self { value }
    }

    pub fn value(&self) -> u16 {
        self.value
    }

    pub fn is_zero(&self) -> bool {
        self.value == 0
    }

    /// The primitive element raised to `exponent`, reduced modulo the group order
    pub fn alpha_pow(exponent: usize) -> Self {
        let table = Self::get_table();
        Self::new(table.antilog[exponent % Self::LIMIT])
    }

    /// Power operation
    pub fn pow(&self, exponent: usize) -> Self {
        if exponent == 0 {
            return Self::ONE;
        }
        if self.value == 0 {
            return Self::ZERO;
        }

        let table = Self::get_table();
        let log_val = table.log[self.value as usize] as usize;
        Self::new(table.antilog[(log_val * (exponent % Self::LIMIT)) % Self::LIMIT])
    }

    /// Discrete logarithm base the primitive element; `None` for zero
    pub fn log(&self) -> Option<usize> {
        if self.value == 0 {
            return None;
        }
        Some(Self::get_table().log[self.value as usize] as usize)
    }

    /// Multiplicative inverse
    pub fn inverse(&self) -> Result<Self> {
        Self::ONE.checked_div(*self)
    }

    /// Division, failing on a zero divisor
    pub fn checked_div(self, rhs: Self) -> Result<Self> {
        if rhs.value == 0 {
            return Err(CodecError::DivisionByZero);
        }
        if self.value == 0 {
            return Ok(Self::ZERO);
        }

        let table = Self::get_table();
        let log_diff = (table.log[self.value as usize] as usize + Self::LIMIT
            - table.log[rhs.value as usize] as usize)
            % Self::LIMIT;
        Ok(Self::new(table.antilog[log_diff]))
    }

    /// Get the shared table for this field, building it on first use
    fn get_table() -> &'static GaloisTable {
        static TABLE_32: OnceLock<GaloisTable> = OnceLock::new();

        const {
            assert!(
                is_supported(BITS, GENERATOR),
                "Unsupported Galois field configuration"
            )
        };

        TABLE_32.get_or_init(|| GaloisTable::new(BITS, GENERATOR))
    }
}

// Addition (XOR in Galois fields)
impl<const BITS: usize, const GENERATOR: u32> Add for Galois<BITS, GENERATOR> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.value ^ rhs.value)
    }
}

impl<const BITS: usize, const GENERATOR: u32> AddAssign for Galois<BITS, GENERATOR> {
    fn add_assign(&mut self, rhs: Self) {
        self.value ^= rhs.value;
    }
}

// Subtraction (same as addition in GF(2^n))
impl<const BITS: usize, const GENERATOR: u32> Sub for Galois<BITS, GENERATOR> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.value ^ rhs.value)
    }
}

impl<const BITS: usize, const GENERATOR: u32> SubAssign for Galois<BITS, GENERATOR> {
    fn sub_assign(&mut self, rhs: Self) {
        self.value ^= rhs.value;
    }
}

// Multiplication using log tables
impl<const BITS: usize, const GENERATOR: u32> Mul for Galois<BITS, GENERATOR> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        if self.value == 0 || rhs.value == 0 {
            return Self::ZERO;
        }

        let table = Self::get_table();
        let log_sum = (table.log[self.value as usize] as usize
            + table.log[rhs.value as usize] as usize)
            % Self::LIMIT;
        Self::new(table.antilog[log_sum])
    }
}

impl<const BITS: usize, const GENERATOR: u32> MulAssign for Galois<BITS, GENERATOR> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

// Conversion traits
impl<const BITS: usize, const GENERATOR: u32> From<u8> for Galois<BITS, GENERATOR> {
    fn from(value: u8) -> Self {
        Self::new(value as u16)
    }
}

impl<const BITS: usize, const GENERATOR: u32> From<Galois<BITS, GENERATOR>> for u16 {
    fn from(val: Galois<BITS, GENERATOR>) -> Self {
        val.value
    }
}

impl<const BITS: usize, const GENERATOR: u32> std::fmt::Display for Galois<BITS, GENERATOR> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

pub type Galois32 = Galois<5, GF32_GENERATOR>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_galois32_tables_cover_every_nonzero_element() {
        let mut seen = [false; 32];
        for k in 0..Galois32::LIMIT {
            let v = Galois32::alpha_pow(k).value() as usize;
            assert!(!seen[v], "alpha^{k} repeats {v}");
            seen[v] = true;
        }
        assert!(!seen[0]);
        assert_eq!(seen.iter().filter(|s| **s).count(), 31);
    }

    #[test]
    fn test_galois32_known_products() {
        // alpha^5 = alpha^2 + 1 under x^5 + x^2 + 1
        assert_eq!(Galois32::alpha_pow(5).value(), 0b00101);
        assert_eq!((Galois32::new(2) * Galois32::new(16)).value(), 0b00101);
        assert_eq!(Galois32::alpha_pow(31), Galois32::ONE);
    }

    #[test]
    fn test_division_by_zero_is_an_error() {
        let a = Galois32::new(7);
        assert_eq!(a.checked_div(Galois32::ZERO), Err(CodecError::DivisionByZero));
        assert_eq!(Galois32::ZERO.inverse(), Err(CodecError::DivisionByZero));
        assert_eq!(Galois32::ZERO.checked_div(a), Ok(Galois32::ZERO));
    }

    #[test]
    fn test_galois32_power() {
        let base = Galois32::new(2);
        assert_eq!(base.pow(2), base * base);
        assert_eq!(base.pow(0), Galois32::ONE);
        assert_eq!(Galois32::ZERO.pow(3), Galois32::ZERO);
    }

    #[test]
    fn test_galois32_inverse() {
        for v in 1..32u16 {
            let a = Galois32::new(v);
            assert_eq!(a * a.inverse().unwrap(), Galois32::ONE);
        }
    }
}
