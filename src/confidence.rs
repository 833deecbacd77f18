//! Confidence of a decode, from the share of parity left unused

use crate::reed_solomon::Correction;

/// Fraction of parity capacity left after correction, in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Confidence(f64);

impl Confidence {
    pub const CERTAIN: Confidence = Confidence(1.0);

    /// `1 - used/parity`; usage beyond capacity clamps to zero
    pub fn from_usage(used: usize, parity: usize) -> Self {
        if parity == 0 {
            return if used == 0 { Self::CERTAIN } else { Confidence(0.0) };
        }
        let spare = parity.saturating_sub(used);
        Confidence(spare as f64 / parity as f64)
    }

    pub fn from_correction(correction: &Correction, parity: usize) -> Self {
        Self::from_usage(correction.parity_used(), parity)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Rounded percentage in `[0, 100]`
    pub fn percent(&self) -> u8 {
        (self.0 * 100.0).round() as u8
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.percent())
    }
}
