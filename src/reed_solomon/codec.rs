//! Systematic Reed-Solomon codec over GF(2^m) with erasure support
//!
//! Codewords are laid out data-first: the first symbol is the coefficient of
//! the highest power of `x` and the parity symbols trail the data. Codes
//! shorter than `2^m - 1` symbols are shortened codes; the missing leading
//! symbols are implicitly zero.
//!
//! The generator polynomial has the consecutive roots `α^(FCR+i)` for
//! `i in 0..parity`, with `FCR = 1`.
//!
//! Decoding runs the classic pipeline: syndromes, Berlekamp-Massey seeded
//! with the erasure locator, Chien search, Forney magnitudes and a final
//! syndrome check.

use log::{debug, trace};
use smallvec::{smallvec, SmallVec};

use crate::error::{CodecError, Result};
use crate::reed_solomon::galois::{Galois, GF32_GENERATOR};

/// First consecutive root of the generator polynomial
const FCR: usize = 1;

/// Codeword storage; inline capacity covers any GF(2^5) codeword
pub type Codeword = SmallVec<[u8; 32]>;

type Poly<G> = SmallVec<[G; 32]>;

/// Outcome of a successful decode
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Correction {
    /// Symbols that were wrong without being flagged
    pub errors: usize,
    /// Symbols flagged as unknown by the caller
    pub erasures: usize,
    /// Positions of the corrected (unflagged) errors, ascending
    pub error_positions: Vec<usize>,
}

impl Correction {
    /// Parity symbols consumed: each error costs two, each erasure one
    pub fn parity_used(&self) -> usize {
        2 * self.errors + self.erasures
    }

    pub fn is_clean(&self) -> bool {
        self.errors == 0 && self.erasures == 0
    }
}

/// Reed-Solomon code with a fixed number of parity symbols
#[derive(Debug, Clone)]
pub struct ReedSolomon<const BITS: usize, const GENERATOR: u32> {
    parity: usize,
    /// Generator polynomial, highest degree first, monic
    generator: Poly<Galois<BITS, GENERATOR>>,
}

impl<const BITS: usize, const GENERATOR: u32> ReedSolomon<BITS, GENERATOR> {
    /// Longest codeword the field supports
    pub const MAX_CODEWORD: usize = Galois::<BITS, GENERATOR>::LIMIT;

    pub fn new(parity: usize) -> Result<Self> {
        if parity == 0 || parity >= Self::MAX_CODEWORD {
            return Err(CodecError::config(format!(
                "parity must be between 1 and {}, got {parity}",
                Self::MAX_CODEWORD - 1
            )));
        }

        let mut generator: Poly<Galois<BITS, GENERATOR>> = smallvec![Galois::ONE];
        for i in 0..parity {
            let root = Galois::<BITS, GENERATOR>::alpha_pow(FCR + i);
            let mut next: Poly<Galois<BITS, GENERATOR>> = smallvec![Galois::ZERO; generator.len() + 1];
            for (j, &c) in generator.iter().enumerate() {
                next[j] += c;
                next[j + 1] += c * root;
            }
            generator = next;
        }

        Ok(Self { parity, generator })
    }

    pub fn parity(&self) -> usize {
        self.parity
    }

    /// Most data symbols that fit in one codeword with this parity
    pub fn max_data(&self) -> usize {
        Self::MAX_CODEWORD - self.parity
    }

    /// Compute the parity symbols for `data`
    pub fn parity_symbols(&self, data: &[u8]) -> Result<Codeword> {
        if data.is_empty() {
            return Err(CodecError::malformed("cannot encode an empty message"));
        }
        if data.len() > self.max_data() {
            return Err(CodecError::config(format!(
                "{} data symbols plus {} parity exceed the {}-symbol codeword limit",
                data.len(),
                self.parity,
                Self::MAX_CODEWORD
            )));
        }
        let data = Self::to_field(data)?;

        let mut remainder: Poly<Galois<BITS, GENERATOR>> = smallvec![Galois::ZERO; self.parity];
        for &d in data.iter() {
            let feedback = d + remainder[0];
            remainder.remove(0);
            remainder.push(Galois::ZERO);
            if !feedback.is_zero() {
                for (r, &g) in remainder.iter_mut().zip(&self.generator[1..]) {
                    *r += g * feedback;
                }
            }
        }

        Ok(remainder.iter().map(|g| g.value() as u8).collect())
    }

    /// Append parity to `data`, returning the full codeword
    pub fn encode(&self, data: &[u8]) -> Result<Codeword> {
        let parity = self.parity_symbols(data)?;
        let mut codeword: Codeword = data.iter().copied().collect();
        codeword.extend_from_slice(&parity);
        Ok(codeword)
    }

    /// Decode a received codeword, returning the corrected copy
    pub fn decode(&self, received: &[u8], erasures: &[usize]) -> Result<(Codeword, Correction)> {
        let mut codeword: Codeword = received.iter().copied().collect();
        let correction = self.decode_in_place(&mut codeword, erasures)?;
        Ok((codeword, correction))
    }

    /// Correct `codeword` in place
    ///
    /// `erasures` lists positions known to be unreliable; their content is
    /// ignored. Duplicate positions count once. On failure the buffer may
    /// hold partially corrected symbols.
    pub fn decode_in_place(&self, codeword: &mut [u8], erasures: &[usize]) -> Result<Correction> {
        let n = codeword.len();
        let parity = self.parity;

        if n < parity + 1 {
            return Err(CodecError::malformed(format!(
                "codeword of {n} symbols is shorter than {} (parity {parity} plus one data symbol)",
                parity + 1
            )));
        }
        if n > Self::MAX_CODEWORD {
            return Err(CodecError::malformed(format!(
                "codeword of {n} symbols exceeds the {}-symbol field limit",
                Self::MAX_CODEWORD
            )));
        }
        if let Some(&bad) = codeword
            .iter()
            .find(|&&s| s as usize >= Galois::<BITS, GENERATOR>::COUNT)
        {
            return Err(CodecError::malformed(format!(
                "symbol {bad} is outside GF(2^{BITS})"
            )));
        }

        let mut eras: SmallVec<[usize; 32]> = erasures.iter().copied().collect();
        eras.sort_unstable();
        eras.dedup();
        if let Some(&bad) = eras.iter().find(|&&e| e >= n) {
            return Err(CodecError::malformed(format!(
                "erasure position {bad} outside codeword of {n} symbols"
            )));
        }
        if eras.len() > parity {
            return Err(CodecError::uncorrectable(format!(
                "{} erasures exceed parity capacity {parity}",
                eras.len()
            )));
        }

        for &e in eras.iter() {
            codeword[e] = 0;
        }

        let syndromes = self.syndromes(codeword);
        trace!("syndromes: {:?}", syndromes);
        if syndromes.iter().all(|s| s.is_zero()) {
            return Ok(Correction {
                errors: 0,
                erasures: eras.len(),
                error_positions: Vec::new(),
            });
        }

        let lambda = Self::berlekamp_massey(&syndromes, &eras, n, parity)?;
        let degree = lambda.len() - 1;
        if degree < eras.len() {
            return Err(CodecError::uncorrectable(
                "error locator lost the erasure roots",
            ));
        }
        let errors = degree - eras.len();
        if 2 * errors + eras.len() > parity {
            return Err(CodecError::uncorrectable(format!(
                "{errors} errors and {} erasures exceed parity capacity {parity}",
                eras.len()
            )));
        }

        let positions = Self::chien_search(&lambda, n)?;
        if positions.len() != degree {
            return Err(CodecError::uncorrectable(format!(
                "error locator of degree {degree} has {} roots",
                positions.len()
            )));
        }

        // Omega = S * Lambda mod x^parity
        let mut omega: Poly<Galois<BITS, GENERATOR>> = smallvec![Galois::ZERO; parity];
        for (i, o) in omega.iter_mut().enumerate() {
            for j in 0..=i.min(degree) {
                *o += syndromes[i - j] * lambda[j];
            }
        }

        // Formal derivative keeps the odd terms
        let derivative: Poly<Galois<BITS, GENERATOR>> = (1..lambda.len())
            .map(|i| if i % 2 == 1 { lambda[i] } else { Galois::ZERO })
            .collect();

        for &pos in positions.iter() {
            let power = n - 1 - pos;
            let x_inv = Galois::<BITS, GENERATOR>::alpha_pow(Self::MAX_CODEWORD - power);
            let numerator = eval_low_first(&omega, x_inv) * x_inv.pow(FCR - 1);
            let denominator = eval_low_first(&derivative, x_inv);
            if denominator.is_zero() {
                return Err(CodecError::uncorrectable(format!(
                    "zero locator derivative at position {pos}"
                )));
            }
            let magnitude = numerator.checked_div(denominator)?;
            codeword[pos] ^= magnitude.value() as u8;
        }

        if self.syndromes(codeword).iter().any(|s| !s.is_zero()) {
            return Err(CodecError::uncorrectable(
                "corrected codeword fails syndrome check",
            ));
        }

        let mut error_positions: Vec<usize> = positions
            .into_iter()
            .filter(|p| eras.binary_search(p).is_err())
            .collect();
        error_positions.sort_unstable();

        let correction = Correction {
            errors: error_positions.len(),
            erasures: eras.len(),
            error_positions,
        };
        debug!(
            "RS({n},{}) corrected {} errors at {:?} with {} erasures",
            n - parity,
            correction.errors,
            correction.error_positions,
            correction.erasures
        );
        Ok(correction)
    }

    /// S_i = r(α^(FCR+i)) for each parity symbol
    fn syndromes(&self, codeword: &[u8]) -> Poly<Galois<BITS, GENERATOR>> {
        (0..self.parity)
            .map(|i| {
                let root = Galois::<BITS, GENERATOR>::alpha_pow(FCR + i);
                codeword
                    .iter()
                    .fold(Galois::ZERO, |acc, &c| acc * root + Galois::from(c))
            })
            .collect()
    }

    /// Berlekamp-Massey with the erasure locator as the starting polynomial.
    /// Returns the combined errata locator, lowest degree first, trimmed.
    fn berlekamp_massey(
        syndromes: &[Galois<BITS, GENERATOR>],
        eras: &[usize],
        n: usize,
        parity: usize,
    ) -> Result<Poly<Galois<BITS, GENERATOR>>> {
        let mut lambda: Poly<Galois<BITS, GENERATOR>> = smallvec![Galois::ONE];
        for &e in eras {
            let x = Galois::<BITS, GENERATOR>::alpha_pow(n - 1 - e);
            let mut next = lambda.clone();
            next.push(Galois::ZERO);
            for (i, &c) in lambda.iter().enumerate() {
                next[i + 1] += c * x;
            }
            lambda = next;
        }

        let mut b = lambda.clone();
        let mut el = eras.len();
        for r in eras.len() + 1..=parity {
            let discrepancy = (0..r.min(lambda.len()))
                .fold(Galois::ZERO, |acc, i| acc + lambda[i] * syndromes[r - 1 - i]);

            let mut shifted = b;
            shifted.insert(0, Galois::ZERO);

            if discrepancy.is_zero() {
                b = shifted;
                continue;
            }

            let mut next = lambda.clone();
            if next.len() < shifted.len() {
                next.resize(shifted.len(), Galois::ZERO);
            }
            for (t, &s) in next.iter_mut().zip(shifted.iter()) {
                *t += discrepancy * s;
            }

            if 2 * el <= r + eras.len() - 1 {
                el = r + eras.len() - el;
                let inv = discrepancy.inverse()?;
                b = lambda.iter().map(|&c| c * inv).collect();
            } else {
                b = shifted;
            }
            lambda = next;
        }

        while lambda.len() > 1 && lambda.last().is_some_and(|c| c.is_zero()) {
            lambda.pop();
        }
        Ok(lambda)
    }

    /// Find codeword positions whose locator value is a root of `lambda`
    fn chien_search(lambda: &[Galois<BITS, GENERATOR>], n: usize) -> Result<SmallVec<[usize; 32]>> {
        let mut positions = SmallVec::new();
        for power in 0..Self::MAX_CODEWORD {
            let x_inv = Galois::<BITS, GENERATOR>::alpha_pow(Self::MAX_CODEWORD - power);
            if eval_low_first(lambda, x_inv).is_zero() {
                if power >= n {
                    return Err(CodecError::uncorrectable(format!(
                        "error located in shortened padding (power {power}, codeword length {n})"
                    )));
                }
                positions.push(n - 1 - power);
            }
        }
        Ok(positions)
    }

    fn to_field(symbols: &[u8]) -> Result<Poly<Galois<BITS, GENERATOR>>> {
        symbols
            .iter()
            .map(|&s| {
                if (s as usize) < Galois::<BITS, GENERATOR>::COUNT {
                    Ok(Galois::from(s))
                } else {
                    Err(CodecError::malformed(format!(
                        "symbol {s} is outside GF(2^{BITS})"
                    )))
                }
            })
            .collect()
    }
}

/// Evaluate a polynomial stored lowest degree first
fn eval_low_first<const BITS: usize, const GENERATOR: u32>(
    poly: &[Galois<BITS, GENERATOR>],
    x: Galois<BITS, GENERATOR>,
) -> Galois<BITS, GENERATOR> {
    poly.iter()
        .rev()
        .fold(Galois::ZERO, |acc, &c| acc * x + c)
}

/// Codec used by EZCOD and RSKEY: one symbol per base-32 glyph
pub type ReedSolomon32 = ReedSolomon<5, GF32_GENERATOR>;
