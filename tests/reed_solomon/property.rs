//! Property-based tests for Reed-Solomon error correction
//!
//! Random messages, parity levels and damage patterns within capacity must
//! always decode back to the original codeword.

use ezpwdrs::reed_solomon::{Galois32, ReedSolomon32};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::seq::index::sample;
use rand::{Rng, SeedableRng};

proptest! {
    /// Property: Galois32 multiplication is associative
    #[test]
    fn prop_galois_multiplication_associative(a in 0u16..32, b in 0u16..32, c in 0u16..32) {
        let (ga, gb, gc) = (Galois32::new(a), Galois32::new(b), Galois32::new(c));
        prop_assert_eq!((ga * gb) * gc, ga * (gb * gc));
    }

    /// Property: Galois32 distributive law: a * (b + c) = (a * b) + (a * c)
    #[test]
    fn prop_galois_distributive(a in 0u16..32, b in 0u16..32, c in 0u16..32) {
        let (ga, gb, gc) = (Galois32::new(a), Galois32::new(b), Galois32::new(c));
        prop_assert_eq!(ga * (gb + gc), (ga * gb) + (ga * gc));
    }

    /// Property: an undamaged codeword decodes with nothing consumed
    #[test]
    fn prop_clean_codeword_decodes(
        data in prop::collection::vec(0u8..32, 1..=26),
        parity in 1usize..=5,
    ) {
        let rs = ReedSolomon32::new(parity).unwrap();
        let codeword = rs.encode(&data).unwrap();
        let (decoded, correction) = rs.decode(&codeword, &[]).unwrap();
        prop_assert_eq!(decoded, codeword);
        prop_assert_eq!(correction.parity_used(), 0);
    }

    /// Property: any mix with 2*errors + erasures <= parity is corrected exactly
    #[test]
    fn prop_damage_within_capacity_is_corrected(
        data in prop::collection::vec(0u8..32, 1..=26),
        parity in 1usize..=5,
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let rs = ReedSolomon32::new(parity).unwrap();
        let codeword = rs.encode(&data).unwrap();
        let n = codeword.len();

        let erasures = rng.random_range(0..=parity.min(n));
        let errors = rng.random_range(0..=(parity - erasures) / 2);
        let positions = sample(&mut rng, n, erasures + errors).into_vec();

        let mut received = codeword.clone();
        for &pos in &positions[..erasures] {
            received[pos] = rng.random_range(0..32);
        }
        for &pos in &positions[erasures..] {
            received[pos] ^= rng.random_range(1..32u8);
        }

        let (decoded, correction) = rs.decode(&received, &positions[..erasures]).unwrap();
        prop_assert_eq!(decoded, codeword);
        prop_assert_eq!(correction.errors, errors);
        prop_assert_eq!(correction.erasures, erasures);
        prop_assert!(correction.parity_used() <= parity);
    }

    /// Property: more erasures than parity is always refused
    #[test]
    fn prop_excess_erasures_rejected(
        data in prop::collection::vec(0u8..32, 6..=20),
        parity in 1usize..=5,
    ) {
        let rs = ReedSolomon32::new(parity).unwrap();
        let codeword = rs.encode(&data).unwrap();
        let erasures: Vec<usize> = (0..=parity).collect();
        prop_assert!(rs.decode(&codeword, &erasures).is_err());
    }
}
