//! Reed-Solomon Symbol Codec Tests
//!
//! Encode/decode over GF(2^5) with known codewords, erasures, errors, and the
//! failure modes past parity capacity.

use ezpwdrs::reed_solomon::{Correction, ReedSolomon32};
use ezpwdrs::symbols::{glyph, symbol};
use ezpwdrs::CodecError;

fn syms(text: &str) -> Vec<u8> {
    text.chars().map(|c| symbol(c).unwrap()).collect()
}

fn text(symbols: &[u8]) -> String {
    symbols.iter().map(|&s| glyph(s).unwrap()).collect()
}

fn decode(codeword: &str, parity: usize, erasures: &[usize]) -> Result<(String, Correction), CodecError> {
    let rs = ReedSolomon32::new(parity).unwrap();
    rs.decode(&syms(codeword), erasures)
        .map(|(out, correction)| (text(&out), correction))
}

// ============================================================================
// Encoding
// ============================================================================

#[test]
fn test_encode_appends_parity() {
    let rs = ReedSolomon32::new(2).unwrap();
    let codeword = rs.encode(&syms("000G40YYYUXYQ")).unwrap();
    assert_eq!(text(&codeword), "000G40YYYUXYQWE");
}

#[test]
fn test_encode_reference_parities() {
    for (parity, expected) in [(1, "D"), (2, "GY")] {
        let rs = ReedSolomon32::new(parity).unwrap();
        assert_eq!(text(&rs.parity_symbols(&syms("R3U08MPVT")).unwrap()), expected);
    }
    let rs = ReedSolomon32::new(5).unwrap();
    assert_eq!(
        text(&rs.parity_symbols(&syms("9MGNEBHHCDMVY0000000")).unwrap()),
        "MVRFN"
    );
}

#[test]
fn test_encode_rejects_symbols_outside_field() {
    let rs = ReedSolomon32::new(2).unwrap();
    let err = rs.encode(&[1, 2, 32]).unwrap_err();
    assert!(matches!(err, CodecError::MalformedInput(_)));
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_single_error_with_two_parity() {
    let (out, correction) = decode("010G40YYYUXYQWE", 2, &[]).unwrap();
    assert_eq!(out, "000G40YYYUXYQWE");
    assert_eq!(correction.errors, 1);
    assert_eq!(correction.error_positions, vec![1]);
    assert_eq!(correction.parity_used(), 2);
}

#[test]
fn test_two_errors_with_five_parity() {
    let (out, correction) = decode("9MGNEBHHCDMVY0001000XVRFN", 5, &[]).unwrap();
    assert_eq!(out, "9MGNEBHHCDMVY0000000MVRFN");
    assert_eq!(correction.errors, 2);
    assert_eq!(correction.error_positions, vec![16, 20]);
    assert_eq!(correction.parity_used(), 4);
}

#[test]
fn test_error_in_parity_symbol() {
    let (out, correction) = decode("R3U08MPXR6E0", 3, &[]).unwrap();
    assert_eq!(out, "R3U08MPXR6E8");
    assert_eq!(correction.error_positions, vec![11]);
}

// ============================================================================
// Erasures
// ============================================================================

#[test]
fn test_erasures_fill_missing_tail() {
    let (out, correction) = decode("9MGNEBHHCDMVY0000000MVR00", 5, &[23, 24]).unwrap();
    assert_eq!(out, "9MGNEBHHCDMVY0000000MVRFN");
    assert_eq!(correction.errors, 0);
    assert_eq!(correction.erasures, 2);
}

#[test]
fn test_errors_and_erasures_together() {
    let (out, correction) = decode("9MGNEBHHCDMVY0001000XVRFN", 5, &[15]).unwrap();
    assert_eq!(out, "9MGNEBHHCDMVY0000000MVRFN");
    assert_eq!(correction.errors, 2);
    assert_eq!(correction.erasures, 1);
    assert_eq!(correction.parity_used(), 5);
}

#[test]
fn test_erased_error_counts_once() {
    let (out, correction) = decode("0001000000000000", 3, &[3, 4]).unwrap();
    assert_eq!(out, "0000000000000000");
    assert_eq!(correction.errors, 0);
    assert_eq!(correction.erasures, 2);

    let (_, correction) = decode("0001000000000000", 3, &[3, 4, 5]).unwrap();
    assert_eq!(correction.parity_used(), 3);
}

#[test]
fn test_erasure_of_correct_symbol() {
    let (out, correction) = decode("000G40YYYUXYQWE", 2, &[0, 14]).unwrap();
    assert_eq!(out, "000G40YYYUXYQWE");
    assert_eq!(correction.erasures, 2);
}

// ============================================================================
// Beyond Capacity
// ============================================================================

#[test]
fn test_uncorrectable_vectors() {
    let cases: [(&str, usize, &[usize]); 6] = [
        ("R0U08M0VTGY", 2, &[]),
        ("010G40YY1UXYQWE", 2, &[]),
        ("R0U08M0XR6E8", 3, &[]),
        ("R0U08MPXR3", 1, &[]),
        ("0001000010000000", 3, &[]),
        ("9MGNEBHHCDMVY0001000XVRF0", 5, &[15, 24]),
    ];
    for (codeword, parity, erasures) in cases {
        let result = decode(codeword, parity, erasures);
        assert!(
            matches!(result, Err(CodecError::Uncorrectable(_))),
            "{codeword} with parity {parity}: {result:?}"
        );
    }
}

#[test]
fn test_single_error_always_fails_with_one_parity() {
    let rs = ReedSolomon32::new(1).unwrap();
    let clean = syms("R3U08MPXR3");
    for pos in 0..clean.len() {
        for delta in 1..32u8 {
            let mut received = clean.clone();
            received[pos] ^= delta;
            assert!(
                matches!(rs.decode(&received, &[]), Err(CodecError::Uncorrectable(_))),
                "error {delta} at {pos} was accepted"
            );
        }
    }
}

#[test]
fn test_more_erasures_than_parity() {
    let err = decode("R3U08MPXR6E8", 3, &[0, 1, 2, 3]).unwrap_err();
    assert!(matches!(err, CodecError::Uncorrectable(_)));
}

#[test]
fn test_malformed_shapes() {
    let rs = ReedSolomon32::new(3).unwrap();
    assert!(matches!(rs.decode(&[0; 3], &[]), Err(CodecError::MalformedInput(_))));
    assert!(matches!(rs.decode(&[0; 32], &[]), Err(CodecError::MalformedInput(_))));
    assert!(matches!(rs.decode(&[0; 8], &[8]), Err(CodecError::MalformedInput(_))));
    assert!(matches!(rs.decode(&[0, 0, 0, 40], &[]), Err(CodecError::MalformedInput(_))));
}
