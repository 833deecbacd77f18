//! Galois Field Arithmetic Tests
//!
//! Tests for Galois32 field operations including addition,
//! multiplication, division, powers, and table construction.

use ezpwdrs::reed_solomon::galois::Galois32;
use ezpwdrs::CodecError;

// ============================================================================
// Basic Arithmetic Operations
// ============================================================================

#[test]
fn test_galois32_basic_operations() {
    let a = Galois32::new(5);
    let b = Galois32::new(3);

    // Addition is XOR
    assert_eq!((a + b).value(), 6);
    // Subtraction is the same as addition in GF(2^n)
    assert_eq!((a - b).value(), 6);
}

#[test]
fn test_galois32_identities() {
    for v in 0..32u16 {
        let a = Galois32::new(v);
        assert_eq!(a * Galois32::ONE, a);
        assert_eq!(a * Galois32::ZERO, Galois32::ZERO);
        assert_eq!(a + a, Galois32::ZERO);
    }
}

#[test]
fn test_galois32_multiplication_table_is_closed() {
    for a in 0..32u16 {
        for b in 0..32u16 {
            let product = Galois32::new(a) * Galois32::new(b);
            assert!(product.value() < 32);
            assert_eq!(product, Galois32::new(b) * Galois32::new(a));
        }
    }
}

// ============================================================================
// Division
// ============================================================================

#[test]
fn test_galois32_division_inverts_multiplication() {
    for a in 0..32u16 {
        for b in 1..32u16 {
            let (ga, gb) = (Galois32::new(a), Galois32::new(b));
            assert_eq!((ga * gb).checked_div(gb).unwrap(), ga);
        }
    }
}

#[test]
fn test_division_by_zero_fails() {
    for v in 0..32u16 {
        assert_eq!(
            Galois32::new(v).checked_div(Galois32::ZERO),
            Err(CodecError::DivisionByZero)
        );
    }
    assert_eq!(Galois32::ZERO.inverse(), Err(CodecError::DivisionByZero));
}

// ============================================================================
// Powers and Logarithms
// ============================================================================

#[test]
fn test_primitive_element_generates_field() {
    assert_eq!(Galois32::alpha_pow(0), Galois32::ONE);
    assert_eq!(Galois32::alpha_pow(1).value(), 2);
    assert_eq!(Galois32::alpha_pow(31), Galois32::ONE);
    // x^5 = x^2 + 1 under 0x25
    assert_eq!(Galois32::alpha_pow(5).value(), 0b101);
    assert_eq!(Galois32::alpha_pow(6).value(), 0b1010);
}

#[test]
fn test_log_is_inverse_of_alpha_pow() {
    for k in 0..31 {
        assert_eq!(Galois32::alpha_pow(k).log(), Some(k));
    }
    assert_eq!(Galois32::ZERO.log(), None);
}

#[test]
fn test_pow_matches_repeated_multiplication() {
    let a = Galois32::new(19);
    let mut manual = Galois32::ONE;
    for power in 0..70 {
        assert_eq!(a.pow(power), manual, "power {power}");
        manual *= a;
    }
}
