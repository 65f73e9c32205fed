#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use super::*;

#[test]
fn small_factorials() {
    assert_eq!(factorial_text(0).unwrap(), "1");
    assert_eq!(factorial_text(1).unwrap(), "1");
    assert_eq!(factorial_text(5).unwrap(), "120");
    assert_eq!(factorial(10).unwrap(), 3_628_800.0);
}

#[test]
fn exact_beyond_u64() {
    // 25! does not fit in 64 bits.
    assert_eq!(factorial_text(25).unwrap(), "15511210043330985984000000");
}

#[test]
fn float_range_uses_exponent() {
    assert!(factorial_text(40).unwrap().contains('e'));
    assert!(factorial(170).unwrap().is_finite());
}

#[test]
fn overflow_is_an_error() {
    assert_eq!(
        factorial(171),
        Err(SyntaxError::FactorialOverflow {
            operand: "171".to_string()
        })
    );
}
