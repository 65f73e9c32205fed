//! Integer factorials.
//!
//! The product is accumulated exactly in a `u128` while it fits (up to `34!`)
//! and continued in `f64` beyond that; anything past `170!` overflows.

use crate::format::num_to_string;
use crate::{SyntaxError, SyntaxResult};

/// Largest `n` whose factorial is finite as an `f64`.
const MAX_FLOAT_FACTORIAL: u64 = 170;

/// `n!` as an exact integer, if it fits in 128 bits.
fn exact_factorial(n: u64) -> Option<u128> {
    (2..=u128::from(n)).try_fold(1_u128, u128::checked_mul)
}

/// `n!` as a double.
pub fn factorial(n: u64) -> SyntaxResult<f64> {
    if let Some(exact) = exact_factorial(n) {
        return Ok(exact as f64);
    }
    if n > MAX_FLOAT_FACTORIAL {
        return Err(SyntaxError::FactorialOverflow {
            operand: n.to_string(),
        });
    }
    Ok((2..=n).fold(1.0, |acc, k| acc * k as f64))
}

/// `n!` as decimal text, exact whenever the product fits in 128 bits.
pub fn factorial_text(n: u64) -> SyntaxResult<String> {
    match exact_factorial(n) {
        Some(exact) => Ok(exact.to_string()),
        None => factorial(n).map(num_to_string),
    }
}

#[cfg(test)]
mod tests;
