//! The single user-facing error type.
//!
//! Every failure an expression can produce is a `SyntaxError`; the variants
//! only record *why* so logs and tests can tell them apart. Display text is a
//! short lower-case message suitable for a calculator's error line.

use thiserror::Error;

/// Result of any evaluation step.
pub type SyntaxResult<T> = Result<T, SyntaxError>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SyntaxError {
    // Matrix literals
    #[error("malformed matrix literal: {literal}")]
    MalformedMatrix { literal: String },
    #[error("matrix literal has an empty field")]
    EmptyField,
    #[error("matrix rows have different lengths ({expected} and {got})")]
    JaggedRows { expected: usize, got: usize },
    #[error("matrix field is not a number: {field}")]
    NonNumericField { field: String },

    // Structure
    #[error("unbalanced parentheses")]
    UnbalancedParens,
    #[error("empty parentheses")]
    EmptyParens,
    #[error("operator count does not match operand count ({operators} operators, {operands} operands)")]
    OperandCount { operators: usize, operands: usize },
    #[error("{survivors} operands left after reduction")]
    Unreduced { survivors: usize },
    #[error("unexpected `{found}` at offset {offset}")]
    UnexpectedToken { found: String, offset: usize },
    #[error("unexpected end of expression")]
    UnexpectedEnd,
    #[error("unknown symbol `{name}`")]
    UnknownSymbol { name: String },
    #[error("`{operator}` must follow a matrix")]
    DanglingPostfix { operator: &'static str },
    #[error("nesting deeper than {limit} levels")]
    NestingTooDeep { limit: usize },

    // Matrix algebra
    #[error("{operation} requires a square matrix, got {rows}x{cols}")]
    NotSquare {
        operation: &'static str,
        rows: usize,
        cols: usize,
    },
    #[error("{operation} of {left_rows}x{left_cols} and {right_rows}x{right_cols} matrices")]
    DimensionMismatch {
        operation: &'static str,
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },
    #[error("{operation} is not defined for {operands}")]
    UnsupportedOperands {
        operation: &'static str,
        operands: &'static str,
    },
    #[error("matrix cannot be diagonalised over the reals")]
    NotDiagonalizable,
    #[error("decomposition failed: {reason}")]
    Decomposition { reason: &'static str },

    // Numeric results
    #[error("result is not a number")]
    NotANumber,
    #[error("factorial of {operand} overflows")]
    FactorialOverflow { operand: String },
    #[error("`{digit}` is not a valid base-{radix} digit")]
    InvalidDigit { digit: char, radix: u32 },
}

impl SyntaxError {
    pub fn unexpected(found: impl Into<String>, offset: usize) -> Self {
        Self::UnexpectedToken {
            found: found.into(),
            offset,
        }
    }

    pub fn unknown_symbol(name: impl Into<String>) -> Self {
        Self::UnknownSymbol { name: name.into() }
    }

    pub fn not_square(operation: &'static str, rows: usize, cols: usize) -> Self {
        Self::NotSquare {
            operation,
            rows,
            cols,
        }
    }
}
