//! Binary operator implementations for the matrix evaluator.
//!
//! Dispatch is a direct match on the operand kinds, then on the operator.
//! Every pairing not listed is rejected with
//! [`SyntaxError::UnsupportedOperands`].

use std::fmt;

use mxc_scalar::glyph::{DIV, MOD_WORD, MUL, PLUS, POWER};
use mxc_scalar::{SyntaxError, SyntaxResult};

use crate::linalg::{matrix_power, pseudo_inverse};
use crate::value::{Matrix, Value};

/// Binary operators in the order the reducer applies them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Pow,
    Mul,
    Div,
    Mod,
    Add,
    Sub,
}

/// Binding strength, strongest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Power,
    Multiplicative,
    Additive,
}

impl BinaryOp {
    pub fn precedence(self) -> Precedence {
        match self {
            BinaryOp::Pow => Precedence::Power,
            BinaryOp::Mul | BinaryOp::Div | BinaryOp::Mod => Precedence::Multiplicative,
            BinaryOp::Add | BinaryOp::Sub => Precedence::Additive,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BinaryOp::Pow => "exponentiation",
            BinaryOp::Mul => "multiplication",
            BinaryOp::Div => "division",
            BinaryOp::Mod => "modulo",
            BinaryOp::Add => "addition",
            BinaryOp::Sub => "subtraction",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Pow => "^",
            BinaryOp::Mul => "\u{d7}",
            BinaryOp::Div => "\u{f7}",
            BinaryOp::Mod => MOD_WORD,
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
        }
    }

    /// The operator spelled by a single character of internal text.
    ///
    /// `-` is not included: whether it is an operator depends on context.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            POWER => Some(BinaryOp::Pow),
            MUL => Some(BinaryOp::Mul),
            DIV => Some(BinaryOp::Div),
            PLUS => Some(BinaryOp::Add),
            _ => None,
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Evaluate a binary operation on two operands.
pub fn evaluate_binary(left: Value, right: Value, op: BinaryOp) -> SyntaxResult<Value> {
    match (left, right) {
        (Value::Scalar(a), Value::Scalar(b)) => eval_scalar_binary(a, b, op),
        (Value::Matrix(m), Value::Scalar(s)) => eval_matrix_scalar(m, s, op),
        (Value::Scalar(s), Value::Matrix(m)) => eval_scalar_matrix(s, m, op),
        (Value::Matrix(a), Value::Matrix(b)) => eval_matrix_binary(&a, &b, op),
    }
}

fn eval_scalar_binary(a: f64, b: f64, op: BinaryOp) -> SyntaxResult<Value> {
    let result = match op {
        BinaryOp::Pow => a.powf(b),
        BinaryOp::Mul => a * b,
        BinaryOp::Div => a / b,
        BinaryOp::Mod => a % b,
        BinaryOp::Add => a + b,
        BinaryOp::Sub => a - b,
    };
    Ok(Value::Scalar(result))
}

fn eval_matrix_scalar(m: Matrix, s: f64, op: BinaryOp) -> SyntaxResult<Value> {
    match op {
        BinaryOp::Pow => matrix_power(&m, s).map(Value::Matrix),
        BinaryOp::Mul => Ok(Value::Matrix(m * s)),
        BinaryOp::Div => Ok(Value::Matrix(m / s)),
        BinaryOp::Add => Ok(Value::Matrix(m.add_scalar(s))),
        BinaryOp::Sub => Ok(Value::Matrix(m.add_scalar(-s))),
        BinaryOp::Mod => Err(unsupported(op, "a matrix and a scalar")),
    }
}

fn eval_scalar_matrix(s: f64, m: Matrix, op: BinaryOp) -> SyntaxResult<Value> {
    match op {
        // A scalar base with a matrix exponent is read as the matrix raised to the scalar.
        BinaryOp::Pow => matrix_power(&m, s).map(Value::Matrix),
        BinaryOp::Mul => Ok(Value::Matrix(m * s)),
        BinaryOp::Div => Ok(Value::Matrix(pseudo_inverse(&m)? * s)),
        BinaryOp::Add => Ok(Value::Matrix(m.add_scalar(s))),
        BinaryOp::Sub => Ok(Value::Matrix(m.add_scalar(-s))),
        BinaryOp::Mod => Err(unsupported(op, "a scalar and a matrix")),
    }
}

fn eval_matrix_binary(a: &Matrix, b: &Matrix, op: BinaryOp) -> SyntaxResult<Value> {
    match op {
        BinaryOp::Add => {
            check_same_shape(a, b, op)?;
            Ok(Value::Matrix(a + b))
        }
        BinaryOp::Sub => {
            check_same_shape(a, b, op)?;
            Ok(Value::Matrix(a - b))
        }
        BinaryOp::Mul => {
            check_inner_dimensions(a, b, op)?;
            Ok(Value::Matrix(a * b))
        }
        BinaryOp::Div => {
            // A / B is A·B⁺, which needs A and B to have the same column count.
            if a.ncols() != b.ncols() {
                return Err(mismatch(a, b, op));
            }
            Ok(Value::Matrix(a * pseudo_inverse(b)?))
        }
        BinaryOp::Pow | BinaryOp::Mod => Err(unsupported(op, "two matrices")),
    }
}

fn check_same_shape(a: &Matrix, b: &Matrix, op: BinaryOp) -> SyntaxResult<()> {
    if a.shape() == b.shape() {
        Ok(())
    } else {
        Err(mismatch(a, b, op))
    }
}

fn check_inner_dimensions(a: &Matrix, b: &Matrix, op: BinaryOp) -> SyntaxResult<()> {
    if a.ncols() == b.nrows() {
        Ok(())
    } else {
        Err(mismatch(a, b, op))
    }
}

fn mismatch(a: &Matrix, b: &Matrix, op: BinaryOp) -> SyntaxError {
    tracing::debug!(operation = op.name(), left = ?a.shape(), right = ?b.shape(), "dimension mismatch");
    SyntaxError::DimensionMismatch {
        operation: op.name(),
        left_rows: a.nrows(),
        left_cols: a.ncols(),
        right_rows: b.nrows(),
        right_cols: b.ncols(),
    }
}

fn unsupported(op: BinaryOp, operands: &'static str) -> SyntaxError {
    tracing::debug!(operation = op.name(), operands, "rejected operand pair");
    SyntaxError::UnsupportedOperands {
        operation: op.name(),
        operands,
    }
}
