//! Operand values.

use std::fmt;

use mxc_scalar::num_to_string;
use nalgebra::DMatrix;

use crate::codec::print_matrix;

/// Dense real matrix, row-major in text, column-major in memory.
pub type Matrix = DMatrix<f64>;

/// A fully evaluated operand.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Scalar(f64),
    Matrix(Matrix),
}

impl Value {
    /// Short name of the operand kind, for logs and error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Scalar(_) => "scalar",
            Value::Matrix(_) => "matrix",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Scalar(x) => f.write_str(&num_to_string(*x)),
            Value::Matrix(m) => f.write_str(&print_matrix(m)),
        }
    }
}
