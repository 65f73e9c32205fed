//! Unary function dispatch over operand values.

use mxc_scalar::{Function, SyntaxResult};

use crate::linalg::{determinant, spectral_map};
use crate::value::Value;

/// Apply a named function to a scalar or a matrix.
///
/// Scalars go straight to [`Function::apply_scalar`]. On matrices `det`
/// reduces to a scalar, `√` and `∛` act on the eigenvalues, and every other
/// function is applied element by element.
pub fn apply_function(function: Function, operand: Value) -> SyntaxResult<Value> {
    tracing::trace!(function = function.name(), operand = operand.kind_name(), "apply");
    match operand {
        Value::Scalar(x) => Ok(Value::Scalar(function.apply_scalar(x))),
        Value::Matrix(m) => match function {
            Function::Det => determinant(&m).map(Value::Scalar),
            Function::Sqrt => spectral_map("square root", &m, f64::sqrt).map(Value::Matrix),
            Function::Cbrt => spectral_map("cube root", &m, f64::cbrt).map(Value::Matrix),
            _ => Ok(Value::Matrix(m.map(|x| function.apply_scalar(x)))),
        },
    }
}

#[cfg(test)]
mod tests;
