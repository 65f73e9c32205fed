#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use super::*;
use crate::value::Matrix;
use mxc_scalar::SyntaxError;
use pretty_assertions::assert_eq;

fn matrix(rows: usize, cols: usize, data: &[f64]) -> Value {
    Value::Matrix(Matrix::from_row_slice(rows, cols, data))
}

#[test]
fn scalar_functions() {
    assert_eq!(
        apply_function(Function::Sind, Value::Scalar(90.0))
            .unwrap()
            .to_string(),
        "1"
    );
    assert_eq!(
        apply_function(Function::Sqrt, Value::Scalar(16.0)).unwrap(),
        Value::Scalar(4.0)
    );
    assert_eq!(
        apply_function(Function::Det, Value::Scalar(7.0)).unwrap(),
        Value::Scalar(7.0)
    );
}

#[test]
fn determinant_of_matrix() {
    let value = apply_function(Function::Det, matrix(2, 2, &[2.0, 0.0, 0.0, 3.0])).unwrap();
    assert_eq!(value.to_string(), "6");
}

#[test]
fn determinant_requires_square() {
    assert!(matches!(
        apply_function(Function::Det, matrix(1, 2, &[1.0, 2.0])),
        Err(SyntaxError::NotSquare { .. })
    ));
}

#[test]
fn elementwise_functions() {
    let value = apply_function(Function::Log, matrix(1, 3, &[1.0, 10.0, 100.0])).unwrap();
    assert_eq!(value.to_string(), "[[0,1,2]]");

    let value = apply_function(Function::Cosd, matrix(1, 2, &[0.0, 90.0])).unwrap();
    assert_eq!(value.to_string(), "[[1,0]]");
}

#[test]
fn roots_act_on_eigenvalues() {
    let Value::Matrix(root) =
        apply_function(Function::Sqrt, matrix(2, 2, &[4.0, 0.0, 0.0, 9.0])).unwrap()
    else {
        panic!("square root of a matrix is a matrix");
    };
    let expected = Matrix::from_row_slice(2, 2, &[2.0, 0.0, 0.0, 3.0]);
    assert!((root - expected).abs().max() < 1e-9);
}

#[test]
fn roots_require_square() {
    assert!(matches!(
        apply_function(Function::Cbrt, matrix(1, 2, &[1.0, 8.0])),
        Err(SyntaxError::NotSquare { .. })
    ));
}
