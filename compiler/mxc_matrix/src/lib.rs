//! Mxc Matrix - the matrix half of the mxc calculator.
//!
//! [`MatrixEvaluator`] takes an expression containing matrix literals such as
//! `[[1,2][3,4]]^T×2`, resolves its structure recursively and reduces what is
//! left by operator precedence. Scalars go to a [`ScalarSolver`] supplied by
//! the caller.
//!
//! # Layers
//!
//! - [`codec`]: literal text to [`Matrix`] and back, plus literal detection
//! - [`linalg`]: determinant, pseudo-inverse, powers and eigen-based roots
//! - [`ops`]: binary operator dispatch by operand kind
//! - [`functions`]: named unary functions on operands
//! - [`tokenize`] / [`reduce`]: flat operand/operator lists and their reduction
//! - [`MatrixEvaluator`]: the passes that tie the above together
//!
//! [`ScalarSolver`]: mxc_scalar::ScalarSolver

pub mod codec;
pub mod functions;
pub mod linalg;
pub mod ops;
pub mod reduce;
mod resolver;
pub mod tokenize;
mod value;

pub use codec::{is_matrix, parse_matrix, print_matrix};
pub use functions::apply_function;
pub use ops::{evaluate_binary, BinaryOp, Precedence};
pub use resolver::MatrixEvaluator;
pub use value::{Matrix, Value};
