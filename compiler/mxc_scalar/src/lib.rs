//! Mxc Scalar - the scalar half of the mxc calculator.
//!
//! Everything that works on plain numbers and text lives here:
//!
//! - [`SyntaxError`]: the single user-facing error type
//! - [`Separators`]: locale-derived grammar characters, passed explicitly
//! - [`clean`] / [`dirty`]: display text to internal text and back
//! - [`num_to_string`]: canonical rendering of doubles
//! - [`Base`], [`convert_to_decimal`], [`change_base`], [`group_digits`]
//! - [`ScalarSolver`] / [`ScalarEvaluator`]: evaluation of matrix-free expressions
//! - [`Function`]: the named unary functions both evaluators understand

mod base;
mod error;
mod factorial;
mod format;
mod function;
pub mod glyph;
mod lexer;
mod locale;
mod normalize;
mod parser;
mod solver;

pub use base::{change_base, convert_to_decimal, group_digits, Base};
pub use error::{SyntaxError, SyntaxResult};
pub use factorial::{factorial, factorial_text};
pub use format::{num_to_string, EPSILON_SNAP};
pub use function::Function;
pub use locale::Separators;
pub use normalize::{clean, dirty};
pub use solver::{ScalarEvaluator, ScalarSolver};
