//! The scalar solver seam.
//!
//! The matrix evaluator hands every operand that is not a matrix literal to a
//! [`ScalarSolver`]. [`ScalarEvaluator`] is the built-in implementation.

use mxc_stack::DepthLimit;

use crate::format::num_to_string;
use crate::lexer::tokenize;
use crate::parser::Parser;
use crate::{SyntaxError, SyntaxResult};

/// Evaluates expressions that contain no matrices.
pub trait ScalarSolver {
    /// Evaluate `text` to a number.
    fn evaluate(&self, text: &str) -> SyntaxResult<f64>;

    /// Evaluate `text` and render the result canonically.
    fn solve(&self, text: &str) -> SyntaxResult<String> {
        self.evaluate(text).map(num_to_string)
    }
}

/// Recursive-descent scalar solver.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScalarEvaluator {
    limit: DepthLimit,
}

impl ScalarEvaluator {
    pub fn new(limit: DepthLimit) -> Self {
        Self { limit }
    }
}

impl ScalarSolver for ScalarEvaluator {
    fn evaluate(&self, text: &str) -> SyntaxResult<f64> {
        let tokens = tokenize(text)?;
        let value = Parser::new(text, &tokens, self.limit).parse()?;
        if value.is_nan() {
            tracing::debug!(%text, "scalar expression evaluated to NaN");
            return Err(SyntaxError::NotANumber);
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests;
