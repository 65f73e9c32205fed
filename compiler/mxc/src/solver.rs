//! The calculator facade.
//!
//! Routes each expression to the scalar solver or the matrix evaluator and
//! takes care of everything around evaluation: numeral bases, locale
//! characters, digit grouping and display signs.

use mxc_matrix::MatrixEvaluator;
use mxc_scalar::{
    change_base, clean, convert_to_decimal, dirty, group_digits, ScalarEvaluator, ScalarSolver,
    Separators, SyntaxResult,
};
use mxc_stack::DepthLimit;

use crate::{SolverBuilder, SolverConfig};

/// Evaluates display text to display text.
#[derive(Clone, Copy, Debug, Default)]
pub struct Solver {
    config: SolverConfig,
    scalar: ScalarEvaluator,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Self {
            config,
            scalar: ScalarEvaluator::new(DepthLimit::new(config.max_depth)),
        }
    }

    pub fn builder() -> SolverBuilder {
        SolverBuilder::default()
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// The matrix evaluator, sharing this solver's scalar solver and settings.
    pub fn matrix_module(&self) -> MatrixEvaluator<'_> {
        MatrixEvaluator::new(
            &self.scalar,
            self.config.separators,
            DepthLimit::new(self.config.max_depth),
        )
    }

    /// Whether `text` would take the matrix path.
    pub fn display_contains_matrices(&self, text: &str) -> bool {
        self.matrix_module().is_matrix(text)
    }

    /// Evaluate an expression as typed on the display.
    ///
    /// Numerals are read and written in the configured base. The result uses
    /// the display minus sign and the locale's decimal point.
    #[tracing::instrument(level = "debug", skip(self), err)]
    pub fn solve(&self, text: &str) -> SyntaxResult<String> {
        let base = self.config.base;
        let separators = &self.config.separators;
        let decimal = convert_to_decimal(text, base, separators.decimal_point)?;

        if self.display_contains_matrices(&decimal) {
            tracing::debug!("matrix path");
            let result = self.matrix_module().evaluate(&decimal)?;
            let result = change_base(&result, base)?;
            return Ok(dirty(&localize(&result, separators.matrix, separators)));
        }

        tracing::debug!("scalar path");
        let result = self.scalar.solve(&clean(&decimal, separators))?;
        let mut result = change_base(&result, base)?;
        if self.config.group_digits {
            result = group_digits(&result, base, &Separators::canonical());
        }
        Ok(dirty(&localize(&result, separators.grouping, separators)))
    }
}

/// Swap canonical `.` and `,` for the locale's characters in one pass.
///
/// `,` is a matrix separator in matrix results and a grouping separator in
/// scalar results; `comma` says which locale character replaces it.
fn localize(text: &str, comma: char, separators: &Separators) -> String {
    if separators.is_canonical() {
        return text.to_string();
    }
    text.chars()
        .map(|c| match c {
            '.' => separators.decimal_point,
            ',' => comma,
            c => c,
        })
        .collect()
}

#[cfg(test)]
mod tests;
