//! Solver configuration.

use mxc_scalar::{Base, Separators};
use mxc_stack::DEFAULT_MAX_DEPTH;

use crate::Solver;

/// Everything that changes how a [`Solver`] reads input and writes results.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolverConfig {
    /// Base of numerals in both input and output.
    pub base: Base,
    /// Locale characters of the display.
    pub separators: Separators,
    /// Deepest nesting of groups and matrix fields accepted.
    pub max_depth: usize,
    /// Group the integer digits of scalar results.
    pub group_digits: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            base: Base::Decimal,
            separators: Separators::canonical(),
            max_depth: DEFAULT_MAX_DEPTH,
            group_digits: false,
        }
    }
}

/// Fluent construction of a [`Solver`].
///
/// ```text
/// let solver = Solver::builder().base(Base::Hexadecimal).group_digits(true).build();
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct SolverBuilder {
    config: SolverConfig,
}

impl SolverBuilder {
    #[must_use]
    pub fn base(mut self, base: Base) -> Self {
        self.config.base = base;
        self
    }

    #[must_use]
    pub fn separators(mut self, separators: Separators) -> Self {
        self.config.separators = separators;
        self
    }

    /// Separators for a locale tag such as `de_DE.UTF-8`.
    #[must_use]
    pub fn locale(self, tag: &str) -> Self {
        self.separators(Separators::from_locale(tag))
    }

    #[must_use]
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.config.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn group_digits(mut self, group: bool) -> Self {
        self.config.group_digits = group;
        self
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn build(self) -> Solver {
        Solver::new(self.config)
    }
}
