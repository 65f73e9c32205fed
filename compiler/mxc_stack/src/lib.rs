//! Stack safety utilities for recursive evaluation.
//!
//! Both evaluators recurse once per nesting level of the input: the matrix
//! resolver descends into parenthesised sub-expressions and matrix fields, the
//! scalar parser into parentheses and function arguments. Two guards keep that
//! recursion safe:
//!
//! - [`ensure_sufficient_stack`] grows the stack on demand so a permitted
//!   nesting depth never overflows, independent of the host thread's stack size.
//! - [`DepthLimit`] caps the nesting depth itself so adversarial input such as
//!   ten thousand open parentheses is rejected instead of evaluated.
//!
//! # Platform Support
//!
//! - **Native targets**: Uses the `stacker` crate to grow the stack on demand.
//! - **WASM targets**: No-op passthrough (WASM has its own stack management).

/// Minimum stack space to keep available (100KB red zone).
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Nesting depth accepted when the caller does not configure one.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Ensure sufficient stack space is available before executing `f`.
///
/// If the remaining stack is below the red zone threshold, additional stack
/// space is allocated before calling `f`.
///
/// ```text
/// fn resolve(&self, text: &str, depth: usize) -> SyntaxResult<String> {
///     ensure_sufficient_stack(|| self.resolve_inner(text, depth))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly (WASM has its own stack management).
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

/// Upper bound on recursion depth for one evaluation.
///
/// Depth 0 is the top-level expression; every nested sub-expression handed
/// back to the evaluator is one level deeper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DepthLimit {
    max: usize,
}

impl DepthLimit {
    pub const fn new(max: usize) -> Self {
        Self { max }
    }

    #[inline]
    pub const fn max(self) -> usize {
        self.max
    }

    /// Whether an evaluation at `depth` may proceed.
    #[inline]
    pub const fn allows(self, depth: usize) -> bool {
        depth <= self.max
    }
}

impl Default for DepthLimit {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}
