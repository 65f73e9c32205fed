//! Mxc - a calculator engine that understands matrices.
//!
//! [`Solver`] is the entry point: it takes display text such as
//! `[[1,2][3,4]]^T×2` or `sind(90)`, routes it to the matrix evaluator or the
//! scalar solver, and renders the result in the configured base and locale.
//!
//! ```text
//! let solver = Solver::default();
//! assert_eq!(solver.solve("[[0]]+[[1]]")?, "[[1]]");
//! ```

mod config;
mod solver;

use std::sync::Once;

pub use config::{SolverBuilder, SolverConfig};
pub use mxc_matrix::{is_matrix, MatrixEvaluator, Matrix, Value};
pub use mxc_scalar::{Base, ScalarEvaluator, ScalarSolver, Separators, SyntaxError, SyntaxResult};
pub use solver::Solver;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at program start. Uses `RUST_LOG` env var for filtering.
/// Example: `RUST_LOG=mxc_matrix=trace mxc "[[1,2]]^T"`
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
                .with(filter)
                .init();
        }
    });
}
