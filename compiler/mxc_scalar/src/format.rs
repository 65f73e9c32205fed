//! Canonical decimal rendering of results.

use crate::glyph::{INFINITY_TEXT, NAN_TEXT};

/// Magnitudes below this print as `0`, hiding decomposition noise.
pub const EPSILON_SNAP: f64 = 1.0e-10;

/// Plain decimal notation is used for magnitudes in `[1e-3, 1e7)`.
const PLAIN_LOWER: f64 = 1.0e-3;
const PLAIN_UPPER: f64 = 1.0e7;

/// Render a double as the shortest text that parses back to it.
///
/// Values within [`EPSILON_SNAP`] of zero print as `0`. Magnitudes outside
/// `[1e-3, 1e7)` use scientific notation with a lower-case `e`. Whole numbers
/// carry no trailing `.0`.
pub fn num_to_string(value: f64) -> String {
    if value.is_nan() {
        return NAN_TEXT.to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 {
            INFINITY_TEXT.to_string()
        } else {
            format!("-{INFINITY_TEXT}")
        };
    }

    let magnitude = value.abs();
    if magnitude < EPSILON_SNAP {
        return "0".to_string();
    }

    let text = if (PLAIN_LOWER..PLAIN_UPPER).contains(&magnitude) {
        format!("{value}")
    } else {
        format!("{value:e}")
    };
    match text.strip_suffix(".0") {
        Some(trimmed) => trimmed.to_string(),
        None => text,
    }
}
