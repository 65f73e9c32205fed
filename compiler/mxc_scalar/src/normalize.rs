//! Sign and separator normalization.
//!
//! The display writes negative numbers with U+2212 and may use a locale
//! decimal point. [`clean`] turns display text into the internal ASCII form
//! before any parsing; [`dirty`] turns the final result back into display
//! form. After `clean`, every surviving `-` is a candidate binary minus; the
//! tokenizer decides later which ones are really signs.

use crate::glyph::{DIV, HYPHEN, MINUS, MUL};
use crate::Separators;

/// Convert display text into the internal grammar.
///
/// - U+2212 becomes `-`
/// - whitespace is dropped
/// - ASCII `*` and `/` become `×` and `÷`
/// - for a non-`.` decimal point, grouping characters are dropped and the
///   decimal point becomes `.`
pub fn clean(text: &str, separators: &Separators) -> String {
    let localized = separators.decimal_point != '.';
    text.chars()
        .filter(|c| !c.is_whitespace())
        .filter(|&c| !(localized && c == separators.grouping))
        .map(|c| match c {
            MINUS => HYPHEN,
            '*' => MUL,
            '/' => DIV,
            c if localized && c == separators.decimal_point => '.',
            c => c,
        })
        .collect()
}

/// Convert a final result into display text.
///
/// Lossy: the output is meant for display only and must not be fed back into
/// the matrix evaluator.
pub fn dirty(text: &str) -> String {
    text.replace(HYPHEN, &MINUS.to_string())
}
