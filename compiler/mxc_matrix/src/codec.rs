//! Matrix literal text.
//!
//! A literal is `[[a,b,...][c,d,...]...]`: rows in brackets, fields split by
//! the matrix separator. Parsing is parameterised over [`Separators`] so the
//! top-level pass can read locale literals; every later pass reads and writes
//! the canonical ASCII form produced by [`print_matrix`].

use mxc_scalar::{num_to_string, Separators, SyntaxError, SyntaxResult};
use regex::Regex;

use crate::value::Matrix;

/// Opening of a literal.
pub const LITERAL_OPEN: &str = "[[";

/// Closing of a literal.
pub const LITERAL_CLOSE: &str = "]]";

/// Boundary between two rows.
pub const ROW_BREAK: &str = "][";

/// Split on every occurrence of `delimiter`, keeping empty pieces.
///
/// `"1,,2"` gives three pieces and `""` gives one empty piece, so empty
/// fields survive to be rejected by the caller.
pub fn split_delimited<'a>(text: &'a str, delimiter: &str) -> Vec<&'a str> {
    text.split(delimiter).collect()
}

/// Byte offset just past the literal that starts at `start`.
///
/// Literals cannot nest, so a literal ends at the first `]]`.
pub fn literal_end(text: &str, start: usize) -> Option<usize> {
    let body = start + LITERAL_OPEN.len();
    text.get(body..)?
        .find(LITERAL_CLOSE)
        .map(|offset| body + offset + LITERAL_CLOSE.len())
}

/// Parse a literal, handing every field to `resolve_field` before reading it
/// as a number.
///
/// Fields may themselves be expressions (`[[1+1,2]]`); the callback resolves
/// them to plain numeric text.
pub fn parse_matrix(
    literal: &str,
    separators: &Separators,
    resolve_field: &mut dyn FnMut(&str) -> SyntaxResult<String>,
) -> SyntaxResult<Matrix> {
    let interior = literal
        .strip_prefix(LITERAL_OPEN)
        .and_then(|rest| rest.strip_suffix(LITERAL_CLOSE))
        .ok_or_else(|| SyntaxError::MalformedMatrix {
            literal: literal.to_string(),
        })?;

    let rows = split_delimited(interior, ROW_BREAK);
    let mut cols = None;
    let mut data = Vec::new();
    for row in &rows {
        let fields: Vec<&str> = row.split(separators.matrix).collect();
        match cols {
            None => cols = Some(fields.len()),
            Some(expected) if expected != fields.len() => {
                return Err(SyntaxError::JaggedRows {
                    expected,
                    got: fields.len(),
                });
            }
            Some(_) => {}
        }
        for field in fields {
            if field.is_empty() {
                return Err(SyntaxError::EmptyField);
            }
            let resolved = resolve_field(field)?;
            let value = resolved
                .parse::<f64>()
                .map_err(|_| SyntaxError::NonNumericField {
                    field: field.to_string(),
                })?;
            data.push(value);
        }
    }

    let cols = cols.unwrap_or_default();
    Ok(Matrix::from_row_slice(rows.len(), cols, &data))
}

/// Canonical text of a matrix: `[[a,b][c,d]]` with [`num_to_string`] entries.
pub fn print_matrix(m: &Matrix) -> String {
    let mut out = String::from("[");
    for row in m.row_iter() {
        out.push('[');
        let fields: Vec<String> = row.iter().map(|&x| num_to_string(x)).collect();
        out.push_str(&fields.join(","));
        out.push(']');
    }
    out.push(']');
    out
}

/// Whether `text` contains something shaped like a matrix literal under
/// `separators`.
///
/// Fields are signed decimal or hexadecimal numerals (possibly empty), so the
/// check also accepts input that has not been base-converted yet.
pub fn is_matrix(text: &str, separators: &Separators) -> bool {
    let decimal = regex::escape(&separators.decimal_point.to_string());
    let separator = regex::escape(&separators.matrix.to_string());
    let field = format!(r"[\x{{2212}}\-]?[A-F0-9]*(?:{decimal}[A-F0-9]*)?");
    let pattern = format!(r"\[(?:\[{field}(?:{separator}{field})*\])+\]");
    Regex::new(&pattern).is_ok_and(|re| re.is_match(text))
}

#[cfg(test)]
mod tests;
