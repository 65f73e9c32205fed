#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn literal(text: &str) -> Matrix {
    parse(text, &Separators::canonical()).unwrap()
}

fn parse(text: &str, separators: &Separators) -> SyntaxResult<Matrix> {
    parse_matrix(text, separators, &mut |field| Ok(field.to_string()))
}

#[test]
fn split_keeps_empty_pieces() {
    assert_eq!(split_delimited("1][2", ROW_BREAK), vec!["1", "2"]);
    assert_eq!(split_delimited("1][][2", ROW_BREAK), vec!["1", "", "2"]);
    assert_eq!(split_delimited("", ROW_BREAK), vec![""]);
    assert_eq!(split_delimited("a,", ","), vec!["a", ""]);
}

#[test]
fn literal_end_stops_at_first_close() {
    let text = "[[1,2][3,4]]+[[5]]";
    assert_eq!(literal_end(text, 0), Some(12));
    assert_eq!(literal_end(text, 13), Some(text.len()));
    assert_eq!(literal_end("[[1", 0), None);
}

#[test]
fn parses_rows_and_columns() {
    let m = literal("[[1,2,3][4,5,6]]");
    assert_eq!(m.shape(), (2, 3));
    assert_eq!(m[(0, 2)], 3.0);
    assert_eq!(m[(1, 0)], 4.0);
}

#[test]
fn parses_signed_and_fractional_fields() {
    let m = literal("[[-1.5,2e3]]");
    assert_eq!(m[(0, 0)], -1.5);
    assert_eq!(m[(0, 1)], 2000.0);
}

#[test]
fn locale_separator() {
    let separators = Separators::for_decimal_point(',');
    let m = parse("[[1;2][3;4]]", &separators).unwrap();
    assert_eq!(m.shape(), (2, 2));
    assert_eq!(m[(1, 1)], 4.0);
}

#[test]
fn fields_go_through_the_resolver() {
    let mut seen = Vec::new();
    let m = parse_matrix("[[a,b]]", &Separators::canonical(), &mut |field| {
        seen.push(field.to_string());
        Ok(if field == "a" { "1" } else { "2" }.to_string())
    })
    .unwrap();
    assert_eq!(seen, vec!["a", "b"]);
    assert_eq!(print_matrix(&m), "[[1,2]]");
}

#[test]
fn rejects_empty_fields() {
    let canonical = Separators::canonical();
    assert_eq!(parse("[[]]", &canonical), Err(SyntaxError::EmptyField));
    assert_eq!(parse("[[1,]]", &canonical), Err(SyntaxError::EmptyField));
    assert_eq!(parse("[[1][]]", &canonical), Err(SyntaxError::EmptyField));
}

#[test]
fn rejects_jagged_rows() {
    assert_eq!(
        parse("[[1,2][3]]", &Separators::canonical()),
        Err(SyntaxError::JaggedRows {
            expected: 2,
            got: 1
        })
    );
}

#[test]
fn rejects_non_numeric_fields() {
    assert_eq!(
        parse("[[1,x]]", &Separators::canonical()),
        Err(SyntaxError::NonNumericField {
            field: "x".to_string()
        })
    );
}

#[test]
fn rejects_unterminated_literal() {
    assert!(matches!(
        parse("[[1,2]", &Separators::canonical()),
        Err(SyntaxError::MalformedMatrix { .. })
    ));
}

#[test]
fn prints_canonical_form() {
    let m = Matrix::from_row_slice(2, 2, &[1.0, -0.5, 0.0, 1.0e12]);
    assert_eq!(print_matrix(&m), "[[1,-0.5][0,1e12]]");
}

#[test]
fn detects_literals() {
    let canonical = Separators::canonical();
    assert!(is_matrix("[[0]]", &canonical));
    assert!(!is_matrix("0", &canonical));
    assert!(is_matrix("[[0]]+[[1]]", &canonical));
    assert!(is_matrix("2\u{d7}[[-1.5,2][3,\u{2212}4]]", &canonical));
    assert!(is_matrix("[[FF,1A]]", &canonical));
    assert!(!is_matrix("1+2", &canonical));
    assert!(!is_matrix("[1,2]", &canonical));
}

#[test]
fn detection_follows_locale() {
    let comma = Separators::for_decimal_point(',');
    assert!(is_matrix("[[1,5;2]]", &comma));
    assert!(!is_matrix("[[1.5;2]]", &comma));
}

#[test]
fn entries_keep_their_shortest_form() {
    let m = Matrix::from_row_slice(1, 3, &[0.1 + 0.2, 1e-7, 123_456_789.0]);
    let text = print_matrix(&m);
    assert_eq!(text, "[[0.30000000000000004,1e-7,1.23456789e8]]");
    assert_eq!(literal(&text), m);
}

/// Finite doubles that print as themselves rather than snapping to zero.
fn printable_entry() -> impl Strategy<Value = f64> {
    prop::num::f64::NORMAL.prop_filter("snaps to zero", |x| x.abs() >= mxc_scalar::EPSILON_SNAP)
}

proptest! {
    #[test]
    fn print_then_parse_preserves_shape(
        rows in 1usize..4,
        cols in 1usize..4,
        seed in prop::collection::vec(-1000i32..1000, 16),
    ) {
        let data: Vec<f64> = seed.iter().take(rows * cols).map(|&n| f64::from(n) / 4.0).collect();
        let m = Matrix::from_row_slice(rows, cols, &data);
        let back = literal(&print_matrix(&m));
        prop_assert_eq!(back, m);
    }

    #[test]
    fn print_then_parse_is_exact(
        rows in 1usize..4,
        cols in 1usize..4,
        seed in prop::collection::vec(printable_entry(), 16),
    ) {
        let m = Matrix::from_row_slice(rows, cols, &seed[..rows * cols]);
        let back = literal(&print_matrix(&m));
        prop_assert_eq!(back, m);
    }
}
