#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use super::*;
use mxc_scalar::{Base, SyntaxError};
use pretty_assertions::assert_eq;

#[test]
fn localize_is_identity_for_canonical() {
    let canonical = Separators::canonical();
    assert_eq!(localize("[[1.5,2]]", ',', &canonical), "[[1.5,2]]");
}

#[test]
fn localize_swaps_in_one_pass() {
    let comma = Separators::for_decimal_point(',');
    assert_eq!(localize("[[1.5,2]]", comma.matrix, &comma), "[[1,5;2]]");
    assert_eq!(localize("1,234.5", comma.grouping, &comma), "1.234,5");
}

#[test]
fn routes_by_content() {
    let solver = Solver::default();
    assert!(solver.display_contains_matrices("[[0]]+[[1]]"));
    assert!(!solver.display_contains_matrices("1+2"));
    assert_eq!(solver.solve("[[0]]+[[1]]").unwrap(), "[[1]]");
    assert_eq!(solver.solve("1+2").unwrap(), "3");
}

#[test]
fn negative_results_use_display_minus() {
    let solver = Solver::default();
    assert_eq!(solver.solve("1-3").unwrap(), "\u{2212}2");
    assert_eq!(solver.solve("[[1]]-3").unwrap(), "[[\u{2212}2]]");
}

#[test]
fn grouping_applies_to_scalars_only() {
    let solver = Solver::builder().group_digits(true).build();
    assert_eq!(solver.solve("1000\u{d7}1000").unwrap(), "1,000,000");
    assert_eq!(solver.solve("[[1000]]").unwrap(), "[[1000]]");
}

#[test]
fn hexadecimal_round_trip() {
    let solver = Solver::builder().base(Base::Hexadecimal).build();
    assert_eq!(solver.solve("F+1").unwrap(), "10");
    assert_eq!(solver.solve("[[A,1]]+[[1,1]]").unwrap(), "[[B,2]]");
    assert_eq!(
        solver.solve("G+1"),
        Err(SyntaxError::unknown_symbol("G"))
    );
}

#[test]
fn comma_locale() {
    let solver = Solver::builder().locale("de_DE.UTF-8").build();
    assert_eq!(solver.solve("1,5+1").unwrap(), "2,5");
    assert_eq!(solver.solve("[[1,5;2]]+[[1;1]]").unwrap(), "[[2,5;3]]");
}
