#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use super::*;
use pretty_assertions::assert_eq;

fn solve(text: &str) -> SyntaxResult<String> {
    ScalarEvaluator::default().solve(text)
}

#[test]
fn addition() {
    assert_eq!(solve("1+2").unwrap(), "3");
}

#[test]
fn degree_trig() {
    assert_eq!(solve("sind(90)").unwrap(), "1");
    assert_eq!(solve("cosd90").unwrap(), "0");
}

#[test]
fn precedence_and_associativity() {
    assert_eq!(solve("2+3\u{d7}4").unwrap(), "14");
    assert_eq!(solve("10-4-3").unwrap(), "3");
    assert_eq!(solve("2^3^2").unwrap(), "512");
    assert_eq!(solve("-2^2").unwrap(), "-4");
    assert_eq!(solve("2^-1").unwrap(), "0.5");
}

#[test]
fn postfix_operators() {
    assert_eq!(solve("5!").unwrap(), "120");
    assert_eq!(solve("50%").unwrap(), "0.5");
    assert_eq!(solve("(2.5)!"), Err(SyntaxError::NotANumber));
}

#[test]
fn implicit_multiplication() {
    assert_eq!(solve("2(3+4)").unwrap(), "14");
    assert_eq!(solve("2\u{221a}9").unwrap(), "6");
}

#[test]
fn constants() {
    assert_eq!(solve("ln(e)").unwrap(), "1");
    assert_eq!(solve("cos\u{3c0}").unwrap(), "-1");
    assert_eq!(solve("1\u{f7}0").unwrap(), "Infinity");
}

#[test]
fn remainder() {
    assert_eq!(solve("7mod3").unwrap(), "1");
    assert_eq!(solve("-7mod3").unwrap(), "-1");
}

#[test]
fn one_missing_close_paren_is_tolerated() {
    assert_eq!(solve("(1+2").unwrap(), "3");
    assert_eq!(solve("((1+2"), Err(SyntaxError::UnbalancedParens));
}

#[test]
fn malformed_input() {
    assert_eq!(solve("1+"), Err(SyntaxError::UnexpectedEnd));
    assert_eq!(solve("1)"), Err(SyntaxError::unexpected(")", 1)));
    assert_eq!(solve(""), Err(SyntaxError::UnexpectedEnd));
    assert_eq!(solve("\u{221a}-1"), Err(SyntaxError::NotANumber));
}

#[test]
fn nesting_limit() {
    let solver = ScalarEvaluator::new(DepthLimit::new(3));
    assert_eq!(solver.solve("((1))").unwrap(), "1");
    assert_eq!(
        solver.solve("((((1))))"),
        Err(SyntaxError::NestingTooDeep { limit: 3 })
    );
}
