use super::*;
use pretty_assertions::assert_eq;

#[test]
fn single_operand() {
    let split = split_operators("[[1,2]]");
    assert!(split.is_atom());
    assert_eq!(split.operands, vec!["[[1,2]]"]);
}

#[test]
fn every_operator() {
    let split = split_operators("1+2-3\u{d7}4\u{f7}5^6mod7");
    assert_eq!(split.operands, vec!["1", "2", "3", "4", "5", "6", "7"]);
    assert_eq!(
        split.operators,
        vec![
            BinaryOp::Add,
            BinaryOp::Sub,
            BinaryOp::Mul,
            BinaryOp::Div,
            BinaryOp::Pow,
            BinaryOp::Mod,
        ]
    );
}

#[test]
fn minus_after_digit_or_bracket_is_subtraction() {
    let split = split_operators("[[1]]-2");
    assert_eq!(split.operands, vec!["[[1]]", "2"]);
    assert_eq!(split.operators, vec![BinaryOp::Sub]);
}

#[test]
fn minus_elsewhere_is_a_sign() {
    let split = split_operators("-2\u{d7}-3");
    assert_eq!(split.operands, vec!["-2", "-3"]);
    assert_eq!(split.operators, vec![BinaryOp::Mul]);

    let split = split_operators("2^-1");
    assert_eq!(split.operands, vec!["2", "-1"]);
    assert_eq!(split.operators, vec![BinaryOp::Pow]);
}

#[test]
fn minus_after_a_field_separator_is_a_sign() {
    let split = split_operators("[[1,-2]]");
    assert!(split.is_atom());
}

#[test]
fn minus_after_mod_is_a_sign() {
    let split = split_operators("7mod-2");
    assert_eq!(split.operands, vec!["7", "-2"]);
    assert_eq!(split.operators, vec![BinaryOp::Mod]);
}

#[test]
fn exponent_minus_is_not_split() {
    let split = split_operators("1e-7+1");
    assert_eq!(split.operands, vec!["1e-7", "1"]);
    assert_eq!(split.operators, vec![BinaryOp::Add]);
}

#[test]
fn dangling_operators_leave_empty_operands() {
    let split = split_operators("1+");
    assert_eq!(split.operands, vec!["1", ""]);
}
