//! Splits a flat expression into operands and binary operators.
//!
//! Runs after every structural pass, so the text holds only matrix literals,
//! plain numbers and operators. `×`, `÷`, `+`, `^` and `mod` always split.
//! `-` splits only directly after a digit or `]`; anywhere else it is the
//! sign of the operand that follows.

use mxc_scalar::glyph::{HYPHEN, MOD_WORD};

use crate::ops::BinaryOp;

/// Operands and the operators between them, both in source order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Split<'a> {
    pub operands: Vec<&'a str>,
    pub operators: Vec<BinaryOp>,
}

impl Split<'_> {
    /// `true` when the text is a single operand.
    pub fn is_atom(&self) -> bool {
        self.operators.is_empty()
    }
}

pub fn split_operators(text: &str) -> Split<'_> {
    let mut split = Split::default();
    let mut start = 0;
    let mut prev: Option<char> = None;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        let found = if text[i..].starts_with(MOD_WORD) {
            Some((BinaryOp::Mod, MOD_WORD.len()))
        } else if c == HYPHEN && prev.is_some_and(|p| p.is_ascii_digit() || p == ']') {
            Some((BinaryOp::Sub, c.len_utf8()))
        } else {
            BinaryOp::from_char(c).map(|op| (op, c.len_utf8()))
        };

        match found {
            Some((op, len)) => {
                split.operands.push(&text[start..i]);
                split.operators.push(op);
                start = i + len;
                while chars.peek().is_some_and(|&(j, _)| j < start) {
                    chars.next();
                }
                prev = text[..start].chars().next_back();
            }
            None => prev = Some(c),
        }
    }
    split.operands.push(&text[start..]);
    split
}

#[cfg(test)]
mod tests;
