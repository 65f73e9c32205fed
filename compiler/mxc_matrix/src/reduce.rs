//! Precedence reduction over a flat operand list.
//!
//! Operator `i` sits between operand `i` and operand `i + 1`. Three passes
//! run in precedence order: `^` right to left, then `× ÷ mod` left to right,
//! then `+ -` left to right. Applying an operator stores the result in the
//! nearest live slot on its left and consumes the nearest live slot on its
//! right, so later operators always find their operands by scanning.

use mxc_scalar::{SyntaxError, SyntaxResult};

use crate::ops::{evaluate_binary, BinaryOp, Precedence};
use crate::value::Value;

#[derive(Debug)]
enum Slot {
    Present(Value),
    Consumed,
}

impl Slot {
    fn is_present(&self) -> bool {
        matches!(self, Slot::Present(_))
    }

    fn take(&mut self) -> Option<Value> {
        match std::mem::replace(self, Slot::Consumed) {
            Slot::Present(value) => Some(value),
            Slot::Consumed => None,
        }
    }
}

#[derive(Clone, Copy)]
enum Direction {
    Left,
    Right,
}

/// Index of the nearest live slot on one side of operator `home`.
fn nearest(slots: &[Slot], home: usize, direction: Direction) -> Option<usize> {
    match direction {
        Direction::Left => (0..=home).rev().find(|&i| slots[i].is_present()),
        Direction::Right => (home + 1..slots.len()).find(|&i| slots[i].is_present()),
    }
}

/// Combine operands with operators by precedence.
pub fn reduce(operands: Vec<Value>, operators: &[BinaryOp]) -> SyntaxResult<Value> {
    if operands.len() != operators.len() + 1 {
        return Err(SyntaxError::OperandCount {
            operators: operators.len(),
            operands: operands.len(),
        });
    }

    let mut slots: Vec<Slot> = operands.into_iter().map(Slot::Present).collect();

    for (home, &op) in operators.iter().enumerate().rev() {
        if op.precedence() == Precedence::Power {
            apply(&mut slots, home, op)?;
        }
    }
    for precedence in [Precedence::Multiplicative, Precedence::Additive] {
        for (home, &op) in operators.iter().enumerate() {
            if op.precedence() == precedence {
                apply(&mut slots, home, op)?;
            }
        }
        tracing::trace!(?precedence, live = slots.iter().filter(|s| s.is_present()).count(), "reduced");
    }

    let mut survivors = slots.into_iter().filter_map(|mut slot| slot.take());
    match (survivors.next(), survivors.next()) {
        (Some(value), None) => Ok(value),
        (Some(_), Some(_)) => Err(SyntaxError::Unreduced {
            survivors: 2 + survivors.count(),
        }),
        (None, _) => panic!("reduction of {} operators left no operand", operators.len()),
    }
}

fn apply(slots: &mut [Slot], home: usize, op: BinaryOp) -> SyntaxResult<()> {
    let (Some(left), Some(right)) = (
        nearest(slots, home, Direction::Left),
        nearest(slots, home, Direction::Right),
    ) else {
        panic!("operator {op} at position {home} has no operand on one side");
    };
    let (Some(lhs), Some(rhs)) = (slots[left].take(), slots[right].take()) else {
        panic!("operand slots {left} and {right} were scanned as live");
    };
    slots[left] = Slot::Present(evaluate_binary(lhs, rhs, op)?);
    Ok(())
}
