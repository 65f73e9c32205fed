//! The recursive structural resolver.
//!
//! Text is rewritten pass by pass until nothing but operands and binary
//! operators is left, then handed to the precedence reducer. Every pass
//! works on canonical internal text: ASCII `-`, `.` decimals and literals
//! printed by [`print_matrix`]. Sub-expressions (parenthesised groups and
//! matrix fields) recurse one level deeper and come back as canonical text.

use mxc_scalar::glyph::{
    E_EXPANSION, FACTORIAL, INVERSE_SUFFIX, LEFT_PAREN, MUL, NAN_TEXT, PERCENT, PI, PI_EXPANSION,
    RIGHT_PAREN,
};
use mxc_scalar::{clean, factorial_text, Function, ScalarSolver, Separators, SyntaxError, SyntaxResult};
use mxc_stack::{ensure_sufficient_stack, DepthLimit};

use crate::codec::{self, literal_end, print_matrix, LITERAL_CLOSE, LITERAL_OPEN};
use crate::functions::apply_function;
use crate::linalg::pseudo_inverse;
use crate::reduce::reduce;
use crate::tokenize::split_operators;
use crate::value::{Matrix, Value};

/// Postfix transpose of the literal before it.
const TRANSPOSE_SUFFIX: &str = "^T";

/// Percent becomes a multiplication by this factor.
const PERCENT_FACTOR: &str = "\u{d7}0.01";

/// Evaluates expressions that contain matrix literals.
///
/// Scalar operands are delegated to the [`ScalarSolver`]; everything that
/// touches a matrix is resolved here.
pub struct MatrixEvaluator<'s> {
    solver: &'s dyn ScalarSolver,
    separators: Separators,
    limit: DepthLimit,
}

impl<'s> MatrixEvaluator<'s> {
    pub fn new(solver: &'s dyn ScalarSolver, separators: Separators, limit: DepthLimit) -> Self {
        Self {
            solver,
            separators,
            limit,
        }
    }

    pub fn separators(&self) -> &Separators {
        &self.separators
    }

    /// Whether `text` contains a matrix literal under this evaluator's separators.
    pub fn is_matrix(&self, text: &str) -> bool {
        codec::is_matrix(text, &self.separators)
    }

    /// Evaluate display text to a canonical result: a number or a literal.
    ///
    /// The text is cleaned first; locale literals are read once with this
    /// evaluator's separators and every later pass sees canonical literals.
    /// The result uses ASCII `-` and is meant for `dirty` before display.
    #[tracing::instrument(level = "debug", skip(self), ret, err)]
    pub fn evaluate(&self, text: &str) -> SyntaxResult<String> {
        let cleaned = clean(text, &self.separators);
        let canonical = self.instantiate_literals(&cleaned, &self.separators, 0)?;
        let resolved = self.resolve(&canonical, 0)?;
        let result = self.operand_value(&resolved, 0)?.to_string();
        if result.contains(NAN_TEXT) {
            return Err(SyntaxError::NotANumber);
        }
        Ok(result)
    }

    fn resolve(&self, text: &str, depth: usize) -> SyntaxResult<String> {
        if !self.limit.allows(depth) {
            return Err(SyntaxError::NestingTooDeep {
                limit: self.limit.max(),
            });
        }
        ensure_sufficient_stack(|| self.resolve_inner(text, depth))
    }

    #[tracing::instrument(level = "trace", skip(self))]
    fn resolve_inner(&self, text: &str, depth: usize) -> SyntaxResult<String> {
        let text = self.instantiate_literals(text, &Separators::canonical(), depth)?;
        let text = rewrite_percentages(&text);
        let text = rewrite_factorials(&text)?;
        let text = balance_parens(text)?;
        let text = self.resolve_parens(text, depth)?;
        let text = self.resolve_postfix(text, TRANSPOSE_SUFFIX, "transpose", depth, |m| {
            Ok(m.transpose())
        })?;
        let text = self.resolve_postfix(text, INVERSE_SUFFIX, "inverse", depth, pseudo_inverse)?;
        let text = self.resolve_functions(text, depth)?;
        let text = substitute_constants(&text);

        let split = split_operators(&text);
        if split.is_atom() {
            return Ok(text.clone());
        }
        tracing::debug!(%text, operators = split.operators.len(), "reducing");
        let operands = split
            .operands
            .iter()
            .map(|operand| self.operand_value(operand, depth))
            .collect::<SyntaxResult<Vec<_>>>()?;
        reduce(operands, &split.operators).map(|value| value.to_string())
    }

    /// A single operand: a canonical literal or scalar text.
    fn operand_value(&self, text: &str, depth: usize) -> SyntaxResult<Value> {
        if text.starts_with(LITERAL_OPEN) {
            self.parse_literal(text, &Separators::canonical(), depth)
                .map(Value::Matrix)
        } else {
            self.solver.evaluate(text).map(Value::Scalar)
        }
    }

    fn parse_literal(
        &self,
        literal: &str,
        separators: &Separators,
        depth: usize,
    ) -> SyntaxResult<Matrix> {
        codec::parse_matrix(literal, separators, &mut |field| self.resolve(field, depth + 1))
    }

    /// Re-print every literal in canonical form, resolving its fields.
    fn instantiate_literals(
        &self,
        text: &str,
        separators: &Separators,
        depth: usize,
    ) -> SyntaxResult<String> {
        if !text.contains(LITERAL_OPEN) {
            return Ok(text.to_string());
        }
        let mut out = String::with_capacity(text.len());
        let mut rest = text;
        while let Some(start) = rest.find(LITERAL_OPEN) {
            let end = literal_end(rest, start).ok_or_else(|| SyntaxError::MalformedMatrix {
                literal: rest[start..].to_string(),
            })?;
            out.push_str(&rest[..start]);
            let matrix = self.parse_literal(&rest[start..end], separators, depth)?;
            out.push_str(&print_matrix(&matrix));
            rest = &rest[end..];
        }
        out.push_str(rest);
        Ok(out)
    }

    /// Replace innermost parenthesised groups with their values until none remain.
    fn resolve_parens(&self, mut text: String, depth: usize) -> SyntaxResult<String> {
        while text.contains(LEFT_PAREN) {
            let mut out = String::with_capacity(text.len());
            let mut rest = text.as_str();
            let mut replaced = false;
            while let Some(open) = rest.find(LEFT_PAREN) {
                let body = &rest[open + 1..];
                let Some(next) = body.find([LEFT_PAREN, RIGHT_PAREN]) else {
                    break;
                };
                if body[next..].starts_with(LEFT_PAREN) {
                    // Not innermost; keep the `(` and look further right.
                    out.push_str(&rest[..=open]);
                    rest = body;
                    continue;
                }
                let inner = &body[..next];
                if inner.is_empty() {
                    return Err(SyntaxError::EmptyParens);
                }
                out.push_str(&rest[..open]);
                out.push_str(&self.resolve(inner, depth + 1)?);
                rest = &body[next + 1..];
                replaced = true;
            }
            out.push_str(rest);
            if !replaced {
                return Err(SyntaxError::UnbalancedParens);
            }
            text = out;
        }
        Ok(text)
    }

    /// Apply a postfix matrix operator to the literal directly before each
    /// occurrence of `suffix`.
    fn resolve_postfix(
        &self,
        mut text: String,
        suffix: &str,
        operator: &'static str,
        depth: usize,
        transform: impl Fn(&Matrix) -> SyntaxResult<Matrix>,
    ) -> SyntaxResult<String> {
        while let Some(at) = text.find(suffix) {
            let head = &text[..at];
            let start = head
                .ends_with(LITERAL_CLOSE)
                .then(|| head.rfind(LITERAL_OPEN))
                .flatten()
                .ok_or(SyntaxError::DanglingPostfix { operator })?;
            let matrix = self.parse_literal(&text[start..at], &Separators::canonical(), depth)?;
            let rendered = print_matrix(&transform(&matrix)?);
            tracing::trace!(operator, %rendered, "postfix");
            text.replace_range(start..at + suffix.len(), &rendered);
        }
        Ok(text)
    }

    /// Evaluate function applications whose argument is a literal or a signed number.
    fn resolve_functions(&self, mut text: String, depth: usize) -> SyntaxResult<String> {
        while let Some(application) = find_application(&text) {
            let argument = &text[application.argument.clone()];
            let operand = if argument.starts_with(LITERAL_OPEN) {
                Value::Matrix(self.parse_literal(argument, &Separators::canonical(), depth)?)
            } else {
                let x = argument.parse::<f64>().map_err(|_| SyntaxError::NonNumericField {
                    field: argument.to_string(),
                })?;
                Value::Scalar(x)
            };
            let mut rendered = apply_function(application.function, operand)?.to_string();
            if rendered.contains(NAN_TEXT) {
                tracing::debug!(function = application.function.name(), "function produced NaN");
                return Err(SyntaxError::NotANumber);
            }
            // `2sin30` is an implicit product.
            if text[..application.start]
                .chars()
                .next_back()
                .is_some_and(|c| c.is_ascii_digit() || c == ']')
            {
                rendered.insert(0, MUL);
            }
            text.replace_range(application.start..application.argument.end, &rendered);
        }
        Ok(text)
    }
}

/// A function name followed directly by its argument.
struct Application {
    function: Function,
    start: usize,
    argument: std::ops::Range<usize>,
}

fn find_application(text: &str) -> Option<Application> {
    text.char_indices().find_map(|(start, _)| {
        let (function, len) = Function::match_prefix(&text[start..])?;
        let from = start + len;
        let end = if text[from..].starts_with(LITERAL_OPEN) {
            literal_end(text, from)?
        } else {
            from + signed_number_len(&text[from..])?
        };
        Some(Application {
            function,
            start,
            argument: from..end,
        })
    })
}

/// Length of a leading `-?digits(.digits)?(e-?digits)?`, if there is one.
fn signed_number_len(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let digits_from = |i: usize| bytes[i..].iter().take_while(|b| b.is_ascii_digit()).count();

    let mut i = usize::from(bytes.first() == Some(&b'-'));
    let whole = digits_from(i);
    if whole == 0 {
        return None;
    }
    i += whole;
    if bytes.get(i) == Some(&b'.') {
        let fraction = digits_from(i + 1);
        if fraction > 0 {
            i += 1 + fraction;
        }
    }
    if bytes.get(i) == Some(&b'e') {
        let sign = usize::from(bytes.get(i + 1) == Some(&b'-'));
        let exponent = digits_from(i + 1 + sign);
        if exponent > 0 {
            i += 1 + sign + exponent;
        }
    }
    Some(i)
}

/// `n%` becomes `n×0.01` when the percent follows a digit and does not
/// precede one.
fn rewrite_percentages(text: &str) -> String {
    if !text.contains(PERCENT) {
        return text.to_string();
    }
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() + 8);
    for (i, &c) in chars.iter().enumerate() {
        let after_digit = i > 0 && chars[i - 1].is_ascii_digit();
        let before_digit = chars.get(i + 1).is_some_and(char::is_ascii_digit);
        if c == PERCENT && after_digit && !before_digit {
            out.push_str(PERCENT_FACTOR);
        } else {
            out.push(c);
        }
    }
    out
}

/// Replace `n!` with the factorial of `n` for whole runs of digits that do
/// not follow a decimal point.
fn rewrite_factorials(text: &str) -> SyntaxResult<String> {
    if !text.contains(FACTORIAL) {
        return Ok(text.to_string());
    }
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < chars.len() {
        if !chars[i].is_ascii_digit() {
            out.push(chars[i]);
            i += 1;
            continue;
        }
        let end = i + chars[i..].iter().take_while(|c| c.is_ascii_digit()).count();
        let run: String = chars[i..end].iter().collect();
        let fractional = i > 0 && chars[i - 1] == '.';
        if chars.get(end) == Some(&FACTORIAL) && !fractional {
            let n = run
                .parse::<u64>()
                .map_err(|_| SyntaxError::FactorialOverflow {
                    operand: run.clone(),
                })?;
            out.push_str(&factorial_text(n)?);
            i = end + 1;
        } else {
            out.push_str(&run);
            i = end;
        }
    }
    Ok(out)
}

/// Close a single missing `)` at the end; any other imbalance is an error.
fn balance_parens(mut text: String) -> SyntaxResult<String> {
    let opens = text.matches(LEFT_PAREN).count();
    let closes = text.matches(RIGHT_PAREN).count();
    if opens == closes + 1 {
        text.push(RIGHT_PAREN);
    } else if opens != closes {
        return Err(SyntaxError::UnbalancedParens);
    }
    Ok(text)
}

/// Spell out `e` and `π`.
///
/// `e` only counts as the constant when no digit touches it, so exponents in
/// numbers such as `1e-7` survive. A digit directly beside a constant is an
/// implicit product.
fn substitute_constants(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    for (i, &c) in chars.iter().enumerate() {
        let digit_before = i > 0 && chars[i - 1].is_ascii_digit();
        let digit_after = chars.get(i + 1).is_some_and(char::is_ascii_digit);
        match c {
            'e' if !digit_before && !digit_after => out.push_str(E_EXPANSION),
            PI => {
                if digit_before {
                    out.push(MUL);
                }
                out.push_str(PI_EXPANSION);
                if digit_after {
                    out.push(MUL);
                }
            }
            c => out.push(c),
        }
    }
    out
}
