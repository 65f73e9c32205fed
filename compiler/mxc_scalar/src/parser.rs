//! Precedence-chain parser that evaluates scalar expressions as it parses.
//!
//! Lowest to highest binding:
//!
//! ```text
//! additive        + -                       left
//! multiplicative  × ÷ mod, juxtaposition    left
//! unary           -x +x
//! power           ^                         right, exponent may be signed
//! postfix         ! %
//! primary         number ( expr ) e π ∞ function-application
//! ```

use mxc_stack::{ensure_sufficient_stack, DepthLimit};

use crate::factorial::factorial;
use crate::lexer::{Token, TokenKind};
use crate::{SyntaxError, SyntaxResult};

pub(crate) struct Parser<'a> {
    src: &'a str,
    tokens: &'a [Token],
    pos: usize,
    limit: DepthLimit,
    /// Set once a missing final `)` has been tolerated.
    auto_closed: bool,
}

impl<'a> Parser<'a> {
    /// `tokens` must end with [`TokenKind::Eof`].
    pub(crate) fn new(src: &'a str, tokens: &'a [Token], limit: DepthLimit) -> Self {
        Self {
            src,
            tokens,
            pos: 0,
            limit,
            auto_closed: false,
        }
    }

    /// Parse the whole token stream as one expression.
    pub(crate) fn parse(mut self) -> SyntaxResult<f64> {
        let value = self.parse_expr(0)?;
        match self.current().kind {
            TokenKind::Eof => Ok(value),
            _ => Err(self.unexpected()),
        }
    }

    fn current(&self) -> Token {
        self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn advance(&mut self) {
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
    }

    fn unexpected(&self) -> SyntaxError {
        let token = self.current();
        if token.kind == TokenKind::Eof {
            return SyntaxError::UnexpectedEnd;
        }
        let found = self.src[token.offset..]
            .chars()
            .next()
            .map(String::from)
            .unwrap_or_default();
        SyntaxError::unexpected(found, token.offset)
    }

    /// Parse an expression one nesting level below the caller.
    fn parse_expr(&mut self, depth: usize) -> SyntaxResult<f64> {
        if !self.limit.allows(depth) {
            return Err(SyntaxError::NestingTooDeep {
                limit: self.limit.max(),
            });
        }
        ensure_sufficient_stack(|| self.parse_additive(depth))
    }

    fn parse_additive(&mut self, depth: usize) -> SyntaxResult<f64> {
        let mut left = self.parse_multiplicative(depth)?;
        loop {
            match self.current().kind {
                TokenKind::Plus => {
                    self.advance();
                    left += self.parse_multiplicative(depth)?;
                }
                TokenKind::Minus => {
                    self.advance();
                    left -= self.parse_multiplicative(depth)?;
                }
                _ => return Ok(left),
            }
        }
    }

    fn parse_multiplicative(&mut self, depth: usize) -> SyntaxResult<f64> {
        let mut left = self.parse_unary(depth)?;
        loop {
            match self.current().kind {
                TokenKind::Star => {
                    self.advance();
                    left *= self.parse_unary(depth)?;
                }
                TokenKind::Slash => {
                    self.advance();
                    left /= self.parse_unary(depth)?;
                }
                TokenKind::Mod => {
                    self.advance();
                    left %= self.parse_unary(depth)?;
                }
                kind if kind.starts_implicit_operand() => {
                    left *= self.parse_unary(depth)?;
                }
                _ => return Ok(left),
            }
        }
    }

    fn parse_unary(&mut self, depth: usize) -> SyntaxResult<f64> {
        match self.current().kind {
            TokenKind::Minus => {
                self.advance();
                Ok(-self.parse_unary(depth)?)
            }
            TokenKind::Plus => {
                self.advance();
                self.parse_unary(depth)
            }
            _ => self.parse_power(depth),
        }
    }

    fn parse_power(&mut self, depth: usize) -> SyntaxResult<f64> {
        let base = self.parse_postfix(depth)?;
        if self.current().kind == TokenKind::Caret {
            self.advance();
            // Recursing through unary makes `^` right-associative.
            let exponent = self.parse_unary(depth)?;
            return Ok(base.powf(exponent));
        }
        Ok(base)
    }

    fn parse_postfix(&mut self, depth: usize) -> SyntaxResult<f64> {
        let mut value = self.parse_primary(depth)?;
        loop {
            match self.current().kind {
                TokenKind::Bang => {
                    self.advance();
                    if value < 0.0 || value.fract() != 0.0 {
                        return Err(SyntaxError::NotANumber);
                    }
                    value = factorial(value as u64)?;
                }
                TokenKind::Percent => {
                    self.advance();
                    value /= 100.0;
                }
                _ => return Ok(value),
            }
        }
    }

    fn parse_primary(&mut self, depth: usize) -> SyntaxResult<f64> {
        let token = self.current();
        match token.kind {
            TokenKind::Number(value) => {
                self.advance();
                Ok(value)
            }
            TokenKind::E => {
                self.advance();
                Ok(std::f64::consts::E)
            }
            TokenKind::Pi => {
                self.advance();
                Ok(std::f64::consts::PI)
            }
            TokenKind::Infinity => {
                self.advance();
                Ok(f64::INFINITY)
            }
            TokenKind::LParen => {
                self.advance();
                let value = self.parse_expr(depth + 1)?;
                self.expect_close()?;
                Ok(value)
            }
            TokenKind::Function(function) => {
                self.advance();
                let argument = self.parse_argument(depth + 1)?;
                Ok(function.apply_scalar(argument))
            }
            _ => Err(self.unexpected()),
        }
    }

    fn parse_argument(&mut self, depth: usize) -> SyntaxResult<f64> {
        if !self.limit.allows(depth) {
            return Err(SyntaxError::NestingTooDeep {
                limit: self.limit.max(),
            });
        }
        ensure_sufficient_stack(|| self.parse_unary(depth))
    }

    /// Consume `)`; a single missing one at the very end is tolerated.
    fn expect_close(&mut self) -> SyntaxResult<()> {
        match self.current().kind {
            TokenKind::RParen => {
                self.advance();
                Ok(())
            }
            TokenKind::Eof if !self.auto_closed => {
                self.auto_closed = true;
                Ok(())
            }
            TokenKind::Eof => Err(SyntaxError::UnbalancedParens),
            _ => Err(self.unexpected()),
        }
    }
}
