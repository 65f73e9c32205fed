//! Scanner for scalar expressions.
//!
//! Works on cleaned text (ASCII `-` and `.`), but also accepts the display
//! glyphs directly so the solver can be used on raw input.

use crate::function::Function;
use crate::glyph::{DIV, INFINITY, INFINITY_TEXT, MINUS, MOD_WORD, MUL, PI};
use crate::{SyntaxError, SyntaxResult};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TokenKind {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    Mod,
    Caret,
    Percent,
    Bang,
    LParen,
    RParen,
    Function(Function),
    E,
    Pi,
    Infinity,
    Eof,
}

impl TokenKind {
    /// Whether this token can start an implicitly multiplied operand (`2π`, `3(4)`).
    pub fn starts_implicit_operand(self) -> bool {
        matches!(
            self,
            Self::LParen | Self::Function(_) | Self::E | Self::Pi | Self::Infinity
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Byte offset of the token in the scanned text.
    pub offset: usize,
}

struct Lexer<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn peek_nth(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat_digits(&mut self) -> usize {
        let mut count = 0;
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.pos += 1;
            count += 1;
        }
        count
    }

    fn next_token(&mut self) -> SyntaxResult<Token> {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
        let offset = self.pos;
        let Some(c) = self.peek() else {
            return Ok(Token {
                kind: TokenKind::Eof,
                offset,
            });
        };

        let kind = if c.is_ascii_digit() || c == '.' {
            self.number(offset)?
        } else if c.is_ascii_alphabetic() {
            self.word(offset)?
        } else {
            self.bump();
            match c {
                '+' => TokenKind::Plus,
                '-' | MINUS => TokenKind::Minus,
                '*' | MUL => TokenKind::Star,
                '/' | DIV => TokenKind::Slash,
                '^' => TokenKind::Caret,
                '%' => TokenKind::Percent,
                '!' => TokenKind::Bang,
                '(' => TokenKind::LParen,
                ')' => TokenKind::RParen,
                PI => TokenKind::Pi,
                INFINITY => TokenKind::Infinity,
                c if Function::is_glyph(c) => {
                    let function = Function::match_prefix(&self.src[offset..])
                        .map(|(function, _)| function)
                        .ok_or_else(|| SyntaxError::unexpected(c.to_string(), offset))?;
                    TokenKind::Function(function)
                }
                other => return Err(SyntaxError::unexpected(other.to_string(), offset)),
            }
        };
        Ok(Token { kind, offset })
    }

    fn number(&mut self, offset: usize) -> SyntaxResult<TokenKind> {
        let mut digits = self.eat_digits();
        if self.peek() == Some('.') {
            self.pos += 1;
            digits += self.eat_digits();
        }
        if digits == 0 {
            return Err(SyntaxError::unexpected(".", offset));
        }

        // An exponent only when digits follow; a bare `e` is the constant.
        if matches!(self.peek(), Some('e' | 'E')) {
            let signed = matches!(self.peek_nth(1), Some('-' | '+'));
            let first_digit = if signed { self.peek_nth(2) } else { self.peek_nth(1) };
            if first_digit.is_some_and(|c| c.is_ascii_digit()) {
                self.pos += if signed { 2 } else { 1 };
                self.eat_digits();
            }
        }

        let text = &self.src[offset..self.pos];
        text.parse()
            .map(TokenKind::Number)
            .map_err(|_| SyntaxError::unexpected(text, offset))
    }

    fn word(&mut self, offset: usize) -> SyntaxResult<TokenKind> {
        while self.peek().is_some_and(|c| c.is_ascii_alphabetic()) {
            self.bump();
        }
        let word = &self.src[offset..self.pos];
        if let Some(function) = Function::from_name(word) {
            return Ok(TokenKind::Function(function));
        }
        match word {
            "e" => Ok(TokenKind::E),
            MOD_WORD => Ok(TokenKind::Mod),
            INFINITY_TEXT => Ok(TokenKind::Infinity),
            _ => Err(SyntaxError::unknown_symbol(word)),
        }
    }
}

/// Scan `text` into tokens, ending with a single [`TokenKind::Eof`].
pub fn tokenize(text: &str) -> SyntaxResult<Vec<Token>> {
    let mut lexer = Lexer::new(text);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        tokens.push(token);
        if token.kind == TokenKind::Eof {
            return Ok(tokens);
        }
    }
}
