//! Numeral bases: converting input to decimal, results out of decimal, and
//! digit grouping for display.
//!
//! Evaluation always happens in decimal. A calculator set to binary or hex
//! converts its input with [`convert_to_decimal`] first and renders the final
//! result with [`change_base`].

use crate::{Separators, SyntaxError, SyntaxResult};

/// Fractional digits produced when rendering in a non-decimal base.
const FRACTION_DIGITS: usize = 12;

const DIGITS: &[u8; 16] = b"0123456789ABCDEF";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Base {
    Binary,
    #[default]
    Decimal,
    Hexadecimal,
}

impl Base {
    pub const fn radix(self) -> u32 {
        match self {
            Self::Binary => 2,
            Self::Decimal => 10,
            Self::Hexadecimal => 16,
        }
    }

    /// Digits between group separators: `1,234,567`, `1010 1010`, `0F 1F`.
    pub const fn grouping_distance(self) -> usize {
        match self {
            Self::Binary => 4,
            Self::Decimal => 3,
            Self::Hexadecimal => 2,
        }
    }

    pub const fn separator(self, separators: &Separators) -> char {
        match self {
            Self::Binary => separators.binary,
            Self::Decimal => separators.grouping,
            Self::Hexadecimal => separators.hexadecimal,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "bin" | "binary" | "2" => Some(Self::Binary),
            "dec" | "decimal" | "10" => Some(Self::Decimal),
            "hex" | "hexadecimal" | "16" => Some(Self::Hexadecimal),
            _ => None,
        }
    }
}

fn is_numeral_char(c: char) -> bool {
    c.is_ascii_digit() || ('A'..='F').contains(&c)
}

fn digit_value(c: char, radix: u32) -> SyntaxResult<u32> {
    c.to_digit(16)
        .filter(|&d| d < radix)
        .ok_or(SyntaxError::InvalidDigit { digit: c, radix })
}

/// Rewrite every numeral written in `base` as decimal text.
///
/// Fractions are recognised at `decimal_point`, and converted numerals are
/// written back with it so the locale cleaning pass still reads them.
pub fn convert_to_decimal(text: &str, base: Base, decimal_point: char) -> SyntaxResult<String> {
    if base == Base::Decimal {
        return Ok(text.to_string());
    }
    let radix = base.radix();
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < chars.len() {
        if !is_numeral_char(chars[i]) {
            out.push(chars[i]);
            i += 1;
            continue;
        }

        let mut value = 0.0_f64;
        while i < chars.len() && is_numeral_char(chars[i]) {
            value = value * f64::from(radix) + f64::from(digit_value(chars[i], radix)?);
            i += 1;
        }
        if i + 1 < chars.len() && chars[i] == decimal_point && is_numeral_char(chars[i + 1]) {
            i += 1;
            let mut scale = 1.0 / f64::from(radix);
            while i < chars.len() && is_numeral_char(chars[i]) {
                value += f64::from(digit_value(chars[i], radix)?) * scale;
                scale /= f64::from(radix);
                i += 1;
            }
        }
        out.extend(value.to_string().chars().map(|c| if c == '.' { decimal_point } else { c }));
    }
    Ok(out)
}

/// Render a non-negative finite value in `radix`.
fn render_in_radix(value: f64, radix: u32) -> String {
    let radix_f = f64::from(radix);
    let mut whole = value.trunc();
    let mut fraction = value - whole;

    let mut int_digits = Vec::new();
    if whole < 1.0 {
        int_digits.push(b'0');
    }
    while whole >= 1.0 {
        let digit = (whole % radix_f) as usize;
        int_digits.push(DIGITS[digit]);
        whole = (whole / radix_f).trunc();
    }
    int_digits.reverse();
    let mut rendered: String = int_digits.into_iter().map(char::from).collect();

    let mut frac_digits = String::new();
    for _ in 0..FRACTION_DIGITS {
        if fraction <= 0.0 {
            break;
        }
        fraction *= radix_f;
        let digit = fraction.trunc();
        frac_digits.push(char::from(DIGITS[digit as usize]));
        fraction -= digit;
    }
    let frac_digits = frac_digits.trim_end_matches('0');
    if !frac_digits.is_empty() {
        rendered.push('.');
        rendered.push_str(frac_digits);
    }
    rendered
}

/// Length of the decimal numeral (digits, fraction, exponent) starting at `start`.
fn decimal_numeral_len(chars: &[char], start: usize) -> usize {
    let mut i = start;
    while i < chars.len() && chars[i].is_ascii_digit() {
        i += 1;
    }
    if i + 1 < chars.len() && chars[i] == '.' && chars[i + 1].is_ascii_digit() {
        i += 1;
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }
    }
    if i < chars.len() && chars[i] == 'e' {
        let mut j = i + 1;
        if j < chars.len() && chars[j] == '-' {
            j += 1;
        }
        if j < chars.len() && chars[j].is_ascii_digit() {
            while j < chars.len() && chars[j].is_ascii_digit() {
                j += 1;
            }
            i = j;
        }
    }
    i - start
}

/// Rewrite every decimal numeral in a result as a numeral in `base`.
///
/// Signs stay where they are (they are never part of the numeral), so both
/// internal and display minus signs survive unchanged.
pub fn change_base(text: &str, base: Base) -> SyntaxResult<String> {
    if base == Base::Decimal {
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
        let len = decimal_numeral_len(&chars, i);
        let numeral: String = chars[i..i + len].iter().collect();
        let value: f64 = numeral
            .parse()
            .map_err(|_| SyntaxError::unexpected(numeral.clone(), i))?;
        out.push_str(&render_in_radix(value, base.radix()));
        i += len;
    }
    Ok(out)
}

/// Insert the base's separator into the integer part of every numeral.
pub fn group_digits(text: &str, base: Base, separators: &Separators) -> String {
    let separator = base.separator(separators);
    let distance = base.grouping_distance();
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() * 2);
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if !is_numeral_char(c) {
            out.push(c);
            i += 1;
            // Digits after a point or an exponent marker are not grouped.
            if c == '.' || c == 'e' {
                while i < chars.len() && (is_numeral_char(chars[i]) || chars[i] == '-') {
                    out.push(chars[i]);
                    i += 1;
                }
            }
            continue;
        }
        let start = i;
        while i < chars.len() && is_numeral_char(chars[i]) {
            i += 1;
        }
        let run = &chars[start..i];
        for (k, digit) in run.iter().enumerate() {
            if k > 0 && (run.len() - k) % distance == 0 {
                out.push(separator);
            }
            out.push(*digit);
        }
    }
    out
}
