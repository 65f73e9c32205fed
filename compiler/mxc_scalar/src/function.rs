//! Named unary functions shared by the scalar solver and the matrix evaluator.

use crate::glyph::{CBRT, SQRT};

/// A recognised unary function.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Function {
    Sqrt,
    Cbrt,
    Sin,
    Cos,
    Tan,
    Sind,
    Cosd,
    Tand,
    Asin,
    Acos,
    Atan,
    Asind,
    Acosd,
    Atand,
    Log,
    Ln,
    Det,
}

/// Spellings in matching order: where one name is a prefix of another the
/// longer one comes first, so a left-to-right scan always takes the longest.
const SPELLINGS: &[(&str, Function)] = &[
    ("\u{221a}", Function::Sqrt),
    ("\u{221b}", Function::Cbrt),
    ("cbrt", Function::Cbrt),
    ("log", Function::Log),
    ("ln", Function::Ln),
    ("asind", Function::Asind),
    ("acosd", Function::Acosd),
    ("atand", Function::Atand),
    ("asin", Function::Asin),
    ("acos", Function::Acos),
    ("atan", Function::Atan),
    ("sind", Function::Sind),
    ("cosd", Function::Cosd),
    ("tand", Function::Tand),
    ("sin", Function::Sin),
    ("cos", Function::Cos),
    ("tan", Function::Tan),
    ("det", Function::Det),
];

impl Function {
    pub fn from_name(name: &str) -> Option<Self> {
        SPELLINGS
            .iter()
            .find(|(spelling, _)| *spelling == name)
            .map(|&(_, function)| function)
    }

    /// The longest function name that `text` starts with, and its byte length.
    pub fn match_prefix(text: &str) -> Option<(Self, usize)> {
        SPELLINGS
            .iter()
            .find(|(spelling, _)| text.starts_with(spelling))
            .map(|&(spelling, function)| (function, spelling.len()))
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Sqrt => "\u{221a}",
            Self::Cbrt => "\u{221b}",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Sind => "sind",
            Self::Cosd => "cosd",
            Self::Tand => "tand",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Asind => "asind",
            Self::Acosd => "acosd",
            Self::Atand => "atand",
            Self::Log => "log",
            Self::Ln => "ln",
            Self::Det => "det",
        }
    }

    /// Whether `c` is a single-glyph function (`√`, `∛`).
    pub fn is_glyph(c: char) -> bool {
        c == SQRT || c == CBRT
    }

    /// Apply the function to one scalar.
    ///
    /// Degree variants convert before the forward functions and after the
    /// inverse ones. The determinant of a scalar is the scalar itself.
    pub fn apply_scalar(self, x: f64) -> f64 {
        match self {
            Self::Sqrt => x.sqrt(),
            Self::Cbrt => x.cbrt(),
            Self::Sin => x.sin(),
            Self::Cos => x.cos(),
            Self::Tan => x.tan(),
            Self::Sind => x.to_radians().sin(),
            Self::Cosd => x.to_radians().cos(),
            Self::Tand => x.to_radians().tan(),
            Self::Asin => x.asin(),
            Self::Acos => x.acos(),
            Self::Atan => x.atan(),
            Self::Asind => x.asin().to_degrees(),
            Self::Acosd => x.acos().to_degrees(),
            Self::Atand => x.atan().to_degrees(),
            Self::Log => x.log10(),
            Self::Ln => x.ln(),
            Self::Det => x,
        }
    }
}

#[cfg(test)]
mod tests;
