//! Characters with fixed meaning in the expression grammar.
//!
//! Locale-dependent characters (decimal point, separators) are not here; they
//! live in [`Separators`](crate::Separators).

/// Display minus sign (U+2212). ASCII `-` is the internal form.
pub const MINUS: char = '\u{2212}';
pub const HYPHEN: char = '-';
pub const PLUS: char = '+';
pub const MUL: char = '\u{00d7}';
pub const DIV: char = '\u{00f7}';
pub const POWER: char = '^';
pub const PERCENT: char = '%';
pub const FACTORIAL: char = '!';
pub const LEFT_PAREN: char = '(';
pub const RIGHT_PAREN: char = ')';
pub const SQRT: char = '\u{221a}';
pub const CBRT: char = '\u{221b}';
pub const PI: char = '\u{03c0}';
pub const INFINITY: char = '\u{221e}';

/// Postfix inverse as the display writes it: an invisible U+FEFF marker, then `^-1`.
pub const INVERSE_SUFFIX: &str = "\u{feff}^-1";

/// Spelling of infinities produced by number formatting.
pub const INFINITY_TEXT: &str = "Infinity";
pub const NAN_TEXT: &str = "NaN";

/// Fixed-precision expansions substituted for the named constants.
pub const E_EXPANSION: &str = "2.7182818284590452353";
pub const PI_EXPANSION: &str = "3.1415926535897932384626";

/// Keyword for the remainder operator.
pub const MOD_WORD: &str = "mod";
